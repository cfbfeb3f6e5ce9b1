//! Tree rendering for Kickstart.
//! Walks a source tree in stable order, applies the skip predicate and the
//! content transform, strips the template suffix from file names and writes
//! the destination tree. Pre-existing unrelated files in the destination are
//! left alone; any I/O or transform error aborts the walk immediately.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::source::SourceTree;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Content transform applied to template files: `(path, text) -> text`.
pub type Transform<'a> = dyn Fn(&str, &str) -> Result<String> + 'a;

/// Returns true when the file's content is templated and its name carries
/// the `.tmpl` suffix to strip.
pub fn is_template_path(path: &str) -> bool {
    path.ends_with(TEMPLATE_SUFFIX)
}

/// Strips the `.tmpl` suffix from a relative path, if present.
pub fn strip_template_suffix(path: &str) -> &str {
    path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path)
}

fn dest_path(dest: &Path, relative: &str) -> PathBuf {
    let mut out = dest.to_path_buf();
    for part in relative.split('/') {
        out.push(part);
    }
    out
}

/// Renders `source` into `dest`.
///
/// # Arguments
/// * `source` - Read-only template tree
/// * `dest` - Destination root, created on demand
/// * `should_skip` - Combined skip predicate; a skipped directory prunes its
///   entire subtree, a skipped file is omitted alone
/// * `transform` - Content transform for `.tmpl` files; files without the
///   suffix are copied byte-for-byte under their original name
pub fn render_tree(
    source: &dyn SourceTree,
    dest: &Path,
    should_skip: &dyn Fn(&str) -> bool,
    transform: &Transform,
) -> Result<()> {
    let mut pruned: Vec<String> = Vec::new();

    for entry in source.entries()? {
        let path = entry.path();
        if pruned.iter().any(|prefix| path.starts_with(prefix.as_str())) {
            continue;
        }
        if should_skip(path) {
            if entry.is_dir() {
                debug!("Pruning subtree {}", path);
                pruned.push(format!("{}/", path));
            }
            continue;
        }

        if entry.is_dir() {
            fs::create_dir_all(dest_path(dest, path))?;
            continue;
        }

        let out_path = dest_path(dest, strip_template_suffix(path));
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = source.read(path)?;
        if is_template_path(path) {
            let text = String::from_utf8(content).map_err(|_| {
                Error::TemplateError(format!("template file is not valid UTF-8: {}", path))
            })?;
            let rendered = transform(path, &text)?;
            debug!("Writing file {}", out_path.display());
            fs::write(&out_path, rendered)?;
        } else {
            debug!("Copying file {}", out_path.display());
            fs::write(&out_path, content)?;
        }
    }
    Ok(())
}
