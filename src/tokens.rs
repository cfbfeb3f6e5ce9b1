//! Literal token substitution for template content.
//! Tokens are replaced by plain substring search over the whole file, no
//! regular expressions and no parsing of the surrounding text.

use crate::config::ScaffoldConfig;
use crate::constants::{TEMPLATE_MODULE_PATH, TEMPLATE_PROJECT_NAME};
use indexmap::IndexMap;

/// Replaces every occurrence of every key with its value, in map order.
pub fn replace_tokens(input: &str, replacements: &IndexMap<String, String>) -> String {
    let mut out = input.to_string();
    for (key, value) in replacements {
        out = out.replace(key, value);
    }
    out
}

/// Builds the replacement map for a configuration: the placeholder tokens
/// plus the template repository's own identity strings, so generated
/// projects keep no back-reference to the generator.
///
/// The template module path contains the template project name as a
/// substring; it must be inserted (and therefore replaced) first, which
/// keeps the result independent of any other ordering of the keys.
pub fn replacements_from_config(cfg: &ScaffoldConfig) -> IndexMap<String, String> {
    let mut replacements = IndexMap::new();
    replacements.insert("{{PROJECT_NAME}}".to_string(), cfg.project_name.clone());
    replacements.insert("{{MODULE_PATH}}".to_string(), cfg.module_path.clone());
    replacements.insert(TEMPLATE_MODULE_PATH.to_string(), cfg.module_path.clone());
    replacements.insert(TEMPLATE_PROJECT_NAME.to_string(), cfg.project_name.clone());
    replacements
}
