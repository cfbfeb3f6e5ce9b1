//! Conditional block expansion for template content.
//! Recognizes non-nested `{{IF_<FLAG>}}` ... `{{END_IF_<FLAG>}}` marker
//! pairs, multi-line spans allowed. An enabled flag keeps the enclosed text
//! verbatim and drops the markers; a disabled flag drops the whole span.
//! Unmatched markers and markers naming unknown flags stay in the output as
//! plain text.

use crate::config::ScaffoldConfig;
use indexmap::IndexMap;

/// Named boolean flags driving conditional blocks, in declaration order.
#[derive(Debug, Default, Clone)]
pub struct ConditionSet {
    flags: IndexMap<String, bool>,
}

impl ConditionSet {
    pub fn new() -> Self {
        ConditionSet::default()
    }

    pub fn with_flag(mut self, name: &str, enabled: bool) -> Self {
        self.flags.insert(name.to_string(), enabled);
        self
    }

    /// The flags defined by the scaffold configuration. `INCLUDE_WEB` is the
    /// only flag the template bundle uses today.
    pub fn from_config(cfg: &ScaffoldConfig) -> Self {
        ConditionSet::new().with_flag("INCLUDE_WEB", cfg.include_web)
    }
}

/// Expands every conditional block of every flag in `conditions`.
pub fn apply_conditions(input: &str, conditions: &ConditionSet) -> String {
    let mut out = input.to_string();
    for (name, enabled) in &conditions.flags {
        out = expand_flag(&out, name, *enabled);
    }
    out
}

fn expand_flag(input: &str, name: &str, enabled: bool) -> String {
    let open = format!("{{{{IF_{}}}}}", name);
    let close = format!("{{{{END_IF_{}}}}}", name);

    let mut out = input.to_string();
    while let Some(start) = out.find(&open) {
        let body_start = start + open.len();
        let Some(body_len) = out[body_start..].find(&close) else {
            // Unmatched opening marker, keep the rest literally.
            break;
        };
        let body_end = body_start + body_len;
        let span_end = body_end + close.len();
        if enabled {
            out = format!("{}{}{}", &out[..start], &out[body_start..body_end], &out[span_end..]);
        } else {
            out = format!("{}{}", &out[..start], &out[span_end..]);
        }
    }
    out
}
