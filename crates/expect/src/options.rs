//! Presentation options for assertion failures.
//!
//! Options come from the environment by default so a test run can be
//! reconfigured without touching the tests:
//!
//! ```text
//! TESTEXPECT_COLOR=0        # plain messages (also implied by NO_COLOR)
//! TESTEXPECT_FULL_PATH=1    # report the full source path, not the base name
//! ```
//!
//! They also deserialize from any serde format, e.g. a `[testexpect]` table in
//! a project's own test configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const COLOR_VAR: &str = "TESTEXPECT_COLOR";
pub const FULL_PATH_VAR: &str = "TESTEXPECT_FULL_PATH";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Wrap failure messages in ANSI red.
    pub color: bool,
    /// Report the asserting call's full source path instead of its base name.
    pub full_path: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            color: true,
            full_path: false,
        }
    }
}

impl Options {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Options::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Options::default();

        // NO_COLOR disables color when present with any non-empty value.
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            options.color = false;
        }
        if let Some(color) = lookup(COLOR_VAR).and_then(|v| parse_flag(COLOR_VAR, &v)) {
            options.color = color;
        }
        if let Some(full) = lookup(FULL_PATH_VAR).and_then(|v| parse_flag(FULL_PATH_VAR, &v)) {
            options.full_path = full;
        }
        options
    }
}

fn parse_flag(var: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!(target: "testexpect", var, value = raw, "ignoring unrecognized flag value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        assert_eq!(Options::from_lookup(lookup(&[])), Options::default());
    }

    #[test]
    fn no_color_disables_color() {
        let options = Options::from_lookup(lookup(&[("NO_COLOR", "1")]));
        assert!(!options.color);
        let options = Options::from_lookup(lookup(&[("NO_COLOR", "")]));
        assert!(options.color);
    }

    #[test]
    fn explicit_color_flag_wins_over_no_color() {
        let options = Options::from_lookup(lookup(&[("NO_COLOR", "1"), (COLOR_VAR, "on")]));
        assert!(options.color);
    }

    #[test]
    fn flags_accept_common_spellings() {
        let options = Options::from_lookup(lookup(&[(COLOR_VAR, " FALSE "), (FULL_PATH_VAR, "yes")]));
        assert_eq!(
            options,
            Options {
                color: false,
                full_path: true
            }
        );
    }

    #[test]
    fn unrecognized_flag_is_ignored() {
        let options = Options::from_lookup(lookup(&[(FULL_PATH_VAR, "sometimes")]));
        assert!(!options.full_path);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let options: Options = serde_json::from_str(r#"{ "full_path": true }"#).unwrap();
        assert_eq!(
            options,
            Options {
                color: true,
                full_path: true
            }
        );
    }
}
