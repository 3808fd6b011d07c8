//! Placeholder normalization for path patterns.
//!
//! The public API marks placeholders with `%` so that patterns survive shell
//! quoting and YAML without surprises. po4a uses `$` for its variables, so
//! patterns are translated on ingestion:
//!
//! - `%lang`   → `$lang`   (target language)
//! - `%master` → `$master` (master document basename, split mode)
//!
//! The rewrite is purely textual, so `%master_%lang.po` works the same as
//! `%master-%lang.po`. Any other `%` sequence (`100%`, `%x`) is left
//! untouched, and neither placeholder is expanded here: po4a does that when
//! it reads the configuration.

use regex::Regex;
use std::sync::LazyLock;

/// Language placeholder as written by callers.
pub const LANG_PLACEHOLDER: &str = "%lang";

/// Master-basename placeholder as written by callers.
pub const MASTER_PLACEHOLDER: &str = "%master";

/// po4a's language variable.
pub const LANG_VARIABLE: &str = "$lang";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(lang|master)").expect("Invalid placeholder regex"));

static SPLIT_MODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$master").expect("Invalid split mode regex"));

/// Translate caller-facing `%` placeholders into po4a `$` variables.
///
/// Idempotent: a pattern that is already normalized comes back unchanged.
pub fn normalize(pattern: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(pattern, "$$$1").into_owned()
}

/// Returns true if the pattern uses the master-basename placeholder (split mode).
pub fn is_split_mode(pattern: &str) -> bool {
    SPLIT_MODE_REGEX.is_match(&normalize(pattern))
}
