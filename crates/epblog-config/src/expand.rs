//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors if unset) and `${VAR:-default}` (falls back to
//! the default when unset). Literal strings without references pass through
//! unchanged.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in a configuration string.
///
/// `field` names the config field being expanded and is included in the
/// error so the user can locate the offending value.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` if a required variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: err.cause,
        })
}

/// Resolve a single `${...}` reference, honoring `VAR:-default` fallbacks.
fn lookup(name: &str) -> Result<Option<String>, String> {
    if let Some((var, default)) = name.split_once(":-") {
        return match std::env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(Some(default.to_owned())),
        };
    }
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(format!("${{{name}}} not set")),
    }
}
