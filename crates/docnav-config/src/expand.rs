//! Environment variable expansion for path values.

use crate::ConfigError;

/// Lookup failure carrying the unset variable name.
struct UnsetVar(String);

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left as is. `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(found) => Ok(Some(found)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", err.cause.0),
    })
}

/// Expand every entry of a list, naming entries `field[index]` in errors.
pub(crate) fn expand_env_list(values: &[String], field: &str) -> Result<Vec<String>, ConfigError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| expand_env(value, &format!("{field}[{index}]")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_prefix() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("DOCNAV_TEST_ROOT", "/srv/site");
        }
        let result = expand_env("${DOCNAV_TEST_ROOT}/docs", "docs.source_dir").unwrap();
        assert_eq!(result, "/srv/site/docs");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("DOCNAV_TEST_UNSET");
        }
        let result = expand_env("${DOCNAV_TEST_UNSET:-content}", "docs.source_dir").unwrap();
        assert_eq!(result, "content");
    }

    #[test]
    fn test_expand_unset_names_field_and_variable() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING");
        }
        let err = expand_env("${DOCNAV_TEST_MISSING}", "docs.source_dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in docs.source_dir: ${DOCNAV_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        let result = expand_env("build/$out", "docs.source_dir").unwrap();
        assert_eq!(result, "build/$out");
    }

    #[test]
    fn test_expand_list_reports_index() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("DOCNAV_TEST_ARCHIVE");
        }
        let values = vec!["a.zip".to_owned(), "${DOCNAV_TEST_ARCHIVE}".to_owned()];

        let err = expand_env_list(&values, "xref.archives").unwrap_err();

        assert!(err.to_string().contains("xref.archives[1]"));
    }
}
