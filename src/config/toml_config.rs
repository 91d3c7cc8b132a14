use crate::config::OutputFormat;
use crate::domain::model::RoleFormVariant;
use crate::utils::error::{RoleFormError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub form: FormConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub variant: RoleFormVariant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            RoleFormError::validation(format!("env placeholder pattern: {}", e))
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[form]
variant = "outreach-provider"

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.form.variant, RoleFormVariant::OutreachProvider);
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.log_level(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROLE_FORMS_TEST_LEVEL", "debug");

        let toml_content = r#"
[form]
variant = "outreach-provider"

[logging]
level = "${ROLE_FORMS_TEST_LEVEL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("debug"));

        std::env::remove_var("ROLE_FORMS_TEST_LEVEL");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let toml_content = r#"
[form]
variant = "outreach-provider"

[logging]
level = "${ROLE_FORMS_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("${ROLE_FORMS_UNSET_VARIABLE}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_variant_and_format() {
        let unknown_variant = r#"
[form]
variant = "research-role"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(unknown_variant),
            Err(RoleFormError::TomlParseError(_))
        ));

        let unknown_format = r#"
[form]
variant = "outreach-provider"

[output]
format = "xml"
"#;
        assert!(TomlConfig::from_toml_str(unknown_format).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[form]
variant = "outreach-provider"

[output]
format = "toml"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Toml));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/nonexistent/role-forms.toml");
        assert!(matches!(result, Err(RoleFormError::IoError(_))));
    }
}
