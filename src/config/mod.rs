pub mod toml_config;

use crate::domain::model::RoleFormVariant;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl OutputFormat {
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
            Self::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: RoleFormVariant,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl Settings {
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve(
        variant: Option<RoleFormVariant>,
        format: Option<OutputFormat>,
        file: Option<&TomlConfig>,
    ) -> Self {
        Self {
            variant: variant
                .or_else(|| file.map(|f| f.form.variant))
                .unwrap_or_default(),
            format: format
                .or_else(|| file.and_then(|f| f.output_format()))
                .unwrap_or_default(),
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "role-forms")]
#[command(about = "Print the edit configuration of a two-stage role form")]
pub struct CliConfig {
    #[arg(long, help = "Role form variant [default: outreach-provider]")]
    pub variant: Option<RoleFormVariant>,

    #[arg(long, value_enum, help = "Output format [default: json]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self, file: Option<&TomlConfig>) -> Settings {
        Settings::resolve(self.variant, self.format, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings.variant, RoleFormVariant::OutreachProvider);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[form]
variant = "outreach-provider"

[output]
format = "toml"

[logging]
level = "warn"
"#,
        )
        .unwrap();

        let from_file = Settings::resolve(None, None, Some(&file));
        assert_eq!(from_file.format, OutputFormat::Toml);
        assert_eq!(from_file.log_level.as_deref(), Some("warn"));

        let overridden = Settings::resolve(None, Some(OutputFormat::Json), Some(&file));
        assert_eq!(overridden.format, OutputFormat::Json);
    }

    #[test]
    fn test_render_formats() {
        #[derive(Serialize)]
        struct Sample {
            name: &'static str,
        }

        let sample = Sample { name: "form" };
        let json = OutputFormat::Json.render(&sample).unwrap();
        assert!(json.contains("\"name\": \"form\""));

        let toml = OutputFormat::Toml.render(&sample).unwrap();
        assert!(toml.contains("name = \"form\""));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        use clap::Parser;

        let cli = CliConfig::try_parse_from([
            "role-forms",
            "--variant",
            "outreach-provider",
            "--format",
            "toml",
        ])
        .unwrap();
        assert_eq!(cli.variant, Some(RoleFormVariant::OutreachProvider));
        assert_eq!(cli.settings(None).format, OutputFormat::Toml);

        assert!(CliConfig::try_parse_from(["role-forms", "--variant", "nope"]).is_err());
    }
}
