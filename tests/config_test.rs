use role_forms::utils::validation::Validate;
use role_forms::{
    OutputFormat, RequestContext, RoleFormConfig, RoleFormError, RoleFormVariant, Settings,
    TomlConfig, TwoStageRoleForm,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_drives_rendering() {
    let file = write_config(
        r#"
[form]
variant = "outreach-provider"

[output]
format = "toml"

[logging]
level = "debug"
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let settings = Settings::resolve(None, None, Some(&config));
    assert_eq!(settings.variant, RoleFormVariant::OutreachProvider);
    assert_eq!(settings.format, OutputFormat::Toml);
    assert_eq!(settings.log_level.as_deref(), Some("debug"));

    let supplier = RoleFormConfig::for_variant(settings.variant);
    let edit = TwoStageRoleForm::new(supplier)
        .build_validated(&RequestContext::default())
        .unwrap();
    let rendered = settings.format.render(&edit).unwrap();

    assert!(rendered.contains("template = \"addOutreachProviderRoleToPerson.ftl\""));
    assert!(rendered.contains("options_type = \"HARDCODED_LITERALS\""));
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config(
        r#"
[form]
variant = "outreach-provider"

[logging]
level = "chatty"
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, RoleFormError::InvalidConfigValueError { .. }));
    assert!(err.to_string().contains("logging.level"));
}

#[test]
fn test_missing_form_section_rejected() {
    let file = write_config(
        r#"
[output]
format = "json"
"#,
    );

    assert!(matches!(
        TomlConfig::from_file(file.path()),
        Err(RoleFormError::TomlParseError(_))
    ));
}
