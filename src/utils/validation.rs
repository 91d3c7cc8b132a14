use crate::domain::model::LiteralOptionSet;
use crate::utils::error::{RoleFormError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts any absolute IRI the `url` parser understands.
pub fn validate_iri(field_name: &str, iri: &str) -> Result<()> {
    if iri.is_empty() {
        return Err(RoleFormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: iri.to_string(),
            reason: "IRI cannot be empty".to_string(),
        });
    }

    if iri.chars().any(char::is_whitespace) {
        return Err(RoleFormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: iri.to_string(),
            reason: "IRI contains whitespace".to_string(),
        });
    }

    match Url::parse(iri) {
        Ok(_) => Ok(()),
        Err(e) => Err(RoleFormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: iri.to_string(),
            reason: format!("Invalid IRI: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RoleFormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RoleFormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Exactly one empty-key placeholder, unique keys, real IRIs and labels.
pub fn validate_literal_options(field_name: &str, options: &LiteralOptionSet) -> Result<()> {
    let placeholders = options.iter().filter(|o| o.is_placeholder()).count();
    if placeholders != 1 {
        return Err(RoleFormError::validation(format!(
            "{}: expected exactly one placeholder option, found {}",
            field_name, placeholders
        )));
    }

    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.uri.as_str()) {
            return Err(RoleFormError::validation(format!(
                "{}: duplicate option key '{}'",
                field_name, option.uri
            )));
        }
        validate_non_empty_string(field_name, &option.label)?;
        if !option.is_placeholder() {
            validate_iri(field_name, &option.uri)?;
        }
    }

    Ok(())
}
