use crate::utils::error::RoleFormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the first-stage "activity type" dropdown gets its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleActivityOptionTypes {
    /// Every class in a class group.
    #[serde(rename = "VCLASSGROUP")]
    VClassGroup,
    /// Subclasses of a single object class.
    #[serde(rename = "CHILD_VCLASSES")]
    ChildVClasses,
    /// A fixed list of IRI/label pairs.
    #[serde(rename = "HARDCODED_LITERALS")]
    HardcodedLiterals,
}

impl RoleActivityOptionTypes {
    pub fn needs_object_class(self) -> bool {
        !matches!(self, Self::HardcodedLiterals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralOption {
    pub uri: String,
    pub label: String,
}

impl LiteralOption {
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: label.into(),
        }
    }

    /// The empty key stands for "nothing selected yet".
    pub fn is_placeholder(&self) -> bool {
        self.uri.is_empty()
    }
}

/// Ordered IRI to label mapping rendered as a dropdown.
///
/// Behaves like a map with insertion order: inserting an existing key
/// replaces its label in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiteralOptionSet {
    options: Vec<LiteralOption>,
}

impl LiteralOptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut set = Self::new();
        for (uri, label) in pairs {
            set.insert(*uri, *label);
        }
        set
    }

    /// Returns the previous label when `uri` was already present.
    pub fn insert(&mut self, uri: impl Into<String>, label: impl Into<String>) -> Option<String> {
        let uri = uri.into();
        let label = label.into();
        match self.options.iter_mut().find(|o| o.uri == uri) {
            Some(existing) => Some(std::mem::replace(&mut existing.label, label)),
            None => {
                self.options.push(LiteralOption { uri, label });
                None
            }
        }
    }

    pub fn get(&self, uri: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.uri == uri)
            .map(|o| o.label.as_str())
    }

    pub fn contains_key(&self, uri: &str) -> bool {
        self.get(uri).is_some()
    }

    pub fn placeholder(&self) -> Option<&LiteralOption> {
        self.options.iter().find(|o| o.is_placeholder())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LiteralOption> {
        self.options.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.uri.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a LiteralOptionSet {
    type Item = &'a LiteralOption;
    type IntoIter = std::slice::Iter<'a, LiteralOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Request data available to the form hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub subject_uri: Option<String>,
    pub predicate_uri: Option<String>,
    pub user: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject_uri: impl Into<String>) -> Self {
        self.subject_uri = Some(subject_uri.into());
        self
    }

    pub fn with_predicate(mut self, predicate_uri: impl Into<String>) -> Self {
        self.predicate_uri = Some(predicate_uri.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Caller-owned edit configuration the two-stage form fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub role_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_type: Option<RoleActivityOptionTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_class_uri: Option<String>,
    pub role_to_activity_predicate: String,
    pub activity_to_role_predicate: String,
    pub show_role_label_field: bool,
    // kept last so TOML output puts the array of tables after plain keys
    pub literal_options: LiteralOptionSet,
}

impl EditConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = Some(template.into());
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

/// Selects which role form configuration to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleFormVariant {
    #[default]
    OutreachProvider,
}

impl RoleFormVariant {
    pub const ALL: &'static [RoleFormVariant] = &[RoleFormVariant::OutreachProvider];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutreachProvider => "outreach-provider",
        }
    }
}

impl fmt::Display for RoleFormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleFormVariant {
    type Err = RoleFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoleFormError::UnknownVariant(s.to_string()))
    }
}
