pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod vocab;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{OutputFormat, Settings, TomlConfig};
pub use crate::core::{generator::TwoStageRoleForm, role_form::RoleFormConfig};
pub use domain::model::{
    EditConfiguration, LiteralOption, LiteralOptionSet, RequestContext, RoleActivityOptionTypes,
    RoleFormVariant,
};
pub use domain::ports::RoleFormSupplier;
pub use utils::error::{Result, RoleFormError};
