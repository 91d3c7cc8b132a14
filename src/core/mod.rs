pub mod generator;
pub mod outreach;
pub mod role_form;

pub use crate::domain::model::{EditConfiguration, LiteralOptionSet, RequestContext};
pub use crate::domain::ports::RoleFormSupplier;
pub use crate::utils::error::Result;
