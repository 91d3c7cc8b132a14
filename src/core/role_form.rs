use crate::core::outreach;
use crate::domain::model::{
    EditConfiguration, LiteralOptionSet, RequestContext, RoleActivityOptionTypes, RoleFormVariant,
};
use crate::domain::ports::RoleFormSupplier;
use std::sync::OnceLock;

static OUTREACH_PROVIDER: OnceLock<RoleFormConfig> = OnceLock::new();

/// Static configuration for one role form variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFormConfig {
    pub variant: RoleFormVariant,
    pub template: &'static str,
    pub role_type: &'static str,
    pub options_type: RoleActivityOptionTypes,
    pub object_class_uri: Option<&'static str>,
    pub literal_options: &'static [(&'static str, &'static str)],
}

impl RoleFormConfig {
    /// Process-wide configuration for `variant`, built on first use.
    pub fn for_variant(variant: RoleFormVariant) -> &'static RoleFormConfig {
        match variant {
            RoleFormVariant::OutreachProvider => OUTREACH_PROVIDER.get_or_init(outreach::config),
        }
    }
}

impl RoleFormSupplier for RoleFormConfig {
    fn set_template(&self, edit: &mut EditConfiguration, _ctx: &RequestContext) {
        edit.set_template(self.template);
    }

    fn role_type(&self, _ctx: &RequestContext) -> &str {
        self.role_type
    }

    fn role_activity_type_options_type(&self, _ctx: &RequestContext) -> RoleActivityOptionTypes {
        self.options_type
    }

    fn role_activity_type_object_class_uri(&self, _ctx: &RequestContext) -> Option<&str> {
        self.object_class_uri
    }

    fn role_activity_type_literal_options(&self, _ctx: &RequestContext) -> LiteralOptionSet {
        LiteralOptionSet::from_pairs(self.literal_options)
    }
}
