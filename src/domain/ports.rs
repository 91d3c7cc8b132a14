use crate::domain::model::{
    EditConfiguration, LiteralOptionSet, RequestContext, RoleActivityOptionTypes,
};
use crate::vocab;

/// Hooks a two-stage add-role-to-person form calls while it builds an
/// edit configuration.
///
/// Every variant supplies the role type, the options strategy, the object
/// class and the literal options. The predicates and the role label flag
/// have defaults that fit most roles.
pub trait RoleFormSupplier: Send + Sync {
    fn set_template(&self, edit: &mut EditConfiguration, ctx: &RequestContext);

    fn role_type(&self, ctx: &RequestContext) -> &str;

    fn role_activity_type_options_type(&self, ctx: &RequestContext) -> RoleActivityOptionTypes;

    /// `None` when the options are not constrained by an object class.
    fn role_activity_type_object_class_uri(&self, ctx: &RequestContext) -> Option<&str>;

    fn role_activity_type_literal_options(&self, ctx: &RequestContext) -> LiteralOptionSet;

    fn role_to_activity_predicate(&self) -> &str {
        vocab::core::ROLE_IN
    }

    fn activity_to_role_predicate(&self) -> &str {
        vocab::core::RELATED_ROLE
    }

    fn show_role_label_field(&self) -> bool {
        true
    }
}
