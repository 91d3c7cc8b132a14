use crate::domain::model::{EditConfiguration, RequestContext, RoleActivityOptionTypes};
use crate::domain::ports::RoleFormSupplier;
use crate::utils::error::{RoleFormError, Result};
use crate::utils::validation::{validate_iri, validate_literal_options};

/// Two-stage add-role-to-person form.
///
/// Stage one picks the type of the thing on the other side of the role,
/// stage two picks or creates an individual of that type. The supplier
/// decides where the stage-one options come from.
pub struct TwoStageRoleForm<'a, S: RoleFormSupplier + ?Sized> {
    supplier: &'a S,
}

impl<'a, S: RoleFormSupplier + ?Sized> TwoStageRoleForm<'a, S> {
    pub fn new(supplier: &'a S) -> Self {
        Self { supplier }
    }

    pub fn build(&self, ctx: &RequestContext) -> EditConfiguration {
        let supplier = self.supplier;
        let mut edit = EditConfiguration::new();

        supplier.set_template(&mut edit, ctx);
        edit.role_type = supplier.role_type(ctx).to_string();

        let options_type = supplier.role_activity_type_options_type(ctx);
        edit.options_type = Some(options_type);
        edit.object_class_uri = supplier
            .role_activity_type_object_class_uri(ctx)
            .map(str::to_string);

        if options_type == RoleActivityOptionTypes::HardcodedLiterals {
            edit.literal_options = supplier.role_activity_type_literal_options(ctx);
        }

        edit.role_to_activity_predicate = supplier.role_to_activity_predicate().to_string();
        edit.activity_to_role_predicate = supplier.activity_to_role_predicate().to_string();
        edit.show_role_label_field = supplier.show_role_label_field();

        tracing::debug!(
            role_type = %edit.role_type,
            options_type = ?options_type,
            options = edit.literal_options.len(),
            "Built two-stage role form"
        );

        edit
    }

    pub fn build_validated(&self, ctx: &RequestContext) -> Result<EditConfiguration> {
        let edit = self.build(ctx);
        validate(&edit)?;
        Ok(edit)
    }
}

/// Checks that the options strategy and the fields it depends on agree.
pub fn validate(edit: &EditConfiguration) -> Result<()> {
    validate_iri("role_type", &edit.role_type)?;
    validate_iri("role_to_activity_predicate", &edit.role_to_activity_predicate)?;
    validate_iri("activity_to_role_predicate", &edit.activity_to_role_predicate)?;

    if edit.template().map_or(true, |t| t.trim().is_empty()) {
        return Err(RoleFormError::validation("template is not set"));
    }

    let options_type = edit
        .options_type
        .ok_or_else(|| RoleFormError::validation("options type is not set"))?;

    match options_type {
        RoleActivityOptionTypes::HardcodedLiterals => {
            if let Some(uri) = &edit.object_class_uri {
                return Err(RoleFormError::validation(format!(
                    "hard-coded literal options do not take an object class, got '{}'",
                    uri
                )));
            }
            if edit.literal_options.is_empty() {
                return Err(RoleFormError::validation(
                    "hard-coded literal options are empty",
                ));
            }
            validate_literal_options("literal_options", &edit.literal_options)?;
        }
        RoleActivityOptionTypes::VClassGroup | RoleActivityOptionTypes::ChildVClasses => {
            let uri = edit.object_class_uri.as_deref().ok_or_else(|| {
                RoleFormError::validation(format!(
                    "{:?} options need an object class",
                    options_type
                ))
            })?;
            validate_iri("object_class_uri", uri)?;
        }
    }

    Ok(())
}
