use crate::core::role_form::RoleFormConfig;
use crate::domain::model::{RoleActivityOptionTypes, RoleFormVariant};
use crate::vocab::{core as vivo, event, foaf};

pub const TEMPLATE: &str = "addOutreachProviderRoleToPerson.ftl";

pub const PLACEHOLDER_LABEL: &str = "Select type";

/// Organization and event types an outreach provider role can point at.
pub const ACTIVITY_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", PLACEHOLDER_LABEL),
    (vivo::ASSOCIATION, "Association"),
    (vivo::CENTER, "Center"),
    (vivo::CLINICAL_ORGANIZATION, "Clinical Organization"),
    (vivo::COLLEGE, "College"),
    (vivo::COMMITTEE, "Committee"),
    (vivo::CONSORTIUM, "Consortium"),
    (vivo::DEPARTMENT, "Department"),
    (vivo::DIVISION, "Division"),
    (event::EVENT, "Event"),
    (vivo::EXTENSION_UNIT, "Extension Unit"),
    (vivo::FOUNDATION, "Foundation"),
    (vivo::FUNDING_ORGANIZATION, "Funding Organization"),
    (vivo::GOVERNMENT_AGENCY, "Government Agency"),
    (vivo::HOSPITAL, "Hospital"),
    (vivo::INSTITUTE, "Institute"),
    (vivo::LABORATORY, "Laboratory"),
    (vivo::LIBRARY, "Library"),
    (vivo::MUSEUM, "Museum"),
    (foaf::ORGANIZATION, "Organization"),
    (vivo::PRIVATE_COMPANY, "Private Company"),
    (vivo::PROGRAM, "Program"),
    (vivo::PROJECT, "Project"),
    (vivo::PUBLISHER, "Publisher"),
    (vivo::RESEARCH_ORGANIZATION, "Research Organization"),
    (vivo::TEAM, "Team"),
    (vivo::SCHOOL, "School"),
    (vivo::SERVICE, "Service"),
    (vivo::STUDENT_ORGANIZATION, "Student Organization"),
    (vivo::UNIVERSITY, "University"),
];

pub(crate) fn config() -> RoleFormConfig {
    RoleFormConfig {
        variant: RoleFormVariant::OutreachProvider,
        template: TEMPLATE,
        role_type: vivo::OUTREACH_PROVIDER_ROLE,
        options_type: RoleActivityOptionTypes::HardcodedLiterals,
        object_class_uri: None,
        literal_options: ACTIVITY_TYPE_OPTIONS,
    }
}
