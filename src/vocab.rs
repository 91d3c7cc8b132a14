//! Ontology IRIs used by the role forms.
//!
//! Constants are grouped by vocabulary:
//! - `core` - VIVO core ontology (http://vivoweb.org/ontology/core#)
//! - `foaf` - FOAF (http://xmlns.com/foaf/0.1/)
//! - `event` - Event ontology (http://purl.org/NET/c4dm/event.owl#)

/// VIVO core ontology constants
pub mod core {
    pub const NS: &str = "http://vivoweb.org/ontology/core#";

    /// core:OutreachProviderRole
    pub const OUTREACH_PROVIDER_ROLE: &str = "http://vivoweb.org/ontology/core#OutreachProviderRole";

    /// core:roleIn, links a role to its activity
    pub const ROLE_IN: &str = "http://vivoweb.org/ontology/core#roleIn";

    /// core:relatedRole, inverse of core:roleIn
    pub const RELATED_ROLE: &str = "http://vivoweb.org/ontology/core#relatedRole";

    pub const ASSOCIATION: &str = "http://vivoweb.org/ontology/core#Association";
    pub const CENTER: &str = "http://vivoweb.org/ontology/core#Center";
    pub const CLINICAL_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#ClinicalOrganization";
    pub const COLLEGE: &str = "http://vivoweb.org/ontology/core#College";
    pub const COMMITTEE: &str = "http://vivoweb.org/ontology/core#Committee";
    pub const CONSORTIUM: &str = "http://vivoweb.org/ontology/core#Consortium";
    pub const DEPARTMENT: &str = "http://vivoweb.org/ontology/core#Department";
    pub const DIVISION: &str = "http://vivoweb.org/ontology/core#Division";
    pub const EXTENSION_UNIT: &str = "http://vivoweb.org/ontology/core#ExtensionUnit";
    pub const FOUNDATION: &str = "http://vivoweb.org/ontology/core#Foundation";
    pub const FUNDING_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#FundingOrganization";
    pub const GOVERNMENT_AGENCY: &str = "http://vivoweb.org/ontology/core#GovernmentAgency";
    pub const HOSPITAL: &str = "http://vivoweb.org/ontology/core#Hospital";
    pub const INSTITUTE: &str = "http://vivoweb.org/ontology/core#Institute";
    pub const LABORATORY: &str = "http://vivoweb.org/ontology/core#Laboratory";
    pub const LIBRARY: &str = "http://vivoweb.org/ontology/core#Library";
    pub const MUSEUM: &str = "http://vivoweb.org/ontology/core#Museum";
    pub const PRIVATE_COMPANY: &str = "http://vivoweb.org/ontology/core#PrivateCompany";
    pub const PROGRAM: &str = "http://vivoweb.org/ontology/core#Program";
    pub const PROJECT: &str = "http://vivoweb.org/ontology/core#Project";
    pub const PUBLISHER: &str = "http://vivoweb.org/ontology/core#Publisher";
    pub const RESEARCH_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#ResearchOrganization";
    pub const TEAM: &str = "http://vivoweb.org/ontology/core#Team";
    pub const SCHOOL: &str = "http://vivoweb.org/ontology/core#School";
    pub const SERVICE: &str = "http://vivoweb.org/ontology/core#Service";
    pub const STUDENT_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#StudentOrganization";
    pub const UNIVERSITY: &str = "http://vivoweb.org/ontology/core#University";
}

/// FOAF constants
pub mod foaf {
    /// foaf:Organization
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
}

/// Event ontology constants
pub mod event {
    /// event:Event
    pub const EVENT: &str = "http://purl.org/NET/c4dm/event.owl#Event";
}

#[cfg(test)]
mod tests {
    use super::core as vivo;

    #[test]
    fn test_core_iris_share_namespace() {
        for iri in [
            vivo::OUTREACH_PROVIDER_ROLE,
            vivo::ROLE_IN,
            vivo::RELATED_ROLE,
            vivo::UNIVERSITY,
        ] {
            assert!(iri.starts_with(vivo::NS), "{iri} outside core namespace");
        }
    }
}
