use super::content_type::ContentType;
use serde::{Serialize, Serializer};
use std::fmt;

/// A catalog license (SPDX or framework-specific).
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    license_id: String,
    name: String,
    reference: Option<String>,
    reference_number: Option<u32>,
    content_types: Vec<ContentType>,
    osi_approved: bool,
    fsf_approved: bool,
    open_data: bool,
    deprecated: bool,
}

impl License {
    pub fn new(license_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            license_id: license_id.into(),
            name: name.into(),
            reference: None,
            reference_number: None,
            content_types: Vec::new(),
            osi_approved: false,
            fsf_approved: false,
            open_data: false,
            deprecated: false,
        }
    }

    pub fn with_content_types(mut self, content_types: Vec<ContentType>) -> Self {
        self.content_types = content_types;
        self
    }

    pub fn with_reference(mut self, reference: Option<String>, number: Option<u32>) -> Self {
        self.reference = reference;
        self.reference_number = number;
        self
    }

    pub fn osi_approved(mut self, value: bool) -> Self {
        self.osi_approved = value;
        self
    }

    pub fn fsf_approved(mut self, value: bool) -> Self {
        self.fsf_approved = value;
        self
    }

    pub fn open_data(mut self, value: bool) -> Self {
        self.open_data = value;
        self
    }

    pub fn deprecated(mut self, value: bool) -> Self {
        self.deprecated = value;
        self
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn reference_number(&self) -> Option<u32> {
        self.reference_number
    }

    pub fn content_types(&self) -> &[ContentType] {
        &self.content_types
    }

    pub fn applies_to(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }

    pub fn is_osi_approved(&self) -> bool {
        self.osi_approved
    }

    pub fn is_fsf_approved(&self) -> bool {
        self.fsf_approved
    }

    pub fn is_open_data(&self) -> bool {
        self.open_data
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }
}

/// The license a component ends up with after resolution.
///
/// Sentinel selections are choices a submitter can make in place of a real
/// license. They never count as open and never count as type-appropriate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LicenseSelection {
    /// A named license id; it may or may not exist in the catalog.
    Named(String),
    /// No license could be resolved at any level.
    Unlicensed,
    OtherLicense,
    LicenseNotSpecified,
    ComponentNotIncluded,
    PendingEvaluation,
}

impl LicenseSelection {
    pub const OTHER_LICENSE: &'static str = "Other license";
    pub const LICENSE_NOT_SPECIFIED: &'static str = "License not specified";
    pub const COMPONENT_NOT_INCLUDED: &'static str = "Component not included";
    pub const PENDING_EVALUATION: &'static str = "Pending evaluation";
    pub const UNLICENSED: &'static str = "unlicensed";

    /// Sentinels offered next to catalog licenses when a submitter picks a license.
    pub const SELECTABLE_SENTINELS: [LicenseSelection; 4] = [
        LicenseSelection::OtherLicense,
        LicenseSelection::LicenseNotSpecified,
        LicenseSelection::ComponentNotIncluded,
        LicenseSelection::PendingEvaluation,
    ];

    /// Interprets a user-entered license value.
    ///
    /// Returns `None` for a blank value so that resolution can fall through
    /// to global licenses.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let selection = match value {
            Self::OTHER_LICENSE => LicenseSelection::OtherLicense,
            Self::LICENSE_NOT_SPECIFIED => LicenseSelection::LicenseNotSpecified,
            Self::COMPONENT_NOT_INCLUDED => LicenseSelection::ComponentNotIncluded,
            Self::PENDING_EVALUATION => LicenseSelection::PendingEvaluation,
            Self::UNLICENSED => LicenseSelection::Unlicensed,
            other => LicenseSelection::Named(other.to_string()),
        };
        Some(selection)
    }

    pub fn as_str(&self) -> &str {
        match self {
            LicenseSelection::Named(id) => id,
            LicenseSelection::Unlicensed => Self::UNLICENSED,
            LicenseSelection::OtherLicense => Self::OTHER_LICENSE,
            LicenseSelection::LicenseNotSpecified => Self::LICENSE_NOT_SPECIFIED,
            LicenseSelection::ComponentNotIncluded => Self::COMPONENT_NOT_INCLUDED,
            LicenseSelection::PendingEvaluation => Self::PENDING_EVALUATION,
        }
    }

    /// Fixed display name of a sentinel; `None` for a named license.
    pub fn sentinel_name(&self) -> Option<&'static str> {
        match self {
            LicenseSelection::Named(_) => None,
            LicenseSelection::Unlicensed => Some(Self::UNLICENSED),
            LicenseSelection::OtherLicense => Some(Self::OTHER_LICENSE),
            LicenseSelection::LicenseNotSpecified => Some(Self::LICENSE_NOT_SPECIFIED),
            LicenseSelection::ComponentNotIncluded => Some(Self::COMPONENT_NOT_INCLUDED),
            LicenseSelection::PendingEvaluation => Some(Self::PENDING_EVALUATION),
        }
    }

    /// The license id to look up in the catalog, if this is a named license.
    pub fn license_id(&self) -> Option<&str> {
        match self {
            LicenseSelection::Named(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, LicenseSelection::Named(_))
    }

    /// Returns true if the given id collides with a sentinel name.
    pub fn is_reserved_name(id: &str) -> bool {
        matches!(
            LicenseSelection::parse(id),
            Some(selection) if selection.is_sentinel()
        )
    }
}

impl fmt::Display for LicenseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LicenseSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(LicenseSelection::parse(""), None);
        assert_eq!(LicenseSelection::parse("   "), None);
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(
            LicenseSelection::parse("Pending evaluation"),
            Some(LicenseSelection::PendingEvaluation)
        );
        assert_eq!(
            LicenseSelection::parse("Component not included"),
            Some(LicenseSelection::ComponentNotIncluded)
        );
        assert_eq!(
            LicenseSelection::parse("Other license"),
            Some(LicenseSelection::OtherLicense)
        );
        assert_eq!(
            LicenseSelection::parse("License not specified"),
            Some(LicenseSelection::LicenseNotSpecified)
        );
    }

    #[test]
    fn test_parse_named_license_is_trimmed() {
        assert_eq!(
            LicenseSelection::parse(" Apache-2.0 "),
            Some(LicenseSelection::Named("Apache-2.0".to_string()))
        );
    }

    #[test]
    fn test_as_str_round_trips_through_display() {
        for selection in LicenseSelection::SELECTABLE_SENTINELS {
            assert_eq!(selection.to_string(), selection.as_str());
            assert!(selection.is_sentinel());
            assert!(selection.license_id().is_none());
            assert_eq!(selection.sentinel_name(), Some(selection.as_str()));
        }
        assert_eq!(
            LicenseSelection::Named("MIT".to_string()).sentinel_name(),
            None
        );
        assert_eq!(LicenseSelection::Unlicensed.as_str(), "unlicensed");
    }

    #[test]
    fn test_named_license_id() {
        let selection = LicenseSelection::Named("MIT".to_string());
        assert_eq!(selection.license_id(), Some("MIT"));
        assert!(!selection.is_sentinel());
    }

    #[test]
    fn test_reserved_names() {
        assert!(LicenseSelection::is_reserved_name("Pending evaluation"));
        assert!(LicenseSelection::is_reserved_name("unlicensed"));
        assert!(!LicenseSelection::is_reserved_name("MIT"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&LicenseSelection::PendingEvaluation).unwrap();
        assert_eq!(json, "\"Pending evaluation\"");
    }

    #[test]
    fn test_license_builder() {
        let license = License::new("CC-BY-4.0", "Creative Commons Attribution 4.0")
            .with_content_types(vec![ContentType::Document, ContentType::Data])
            .open_data(true);

        assert_eq!(license.license_id(), "CC-BY-4.0");
        assert!(license.applies_to(ContentType::Data));
        assert!(!license.applies_to(ContentType::Code));
        assert!(license.is_open_data());
        assert!(!license.is_osi_approved());
    }
}
