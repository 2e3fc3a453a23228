use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a submission as issued by the provider (e.g., 1, "SO-2025-0042")
///
/// Providers send either numbers or strings; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct SubmissionId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for SubmissionId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<SubmissionId> for String {
    fn from(id: SubmissionId) -> Self {
        id.0
    }
}

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service category of a submission
///
/// Unknown codes are carried verbatim in `Other` so they can be forwarded to
/// the provider untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    Standard,
    Custom,
    Other(String),
}

impl ServiceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Custom => "custom",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ServiceType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "standard" => Self::Standard,
            "custom" => Self::Custom,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for ServiceType {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<ServiceType> for String {
    fn from(service_type: ServiceType) -> Self {
        match service_type {
            ServiceType::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of a submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    PendingPayment,
    Other(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::PendingPayment => "pending_payment",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for SubmissionStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "pending_payment" => Self::PendingPayment,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for SubmissionStatus {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<SubmissionStatus> for String {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service order or review as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    #[serde(rename = "type", default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Raw creation timestamp; formatting happens at classification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Review score, usually within 0..=5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Submission {
    /// Creates a submission with only the classification fields set
    pub fn new(
        id: SubmissionId,
        service_type: ServiceType,
        status: SubmissionStatus,
    ) -> Self {
        Self {
            id,
            service_type,
            status,
            contact_name: None,
            requirements: None,
            city: None,
            created_at: None,
            rating: None,
        }
    }

    pub fn with_contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Provider reply for a listing request
///
/// `submissions` is optional on the wire; a reply without it is read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionsResponse {
    #[serde(default)]
    pub submissions: Option<Vec<Submission>>,
}

impl SubmissionsResponse {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: Some(submissions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number_or_string() {
        let numeric: SubmissionId = serde_json::from_str("42").unwrap();
        let text: SubmissionId = serde_json::from_str("\"SO-7\"").unwrap();

        assert_eq!(numeric.as_str(), "42");
        assert_eq!(text.as_str(), "SO-7");
    }

    #[test]
    fn test_unknown_codes_are_preserved() {
        let status = SubmissionStatus::from("refunded");
        let service_type = ServiceType::from("premium");

        assert_eq!(status, SubmissionStatus::Other("refunded".to_string()));
        assert_eq!(status.as_str(), "refunded");
        assert_eq!(service_type.as_str(), "premium");
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": 1,
            "type": "custom",
            "status": "pending_payment",
            "contactName": "张三",
            "description": "Deep clean, two rooms",
            "city": "Hangzhou",
            "createdAt": "2025-08-02"
        }"#;

        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.id.as_str(), "1");
        assert_eq!(submission.service_type, ServiceType::Custom);
        assert_eq!(submission.status, SubmissionStatus::PendingPayment);
        assert_eq!(submission.contact_name.as_deref(), Some("张三"));
        assert_eq!(
            submission.requirements.as_deref(),
            Some("Deep clean, two rooms")
        );
        assert_eq!(submission.created_at.as_deref(), Some("2025-08-02"));
        assert_eq!(submission.rating, None);
    }

    #[test]
    fn test_missing_tags_default_to_empty_codes() {
        let submission: Submission = serde_json::from_str(r#"{"id": "A1"}"#).unwrap();

        assert_eq!(submission.service_type.as_str(), "");
        assert_eq!(submission.status.as_str(), "");
    }

    #[test]
    fn test_response_without_collection() {
        let response: SubmissionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.submissions.is_none());

        let response: SubmissionsResponse =
            serde_json::from_str(r#"{"submissions": null}"#).unwrap();
        assert!(response.submissions.is_none());
    }
}
