use crate::domain::submission::{ServiceType, Submission, SubmissionStatus};
use serde::{Deserialize, Serialize};

/// Query parameter carrying the service type
pub const TYPE_PARAM: &str = "type";
/// Query parameter carrying the lifecycle status
pub const STATUS_PARAM: &str = "status";

/// Criteria for selecting submissions
///
/// A `None` field places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
}

impl FilterSpec {
    /// Builds a filter from the raw `type` and `status` parameters
    ///
    /// Empty or blank values are treated as absent. Anything else is kept
    /// as-is, including codes outside the known set.
    pub fn resolve(service_type: Option<&str>, status: Option<&str>) -> Self {
        Self {
            service_type: non_blank(service_type).map(ServiceType::from),
            status: non_blank(status).map(SubmissionStatus::from),
        }
    }

    /// Builds a filter from key/value pairs such as decoded query parameters
    ///
    /// Keys other than `type` and `status` are ignored. When a key repeats,
    /// the last non-blank value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                TYPE_PARAM => {
                    if let Some(v) = non_blank(Some(value)) {
                        filter.service_type = Some(ServiceType::from(v));
                    }
                }
                STATUS_PARAM => {
                    if let Some(v) = non_blank(Some(value)) {
                        filter.status = Some(SubmissionStatus::from(v));
                    }
                }
                _ => {}
            }
        }

        filter
    }

    pub fn with_service_type(mut self, service_type: impl Into<ServiceType>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<SubmissionStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True when neither dimension is constrained
    pub fn is_unfiltered(&self) -> bool {
        self.service_type.is_none() && self.status.is_none()
    }

    /// Checks whether a submission satisfies every set criterion
    pub fn matches(&self, submission: &Submission) -> bool {
        let type_ok = self
            .service_type
            .as_ref()
            .map(|t| t == &submission.service_type)
            .unwrap_or(true);
        let status_ok = self
            .status
            .as_ref()
            .map(|s| s == &submission.status)
            .unwrap_or(true);

        type_ok && status_ok
    }

    /// Query pairs to send to a provider; unset fields are omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(t) = &self.service_type {
            pairs.push((TYPE_PARAM, t.as_str()));
        }
        if let Some(s) = &self.status {
            pairs.push((STATUS_PARAM, s.as_str()));
        }
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::SubmissionId;

    #[test]
    fn test_resolve_without_params_is_unfiltered() {
        let filter = FilterSpec::resolve(None, None);

        assert!(filter.is_unfiltered());
        assert_eq!(filter, FilterSpec::default());
    }

    #[test]
    fn test_resolve_treats_empty_as_unset() {
        let filter = FilterSpec::resolve(Some(""), Some("   "));
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_resolve_known_values() {
        let filter = FilterSpec::resolve(Some("custom"), Some("completed"));

        assert_eq!(filter.service_type, Some(ServiceType::Custom));
        assert_eq!(filter.status, Some(SubmissionStatus::Completed));
    }

    #[test]
    fn test_resolve_passes_unknown_values_through() {
        let filter = FilterSpec::resolve(Some("premium"), Some("archived"));

        assert_eq!(
            filter.service_type,
            Some(ServiceType::Other("premium".to_string()))
        );
        assert_eq!(
            filter.status,
            Some(SubmissionStatus::Other("archived".to_string()))
        );
    }

    #[test]
    fn test_from_pairs_ignores_unrelated_keys() {
        let filter = FilterSpec::from_pairs([
            ("page", "2"),
            ("status", "pending"),
            ("type", ""),
        ]);

        assert_eq!(filter.service_type, None);
        assert_eq!(filter.status, Some(SubmissionStatus::Pending));
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let filter = FilterSpec::from_pairs(vec![
            ("type".to_string(), "standard".to_string()),
            ("type".to_string(), "custom".to_string()),
        ]);

        assert_eq!(filter.service_type, Some(ServiceType::Custom));
    }

    #[test]
    fn test_matches() {
        let submission = Submission::new(
            SubmissionId::new("1"),
            ServiceType::Custom,
            SubmissionStatus::Completed,
        );

        assert!(FilterSpec::default().matches(&submission));
        assert!(FilterSpec::resolve(Some("custom"), None).matches(&submission));
        assert!(FilterSpec::resolve(Some("custom"), Some("completed")).matches(&submission));
        assert!(!FilterSpec::resolve(Some("standard"), None).matches(&submission));
        assert!(!FilterSpec::resolve(None, Some("archived")).matches(&submission));
    }

    #[test]
    fn test_query_pairs_omit_unset_fields() {
        assert!(FilterSpec::default().query_pairs().is_empty());

        let filter = FilterSpec::default().with_status("pending_payment");
        assert_eq!(filter.query_pairs(), vec![("status", "pending_payment")]);

        let filter = FilterSpec::resolve(Some("standard"), Some("pending"));
        assert_eq!(
            filter.query_pairs(),
            vec![("type", "standard"), ("status", "pending")]
        );
    }
}
