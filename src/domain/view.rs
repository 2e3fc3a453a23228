use crate::config::DateStyle;
use crate::domain::labels::{format_created_at, status_label, type_label, StarRating};
use crate::domain::submission::Submission;
use serde::Serialize;

/// A submission with its display labels resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewItem {
    #[serde(flatten)]
    pub submission: Submission,
    pub type_label: &'static str,
    pub status_label: String,
    pub formatted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<StarRating>,
}

impl ViewItem {
    /// Resolves labels for a single submission
    pub fn classify(submission: Submission, style: DateStyle) -> Self {
        let type_label = type_label(&submission.service_type);
        let status_label = status_label(&submission.status).to_string();
        let formatted_date = format_created_at(submission.created_at.as_deref(), style);
        let stars = submission.rating.map(StarRating::from_score);

        Self {
            submission,
            type_label,
            status_label,
            formatted_date,
            stars,
        }
    }
}

/// Lazily classifies submissions, keeping their order
pub fn classify_all<I>(submissions: I, style: DateStyle) -> impl Iterator<Item = ViewItem>
where
    I: IntoIterator<Item = Submission>,
{
    submissions
        .into_iter()
        .map(move |submission| ViewItem::classify(submission, style))
}
