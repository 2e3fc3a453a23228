use crate::{
    domain::{FilterSpec, SubmissionsResponse},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-provider")]
pub mod file_provider;

#[cfg(feature = "http-provider")]
pub mod http_provider;

/// Source of submissions for the listing
///
/// Implementations filter on their side; callers trust the reply as the
/// complete answer for the given criteria.
#[async_trait]
pub trait SubmissionProvider: Send + Sync {
    /// Fetches the submissions matching `filter`
    async fn get_matching(&self, filter: &FilterSpec) -> Result<SubmissionsResponse>;
}
