use crate::{
    domain::{FilterSpec, SubmissionsResponse},
    error::Result,
    provider::SubmissionProvider,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Provider backed by a JSON document on disk
///
/// The file holds the same shape a remote provider returns
/// (`{"submissions": [...]}`) and is re-read on every request.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a response document, creating parent directories as needed
    pub async fn write(&self, response: &SubmissionsResponse) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(response)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionProvider for FileProvider {
    async fn get_matching(&self, filter: &FilterSpec) -> Result<SubmissionsResponse> {
        let contents = fs::read_to_string(&self.path).await?;
        let response: SubmissionsResponse = serde_json::from_str(&contents)?;

        let submissions = response.submissions.map(|all| {
            let total = all.len();
            let matching: Vec<_> = all.into_iter().filter(|s| filter.matches(s)).collect();
            debug!(
                path = %self.path.display(),
                total,
                matching = matching.len(),
                "filtered submissions from file"
            );
            matching
        });

        Ok(SubmissionsResponse { submissions })
    }
}
