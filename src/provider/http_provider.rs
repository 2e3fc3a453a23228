use crate::{
    config::ListingConfig,
    domain::{FilterSpec, SubmissionsResponse},
    error::{OrderDeskError, Result},
    provider::SubmissionProvider,
    session::SessionContext,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Provider that queries the remote submissions endpoint
///
/// Issues `GET <endpoint>?type=..&status=..` with unset criteria omitted.
/// Timeouts are whatever the supplied `Client` is configured with.
pub struct HttpProvider {
    client: Client,
    endpoint: String,
    session: SessionContext,
}

impl HttpProvider {
    pub fn new(endpoint: impl Into<String>, session: SessionContext) -> Self {
        Self::with_client(Client::new(), endpoint, session)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            session,
        }
    }

    pub fn from_config(config: &ListingConfig, session: SessionContext) -> Self {
        Self::new(config.submissions_url(), session)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, filter: &FilterSpec) -> reqwest::RequestBuilder {
        let mut request = self.client.get(&self.endpoint).query(&filter.query_pairs());
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[async_trait]
impl SubmissionProvider for HttpProvider {
    async fn get_matching(&self, filter: &FilterSpec) -> Result<SubmissionsResponse> {
        let response = self.build_request(filter).send().await?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, %status, "submissions response");
        if !status.is_success() {
            return Err(OrderDeskError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SubmissionsResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
