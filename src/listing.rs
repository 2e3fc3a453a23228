//! Fetching, classifying and presenting submission listings.
//!
//! [`SubmissionListing`] performs one provider request and turns the reply
//! into [`ViewItem`]s. [`ListingView`] owns the state of one mounted list:
//! every refresh is tagged with a sequence number and only the reply to the
//! most recent refresh is applied.

use crate::{
    config::{DateStyle, ListingConfig},
    domain::{classify_all, FilterSpec, ViewItem},
    error::{OrderDeskError, Result},
    provider::SubmissionProvider,
};
use std::sync::Mutex;
use tracing::{debug, error, warn};

/// Message shown in place of the list when a fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "加载失败，请稍后重试";

/// Fetches submissions from a provider and classifies them for display
pub struct SubmissionListing<P> {
    provider: P,
    date_style: DateStyle,
}

impl<P: SubmissionProvider> SubmissionListing<P> {
    pub fn new(provider: P, date_style: DateStyle) -> Self {
        Self {
            provider,
            date_style,
        }
    }

    pub fn from_config(provider: P, config: &ListingConfig) -> Self {
        Self::new(provider, config.date_style)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Requests the submissions matching `filter` and labels them
    ///
    /// Items come back in provider order. A reply without a `submissions`
    /// field yields an empty list; any provider error is returned as
    /// [`OrderDeskError::FetchFailure`].
    pub async fn fetch(&self, filter: &FilterSpec) -> Result<Vec<ViewItem>> {
        let response = self
            .provider
            .get_matching(filter)
            .await
            .map_err(OrderDeskError::fetch_failure)?;

        let submissions = match response.submissions {
            Some(submissions) => submissions,
            None => {
                warn!(
                    service_type = ?filter.service_type,
                    status = ?filter.status,
                    "provider reply has no submissions field, showing empty list"
                );
                Vec::new()
            }
        };

        Ok(classify_all(submissions, self.date_style).collect())
    }
}

/// What a listing currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<ViewItem>),
    /// Fetch failed; carries the user-facing message only
    Failed(String),
}

impl ViewState {
    /// Items to render; empty unless the state is `Ready`
    pub fn items(&self) -> &[ViewItem] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// True for a finished fetch that returned nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Ready(items) if items.is_empty())
    }
}

/// Handle for one in-flight refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Slot {
    latest: u64,
    state: ViewState,
}

/// State holder for one mounted listing
///
/// Refreshes may overlap; a reply is applied only when its ticket is still
/// the latest one issued, so a slow, superseded request never overwrites a
/// newer result.
pub struct ListingView<P> {
    listing: SubmissionListing<P>,
    slot: Mutex<Slot>,
}

impl<P: SubmissionProvider> ListingView<P> {
    pub fn new(listing: SubmissionListing<P>) -> Self {
        Self {
            listing,
            slot: Mutex::new(Slot::default()),
        }
    }

    pub fn listing(&self) -> &SubmissionListing<P> {
        &self.listing
    }

    /// Snapshot of what the view shows right now
    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Fetches for `filter` and applies the outcome if still current
    ///
    /// Returns `true` when the outcome was applied, `false` when a newer
    /// refresh superseded it.
    pub async fn refresh(&self, filter: &FilterSpec) -> bool {
        let ticket = self.begin();
        let outcome = self.listing.fetch(filter).await;

        if let Err(err) = &outcome {
            error!(
                error = %err,
                service_type = ?filter.service_type,
                status = ?filter.status,
                request = ticket.sequence(),
                "failed to load submissions"
            );
        }

        self.complete(ticket, outcome)
    }

    /// Resolves raw `type` / `status` parameters and refreshes
    pub async fn refresh_with_params(&self, service_type: Option<&str>, status: Option<&str>) -> bool {
        let filter = FilterSpec::resolve(service_type, status);
        self.refresh(&filter).await
    }

    /// Marks a new request as the latest and switches to `Loading`
    pub fn begin(&self) -> RequestTicket {
        let mut slot = self.lock();
        slot.latest += 1;
        slot.state = ViewState::Loading;
        RequestTicket(slot.latest)
    }

    /// Applies the outcome of `ticket` unless a newer request was begun
    pub fn complete(&self, ticket: RequestTicket, outcome: Result<Vec<ViewItem>>) -> bool {
        let mut slot = self.lock();

        if ticket.0 != slot.latest {
            debug!(
                request = ticket.0,
                latest = slot.latest,
                "discarding stale submissions response"
            );
            return false;
        }

        slot.state = match outcome {
            Ok(items) => ViewState::Ready(items),
            Err(_) => ViewState::Failed(FETCH_FAILED_MESSAGE.to_string()),
        };
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
