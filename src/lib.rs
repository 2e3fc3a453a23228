//! # OrderDesk Core
//!
//! Listing and status classification for service orders and reviews.
//!
//! This crate resolves listing filters from raw query parameters, fetches
//! matching submissions through a [`SubmissionProvider`], and labels them
//! for display, without depending on any particular UI or transport.

pub mod config;
pub mod domain;
pub mod error;
pub mod listing;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use config::{DateStyle, ListingConfig};
pub use domain::{
    filter::FilterSpec,
    submission::{ServiceType, Submission, SubmissionId, SubmissionStatus, SubmissionsResponse},
    view::ViewItem,
};
pub use error::{OrderDeskError, Result};
pub use listing::{ListingView, SubmissionListing, ViewState};
pub use provider::SubmissionProvider;
pub use session::SessionContext;

#[cfg(feature = "file-provider")]
pub use provider::file_provider::FileProvider;

#[cfg(feature = "http-provider")]
pub use provider::http_provider::HttpProvider;
