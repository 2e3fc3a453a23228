pub mod filter;
pub mod labels;
pub mod sorting;
pub mod submission;
pub mod view;

pub use filter::FilterSpec;
pub use labels::{status_label, type_label, StarRating};
pub use sorting::{sort_items, SortField, SortOrder};
pub use submission::{
    ServiceType, Submission, SubmissionId, SubmissionStatus, SubmissionsResponse,
};
pub use view::{classify_all, ViewItem};
