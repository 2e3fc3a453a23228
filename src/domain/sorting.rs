//! Re-ordering of classified submissions, applied only when the caller asks;
//! [`crate::listing::SubmissionListing::fetch`] keeps provider order.

use crate::domain::labels::parse_created_at;
use crate::domain::submission::SubmissionStatus;
use crate::domain::view::ViewItem;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for re-ordering listed submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    ContactName,
    Status,
    Created,
    Rating,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "contact" | "contact-name" => Ok(SortField::ContactName),
            "status" => Ok(SortField::Status),
            "created" => Ok(SortField::Created),
            "rating" => Ok(SortField::Rating),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: id, contact-name, status, created, rating",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Re-orders classified items in place
///
/// The sort is stable, so items that compare equal keep the order the
/// provider returned them in.
///
/// # Examples
/// ```
/// use orderdesk_core::config::DateStyle;
/// use orderdesk_core::domain::sorting::{sort_items, SortField, SortOrder};
/// use orderdesk_core::domain::{classify_all, ServiceType, Submission, SubmissionId, SubmissionStatus};
///
/// let submissions = vec![
///     Submission::new(SubmissionId::new("3"), ServiceType::Standard, SubmissionStatus::Pending),
///     Submission::new(SubmissionId::new("1"), ServiceType::Standard, SubmissionStatus::Pending),
/// ];
/// let mut items: Vec<_> = classify_all(submissions, DateStyle::Iso).collect();
///
/// sort_items(&mut items, SortField::Id, SortOrder::Ascending);
/// assert_eq!(items[0].submission.id.as_str(), "1");
/// ```
pub fn sort_items(items: &mut [ViewItem], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = match field {
            SortField::Id => a.submission.id.as_str().cmp(b.submission.id.as_str()),
            SortField::ContactName => compare_option(
                a.submission.contact_name.as_deref().map(str::to_lowercase),
                b.submission.contact_name.as_deref().map(str::to_lowercase),
            ),
            SortField::Status => compare_status(&a.submission.status, &b.submission.status),
            SortField::Created => compare_option(created_date(a), created_date(b)),
            SortField::Rating => compare_rating(a.submission.rating, b.submission.rating),
        };

        match order {
            SortOrder::Ascending => cmp,
            // Missing values stay at the end in both directions
            SortOrder::Descending if is_missing(a, field) || is_missing(b, field) => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

fn created_date(item: &ViewItem) -> Option<NaiveDate> {
    item.submission.created_at.as_deref().and_then(parse_created_at)
}

fn is_missing(item: &ViewItem, field: SortField) -> bool {
    match field {
        SortField::ContactName => item.submission.contact_name.is_none(),
        SortField::Created => created_date(item).is_none(),
        SortField::Rating => item.submission.rating.is_none(),
        SortField::Id | SortField::Status => false,
    }
}

/// Compare status by lifecycle progression
///
/// Order: PendingPayment → Pending → Processing → Completed → Cancelled,
/// unknown codes last (alphabetically among themselves).
fn compare_status(a: &SubmissionStatus, b: &SubmissionStatus) -> Ordering {
    fn status_order(s: &SubmissionStatus) -> u8 {
        match s {
            SubmissionStatus::PendingPayment => 0,
            SubmissionStatus::Pending => 1,
            SubmissionStatus::Processing => 2,
            SubmissionStatus::Completed => 3,
            SubmissionStatus::Cancelled => 4,
            SubmissionStatus::Other(_) => 5,
        }
    }
    status_order(a)
        .cmp(&status_order(b))
        .then_with(|| a.as_str().cmp(b.as_str()))
}

/// Compare optional values with None always sorting to the end
fn compare_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare ratings with non-finite scores counted as 0, unrated last
fn compare_rating(a: Option<f64>, b: Option<f64>) -> Ordering {
    fn score(r: f64) -> f64 {
        if r.is_finite() {
            r
        } else {
            0.0
        }
    }

    match (a, b) {
        (Some(a), Some(b)) => score(a).total_cmp(&score(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateStyle;
    use crate::domain::submission::{ServiceType, Submission, SubmissionId};

    fn item(id: &str, status: &str) -> ViewItem {
        ViewItem::classify(
            Submission::new(
                SubmissionId::new(id),
                ServiceType::Standard,
                SubmissionStatus::from(status),
            ),
            DateStyle::Iso,
        )
    }

    fn ids(items: &[ViewItem]) -> Vec<&str> {
        items.iter().map(|i| i.submission.id.as_str()).collect()
    }

    #[test]
    fn test_sort_items_by_id() {
        let mut items = vec![item("3", "pending"), item("1", "pending"), item("2", "pending")];

        sort_items(&mut items, SortField::Id, SortOrder::Ascending);
        assert_eq!(ids(&items), vec!["1", "2", "3"]);

        sort_items(&mut items, SortField::Id, SortOrder::Descending);
        assert_eq!(ids(&items), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_items_by_status_lifecycle() {
        let mut items = vec![
            item("a", "cancelled"),
            item("b", "weird"),
            item("c", "pending"),
            item("d", "pending_payment"),
            item("e", "completed"),
            item("f", "processing"),
        ];

        sort_items(&mut items, SortField::Status, SortOrder::Ascending);

        assert_eq!(ids(&items), vec!["d", "c", "f", "e", "a", "b"]);
    }

    #[test]
    fn test_sort_items_by_contact_name_case_insensitive() {
        let mut a = item("1", "pending");
        a.submission.contact_name = Some("zoe".to_string());
        let mut b = item("2", "pending");
        b.submission.contact_name = Some("Adam".to_string());
        let c = item("3", "pending");

        let mut items = vec![a, c, b];
        sort_items(&mut items, SortField::ContactName, SortOrder::Ascending);

        assert_eq!(ids(&items), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_items_by_created_keeps_undated_last() {
        let mut early = item("early", "pending");
        early.submission.created_at = Some("2025-01-05".to_string());
        let mut late = item("late", "pending");
        late.submission.created_at = Some("2025-08-02 10:00:00".to_string());
        let undated = item("undated", "pending");

        let mut items = vec![undated.clone(), early.clone(), late.clone()];
        sort_items(&mut items, SortField::Created, SortOrder::Ascending);
        assert_eq!(ids(&items), vec!["early", "late", "undated"]);

        let mut items = vec![undated, early, late];
        sort_items(&mut items, SortField::Created, SortOrder::Descending);
        assert_eq!(ids(&items), vec!["late", "early", "undated"]);
    }

    #[test]
    fn test_sort_items_by_rating() {
        let mut low = item("low", "completed");
        low.submission.rating = Some(2.5);
        let mut high = item("high", "completed");
        high.submission.rating = Some(4.5);
        let unrated = item("unrated", "completed");

        let mut items = vec![unrated, low, high];
        sort_items(&mut items, SortField::Rating, SortOrder::Descending);

        assert_eq!(ids(&items), vec!["high", "low", "unrated"]);
    }

    #[test]
    fn test_sort_by_rating_with_non_finite_scores() {
        let mut items: Vec<ViewItem> = (0..64)
            .map(|n| {
                let mut it = item(&format!("{n:02}"), "completed");
                it.submission.rating = match n % 3 {
                    0 => Some(f64::NAN),
                    1 => Some(f64::from(n % 5) + 0.5),
                    _ => Some(f64::INFINITY),
                };
                it
            })
            .collect();

        sort_items(&mut items, SortField::Rating, SortOrder::Ascending);

        // Non-finite scores rank as 0, ahead of every rated item
        let leading = items
            .iter()
            .take_while(|i| !i.submission.rating.is_some_and(f64::is_finite))
            .count();
        assert_eq!(leading, 43);
        let rest: Vec<f64> = items[leading..]
            .iter()
            .filter_map(|i| i.submission.rating)
            .collect();
        assert!(rest.windows(2).all(|w| w[0] <= w[1]));

        sort_items(&mut items, SortField::Rating, SortOrder::Descending);
        assert!(items[0].submission.rating.is_some_and(f64::is_finite));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![item("b", "pending"), item("a", "pending"), item("c", "completed")];

        sort_items(&mut items, SortField::Status, SortOrder::Ascending);

        assert_eq!(ids(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_sort_arguments() {
        assert_eq!("created".parse::<SortField>().unwrap(), SortField::Created);
        assert_eq!("Contact-Name".parse::<SortField>().unwrap(), SortField::ContactName);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("title".parse::<SortField>().is_err());
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
