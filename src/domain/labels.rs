use crate::config::DateStyle;
use crate::domain::submission::{ServiceType, SubmissionStatus};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const STANDARD_TYPE_LABEL: &str = "标准";
pub const CUSTOM_TYPE_LABEL: &str = "定制";

/// Display text for a lifecycle status
///
/// Codes outside the known table are shown verbatim.
pub fn status_label(status: &SubmissionStatus) -> &str {
    match status {
        SubmissionStatus::Pending => "等待接单",
        SubmissionStatus::Processing => "服务中",
        SubmissionStatus::Completed => "已完成",
        SubmissionStatus::Cancelled => "已取消",
        SubmissionStatus::PendingPayment => "待付款",
        SubmissionStatus::Other(code) => code,
    }
}

/// Display text for a service type badge
///
/// Only `standard` gets the standard badge; every other value, including
/// unknown and empty codes, is shown as custom.
pub fn type_label(service_type: &ServiceType) -> &'static str {
    match service_type {
        ServiceType::Standard => STANDARD_TYPE_LABEL,
        ServiceType::Custom => CUSTOM_TYPE_LABEL,
        ServiceType::Other(code) => {
            debug!(service_type = %code, "unrecognized service type, labelled as custom");
            CUSTOM_TYPE_LABEL
        }
    }
}

/// Parses a provider timestamp into a calendar date
///
/// Accepts RFC 3339 timestamps (converted to local time), naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` values and plain dates.
pub fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Formats `createdAt` for display
///
/// Returns `None` for a missing or blank value. Values that cannot be parsed
/// are passed through unchanged.
pub fn format_created_at(raw: Option<&str>, style: DateStyle) -> Option<String> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;

    match parse_created_at(raw) {
        Some(date) => Some(date.format(style.pattern()).to_string()),
        None => {
            debug!(created_at = raw, "unparseable creation date, shown verbatim");
            Some(raw.to_string())
        }
    }
}

/// Five-star rendering of a review score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub const MAX_STARS: u8 = 5;

    /// Converts a fractional score, clamped to 0..=5
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, f64::from(Self::MAX_STARS))
        } else {
            0.0
        };

        let full = score.floor() as u8;
        let half = score - score.floor() >= 0.5;
        let empty = Self::MAX_STARS - full - u8::from(half);

        Self { full, half, empty }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("⯪")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}
