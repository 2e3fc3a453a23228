use crate::error::{OrderDeskError, Result};
use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};
use tracing::info;

pub const BASE_URL_VAR: &str = "ORDERDESK_BASE_URL";
pub const SUBMISSIONS_PATH_VAR: &str = "ORDERDESK_SUBMISSIONS_PATH";
pub const DATE_STYLE_VAR: &str = "ORDERDESK_DATE_STYLE";

/// Short date pattern used when showing creation dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStyle {
    /// 2025/8/2
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// 8/2/2025
    #[serde(rename = "en-US")]
    EnUs,
    /// 2025-08-02
    #[serde(rename = "iso")]
    Iso,
}

impl DateStyle {
    /// chrono format pattern for this style
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::ZhCn => "%Y/%-m/%-d",
            Self::EnUs => "%-m/%-d/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

impl FromStr for DateStyle {
    type Err = OrderDeskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Self::ZhCn),
            "en-us" | "en" => Ok(Self::EnUs),
            "iso" => Ok(Self::Iso),
            _ => Err(OrderDeskError::ConfigError(format!(
                "Invalid date style '{}'. Valid styles: zh-CN, en-US, iso",
                s
            ))),
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZhCn => write!(f, "zh-CN"),
            Self::EnUs => write!(f, "en-US"),
            Self::Iso => write!(f, "iso"),
        }
    }
}

/// Settings for the submission listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub base_url: String,
    pub submissions_path: String,
    pub date_style: DateStyle,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            submissions_path: "/api/submissions".to_string(),
            date_style: DateStyle::default(),
        }
    }
}

impl ListingConfig {
    /// Loads settings from `ORDERDESK_*` environment variables
    ///
    /// Unset variables fall back to defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ListingConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| {
            info!("{BASE_URL_VAR} not set, using default: {}", defaults.base_url);
            defaults.base_url.clone()
        });
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OrderDeskError::ConfigError(format!(
                "{BASE_URL_VAR} must be an http(s) URL, got '{base_url}'"
            )));
        }

        let submissions_path = match lookup(SUBMISSIONS_PATH_VAR) {
            Some(path) if path.starts_with('/') => path,
            Some(path) => format!("/{path}"),
            None => {
                info!(
                    "{SUBMISSIONS_PATH_VAR} not set, using default: {}",
                    defaults.submissions_path
                );
                defaults.submissions_path.clone()
            }
        };

        let date_style = match lookup(DATE_STYLE_VAR) {
            Some(value) => value.parse()?,
            None => {
                info!("{DATE_STYLE_VAR} not set, using default: {}", defaults.date_style);
                defaults.date_style
            }
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            submissions_path,
            date_style,
        })
    }

    /// Full URL of the submissions endpoint
    pub fn submissions_url(&self) -> String {
        format!("{}{}", self.base_url, self.submissions_path)
    }
}
