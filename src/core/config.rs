//! Configuration system for dashboard timing, paging and the API endpoint
//!
//! Settings come from presets or a custom configuration, optionally read from
//! JSON, with an environment override for the API base URL.

use crate::core::constants::{
    BOARD_DEALS_PER_PAGE, DEFAULT_API_BASE_URL, FRAME_INTERVAL_MS, MIN_LOADING_MS,
    PROFILE_DEALS_PER_PAGE, REGION_FOCUS_ZOOM, VIEWPORT_ANIMATION_MS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "REPMAP_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardProfile {
    /// Animated transitions and a loading floor, as the dashboard ships
    Standard,
    /// No animation and no loading floor (headless runs, scripted demos)
    Instant,
    Custom(DashboardConfig),
}

impl DashboardProfile {
    pub fn resolve(&self) -> DashboardConfig {
        match self {
            Self::Standard => DashboardConfig {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                animation: AnimationConfig {
                    duration_ms: VIEWPORT_ANIMATION_MS,
                    frame_interval_ms: FRAME_INTERVAL_MS,
                    focus_zoom: REGION_FOCUS_ZOOM,
                },
                loading: LoadingConfig {
                    min_duration_ms: MIN_LOADING_MS,
                },
                pagination: PaginationConfig {
                    profile_deals_per_page: PROFILE_DEALS_PER_PAGE,
                    board_deals_per_page: BOARD_DEALS_PER_PAGE,
                },
            },
            Self::Instant => DashboardConfig {
                animation: AnimationConfig {
                    duration_ms: 0,
                    ..AnimationConfig::default()
                },
                loading: LoadingConfig { min_duration_ms: 0 },
                ..Self::Standard.resolve()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for DashboardProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub animation: AnimationConfig,
    pub loading: LoadingConfig,
    pub pagination: PaginationConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardProfile::default().resolve()
    }
}

impl DashboardConfig {
    /// Parses a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("unreadable configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `REPMAP_API_URL` if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                log::debug!("API base URL overridden from {}", API_URL_ENV);
                self.api_base_url = url.to_string();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".into()));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(Error::Config("animation.frame_interval_ms must be positive".into()));
        }
        if !(self.animation.focus_zoom >= 1.0) {
            return Err(Error::Config(format!(
                "animation.focus_zoom must be at least 1, got {}",
                self.animation.focus_zoom
            )));
        }
        if self.pagination.profile_deals_per_page == 0 || self.pagination.board_deals_per_page == 0 {
            return Err(Error::Config("page sizes must be positive".into()));
        }
        Ok(())
    }

    /// Endpoint URL under the configured base, without doubled slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub frame_interval_ms: u64,
    pub focus_zoom: f64,
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Frames needed to play one transition, counting the final exact frame
    pub fn frames_per_transition(&self) -> u64 {
        if self.frame_interval_ms == 0 {
            return 1;
        }
        self.duration_ms.div_ceil(self.frame_interval_ms) + 1
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: VIEWPORT_ANIMATION_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            focus_zoom: REGION_FOCUS_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub min_duration_ms: u64,
}

impl LoadingConfig {
    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: MIN_LOADING_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub profile_deals_per_page: usize,
    pub board_deals_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            profile_deals_per_page: PROFILE_DEALS_PER_PAGE,
            board_deals_per_page: BOARD_DEALS_PER_PAGE,
        }
    }
}
