//! Site Configuration
//!
//! Scroll feel per page and the category jump, embedded at build time from
//! `config/site.json`. Every field has a default, so partial files are valid.

use leptos_scroll::{Easing, ScrollConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED: &str = include_str!("../config/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Menu,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageScroll {
    pub home: ScrollConfig,
    pub about: ScrollConfig,
    pub menu: ScrollConfig,
    pub contact: ScrollConfig,
}

impl Default for PageScroll {
    fn default() -> Self {
        let relaxed = ScrollConfig {
            duration: 1.5,
            ..ScrollConfig::default()
        };
        Self {
            home: relaxed,
            about: relaxed,
            menu: ScrollConfig::default(),
            contact: relaxed,
        }
    }
}

/// `scroll_to` parameters for the sticky category nav
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Pixels between the viewport top and the section after the jump
    pub offset: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            offset: 100.0,
            duration: 1.0,
            easing: Easing::Power4Out,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: PageScroll,
    pub category_jump: JumpConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: PageScroll::default(),
            category_jump: JumpConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded config, or defaults if it does not parse
    pub fn load() -> Self {
        Self::parse(EMBEDDED).unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            Self::default()
        })
    }

    pub fn scroll_for(&self, page: Page) -> ScrollConfig {
        match page {
            Page::Home => self.scroll.home,
            Page::About => self.scroll.about,
            Page::Menu => self.scroll.menu,
            Page::Contact => self.scroll.contact,
        }
    }

    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(EMBEDDED).expect("embedded config");
        assert_eq!(config.scroll_for(Page::Menu).duration, 1.2);
        assert_eq!(config.scroll_for(Page::Home).duration, 1.5);
        assert_eq!(config.scroll_for(Page::Contact).easing, Easing::ExpoOut);
        assert_eq!(config.category_jump, JumpConfig::default());
        assert_eq!(config.level().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::parse(r#"{ "scroll": { "menu": { "smooth_wheel": false } } }"#).unwrap();
        assert!(!config.scroll.menu.smooth_wheel);
        assert_eq!(config.scroll.menu.duration, 1.2);
        assert_eq!(config.scroll.about.duration, 1.5);
        assert_eq!(config.category_jump.offset, 100.0);
    }

    #[test]
    fn test_bad_input_is_reported() {
        assert!(matches!(SiteConfig::parse("{ not json"), Err(ConfigError::Parse(_))));
        let config = SiteConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.level(), Err(ConfigError::LogLevel(level)) if level == "loud"));
    }
}
