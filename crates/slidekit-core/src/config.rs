#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! [`CarouselConfig`] is built with chained setters and validated once, at
//! carousel construction. After that it is immutable: reconfiguration means
//! building a new carousel.

use std::fmt;
use std::time::Duration;

/// Step policy for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideBy {
    /// Advance by one full visible page (`items` slides).
    Page,
    /// Advance by a fixed number of slides.
    Count(usize),
}

/// Configuration precondition violations.
///
/// Construction fails fast on these; nothing at runtime produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `items` must be at least 1.
    ZeroItems,
    /// `SlideBy::Count` must be at least 1.
    ZeroSlideBy,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItems => write!(f, "items must be at least 1"),
            Self::ZeroSlideBy => write!(f, "slide_by count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable carousel options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    looping: bool,
    items: usize,
    slide_by: SlideBy,
    speed: Duration,
    autoplay: bool,
    autoplay_interval: Duration,
    autoplay_hover_pause: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            looping: true,
            items: 1,
            slide_by: SlideBy::Count(1),
            speed: Duration::from_millis(300),
            autoplay: false,
            autoplay_interval: Duration::from_secs(3),
            autoplay_hover_pause: true,
        }
    }
}

impl CarouselConfig {
    /// Create a config with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable infinite looping.
    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Number of slides visible at once.
    #[must_use]
    pub fn items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    /// Step policy for button- and autoplay-driven moves.
    #[must_use]
    pub fn slide_by(mut self, slide_by: SlideBy) -> Self {
        self.slide_by = slide_by;
        self
    }

    /// Duration of one animated transition.
    #[must_use]
    pub fn speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Enable or disable autoplay.
    #[must_use]
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Interval between autoplay moves.
    #[must_use]
    pub fn autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Pause autoplay while the pointer hovers the carousel.
    #[must_use]
    pub fn autoplay_hover_pause(mut self, pause: bool) -> Self {
        self.autoplay_hover_pause = pause;
        self
    }

    /// Check construction preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items == 0 {
            return Err(ConfigError::ZeroItems);
        }
        if self.slide_by == SlideBy::Count(0) {
            return Err(ConfigError::ZeroSlideBy);
        }
        Ok(())
    }

    /// Step magnitude shared by button-driven and autoplay-driven moves.
    #[must_use]
    pub fn effective_slide_by(&self) -> usize {
        match self.slide_by {
            SlideBy::Page => self.items,
            SlideBy::Count(n) => n,
        }
    }

    /// Whether infinite looping is enabled.
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of slides visible at once.
    #[must_use]
    pub const fn visible_items(&self) -> usize {
        self.items
    }

    /// Raw step policy.
    #[must_use]
    pub const fn slide_by_policy(&self) -> SlideBy {
        self.slide_by
    }

    /// Duration of one animated transition.
    #[must_use]
    pub const fn transition_speed(&self) -> Duration {
        self.speed
    }

    /// Whether autoplay is enabled.
    #[must_use]
    pub const fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// Interval between autoplay moves.
    #[must_use]
    pub const fn autoplay_tick(&self) -> Duration {
        self.autoplay_interval
    }

    /// Whether hover pauses autoplay.
    #[must_use]
    pub const fn hover_pauses_autoplay(&self) -> bool {
        self.autoplay_hover_pause
    }
}
