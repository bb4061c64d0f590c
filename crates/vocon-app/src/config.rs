//! Game configuration.
//!
//! [`GameConfig`] is seeded from the command line and changed afterwards only
//! through the App's explicit mutators (toggle complication, change speed).

use std::{fmt, str::FromStr, time::Duration};

use vocon_words::{VowelRule, parse_number};

use crate::AppError;

/// Milliseconds per tick for one unit of `(speed + 2) / 10`.
const BASE_UNIT_MS: f64 = 150.0;

/// Offset added to the speed value so that speed 0 still ticks.
const SPEED_OFFSET: f64 = 2.0;

/// Scroll speed. Lower values tick faster and make the round harder.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    /// Speed used when none is given.
    pub const DEFAULT: Self = Self(3.0);

    /// Validate a raw speed value.
    ///
    /// The value must be finite and yield a tick interval of at least one
    /// microsecond.
    pub fn new(value: f64) -> Result<Self, AppError> {
        let speed = Self(value);
        if value.is_finite() && value + SPEED_OFFSET > 0.0 && !speed.tick_interval().is_zero() {
            Ok(speed)
        } else {
            Err(AppError::InvalidSpeedValue { input: value.to_string() })
        }
    }

    /// Raw speed value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Time between ticks: `(speed + 2) / 10 * 150ms`.
    pub fn tick_interval(self) -> Duration {
        let ms = (self.0 + SPEED_OFFSET) / 10.0 * BASE_UNIT_MS;
        Duration::from_micros((ms * 1000.0).round() as u64)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Speed {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s)
            .ok_or_else(|| AppError::InvalidSpeedValue { input: s.to_string() })
            .and_then(|value| {
                Self::new(value).map_err(|_| AppError::InvalidSpeedValue { input: s.to_string() })
            })
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide game settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Scroll speed.
    pub speed: Speed,
    /// Intermittently mask the scrolling word.
    pub complication: bool,
    /// Show the splash banner before the first round.
    pub show_banner: bool,
    /// Whether `y` counts as a vowel.
    pub vowel_rule: VowelRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: Speed::DEFAULT,
            complication: false,
            show_banner: true,
            vowel_rule: VowelRule::default(),
        }
    }
}

impl GameConfig {
    /// Time between ticks at the configured speed.
    pub fn tick_interval(&self) -> Duration {
        self.speed.tick_interval()
    }
}
