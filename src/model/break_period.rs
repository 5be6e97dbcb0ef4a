use std::{error, fmt};

/// A pause in gameplay during which no hit object is active.
///
/// Breaks may overlap each other; only the bounds of a single break are
/// validated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBreakPeriod"))]
pub struct BreakPeriod {
    start_time: f64,
    end_time: f64,
}

impl BreakPeriod {
    /// The minimum duration for a break to show its effects.
    pub const MIN_BREAK_DURATION: f64 = 650.0;

    /// Create a new [`BreakPeriod`] from `start_time` up to `end_time`.
    pub fn new(start_time: f64, end_time: f64) -> Result<Self, InvalidBreakPeriod> {
        if !start_time.is_finite() || !end_time.is_finite() || end_time < start_time {
            return Err(InvalidBreakPeriod {
                start_time,
                end_time,
            });
        }

        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    pub const fn end_time(&self) -> f64 {
        self.end_time
    }

    /// The duration of the break in milliseconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether the break is long enough to show its effects.
    pub fn has_effect(&self) -> bool {
        self.duration() >= Self::MIN_BREAK_DURATION
    }

    /// Whether `time` lies within `[start_time, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

/// Error when creating a [`BreakPeriod`] whose end lies before its start or
/// whose bounds are not finite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidBreakPeriod {
    pub start_time: f64,
    pub end_time: f64,
}

impl error::Error for InvalidBreakPeriod {}

impl fmt::Display for InvalidBreakPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid break period from {} to {}",
            self.start_time, self.end_time
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBreakPeriod {
    start_time: f64,
    end_time: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBreakPeriod> for BreakPeriod {
    type Error = InvalidBreakPeriod;

    fn try_from(raw: RawBreakPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start_time, raw.end_time)
    }
}
