use super::{ControlPoint, ControlPointDefaults, ControlPointInfo, SortedVec};

/// Timing-related info about this control point.
///
/// The beat length is in milliseconds per beat and applies from `time`
/// onwards until the next [`TimingPoint`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    pub time: f64,
    pub beat_len: f64,
}

impl TimingPoint {
    /// Beat length of 60 beats per minute.
    pub const DEFAULT_BEAT_LEN: f64 = 60_000.0 / 60.0;

    pub const DEFAULT_BPM: f64 = 60_000.0 / Self::DEFAULT_BEAT_LEN;

    pub const fn new(time: f64, beat_len: f64) -> Self {
        Self { time, beat_len }
    }

    /// Beats per minute of this point.
    ///
    /// Not finite if the beat length is zero.
    pub fn bpm(&self) -> f64 {
        60_000.0 / self.beat_len
    }
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            beat_len: Self::DEFAULT_BEAT_LEN,
        }
    }
}

impl ControlPoint for TimingPoint {
    const NAME: &'static str = "timing";

    fn time(&self) -> f64 {
        self.time
    }

    // Timing points always start a new measure so they are never redundant.
    fn is_redundant(&self, _: &Self) -> bool {
        false
    }
}

impl super::private::Sealed for TimingPoint {
    fn points(info: &ControlPointInfo) -> &SortedVec<Self> {
        &info.timing_points
    }

    fn points_mut(info: &mut ControlPointInfo) -> &mut SortedVec<Self> {
        &mut info.timing_points
    }

    fn default_point(defaults: &ControlPointDefaults) -> &Self {
        &defaults.timing
    }
}
