use crate::util::float_ext::FloatExt;

use super::{ControlPoint, ControlPointDefaults, ControlPointInfo, SortedVec};

/// Difficulty-related info about this control point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyPoint {
    pub time: f64,
    pub slider_velocity: f64,
    pub generate_ticks: bool,
}

impl DifficultyPoint {
    pub const DEFAULT_SLIDER_VELOCITY: f64 = 1.0;
    pub const DEFAULT_GENERATE_TICKS: bool = true;

    pub const fn new(time: f64, slider_velocity: f64) -> Self {
        Self {
            time,
            slider_velocity,
            generate_ticks: Self::DEFAULT_GENERATE_TICKS,
        }
    }
}

impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            slider_velocity: Self::DEFAULT_SLIDER_VELOCITY,
            generate_ticks: Self::DEFAULT_GENERATE_TICKS,
        }
    }
}

impl ControlPoint for DifficultyPoint {
    const NAME: &'static str = "difficulty";

    fn time(&self) -> f64 {
        self.time
    }

    fn is_redundant(&self, existing: &Self) -> bool {
        self.generate_ticks == existing.generate_ticks
            && FloatExt::eq(self.slider_velocity, existing.slider_velocity)
    }
}

impl super::private::Sealed for DifficultyPoint {
    fn points(info: &ControlPointInfo) -> &SortedVec<Self> {
        &info.difficulty_points
    }

    fn points_mut(info: &mut ControlPointInfo) -> &mut SortedVec<Self> {
        &mut info.difficulty_points
    }

    fn default_point(defaults: &ControlPointDefaults) -> &Self {
        &defaults.difficulty
    }
}
