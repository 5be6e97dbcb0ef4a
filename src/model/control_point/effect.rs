use crate::util::float_ext::FloatExt;

use super::{ControlPoint, ControlPointDefaults, ControlPointInfo, SortedVec};

/// Effect-related info about this control point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectPoint {
    pub time: f64,
    pub kiai: bool,
    pub scroll_speed: f64,
}

impl EffectPoint {
    pub const DEFAULT_KIAI: bool = false;
    pub const DEFAULT_SCROLL_SPEED: f64 = 1.0;

    pub const fn new(time: f64, kiai: bool) -> Self {
        Self {
            time,
            kiai,
            scroll_speed: Self::DEFAULT_SCROLL_SPEED,
        }
    }
}

impl Default for EffectPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            kiai: Self::DEFAULT_KIAI,
            scroll_speed: Self::DEFAULT_SCROLL_SPEED,
        }
    }
}

impl ControlPoint for EffectPoint {
    const NAME: &'static str = "effect";

    fn time(&self) -> f64 {
        self.time
    }

    fn is_redundant(&self, existing: &Self) -> bool {
        self.kiai == existing.kiai && FloatExt::eq(self.scroll_speed, existing.scroll_speed)
    }
}

impl super::private::Sealed for EffectPoint {
    fn points(info: &ControlPointInfo) -> &SortedVec<Self> {
        &info.effect_points
    }

    fn points_mut(info: &mut ControlPointInfo) -> &mut SortedVec<Self> {
        &mut info.effect_points
    }

    fn default_point(defaults: &ControlPointDefaults) -> &Self {
        &defaults.effect
    }
}
