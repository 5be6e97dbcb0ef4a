use crate::model::{
    break_period::BreakPeriod,
    control_point::{ControlPoint, ControlPointDefaults, ControlPointInfo},
    hit_object::HitObject,
};

use super::{Beatmap, BeatmapInfo};

/// A builder for a [`Beatmap`].
///
/// Meant for producers such as decoders or editors that populate a map once
/// before handing it out.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapBuilder<T = HitObject> {
    info: BeatmapInfo,
    control_points: ControlPointInfo,
    breaks: Vec<BreakPeriod>,
    hit_objects: Vec<T>,
}

impl<T> BeatmapBuilder<T> {
    /// Create a new [`BeatmapBuilder`] with placeholder info and no content.
    pub fn new() -> Self {
        Self {
            info: BeatmapInfo::default(),
            control_points: ControlPointInfo::default(),
            breaks: Vec::new(),
            hit_objects: Vec::new(),
        }
    }

    /// Specify the beatmap's info.
    pub fn info(mut self, info: BeatmapInfo) -> Self {
        self.info = info;

        self
    }

    /// Specify the points that control point lookups fall back to.
    ///
    /// Points that were already added are kept.
    pub fn control_point_defaults(mut self, defaults: ControlPointDefaults) -> Self {
        let mut control_points = ControlPointInfo::with_defaults(defaults);
        control_points.extend(self.control_points.timing_points().iter().copied());
        control_points.extend(self.control_points.difficulty_points().iter().copied());
        control_points.extend(self.control_points.effect_points().iter().copied());
        self.control_points = control_points;

        self
    }

    /// Use the given control points, replacing all previously added ones.
    pub fn control_points(mut self, control_points: ControlPointInfo) -> Self {
        self.control_points = control_points;

        self
    }

    /// Add a control point.
    ///
    /// A point of the same kind at the same time is replaced.
    pub fn control_point<P: ControlPoint>(mut self, point: P) -> Self {
        self.control_points.add(point);

        self
    }

    /// Add a break.
    pub fn break_period(mut self, break_period: BreakPeriod) -> Self {
        self.breaks.push(break_period);

        self
    }

    /// Add multiple breaks.
    pub fn breaks<I: IntoIterator<Item = BreakPeriod>>(mut self, breaks: I) -> Self {
        self.breaks.extend(breaks);

        self
    }

    /// Append a hit object.
    ///
    /// Hit objects should be appended in order of their start time.
    pub fn hit_object(mut self, hit_object: T) -> Self {
        self.hit_objects.push(hit_object);

        self
    }

    /// Append multiple hit objects.
    pub fn hit_objects<I: IntoIterator<Item = T>>(mut self, hit_objects: I) -> Self {
        self.hit_objects.extend(hit_objects);

        self
    }

    /// Create the [`Beatmap`].
    pub fn build(self) -> Beatmap<T> {
        Beatmap::new(
            self.info,
            self.control_points,
            self.breaks,
            self.hit_objects,
        )
    }
}

impl<T> Default for BeatmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
