pub use self::{difficulty::DifficultyPoint, effect::EffectPoint, timing::TimingPoint};

pub use crate::util::sorted_vec::SortedVec;

mod difficulty;
mod effect;
mod timing;

pub(crate) mod private {
    use super::{ControlPointDefaults, ControlPointInfo, SortedVec};

    pub trait Sealed: Sized {
        fn points(info: &ControlPointInfo) -> &SortedVec<Self>;

        fn points_mut(info: &mut ControlPointInfo) -> &mut SortedVec<Self>;

        fn default_point(defaults: &ControlPointDefaults) -> &Self;
    }
}

/// A timestamped record that changes some timeline attribute from its time
/// onwards until the next point of the same kind.
///
/// Implemented for [`TimingPoint`], [`DifficultyPoint`], and [`EffectPoint`].
pub trait ControlPoint: Copy + private::Sealed {
    /// Human-readable name of the kind.
    const NAME: &'static str;

    /// The time at which this point takes effect.
    fn time(&self) -> f64;

    /// Whether adding this point on top of `existing` would not change
    /// anything.
    fn is_redundant(&self, existing: &Self) -> bool;
}

/// Points that are in effect when a [`ControlPointInfo`] has no point of
/// that kind at a given time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPointDefaults {
    pub timing: TimingPoint,
    pub difficulty: DifficultyPoint,
    pub effect: EffectPoint,
}

/// All control points of a beatmap, each kind sorted by time.
///
/// Lookups are piecewise-constant: the point in effect at some time is the
/// last point of that kind whose time is less than or equal to it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPointInfo {
    timing_points: SortedVec<TimingPoint>,
    difficulty_points: SortedVec<DifficultyPoint>,
    effect_points: SortedVec<EffectPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    defaults: ControlPointDefaults,
}

impl ControlPointInfo {
    /// Create an empty [`ControlPointInfo`] with the default points of each
    /// kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty [`ControlPointInfo`] whose lookups fall back to the
    /// given points.
    pub fn with_defaults(defaults: ControlPointDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// The points that lookups fall back to.
    pub const fn defaults(&self) -> &ControlPointDefaults {
        &self.defaults
    }

    /// Add a point, keeping its kind sorted by time.
    ///
    /// If a point of the same kind already exists at the exact same time, it
    /// is replaced and returned.
    pub fn add<P: ControlPoint>(&mut self, point: P) -> Option<P> {
        let replaced = P::points_mut(self).push(point);

        #[cfg(feature = "tracing")]
        if replaced.is_some() {
            tracing::trace!(kind = P::NAME, time = point.time(), "Replaced control point");
        }

        replaced
    }

    /// Add a point unless it would not change the attributes in effect at
    /// its time.
    ///
    /// Returns whether the point was added.
    pub fn add_if_not_redundant<P: ControlPoint>(&mut self, point: P) -> bool {
        if point.is_redundant(self.point_at(point.time())) {
            return false;
        }

        self.add(point);

        true
    }

    /// Remove the point of kind `P` that is placed at exactly `time`.
    pub fn remove<P: ControlPoint>(&mut self, time: f64) -> Option<P> {
        let points = P::points_mut(self);
        let idx = points.index_of(time)?;

        Some(points.remove(idx))
    }

    /// All points of kind `P`, sorted by time.
    pub fn points<P: ControlPoint>(&self) -> &[P] {
        P::points(self)
    }

    /// The point of kind `P` in effect at the given time.
    ///
    /// Falls back to the default point if there are no points of this kind
    /// or if `time` is before the first one.
    pub fn point_at<P: ControlPoint>(&self, time: f64) -> &P {
        let points = P::points(self);

        points
            .index_at(time)
            .map_or_else(|| P::default_point(&self.defaults), |i| &points[i])
    }

    /// All [`TimingPoint`]s, sorted by time.
    pub fn timing_points(&self) -> &[TimingPoint] {
        &self.timing_points
    }

    /// All [`DifficultyPoint`]s, sorted by time.
    pub fn difficulty_points(&self) -> &[DifficultyPoint] {
        &self.difficulty_points
    }

    /// All [`EffectPoint`]s, sorted by time.
    pub fn effect_points(&self) -> &[EffectPoint] {
        &self.effect_points
    }

    /// Finds the [`TimingPoint`] that is active at the given time.
    pub fn timing_point_at(&self, time: f64) -> &TimingPoint {
        self.point_at(time)
    }

    /// Finds the [`DifficultyPoint`] that is active at the given time.
    pub fn difficulty_point_at(&self, time: f64) -> &DifficultyPoint {
        self.point_at(time)
    }

    /// Finds the [`EffectPoint`] that is active at the given time.
    pub fn effect_point_at(&self, time: f64) -> &EffectPoint {
        self.point_at(time)
    }

    /// The lowest and highest bpm across all timing points.
    ///
    /// Both are the default bpm if there are no timing points.
    pub fn bpm_range(&self) -> (f64, f64) {
        let mut bpms = self.timing_points.iter().map(TimingPoint::bpm);

        let Some(first) = bpms.next() else {
            let bpm = self.defaults.timing.bpm();

            return (bpm, bpm);
        };

        bpms.fold((first, first), |(min, max), bpm| (min.min(bpm), max.max(bpm)))
    }

    /// The amount of points across all kinds.
    pub fn len(&self) -> usize {
        self.timing_points.len() + self.difficulty_points.len() + self.effect_points.len()
    }

    /// Whether there are no points of any kind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all points of all kinds. Defaults are kept.
    pub fn clear(&mut self) {
        self.timing_points.clear();
        self.difficulty_points.clear();
        self.effect_points.clear();
    }
}

impl<P: ControlPoint> Extend<P> for ControlPointInfo {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            self.add(point);
        }
    }
}
