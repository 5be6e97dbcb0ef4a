use std::fmt;

use crate::util::sync::Shared;

pub use self::{
    bpm::BpmError,
    builder::BeatmapBuilder,
    info::{BeatmapDifficulty, BeatmapInfo, BeatmapMetadata},
    statistics::BeatmapStatistic,
};

use super::{
    break_period::BreakPeriod,
    control_point::{ControlPointInfo, TimingPoint},
    hit_object::{HitObject, TimelineObject},
};

mod bpm;
mod builder;
mod info;
mod statistics;

/// The timeline of a playable chart: info, control points, breaks, and hit
/// objects.
///
/// # Cloning
///
/// [`Clone`] is the same as [`Beatmap::shallow_clone`]: the control points are
/// copied while breaks and hit objects are shared with the original until
/// either side mutates them. Mutation through a clone never becomes visible
/// in the original. Use [`Beatmap::deep_clone`] to copy everything up front.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap<T = HitObject> {
    pub info: BeatmapInfo,
    pub control_points: ControlPointInfo,
    breaks: Shared<Vec<BreakPeriod>>,
    hit_objects: Shared<Vec<T>>,
}

impl<T> Beatmap<T> {
    /// Create a new [`Beatmap`].
    ///
    /// Hit objects are expected to be sorted by start time.
    pub fn new(
        info: BeatmapInfo,
        control_points: ControlPointInfo,
        breaks: Vec<BreakPeriod>,
        hit_objects: Vec<T>,
    ) -> Self {
        Self {
            info,
            control_points,
            breaks: Shared::new(breaks),
            hit_objects: Shared::new(hit_objects),
        }
    }

    /// Returns a [`BeatmapBuilder`] to populate a new [`Beatmap`].
    pub fn builder() -> BeatmapBuilder<T> {
        BeatmapBuilder::new()
    }

    /// All hit objects in the order they were provided.
    pub fn hit_objects(&self) -> &[T] {
        &self.hit_objects
    }

    /// All breaks in the order they were provided.
    pub fn breaks(&self) -> &[BreakPeriod] {
        &self.breaks
    }

    /// Replace all hit objects.
    pub fn set_hit_objects(&mut self, hit_objects: Vec<T>) {
        self.hit_objects = Shared::new(hit_objects);
    }

    /// Replace all breaks.
    pub fn set_breaks(&mut self, breaks: Vec<BreakPeriod>) {
        self.breaks = Shared::new(breaks);
    }

    /// Mutable access to the breaks.
    ///
    /// Copies the breaks first if they are shared with a clone.
    pub fn breaks_mut(&mut self) -> &mut Vec<BreakPeriod> {
        Shared::make_mut(&mut self.breaks)
    }

    pub fn push_break(&mut self, break_period: BreakPeriod) {
        self.breaks_mut().push(break_period);
    }

    /// Sum up the duration of all breaks (in milliseconds).
    pub fn total_break_time(&self) -> f64 {
        self.breaks.iter().map(BreakPeriod::duration).sum()
    }

    /// Copy the control points and share breaks and hit objects with `self`.
    pub fn shallow_clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            control_points: self.control_points.clone(),
            breaks: Shared::clone(&self.breaks),
            hit_objects: Shared::clone(&self.hit_objects),
        }
    }

    /// Whether `self` and `other` still share the same hit object storage.
    pub fn shares_hit_objects_with(&self, other: &Self) -> bool {
        Shared::ptr_eq(&self.hit_objects, &other.hit_objects)
    }

    /// Whether `self` and `other` still share the same break storage.
    pub fn shares_breaks_with(&self, other: &Self) -> bool {
        Shared::ptr_eq(&self.breaks, &other.breaks)
    }
}

impl<T: Clone> Beatmap<T> {
    /// Mutable access to the hit objects.
    ///
    /// Copies the hit objects first if they are shared with a clone.
    pub fn hit_objects_mut(&mut self) -> &mut Vec<T> {
        Shared::make_mut(&mut self.hit_objects)
    }

    pub fn push_hit_object(&mut self, hit_object: T) {
        self.hit_objects_mut().push(hit_object);
    }

    /// Copy all collections so that nothing is shared with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            control_points: self.control_points.clone(),
            breaks: Shared::detached(&self.breaks),
            hit_objects: Shared::detached(&self.hit_objects),
        }
    }
}

impl<T: TimelineObject> Beatmap<T> {
    /// The last playable time; the last timing point extends up to here.
    ///
    /// This is the end time of the last hit object, or the time of the last
    /// timing point if there are no hit objects, or `0.0` otherwise.
    pub fn last_time(&self) -> f64 {
        self.hit_objects
            .last()
            .map(T::end_time)
            .or_else(|| self.control_points.timing_points().last().map(|t| t.time))
            .unwrap_or(0.0)
    }

    /// The beat length that was in effect for the longest time.
    ///
    /// On equal durations, the earlier beat length wins.
    pub fn most_common_beat_len(&self) -> Result<f64, BpmError> {
        bpm::most_common_beat_len(
            self.last_time(),
            self.control_points.timing_points(),
            self.control_points.defaults().timing.beat_len,
        )
    }

    /// The beats per minute of the map, based on the most common beat length.
    pub fn bpm(&self) -> Result<f64, BpmError> {
        bpm::bpm(
            self.last_time(),
            self.control_points.timing_points(),
            self.control_points.defaults().timing.beat_len,
        )
    }

    /// Same as [`Beatmap::bpm`] but falls back to the bpm of the default
    /// timing point.
    pub fn bpm_or_default(&self) -> f64 {
        self.bpm()
            .unwrap_or_else(|_| self.control_points.defaults().timing.bpm())
    }

    /// Amount of hit objects per variant, in order of first appearance.
    pub fn statistics(&self) -> Vec<BeatmapStatistic> {
        statistics::count_by_tag(&self.hit_objects)
    }
}

impl<T> Beatmap<T> {
    /// Finds the [`TimingPoint`] that is active at the given time.
    pub fn timing_point_at(&self, time: f64) -> &TimingPoint {
        self.control_points.timing_point_at(time)
    }
}

impl<T> Clone for Beatmap<T> {
    fn clone(&self) -> Self {
        self.shallow_clone()
    }
}

impl<T> Default for Beatmap<T> {
    fn default() -> Self {
        Self::new(
            BeatmapInfo::default(),
            ControlPointInfo::default(),
            Vec::new(),
            Vec::new(),
        )
    }
}

impl<T> fmt::Display for Beatmap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.info, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{HitObjectKind, Pos, Spinner};

    use super::*;

    fn map() -> Beatmap {
        let mut map: Beatmap = Beatmap::default();
        map.control_points.add(TimingPoint::new(0.0, 500.0));
        map.control_points.add(TimingPoint::new(1000.0, 250.0));
        map.push_hit_object(HitObject::circle(Pos::default(), 500.0));
        map.push_hit_object(HitObject {
            pos: Pos::default(),
            start_time: 1500.0,
            kind: HitObjectKind::Spinner(Spinner { duration: 500.0 }),
        });

        map
    }

    #[test]
    fn last_time_prefers_hit_objects() {
        let mut map = map();
        assert_eq!(map.last_time(), 2000.0);

        map.set_hit_objects(Vec::new());
        assert_eq!(map.last_time(), 1000.0);

        map.control_points.clear();
        assert_eq!(map.last_time(), 0.0);
    }

    #[test]
    fn bpm_of_tied_durations() {
        let map = map();

        assert_eq!(map.most_common_beat_len(), Ok(500.0));
        assert_eq!(map.bpm(), Ok(120.0));
        assert_eq!(map.bpm(), map.bpm());
    }

    #[test]
    fn bpm_or_default_on_invalid_beat_len() {
        let mut map: Beatmap = Beatmap::default();
        map.control_points.add(TimingPoint::new(0.0, 0.0));

        assert!(map.bpm().is_err());
        assert_eq!(map.bpm_or_default(), TimingPoint::DEFAULT_BPM);
    }

    #[test]
    fn statistics_per_tag() {
        let mut map = map();
        map.push_hit_object(HitObject::circle(Pos::default(), 2500.0));

        let stats = map.statistics();

        assert_eq!(
            stats,
            [
                BeatmapStatistic {
                    tag: "circle",
                    count: 2
                },
                BeatmapStatistic {
                    tag: "spinner",
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn default_is_empty() {
        let map: Beatmap = Beatmap::default();

        assert!(map.hit_objects().is_empty());
        assert!(map.breaks().is_empty());
        assert!(map.control_points.is_empty());
        assert_eq!(map.total_break_time(), 0.0);
        assert_eq!(map.to_string(), "Unknown - Unknown (Unknown Creator) [Normal]");
    }
}
