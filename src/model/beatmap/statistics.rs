use crate::model::hit_object::TimelineObject;

/// Amount of hit objects of one variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BeatmapStatistic {
    /// The variant's [`TimelineObject::type_tag`].
    pub tag: &'static str,
    pub count: usize,
}

/// Counts per variant in order of first appearance.
pub(crate) fn count_by_tag<T: TimelineObject>(hit_objects: &[T]) -> Vec<BeatmapStatistic> {
    let mut stats: Vec<BeatmapStatistic> = Vec::new();

    for h in hit_objects {
        let tag = h.type_tag();

        match stats.iter_mut().find(|stat| stat.tag == tag) {
            Some(stat) => stat.count += 1,
            None => stats.push(BeatmapStatistic { tag, count: 1 }),
        }
    }

    stats
}
