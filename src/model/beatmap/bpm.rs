use std::{collections::HashMap, error, fmt};

use crate::model::control_point::TimingPoint;

/// The beat length that was in effect for the longest cumulative duration.
///
/// `last_time` is the end of the playable part; timing points starting after
/// it do not contribute any duration. On equal durations, the beat length
/// that appears first wins.
pub(crate) fn most_common_beat_len(
    last_time: f64,
    timing_points: &[TimingPoint],
    default_beat_len: f64,
) -> Result<f64, BpmError> {
    let mut durations = BeatLenDurations::new(last_time);

    let next_times = timing_points
        .iter()
        .skip(1)
        .map(|t| t.time)
        .chain(Some(last_time));

    for (curr, next_time) in timing_points.iter().zip(next_times) {
        durations.add(curr.beat_len, curr.time, next_time);
    }

    if durations.entries.is_empty() {
        durations.add(default_beat_len, last_time, last_time);
    }

    let beat_len = durations.most_common();

    if !beat_len.is_finite() || beat_len <= 0.0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(beat_len, "Most common beat length is not usable");

        return Err(BpmError::InvalidBeatLen { beat_len });
    }

    Ok(beat_len)
}

/// Beats per minute of the most common beat length.
pub(crate) fn bpm(
    last_time: f64,
    timing_points: &[TimingPoint],
    default_beat_len: f64,
) -> Result<f64, BpmError> {
    let beat_len = most_common_beat_len(last_time, timing_points, default_beat_len)?;
    let bpm = 60_000.0 / beat_len;

    if bpm.is_finite() {
        Ok(bpm)
    } else {
        Err(BpmError::NonFiniteBpm { beat_len })
    }
}

/// Maps `beat_len` to a cumulative duration, remembering the order in which
/// beat lengths first appeared.
struct BeatLenDurations {
    last_time: f64,
    indices: HashMap<u64, usize>,
    entries: Vec<(f64, f64)>,
}

impl BeatLenDurations {
    fn new(last_time: f64) -> Self {
        Self {
            last_time,
            indices: HashMap::default(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, beat_len: f64, curr_time: f64, next_time: f64) {
        // `0.0` and `-0.0` compare equal so they share a group
        let key = if beat_len == 0.0 { 0 } else { beat_len.to_bits() };

        let entries = &mut self.entries;

        let idx = *self.indices.entry(key).or_insert_with(|| {
            entries.push((beat_len, 0.0));

            entries.len() - 1
        });

        if curr_time <= self.last_time {
            entries[idx].1 += next_time - curr_time;
        }
    }

    fn most_common(&self) -> f64 {
        let mut max_duration = f64::NEG_INFINITY;
        let mut max_beat_len = f64::NEG_INFINITY;

        for &(beat_len, duration) in self.entries.iter() {
            if duration > max_duration {
                max_duration = duration;
                max_beat_len = beat_len;
            }
        }

        max_beat_len
    }
}

/// Error when the most common beat length of a beatmap cannot be turned into
/// beats per minute.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum BpmError {
    /// The selected beat length was zero, negative, or not finite.
    InvalidBeatLen { beat_len: f64 },
    /// The beat length was too small to produce a finite bpm.
    NonFiniteBpm { beat_len: f64 },
}

impl BpmError {
    /// The beat length that caused the error.
    pub const fn beat_len(&self) -> f64 {
        match self {
            Self::InvalidBeatLen { beat_len } | Self::NonFiniteBpm { beat_len } => *beat_len,
        }
    }
}

impl error::Error for BpmError {}

impl fmt::Display for BpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBeatLen { beat_len } => {
                write!(f, "most common beat length {beat_len} is not positive and finite")
            }
            Self::NonFiniteBpm { beat_len } => {
                write!(f, "beat length {beat_len} does not produce a finite bpm")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: f64 = TimingPoint::DEFAULT_BEAT_LEN;

    fn points(points: &[(f64, f64)]) -> Vec<TimingPoint> {
        points
            .iter()
            .map(|&(time, beat_len)| TimingPoint::new(time, beat_len))
            .collect()
    }

    #[test]
    fn tie_keeps_first_beat_len() {
        let points = points(&[(0.0, 500.0), (1000.0, 250.0)]);

        assert_eq!(most_common_beat_len(2000.0, &points, DEFAULT), Ok(500.0));
        assert_eq!(bpm(2000.0, &points, DEFAULT), Ok(120.0));
    }

    #[test]
    fn durations_are_summed_per_beat_len() {
        let points = points(&[(0.0, 500.0), (100.0, 250.0), (400.0, 500.0), (450.0, 250.0)]);

        // 500: 100 + 50, 250: 300 + 200
        assert_eq!(most_common_beat_len(650.0, &points, DEFAULT), Ok(250.0));
    }

    #[test]
    fn points_after_last_time_do_not_count() {
        let points = points(&[(0.0, 400.0), (500.0, 300.0), (5000.0, 200.0)]);

        // the middle point extends up to the point after `last_time`
        assert_eq!(most_common_beat_len(1000.0, &points, DEFAULT), Ok(300.0));
    }

    #[test]
    fn empty_uses_default() {
        assert_eq!(most_common_beat_len(0.0, &[], DEFAULT), Ok(DEFAULT));
        assert_eq!(bpm(0.0, &[], DEFAULT), Ok(60.0));
        assert_eq!(most_common_beat_len(3000.0, &[], 250.0), Ok(250.0));
    }

    #[test]
    fn zero_beat_len_is_an_error() {
        let points = points(&[(0.0, 0.0)]);

        assert_eq!(
            bpm(1000.0, &points, DEFAULT),
            Err(BpmError::InvalidBeatLen { beat_len: 0.0 })
        );
    }

    #[test]
    fn negative_and_nan_beat_len_are_errors() {
        assert!(bpm(1000.0, &points(&[(0.0, -100.0)]), DEFAULT).is_err());

        let err = bpm(1000.0, &points(&[(0.0, f64::NAN)]), DEFAULT).unwrap_err();
        assert!(err.beat_len().is_nan());
    }

    #[test]
    fn subnormal_beat_len_is_an_error() {
        let points = points(&[(0.0, f64::MIN_POSITIVE / 1e10)]);

        assert!(matches!(
            bpm(1000.0, &points, DEFAULT),
            Err(BpmError::NonFiniteBpm { .. })
        ));
    }
}
