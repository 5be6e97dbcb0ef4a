use std::fmt;

/// Descriptive info of a beatmap.
///
/// Opaque to the timeline; it is carried along and displayed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeatmapInfo {
    pub metadata: BeatmapMetadata,
    /// Name of the difficulty.
    pub version: String,
    pub difficulty: BeatmapDifficulty,
}

impl Default for BeatmapInfo {
    fn default() -> Self {
        Self {
            metadata: BeatmapMetadata::default(),
            version: "Normal".to_owned(),
            difficulty: BeatmapDifficulty::default(),
        }
    }
}

impl fmt::Display for BeatmapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.metadata, self.version)
    }
}

/// Song and creator info of a beatmap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeatmapMetadata {
    pub title: String,
    pub artist: String,
    pub author: String,
}

impl Default for BeatmapMetadata {
    fn default() -> Self {
        Self {
            title: "Unknown".to_owned(),
            artist: "Unknown".to_owned(),
            author: "Unknown Creator".to_owned(),
        }
    }
}

impl fmt::Display for BeatmapMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.artist, self.title, self.author)
    }
}

/// Base difficulty settings of a beatmap.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BeatmapDifficulty {
    pub hp: f32,
    pub cs: f32,
    pub od: f32,
    pub ar: f32,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,
}

impl BeatmapDifficulty {
    pub const DEFAULT_DIFFICULTY: f32 = 5.0;
    pub const DEFAULT_SLIDER_MULTIPLIER: f64 = 1.4;
    pub const DEFAULT_SLIDER_TICK_RATE: f64 = 1.0;
}

impl Default for BeatmapDifficulty {
    fn default() -> Self {
        Self {
            hp: Self::DEFAULT_DIFFICULTY,
            cs: Self::DEFAULT_DIFFICULTY,
            od: Self::DEFAULT_DIFFICULTY,
            ar: Self::DEFAULT_DIFFICULTY,
            slider_multiplier: Self::DEFAULT_SLIDER_MULTIPLIER,
            slider_tick_rate: Self::DEFAULT_SLIDER_TICK_RATE,
        }
    }
}
