use std::{error, fmt, str::FromStr};

/// Capability of anything that can be placed on a beatmap's timeline.
///
/// The producer of a hit object sequence is expected to keep it sorted by
/// start time; nothing in this crate re-sorts it.
pub trait TimelineObject {
    /// The time at which the object starts.
    fn start_time(&self) -> f64;

    /// The time at which the object ends.
    ///
    /// Instantaneous objects end when they start.
    fn end_time(&self) -> f64 {
        self.start_time()
    }

    /// Stable identifier of the object's variant, suitable as discriminator
    /// for typed serialization.
    fn type_tag(&self) -> &'static str;
}

impl<T: TimelineObject + ?Sized> TimelineObject for &T {
    fn start_time(&self) -> f64 {
        T::start_time(self)
    }

    fn end_time(&self) -> f64 {
        T::end_time(self)
    }

    fn type_tag(&self) -> &'static str {
        T::type_tag(self)
    }
}

/// A position on the playfield.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Hitobject of the default beatmap type.
///
/// Objects are not ordered among themselves; compare their start times
/// instead.
///
/// ```compile_fail
/// use rosu_timeline::model::hit_object::{HitObject, Pos};
///
/// let a = HitObject::circle(Pos::default(), 0.0);
/// let b = HitObject::circle(Pos::default(), 1.0);
/// let _ = a < b;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: HitObjectKind,
}

impl HitObject {
    pub const fn circle(pos: Pos, start_time: f64) -> Self {
        Self {
            pos,
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// Whether the hitobject is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Hold(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(slider) => self.start_time + slider.duration(),
            HitObjectKind::Spinner(Spinner { duration })
            | HitObjectKind::Hold(HoldNote { duration }) => self.start_time + *duration,
        }
    }
}

impl TimelineObject for HitObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        HitObject::end_time(self)
    }

    fn type_tag(&self) -> &'static str {
        self.kind.tag().as_str()
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
    Hold(HoldNote),
}

impl HitObjectKind {
    pub const fn tag(&self) -> HitObjectTag {
        match self {
            Self::Circle => HitObjectTag::Circle,
            Self::Slider(_) => HitObjectTag::Slider,
            Self::Spinner(_) => HitObjectTag::Spinner,
            Self::Hold(_) => HitObjectTag::Hold,
        }
    }
}

/// A slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    pub repeats: usize,
    /// Duration of a single pass along the path in milliseconds.
    pub span_duration: f64,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// The total duration of all spans.
    pub fn duration(&self) -> f64 {
        self.span_count() as f64 * self.span_duration
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spinner {
    pub duration: f64,
}

/// A hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldNote {
    pub duration: f64,
}

/// Discriminator of a [`HitObjectKind`].
///
/// The string forms are stable and match the `type` key used when hit objects
/// are serialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitObjectTag {
    Circle,
    Slider,
    Spinner,
    Hold,
}

impl HitObjectTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Slider => "slider",
            Self::Spinner => "spinner",
            Self::Hold => "hold",
        }
    }
}

impl FromStr for HitObjectTag {
    type Err = ParseHitObjectTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "slider" => Ok(Self::Slider),
            "spinner" => Ok(Self::Spinner),
            "hold" => Ok(Self::Hold),
            _ => Err(ParseHitObjectTagError),
        }
    }
}

impl fmt::Display for HitObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown [`HitObjectTag`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseHitObjectTagError;

impl error::Error for ParseHitObjectTagError {}

impl fmt::Display for ParseHitObjectTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown hit object tag")
    }
}
