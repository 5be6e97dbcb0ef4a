#![allow(unused)]

use rosu_timeline::{
    model::{
        break_period::BreakPeriod,
        control_point::TimingPoint,
        hit_object::{HitObject, HitObjectKind, HoldNote, Pos, Slider, Spinner},
    },
    Beatmap,
};

/// A map with a tempo change halfway and two breaks.
pub fn two_tempo_map() -> Beatmap {
    Beatmap::builder()
        .control_point(TimingPoint::new(0.0, 500.0))
        .control_point(TimingPoint::new(1000.0, 250.0))
        .breaks(breaks(&[(100.0, 200.0), (500.0, 550.0)]))
        .hit_objects([circle(0.0), circle(500.0), spinner(1500.0, 500.0)])
        .build()
}

pub fn breaks(bounds: &[(f64, f64)]) -> Vec<BreakPeriod> {
    bounds
        .iter()
        .map(|&(start, end)| BreakPeriod::new(start, end).unwrap())
        .collect()
}

pub fn circle(start_time: f64) -> HitObject {
    HitObject::circle(Pos::new(256.0, 192.0), start_time)
}

pub fn slider(start_time: f64, repeats: usize, span_duration: f64) -> HitObject {
    HitObject {
        pos: Pos::new(100.0, 100.0),
        start_time,
        kind: HitObjectKind::Slider(Slider {
            repeats,
            span_duration,
        }),
    }
}

pub fn spinner(start_time: f64, duration: f64) -> HitObject {
    HitObject {
        pos: Pos::new(256.0, 192.0),
        start_time,
        kind: HitObjectKind::Spinner(Spinner { duration }),
    }
}

pub fn hold(start_time: f64, duration: f64) -> HitObject {
    HitObject {
        pos: Pos::new(64.0, 192.0),
        start_time,
        kind: HitObjectKind::Hold(HoldNote { duration }),
    }
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);
