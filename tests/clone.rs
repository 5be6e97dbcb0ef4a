use rosu_timeline::{
    model::{break_period::BreakPeriod, control_point::TimingPoint},
    Beatmap,
};

use crate::common::{circle, two_tempo_map};

mod common;

#[test]
fn clone_copies_control_points() {
    let original = two_tempo_map();
    let mut clone = original.clone();

    clone.control_points.add(TimingPoint::new(5000.0, 100.0));

    assert_eq!(original.control_points.timing_points().len(), 2);
    assert_eq!(clone.control_points.timing_points().len(), 3);
}

#[test]
fn shallow_clone_shares_until_written() {
    let original = two_tempo_map();
    let mut clone = original.shallow_clone();

    assert!(clone.shares_hit_objects_with(&original));
    assert!(clone.shares_breaks_with(&original));

    clone.push_hit_object(circle(3000.0));

    assert!(!clone.shares_hit_objects_with(&original));
    assert!(clone.shares_breaks_with(&original));
    assert_eq!(original.hit_objects().len(), 3);
    assert_eq!(clone.hit_objects().len(), 4);
}

#[test]
fn clone_edits_never_leak_into_original() {
    let original = two_tempo_map();
    let mut clone = original.clone();

    clone.breaks_mut().clear();
    clone.hit_objects_mut()[0].start_time = -100.0;
    clone.info.version = "Hard".to_owned();

    assert_eq!(original.total_break_time(), 150.0);
    assert_eq!(original.hit_objects()[0].start_time, 0.0);
    assert_eq!(original.info.version, "Normal");
    assert_eq!(clone.total_break_time(), 0.0);
}

#[test]
fn original_edits_never_leak_into_clone() {
    let mut original = two_tempo_map();
    let clone = original.clone();

    original.push_break(BreakPeriod::new(3000.0, 4000.0).unwrap());
    original.control_points.clear();

    assert_eq!(clone.breaks().len(), 2);
    assert_eq!(clone.control_points.timing_points().len(), 2);
}

#[test]
fn deep_clone_shares_nothing() {
    let original = two_tempo_map();
    let clone = original.deep_clone();

    assert!(!clone.shares_hit_objects_with(&original));
    assert!(!clone.shares_breaks_with(&original));
    assert_eq!(clone, original);
}

#[test]
fn replacing_collections_detaches() {
    let original = two_tempo_map();
    let mut clone = original.clone();

    clone.set_hit_objects(Vec::new());
    clone.set_breaks(Vec::new());

    assert!(!clone.shares_hit_objects_with(&original));
    assert!(!clone.shares_breaks_with(&original));
    assert_eq!(original.hit_objects().len(), 3);
}

#[test]
fn clone_without_clone_bound() {
    #[derive(Debug, PartialEq)]
    struct NotClone(f64);

    let map = Beatmap::new(
        Default::default(),
        Default::default(),
        Vec::new(),
        vec![NotClone(1.0)],
    );

    let clone = map.clone();

    assert!(clone.shares_hit_objects_with(&map));
    assert_eq!(clone.hit_objects(), map.hit_objects());
}

#[cfg(feature = "sync")]
#[test]
fn readers_on_other_threads() {
    let map = two_tempo_map();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (map.bpm(), map.total_break_time())))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), (Ok(120.0), 150.0));
        }
    });

    let branch = map.clone();
    let bpm = std::thread::spawn(move || branch.bpm()).join().unwrap();

    assert_eq!(bpm, Ok(120.0));
}
