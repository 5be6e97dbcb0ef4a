/// Beatmap related types.
pub mod beatmap;

/// Break related types.
pub mod break_period;

/// Control point related types.
pub mod control_point;

/// Hitobject related types.
pub mod hit_object;
