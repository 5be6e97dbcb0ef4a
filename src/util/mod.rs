pub mod float_ext;
pub mod sorted_vec;
pub mod sync;
