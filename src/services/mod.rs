pub mod math;
pub mod providers;
