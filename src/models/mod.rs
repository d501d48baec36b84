pub mod envelope;
pub mod operation;

pub use envelope::{Envelope, OFFICIAL_EMAIL};
pub use operation::{json_integer, Operation};
