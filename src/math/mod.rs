pub mod decompose;

pub use decompose::{decompose, Pose};
