//! Exports the mesh objects of a 3D scene as a MuJoCo (MJCF) XML scene: one
//! mesh asset and one body with a visual and a collision geom per object.

pub mod config;
pub mod export;
pub mod math;
pub mod mjcf;
pub mod scene_graph;

pub use export::{export_mujoco_xml, ExportSummary};
