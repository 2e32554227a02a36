//! MuJoCo MJCF scene documents and their textual form.

pub mod document;
pub mod format;

pub use document::{Body, GeomClass, MeshAsset, MjcfDocument, MESH_FILE_EXTENSION};
