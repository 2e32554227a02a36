use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;

use crate::mjcf::MjcfDocument;
use crate::scene_graph::Object3D;

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub model_name: String,
    pub bodies: usize,
    /// Objects left out because they are not meshes.
    pub skipped: usize,
}

/// Output file name without directory or extension, e.g. `/tmp/scene.xml`
/// gives `scene`.
pub fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Builds the MJCF document for `objects`, keeping their order. Only mesh
/// objects become assets and bodies.
pub fn build_document<'a, I>(model_name: &str, objects: I) -> (MjcfDocument, usize)
where
    I: IntoIterator<Item = &'a Object3D>,
{
    let mut document = MjcfDocument::new(model_name);
    let mut skipped = 0;

    for object in objects {
        if !object.is_mesh() {
            log::debug!("Skipping {} ({:?})", object.name, object.kind);
            skipped += 1;
            continue;
        }

        let pose = object.transform.world_pose();

        log::debug!("Object: {}", object.name);
        log::debug!("Location: {}", pose.translation);
        let [w, x, y, z] = pose.wxyz();
        log::debug!("Quaternion Rotation (w, x, y, z): {}, {}, {}, {}", w, x, y, z);
        log::debug!("Scale: {}", pose.scale);

        if !pose.has_unit_scale() {
            log::warn!(
                "{} has scale {}, which is not written to the MJCF file",
                object.name,
                pose.scale
            );
        }

        document.add_mesh_body(&object.name, pose);
    }

    for name in document.bodies.iter().map(|body| body.name.as_str()).duplicates() {
        log::warn!("Duplicate mesh name {:?}, MuJoCo will reject the asset list", name);
    }

    (document, skipped)
}

/// Writes `objects` as a MuJoCo XML scene to `output_path`, replacing any
/// existing file. The model is named after the output file.
pub fn export_mujoco_xml<'a, I>(objects: I, output_path: &Path) -> anyhow::Result<ExportSummary>
where
    I: IntoIterator<Item = &'a Object3D>,
{
    let model_name = model_name_from_path(output_path);
    let (document, skipped) = build_document(&model_name, objects);

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    document
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(ExportSummary {
        model_name,
        bodies: document.bodies.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_graph::{ObjectKind, Transform};
    use glam::{Mat4, Vec3};

    fn object_at(name: &str, kind: ObjectKind, translation: Vec3) -> Object3D {
        let object = Object3D::new(name, kind, Transform::default());
        object
            .transform
            .set_world_matrix(Mat4::from_translation(translation));
        object
    }

    #[test]
    fn test_model_name_from_path() {
        assert_eq!(model_name_from_path(Path::new("/tmp/scene.xml")), "scene");
        assert_eq!(model_name_from_path(Path::new("robot.mjcf.xml")), "robot.mjcf");
        assert_eq!(model_name_from_path(Path::new("plain")), "plain");
    }

    #[test]
    fn test_build_document_filters_non_meshes() {
        let objects = vec![
            object_at("Light", ObjectKind::Light, Vec3::ZERO),
            object_at("A", ObjectKind::Mesh, Vec3::X),
            object_at("Camera", ObjectKind::Camera, Vec3::ZERO),
            object_at("B", ObjectKind::Mesh, Vec3::Y),
        ];

        let (document, skipped) = build_document("m", &objects);
        assert_eq!(skipped, 2);
        let names: Vec<_> = document.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(document.assets.len(), 2);
        assert_eq!(document.bodies[1].pose.translation, Vec3::Y);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let objects = vec![
            object_at("Dup", ObjectKind::Mesh, Vec3::ZERO),
            object_at("Dup", ObjectKind::Mesh, Vec3::ONE),
        ];

        let (document, _) = build_document("m", &objects);
        assert_eq!(document.assets.len(), 2);
        assert_eq!(document.bodies.len(), 2);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scene.xml");
        let objects: Vec<Object3D> = Vec::new();

        let err = export_mujoco_xml(&objects, &path).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
