use id_arena::Id;

use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// What a scene object carries. Only meshes end up in an MJCF export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    Mesh,
    Camera,
    Light,
    #[default]
    Empty,
}

impl ObjectKind {
    pub fn from_gltf_node(node: &gltf::Node) -> Self {
        if node.mesh().is_some() {
            ObjectKind::Mesh
        } else if node.camera().is_some() {
            ObjectKind::Camera
        } else if node.light().is_some() {
            ObjectKind::Light
        } else {
            ObjectKind::Empty
        }
    }
}

#[derive(Debug, Default)]
pub struct Object3D {
    pub name: String,
    pub kind: ObjectKind,
    pub transform: Transform,
    pub selected: bool,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn new(name: impl Into<String>, kind: ObjectKind, transform: Transform) -> Self {
        Self {
            name: name.into(),
            kind,
            transform,
            ..Default::default()
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHTS_GLTF: &str = r#"{
        "asset": { "version": "2.0" },
        "extensionsUsed": ["KHR_lights_punctual"],
        "extensions": {
            "KHR_lights_punctual": { "lights": [{ "type": "point", "intensity": 20.0 }] }
        },
        "scenes": [{ "nodes": [0, 1] }],
        "nodes": [
            { "name": "Lamp", "extensions": { "KHR_lights_punctual": { "light": 0 } } },
            { "name": "Pivot" }
        ]
    }"#;

    #[test]
    fn test_kind_from_gltf_node() {
        let gltf = gltf::Gltf::from_slice(LIGHTS_GLTF.as_bytes()).unwrap();
        let kinds: Vec<_> = gltf
            .document
            .nodes()
            .map(|node| ObjectKind::from_gltf_node(&node))
            .collect();
        assert_eq!(kinds, vec![ObjectKind::Light, ObjectKind::Empty]);
    }

    #[test]
    fn test_only_meshes_are_meshes() {
        let mut object = Object3D::new("Lamp", ObjectKind::Light, Transform::default());
        assert!(!object.is_mesh());
        object.kind = ObjectKind::Mesh;
        assert!(object.is_mesh());
    }
}
