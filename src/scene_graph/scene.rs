use anyhow::{bail, Context};
use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;
use std::path::Path;

use crate::scene_graph::object3d::{Object3D, ObjectId, ObjectKind};
use crate::scene_graph::transform::Transform;

pub struct Scene {
    pub objects: Arena<Object3D>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
        }
    }

    /// Loads the node hierarchy of a `.gltf`/`.glb` file. Buffers and images
    /// are never read, only nodes and what they reference.
    ///
    /// Picks `scene_index` if given, otherwise the file's default scene,
    /// otherwise its first scene.
    pub fn from_gltf_file(path: &Path, scene_index: Option<usize>) -> anyhow::Result<Self> {
        let gltf = gltf::Gltf::open(path)
            .with_context(|| format!("Failed to read glTF file {}", path.display()))?;

        Self::from_gltf_document(&gltf.document, scene_index)
            .with_context(|| format!("Failed to load scene from {}", path.display()))
    }

    pub fn from_gltf_document(
        document: &gltf::Document,
        scene_index: Option<usize>,
    ) -> anyhow::Result<Self> {
        let gltf_scene = match scene_index {
            Some(index) => document.scenes().nth(index).with_context(|| {
                format!(
                    "Scene index {} out of range ({} scenes)",
                    index,
                    document.scenes().count()
                )
            })?,
            None => document
                .default_scene()
                .or_else(|| document.scenes().next())
                .context("No scenes in gltf")?,
        };

        log::debug!(
            "Loading glTF scene {} ({})",
            gltf_scene.index(),
            gltf_scene.name().unwrap_or("unnamed")
        );

        let mut scene = Scene::new();
        scene.spawn_gltf_scene(&gltf_scene);
        scene.update_transforms();

        Ok(scene)
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.len() == 0
    }

    pub fn spawn_gltf_scene(&mut self, scene: &gltf::Scene) -> Option<ObjectId> {
        let mut last_object_id = None;

        for node in scene.nodes() {
            last_object_id = Some(self.spawn_gltf_node(&node, None));
        }

        last_object_id
    }

    fn spawn_gltf_node(&mut self, node: &gltf::Node, parent: Option<ObjectId>) -> ObjectId {
        let name = node
            .name()
            .map(String::from)
            .unwrap_or_else(|| format!("node{}", node.index()));
        let (translation, rotation, scale) = node.transform().decomposed();

        let object = Object3D::new(
            name,
            ObjectKind::from_gltf_node(node),
            Transform::new(
                Vec3::from(translation),
                Quat::from_array(rotation),
                Vec3::from(scale),
            ),
        );

        let object_id = self.add_object(object);

        if let Some(parent_id) = parent {
            self.set_object_parent(object_id, Some(parent_id));
        }

        for child in node.children() {
            self.spawn_gltf_node(&child, Some(object_id));
        }

        object_id
    }

    /// Updates all object world transforms in hierarchical order
    pub fn update_transforms(&self) {
        let root_objects = self.objects.iter().filter_map(|(id, object)| {
            if object.parent_id.is_none() {
                Some(id)
            } else {
                None
            }
        });

        for root_id in root_objects {
            self.update_object_transform_recursive(root_id, Mat4::IDENTITY);
        }
    }

    fn update_object_transform_recursive(&self, object_id: ObjectId, parent_world_matrix: Mat4) {
        if let Some(object) = self.objects.get(object_id) {
            let local_matrix = *object.transform.get_local_matrix();
            if object.transform.is_world_dirty() {
                object
                    .transform
                    .set_world_matrix(parent_world_matrix * local_matrix);
            }

            let world_matrix = *object.transform.get_world_matrix();
            for &child_id in &object.child_ids {
                self.update_object_transform_recursive(child_id, world_matrix);
            }
        }
    }

    /// Invalidates world transforms for an object and all its descendants
    pub fn invalidate_object_hierarchy(&self, object_id: ObjectId) {
        if let Some(object) = self.objects.get(object_id) {
            object.transform.invalidate_world();

            for &child_id in &object.child_ids {
                self.invalidate_object_hierarchy(child_id);
            }
        }
    }

    /// Sets the parent of an object and updates child relationships
    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        if let Some(old_parent_id) = self.objects.get(child_id).and_then(|child| child.parent_id) {
            if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                old_parent.child_ids.retain(|&id| id != child_id);
            }
        }

        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }

        self.invalidate_object_hierarchy(child_id);
    }

    pub fn select_all(&mut self) {
        for (_, object) in self.objects.iter_mut() {
            object.selected = true;
        }
    }

    /// Selects every object whose name is listed, including each object of a
    /// repeated name. Fails on the first name that matches no object, leaving
    /// the selection unchanged.
    pub fn select_by_names<S: AsRef<str>>(&mut self, names: &[S]) -> anyhow::Result<()> {
        for name in names {
            let name = name.as_ref();
            if self.get_object_by_name(name).is_none() {
                bail!("No object named {:?} in scene", name);
            }
        }

        for (_, object) in self.objects.iter_mut() {
            object.selected = names.iter().any(|name| name.as_ref() == object.name);
        }

        Ok(())
    }

    /// Selected objects in insertion order, which for glTF scenes is a
    /// depth-first walk of the node hierarchy.
    pub fn selected_objects(&self) -> impl Iterator<Item = &Object3D> {
        self.objects
            .iter()
            .map(|(_, object)| object)
            .filter(|object| object.selected)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
