use std::io::{self, Write};

use crate::math::Pose;
use crate::mjcf::format::{attr, FloatList};

/// Extension of the mesh files the assets point at.
pub const MESH_FILE_EXTENSION: &str = "obj";

#[derive(Debug, Clone, PartialEq)]
pub struct MeshAsset {
    pub name: String,
}

impl MeshAsset {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, MESH_FILE_EXTENSION)
    }
}

/// A `<body>` holding a visual and a collision geom of the same mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub mesh: String,
    pub pose: Pose,
}

/// Geom classes declared in the `<default>` block, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomClass {
    Visual,
    Collision,
}

impl GeomClass {
    pub const ALL: [GeomClass; 2] = [GeomClass::Visual, GeomClass::Collision];

    pub fn name(self) -> &'static str {
        match self {
            GeomClass::Visual => "visual",
            GeomClass::Collision => "collision",
        }
    }

    /// Attributes of the class's default `<geom>`.
    fn default_geom_attributes(self) -> &'static str {
        match self {
            GeomClass::Visual => r#"group="2" type="mesh" contype="0" conaffinity="0""#,
            GeomClass::Collision => r#"group="3" type="mesh""#,
        }
    }
}

/// In-memory MJCF scene: defaults, mesh assets and world bodies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MjcfDocument {
    pub model: String,
    pub assets: Vec<MeshAsset>,
    pub bodies: Vec<Body>,
}

impl MjcfDocument {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Declares a mesh asset and a body that uses it.
    pub fn add_mesh_body(&mut self, name: &str, pose: Pose) {
        self.assets.push(MeshAsset {
            name: name.to_string(),
        });
        self.bodies.push(Body {
            name: name.to_string(),
            mesh: name.to_string(),
            pose,
        });
    }

    /// Writes the fixed MJCF layout: one element per line, two-space indent,
    /// attributes in a set order. Plain `writeln!` instead of quick-xml's
    /// `Writer`, whose indentation and self-closing tags (`<geom ... />`)
    /// differ from this layout.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, r#"<?xml version="1.0"?>"#)?;
        writeln!(out, r#"<mujoco model="{}">"#, attr(&self.model))?;

        writeln!(out, "  <default>")?;
        for class in GeomClass::ALL {
            writeln!(out, r#"    <default class="{}">"#, class.name())?;
            writeln!(out, "      <geom {}/>", class.default_geom_attributes())?;
            writeln!(out, "    </default>")?;
        }
        writeln!(out, "  </default>")?;

        writeln!(out, "  <asset>")?;
        for asset in &self.assets {
            writeln!(out, r#"    <mesh file="{}"/>"#, attr(&asset.file_name()))?;
        }
        writeln!(out, "  </asset>")?;

        writeln!(out, "  <worldbody>")?;
        for body in &self.bodies {
            self.write_body(out, body)?;
        }
        writeln!(out, "  </worldbody>")?;
        writeln!(out, "</mujoco>")?;

        Ok(())
    }

    fn write_body<W: Write>(&self, out: &mut W, body: &Body) -> io::Result<()> {
        let quat = body.pose.wxyz();
        let pos = body.pose.translation.to_array();

        writeln!(out, r#"    <body name="{}">"#, attr(&body.name))?;
        for class in GeomClass::ALL {
            writeln!(
                out,
                r#"      <geom mesh="{}" class="{}" quat="{}" pos="{}"/>"#,
                attr(&body.mesh),
                class.name(),
                FloatList(&quat),
                FloatList(&pos),
            )?;
        }
        writeln!(out, "    </body>")?;

        Ok(())
    }
}
