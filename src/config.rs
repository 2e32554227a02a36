use std::path::PathBuf;

use anyhow::{bail, Context};

pub const USAGE: &str = "\
Export the meshes of a glTF scene as a MuJoCo XML scene

Usage:
  mujoco-export <input.gltf|input.glb> [--out scene.xml] [--scene INDEX] [--select NAME]...

Options:
  --out PATH      Output file (default: input path with .xml extension)
  --scene INDEX   glTF scene to export (default: the file's default scene)
  --select NAME   Export only the named object; may be repeated (default: all objects)
  -h, --help      Print this message";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub scene_index: Option<usize>,
    /// Names to export. Empty means every object in the scene.
    pub selection: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("scene.xml"),
            scene_index: None,
            selection: Vec::new(),
        }
    }
}

/// Result of reading the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Export(ExportConfig),
    Help,
}

impl ExportConfig {
    /// Parses arguments, not including the program name.
    pub fn from_args<I>(args: I) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut config = ExportConfig::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--out" => {
                    output = Some(PathBuf::from(
                        args.next().context("Missing --out argument")?,
                    ));
                }
                "--scene" => {
                    let index = args.next().context("Missing --scene argument")?;
                    config.scene_index = Some(
                        index
                            .parse()
                            .with_context(|| format!("Invalid scene index {:?}", index))?,
                    );
                }
                "--select" => {
                    config
                        .selection
                        .push(args.next().context("Missing --select argument")?);
                }
                flag if flag.starts_with('-') => bail!("Unknown option {}", flag),
                path => {
                    if input.is_some() {
                        bail!("Unexpected extra input {}", path);
                    }
                    input = Some(PathBuf::from(path));
                }
            }
        }

        config.input = input.context("Missing input glTF file")?;
        config.output = output.unwrap_or_else(|| config.input.with_extension("xml"));

        Ok(Command::Export(config))
    }
}
