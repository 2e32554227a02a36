use anyhow::Result;

use mujoco_export::config::{Command, ExportConfig, USAGE};
use mujoco_export::export_mujoco_xml;
use mujoco_export::scene_graph::Scene;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = match ExportConfig::from_args(std::env::args().skip(1))? {
        Command::Export(config) => config,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut scene = Scene::from_gltf_file(&config.input, config.scene_index)?;
    if config.selection.is_empty() {
        scene.select_all();
    } else {
        scene.select_by_names(&config.selection)?;
    }

    let summary = export_mujoco_xml(scene.selected_objects(), &config.output)?;
    if summary.skipped > 0 {
        log::info!("Skipped {} non-mesh objects", summary.skipped);
    }
    log::info!(
        "Exported {} bodies to {} (model {:?})",
        summary.bodies,
        config.output.display(),
        summary.model_name
    );

    Ok(())
}
