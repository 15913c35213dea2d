use anyhow::Context;
use clap::Parser;

use walkthrough::camera::Camera;
use walkthrough::cli::Cli;
use walkthrough::first_person::FirstPersonController;
use walkthrough::scene::Scene;
use walkthrough::script::InputScript;
use walkthrough::window;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.controller_config()?;

    let (scene, spawn) = match &cli.scene {
        Some(path) => {
            let scene = Scene::load(path)?;
            let spawn = scene.spawn_point();
            (scene, spawn)
        }
        None => (cli.preset.build(), cli.preset.spawn()),
    };

    if let Some(path) = &cli.script {
        let script = InputScript::load(path)?;
        let mut controller = FirstPersonController::new(config);
        let mut camera = Camera::new(spawn.position);
        controller.look_at(&camera, spawn.look_at);

        let report = script.replay(&mut controller, &mut camera, &scene);
        let json = serde_json::to_string_pretty(&report).context("failed to serialize replay report")?;
        println!("{json}");
        return Ok(());
    }

    println!("Walkthrough - Controls: WASD/arrows move, Q/E turn, R/F look up/down, P freeze, Escape to quit");
    window::run(config, scene, spawn)
}
