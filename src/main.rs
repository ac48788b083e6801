use anyhow::Context as _;
use clap::Parser;
use log::info;
use winit::event_loop::EventLoop;

use world_viewer::app::App;
use world_viewer::cli::Cli;
use world_viewer::config::ViewerSettings;
use world_viewer::engine::PreviewEngine;
use world_viewer::input::KeyBindings;
use world_viewer::presenter::PresentationContext;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => ViewerSettings::load_or_default(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ViewerSettings::default(),
    };
    if let Some(width) = cli.width {
        settings.window_width = width;
    }
    if let Some(height) = cli.height {
        settings.window_height = height;
    }

    let source = std::fs::read_to_string(&cli.world)
        .with_context(|| format!("failed to read world definition {}", cli.world.display()))?;

    let bindings = KeyBindings::with_step(settings.camera_step);
    let context = PresentationContext::with_bindings(
        PreviewEngine::new(),
        bindings,
        &source,
        settings.window_width,
        settings.window_height,
    )
    .context("failed to create presentation context")?;

    info!(
        "world loaded from {}, window {}x{}",
        cli.world.display(),
        settings.window_width,
        settings.window_height
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(context, settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}
