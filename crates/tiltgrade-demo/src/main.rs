//! Tiltgrade Demo: headless replay of a stylus filtering session.
//!
//! Loads a source photograph, runs the Tiltgrade plugin inside a Bevy app,
//! feeds it a gesture script one event per frame, and writes the final
//! displayed bitmap to disk.

mod config;
mod image_loader;
mod script;

use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use tiltgrade_bevy::TiltGradePlugin;
use tiltgrade_bevy::events::StylusInput;
use tiltgrade_bevy::resources::{FilterState, PresentationState};
use tiltgrade_core::{FilterController, FilteringMode};

use config::{AppConfig, SOURCE_VAR};
use script::GestureScript;

/// Moves per mode in the built-in sweep used when no script is configured.
const SWEEP_STEPS: usize = 24;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), TiltGradePlugin));

    let Some(source_path) = config.source.as_deref() else {
        tracing::error!("{SOURCE_VAR} is not set; point it at the image to filter");
        return ExitCode::FAILURE;
    };
    let source = match image_loader::load_image(source_path) {
        Ok(image) => image,
        Err(e) => {
            tracing::error!("cannot load source image {}: {e}", source_path.display());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "loaded {} ({}x{}, {})",
        source_path.display(),
        source.width,
        source.height,
        source.source_bit_depth
    );

    let controller = match FilterController::new(source, config.view_size()) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("unusable source image: {e}");
            return ExitCode::FAILURE;
        }
    };

    let script = match config.script.as_deref() {
        Some(path) => match GestureScript::load(path) {
            Ok(script) => script,
            Err(e) => {
                tracing::error!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GestureScript {
            events: FilteringMode::selectable()
                .iter()
                .flat_map(|&mode| GestureScript::sweep(mode, config.view_size(), SWEEP_STEPS).events)
                .collect(),
        },
    };

    app.insert_resource(FilterState::new(controller));
    app.update();

    for event in &script.events {
        app.world_mut().write_message(StylusInput(*event));
        app.update();

        let view = app.world().resource::<PresentationState>();
        if view.readout_visible {
            tracing::info!("{}", view.readout_text);
        }
    }
    tracing::info!("replayed {} events", script.events.len());

    let view = app.world().resource::<PresentationState>();
    let Some(image) = view.image.as_ref() else {
        tracing::error!("nothing was displayed");
        return ExitCode::FAILURE;
    };

    if let Err(e) = image_loader::save_png(image, &config.output) {
        tracing::error!("cannot write {}: {e}", config.output.display());
        return ExitCode::FAILURE;
    }
    tracing::info!(
        "wrote {} after {} renders",
        config.output.display(),
        view.frames_displayed
    );

    ExitCode::SUCCESS
}
