//! Plugin integration tests. Drives the app one frame at a time with `App::update`.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use glam::Vec2;
use tiltgrade_bevy::TiltGradePlugin;
use tiltgrade_bevy::events::StylusInput;
use tiltgrade_bevy::resources::{FilterState, PresentationState};
use tiltgrade_core::{
    FilterController, FilterImage, FilteringMode, InputEvent, PointerContact, PointerKind,
};

fn create_app() -> App {
    let source = FilterImage::solid(4, 4, [0.5, 0.5, 0.5, 1.0]);
    let controller = FilterController::new(source, Vec2::new(400.0, 300.0))
        .expect("valid source image");

    let mut app = App::new();
    app.add_plugins(TiltGradePlugin)
        .insert_resource(FilterState::new(controller));
    app.update();
    app
}

fn send(app: &mut App, event: InputEvent) {
    app.world_mut().write_message(StylusInput(event));
    app.update();
}

fn stylus(azimuth: f32, altitude: f32) -> PointerContact {
    PointerContact {
        kind: PointerKind::Stylus,
        azimuth,
        altitude,
        location: Vec2::new(200.0, 150.0),
    }
}

#[test]
fn test_startup_displays_source() {
    let app = create_app();
    let view = app.world().resource::<PresentationState>();
    assert_eq!(view.frames_displayed, 1);
    assert!(!view.readout_visible);
    assert_eq!(view.image.as_ref().map(|i| (i.width, i.height)), Some((4, 4)));
}

#[test]
fn test_stylus_session_updates_presentation() {
    let mut app = create_app();
    send(
        &mut app,
        InputEvent::ModeButtonPressed(FilteringMode::BrightnessContrast),
    );
    send(&mut app, InputEvent::PointerDown(stylus(0.0, FRAC_PI_4)));

    {
        let view = app.world().resource::<PresentationState>();
        assert!(view.readout_visible);
        assert_eq!(view.readout_text, "⇔Brightness: 0.50      ⇕Contrast: 1.00");
        assert_eq!(view.indicator_fade.opacity, 1.0);
        assert!(view.indicator.is_some());
        assert_eq!(view.frames_displayed, 2);
    }

    let state = app.world().resource::<FilterState>();
    let params = state.controller.as_ref().unwrap().params();
    assert!((params.brightness - 0.5).abs() < 1e-5);

    send(&mut app, InputEvent::PointerUp(PointerKind::Stylus));
    send(&mut app, InputEvent::ModeButtonReleased);
    let view = app.world().resource::<PresentationState>();
    assert!(!view.readout_visible);
    assert_eq!(view.indicator_fade.opacity, 0.0);
    assert!(view.indicator_fade.animated);
}

#[test]
fn test_input_without_source_is_dropped() {
    let mut app = App::new();
    app.add_plugins(TiltGradePlugin);
    app.update();
    send(
        &mut app,
        InputEvent::ModeButtonPressed(FilteringMode::HueSaturation),
    );

    let view = app.world().resource::<PresentationState>();
    assert_eq!(view.frames_displayed, 0);
    assert!(!view.readout_visible);
}
