use glam::{Vec2, Vec3};
use waves_wasm::{Control, ControlValue, WavesConfig, WavesError, WavesScene};

#[test]
fn preset_round_trips_through_json() {
    let mut scene = WavesScene::new();
    scene.set_color_hex(Control::Color1, "#102030").unwrap();
    scene.set_control(Control::WaveDirection, ControlValue::Vec2(Vec2::new(0.5, -1.0))).unwrap();
    scene.set_control(Control::Pause, ControlValue::Bool(true)).unwrap();
    scene.set_control(Control::CameraPosition, ControlValue::Vec3(Vec3::new(1.0, 2.0, 3.0))).unwrap();

    let json = scene.to_config().to_json().unwrap();
    let restored = WavesScene::from_config(&WavesConfig::from_json(&json).unwrap());

    assert_eq!(restored.to_config(), scene.to_config());
    assert_eq!(restored.panel(), scene.panel());
}

#[test]
fn colors_are_written_as_hex() {
    let json = WavesConfig::default().to_json().unwrap();
    assert!(json.contains("\"color1\": \"#635bff\""), "{json}");
    assert!(json.contains("\"backgroundColor\": \"#ffffff\""), "{json}");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = WavesConfig::from_json(r#"{ "uniforms": { "foldHeight": 4.0 }, "clock": { "speed": -1.0 } }"#).unwrap();
    let defaults = WavesConfig::default();

    assert_eq!(config.uniforms.fold_height, 4.0);
    assert_eq!(config.uniforms.color2, defaults.uniforms.color2);
    assert_eq!(config.clock.speed, -1.0);
    assert!(!config.clock.paused);
    assert_eq!(config.camera, defaults.camera);

    assert_eq!(WavesConfig::from_json("{}").unwrap(), defaults);
}

#[test]
fn bad_presets_are_reported() {
    assert!(matches!(
        WavesConfig::from_json(r##"{ "uniforms": { "color1": "#nothex" } }"##),
        Err(WavesError::Preset(_))
    ));
    assert!(matches!(WavesConfig::from_json("not json"), Err(WavesError::Preset(_))));
}

#[test]
fn out_of_range_presets_are_clamped() {
    let config = WavesConfig::from_json(
        r#"{ "clock": { "speed": 50 }, "camera": { "zoom": 0 }, "uniforms": { "foldFrequency": -2, "waveDirection": [9, -9] } }"#,
    )
    .unwrap();
    let mut scene = WavesScene::from_config(&config);

    assert_eq!(scene.clock.speed, 3.0);
    assert_eq!(scene.camera.zoom, 1.0);
    assert_eq!(scene.uniforms.fold_frequency, 0.0);
    assert_eq!(scene.uniforms.wave_direction, Vec2::new(5.0, -5.0));
    assert_eq!(scene.panel().get(Control::Speed), ControlValue::Float(3.0));
    assert_eq!(scene.panel().get(Control::CameraZoom), ControlValue::Float(1.0));

    // same result as going through the panel
    let mut manual = WavesScene::new();
    manual.set_control(Control::Speed, ControlValue::Float(50.0)).unwrap();
    assert_eq!(manual.clock.speed, scene.clock.speed);

    scene.advance_frame();
    assert!((scene.uniforms.time - 0.003).abs() < 1e-6);
    assert!(scene.view_projection(800.0, 600.0).is_finite());
}
