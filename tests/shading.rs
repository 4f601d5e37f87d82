use glam::{Mat4, Vec2, Vec3};
use waves_wasm::noise::perlin;
use waves_wasm::shading::{self, fold_elevation, gated_blend, Varyings};
use waves_wasm::{WaveUniforms, WavesScene};

#[test]
fn both_gates_give_color2_at_the_seam() {
    let u = WaveUniforms::default();
    let blend = gated_blend(0.5, &u);
    assert_eq!(blend.lower, u.color2);
    assert_eq!(blend.upper, u.color2);
    // the knife edge: both halves are summed, not averaged
    assert_eq!(blend.sum(), u.color2 * 2.0);
}

#[test]
fn each_side_approaches_color2() {
    let u = WaveUniforms::default();
    let below = gated_blend(0.5 - 1e-4, &u);
    let above = gated_blend(0.5 + 1e-4, &u);
    assert_eq!(below.upper, Vec3::ZERO);
    assert_eq!(above.lower, Vec3::ZERO);
    assert!(below.lower.abs_diff_eq(u.color2, 1e-3));
    assert!(above.upper.abs_diff_eq(u.color2, 1e-3));
}

#[test]
fn gradient_endpoints_are_the_outer_stops() {
    let u = WaveUniforms::default();
    assert_eq!(gated_blend(0.0, &u).sum(), u.color1);
    assert_eq!(gated_blend(1.0, &u).sum(), u.color3);
    // unclamped noise past either end keeps the end stop on its own side
    assert_eq!(gated_blend(-0.3, &u).sum(), u.color1);
    assert_eq!(gated_blend(1.4, &u).sum(), u.color3);
}

#[test]
fn fold_elevation_stays_within_one_period() {
    for &(freq, height) in &[(0.05f32, 2.0f32), (0.5, 1.0), (0.013, 7.5)] {
        let mut z = -3.0f32;
        while z < 3.0 {
            let f = fold_elevation(z, freq, height);
            assert!(f >= -1e-5, "z={z} freq={freq} -> {f}");
            // float rounding can land a hair on the upper edge
            assert!(f <= freq * height * (1.0 + 1e-4), "z={z} freq={freq} -> {f}");
            z += 0.0037;
        }
    }
}

#[test]
fn zero_fold_frequency_propagates_nan() {
    let mut u = WaveUniforms::default();
    u.fold_frequency = 0.0;
    assert!(fold_elevation(0.3, 0.0, 2.0).is_nan());
    let v = shading::displace(Vec3::new(0.1, 0.2, 0.0), &Mat4::IDENTITY, &u);
    assert!(v.model_position.y.is_nan());
    assert!(v.model_position.x.is_finite());
}

#[test]
fn displacement_matches_the_height_formula() {
    let u = WaveUniforms::default();
    let scene = WavesScene::default();
    let model = scene.model();
    let p = Vec3::new(0.21, -0.37, 0.0);

    let world = model * p.extend(1.0);
    let v = shading::displace(p, &model, &u);

    let noise = perlin(Vec2::new(world.x, world.z) * u.wave_frequency + u.wave_direction * u.time);
    let elevation = noise * u.wave_amplitude + 0.5;
    let fold = fold_elevation(world.z, u.fold_frequency, u.fold_height);
    let y = world.y - world.z + fold + (elevation - 0.5);

    assert_eq!(v.elevation, elevation);
    assert_eq!(v.fold_elevation, fold);
    assert!((v.model_position.y - y).abs() < 1e-6);
    assert_eq!(v.model_position.x, world.x);
    assert_eq!(v.model_position.z, world.z);
}

#[test]
fn wave_direction_scrolls_with_time() {
    let mut u = WaveUniforms::default();
    u.wave_direction = Vec2::new(1.0, 0.0);
    u.time = 0.25;
    let xz = Vec2::new(0.1, 0.2);
    let shifted = Vec2::new(0.1 + 0.25 / u.wave_frequency, 0.2);

    let mut still = u;
    still.time = 0.0;
    let a = shading::wave_elevation(xz, &u);
    let b = shading::wave_elevation(shifted, &still);
    assert!((a - b).abs() < 1e-5, "{a} vs {b}");
}

#[test]
fn fragment_is_opaque_and_fades_to_background() {
    let u = WaveUniforms::default();
    let v = shading::displace(Vec3::new(0.1, 0.1, 0.0), &WavesScene::default().model(), &u);
    assert_eq!(shading::fragment(&v, &u).w, 1.0);

    // elevation -0.5 collapses the final mix onto the background
    let flat = Varyings { elevation: -0.5, ..v };
    let rgba = shading::fragment(&flat, &u);
    assert!(rgba.truncate().abs_diff_eq(u.background_color, 1e-6));
}

#[test]
fn far_edge_fades_fully_to_background() {
    let u = WaveUniforms::default();
    // -z + 0.5 == 1 puts the whole gradient on the background
    let v = Varyings {
        model_position: glam::Vec4::new(0.2, 0.0, -0.5, 1.0),
        elevation: 0.7,
        fold_elevation: 0.0,
    };
    let rgba = shading::fragment(&v, &u);
    assert!(rgba.truncate().abs_diff_eq(u.background_color, 1e-5));
}
