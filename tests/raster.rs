use waves_wasm::color::to_rgba8;
use waves_wasm::raster::render;
use waves_wasm::{Theme, WavesScene};

const W: u32 = 96;
const H: u32 = 72;

#[test]
fn default_scene_is_opaque_and_colored() {
    let scene = WavesScene::default();
    let frame = render(&scene, W, H);
    assert_eq!(frame.as_rgba().len(), (W * H * 4) as usize);

    let background = to_rgba8(scene.uniforms.background_color);
    let mut colored = 0;
    for y in 0..H {
        for x in 0..W {
            let px = frame.pixel(x, y).unwrap();
            assert_eq!(px[3], 255);
            if px != background {
                colored += 1;
            }
        }
    }
    assert!(colored > 0, "nothing but background was drawn");
}

#[test]
fn centre_pixel_is_covered_by_the_plane() {
    let mut scene = WavesScene::default();
    // a black background makes any shaded pixel stand out
    scene.set_theme(Theme::Dark).unwrap();
    let frame = render(&scene, W, H);
    assert_ne!(frame.pixel(W / 2, H / 2), Some([0, 0, 0, 255]));
}

#[test]
fn rendering_is_deterministic() {
    let scene = WavesScene::default();
    assert_eq!(render(&scene, W, H).as_rgba(), render(&scene, W, H).as_rgba());
}

#[test]
fn time_moves_the_surface() {
    let mut scene = WavesScene::default();
    let before = render(&scene, W, H);
    scene.uniforms.time = 0.5;
    let after = render(&scene, W, H);
    assert_ne!(before.as_rgba(), after.as_rgba());
}

#[test]
fn zero_fold_frequency_leaves_background() {
    let mut scene = WavesScene::default();
    scene.uniforms.fold_frequency = 0.0;
    let frame = render(&scene, W, H);
    let background = to_rgba8(scene.uniforms.background_color);
    assert!(frame.as_rgba().chunks_exact(4).all(|px| px == background));
}
