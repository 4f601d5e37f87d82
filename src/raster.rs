//! Software rasterizer that draws the waves mesh with the CPU shading
//! functions. Used for offline snapshots and for checking the shading
//! end to end without a GL context.

use glam::{Vec2, Vec3, Vec4};

use crate::color::to_rgba8;
use crate::scene::WavesScene;
use crate::shading::{self, Varyings};

/// RGBA8 image, top row first.
#[derive(Clone, Debug)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, clear: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&clear);
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}

struct ScreenVertex {
    xy: Vec2,
    depth: f32,
    varyings: Varyings,
}

#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Draw the scene into a `width x height` frame cleared to the background.
///
/// Both faces are drawn and depth is tested per pixel. The camera is
/// orthographic, so screen-space interpolation of the varyings is exact.
pub fn render(scene: &WavesScene, width: u32, height: u32) -> Frame {
    let u = &scene.uniforms;
    let mut frame = Frame::new(width, height, to_rgba8(u.background_color));
    if width == 0 || height == 0 {
        return frame;
    }

    let (w, h) = (width as f32, height as f32);
    let model = scene.model();
    let view_projection = scene.view_projection(w, h);

    let positions = scene.geometry.positions();
    let vertices: Vec<Option<ScreenVertex>> = positions
        .chunks_exact(3)
        .map(|p| {
            let (clip, varyings) = shading::vertex(Vec3::new(p[0], p[1], p[2]), &model, &view_projection, u);
            to_screen(clip, w, h).map(|(xy, depth)| ScreenVertex { xy, depth, varyings })
        })
        .collect();

    let mut depth = vec![f32::INFINITY; width as usize * height as usize];
    let indices = scene.geometry.indices();
    for tri in indices.chunks_exact(3) {
        let (Some(a), Some(b), Some(c)) = (
            &vertices[tri[0] as usize],
            &vertices[tri[1] as usize],
            &vertices[tri[2] as usize],
        ) else {
            continue;
        };
        draw_triangle(&mut frame, &mut depth, scene, a, b, c);
    }
    frame
}

// NDC -> pixel coordinates; None when the vertex went non-finite (e.g. a
// zero fold frequency) or falls outside the depth range.
fn to_screen(clip: Vec4, w: f32, h: f32) -> Option<(Vec2, f32)> {
    if !clip.is_finite() || clip.w == 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.z < -1.0 || ndc.z > 1.0 {
        return None;
    }
    let xy = Vec2::new((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h);
    Some((xy, ndc.z))
}

fn draw_triangle(
    frame: &mut Frame,
    depth: &mut [f32],
    scene: &WavesScene,
    a: &ScreenVertex,
    b: &ScreenVertex,
    c: &ScreenVertex,
) {
    let area = edge(a.xy, b.xy, c.xy);
    if area.abs() <= f32::EPSILON {
        return;
    }

    let min = a.xy.min(b.xy).min(c.xy).floor().max(Vec2::ZERO);
    let max = a
        .xy
        .max(b.xy)
        .max(c.xy)
        .ceil()
        .min(Vec2::new(frame.width as f32, frame.height as f32));

    for py in min.y as u32..max.y as u32 {
        for px in min.x as u32..max.x as u32 {
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let w = Vec3::new(edge(b.xy, c.xy, p), edge(c.xy, a.xy, p), edge(a.xy, b.xy, p)) / area;
            if w.min_element() < 0.0 {
                continue;
            }

            let z = a.depth * w.x + b.depth * w.y + c.depth * w.z;
            let slot = py as usize * frame.width as usize + px as usize;
            if z >= depth[slot] {
                continue;
            }
            depth[slot] = z;

            let varyings = Varyings::interpolate(&a.varyings, &b.varyings, &c.varyings, w);
            let color = shading::fragment(&varyings, &scene.uniforms);
            frame.put(px, py, to_rgba8(color.truncate()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_is_allowed() {
        let frame = render(&WavesScene::default(), 0, 0);
        assert!(frame.as_rgba().is_empty());
    }

    #[test]
    fn pixel_outside_the_frame_is_none() {
        let frame = Frame::new(4, 3, [1, 2, 3, 4]);
        assert_eq!(frame.pixel(3, 2), Some([1, 2, 3, 4]));
        assert_eq!(frame.pixel(4, 0), None);
        assert_eq!(frame.pixel(0, 3), None);
        assert_eq!(Frame::new(0, 0, [0; 4]).pixel(0, 0), None);
    }

    #[test]
    fn edge_sign_follows_winding() {
        let a = Vec2::ZERO;
        let b = Vec2::X;
        assert!(edge(a, b, Vec2::Y) > 0.0);
        assert!(edge(b, a, Vec2::Y) < 0.0);
    }
}
