//! 2D gradient noise, bit-for-bit the same formula as `shaders/noise.glsl`.
//!
//! Classic lattice Perlin noise with a permutation polynomial for hashing,
//! so it needs no lookup tables and ports 1:1 between GLSL and Rust. The
//! output is scaled by 2.3, which keeps it roughly within `[-1, 1]`.

use glam::{Vec2, Vec4};

const INV_289: f32 = 1.0 / 289.0;
const INV_41: f32 = 1.0 / 41.0;

#[inline]
fn mod289(x: Vec4) -> Vec4 {
    x - (x * INV_289).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

// GLSL fract, i.e. x - floor(x) also for negatives.
#[inline]
fn fract(x: Vec4) -> Vec4 {
    x - x.floor()
}

#[inline]
fn fade(t: Vec2) -> Vec2 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample the noise field at `p`.
pub fn perlin(p: Vec2) -> f32 {
    let cell = Vec4::new(p.x, p.y, p.x, p.y);
    let pi = mod289(cell.floor() + Vec4::new(0.0, 0.0, 1.0, 1.0));
    let pf = fract(cell) - Vec4::new(0.0, 0.0, 1.0, 1.0);

    let ix = Vec4::new(pi.x, pi.z, pi.x, pi.z);
    let iy = Vec4::new(pi.y, pi.y, pi.w, pi.w);
    let fx = Vec4::new(pf.x, pf.z, pf.x, pf.z);
    let fy = Vec4::new(pf.y, pf.y, pf.w, pf.w);

    let i = permute(permute(ix) + iy);

    let gx = fract(i * INV_41) * 2.0 - 1.0;
    let gy = gx.abs() - 0.5;
    let tx = (gx + 0.5).floor();
    let gx = gx - tx;

    let g00 = Vec2::new(gx.x, gy.x);
    let g10 = Vec2::new(gx.y, gy.y);
    let g01 = Vec2::new(gx.z, gy.z);
    let g11 = Vec2::new(gx.w, gy.w);

    let norm = taylor_inv_sqrt(Vec4::new(
        g00.dot(g00),
        g01.dot(g01),
        g10.dot(g10),
        g11.dot(g11),
    ));
    let g00 = g00 * norm.x;
    let g01 = g01 * norm.y;
    let g10 = g10 * norm.z;
    let g11 = g11 * norm.w;

    let n00 = g00.dot(Vec2::new(fx.x, fy.x));
    let n10 = g10.dot(Vec2::new(fx.y, fy.y));
    let n01 = g01.dot(Vec2::new(fx.z, fy.z));
    let n11 = g11.dot(Vec2::new(fx.w, fy.w));

    let fade_xy = fade(Vec2::new(pf.x, pf.y));
    let n_x0 = mix(n00, n10, fade_xy.x);
    let n_x1 = mix(n01, n11, fade_xy.x);
    2.3 * mix(n_x0, n_x1, fade_xy.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice_points() {
        for x in -4..4 {
            for y in -4..4 {
                let n = perlin(Vec2::new(x as f32, y as f32));
                assert!(n.abs() < 1e-6, "noise at ({x}, {y}) = {n}");
            }
        }
    }

    #[test]
    fn bounded_over_a_sample_grid() {
        let mut lo = f32::MAX;
        let mut hi = f32::MIN;
        for i in 0..200 {
            for j in 0..200 {
                let p = Vec2::new(i as f32 * 0.037 - 3.7, j as f32 * 0.041 - 4.1);
                let n = perlin(p);
                assert!(n.is_finite());
                lo = lo.min(n);
                hi = hi.max(n);
            }
        }
        assert!(lo > -1.5 && hi < 1.5, "range [{lo}, {hi}]");
        // a field this size should swing both ways
        assert!(lo < -0.2 && hi > 0.2, "range [{lo}, {hi}]");
    }

    #[test]
    fn continuous_between_neighbours() {
        let step = Vec2::splat(1e-3);
        let mut p = Vec2::new(0.13, 7.9);
        for _ in 0..500 {
            let d = (perlin(p + step) - perlin(p)).abs();
            assert!(d < 0.05, "jump {d} at {p}");
            p += Vec2::new(0.011, -0.007);
        }
    }

    #[test]
    fn deterministic() {
        let p = Vec2::new(1.25, -0.75);
        assert_eq!(perlin(p), perlin(p));
    }
}
