//! Subdivided plane in the XY plane, centred on the origin.

/// Plane geometry description; vertices and indices are generated on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneGeometry {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            width_segments: 100,
            height_segments: 100,
        }
    }
}

impl PlaneGeometry {
    pub fn vertex_count(&self) -> usize {
        ((self.width_segments + 1) * (self.height_segments + 1)) as usize
    }

    /// Flat `[x, y, z, x, y, z, ...]` positions, row by row from +y to -y.
    pub fn positions(&self) -> Vec<f32> {
        let cols = self.width_segments + 1;
        let rows = self.height_segments + 1;
        let seg_w = self.width / self.width_segments as f32;
        let seg_h = self.height / self.height_segments as f32;

        let mut out = Vec::with_capacity(self.vertex_count() * 3);
        for iy in 0..rows {
            let y = iy as f32 * seg_h - self.height * 0.5;
            for ix in 0..cols {
                let x = ix as f32 * seg_w - self.width * 0.5;
                out.extend_from_slice(&[x, -y, 0.0]);
            }
        }
        out
    }

    /// Two counter-clockwise triangles per cell.
    pub fn indices(&self) -> Vec<u32> {
        let cols = self.width_segments + 1;
        let mut out = Vec::with_capacity((self.width_segments * self.height_segments * 6) as usize);
        for iy in 0..self.height_segments {
            for ix in 0..self.width_segments {
                let a = ix + cols * iy;
                let b = ix + cols * (iy + 1);
                let c = (ix + 1) + cols * (iy + 1);
                let d = (ix + 1) + cols * iy;
                out.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        out
    }
}
