use bytemuck::{Pod, Zeroable};

use crate::affine::Affine;

/// A 4x4 transformation matrix stored in row-major order.
///
/// Points are column vectors, so `a.then(&b)` applies `b` first and `a`
/// second. The layout is `Pod` so a computed layer transform can be handed
/// straight to a GPU uniform buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Transform {
    /// Matrix data in row-major order: [row0, row1, row2, row3]
    pub data: [f32; 16],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    /// Create a 2D translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self::translate_3d(x, y, 0.0)
    }

    /// Create a translation transform along all three axes
    pub fn translate_3d(x: f32, y: f32, z: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, z, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a non-uniform scale transform
    pub fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // row 0
                0.0, sy, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a rotation of `angle_radians` around the axis `(x, y, z)`.
    ///
    /// The axis does not need to be normalized. A zero-length axis yields the
    /// identity.
    pub fn rotate_axis(angle_radians: f32, x: f32, y: f32, z: f32) -> Self {
        let len = (x * x + y * y + z * z).sqrt();
        if len < 1e-6 {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / len, y / len, z / len);
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        let t = 1.0 - cos;

        Self {
            data: [
                t * x * x + cos,
                t * x * y - sin * z,
                t * x * z + sin * y,
                0.0,
                t * x * y + sin * z,
                t * y * y + cos,
                t * y * z - sin * x,
                0.0,
                t * x * z - sin * y,
                t * y * z + sin * x,
                t * z * z + cos,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Lift a 2D affine transform into 3D space.
    pub fn from_affine(affine: &Affine) -> Self {
        Self {
            data: [
                affine.a, affine.c, 0.0, affine.tx, // row 0
                affine.b, affine.d, 0.0, affine.ty, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// The perspective term: how much `z` contributes to the homogeneous `w`.
    ///
    /// Named after the Core Animation `m34` field. In this column-vector
    /// layout it lives at row 3, column 2.
    pub fn m34(&self) -> f32 {
        self.data[14]
    }

    /// Return a copy with the perspective term replaced.
    pub fn with_perspective(mut self, m34: f32) -> Self {
        self.data[14] = m34;
        self
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.data;
        let b = &other.data;

        // Row-major indexing: element at row i, col j is at index i*4 + j
        let mut result = [0.0f32; 16];

        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                result[i * 4 + j] = sum;
            }
        }

        Transform { data: result }
    }

    /// Transform a 2D point, ignoring perspective.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let new_x = self.data[0] * x + self.data[1] * y + self.data[3];
        let new_y = self.data[4] * x + self.data[5] * y + self.data[7];
        (new_x, new_y)
    }

    /// Transform a 3D point including the homogeneous divide.
    pub fn project_point(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let d = &self.data;
        let px = d[0] * x + d[1] * y + d[2] * z + d[3];
        let py = d[4] * x + d[5] * y + d[6] * z + d[7];
        let pz = d[8] * x + d[9] * y + d[10] * z + d[11];
        let w = d[12] * x + d[13] * y + d[14] * z + d[15];
        if w.abs() < 1e-10 {
            return (px, py, pz);
        }
        (px / w, py / w, pz / w)
    }

    /// Get the rows of the matrix for passing to the shader
    pub fn rows(&self) -> [[f32; 4]; 4] {
        [
            [self.data[0], self.data[1], self.data[2], self.data[3]],
            [self.data[4], self.data[5], self.data[6], self.data[7]],
            [self.data[8], self.data[9], self.data[10], self.data[11]],
            [self.data[12], self.data[13], self.data[14], self.data[15]],
        ]
    }

    /// Raw bytes of the matrix, ready for a uniform buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_identity() {
        let t = Transform::default();
        assert_eq!(t, Transform::IDENTITY);
        assert!(t.is_identity());
    }

    #[test]
    fn test_translate() {
        let t = Transform::translate(10.0, 20.0);
        let (x, y) = t.transform_point(5.0, 5.0);
        assert!(approx_eq(x, 15.0));
        assert!(approx_eq(y, 25.0));
    }

    #[test]
    fn test_rotate_z() {
        let t = Transform::rotate_axis(FRAC_PI_2, 0.0, 0.0, 1.0);
        let (x, y) = t.transform_point(1.0, 0.0);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 1.0));
    }

    #[test]
    fn test_rotate_y_moves_x_into_depth() {
        let t = Transform::rotate_axis(FRAC_PI_2, 0.0, 1.0, 0.0);
        let (x, y, z) = t.project_point(1.0, 0.0, 0.0);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 0.0));
        assert!(approx_eq(z, -1.0));
    }

    #[test]
    fn test_rotate_unnormalized_axis() {
        let a = Transform::rotate_axis(0.3, 0.0, -4.0, 0.0);
        let b = Transform::rotate_axis(0.3, 0.0, -1.0, 0.0);
        for (x, y) in a.data.iter().zip(b.data.iter()) {
            assert!(approx_eq(*x, *y));
        }
    }

    #[test]
    fn test_rotate_zero_axis_is_identity() {
        assert!(Transform::rotate_axis(1.0, 0.0, 0.0, 0.0).is_identity());
    }

    #[test]
    fn test_compose_applies_right_first() {
        let translate = Transform::translate(10.0, 0.0);
        let scale = Transform::scale_xy(2.0, 2.0);

        // Point (0,0) -> translate -> (10,0) -> scale -> (20,0)
        let composed = scale.then(&translate);
        let (x, y) = composed.transform_point(0.0, 0.0);
        assert!(approx_eq(x, 20.0));
        assert!(approx_eq(y, 0.0));
    }

    #[test]
    fn test_perspective_shrinks_far_points() {
        let t = Transform::IDENTITY.with_perspective(-0.002);
        assert!(approx_eq(t.m34(), -0.002));
        // z = -100 -> w = 1.2, so x shrinks
        let (x, _, _) = t.project_point(120.0, 0.0, -100.0);
        assert!(approx_eq(x, 100.0));
    }

    #[test]
    fn test_from_affine() {
        let affine = Affine::IDENTITY.translated_by(3.0, 4.0).scaled_by(2.0, 0.5);
        let t = Transform::from_affine(&affine);
        assert_eq!(t.transform_point(1.0, 2.0), affine.transform_point(1.0, 2.0));
    }

    #[test]
    fn test_rows_and_bytes() {
        let t = Transform::translate(1.0, 2.0);
        let rows = t.rows();
        assert_eq!(rows[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rows[1], [0.0, 1.0, 0.0, 2.0]);
        assert_eq!(t.as_bytes().len(), 64);
    }
}
