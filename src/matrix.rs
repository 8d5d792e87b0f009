//! src/matrix.rs
//! -------------
//! 4x4 affine transform, row-major storage. Angles are radians throughout.

use crate::algebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    // element (row, col) lives at m[row * 4 + col]
    m: [f32; 16],
}

impl Matrix4 {
    pub const fn identity() -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vector3) -> Self {
        let mut t = Self::identity();
        t.m[3] = v.x;
        t.m[7] = v.y;
        t.m[11] = v.z;
        t
    }

    /// Non-uniform scale along the three axes.
    pub fn scale(v: Vector3) -> Self {
        let mut s = Self::identity();
        s.m[0] = v.x;
        s.m[5] = v.y;
        s.m[10] = v.z;
        s
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[5] = cos;
        r.m[6] = -sin;
        r.m[9] = sin;
        r.m[10] = cos;
        r
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[0] = cos;
        r.m[2] = sin;
        r.m[8] = -sin;
        r.m[10] = cos;
        r
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[0] = cos;
        r.m[1] = -sin;
        r.m[4] = sin;
        r.m[5] = cos;
        r
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Compose with `other`: `a.multiply(&b)` applies `b` first, then `a`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[row * 4 + k] * other.m[k * 4 + col];
                }
                out[row * 4 + col] = sum;
            }
        }
        Self { m: out }
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.m[row * 4 + col];
            }
        }
        Self { m: out }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..4).fold(0.0, |acc, col| {
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            acc + sign * self.m[col] * self.minor(0, col)
        })
    }

    /// Inverse, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f32::EPSILON {
            return None;
        }
        let mut out = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                // adjugate: cofactor of (row, col) lands transposed
                out[col * 4 + row] = sign * self.minor(row, col) / det;
            }
        }
        Some(Self { m: out })
    }

    /// Apply to a homogeneous 4-vector.
    pub fn apply(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|col| self.m[row * 4 + col] * v[col]).sum();
        }
        out
    }

    /// Apply to a point (`w = 1`): rotation, scale and translation.
    pub fn apply_point(&self, p: Vector3) -> Vector3 {
        let [x, y, z, _] = self.apply([p.x, p.y, p.z, 1.0]);
        Vector3::new(x, y, z)
    }

    /// Apply to a direction (`w = 0`): rotation and scale only.
    pub fn apply_direction(&self, v: Vector3) -> Vector3 {
        let [x, y, z, _] = self.apply([v.x, v.y, v.z, 0.0]);
        Vector3::new(x, y, z)
    }

    /// The elements in column-major order, as a column-major graphics API
    /// expects them.
    pub fn to_column_major(&self) -> [f32; 16] {
        self.transpose().m
    }

    // 3x3 determinant of the submatrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut sub = [0.0f32; 9];
        let mut i = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            for c in 0..4 {
                if c == col {
                    continue;
                }
                sub[i] = self.m[r * 4 + c];
                i += 1;
            }
        }
        sub[0] * (sub[4] * sub[8] - sub[5] * sub[7])
            - sub[1] * (sub[3] * sub[8] - sub[5] * sub[6])
            + sub[2] * (sub[3] * sub[7] - sub[4] * sub[6])
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_vec_eq(Matrix4::identity().apply_point(p), p);
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Matrix4::translation(Vector3::new(10.0, 20.0, 30.0));
        assert_vec_eq(
            t.apply_point(Vector3::new(1.0, 2.0, 3.0)),
            Vector3::new(11.0, 22.0, 33.0),
        );
        let d = Vector3::new(1.0, 2.0, 3.0);
        assert_vec_eq(t.apply_direction(d), d);
    }

    #[test]
    fn rotations_about_each_axis() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_vec_eq(Matrix4::rotation_z(FRAC_PI_2).apply_point(x), y);
        assert_vec_eq(Matrix4::rotation_x(FRAC_PI_2).apply_point(y), z);
        assert_vec_eq(Matrix4::rotation_y(FRAC_PI_2).apply_point(z), x);
        // full turn is the identity
        assert_vec_eq(Matrix4::rotation_y(2.0 * PI).apply_point(x), x);
    }

    #[test]
    fn non_uniform_scale() {
        let s = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_vec_eq(
            s.apply_point(Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(2.0, 3.0, 4.0),
        );
    }

    #[test]
    fn multiply_applies_rightmost_first() {
        let translate = Matrix4::translation(Vector3::new(1.0, 0.0, 0.0));
        let scale = Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        // scale.multiply(translate): translate first, then scale
        let p = scale.multiply(&translate).apply_point(Vector3::zero());
        assert_vec_eq(p, Vector3::new(2.0, 0.0, 0.0));
        // the other order translates after scaling
        let q = translate.multiply(&scale).apply_point(Vector3::zero());
        assert_vec_eq(q, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0))
            .multiply(&Matrix4::rotation_y(0.7))
            .multiply(&Matrix4::scale(Vector3::new(2.0, 2.0, 2.0)));
        let inv = m.inverse().unwrap();
        let p = Vector3::new(5.0, -6.0, 7.0);
        assert_vec_eq(inv.apply_point(m.apply_point(p)), p);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let flat = Matrix4::scale(Vector3::new(1.0, 1.0, 0.0));
        assert!(flat.inverse().is_none());
    }

    #[test]
    fn transpose_is_an_involution() {
        let m = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0))
            .multiply(&Matrix4::rotation_z(0.3));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn column_major_is_the_transpose_layout() {
        let m = Matrix4::translation(Vector3::new(4.0, 5.0, 6.0));
        let cols = m.to_column_major();
        // translation column lands in the last four slots
        assert_eq!(&cols[12..15], &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 3), 4.0);
    }

    #[test]
    fn apply_homogeneous() {
        let t = Matrix4::translation(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(t.apply([0.0, 0.0, 0.0, 1.0]), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(t.apply([1.0, 2.0, 3.0, 0.0]), [1.0, 2.0, 3.0, 0.0]);
    }
}
