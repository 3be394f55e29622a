//! Row-major 4x4 affine matrices, as consumed by [`Point::transform`].
//!
//! Translation lives in column 3 of rows 0 to 2. The last row is expected to be `[0, 0, 0, 1]`,
//! but nothing here or in the transform enforces that.

use glam::DMat4;
use log::warn;

use crate::Point;

pub type Matrix4d = [[f64; 4]; 4];

pub const IDENTITY: Matrix4d = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

const AFFINE_LAST_ROW: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

pub const fn translation(t: Point) -> Matrix4d {
    [
        [1.0, 0.0, 0.0, t.x()],
        [0.0, 1.0, 0.0, t.y()],
        [0.0, 0.0, 1.0, t.z()],
        AFFINE_LAST_ROW,
    ]
}

/// Per axis scaling.
pub const fn scaling(s: Point) -> Matrix4d {
    [
        [s.x(), 0.0, 0.0, 0.0],
        [0.0, s.y(), 0.0, 0.0],
        [0.0, 0.0, s.z(), 0.0],
        AFFINE_LAST_ROW,
    ]
}

pub const fn uniform_scaling(s: f64) -> Matrix4d {
    scaling(Point::splat(s))
}

/// Right-handed rotation around the x axis, `angle` in radians.
pub fn rotation_x(angle: f64) -> Matrix4d {
    from_dmat4(DMat4::from_rotation_x(angle))
}

pub fn rotation_y(angle: f64) -> Matrix4d {
    from_dmat4(DMat4::from_rotation_y(angle))
}

pub fn rotation_z(angle: f64) -> Matrix4d {
    from_dmat4(DMat4::from_rotation_z(angle))
}

/// `a * b`: transforming by the result is the same as transforming by `b` first, then by `a`.
pub fn multiply(a: &Matrix4d, b: &Matrix4d) -> Matrix4d {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| (0..4).map(|k| a[row][k] * b[k][col]).sum::<f64>())
    })
}

pub fn transpose(m: &Matrix4d) -> Matrix4d {
    std::array::from_fn(|row| std::array::from_fn(|col| m[col][row]))
}

pub fn is_affine(m: &Matrix4d) -> bool {
    m[3] == AFFINE_LAST_ROW
}

/// Converts a (column-major) glam matrix.
///
/// Projective matrices are converted as-is, but their last row has no effect in
/// [`Point::transform`].
pub fn from_dmat4(m: DMat4) -> Matrix4d {
    let rows = m.transpose().to_cols_array_2d();
    if !is_affine(&rows) {
        warn!(
            "Matrix is not affine, its last row {:?} is ignored when transforming points",
            rows[3]
        );
    }
    rows
}

pub fn to_dmat4(m: &Matrix4d) -> DMat4 {
    DMat4::from_cols_array_2d(m).transpose()
}
