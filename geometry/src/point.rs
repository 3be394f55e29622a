use std::{
    fmt,
    iter::Sum,
    mem::{align_of, size_of},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use crate::{CoordinateCountError, EPSILON, Matrix4d};

/// A point in 3D space, or a free vector.
///
/// The type does not distinguish positions from directions, that is up to the caller. Values are
/// stored as three contiguous `f64`s without padding, so slices of points can be handed to
/// consumers that expect flat `[f64; 3]` vertex buffers (see [`crate::as_vertices`]).
///
/// No operation validates its inputs: NaN and infinities propagate through all arithmetic.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point {
    xyz: [f64; 3],
}

// Vertex buffer layout.
const_assert_eq!(size_of::<Point>(), 3 * size_of::<f64>());
const_assert_eq!(align_of::<Point>(), align_of::<f64>());

pub type Vector = Point;

impl Point {
    pub const ZERO: Self = Self::splat(0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { xyz: [x, y, z] }
    }

    pub const fn from_array(xyz: [f64; 3]) -> Self {
        Self { xyz }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// The vector pointing from `a` to `b`.
    ///
    /// Computed exactly like `b - a`, so the results are bit-identical.
    #[inline]
    pub fn between(a: Point, b: Point) -> Self {
        b - a
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.xyz[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.xyz[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.xyz[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.xyz[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.xyz[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.xyz[2]
    }

    /// Checked coordinate access, `None` if `i` is not in `0..3`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.xyz.get(i).copied()
    }

    /// Coordinate access without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be 0, 1, or 2.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> f64 {
        debug_assert!(i < 3, "Point coordinate index out of range: {i}");
        unsafe { *self.xyz.get_unchecked(i) }
    }

    /// Mutable coordinate access without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be 0, 1, or 2.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut f64 {
        debug_assert!(i < 3, "Point coordinate index out of range: {i}");
        unsafe { self.xyz.get_unchecked_mut(i) }
    }

    pub const fn as_array(&self) -> &[f64; 3] {
        &self.xyz
    }

    pub fn as_array_mut(&mut self) -> &mut [f64; 3] {
        &mut self.xyz
    }

    pub const fn to_array(self) -> [f64; 3] {
        self.xyz
    }

    /// Chainable `+=`.
    #[inline]
    pub fn add_in_place(&mut self, rhs: Point) -> &mut Self {
        *self += rhs;
        self
    }

    /// Chainable `-=`.
    #[inline]
    pub fn sub_in_place(&mut self, rhs: Point) -> &mut Self {
        *self -= rhs;
        self
    }

    /// Chainable `*=`.
    #[inline]
    pub fn scale_in_place(&mut self, d: f64) -> &mut Self {
        *self *= d;
        self
    }

    /// Chainable `/=`. Dividing by zero yields infinities or NaN.
    #[inline]
    pub fn div_in_place(&mut self, d: f64) -> &mut Self {
        *self /= d;
        self
    }

    #[inline]
    pub fn dot(&self, rhs: Point) -> f64 {
        let (a, b) = (&self.xyz, &rhs.xyz);
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Right-handed cross product, `self × rhs`.
    #[inline]
    pub fn cross(&self, rhs: Point) -> Point {
        let (a, b) = (&self.xyz, &rhs.xyz);
        Point::new(
            a[1] * b[2] - b[1] * a[2],
            a[2] * b[0] - b[2] * a[0],
            a[0] * b[1] - b[0] * a[1],
        )
    }

    /// Manhattan norm.
    #[inline]
    pub fn norm1(&self) -> f64 {
        self.xyz[0].abs() + self.xyz[1].abs() + self.xyz[2].abs()
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm2(&self) -> f64 {
        self.squared_norm2().sqrt()
    }

    #[inline]
    pub fn squared_norm2(&self) -> f64 {
        self.dot(*self)
    }

    /// Maximum norm. Returns NaN if any coordinate is NaN.
    #[inline]
    pub fn norm_inf(&self) -> f64 {
        max_propagating_nan(
            self.xyz[0].abs(),
            max_propagating_nan(self.xyz[1].abs(), self.xyz[2].abs()),
        )
    }

    /// Euclidean distance between two positions.
    pub fn distance(&self, other: Point) -> f64 {
        Point::between(*self, other).norm2()
    }

    /// The unit vector in the same direction, `None` if the vector is too short to have one.
    pub fn normalized(&self) -> Option<Point> {
        let length = self.norm2();
        if length < EPSILON {
            return None;
        }
        Some(*self / length)
    }

    pub fn abs(&self) -> Self {
        Self::from_array(self.xyz.map(f64::abs))
    }

    /// Applies the affine transformation `m` to this point in place.
    ///
    /// `m` is row-major. The point is treated as a homogeneous coordinate with `w = 1`, so the
    /// translation column is always applied, and the last row of `m` is ignored. Directions must
    /// use [`Self::transform_direction`] instead.
    #[inline]
    pub fn transform(&mut self, m: &Matrix4d) -> &mut Self {
        let [x, y, z] = self.xyz;
        self.xyz = [
            x * m[0][0] + y * m[0][1] + z * m[0][2] + m[0][3],
            x * m[1][0] + y * m[1][1] + z * m[1][2] + m[1][3],
            x * m[2][0] + y * m[2][1] + z * m[2][2] + m[2][3],
        ];
        self
    }

    /// Applies the linear part of `m` in place, ignoring its translation column (`w = 0`).
    #[inline]
    pub fn transform_direction(&mut self, m: &Matrix4d) -> &mut Self {
        let [x, y, z] = self.xyz;
        self.xyz = [
            x * m[0][0] + y * m[0][1] + z * m[0][2],
            x * m[1][0] + y * m[1][1] + z * m[1][2],
            x * m[2][0] + y * m[2][1] + z * m[2][2],
        ];
        self
    }

    pub fn transformed(mut self, m: &Matrix4d) -> Self {
        self.transform(m);
        self
    }

    pub fn transformed_direction(mut self, m: &Matrix4d) -> Self {
        self.transform_direction(m);
        self
    }
}

// `f64::max` returns the other operand when one is NaN.
#[inline]
fn max_propagating_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || a > b { a } else { b }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Self::from_array(self.xyz.map(|v| -v))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.xyz, rhs.xyz);
        Self::new(a[0] + b[0], a[1] + b[1], a[2] + b[2])
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.xyz, rhs.xyz);
        Self::new(a[0] - b[0], a[1] - b[1], a[2] - b[2])
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_array(self.xyz.map(|v| v * rhs))
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_array(self.xyz.map(|v| v / rhs))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Panics if `i` is not in `0..3`. Use [`Point::get_unchecked`] to skip the check.
impl Index<usize> for Point {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.xyz[i]
    }
}

impl IndexMut<usize> for Point {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.xyz[i]
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Self {
        iter.fold(Point::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.xyz;
        match f.precision() {
            Some(p) => write!(f, "({x:.p$}, {y:.p$}, {z:.p$})"),
            None => write!(f, "({x}, {y}, {z})"),
        }
    }
}

impl From<[f64; 3]> for Point {
    fn from(xyz: [f64; 3]) -> Self {
        Self::from_array(xyz)
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        p.xyz
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        let [x, y, z] = p.xyz;
        (x, y, z)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = CoordinateCountError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let xyz: [f64; 3] = value
            .try_into()
            .map_err(|_| CoordinateCountError { len: value.len() })?;
        Ok(xyz.into())
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.xyz
            .iter()
            .zip(&other.xyz)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.xyz
            .iter()
            .zip(&other.xyz)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Point {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.xyz
            .iter()
            .zip(&other.xyz)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
