use glam::DVec3;

use crate::Point;

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::from_array(p.to_array())
    }
}

impl<U> From<euclid::Point3D<f64, U>> for Point {
    fn from(p: euclid::Point3D<f64, U>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<U> From<euclid::Vector3D<f64, U>> for Point {
    fn from(v: euclid::Vector3D<f64, U>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<U> From<Point> for euclid::Point3D<f64, U> {
    fn from(p: Point) -> Self {
        euclid::Point3D::new(p.x(), p.y(), p.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::UnknownUnit;

    #[test]
    fn glam_vectors() {
        let p = Point::new(1.0, -2.0, 3.5);
        let v: DVec3 = p.into();
        assert_eq!(v, DVec3::new(1.0, -2.0, 3.5));
        assert_eq!(Point::from(v), p);
        assert_eq!(
            Point::from(v.cross(DVec3::X)),
            p.cross(Point::new(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn euclid_points_and_vectors() {
        let p = euclid::Point3D::<f64, UnknownUnit>::new(4.0, 5.0, 6.0);
        let q = Point::from(p);
        assert_eq!(q, Point::new(4.0, 5.0, 6.0));
        assert_eq!(euclid::Point3D::<f64, UnknownUnit>::from(q), p);

        let v = euclid::Vector3D::<f64, UnknownUnit>::new(-1.0, 0.0, 1.0);
        assert_eq!(Point::from(v), Point::new(-1.0, 0.0, 1.0));
    }
}
