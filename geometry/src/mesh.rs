//! Views of point slices as raw vertex buffers, and per-face helpers.

use log::debug;

use crate::Point;

/// Raw vertex layout, bit-compatible with [`Point`].
pub type Vertex = [f64; 3];
/// Vertex indices of a planar polygon, in winding order.
pub type Face = Vec<usize>;

pub fn as_vertices(points: &[Point]) -> &[Vertex] {
    bytemuck::cast_slice(points)
}

pub fn as_flat(points: &[Point]) -> &[f64] {
    bytemuck::cast_slice(points)
}

pub fn from_vertices(vertices: &[Vertex]) -> &[Point] {
    bytemuck::cast_slice(vertices)
}

/// Unit normal of the polygon `face` (Newell's method).
///
/// Counter-clockwise winding seen from the normal's side. Returns `None` for faces with less than
/// three vertices, indices outside of `points`, or faces without area.
pub fn face_normal(points: &[Point], face: &[usize]) -> Option<Point> {
    if face.len() < 3 {
        debug!("Face has {} vertices, needs at least 3 for a normal", face.len());
        return None;
    }

    let mut normal = Point::ZERO;
    for (i, &index) in face.iter().enumerate() {
        let next_index = face[(i + 1) % face.len()];
        let (Some(&c), Some(&n)) = (points.get(index), points.get(next_index)) else {
            debug!(
                "Face index out of range: {index} or {next_index}, {} points",
                points.len()
            );
            return None;
        };
        normal += Point::new(
            (c.y() - n.y()) * (c.z() + n.z()),
            (c.z() - n.z()) * (c.x() + n.x()),
            (c.x() - n.x()) * (c.y() + n.y()),
        );
    }

    let normal = normal.normalized();
    if normal.is_none() {
        debug!("Degenerate face {face:?}");
    }
    normal
}

pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().sum::<Point>() / points.len() as f64)
}
