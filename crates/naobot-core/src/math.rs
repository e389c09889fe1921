use crate::Vector2;

/// Finds the intersection point of two lines.
///
/// Each line is defined by a point and a direction vector. Returns None if the lines
/// are parallel.
pub fn find_intersection(
    point1: Vector2,
    direction1: Vector2,
    point2: Vector2,
    direction2: Vector2,
) -> Option<Vector2> {
    let det = direction1.x * direction2.y - direction1.y * direction2.x;
    if det.abs() < 1e-10 {
        return None;
    }

    let dp = point2 - point1;
    let t = (dp.x * direction2.y - dp.y * direction2.x) / det;
    Some(point1 + t * direction1)
}

/// Where the ray from `apex` through `through` crosses the vertical line `x = line_x`.
///
/// This is the similar-triangles projection used to put a keeper between the ball
/// and the back of the goal. Returns the y coordinate, or None when `through` lies
/// on the vertical through `apex`.
pub fn project_onto_vertical(apex: Vector2, through: Vector2, line_x: f64) -> Option<f64> {
    find_intersection(
        apex,
        through - apex,
        Vector2::new(line_x, 0.0),
        Vector2::y(),
    )
    .map(|p| p.y)
}
