use lifemaze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// No 4-way path between `a` and `b` has fewer moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::at(2, 1);
        let b = Point::at(0, 0);
        assert_eq!(manhattan(a, b), 3);
        assert_eq!(manhattan(b, a), 3);
        assert_eq!(manhattan(a, a), 0);
    }
}
