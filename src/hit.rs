//! Pointer hit-testing against the element store.
//!
//! Containment is a bounding-box approximation, never a test against the
//! rendered stroke: rectangles use the min/max box over their two corners,
//! everything else canonicalizes its endpoints and uses the bounding region
//! of that segment.

use crate::element::{Element, ShapeKind};

/// Returns the id of the first element in store order (lowest id) whose
/// normalized bounding region contains the point.
pub fn element_at_position(point: [f32; 2], elements: &[Element]) -> Option<usize> {
    elements
        .iter()
        .find(|element| contains(point, element))
        .map(|element| element.id)
}

fn contains(point: [f32; 2], element: &Element) -> bool {
    let (x1, y1, x2, y2) = match element.kind {
        ShapeKind::Rectangle => (
            element.x1.min(element.x2),
            element.y1.min(element.y2),
            element.x1.max(element.x2),
            element.y1.max(element.y2),
        ),
        _ => {
            let ((x1, y1), (x2, y2)) =
                canonical_order((element.x1, element.y1), (element.x2, element.y2));
            (x1, y1.min(y2), x2, y1.max(y2))
        }
    };

    x1 <= point[0] && point[0] <= x2 && y1 <= point[1] && point[1] <= y2
}

/// Orients two endpoints into a canonical first-to-second ordering: swap when
/// `x1 > x2`, or when `x1 == x2 && y1 > y2`. Idempotent, and symmetric in its
/// arguments.
fn canonical_order(a: (f32, f32), b: (f32, f32)) -> ((f32, f32), (f32, f32)) {
    if a.0 < b.0 || (a.0 == b.0 && a.1 < b.1) {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rough::{RoughGenerator, RoughOptions};

    fn element(id: usize, kind: ShapeKind, x1: f32, y1: f32, x2: f32, y2: f32) -> Element {
        let mut generator = RoughGenerator::new(Some(1));
        Element::build(
            id,
            x1,
            y1,
            x2,
            y2,
            kind,
            [0.0, 0.0, 0.0, 1.0],
            &mut generator,
            &RoughOptions::default(),
        )
    }

    #[test]
    fn rectangle_hit_is_corner_order_invariant() {
        let forward = element(0, ShapeKind::Rectangle, 10.0, 10.0, 50.0, 50.0);
        let reversed = element(0, ShapeKind::Rectangle, 50.0, 50.0, 10.0, 10.0);
        for point in [[30.0, 30.0], [10.0, 10.0], [50.0, 50.0], [5.0, 5.0], [60.0, 30.0]] {
            assert_eq!(
                contains(point, &forward),
                contains(point, &reversed),
                "disagreement at {point:?}"
            );
        }
    }

    #[test]
    fn rectangle_scenario_from_two_corners() {
        let elements = vec![element(0, ShapeKind::Rectangle, 10.0, 10.0, 50.0, 50.0)];
        assert_eq!(element_at_position([30.0, 30.0], &elements), Some(0));
        assert_eq!(element_at_position([5.0, 5.0], &elements), None);
    }

    #[test]
    fn non_rectangle_hit_treats_reversed_endpoints_identically() {
        for kind in [ShapeKind::Line, ShapeKind::Circle, ShapeKind::Ellipse] {
            let forward = element(0, kind, 10.0, 40.0, 50.0, 10.0);
            let reversed = element(0, kind, 50.0, 10.0, 10.0, 40.0);
            for point in [[30.0, 25.0], [10.0, 40.0], [50.0, 10.0], [0.0, 0.0], [70.0, 25.0]] {
                assert_eq!(
                    contains(point, &forward),
                    contains(point, &reversed),
                    "{kind:?} disagreement at {point:?}"
                );
            }
        }
    }

    #[test]
    fn vertical_line_canonicalizes_on_y() {
        let down = element(0, ShapeKind::Line, 20.0, 10.0, 20.0, 60.0);
        let up = element(0, ShapeKind::Line, 20.0, 60.0, 20.0, 10.0);
        assert!(contains([20.0, 30.0], &down));
        assert!(contains([20.0, 30.0], &up));
        assert!(!contains([20.0, 70.0], &up));
    }

    #[test]
    fn lowest_id_wins_on_overlap() {
        let elements = vec![
            element(0, ShapeKind::Rectangle, 0.0, 0.0, 100.0, 100.0),
            element(1, ShapeKind::Rectangle, 20.0, 20.0, 80.0, 80.0),
        ];
        assert_eq!(element_at_position([50.0, 50.0], &elements), Some(0));
    }

    #[test]
    fn empty_store_misses() {
        assert_eq!(element_at_position([10.0, 10.0], &[]), None);
    }

    #[test]
    fn containment_is_inclusive_at_the_boundary() {
        let elements = vec![element(0, ShapeKind::Rectangle, 10.0, 10.0, 50.0, 50.0)];
        assert_eq!(element_at_position([10.0, 10.0], &elements), Some(0));
        assert_eq!(element_at_position([50.0, 50.0], &elements), Some(0));
    }
}
