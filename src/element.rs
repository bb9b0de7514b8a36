//! The shape model: one drawn element plus its precomputed sketch.

use crate::rough::{RoughGenerator, RoughOptions, Sketch};

/// The active drawing mode the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Selection,
    Line,
    Rectangle,
    Circle,
    Ellipse,
}

impl Tool {
    /// The shape kind this tool draws. `None` for the selection tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Selection => None,
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Ellipse,
}

/// One user-drawn element.
///
/// `id` equals the element's position in the board store at creation time and
/// addresses it for in-place geometry updates; the store never reorders or
/// removes entries within a session. `(x1, y1)` is the press-down anchor,
/// `(x2, y2)` the free point tracked during the drag.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: usize,
    pub kind: ShapeKind,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: [f32; 4],
    pub sketch: Sketch,
}

impl Element {
    /// Builds an element with its sketch computed from the kind-specific
    /// parameterization:
    ///
    /// - line: the literal two-point segment
    /// - rectangle: corner `(x1, y1)`, size `(x2-x1, y2-y1)`, negative sizes
    ///   accepted un-normalized
    /// - circle: center `(x1, y1)`, diameter `(x2-x1) + (y2-y1)` -- the sum,
    ///   not the point distance (see [`Element::circle_size`])
    /// - ellipse: center `(x1, y1)`, width `x2-x1`, height `y2-y1`
    ///
    /// All inputs are accepted as-is, including zero-size geometry.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        id: usize,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        kind: ShapeKind,
        color: [f32; 4],
        generator: &mut RoughGenerator,
        options: &RoughOptions,
    ) -> Self {
        let sketch = match kind {
            ShapeKind::Line => generator.line([x1, y1], [x2, y2], options),
            ShapeKind::Rectangle => generator.rectangle([x1, y1], [x2 - x1, y2 - y1], options),
            ShapeKind::Circle => generator.circle([x1, y1], Self::circle_size(x1, y1, x2, y2), options),
            ShapeKind::Ellipse => generator.ellipse([x1, y1], [x2 - x1, y2 - y1], options),
        };

        Self {
            id,
            kind,
            x1,
            y1,
            x2,
            y2,
            color,
            sketch,
        }
    }

    /// Circle size parameter: `(x2-x1) + (y2-y1)`.
    ///
    /// Not a geometric radius. Kept as the coordinate-delta sum for
    /// compatibility with how circles have always been sized here.
    pub fn circle_size(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        (x2 - x1) + (y2 - y1)
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(kind: ShapeKind, x1: f32, y1: f32, x2: f32, y2: f32) -> Element {
        let mut generator = RoughGenerator::new(Some(3));
        Element::build(
            0,
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
    fn circle_size_is_the_delta_sum_not_a_radius() {
        // For x1=0,y1=0,x2=10,y2=0 the parameter is exactly 10.
        assert_eq!(Element::circle_size(0.0, 0.0, 10.0, 0.0), 10.0);
        // A diagonal drag sums both deltas instead of taking the distance.
        assert_eq!(Element::circle_size(0.0, 0.0, 3.0, 4.0), 7.0);
    }

    #[test]
    fn degenerate_element_is_valid() {
        let element = build(ShapeKind::Rectangle, 20.0, 20.0, 20.0, 20.0);
        assert_eq!(element.width(), 0.0);
        assert_eq!(element.height(), 0.0);
    }

    #[test]
    fn reversed_rectangle_keeps_its_corner_unnormalized() {
        let element = build(ShapeKind::Rectangle, 50.0, 50.0, 10.0, 10.0);
        assert_eq!(element.x1, 50.0);
        assert_eq!(element.width(), -40.0);
        assert!(element.sketch.has_segments());
    }

    #[test]
    fn every_kind_produces_a_sketch() {
        for kind in [
            ShapeKind::Line,
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::Ellipse,
        ] {
            let element = build(kind, 10.0, 10.0, 60.0, 40.0);
            assert!(element.sketch.has_segments(), "{kind:?} sketch has nothing to draw");
        }
    }
}
