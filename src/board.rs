//! The drawing board: element store, tool/mode state, and the pointer-driven
//! interaction state machine. Owns no GPU state, so the whole interaction
//! flow is testable without a window.

use crate::element::{Element, Tool};
use crate::hit;
use crate::rough::{RoughGenerator, RoughOptions};

/// Fixed logical drawing area, in board coordinates.
pub const BOARD_SIZE: f32 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
    Moving,
}

/// Drag state captured on pointer-down over an element with the selection
/// tool. Offsets are pointer-to-anchor; width/height are the element's span
/// at drag start and are preserved for the whole move.
#[derive(Debug, Clone, Copy)]
struct Drag {
    id: usize,
    offset_x: f32,
    offset_y: f32,
    width: f32,
    height: f32,
}

pub struct Board {
    elements: Vec<Element>,
    tool: Tool,
    color: [f32; 4],
    options: RoughOptions,
    mode: Mode,
    drag: Option<Drag>,
    generator: RoughGenerator,
}

impl Board {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            elements: Vec::new(),
            tool: Tool::Line,
            color: [0.0, 0.0, 0.0, 1.0],
            options: RoughOptions::default(),
            mode: Mode::Idle,
            drag: None,
            generator: RoughGenerator::new(seed),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Sets the stroke color for subsequently created elements. Existing
    /// elements keep theirs.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Pointer pressed at a board position. Appends a degenerate element and
    /// enters `Drawing` with a shape tool; with the selection tool, enters
    /// `Moving` when the point hits an element, otherwise stays `Idle`.
    pub fn pointer_down(&mut self, pos: [f32; 2]) {
        if self.mode != Mode::Idle {
            return;
        }

        match self.tool.shape_kind() {
            Some(kind) => {
                let id = self.elements.len();
                let element = Element::build(
                    id,
                    pos[0],
                    pos[1],
                    pos[0],
                    pos[1],
                    kind,
                    self.color,
                    &mut self.generator,
                    &self.options,
                );
                self.elements.push(element);
                self.mode = Mode::Drawing;
                log::debug!("drawing element {id} ({kind:?}) from {pos:?}");
            }
            None => {
                if let Some(id) = hit::element_at_position(pos, &self.elements) {
                    let element = &self.elements[id];
                    self.drag = Some(Drag {
                        id,
                        offset_x: pos[0] - element.x1,
                        offset_y: pos[1] - element.y1,
                        width: element.width(),
                        height: element.height(),
                    });
                    self.mode = Mode::Moving;
                    log::debug!("moving element {id} from {pos:?}");
                }
            }
        }
    }

    /// Pointer moved. While drawing, retargets the last element's free point;
    /// while moving, re-anchors the dragged element, keeping its span.
    pub fn pointer_move(&mut self, pos: [f32; 2]) {
        match self.mode {
            Mode::Idle => {}
            Mode::Drawing => {
                let id = self.elements.len() - 1;
                let (x1, y1) = (self.elements[id].x1, self.elements[id].y1);
                self.update_element(id, x1, y1, pos[0], pos[1]);
            }
            Mode::Moving => {
                if let Some(drag) = self.drag {
                    let x1 = pos[0] - drag.offset_x;
                    let y1 = pos[1] - drag.offset_y;
                    self.update_element(drag.id, x1, y1, x1 + drag.width, y1 + drag.height);
                }
            }
        }
    }

    /// Pointer released: back to idle, drag state cleared.
    pub fn pointer_up(&mut self) {
        self.mode = Mode::Idle;
        self.drag = None;
    }

    /// Replaces the element at `id` with a freshly built one at the same id,
    /// same kind, same color, new endpoints. The sketch is recomputed.
    fn update_element(&mut self, id: usize, x1: f32, y1: f32, x2: f32, y2: f32) {
        let old = &self.elements[id];
        self.elements[id] = Element::build(
            id,
            x1,
            y1,
            x2,
            y2,
            old.kind,
            old.color,
            &mut self.generator,
            &self.options,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(Some(11))
    }

    fn draw(board: &mut Board, tool: Tool, from: [f32; 2], to: [f32; 2]) {
        board.set_tool(tool);
        board.pointer_down(from);
        board.pointer_move(to);
        board.pointer_up();
    }

    #[test]
    fn drawing_appends_exactly_one_element_per_drag() {
        let mut board = board();
        board.set_tool(Tool::Rectangle);
        board.pointer_down([10.0, 10.0]);
        assert_eq!(board.elements().len(), 1);
        assert_eq!(board.mode(), Mode::Drawing);

        for step in 1..=20 {
            board.pointer_move([10.0 + step as f32, 10.0 + step as f32]);
            assert_eq!(board.elements().len(), 1);
        }
        board.pointer_up();
        assert_eq!(board.mode(), Mode::Idle);

        let element = &board.elements()[0];
        assert_eq!((element.x1, element.y1), (10.0, 10.0));
        assert_eq!((element.x2, element.y2), (30.0, 30.0));
    }

    #[test]
    fn pointer_down_starts_with_a_degenerate_element() {
        let mut board = board();
        board.set_tool(Tool::Ellipse);
        board.pointer_down([42.0, 17.0]);
        let element = &board.elements()[0];
        assert_eq!((element.x1, element.y1, element.x2, element.y2), (42.0, 17.0, 42.0, 17.0));
    }

    #[test]
    fn ids_equal_store_positions() {
        let mut board = board();
        draw(&mut board, Tool::Line, [0.0, 0.0], [10.0, 10.0]);
        draw(&mut board, Tool::Circle, [50.0, 50.0], [60.0, 60.0]);
        draw(&mut board, Tool::Rectangle, [100.0, 100.0], [150.0, 150.0]);
        for (i, element) in board.elements().iter().enumerate() {
            assert_eq!(element.id, i);
        }
    }

    #[test]
    fn selection_miss_stays_idle() {
        let mut board = board();
        draw(&mut board, Tool::Rectangle, [10.0, 10.0], [50.0, 50.0]);
        board.set_tool(Tool::Selection);
        board.pointer_down([200.0, 200.0]);
        assert_eq!(board.mode(), Mode::Idle);
        board.pointer_move([210.0, 210.0]);
        let element = &board.elements()[0];
        assert_eq!((element.x1, element.y1), (10.0, 10.0));
    }

    #[test]
    fn moving_shifts_the_anchor_by_the_pointer_delta() {
        let mut board = board();
        draw(&mut board, Tool::Rectangle, [10.0, 10.0], [50.0, 50.0]);

        board.set_tool(Tool::Selection);
        board.pointer_down([30.0, 30.0]);
        assert_eq!(board.mode(), Mode::Moving);
        board.pointer_move([50.0, 35.0]);
        board.pointer_up();

        let element = &board.elements()[0];
        assert_eq!((element.x1, element.y1), (30.0, 15.0));
        assert_eq!((element.x2, element.y2), (70.0, 55.0));
    }

    #[test]
    fn moving_preserves_width_and_height() {
        let mut board = board();
        draw(&mut board, Tool::Ellipse, [100.0, 100.0], [160.0, 140.0]);

        board.set_tool(Tool::Selection);
        board.pointer_down([120.0, 110.0]);
        for delta in [[-300.0, 12.5], [475.0, -88.0], [3.0, 900.0]] {
            board.pointer_move([120.0 + delta[0], 110.0 + delta[1]]);
            let element = &board.elements()[0];
            assert_eq!(element.width(), 60.0);
            assert_eq!(element.height(), 40.0);
        }
        board.pointer_up();
    }

    #[test]
    fn moving_keeps_the_element_color() {
        let mut board = board();
        board.set_color([1.0, 0.0, 0.0, 1.0]);
        draw(&mut board, Tool::Line, [10.0, 10.0], [50.0, 50.0]);

        board.set_color([0.0, 1.0, 0.0, 1.0]);
        board.set_tool(Tool::Selection);
        board.pointer_down([30.0, 30.0]);
        board.pointer_move([60.0, 60.0]);
        board.pointer_up();

        assert_eq!(board.elements()[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn color_applies_to_subsequent_elements_only() {
        let mut board = board();
        draw(&mut board, Tool::Line, [0.0, 0.0], [10.0, 10.0]);
        board.set_color([0.2, 0.4, 0.6, 1.0]);
        draw(&mut board, Tool::Line, [20.0, 20.0], [30.0, 30.0]);

        assert_eq!(board.elements()[0].color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(board.elements()[1].color, [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn overlapping_elements_drag_the_lowest_id() {
        let mut board = board();
        draw(&mut board, Tool::Rectangle, [0.0, 0.0], [100.0, 100.0]);
        draw(&mut board, Tool::Rectangle, [20.0, 20.0], [80.0, 80.0]);

        board.set_tool(Tool::Selection);
        board.pointer_down([50.0, 50.0]);
        board.pointer_move([60.0, 60.0]);
        board.pointer_up();

        assert_eq!((board.elements()[0].x1, board.elements()[0].y1), (10.0, 10.0));
        assert_eq!((board.elements()[1].x1, board.elements()[1].y1), (20.0, 20.0));
    }

    #[test]
    fn pointer_up_without_down_is_a_no_op() {
        let mut board = board();
        board.pointer_up();
        board.pointer_move([10.0, 10.0]);
        assert!(board.elements().is_empty());
        assert_eq!(board.mode(), Mode::Idle);
    }
}
