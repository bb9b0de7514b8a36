//! Screen-space overlay: five mutually exclusive tool buttons and a hue
//! strip for picking the stroke color. All flat quads, no text.

use crate::{Tool, Vertex};

const BUTTON_SIZE: [f32; 2] = [40.0, 40.0];
const HUE_STRIP_POS: [f32; 2] = [10.0, 60.0];
const HUE_STRIP_SIZE: [f32; 2] = [240.0, 18.0];
const HUE_SEGMENTS: u32 = 48;
const SWATCH_POS: [f32; 2] = [258.0, 60.0];
const SWATCH_SIZE: [f32; 2] = [18.0, 18.0];

pub struct UiRenderer {
    tool_buttons: Vec<ToolButton>,
}

struct ToolButton {
    tool: Tool,
    position: [f32; 2],
}

impl UiRenderer {
    pub fn new() -> Self {
        let tools = [
            Tool::Selection,
            Tool::Line,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Ellipse,
        ];
        let tool_buttons = tools
            .iter()
            .enumerate()
            .map(|(i, &tool)| ToolButton {
                tool,
                position: [10.0 + i as f32 * 50.0, 10.0],
            })
            .collect();

        Self { tool_buttons }
    }

    pub fn generate_ui_vertices(&self, current_tool: Tool, current_color: [f32; 4]) -> (Vec<Vertex>, Vec<u16>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut index_offset = 0u16;

        self.add_quad(
            &mut vertices,
            &mut indices,
            &mut index_offset,
            [5.0, 5.0],
            [280.0, 80.0],
            [0.95, 0.95, 0.95, 0.9],
        );

        for button in &self.tool_buttons {
            let color = if button.tool == current_tool {
                [0.5, 0.7, 1.0, 1.0]
            } else {
                [0.8, 0.8, 0.8, 1.0]
            };
            self.add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                button.position,
                BUTTON_SIZE,
                color,
            );
            self.add_tool_icon(&mut vertices, &mut indices, &mut index_offset, button);
        }

        // Hue strip, one quad per sampled hue.
        let segment_width = HUE_STRIP_SIZE[0] / HUE_SEGMENTS as f32;
        for i in 0..HUE_SEGMENTS {
            let hue = i as f32 / HUE_SEGMENTS as f32 * 360.0;
            self.add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                [HUE_STRIP_POS[0] + i as f32 * segment_width, HUE_STRIP_POS[1]],
                [segment_width, HUE_STRIP_SIZE[1]],
                hue_to_rgba(hue),
            );
        }

        // Current color swatch next to the strip.
        self.add_quad(
            &mut vertices,
            &mut indices,
            &mut index_offset,
            SWATCH_POS,
            SWATCH_SIZE,
            current_color,
        );

        (vertices, indices)
    }

    fn add_tool_icon(
        &self,
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u16>,
        index_offset: &mut u16,
        button: &ToolButton,
    ) {
        let icon_color = [0.2, 0.2, 0.2, 1.0];
        let center = [
            button.position[0] + BUTTON_SIZE[0] / 2.0,
            button.position[1] + BUTTON_SIZE[1] / 2.0,
        ];

        match button.tool {
            Tool::Selection => {
                vertices.extend_from_slice(&[
                    Vertex { position: [center[0] - 5.0, center[1] - 8.0], color: icon_color },
                    Vertex { position: [center[0] + 5.0, center[1]], color: icon_color },
                    Vertex { position: [center[0], center[1] + 8.0], color: icon_color },
                ]);
                indices.extend_from_slice(&[*index_offset, *index_offset + 1, *index_offset + 2]);
                *index_offset += 3;
            }
            Tool::Line => {
                self.add_line(
                    vertices,
                    indices,
                    index_offset,
                    [center[0] - 8.0, center[1] + 8.0],
                    [center[0] + 8.0, center[1] - 8.0],
                    2.0,
                    icon_color,
                );
            }
            Tool::Rectangle => {
                let corners = [
                    [center[0] - 8.0, center[1] - 6.0],
                    [center[0] + 8.0, center[1] - 6.0],
                    [center[0] + 8.0, center[1] + 6.0],
                    [center[0] - 8.0, center[1] + 6.0],
                ];
                for i in 0..4 {
                    self.add_line(
                        vertices,
                        indices,
                        index_offset,
                        corners[i],
                        corners[(i + 1) % 4],
                        2.0,
                        icon_color,
                    );
                }
            }
            Tool::Circle => {
                self.add_oval(vertices, indices, index_offset, center, 8.0, 8.0, icon_color);
            }
            Tool::Ellipse => {
                self.add_oval(vertices, indices, index_offset, center, 10.0, 6.0, icon_color);
            }
        }
    }

    fn add_oval(
        &self,
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u16>,
        index_offset: &mut u16,
        center: [f32; 2],
        rx: f32,
        ry: f32,
        color: [f32; 4],
    ) {
        const SEGMENTS: u32 = 16;
        for i in 0..SEGMENTS {
            let angle1 = (i as f32 * 2.0 * std::f32::consts::PI) / SEGMENTS as f32;
            let angle2 = ((i + 1) as f32 * 2.0 * std::f32::consts::PI) / SEGMENTS as f32;
            let p1 = [center[0] + angle1.cos() * rx, center[1] + angle1.sin() * ry];
            let p2 = [center[0] + angle2.cos() * rx, center[1] + angle2.sin() * ry];
            self.add_line(vertices, indices, index_offset, p1, p2, 2.0, color);
        }
    }

    fn add_quad(
        &self,
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u16>,
        index_offset: &mut u16,
        position: [f32; 2],
        size: [f32; 2],
        color: [f32; 4],
    ) {
        vertices.extend_from_slice(&[
            Vertex { position, color },
            Vertex { position: [position[0] + size[0], position[1]], color },
            Vertex { position: [position[0] + size[0], position[1] + size[1]], color },
            Vertex { position: [position[0], position[1] + size[1]], color },
        ]);
        indices.extend_from_slice(&[
            *index_offset,
            *index_offset + 1,
            *index_offset + 2,
            *index_offset,
            *index_offset + 2,
            *index_offset + 3,
        ]);
        *index_offset += 4;
    }

    fn add_line(
        &self,
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u16>,
        index_offset: &mut u16,
        start: [f32; 2],
        end: [f32; 2],
        width: f32,
        color: [f32; 4],
    ) {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 {
            return;
        }
        let nx = -dy / len * width * 0.5;
        let ny = dx / len * width * 0.5;

        vertices.extend_from_slice(&[
            Vertex { position: [start[0] - nx, start[1] - ny], color },
            Vertex { position: [start[0] + nx, start[1] + ny], color },
            Vertex { position: [end[0] + nx, end[1] + ny], color },
            Vertex { position: [end[0] - nx, end[1] - ny], color },
        ]);
        indices.extend_from_slice(&[
            *index_offset,
            *index_offset + 1,
            *index_offset + 2,
            *index_offset,
            *index_offset + 2,
            *index_offset + 3,
        ]);
        *index_offset += 4;
    }

    pub fn handle_tool_click(&self, mouse_pos: [f32; 2]) -> Option<Tool> {
        self.tool_buttons
            .iter()
            .find(|button| point_in_rect(mouse_pos, button.position, BUTTON_SIZE))
            .map(|button| button.tool)
    }

    /// Maps a click on the hue strip to a fully saturated stroke color.
    pub fn handle_color_click(&self, mouse_pos: [f32; 2]) -> Option<[f32; 4]> {
        if !point_in_rect(mouse_pos, HUE_STRIP_POS, HUE_STRIP_SIZE) {
            return None;
        }
        let t = (mouse_pos[0] - HUE_STRIP_POS[0]) / HUE_STRIP_SIZE[0];
        Some(hue_to_rgba(t.clamp(0.0, 1.0) * 360.0))
    }

    pub fn is_mouse_over_ui(&self, mouse_pos: [f32; 2]) -> bool {
        point_in_rect(mouse_pos, [5.0, 5.0], [280.0, 80.0])
    }
}

fn point_in_rect(point: [f32; 2], position: [f32; 2], size: [f32; 2]) -> bool {
    point[0] >= position[0]
        && point[0] <= position[0] + size[0]
        && point[1] >= position[1]
        && point[1] <= position[1] + size[1]
}

/// Hue in degrees to RGBA at full saturation and value.
fn hue_to_rgba(hue: f32) -> [f32; 4] {
    let h = (hue % 360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    [r, g, b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_buttons_are_mutually_exclusive_hits() {
        let ui = UiRenderer::new();
        assert_eq!(ui.handle_tool_click([30.0, 30.0]), Some(Tool::Selection));
        assert_eq!(ui.handle_tool_click([80.0, 30.0]), Some(Tool::Line));
        assert_eq!(ui.handle_tool_click([130.0, 30.0]), Some(Tool::Rectangle));
        assert_eq!(ui.handle_tool_click([180.0, 30.0]), Some(Tool::Circle));
        assert_eq!(ui.handle_tool_click([230.0, 30.0]), Some(Tool::Ellipse));
        assert_eq!(ui.handle_tool_click([400.0, 30.0]), None);
    }

    #[test]
    fn hue_strip_maps_left_edge_to_red() {
        let ui = UiRenderer::new();
        let color = ui
            .handle_color_click([HUE_STRIP_POS[0], HUE_STRIP_POS[1] + 5.0])
            .unwrap();
        assert_eq!(color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn clicks_outside_the_strip_pick_nothing() {
        let ui = UiRenderer::new();
        assert_eq!(ui.handle_color_click([500.0, 500.0]), None);
    }

    #[test]
    fn hue_wheel_hits_the_primaries() {
        assert_eq!(hue_to_rgba(0.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hue_to_rgba(120.0), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(hue_to_rgba(240.0), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn ui_vertices_are_quad_aligned() {
        let ui = UiRenderer::new();
        let (vertices, indices) = ui.generate_ui_vertices(Tool::Line, [0.0, 0.0, 0.0, 1.0]);
        assert!(!vertices.is_empty());
        assert!(indices.len() >= vertices.len());
    }
}
