//! Per-frame buffer rebuild: the whole element store is replayed through its
//! precomputed sketches in store order, so later elements draw over earlier
//! ones. No dirty-region tracking at this scale.

use wgpu::util::DeviceExt;

use crate::app_state::State;

impl State {
    pub fn update(&mut self) {
        self.update_board_buffers();
        self.update_ui_buffers();
    }

    fn update_board_buffers(&mut self) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut index_offset = 0u32;

        for element in self.board.elements() {
            element
                .sketch
                .tessellate(element.color, &mut vertices, &mut indices, &mut index_offset);
        }

        if vertices.is_empty() {
            self.geometry.vertex = None;
            self.geometry.index = None;
            self.geometry.count = 0;
            return;
        }

        self.geometry.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.geometry.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
        self.geometry.count = indices.len() as u32;
    }

    fn update_ui_buffers(&mut self) {
        let (ui_vertices, ui_indices) = self
            .ui_renderer
            .generate_ui_vertices(self.board.tool(), self.board.color());

        if ui_vertices.is_empty() {
            self.ui_geo.vertex = None;
            self.ui_geo.index = None;
            self.ui_geo.count = 0;
            return;
        }

        self.ui_geo.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("UI Vertex Buffer"),
                contents: bytemuck::cast_slice(&ui_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.ui_geo.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("UI Index Buffer"),
                contents: bytemuck::cast_slice(&ui_indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
        self.ui_geo.count = ui_indices.len() as u32;
    }
}
