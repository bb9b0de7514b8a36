use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};

use crate::canvas::{CanvasTransform, Uniforms};

pub struct GpuContext<'a> {
    pub surface: Surface<'a>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
    pub background_pipeline: RenderPipeline,
    pub ui_render_pipeline: RenderPipeline,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiScreenUniforms {
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2], // 16-byte alignment
}

pub struct UiScreenBuffers {
    pub uniform: Buffer,
    pub bind_group: BindGroup,
}

pub struct BoardView {
    pub transform: CanvasTransform,
    pub uniform: Uniforms,
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
}

pub struct GeometryBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
}

pub struct UiBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
}

/// Raw window-space input; board-space interaction state lives in `Board`.
pub struct WindowInput {
    pub mouse_pos: [f32; 2],
    pub pointer_active: bool,
}
