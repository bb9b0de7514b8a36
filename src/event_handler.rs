use winit::event::*;

use crate::app_state::State;
use crate::element::Tool;
use crate::state::UiScreenUniforms;
use crate::texture::BackgroundTexture;

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            let window_size = (new_size.width as f32, new_size.height as f32);
            self.board_view.transform.fit_window(window_size);
            self.board_view
                .uniform
                .update_transform(&self.board_view.transform, window_size);
            self.gpu.queue.write_buffer(
                &self.board_view.uniform_buffer,
                0,
                bytemuck::cast_slice(&[self.board_view.uniform]),
            );

            let ui_screen_uniforms = UiScreenUniforms {
                screen_size: [new_size.width as f32, new_size.height as f32],
                _padding: [0.0, 0.0],
            };
            self.gpu.queue.write_buffer(
                &self.ui_screen.uniform,
                0,
                bytemuck::cast_slice(&[ui_screen_uniforms]),
            );
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                match state {
                    ElementState::Pressed => {
                        if let Some(tool) = self.ui_renderer.handle_tool_click(self.input.mouse_pos) {
                            self.board.set_tool(tool);
                            return true;
                        }
                        if let Some(color) = self.ui_renderer.handle_color_click(self.input.mouse_pos) {
                            self.board.set_color(color);
                            return true;
                        }
                        if self.ui_renderer.is_mouse_over_ui(self.input.mouse_pos) {
                            return true;
                        }

                        if self.board_view.transform.is_on_board(self.input.mouse_pos) {
                            let pos = self.board_view.transform.screen_to_board(self.input.mouse_pos);
                            self.board.pointer_down(pos);
                            self.input.pointer_active = true;
                        }
                    }
                    ElementState::Released => {
                        if self.input.pointer_active {
                            self.board.pointer_up();
                            self.input.pointer_active = false;
                        }
                    }
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.mouse_pos = [position.x as f32, position.y as f32];
                if self.input.pointer_active {
                    let pos = self.board_view.transform.screen_to_board(self.input.mouse_pos);
                    self.board.pointer_move(pos);
                }
                true
            }
            WindowEvent::DroppedFile(path) => {
                self.set_background(path);
                true
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state != ElementState::Pressed {
                    return false;
                }
                let keycode = match key_event.physical_key {
                    winit::keyboard::PhysicalKey::Code(code) => code,
                    _ => return false,
                };
                let tool = match keycode {
                    winit::keyboard::KeyCode::Digit1 => Tool::Selection,
                    winit::keyboard::KeyCode::Digit2 => Tool::Line,
                    winit::keyboard::KeyCode::Digit3 => Tool::Rectangle,
                    winit::keyboard::KeyCode::Digit4 => Tool::Circle,
                    winit::keyboard::KeyCode::Digit5 => Tool::Ellipse,
                    _ => return false,
                };
                self.board.set_tool(tool);
                true
            }
            _ => false,
        }
    }

    /// Swaps in a new background reference image. A file that fails to read
    /// or decode is logged and ignored; the previous background stays.
    fn set_background(&mut self, path: &std::path::Path) {
        match BackgroundTexture::from_path(
            &self.gpu.device,
            &self.gpu.queue,
            &self.background_layout,
            path,
        ) {
            Ok(texture) => self.background = Some(texture),
            Err(err) => log::warn!("ignoring dropped file {}: {err:#}", path.display()),
        }
    }
}
