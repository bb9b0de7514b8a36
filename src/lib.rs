mod app;
mod app_state;
mod board;
mod canvas;
mod element;
mod event_handler;
mod hit;
mod math;
mod renderer;
mod rough;
mod state;
mod texture;
mod ui;
mod update_logic;
mod vertex;

// Re-export the main public interface
pub use app::run;
pub use board::{BOARD_SIZE, Board, Mode};
pub use element::{Element, ShapeKind, Tool};
pub use vertex::Vertex;

// Re-export for WASM compatibility
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn start() {
    run().await;
}
