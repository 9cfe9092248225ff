#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod state;
pub mod surface;
pub mod texture_manager;
pub mod tool;

pub use app::PaintApp;
pub use config::{EXPORT_FILE_NAME, PALETTE, PaintConfig};
pub use controller::StrokeController;
pub use error::{ExportError, ExportResult};
pub use input::{InputEvent, InputHandler};
pub use state::{BrushSettings, BrushSize, EditorState};
pub use surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Surface};
pub use tool::{CompositeMode, LineCap, StrokeStyle, Tool};
