mod canvas_panel;
mod toolbar;

pub use canvas_panel::{CANVAS_BACKGROUND, paint_canvas};
pub use toolbar::{ToolbarAction, toolbar};
