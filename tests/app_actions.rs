#![cfg(not(target_arch = "wasm32"))]

use eframe_sketch::panels::ToolbarAction;
use eframe_sketch::{BrushSize, InputEvent, PaintApp, PaintConfig, Tool};
use egui::{Color32, pos2};
use std::path::{Path, PathBuf};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eframe_sketch_app_{}_{}", name, std::process::id()))
}

fn app_in(dir: &Path) -> PaintApp {
    PaintApp::with_config(PaintConfig {
        output_dir: dir.to_path_buf(),
        ..Default::default()
    })
}

fn stroke(app: &mut PaintApp, from: egui::Pos2, to: egui::Pos2) -> bool {
    app.handle_input_events(&[
        InputEvent::PointerDown { pos: from },
        InputEvent::PointerMove { pos: to },
        InputEvent::PointerUp { pos: to },
    ])
}

#[test]
fn test_initial_state() {
    let app = PaintApp::default();
    assert_eq!(app.surface().size(), [800, 600]);
    assert!(app.surface().is_blank());
    assert_eq!(app.settings().tool(), Tool::Pencil);
    assert_eq!(app.settings().color(), Color32::BLACK);
    assert_eq!(app.settings().size().get(), 5);
    assert!(app.controller().state().is_idle());
    assert!(app.status().is_none());
}

#[test]
fn test_save_writes_png_file() {
    let dir = scratch_dir("save");
    let mut app = app_in(&dir);
    app.settings_mut().set_color(Color32::RED);
    app.settings_mut().set_size(10);
    assert!(stroke(&mut app, pos2(10.0, 10.0), pos2(100.0, 10.0)));

    app.apply_action(ToolbarAction::Save);
    let path = dir.join("paint-drawing.png");
    assert_eq!(app.status(), Some(format!("Saved {}", path.display()).as_str()));

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(&saved, app.surface().raster());
    assert_eq!(saved.get_pixel(50, 10).0, [255, 0, 0, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_clear_action_blanks_canvas() {
    let dir = scratch_dir("clear");
    let mut app = app_in(&dir);
    stroke(&mut app, pos2(50.0, 50.0), pos2(300.0, 200.0));
    assert!(!app.surface().is_blank());

    app.apply_action(ToolbarAction::Clear);
    assert!(app.surface().is_blank());
    assert!(app.status().is_none());
}

#[test]
fn test_clear_mid_stroke_keeps_drawing() {
    let mut app = PaintApp::default();
    app.handle_input_events(&[
        InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
        InputEvent::PointerMove { pos: pos2(60.0, 10.0) },
    ]);
    app.clear();
    assert!(app.controller().is_drawing());

    assert!(app.handle_input_events(&[InputEvent::PointerMove { pos: pos2(60.0, 60.0) }]));
    // Only the segment drawn after the clear is on the canvas.
    assert_eq!(app.surface().pixel(30, 10), Some([0, 0, 0, 0]));
    assert_eq!(app.surface().pixel(60, 40), Some([0, 0, 0, 255]));
}

#[test]
fn test_config_from_partial_json() {
    let config: PaintConfig = serde_json::from_str(
        r#"{ "default_tool": "eraser", "default_size": 42, "export_file_name": "sketch.png" }"#,
    )
    .unwrap();

    assert_eq!(config.default_tool, Tool::Eraser);
    assert_eq!(config.default_size, BrushSize::new(20));
    assert_eq!(config.export_file_name, "sketch.png");
    assert_eq!(config.canvas_width, 800);
    assert_eq!(config.palette.len(), 8);

    let app = PaintApp::with_config(config);
    assert_eq!(app.settings().tool(), Tool::Eraser);
    assert_eq!(app.settings().size().get(), 20);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PaintConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: PaintConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
