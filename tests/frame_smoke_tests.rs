//! Headless egui passes over the frame layer: the shell pumps
//! viewport and load signals, and the surface only renders when the
//! window is visible and not minimized.

mod common;

use std::sync::{Arc, Mutex};

use common::{SharedStore, SpyHost};
use oriel::{
    EmbeddedSurface, LoadSignal, Settings, SizePx, ViewerShell,
};

fn raw_input() -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1280.0, 800.0),
        )),
        ..Default::default()
    }
}

/// Surface that records how often it renders and reports load
/// completion immediately.
#[derive(Clone, Default)]
struct CountingSurface {
    frames: Arc<Mutex<Vec<String>>>,
}

impl CountingSurface {
    fn rendered_paths(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }
}

impl EmbeddedSurface for CountingSurface {
    fn ui(&mut self, _ui: &mut egui::Ui, content_path: &str, load: &LoadSignal) {
        self.frames.lock().unwrap().push(content_path.to_string());
        load.notify();
    }
}

fn shell_with(surface: CountingSurface) -> ViewerShell {
    ViewerShell::with_parts(
        Settings::default(),
        Box::new(SharedStore::new()),
        Box::new(SpyHost::default()),
        Box::new(surface),
    )
}

#[test]
fn test_hidden_window_renders_nothing() {
    let surface = CountingSurface::default();
    let mut shell = shell_with(surface.clone());

    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));

    assert!(surface.rendered_paths().is_empty());
    // The real viewport was still fed through.
    assert_eq!(shell.manager().viewport(), SizePx::new(1280.0, 800.0));
}

#[test]
fn test_visible_window_renders_surface_and_finishes_loading() {
    let surface = CountingSurface::default();
    let mut shell = shell_with(surface.clone());
    shell.open("proj-42", Some("Dossier 42"));
    assert!(shell.manager().content_loading());

    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert_eq!(surface.rendered_paths(), vec!["/view/proj-42".to_string()]);

    // The surface signalled completion during the first frame; the
    // shell drains it at the start of the next one.
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert!(!shell.manager().content_loading());
}

#[test]
fn test_minimized_window_does_not_render_content() {
    let surface = CountingSurface::default();
    let mut shell = shell_with(surface.clone());
    shell.open("proj-42", None);
    shell.manager_mut().toggle_minimize();

    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert!(surface.rendered_paths().is_empty());

    // Un-minimizing re-requests the frame and reloads.
    shell.manager_mut().toggle_minimize();
    assert!(shell.manager().content_loading());
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert_eq!(surface.rendered_paths().len(), 1);
}

#[test]
fn test_close_stops_rendering() {
    let surface = CountingSurface::default();
    let mut shell = shell_with(surface.clone());
    shell.open("proj-42", None);

    let ctx = egui::Context::default();
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert_eq!(surface.rendered_paths().len(), 1);

    shell.close();
    let _ = ctx.run(raw_input(), |ctx| shell.ui(ctx));
    assert_eq!(surface.rendered_paths().len(), 1);
}
