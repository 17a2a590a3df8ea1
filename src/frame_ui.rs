//! The window frame: title bar, resize handles, content area, and the
//! loading overlay.
//!
//! The frame owns no state of its own. Every frame it draws the
//! committed [`WindowState`](oriel_core::WindowState) and routes
//! pointer input into the manager's gesture API; egui's pointer
//! capture keeps a drag or resize tracking even when the pointer
//! leaves the handle, which is the global-listener contract the
//! gesture sessions expect. Mouse and touch arrive through the same
//! egui pointer stream, so [`pointer_sample`] is the single
//! coordinate-extraction point for both.

use oriel_config::Settings;
use oriel_core::{PointerSample, ResizeDirection, WindowManager};

use crate::surface::{EmbeddedSurface, LoadSignal};

const WINDOW_BG: egui::Color32 = egui::Color32::from_rgb(24, 26, 30);
const TITLE_BAR_BG: egui::Color32 = egui::Color32::from_rgb(38, 41, 48);
const TITLE_TEXT: egui::Color32 = egui::Color32::from_rgb(222, 224, 228);
const BORDER: egui::Color32 = egui::Color32::from_rgb(72, 76, 86);

/// Convert an egui pointer position into the core's device-neutral
/// sample.
pub fn pointer_sample(pos: egui::Pos2) -> PointerSample {
    PointerSample::new(pos.x, pos.y)
}

/// Stateless renderer for the viewer window frame.
#[derive(Debug, Default)]
pub struct FrameUi;

impl FrameUi {
    /// Draw the window (if visible) and feed input back into the
    /// manager.
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        manager: &mut WindowManager,
        settings: &Settings,
        surface: &mut dyn EmbeddedSurface,
        load: &LoadSignal,
    ) {
        let state = manager.state().clone();
        if !state.visible {
            return;
        }

        let bounds = state.rendered_bounds(manager.viewport());
        let rect = egui::Rect::from_min_size(
            egui::pos2(bounds.left, bounds.top),
            egui::vec2(bounds.width, bounds.height),
        );

        egui::Area::new(egui::Id::new("oriel_viewer_window"))
            .fixed_pos(rect.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let (outer_rect, _) =
                    ui.allocate_exact_size(rect.size(), egui::Sense::hover());

                ui.painter().rect_filled(outer_rect, 0.0, BORDER);
                ui.painter()
                    .rect_filled(outer_rect.shrink(1.0), 0.0, WINDOW_BG);

                // The minimized strip is all title bar.
                let title_height = if state.minimized {
                    outer_rect.height()
                } else {
                    settings.title_bar_height.min(outer_rect.height())
                };
                let title_rect = egui::Rect::from_min_max(
                    outer_rect.min,
                    egui::pos2(outer_rect.max.x, outer_rect.min.y + title_height),
                );
                self.title_bar(ui, title_rect, manager, &state);

                if !state.minimized {
                    let content_rect = egui::Rect::from_min_max(
                        egui::pos2(outer_rect.min.x + 1.0, title_rect.max.y),
                        outer_rect.max - egui::vec2(1.0, 1.0),
                    );
                    self.content(ui, content_rect, manager, surface, load);
                    self.loading_overlay(
                        ui,
                        content_rect,
                        manager.content_loading(),
                        settings.overlay_fade_secs,
                    );
                }

                if !state.minimized && !state.maximized {
                    self.resize_handles(ui, outer_rect, manager, settings);
                }
            });
    }

    fn title_bar(
        &self,
        ui: &mut egui::Ui,
        title_rect: egui::Rect,
        manager: &mut WindowManager,
        state: &oriel_core::WindowState,
    ) {
        ui.painter()
            .rect_filled(title_rect.shrink(1.0), 0.0, TITLE_BAR_BG);
        ui.painter().text(
            egui::pos2(title_rect.left() + 12.0, title_rect.center().y),
            egui::Align2::LEFT_CENTER,
            state.title(),
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
            TITLE_TEXT,
        );

        let mut response = ui.interact(
            title_rect,
            ui.id().with("title_bar"),
            egui::Sense::click_and_drag(),
        );
        if !state.maximized {
            response = response.on_hover_cursor(egui::CursorIcon::Grab);
        }
        if response.drag_started()
            && let Some(pos) = response.interact_pointer_pos()
        {
            manager.begin_drag(pointer_sample(pos));
        }
        if response.dragged()
            && let Some(pos) = ui.input(|i| i.pointer.interact_pos())
        {
            manager.pointer_moved(pointer_sample(pos));
        }
        if response.drag_stopped() {
            manager.pointer_released();
        }
        if response.double_clicked() {
            manager.toggle_maximize();
        }

        // Window controls, drawn after the drag region so they win the
        // pointer.
        let controls_rect = title_rect.shrink2(egui::vec2(8.0, 4.0));
        let mut controls_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(controls_rect)
                .layout(egui::Layout::right_to_left(egui::Align::Center)),
        );
        if Self::control_button(&mut controls_ui, "×").clicked() {
            manager.close();
        }
        let maximize_glyph = if state.maximized { "❐" } else { "□" };
        if Self::control_button(&mut controls_ui, maximize_glyph).clicked() {
            manager.toggle_maximize();
        }
        if Self::control_button(&mut controls_ui, "–").clicked() {
            manager.toggle_minimize();
        }
    }

    fn control_button(ui: &mut egui::Ui, glyph: &str) -> egui::Response {
        ui.add(
            egui::Button::new(egui::RichText::new(glyph).color(TITLE_TEXT).size(15.0))
                .fill(egui::Color32::TRANSPARENT)
                .frame(false),
        )
    }

    fn content(
        &self,
        ui: &mut egui::Ui,
        content_rect: egui::Rect,
        manager: &WindowManager,
        surface: &mut dyn EmbeddedSurface,
        load: &LoadSignal,
    ) {
        let Some(path) = manager.content_path() else {
            return;
        };
        let mut content_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(content_rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        // The hosted document must not see pointer input while a drag
        // or resize is tracking across it.
        if manager.gesture_active() {
            content_ui.disable();
        }
        surface.ui(&mut content_ui, &path, load);
    }

    fn loading_overlay(
        &self,
        ui: &mut egui::Ui,
        content_rect: egui::Rect,
        loading: bool,
        fade_secs: f32,
    ) {
        let opacity = ui.ctx().animate_bool_with_time(
            egui::Id::new("oriel_loading_overlay"),
            loading,
            fade_secs,
        );
        if opacity <= 0.0 {
            return;
        }
        let alpha = (opacity * 235.0) as u8;
        ui.painter()
            .rect_filled(content_rect, 0.0, egui::Color32::from_black_alpha(alpha));
        if loading {
            let spinner_rect =
                egui::Rect::from_center_size(content_rect.center(), egui::vec2(28.0, 28.0));
            ui.put(spinner_rect, egui::Spinner::new().size(28.0));
        }
    }

    fn resize_handles(
        &self,
        ui: &mut egui::Ui,
        outer_rect: egui::Rect,
        manager: &mut WindowManager,
        settings: &Settings,
    ) {
        let thickness = settings.resize_handle_thickness;
        for direction in ResizeDirection::ALL {
            let response = ui
                .interact(
                    handle_rect(outer_rect, direction, thickness),
                    ui.id().with(("resize_handle", direction)),
                    egui::Sense::drag(),
                )
                .on_hover_cursor(cursor_for(direction));
            if response.drag_started()
                && let Some(pos) = response.interact_pointer_pos()
            {
                manager.begin_resize(direction, pointer_sample(pos));
            }
            if response.dragged()
                && let Some(pos) = ui.input(|i| i.pointer.interact_pos())
            {
                manager.pointer_moved(pointer_sample(pos));
            }
            if response.drag_stopped() {
                manager.pointer_released();
            }
        }
    }
}

/// Hit rect for an edge or corner handle. Edges leave the corners to
/// the corner handles.
fn handle_rect(outer: egui::Rect, direction: ResizeDirection, t: f32) -> egui::Rect {
    let min = outer.min;
    let max = outer.max;
    match direction {
        ResizeDirection::North => egui::Rect::from_min_max(
            egui::pos2(min.x + t, min.y),
            egui::pos2(max.x - t, min.y + t),
        ),
        ResizeDirection::South => egui::Rect::from_min_max(
            egui::pos2(min.x + t, max.y - t),
            egui::pos2(max.x - t, max.y),
        ),
        ResizeDirection::East => egui::Rect::from_min_max(
            egui::pos2(max.x - t, min.y + t),
            egui::pos2(max.x, max.y - t),
        ),
        ResizeDirection::West => egui::Rect::from_min_max(
            egui::pos2(min.x, min.y + t),
            egui::pos2(min.x + t, max.y - t),
        ),
        ResizeDirection::NorthWest => {
            egui::Rect::from_min_max(min, min + egui::vec2(t, t))
        }
        ResizeDirection::NorthEast => egui::Rect::from_min_max(
            egui::pos2(max.x - t, min.y),
            egui::pos2(max.x, min.y + t),
        ),
        ResizeDirection::SouthWest => egui::Rect::from_min_max(
            egui::pos2(min.x, max.y - t),
            egui::pos2(min.x + t, max.y),
        ),
        ResizeDirection::SouthEast => {
            egui::Rect::from_min_max(max - egui::vec2(t, t), max)
        }
    }
}

fn cursor_for(direction: ResizeDirection) -> egui::CursorIcon {
    match direction {
        ResizeDirection::North => egui::CursorIcon::ResizeNorth,
        ResizeDirection::South => egui::CursorIcon::ResizeSouth,
        ResizeDirection::East => egui::CursorIcon::ResizeEast,
        ResizeDirection::West => egui::CursorIcon::ResizeWest,
        ResizeDirection::NorthEast => egui::CursorIcon::ResizeNorthEast,
        ResizeDirection::NorthWest => egui::CursorIcon::ResizeNorthWest,
        ResizeDirection::SouthEast => egui::CursorIcon::ResizeSouthEast,
        ResizeDirection::SouthWest => egui::CursorIcon::ResizeSouthWest,
    }
}
