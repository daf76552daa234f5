//! The application window: tool panel on top, canvas filling the rest.

use doodler_core::Session;

pub struct DoodleApp {
    session: Session,
    pen: crate::pen_tools::Pen,
}
impl DoodleApp {
    #[must_use]
    pub fn new(cc: &eframe::CreationContext<'_>, preferences: &crate::global::Preferences) -> Self {
        // Swatches and canvas are designed against a light panel.
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            session: preferences.new_session(),
            pen: crate::pen_tools::Pen::default(),
        }
    }
    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let origin = response.rect.min;

        let input = crate::pen_tools::CanvasInput::from_response(&response);
        self.pen.process(&mut self.session, origin, &input);

        crate::renderer::paint_session(&painter, origin, &self.session);
        if let Some(hover) = response.hover_pos() {
            crate::renderer::paint_cursor(&painter, hover, &self.session);
        }

        if self.pen.is_drawing() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::None);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}
impl eframe::App for DoodleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::tool_panel(ctx, &mut self.session);

        let background = crate::renderer::to_egui(self.session.background_color());
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| self.canvas(ui));
    }
}
