mod color_palette;

use color_palette::ColorSwatch;
use doodler_core::{
    state::{BackgroundSwatch, BrushSwatch},
    BrushSize, Session,
};
use strum::IntoEnumIterator;

const CLEAR_ICON: &str = "🗑";
const SAVE_ICON: &str = "💾";

/// What the user asked for from the action buttons this frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    ClearUnsaved,
    ClearAll,
    SaveAll,
}
impl Action {
    /// Perform the action on the session.
    pub fn apply(self, session: &mut Session) {
        log::info!("{self:?}");
        match self {
            Self::ClearUnsaved => session.clear_unsaved(),
            Self::ClearAll => session.clear_all(),
            Self::SaveAll => session.save_all(),
        }
    }
    /// Would this change anything?
    #[must_use]
    pub fn is_enabled(self, session: &Session) -> bool {
        let unsaved = !session.unsaved_strokes().is_empty();
        match self {
            Self::ClearUnsaved | Self::SaveAll => unsaved,
            Self::ClearAll => unsaved || !session.saved_strokes().is_empty(),
        }
    }
}

/// Top bar with brush, size, background, and action controls. Changes apply to `session` directly.
pub fn tool_panel(ctx: &egui::Context, session: &mut Session) {
    egui::TopBottomPanel::top("tool-panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Drawing Tools").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Brush Color");
                brush_swatches(ui, session);
            });
            ui.separator();
            ui.vertical(|ui| {
                brush_size(ui, session);
            });
        });
        ui.separator();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Background Color");
                background_swatches(ui, session);
            });
            ui.separator();
            action_buttons(ui, session);
        });

        ui.label(
            egui::RichText::new(format!(
                "{} saved, {} unsaved",
                session.saved_strokes().len(),
                session.unsaved_strokes().len()
            ))
            .weak(),
        );
        ui.add_space(2.0);
    });
}

fn brush_swatches(ui: &mut egui::Ui, session: &mut Session) {
    ui.horizontal(|ui| {
        let current = BrushSwatch::from_color(session.brush().color);
        for swatch in BrushSwatch::iter() {
            let color = swatch.color();
            let response = ui
                .add(ColorSwatch {
                    color,
                    selected: current == Some(swatch),
                    name: swatch.as_ref(),
                })
                .on_hover_text(swatch.as_ref());
            if response.clicked() {
                session.set_brush_color(color);
            }
        }
    });
}

fn background_swatches(ui: &mut egui::Ui, session: &mut Session) {
    ui.horizontal(|ui| {
        let current = BackgroundSwatch::from_color(session.background_color());
        for swatch in BackgroundSwatch::iter() {
            let color = swatch.color();
            let response = ui
                .add(ColorSwatch {
                    color,
                    selected: current == Some(swatch),
                    name: swatch.as_ref(),
                })
                .on_hover_text(swatch.as_ref());
            if response.clicked() {
                session.set_background_color(color);
            }
        }
    });
}

fn brush_size(ui: &mut egui::Ui, session: &mut Session) {
    let size = session.brush().size;
    ui.label(format!("Brush Size: {size}"));

    let mut value = size.get();
    let response = ui.add(
        egui::Slider::new(&mut value, BrushSize::RANGE)
            .show_value(false)
            .clamp_to_range(true),
    );
    if response.changed() {
        session.set_brush_size(BrushSize::clamped(value));
    }
}

fn action_buttons(ui: &mut egui::Ui, session: &mut Session) {
    let buttons = [
        (
            Action::ClearUnsaved,
            format!("{CLEAR_ICON} Clear"),
            "Discard strokes drawn since the last save.",
        ),
        (
            Action::ClearAll,
            format!("{CLEAR_ICON} Clear All"),
            "Discard every stroke, saved or not.",
        ),
        (
            Action::SaveAll,
            format!("{SAVE_ICON} Save"),
            "Keep the current strokes safe from Clear.",
        ),
    ];
    for (action, text, hover) in buttons {
        if ui
            .add_enabled(action.is_enabled(session), egui::Button::new(text))
            .on_hover_text(hover)
            .clicked()
        {
            action.apply(session);
        }
    }
}
