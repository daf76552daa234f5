use doodler_core::Color;

const GROW_FACTOR: f32 = 1.25;

/// If the contrast between two colors is too low, choose a stroke color to contrast both.
fn contrasting_stroke(
    background: impl Into<egui::Rgba>,
    foreground: impl Into<egui::Rgba>,
    contrast_target: f32,
) -> Option<egui::Rgba> {
    let background: egui::Rgba = background.into();
    let foreground: egui::Rgba = foreground.into();

    let back_intensity = background.intensity();
    let fore_intensity = foreground.intensity();

    // difference direction from fore -> back
    let diff_dir = (back_intensity - fore_intensity).signum();
    let abs_diff = (back_intensity - fore_intensity).abs();

    if abs_diff >= contrast_target {
        return None;
    }

    // Try, in order: push away from bg past fg, push away from fg past bg, invert fg, invert bg.
    // First that's a displayable intensity wins.
    let intensity = [
        fore_intensity - diff_dir * contrast_target,
        back_intensity + diff_dir * contrast_target,
        1.0 - fore_intensity,
        1.0 - back_intensity,
    ]
    .into_iter()
    .find(|i| (0.0..=1.0f32).contains(i))
    .unwrap_or_else(|| (1.0 - fore_intensity).clamp(0.0, 1.0));

    // Intensity isn't perceptual, squaring gets it closer.
    Some(egui::Rgba::from_luminance_alpha(intensity * intensity, 1.0))
}

/// Round swatch that reports clicks, and grows when hovered or selected.
#[derive(Copy, Clone)]
pub struct ColorSwatch<'a> {
    pub color: Color,
    /// Display as selected, larger and ringed.
    pub selected: bool,
    /// Accessible name of the color.
    pub name: &'a str,
}
impl egui::Widget for ColorSwatch<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let enabled = ui.is_enabled();
        let size = ui.style().spacing.interact_size.y * 1.5;
        let (rect, this) = ui.allocate_exact_size(
            egui::Vec2::splat(size),
            egui::Sense {
                click: enabled,
                drag: false,
                focusable: enabled,
            },
        );
        this.widget_info(|| egui::WidgetInfo {
            typ: egui::WidgetType::Button,
            enabled,
            label: Some(self.name.to_owned()),
            current_text_value: None,
            prev_text_value: None,
            selected: Some(self.selected),
            value: None,
            text_selection: None,
        });

        let fill = crate::renderer::to_egui(self.color);
        let highlighted = this.hovered() || this.has_focus();
        let outline: egui::Color32 = if self.selected || highlighted {
            // Maximally contrasting ring.
            let fill: egui::Rgba = fill.into();
            egui::Rgba::from_gray(1.0 - fill.intensity()).into()
        } else {
            const MIN_CONTRAST: f32 = 0.3;
            // Only outline if it'd vanish into the panel otherwise.
            contrasting_stroke(ui.style().visuals.panel_fill, fill, MIN_CONTRAST)
                .map_or(ui.style().visuals.panel_fill, Into::into)
        };

        let expansion = if self.selected || highlighted {
            size * (GROW_FACTOR - 1.0) / 2.0
        } else {
            0.0
        };
        let expansion =
            ui.ctx()
                .animate_value_with_time(this.id, expansion, ui.style().animation_time);
        let radius = size / 2.0 + expansion;

        let painter = ui.painter();
        painter.circle(
            rect.center(),
            radius,
            fill,
            egui::Stroke {
                color: outline,
                width: if self.selected { 2.5 } else { 1.0 },
            },
        );

        this
    }
}
