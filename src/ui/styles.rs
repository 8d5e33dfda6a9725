use crate::types::theme::{Theme, ThemePalette, WidgetColors, WidgetKind};
use egui::{Color32, Stroke, Visuals};

pub const COLOR_ERROR: Color32 = Color32::from_rgb(230, 80, 80);

pub const BUTTON_MIN_SIZE: egui::Vec2 = egui::vec2(140.0, 28.0);

pub fn init_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(18.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Name("Subheading".into()),
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
    );
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.item_spacing = egui::vec2(8.0, 10.0);

    ctx.set_style(style);
}

/// Base visuals for a theme: window background and text color.
pub fn theme_visuals(theme: Theme) -> Visuals {
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };
    apply_palette(&mut visuals, WidgetKind::Window, &theme.palette());
    visuals
}

/// Applies the palette entry for one kind of control to `visuals`.
pub fn apply_palette(visuals: &mut Visuals, kind: WidgetKind, palette: &ThemePalette) {
    let colors = palette.colors_for(kind);
    match kind {
        WidgetKind::Window => apply_window(visuals, colors),
        WidgetKind::Label => apply_label(visuals, colors),
        WidgetKind::Button => apply_button(visuals, colors),
        WidgetKind::List => apply_list(visuals, colors),
        WidgetKind::Entry => apply_entry(visuals, colors),
    }
}

fn apply_window(visuals: &mut Visuals, colors: WidgetColors) {
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.background;
    visuals.override_text_color = Some(colors.foreground);
}

fn apply_label(visuals: &mut Visuals, colors: WidgetColors) {
    visuals.override_text_color = Some(colors.foreground);
}

// Flat buttons: no border, lighter fill while hovered or pressed
fn apply_button(visuals: &mut Visuals, colors: WidgetColors) {
    let fg = Stroke::new(1.0, colors.foreground);

    visuals.widgets.inactive.weak_bg_fill = colors.background;
    visuals.widgets.inactive.bg_fill = colors.background;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = fg;

    visuals.widgets.hovered.weak_bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::NONE;
    visuals.widgets.hovered.fg_stroke = fg;
    visuals.widgets.hovered.expansion = 0.0;

    visuals.widgets.active.weak_bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.hover;
    visuals.widgets.active.bg_stroke = Stroke::NONE;
    visuals.widgets.active.fg_stroke = fg;
    visuals.widgets.active.expansion = 0.0;

    visuals.override_text_color = Some(colors.foreground);
}

fn apply_list(visuals: &mut Visuals, colors: WidgetColors) {
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.background;
    visuals.override_text_color = Some(colors.foreground);
}

fn apply_entry(visuals: &mut Visuals, colors: WidgetColors) {
    visuals.extreme_bg_color = colors.background;
    visuals.widgets.inactive.bg_fill = colors.background;
    visuals.widgets.hovered.bg_fill = colors.background;
    visuals.widgets.active.bg_fill = colors.background;
    visuals.override_text_color = Some(colors.foreground);
}

/// Frame drawn behind the file list.
pub fn list_frame(palette: &ThemePalette) -> egui::Frame {
    egui::Frame::NONE
        .fill(palette.colors_for(WidgetKind::List).background)
        .inner_margin(egui::Margin::same(6))
        .corner_radius(4.0)
}

pub fn themed_label(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.scope(|ui| {
        apply_palette(ui.visuals_mut(), WidgetKind::Label, palette);
        ui.label(text)
    })
    .inner
}

pub fn themed_button(ui: &mut egui::Ui, palette: &ThemePalette, text: &str) -> egui::Response {
    ui.scope(|ui| {
        apply_palette(ui.visuals_mut(), WidgetKind::Button, palette);
        ui.add(egui::Button::new(text).min_size(BUTTON_MIN_SIZE))
    })
    .inner
}

pub trait RichTextExt {
    fn subheading(self) -> Self;
}

impl RichTextExt for egui::RichText {
    fn subheading(self) -> Self {
        self.text_style(egui::TextStyle::Name("Subheading".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visuals_for(theme: Theme) -> Vec<Visuals> {
        WidgetKind::all()
            .iter()
            .map(|kind| {
                let mut visuals = theme_visuals(theme);
                apply_palette(&mut visuals, *kind, &theme.palette());
                visuals
            })
            .collect()
    }

    #[test]
    fn test_toggle_twice_restores_every_widget() {
        let original = visuals_for(Theme::Dark);
        let round_trip = visuals_for(Theme::Dark.toggled().toggled());
        assert_eq!(original, round_trip);
        assert_ne!(original, visuals_for(Theme::Light));
    }

    #[test]
    fn test_button_hover_uses_hover_shade() {
        let mut visuals = Visuals::dark();
        apply_palette(&mut visuals, WidgetKind::Button, &ThemePalette::DARK);
        assert_eq!(visuals.widgets.inactive.weak_bg_fill, ThemePalette::DARK.button);
        assert_eq!(
            visuals.widgets.hovered.weak_bg_fill,
            ThemePalette::DARK.button_hover
        );
    }

    #[test]
    fn test_window_colors_follow_theme() {
        let visuals = theme_visuals(Theme::Light);
        assert_eq!(visuals.panel_fill, ThemePalette::LIGHT.background);
        assert_eq!(visuals.override_text_color, Some(Color32::BLACK));
    }

    #[test]
    fn test_label_takes_palette_foreground() {
        let mut visuals = Visuals::light();
        apply_palette(&mut visuals, WidgetKind::Label, &ThemePalette::DARK);
        assert_eq!(visuals.override_text_color, Some(Color32::WHITE));
    }

    #[test]
    fn test_entry_background() {
        let mut visuals = Visuals::dark();
        apply_palette(&mut visuals, WidgetKind::Entry, &ThemePalette::DARK);
        assert_eq!(visuals.extreme_bg_color, ThemePalette::DARK.entry_background);
    }
}
