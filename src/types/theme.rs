use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::DARK,
            Theme::Light => ThemePalette::LIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: Color32,
    pub foreground: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub list_background: Color32,
    pub entry_background: Color32,
}

impl ThemePalette {
    pub const DARK: ThemePalette = ThemePalette {
        background: Color32::from_rgb(0x1e, 0x1e, 0x1e),
        foreground: Color32::from_rgb(0xff, 0xff, 0xff),
        button: Color32::from_rgb(0x40, 0x40, 0x40),
        button_hover: Color32::from_rgb(0x50, 0x50, 0x50),
        list_background: Color32::from_rgb(0x3b, 0x3b, 0x3b),
        entry_background: Color32::from_rgb(0x3b, 0x3b, 0x3b),
    };

    pub const LIGHT: ThemePalette = ThemePalette {
        background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        foreground: Color32::from_rgb(0x00, 0x00, 0x00),
        button: Color32::from_rgb(0xd3, 0xd3, 0xd3),
        button_hover: Color32::from_rgb(0xe0, 0xe0, 0xe0),
        list_background: Color32::from_rgb(0xff, 0xff, 0xff),
        entry_background: Color32::from_rgb(0xff, 0xff, 0xff),
    };

    /// Resolved colors for one kind of control.
    pub fn colors_for(&self, kind: WidgetKind) -> WidgetColors {
        let (background, hover) = match kind {
            WidgetKind::Window | WidgetKind::Label => (self.background, self.background),
            WidgetKind::Button => (self.button, self.button_hover),
            WidgetKind::List => (self.list_background, self.list_background),
            WidgetKind::Entry => (self.entry_background, self.entry_background),
        };
        WidgetColors {
            background,
            hover,
            foreground: self.foreground,
        }
    }
}

/// The kinds of control the main window is built from. Each gets its own
/// palette treatment in `ui::styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Window,
    Label,
    Button,
    List,
    Entry,
}

impl WidgetKind {
    #[cfg(test)]
    pub fn all() -> &'static [WidgetKind] {
        &[
            WidgetKind::Window,
            WidgetKind::Label,
            WidgetKind::Button,
            WidgetKind::List,
            WidgetKind::Entry,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetColors {
    pub background: Color32,
    pub hover: Color32,
    pub foreground: Color32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_dark_colors() {
        let theme = Theme::Dark.toggled().toggled();
        assert_eq!(theme, Theme::Dark);
        for kind in WidgetKind::all() {
            assert_eq!(
                theme.palette().colors_for(*kind),
                ThemePalette::DARK.colors_for(*kind)
            );
        }
    }

    #[test]
    fn test_button_hover_is_lighter() {
        for palette in [ThemePalette::DARK, ThemePalette::LIGHT] {
            let colors = palette.colors_for(WidgetKind::Button);
            assert!(colors.hover.r() > colors.background.r());
        }
    }

    #[test]
    fn test_list_and_entry_have_distinct_background() {
        let palette = Theme::Light.palette();
        assert_ne!(
            palette.colors_for(WidgetKind::List).background,
            palette.colors_for(WidgetKind::Window).background
        );
        assert_eq!(
            palette.colors_for(WidgetKind::Entry).background,
            Color32::WHITE
        );
    }
}
