use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// A dark/light palette pair. Both variants are registered with egui so the
/// global theme switch flips between them for free.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::harbor()
    }
}

impl Theme {
    pub fn harbor() -> Self {
        Theme { dark: Palette::harbor_dark(), light: Palette::harbor_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }

    /// Traffic-light color for a 0-100 match score.
    pub fn score_color(&self, ctx: &egui::Context, score: u8) -> Color32 {
        let p = self.palette(ctx);
        match score {
            80..=100 => p.green,
            50..=79 => p.yellow,
            _ => p.red,
        }
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    background_dim: Color32,
    surface: Color32,
    surface_raised: Color32,
    text: Color32,
    muted: Color32,
    accent: Color32,
    selection: Color32,
    red: Color32,
    yellow: Color32,
    green: Color32,
}

impl Palette {
    fn harbor_dark() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 34),
            background_dim: Color32::from_rgb(18, 20, 27),
            surface: Color32::from_rgb(32, 35, 46),
            surface_raised: Color32::from_rgb(44, 48, 62),
            text: Color32::from_rgb(222, 226, 235),
            muted: Color32::from_rgb(125, 136, 160),
            accent: Color32::from_rgb(112, 170, 250),
            selection: Color32::from_rgb(56, 68, 96),
            red: Color32::from_rgb(235, 105, 105),
            yellow: Color32::from_rgb(224, 195, 105),
            green: Color32::from_rgb(120, 205, 140),
        }
    }

    fn harbor_light() -> Self {
        Self {
            background: Color32::from_rgb(246, 247, 250),
            background_dim: Color32::from_rgb(233, 235, 241),
            surface: Color32::from_rgb(255, 255, 255),
            surface_raised: Color32::from_rgb(240, 242, 247),
            text: Color32::from_rgb(36, 41, 51),
            muted: Color32::from_rgb(120, 130, 150),
            accent: Color32::from_rgb(40, 110, 210),
            selection: Color32::from_rgb(205, 220, 245),
            red: Color32::from_rgb(195, 70, 70),
            yellow: Color32::from_rgb(170, 135, 35),
            green: Color32::from_rgb(55, 150, 85),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: &WidgetVisuals, bg: Color32, stroke: Color32| WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: palette.surface_raised,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.text, ..base.fg_stroke },
        ..*base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    &default.widgets.noninteractive,
                    palette.background,
                    palette.background_dim,
                ),
                inactive: widget(&default.widgets.inactive, palette.surface_raised, palette.surface),
                hovered: widget(&default.widgets.hovered, palette.selection, palette.accent),
                active: widget(&default.widgets.active, palette.selection, palette.accent),
                open: widget(&default.widgets.open, palette.surface, palette.accent),
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.text, ..default.selection.stroke },
            },
            hyperlink_color: palette.accent,
            faint_bg_color: palette.background_dim,
            extreme_bg_color: palette.background_dim,
            error_fg_color: palette.red,
            warn_fg_color: palette.yellow,
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.surface_raised, ..default.window_stroke },
            panel_fill: palette.background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
