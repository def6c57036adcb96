use trellis_dom::{Color, Theme};

use super::ThemeMode;

#[derive(Debug, Clone)]
pub struct InputColors {
    pub background: Color,
    pub filled: Color,
    pub border: Color,
    pub border_focus: Color,
    pub placeholder: Color,
}

#[derive(Debug, Clone)]
pub struct TableColors {
    pub header: Color,
    pub row: Color,
    pub row_selected: Color,
    pub rule: Color,
}

#[derive(Debug, Clone)]
pub struct TextColors {
    pub primary: Color,
    pub muted: Color,
    pub disabled: Color,
}

/// Named colours for one theme mode.
#[derive(Debug, Clone)]
pub struct TrellisTheme {
    pub mode: ThemeMode,

    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub accent: Color,

    pub success: Color,
    pub error: Color,

    pub input: InputColors,
    pub table: TableColors,
    pub text: TextColors,
}

impl TrellisTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Near-white surfaces with a blue accent.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::oklch(0.98, 0.0, 0.0),
            surface: Color::oklch(1.0, 0.0, 0.0),
            border: Color::oklch(0.8, 0.01, 250.0),
            accent: Color::oklch(0.55, 0.17, 255.0),

            success: Color::oklch(0.55, 0.14, 145.0),
            error: Color::oklch(0.55, 0.2, 25.0),

            input: InputColors {
                background: Color::oklch(1.0, 0.0, 0.0),
                filled: Color::oklch(0.93, 0.01, 250.0),
                border: Color::oklch(0.75, 0.01, 250.0),
                border_focus: Color::oklch(0.55, 0.17, 255.0),
                placeholder: Color::oklch(0.6, 0.01, 250.0),
            },

            table: TableColors {
                header: Color::oklch(0.94, 0.01, 250.0),
                row: Color::oklch(1.0, 0.0, 0.0),
                row_selected: Color::oklch(0.9, 0.05, 255.0),
                rule: Color::oklch(0.85, 0.01, 250.0),
            },

            text: TextColors {
                primary: Color::oklch(0.2, 0.01, 250.0),
                muted: Color::oklch(0.5, 0.01, 250.0),
                disabled: Color::oklch(0.7, 0.0, 0.0),
            },
        }
    }

    /// Dark slate surfaces with a lighter blue accent.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::oklch(0.16, 0.01, 255.0),
            surface: Color::oklch(0.2, 0.015, 255.0),
            border: Color::oklch(0.35, 0.02, 255.0),
            accent: Color::oklch(0.7, 0.14, 255.0),

            success: Color::oklch(0.7, 0.15, 145.0),
            error: Color::oklch(0.68, 0.19, 25.0),

            input: InputColors {
                background: Color::oklch(0.18, 0.01, 255.0),
                filled: Color::oklch(0.26, 0.02, 255.0),
                border: Color::oklch(0.4, 0.02, 255.0),
                border_focus: Color::oklch(0.7, 0.14, 255.0),
                placeholder: Color::oklch(0.55, 0.02, 255.0),
            },

            table: TableColors {
                header: Color::oklch(0.25, 0.02, 255.0),
                row: Color::oklch(0.2, 0.015, 255.0),
                row_selected: Color::oklch(0.33, 0.06, 255.0),
                rule: Color::oklch(0.3, 0.02, 255.0),
            },

            text: TextColors {
                primary: Color::oklch(0.92, 0.0, 0.0),
                muted: Color::oklch(0.65, 0.02, 255.0),
                disabled: Color::oklch(0.42, 0.01, 255.0),
            },
        }
    }
}

impl Default for TrellisTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme for TrellisTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        let color = match name {
            "background" => &self.background,
            "surface" => &self.surface,
            "border" => &self.border,
            "accent" => &self.accent,
            "success" => &self.success,
            "error" => &self.error,

            "input.background" => &self.input.background,
            "input.filled" => &self.input.filled,
            "input.border" => &self.input.border,
            "input.border_focus" => &self.input.border_focus,
            "input.placeholder" => &self.input.placeholder,

            "table.header" => &self.table.header,
            "table.row" => &self.table.row,
            "table.row_selected" => &self.table.row_selected,
            "table.rule" => &self.table.rule,

            "text.primary" => &self.text.primary,
            "text.muted" => &self.text.muted,
            "text.disabled" => &self.text.disabled,
            _ => return None,
        };
        Some(color)
    }
}
