//! Style tokens.
//!
//! Variants and sizes are closed enums indexing into constant tables. A
//! render resolves the tables once against the active [`TrellisTheme`] into
//! an [`InputTokens`] or [`TableTokens`] value and reads styles from that.

use trellis_dom::{Border, Color, Edges, Style};

use crate::theme::{ThemeMode, TrellisTheme};

/// Visual treatment of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Outlined,
    Filled,
    Ghost,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Outlined => "outlined",
            Variant::Filled => "filled",
            Variant::Ghost => "ghost",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl FieldSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSize::Sm => "sm",
            FieldSize::Md => "md",
            FieldSize::Lg => "lg",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    Surface,
    Filled,
    Transparent,
}

#[derive(Debug, Clone, Copy)]
struct VariantLook {
    border: Border,
    fill: Fill,
    underline_focus: bool,
}

#[derive(Debug, Clone, Copy)]
struct SizeMetrics {
    padding_x: u16,
    width: u16,
    bold_label: bool,
}

// Indexed by `Variant as usize`.
const VARIANTS: [VariantLook; 3] = [
    VariantLook {
        border: Border::Rounded,
        fill: Fill::Surface,
        underline_focus: false,
    },
    VariantLook {
        border: Border::None,
        fill: Fill::Filled,
        underline_focus: false,
    },
    VariantLook {
        border: Border::None,
        fill: Fill::Transparent,
        underline_focus: true,
    },
];

// Indexed by `FieldSize as usize`.
const SIZES: [SizeMetrics; 3] = [
    SizeMetrics {
        padding_x: 0,
        width: 24,
        bold_label: false,
    },
    SizeMetrics {
        padding_x: 1,
        width: 32,
        bold_label: false,
    },
    SizeMetrics {
        padding_x: 2,
        width: 40,
        bold_label: true,
    },
];

/// Resolved styles for one input field render.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTokens {
    /// Box around the control and its affordances.
    pub frame: Style,
    pub frame_invalid: Style,
    pub control: Style,
    pub control_focused: Style,
    pub control_disabled: Style,
    pub label: Style,
    pub helper: Style,
    pub error: Style,
    pub affordance: Style,
    pub affordance_focused: Style,
    pub padding: Edges,
    /// Outer width of the frame in cells.
    pub width: u16,
}

impl InputTokens {
    pub fn resolve(variant: Variant, size: FieldSize, theme: &TrellisTheme) -> Self {
        let look = VARIANTS[variant.index()];
        let dims = SIZES[size.index()];

        let mut frame = Style::new().border(look.border);
        if look.border != Border::None {
            frame = frame.border_color(theme.input.border.clone());
        }
        frame = match look.fill {
            Fill::Surface => frame.background(theme.input.background.clone()),
            Fill::Filled => frame.background(theme.input.filled.clone()),
            Fill::Transparent => frame,
        };

        let frame_invalid = if look.border == Border::None {
            frame.clone().foreground(theme.error.clone())
        } else {
            frame.clone().border_color(theme.error.clone())
        };

        let control = Style::new().foreground(theme.text.primary.clone());
        let mut control_focused = Style::new().foreground(theme.input.border_focus.clone());
        if look.underline_focus {
            control_focused = control_focused.underline();
        }
        if look.fill == Fill::Filled {
            let filled = theme.input.filled.clone();
            control_focused = control_focused.background(match theme.mode {
                ThemeMode::Light => filled.darken(0.04),
                ThemeMode::Dark => filled.lighten(0.04),
            });
        }

        let mut label = Style::new().foreground(theme.text.primary.clone());
        if dims.bold_label {
            label = label.bold();
        }

        Self {
            frame,
            frame_invalid,
            control,
            control_focused,
            control_disabled: Style::new().foreground(theme.text.disabled.clone()).dim(),
            label,
            helper: Style::new().foreground(theme.text.muted.clone()),
            error: Style::new().foreground(theme.error.clone()),
            affordance: Style::new().foreground(theme.text.muted.clone()),
            affordance_focused: Style::new().foreground(theme.accent.clone()).bold(),
            padding: Edges::horizontal(dims.padding_x),
            width: dims.width,
        }
    }
}

/// Resolved styles for one table render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableTokens {
    pub table: Style,
    pub header: Style,
    pub header_focused: Style,
    pub row: Style,
    pub row_selected: Style,
    pub checkbox_focused: Style,
    pub placeholder: Style,
    pub sort_indicator: Color,
}

impl TableTokens {
    pub fn resolve(theme: &TrellisTheme) -> Self {
        Self {
            table: Style::new()
                .border(Border::Single)
                .border_color(theme.table.rule.clone())
                .background(theme.table.row.clone()),
            header: Style::new()
                .background(theme.table.header.clone())
                .foreground(theme.text.primary.clone())
                .bold(),
            header_focused: Style::new().foreground(theme.accent.clone()).underline(),
            row: Style::new()
                .background(theme.table.row.clone())
                .foreground(theme.text.primary.clone()),
            row_selected: Style::new()
                .background(theme.table.row_selected.clone())
                .foreground(theme.text.primary.clone()),
            checkbox_focused: Style::new().foreground(theme.accent.clone()).bold(),
            placeholder: Style::new().foreground(theme.text.muted.clone()).italic(),
            sort_indicator: theme.accent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlined_draws_a_border_others_do_not() {
        let theme = TrellisTheme::light();
        let outlined = InputTokens::resolve(Variant::Outlined, FieldSize::Md, &theme);
        let filled = InputTokens::resolve(Variant::Filled, FieldSize::Md, &theme);
        let ghost = InputTokens::resolve(Variant::Ghost, FieldSize::Md, &theme);

        assert_eq!(outlined.frame.border, Border::Rounded);
        assert_eq!(filled.frame.border, Border::None);
        assert_eq!(filled.frame.background, Some(theme.input.filled.clone()));
        assert_eq!(ghost.frame.background, None);
        assert!(ghost.control_focused.text_style.underline);
    }

    #[test]
    fn sizes_grow_width_and_padding() {
        let theme = TrellisTheme::for_mode(ThemeMode::Dark);
        let sm = InputTokens::resolve(Variant::Outlined, FieldSize::Sm, &theme);
        let lg = InputTokens::resolve(Variant::Outlined, FieldSize::Lg, &theme);

        assert!(sm.width < lg.width);
        assert!(sm.padding.left < lg.padding.left);
        assert!(lg.label.text_style.bold);
        assert!(!sm.label.text_style.bold);
    }

    #[test]
    fn invalid_frame_uses_error_colour() {
        let theme = TrellisTheme::light();
        let outlined = InputTokens::resolve(Variant::Outlined, FieldSize::Md, &theme);
        assert_eq!(outlined.frame_invalid.border_color, Some(theme.error.clone()));

        let ghost = InputTokens::resolve(Variant::Ghost, FieldSize::Md, &theme);
        assert_eq!(ghost.frame_invalid.foreground, Some(theme.error));
    }
}
