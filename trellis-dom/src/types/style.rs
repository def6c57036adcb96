use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Overlay `other` on top of this style. Colours and border set on
    /// `other` win; text attributes are combined.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.clone().or_else(|| self.background.clone()),
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            border: if other.border == Border::None {
                self.border
            } else {
                other.border
            },
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            text_style: self.text_style.union(other.text_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_colours_and_keeps_border() {
        let base = Style::new()
            .background(Color::rgb(1, 1, 1))
            .border(Border::Rounded)
            .bold();
        let focused = Style::new().border_color(Color::rgb(9, 9, 9)).underline();

        let merged = base.merge(&focused);
        assert_eq!(merged.background, Some(Color::rgb(1, 1, 1)));
        assert_eq!(merged.border, Border::Rounded);
        assert_eq!(merged.border_color, Some(Color::rgb(9, 9, 9)));
        assert!(merged.text_style.bold && merged.text_style.underline);
    }
}
