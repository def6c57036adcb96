#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    /// Share of the space left after fixed and auto siblings, by weight.
    Flex(u16),
    #[default]
    Auto,
}

impl Size {
    /// Flex weight, or `None` for sizes that do not take leftover space.
    pub fn weight(&self) -> Option<u16> {
        match self {
            Size::Fill => Some(1),
            Size::Flex(w) => Some((*w).max(1)),
            Size::Fixed(_) | Size::Auto => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
    Double,
}

impl Border {
    /// Cells taken on each side.
    pub const fn thickness(&self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }

    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right,
    /// horizontal, vertical.
    pub const fn glyphs(&self) -> Option<[char; 6]> {
        match self {
            Border::None => None,
            Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
            Border::Double => Some(['╔', '╗', '╚', '╝', '═', '║']),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Union of two styles; a flag set on either side stays set.
    pub const fn union(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
        }
    }
}
