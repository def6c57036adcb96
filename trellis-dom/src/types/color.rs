#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Named theme variable, resolved through a [`ColorContext`](super::ColorContext).
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Shift lightness of an oklch colour, clamped to `0.0..=1.0`.
    /// Other colour kinds are returned unchanged.
    pub fn lighten(self, amount: f32) -> Self {
        match self {
            Self::Oklch { l, c, h } => Self::Oklch {
                l: (l + amount).clamp(0.0, 1.0),
                c,
                h,
            },
            other => other,
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Self::Var(_) => Rgb::default(), // needs ColorContext to resolve
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_convert() {
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lighten_clamps() {
        assert_eq!(
            Color::oklch(0.9, 0.1, 20.0).lighten(0.5),
            Color::oklch(1.0, 0.1, 20.0)
        );
        assert_eq!(Color::rgb(1, 2, 3).darken(0.2), Color::rgb(1, 2, 3));
    }
}
