//! Light and dark palettes for trellis components.
//!
//! Components take a [`ThemeMode`] on every render and resolve their colours
//! from [`TrellisTheme::for_mode`]. The same theme can be handed to
//! `trellis_dom::ColorContext` so `Color::var("input.border")` style
//! references in host-built elements resolve too.

mod default;

pub use default::{InputColors, TableColors, TextColors, TrellisTheme};

/// Which palette to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}
