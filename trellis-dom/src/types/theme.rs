use super::{Color, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Theme that resolves nothing; every variable falls back to black.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Resolves theme variables and converts colours for the renderer.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

/// Guards against themes whose variables refer to each other in a cycle.
const MAX_VAR_DEPTH: u8 = 8;

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete Color (no `Var` variants).
    pub fn resolve(&self, color: &Color) -> Color {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: u8) -> Color {
        match color {
            Color::Var(name) if depth < MAX_VAR_DEPTH => match self.theme.resolve(name) {
                Some(found) => self.resolve_depth(found, depth + 1),
                None => {
                    log::trace!("unresolved color variable '{name}'");
                    Color::rgb(0, 0, 0)
                }
            },
            Color::Var(name) => {
                log::warn!("color variable '{name}' exceeds resolution depth");
                Color::rgb(0, 0, 0)
            }
            concrete => concrete.clone(),
        }
    }

    pub fn to_rgb(&self, color: &Color) -> Rgb {
        self.resolve(color).to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        fg: Color,
        alias: Color,
        looped: Color,
    }

    impl Theme for Pair {
        fn resolve(&self, name: &str) -> Option<&Color> {
            match name {
                "fg" => Some(&self.fg),
                "alias" => Some(&self.alias),
                "loop" => Some(&self.looped),
                _ => None,
            }
        }
    }

    #[test]
    fn resolves_nested_variables() {
        let theme = Pair {
            fg: Color::rgb(10, 20, 30),
            alias: Color::var("fg"),
            looped: Color::var("loop"),
        };
        let cx = ColorContext::new(&theme);

        assert_eq!(cx.resolve(&Color::var("alias")), Color::rgb(10, 20, 30));
        assert_eq!(cx.resolve(&Color::var("missing")), Color::rgb(0, 0, 0));
        assert_eq!(cx.resolve(&Color::var("loop")), Color::rgb(0, 0, 0));
    }
}
