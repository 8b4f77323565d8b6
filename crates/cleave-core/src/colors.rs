//! ANSI color codes for terminal output.

/// Semantic palette for transition dumps and traces.
///
/// Standard 16-color codes only, so output reads on light and dark themes.
/// `OFF` yields empty strings, letting formatting code interpolate colors
/// unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Guards (code point sets).
    pub guard: &'static str,
    /// Transition names and target sets.
    pub target: &'static str,
    /// Arrows, indices, trace event tags.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        guard: "\x1b[34m",
        target: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        guard: "",
        target: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
