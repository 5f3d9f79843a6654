//! Indentation configuration.

/// Fixed-width indentation unit, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 4-space indentation used for both XML and Java output.
    pub const FOUR_SPACES: Self = Self::spaces(4);

    /// `width` spaces per level.
    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Prefix for `depth` levels.
    pub fn prefix(&self, depth: usize) -> String {
        " ".repeat(self.width * depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}
