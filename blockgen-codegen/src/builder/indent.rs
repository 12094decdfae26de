//! Indentation of the two generated file kinds.

/// Indentation unit of a generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// PSR-12: four spaces.
    #[default]
    Php,
    /// Smarty markup: two spaces.
    Smarty,
}

impl Indent {
    /// One level of indentation.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Php => "    ",
            Self::Smarty => "  ",
        }
    }

    pub fn width(&self) -> usize {
        self.unit().len()
    }
}
