//! Emission options

/// Indentation of the generated Java source
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmitOptions {
    /// Spaces per nesting level; ignored when indenting with tabs
    pub tab_size: usize,
    /// Indent with spaces instead of one tab per level
    pub insert_spaces: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
        }
    }
}

impl EmitOptions {
    /// Leading whitespace for a line `level` steps into the class body
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}
