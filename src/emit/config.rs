//! Writer configuration.

/// Output conventions for a [`Writer`](super::Writer).
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Whether `{` and `}` adjust indentation automatically
    pub brace_indent: bool,
    /// Text emitted between items by [`Separator`](super::Separator)
    pub separator: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            brace_indent: true,
            separator: ", ".to_string(),
        }
    }
}

impl WriterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable brace-driven indentation
    pub fn with_brace_indent(mut self, enabled: bool) -> Self {
        self.brace_indent = enabled;
        self
    }

    /// Set the list separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
