//! Output writer with indentation tracking
//!
//! Holds the per-pass emission state: the text buffer, indentation depth, the namespace being
//! emitted, and the generic scope stacks.

use std::fmt;

use super::config::WriterConfig;
use crate::generics::{GenericArgStack, GenericParamStack};

/// Marker that ends a [`Writer::write_code`] call.
pub const CODE_ESCAPE: char = '`';

/// Writer that tracks indentation and generic scopes while building output
///
/// One writer serves exactly one emission pass and is discarded with [`Writer::finish`].
#[derive(Debug)]
pub struct Writer {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: WriterConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
    /// Namespace of the entities being emitted
    current_namespace: String,
    /// Set while an argument guard is held
    pub(crate) in_generic_instance: bool,
    pub(crate) generic_params: GenericParamStack,
    pub(crate) generic_args: GenericArgStack,
}

impl Writer {
    /// Create a new writer with the given config and no namespace
    pub fn new(config: WriterConfig) -> Self {
        Self::with_namespace("", config)
    }

    /// Create a new writer for entities in `namespace`
    pub fn with_namespace(namespace: impl Into<String>, config: WriterConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
            current_namespace: namespace.into(),
            in_generic_instance: false,
            generic_params: GenericParamStack::new(),
            generic_args: GenericArgStack::new(),
        }
    }

    /// Get the output
    pub fn finish(self) -> String {
        self.output
    }

    /// Output written so far
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.config.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write one character, applying indentation and brace tracking
    fn put(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        // A closing brace belongs to the outer level, including when it starts a line.
        if self.config.brace_indent && c == '}' {
            self.dedent();
        }
        self.write_indent();
        self.output.push(c);
        if self.config.brace_indent && c == '{' {
            self.indent();
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        for c in s.chars() {
            self.put(c);
        }
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    /// Write `value` up to (not including) the first [`CODE_ESCAPE`].
    ///
    /// Everything after the marker in this call is dropped. Metadata names carry their generic arity
    /// after the marker (``Pair`2``), so this writes the bare name.
    pub fn write_code(&mut self, value: &str) {
        for c in value.chars() {
            if c == CODE_ESCAPE {
                return;
            }
            self.put(c);
        }
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Namespace of the entities being emitted.
    pub fn current_namespace(&self) -> &str {
        &self.current_namespace
    }

    /// Whether emission is currently inside a bound generic instantiation.
    pub fn in_generic_instance(&self) -> bool {
        self.in_generic_instance
    }
}

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
