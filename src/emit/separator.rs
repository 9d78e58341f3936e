//! Emit a separator before every item except the first.

use super::Writer;

/// Tracks whether the next item is the first in a list.
///
/// ```
/// use projgen::emit::{Separator, Writer, WriterConfig};
///
/// let mut w = Writer::new(WriterConfig::default());
/// let mut sep = Separator::new(", ");
/// for item in ["a", "b", "c"] {
///     sep.emit(&mut w);
///     w.write(item);
/// }
/// assert_eq!(w.finish(), "a, b, c");
/// ```
#[derive(Debug, Clone)]
pub struct Separator {
    separator: String,
    first: bool,
}

impl Separator {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            first: true,
        }
    }

    /// Use the writer's configured separator.
    pub fn for_writer(w: &Writer) -> Self {
        Self::new(w.config().separator.clone())
    }

    pub fn emit(&mut self, w: &mut Writer) {
        if self.first {
            self.first = false;
        } else {
            w.write(&self.separator);
        }
    }
}

impl Writer {
    /// Write each item with `f`, separated by the configured separator.
    ///
    /// Stops at the first error `f` returns.
    pub fn write_separated<I, F, E>(&mut self, items: I, mut f: F) -> Result<(), E>
    where
        I: IntoIterator,
        F: FnMut(&mut Writer, I::Item) -> Result<(), E>,
    {
        let mut sep = Separator::for_writer(self);
        for item in items {
            sep.emit(self);
            f(&mut *self, item)?;
        }
        Ok(())
    }
}
