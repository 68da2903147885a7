// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How [`crate::CsiStyledText::write_to_with()`] finishes a write.
//!
//! A terminal in raw mode doesn't translate `\n` into a carriage return plus line feed,
//! so text written there needs [`LineEnding::CrLf`] to start at column one.
//!
//! ```rust
//! use r3bl_ansi_csi::{LineEnding, WriteOptions};
//!
//! let options: WriteOptions = LineEnding::CrLf.into();
//! assert_eq!(options.line_ending, Some(LineEnding::CrLf));
//! assert!(!options.flush);
//!
//! let options = WriteOptions::default().with_flush();
//! assert_eq!(options.line_ending, None);
//! assert!(options.flush);
//! ```

use strum_macros::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// `line_ending` of [`None`] writes the text as is. `flush` flushes the sink once the
/// bytes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WriteOptions {
    pub line_ending: Option<LineEnding>,
    pub flush: bool,
}

impl WriteOptions {
    #[must_use]
    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = Some(line_ending);
        self
    }

    #[must_use]
    pub const fn with_flush(mut self) -> Self {
        self.flush = true;
        self
    }
}

impl From<LineEnding> for WriteOptions {
    fn from(line_ending: LineEnding) -> Self {
        Self {
            line_ending: Some(line_ending),
            flush: false,
        }
    }
}

impl From<Option<LineEnding>> for WriteOptions {
    fn from(line_ending: Option<LineEnding>) -> Self {
        Self {
            line_ending,
            flush: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_line_ending_as_str() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        for it in LineEnding::iter() {
            assert!(it.as_str().ends_with('\n'));
        }
    }

    #[test]
    fn test_default_writes_text_as_is() {
        let options = WriteOptions::default();
        assert_eq!(options.line_ending, None);
        assert!(!options.flush);
    }

    #[test]
    fn test_builder() {
        let options = WriteOptions::default()
            .with_line_ending(LineEnding::CrLf)
            .with_flush();
        assert_eq!(
            options,
            WriteOptions {
                line_ending: Some(LineEnding::CrLf),
                flush: true,
            }
        );
    }

    #[test]
    fn test_from_option() {
        let options: WriteOptions = Option::<LineEnding>::None.into();
        assert_eq!(options, WriteOptions::default());
        let options: WriteOptions = Some(LineEnding::Lf).into();
        assert_eq!(options.line_ending, Some(LineEnding::Lf));
    }
}
