//! Rendered list output.

use fontshelf_core::{Error, Result};

/// Output of [`render`](crate::render): text lines or a JSON document.
///
/// Reading one view from the other variant is a contract violation.
/// [`lines`](Self::lines) and [`json`](Self::json) panic on it;
/// [`try_lines`](Self::try_lines) and [`try_json`](Self::try_json) return
/// [`Error::RenderTypeMismatch`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRender {
    Lines(Vec<String>),
    Json(String),
}

impl ListRender {
    pub const fn kind(&self) -> &'static str {
        match self {
            ListRender::Lines(_) => "lines",
            ListRender::Json(_) => "json",
        }
    }

    pub const fn is_json(&self) -> bool {
        matches!(self, ListRender::Json(_))
    }

    pub fn try_lines(&self) -> Result<&[String]> {
        match self {
            ListRender::Lines(lines) => Ok(lines),
            ListRender::Json(_) => Err(self.mismatch("lines")),
        }
    }

    pub fn try_json(&self) -> Result<&str> {
        match self {
            ListRender::Json(json) => Ok(json),
            ListRender::Lines(_) => Err(self.mismatch("json")),
        }
    }

    /// Rendered lines.
    ///
    /// # Panics
    ///
    /// Panics if this is JSON output.
    pub fn lines(&self) -> &[String] {
        match self.try_lines() {
            Ok(lines) => lines,
            Err(e) => panic!("{e}"),
        }
    }

    /// Rendered JSON document.
    ///
    /// # Panics
    ///
    /// Panics if this is line output.
    pub fn json(&self) -> &str {
        match self.try_json() {
            Ok(json) => json,
            Err(e) => panic!("{e}"),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::RenderTypeMismatch { expected, found: self.kind() }
    }
}
