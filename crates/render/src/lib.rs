//! Font list rendering.
//!
//! Turns font records from the native manager into stable output: either one
//! line per font or a pretty-printed JSON array. Rendering is pure and
//! deterministic; the same input and options always give the same output.
//!
//! Duplicates are removed in two separate passes. The first drops records
//! that share an identity key (case-insensitive canonical path). The second
//! runs on the rendered text, because distinct records can still produce the
//! same line.
//!
//! # Example
//!
//! ```
//! use fontshelf_core::FontRecord;
//! use fontshelf_render::{ListRenderOptions, render};
//!
//! let fonts =
//!     vec![FontRecord::new("/System/Library/Fonts/Arial.ttf").with_postscript_name("ArialMT")];
//! let opts = ListRenderOptions { show_path: true, show_name: true, ..Default::default() };
//! let rendered = render(fonts, opts).unwrap();
//! assert_eq!(rendered.lines(), ["/System/Library/Fonts/Arial.ttf::ArialMT"]);
//! ```

mod output;

use std::collections::HashSet;

use fontshelf_core::{FontRecord, Result};
use log::debug;

pub use output::ListRender;

/// Display options for a font list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRenderOptions {
    pub show_path: bool,
    pub show_name: bool,
    /// Remove duplicate records and duplicate lines.
    pub sorted_output: bool,
    /// Emit a JSON array instead of lines.
    pub json_output: bool,
}

impl ListRenderOptions {
    /// Paths are shown unless only names were asked for.
    pub fn effective_show_path(&self) -> bool {
        self.show_path || !self.show_name
    }

    pub fn effective_show_name(&self) -> bool {
        self.show_name
    }

    fn dedupes_records(&self) -> bool {
        self.sorted_output || self.json_output
    }

    fn dedupes_lines(&self) -> bool {
        (self.effective_show_path() && !self.effective_show_name()) || self.sorted_output
    }
}

/// Render font records according to `opts`.
pub fn render(
    fonts: impl IntoIterator<Item = FontRecord>,
    opts: ListRenderOptions,
) -> Result<ListRender> {
    let mut fonts: Vec<FontRecord> = fonts.into_iter().collect();

    if opts.dedupes_records() {
        let before = fonts.len();
        fonts = dedupe_records(fonts);
        debug!("Deduplicated font records: {before} -> {}", fonts.len());
    }

    sort_records(&mut fonts);

    if opts.json_output {
        return Ok(ListRender::Json(serde_json::to_string_pretty(&fonts)?));
    }

    let mut lines = format_lines(&fonts, opts);
    lines.sort();

    if opts.dedupes_lines() {
        let before = lines.len();
        lines.dedup();
        debug!("Deduplicated rendered lines: {before} -> {}", lines.len());
    }

    Ok(ListRender::Lines(lines))
}

/// Keep the first record per identity key; records without a path are dropped.
pub fn dedupe_records(fonts: Vec<FontRecord>) -> Vec<FontRecord> {
    let mut seen = HashSet::new();
    fonts
        .into_iter()
        .filter(|font| {
            let key = font.identity_key();
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Stable sort by (lowercased canonical path, lowercased PostScript name).
pub fn sort_records(fonts: &mut [FontRecord]) {
    fonts.sort_by_cached_key(|font| {
        let postscript = font.postscript_name.as_deref().unwrap_or_default().to_lowercase();
        (font.identity_key(), postscript)
    });
}

fn format_lines(fonts: &[FontRecord], opts: ListRenderOptions) -> Vec<String> {
    let show_path = opts.effective_show_path();
    let show_name = opts.effective_show_name();

    fonts
        .iter()
        .map(|font| {
            let name = font.display_name().unwrap_or_default();
            match (show_path, show_name) {
                (true, true) => format!("{}::{name}", font.canonical_path()),
                (true, false) => font.canonical_path(),
                (false, _) => name.to_string(),
            }
        })
        .collect()
}
