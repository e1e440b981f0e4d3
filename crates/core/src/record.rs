//! Font record model returned by the native font manager.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{canonicalize, identity_key};

/// Installation tier of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontScope {
    User,
    System,
}

impl FontScope {
    /// `System` when running with admin rights, `User` otherwise.
    pub const fn from_admin(admin: bool) -> Self {
        if admin { FontScope::System } else { FontScope::User }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FontScope::User => "user",
            FontScope::System => "system",
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            FontScope::User => FontScope::System,
            FontScope::System => FontScope::User,
        }
    }

    /// Search order for operations that fall back to the other scope.
    pub const fn fallback_order(self) -> [FontScope; 2] {
        [self, self.opposite()]
    }

    /// Human-readable fallback chain, e.g. "user then system".
    pub fn describe_fallback(self) -> String {
        let [first, second] = self.fallback_order();
        format!("{first} then {second}")
    }
}

impl fmt::Display for FontScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin metadata for a font face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// One font face known to the native manager.
///
/// All display attributes are optional; a record with neither `path` nor
/// `source.path` has an empty identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postscript_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl FontRecord {
    /// Record with a top-level path and nothing else.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: Some(path.into()), ..Self::default() }
    }

    pub fn with_postscript_name(mut self, name: impl Into<String>) -> Self {
        self.postscript_name = Some(name.into());
        self
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    pub fn with_family_style(
        mut self,
        family: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        self.family_name = Some(family.into());
        self.style = Some(style.into());
        self
    }

    pub fn with_source(mut self, source: FontSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Raw path: top-level `path`, falling back to `source.path`. Empty
    /// strings count as absent.
    pub fn raw_path(&self) -> Option<&str> {
        non_empty(self.path.as_deref()).or_else(|| {
            let source = self.source.as_ref()?;
            non_empty(source.path.as_deref())
        })
    }

    /// Canonical display path, empty when the record has no path.
    pub fn canonical_path(&self) -> String {
        self.raw_path().map(canonicalize).unwrap_or_default()
    }

    /// Identity key used for deduplication, empty when the record has no path.
    pub fn identity_key(&self) -> String {
        self.raw_path().map(identity_key).unwrap_or_default()
    }

    /// Display name: PostScript name, then full name.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.postscript_name.as_deref()).or_else(|| non_empty(self.full_name.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
