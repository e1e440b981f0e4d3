//! Native font manager contract.
//!
//! The manager owns everything that touches the system: file placement, OS
//! registration, scope handling and font caches. Fontshelf only calls it.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    record::FontRecord,
};

/// Identity of a font to uninstall or remove: a file path or a font name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontTarget {
    Path(PathBuf),
    Name(String),
}

impl FontTarget {
    /// Build a target from optional CLI inputs; exactly one must be set.
    pub fn from_parts(path: Option<PathBuf>, name: Option<String>) -> Result<Self> {
        match (path, name) {
            (Some(path), None) if !path.as_os_str().is_empty() => Ok(FontTarget::Path(path)),
            (None, Some(name)) if !name.is_empty() => Ok(FontTarget::Name(name)),
            (Some(_), Some(_)) => {
                Err(Error::invalid_arguments("specify either a font path or --name, not both"))
            }
            _ => Err(Error::invalid_arguments("a font path or --name is required")),
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            FontTarget::Path(path) => Some(path),
            FontTarget::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FontTarget::Path(_) => None,
            FontTarget::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for FontTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontTarget::Path(path) => write!(f, "path {}", path.display()),
            FontTarget::Name(name) => write!(f, "name {name}"),
        }
    }
}

/// Cleanup sub-actions, each toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupPlan {
    /// Remove registrations whose font files are gone.
    pub prune: bool,
    /// Clear OS font caches.
    pub cache: bool,
}

impl CleanupPlan {
    pub const ALL: Self = Self { prune: true, cache: true };

    pub const fn new(prune: bool, cache: bool) -> Self {
        Self { prune, cache }
    }

    pub fn is_empty(&self) -> bool {
        !self.prune && !self.cache
    }

    /// Requested actions joined with "and"; empty when nothing is requested.
    pub fn describe(&self) -> String {
        let mut actions = Vec::new();
        if self.prune {
            actions.push("prune stale registrations");
        }
        if self.cache {
            actions.push("clear font caches");
        }
        actions.join(" and ")
    }
}

impl Default for CleanupPlan {
    fn default() -> Self {
        Self::ALL
    }
}

/// Operations the native font manager exposes.
///
/// Every call is synchronous and may block; failures carry the manager's
/// own message in [`Error::Delegate`].
pub trait FontManager {
    /// Enumerate installed fonts.
    fn list(&self) -> Result<Vec<FontRecord>>;

    /// Install a font file at the user scope, or the system scope when `admin`.
    fn install(&self, path: &Path, admin: bool) -> Result<()>;

    /// Unregister a font, searching the requested scope then the other one.
    fn uninstall(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()>;

    /// Unregister and delete a font at the requested scope only.
    fn remove(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()>;

    /// Prune stale registrations and/or clear font caches.
    fn cleanup(&self, admin: bool, plan: CleanupPlan, dry_run: bool) -> Result<()>;
}

impl<M: FontManager + ?Sized> FontManager for &M {
    fn list(&self) -> Result<Vec<FontRecord>> {
        (**self).list()
    }

    fn install(&self, path: &Path, admin: bool) -> Result<()> {
        (**self).install(path, admin)
    }

    fn uninstall(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        (**self).uninstall(target, admin, dry_run)
    }

    fn remove(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        (**self).remove(target, admin, dry_run)
    }

    fn cleanup(&self, admin: bool, plan: CleanupPlan, dry_run: bool) -> Result<()> {
        (**self).cleanup(admin, plan, dry_run)
    }
}

impl<M: FontManager + ?Sized> FontManager for Box<M> {
    fn list(&self) -> Result<Vec<FontRecord>> {
        (**self).list()
    }

    fn install(&self, path: &Path, admin: bool) -> Result<()> {
        (**self).install(path, admin)
    }

    fn uninstall(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        (**self).uninstall(target, admin, dry_run)
    }

    fn remove(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        (**self).remove(target, admin, dry_run)
    }

    fn cleanup(&self, admin: bool, plan: CleanupPlan, dry_run: bool) -> Result<()> {
        (**self).cleanup(admin, plan, dry_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_path() {
        let target = FontTarget::from_parts(Some(PathBuf::from("/fonts/A.ttf")), None).unwrap();
        assert_eq!(target.to_string(), "path /fonts/A.ttf");
        assert_eq!(target.name(), None);
    }

    #[test]
    fn test_target_from_name() {
        let target = FontTarget::from_parts(None, Some("Foo".into())).unwrap();
        assert_eq!(target.to_string(), "name Foo");
        assert_eq!(target.path(), None);
    }

    #[test]
    fn test_target_rejects_both() {
        let err =
            FontTarget::from_parts(Some(PathBuf::from("/a.ttf")), Some("A".into())).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn test_target_rejects_neither() {
        assert!(matches!(FontTarget::from_parts(None, None), Err(Error::InvalidArguments(_))));
        assert!(matches!(
            FontTarget::from_parts(None, Some(String::new())),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_cleanup_plan_describe() {
        assert_eq!(CleanupPlan::ALL.describe(), "prune stale registrations and clear font caches");
        assert_eq!(CleanupPlan::new(true, false).describe(), "prune stale registrations");
        assert_eq!(CleanupPlan::new(false, true).describe(), "clear font caches");
        assert_eq!(CleanupPlan::new(false, false).describe(), "");
        assert!(CleanupPlan::new(false, false).is_empty());
    }
}
