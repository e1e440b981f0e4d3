//! Command orchestration over a native font manager.
//!
//! Mutating commands run validate, dry-run short-circuit, delegate, report.
//! A dry run never calls the manager.

use std::{
    io::{Stderr, Stdout, Write},
    path::{Path, PathBuf},
};

use fontshelf_core::{CleanupPlan, Error, FontManager, FontScope, FontTarget, Result};
use fontshelf_render::{ListRender, ListRenderOptions, render};
use log::debug;

use crate::report::{OperationOptions, Reporter};

/// Runs fontshelf commands against an injected [`FontManager`].
pub struct Orchestrator<M, O = Stdout, E = Stderr> {
    manager: M,
    reporter: Reporter<O, E>,
}

impl<M: FontManager, O: Write, E: Write> Orchestrator<M, O, E> {
    pub fn new(manager: M, reporter: Reporter<O, E>) -> Self {
        Self { manager, reporter }
    }

    /// List installed fonts and print them.
    pub fn list(&mut self, opts: ListRenderOptions) -> Result<()> {
        debug!("Delegating list to native manager");
        let fonts = self.manager.list()?;
        debug!("Native manager returned {} font records", fonts.len());

        match render(fonts, opts)? {
            ListRender::Lines(lines) => {
                for line in &lines {
                    self.reporter.print(line)?;
                }
            }
            ListRender::Json(json) => self.reporter.print(&json)?,
        }
        Ok(())
    }

    /// Install a font file at the user scope, or system scope with `admin`.
    pub fn install(&mut self, path: &Path, admin: bool, opts: OperationOptions) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_arguments("a font path is required"));
        }
        let scope = FontScope::from_admin(admin);
        let output = &opts.output;

        if opts.dry_run {
            return self.reporter.status(
                output,
                &format!("DRY-RUN: would install font {} ({scope} scope)", path.display()),
            );
        }

        self.reporter
            .verbose(output, &format!("Installing font {} ({scope} scope)", path.display()))?;
        debug!("Delegating install of {} to native manager", path.display());
        self.manager.install(path, admin)?;
        self.reporter
            .status(output, &format!("Installed font {} ({scope} scope)", path.display()))
    }

    /// Uninstall a font by path or name, trying the requested scope first and
    /// then the other one.
    pub fn uninstall(
        &mut self,
        path: Option<PathBuf>,
        name: Option<String>,
        admin: bool,
        opts: OperationOptions,
    ) -> Result<()> {
        let target = FontTarget::from_parts(path, name)?;
        let chain = FontScope::from_admin(admin).describe_fallback();
        let output = &opts.output;

        if opts.dry_run {
            return self.reporter.status(
                output,
                &format!("DRY-RUN: would uninstall font by {target} (checking {chain})"),
            );
        }

        self.reporter
            .verbose(output, &format!("Uninstalling font by {target} (checking {chain})"))?;
        debug!("Delegating uninstall of {target} to native manager");
        self.manager.uninstall(&target, admin, opts.dry_run)?;
        self.reporter.status(output, &format!("Uninstalled font by {target}"))
    }

    /// Remove a font by path or name at the requested scope only.
    pub fn remove(
        &mut self,
        path: Option<PathBuf>,
        name: Option<String>,
        admin: bool,
        opts: OperationOptions,
    ) -> Result<()> {
        let target = FontTarget::from_parts(path, name)?;
        let scope = FontScope::from_admin(admin);
        let output = &opts.output;

        if opts.dry_run {
            return self.reporter.status(
                output,
                &format!("DRY-RUN: would remove font by {target} ({scope} scope)"),
            );
        }

        self.reporter.verbose(output, &format!("Removing font by {target} ({scope} scope)"))?;
        debug!("Delegating remove of {target} to native manager");
        self.manager.remove(&target, admin, opts.dry_run)?;
        self.reporter.status(output, &format!("Removed font by {target} ({scope} scope)"))
    }

    /// Prune stale registrations and/or clear font caches.
    pub fn cleanup(
        &mut self,
        admin: bool,
        plan: CleanupPlan,
        opts: OperationOptions,
    ) -> Result<()> {
        let scope = FontScope::from_admin(admin);
        let actions = plan.describe();
        let output = &opts.output;

        if opts.dry_run {
            let message = format!("DRY-RUN: would run {scope} cleanup: {actions}");
            return self.reporter.status(output, message.trim_end());
        }

        if plan.is_empty() {
            self.reporter.verbose(output, &format!("Running {scope} cleanup with no actions"))?;
        } else {
            self.reporter.verbose(output, &format!("Running {scope} cleanup: {actions}"))?;
        }
        debug!("Delegating cleanup ({plan:?}) to native manager");
        self.manager.cleanup(admin, plan, opts.dry_run)?;
        self.reporter.status(output, &format!("Completed {scope} cleanup"))
    }
}
