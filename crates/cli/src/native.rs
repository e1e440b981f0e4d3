//! Process bridge to the native font manager.
//!
//! The native manager is a separate program that owns font placement, OS
//! registration and caches. Each operation spawns it once and waits:
//!
//! ```text
//! <program> --version
//! <program> list --json
//! <program> install [--admin] -- <PATH>
//! <program> uninstall [--admin] [--dry-run] (-- <PATH> | --name=<NAME>)
//! <program> remove [--admin] [--dry-run] (-- <PATH> | --name=<NAME>)
//! <program> cleanup [--admin] [--no-prune] [--no-cache] [--dry-run]
//! ```
//!
//! Paths always follow `--` and names are passed as a single `--name=`
//! argument, so values starting with `-` never parse as options.
//!
//! A non-zero exit is a delegate failure carrying the program's own message.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use fontshelf_core::{CleanupPlan, Error, FontManager, FontRecord, FontTarget, Operation, Result};
use log::debug;

/// [`FontManager`] backed by an external native manager program.
#[derive(Debug, Clone)]
pub struct ProcessManager {
    program: PathBuf,
}

impl ProcessManager {
    /// Probe `program --version` and return a connected manager.
    ///
    /// Fails with [`Error::ManagerUnavailable`] if the program cannot be
    /// started or rejects the probe.
    pub fn connect(program: impl Into<PathBuf>) -> Result<Self> {
        let program = program.into();
        let output = Command::new(&program).arg("--version").output().map_err(|e| {
            Error::ManagerUnavailable(format!("cannot start {}: {e}", program.display()))
        })?;

        if !output.status.success() {
            return Err(Error::ManagerUnavailable(format!(
                "{} --version: {}",
                program.display(),
                failure_message(&output)
            )));
        }

        debug!(
            "Connected to native font manager {} ({})",
            program.display(),
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(Self { program })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn invoke(&self, operation: Operation, args: Vec<OsString>) -> Result<Vec<u8>> {
        debug!("Running {} {:?}", self.program.display(), args);
        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            Error::delegate(operation, format!("cannot start {}: {e}", self.program.display()))
        })?;
        debug!("{} {operation} exited with {}", self.program.display(), output.status);

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(Error::delegate(operation, failure_message(&output)))
        }
    }
}

impl FontManager for ProcessManager {
    fn list(&self) -> Result<Vec<FontRecord>> {
        let stdout = self.invoke(Operation::List, args(["list", "--json"]))?;
        serde_json::from_slice(&stdout)
            .map_err(|e| Error::delegate(Operation::List, format!("invalid font list: {e}")))
    }

    fn install(&self, path: &Path, admin: bool) -> Result<()> {
        self.invoke(Operation::Install, install_args(path, admin)).map(drop)
    }

    fn uninstall(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        let args = target_args("uninstall", target, admin, dry_run);
        self.invoke(Operation::Uninstall, args).map(drop)
    }

    fn remove(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        let args = target_args("remove", target, admin, dry_run);
        self.invoke(Operation::Remove, args).map(drop)
    }

    fn cleanup(&self, admin: bool, plan: CleanupPlan, dry_run: bool) -> Result<()> {
        let mut args = args(["cleanup"]);
        push_flag(&mut args, "--admin", admin);
        push_flag(&mut args, "--no-prune", !plan.prune);
        push_flag(&mut args, "--no-cache", !plan.cache);
        push_flag(&mut args, "--dry-run", dry_run);
        self.invoke(Operation::Cleanup, args).map(drop)
    }
}

fn args<const N: usize>(values: [&str; N]) -> Vec<OsString> {
    values.into_iter().map(OsString::from).collect()
}

fn push_flag(args: &mut Vec<OsString>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.into());
    }
}

fn install_args(path: &Path, admin: bool) -> Vec<OsString> {
    let mut args = args(["install"]);
    push_flag(&mut args, "--admin", admin);
    args.push("--".into());
    args.push(path.into());
    args
}

fn target_args(verb: &str, target: &FontTarget, admin: bool, dry_run: bool) -> Vec<OsString> {
    let mut args = args([verb]);
    push_flag(&mut args, "--admin", admin);
    push_flag(&mut args, "--dry-run", dry_run);
    match target {
        FontTarget::Path(path) => {
            args.push("--".into());
            args.push(path.into());
        }
        FontTarget::Name(name) => {
            let mut arg = OsString::from("--name=");
            arg.push(name);
            args.push(arg);
        }
    }
    args
}

/// Trimmed stderr, else trimmed stdout, else the exit status.
fn failure_message(output: &Output) -> String {
    [&output.stderr, &output.stdout]
        .into_iter()
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .find(|message| !message.is_empty())
        .unwrap_or_else(|| format!("native manager exited with {}", output.status))
}
