//! Recording font manager used in place of the native manager.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use fontshelf_cli::{Orchestrator, Reporter};
use fontshelf_core::{CleanupPlan, Error, FontManager, FontRecord, FontTarget, Operation, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Install(PathBuf, bool),
    Uninstall(FontTarget, bool, bool),
    Remove(FontTarget, bool, bool),
    Cleanup(bool, CleanupPlan, bool),
}

#[derive(Default)]
pub struct RecordingManager {
    pub calls: RefCell<Vec<Call>>,
    pub fonts: Vec<FontRecord>,
    pub failure: Option<String>,
}

impl RecordingManager {
    pub fn with_fonts(fonts: Vec<FontRecord>) -> Self {
        Self { fonts, ..Self::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: Operation, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(Error::delegate(operation, message.clone())),
            None => Ok(()),
        }
    }
}

impl FontManager for RecordingManager {
    fn list(&self) -> Result<Vec<FontRecord>> {
        self.record(Operation::List, Call::List)?;
        Ok(self.fonts.clone())
    }

    fn install(&self, path: &Path, admin: bool) -> Result<()> {
        self.record(Operation::Install, Call::Install(path.to_path_buf(), admin))
    }

    fn uninstall(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        self.record(Operation::Uninstall, Call::Uninstall(target.clone(), admin, dry_run))
    }

    fn remove(&self, target: &FontTarget, admin: bool, dry_run: bool) -> Result<()> {
        self.record(Operation::Remove, Call::Remove(target.clone(), admin, dry_run))
    }

    fn cleanup(&self, admin: bool, plan: CleanupPlan, dry_run: bool) -> Result<()> {
        self.record(Operation::Cleanup, Call::Cleanup(admin, plan, dry_run))
    }
}

pub type TestOrchestrator<'a> =
    Orchestrator<&'a RecordingManager, &'a mut Vec<u8>, &'a mut Vec<u8>>;

/// Output of one orchestrated command.
pub struct Captured<T> {
    pub result: T,
    pub out: String,
    pub err: String,
}

pub fn capture<T>(
    manager: &RecordingManager,
    f: impl for<'a> FnOnce(&mut TestOrchestrator<'a>) -> T,
) -> Captured<T> {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = {
        let mut orchestrator = Orchestrator::new(manager, Reporter::new(&mut out, &mut err));
        f(&mut orchestrator)
    };
    Captured {
        result,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}
