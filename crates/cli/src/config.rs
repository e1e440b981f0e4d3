//! Configuration constants and native manager resolution.

use std::{env, ffi::OsString, path::PathBuf};

/// Program spawned when no manager is configured.
pub const DEFAULT_MANAGER_PROGRAM: &str = "fontshelf-native";

/// Environment variable naming the native manager program.
pub const MANAGER_ENV: &str = "FONTSHELF_MANAGER";

/// Resolve the native manager program: `--manager`, then `$FONTSHELF_MANAGER`,
/// then [`DEFAULT_MANAGER_PROGRAM`].
pub fn manager_program(flag: Option<PathBuf>) -> PathBuf {
    resolve_manager_program(flag, env::var_os(MANAGER_ENV))
}

fn resolve_manager_program(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env_value.filter(|value| !value.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANAGER_PROGRAM))
}
