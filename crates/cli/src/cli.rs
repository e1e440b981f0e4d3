//! CLI definitions and command dispatch.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use clap_complete::{Shell, generate};
use fontshelf_core::{CleanupPlan, FontManager};
use fontshelf_render::ListRenderOptions;

use crate::{
    config::manager_program,
    native::ProcessManager,
    orchestrator::Orchestrator,
    report::{OperationOptions, Reporter},
};

#[derive(Parser)]
#[command(name = "fontshelf", version)]
#[command(about = "List, install, uninstall, and remove fonts through the native font manager")]
pub struct Cli {
    /// Native font manager program [env: FONTSHELF_MANAGER] [default: fontshelf-native]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub manager: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Execution flags shared by mutating commands.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct RunFlags {
    /// Print intended actions without calling the font manager
    #[arg(long)]
    pub dry_run: bool,
    /// Silence status output
    #[arg(short, long)]
    pub quiet: bool,
    /// Show extra diagnostics before each action
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<RunFlags> for OperationOptions {
    fn from(flags: RunFlags) -> Self {
        OperationOptions::new(flags.dry_run, flags.quiet, flags.verbose)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed fonts
    #[command(alias = "l")]
    List {
        /// Show font file paths (default when --name is not given)
        #[arg(short, long)]
        path: bool,
        /// Show PostScript names
        #[arg(short, long)]
        name: bool,
        /// Remove duplicates
        #[arg(short, long)]
        sorted: bool,
        /// Output the font records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Install a font file
    #[command(alias = "i")]
    Install {
        #[arg(value_name = "FONT")]
        path: PathBuf,
        /// Install for all users (requires admin)
        #[arg(short, long)]
        admin: bool,
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Uninstall a font, keeping its file; searches both scopes
    #[command(alias = "u")]
    Uninstall {
        #[arg(value_name = "FONT")]
        path: Option<PathBuf>,
        /// Font name to uninstall instead of a path
        #[arg(short, long)]
        name: Option<String>,
        /// Prefer the system scope (requires admin)
        #[arg(short, long)]
        admin: bool,
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Uninstall a font and delete its file at one scope
    #[command(alias = "rm")]
    Remove {
        #[arg(value_name = "FONT")]
        path: Option<PathBuf>,
        /// Font name to remove instead of a path
        #[arg(short, long)]
        name: Option<String>,
        /// Remove from the system scope (requires admin)
        #[arg(short, long)]
        admin: bool,
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Prune stale registrations and clear font caches
    #[command(alias = "c")]
    Cleanup {
        /// Clean up the system scope (requires admin)
        #[arg(short, long)]
        admin: bool,
        /// Skip pruning stale registrations
        #[arg(long)]
        no_prune: bool,
        /// Skip clearing font caches
        #[arg(long)]
        no_cache: bool,
        #[command(flatten)]
        flags: RunFlags,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if let Commands::Completions { shell } = self.command {
            return write_completions(shell, io::stdout());
        }

        let manager = ProcessManager::connect(manager_program(self.manager))?;
        let mut orchestrator = Orchestrator::new(manager, Reporter::stdio());
        self.command.run(&mut orchestrator)
    }
}

impl Commands {
    pub fn run<M: FontManager, O: Write, E: Write>(
        self,
        orchestrator: &mut Orchestrator<M, O, E>,
    ) -> Result<()> {
        match self {
            Commands::List { path, name, sorted, json } => {
                orchestrator.list(ListRenderOptions {
                    show_path: path,
                    show_name: name,
                    sorted_output: sorted,
                    json_output: json,
                })?;
            }
            Commands::Install { path, admin, flags } => {
                orchestrator.install(&path, admin, flags.into())?;
            }
            Commands::Uninstall { path, name, admin, flags } => {
                orchestrator.uninstall(path, name, admin, flags.into())?;
            }
            Commands::Remove { path, name, admin, flags } => {
                orchestrator.remove(path, name, admin, flags.into())?;
            }
            Commands::Cleanup { admin, no_prune, no_cache, flags } => {
                orchestrator.cleanup(admin, CleanupPlan::new(!no_prune, !no_cache), flags.into())?;
            }
            Commands::Completions { shell } => write_completions(shell, io::stdout())?,
        }
        Ok(())
    }
}

/// Write a completion script for `shell`.
pub fn write_completions<W: Write>(shell: Shell, mut writer: W) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    generate(shell, &mut command, bin_name, &mut writer);
    Ok(())
}

/// Exit code for a clap parse failure: 0 for help/version, 1 otherwise.
pub fn exit_code_for_clap_error(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
