use crate::presentation::ViewMode;
use crate::types::DatasetArg;
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (indices and titles only)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (skip empty fields)", group = "view_mode")]
    pub compact: bool,

    #[arg(
        long,
        help = "Verbose output (field keys, record ids, dropped keys)",
        group = "view_mode"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> ViewMode {
        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Which record a command operates on.
#[derive(Debug, Clone, Default, Args)]
pub struct RecordArgs {
    #[arg(long, help = "Dataset (default from config)")]
    pub dataset: Option<DatasetArg>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Record index in the unfiltered dataset"
    )]
    pub index: usize,
}
