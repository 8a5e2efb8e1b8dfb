use super::common::{RecordArgs, ViewModeArgs};
use crate::types::{DatasetArg, ExportFormatArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the records of a dataset")]
    List {
        #[arg(long, help = "Dataset (default from config)")]
        dataset: Option<DatasetArg>,

        #[arg(long, help = "Case-insensitive filter over the searchable fields")]
        query: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the interactive card of one record")]
    Show {
        #[command(flatten)]
        record: RecordArgs,

        #[arg(
            long,
            value_name = "[UNIT:]KEY",
            help = "Expand a truncated field; prefix with the unit position for survey units"
        )]
        expand: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Render printable HTML cards")]
    Print {
        #[arg(long, help = "Print every record of every available dataset")]
        all: bool,

        #[command(flatten)]
        record: RecordArgs,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the page to FILE instead of stdout"
        )]
        output: Option<PathBuf>,
    },

    #[command(about = "Export one record as a document")]
    Export {
        #[command(flatten)]
        record: RecordArgs,

        #[arg(
            long = "to",
            value_name = "FORMAT",
            help = "Document format (default from config)"
        )]
        to: Option<ExportFormatArg>,

        #[arg(
            long,
            value_name = "DIR",
            help = "Output directory (default from config, else cwd)"
        )]
        output: Option<PathBuf>,
    },

    #[command(about = "Line-oriented operator session on stdin")]
    Browse {
        #[arg(long, help = "Dataset selected at start (default from config)")]
        dataset: Option<DatasetArg>,
    },

    #[command(about = "Show the correction notes")]
    Notes,

    #[command(about = "Show input status and record counts per dataset")]
    Datasets,
}
