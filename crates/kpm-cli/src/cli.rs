//! CLI argument definitions for the protocol workbench.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "kpm",
    version,
    about = "KP Medizin - Workbench für mündliche Prüfungsprotokolle",
    long_about = "Assemble, validate and export protocol documents for the oral part\n\
                  of the German medical licensing examination (Kenntnisprüfung).\n\n\
                  Protocols are plain JSON files; drafts and the identifier sequence\n\
                  counter live in the state directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding the draft slot and the sequence counter.
    #[arg(
        long = "state-dir",
        value_name = "DIR",
        default_value = ".kpm",
        global = true
    )]
    pub state_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a fresh, empty protocol document.
    New(NewArgs),

    /// Replace fields of a protocol document in place.
    Set(SetArgs),

    /// Browse the subject vocabulary (Fächer, Fachgebiete, Themen).
    Taxonomy(TaxonomyArgs),

    /// Validate a protocol document and list every violation.
    Validate(ValidateArgs),

    /// Save or restore the single draft slot.
    #[command(subcommand)]
    Draft(DraftCommand),

    /// Validate for export and write the final JSON (and Markdown) files.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct NewArgs {
    /// Where to write the new protocol (stdout when omitted).
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SetArgs {
    /// Protocol JSON file to modify.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Bundesland in which the exam took place.
    #[arg(long)]
    pub bundesland: Option<String>,

    /// Exam year, e.g. 2024.
    #[arg(long)]
    pub jahr: Option<String>,

    /// Exam month, 1 through 12.
    #[arg(long)]
    pub monat: Option<String>,

    /// Primary Fach of the protocol.
    #[arg(long)]
    pub fach: Option<String>,

    /// Fachgebiet within the selected Fach.
    #[arg(long)]
    pub fachgebiet: Option<String>,

    /// Thema within the selected Fachgebiet.
    #[arg(long)]
    pub thema: Option<String>,

    /// Exam format category.
    #[arg(long)]
    pub kategorie: Option<String>,

    /// Free-form keywords.
    #[arg(long)]
    pub schlagwoerter: Option<String>,

    /// Overall difficulty.
    #[arg(long)]
    pub schwierigkeit: Option<String>,

    /// Examined competency.
    #[arg(long)]
    pub pruefungskompetenz: Option<String>,

    /// Related topics.
    #[arg(long = "verbunden-themen")]
    pub verbunden_themen: Option<String>,

    /// General comment.
    #[arg(long)]
    pub kommentar: Option<String>,
}

#[derive(Parser)]
pub struct TaxonomyArgs {
    /// List the Fachgebiete of this Fach instead of all Fächer.
    #[arg(long)]
    pub fach: Option<String>,

    /// List the Themen of this Fachgebiet.
    #[arg(long)]
    pub fachgebiet: Option<String>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Protocol JSON file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also enforce export readiness (Teil 1 and 3 need questions).
    #[arg(long)]
    pub export: bool,
}

#[derive(Subcommand)]
pub enum DraftCommand {
    /// Copy a protocol file into the draft slot.
    Save(DraftSaveArgs),

    /// Restore the draft slot into a protocol file.
    Load(DraftLoadArgs),
}

#[derive(Parser)]
pub struct DraftSaveArgs {
    /// Protocol JSON file to store as the draft.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct DraftLoadArgs {
    /// Where to write the restored protocol (stdout when omitted).
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Protocol JSON file to export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory receiving the export files.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "export")]
    pub out_dir: PathBuf,

    /// Also write a Markdown rendering next to the JSON.
    #[arg(long)]
    pub markdown: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
