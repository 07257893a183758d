use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze a transcript file (or stdin) against the lexicon")]
    Analyze {
        /// Transcript file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    #[command(about = "Inspect the active lexicon")]
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommand,
    },

    #[command(about = "Manage patients")]
    Patient {
        #[command(subcommand)]
        command: PatientCommand,
    },

    #[command(about = "Record and review sessions")]
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    #[command(about = "Totals across all patients and sessions")]
    Overview,

    #[command(about = "Export every session as CSV")]
    Export {
        /// Output file; `-` writes to stdout
        path: PathBuf,
    },

    #[command(about = "Create the data directory, config.toml and database")]
    Init,
}

#[derive(Subcommand)]
pub enum LexiconCommand {
    #[command(about = "Print the active lexicon")]
    Show,

    #[command(about = "Write the active lexicon to a TOML (or .json) file")]
    Export { path: PathBuf },
}

#[derive(Subcommand)]
pub enum PatientCommand {
    #[command(about = "Register a patient (updates an existing profile)")]
    Add {
        name: String,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        occupation: Option<String>,

        /// First day of treatment (YYYY-MM-DD)
        #[arg(long)]
        started_on: Option<NaiveDate>,
    },

    #[command(about = "List registered patients")]
    List,

    #[command(about = "Summary and sentiment trend for one patient")]
    Show { name: String },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    #[command(about = "Record a session from a transcript file")]
    Add {
        patient: String,

        /// Session key, usually the session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        transcript: PathBuf,

        #[arg(long)]
        duration_secs: Option<u32>,

        /// Facial emotion share, e.g. `--emotion sedih=0.72` (repeatable)
        #[arg(long = "emotion", value_name = "NAME=SHARE")]
        emotions: Vec<String>,

        #[arg(long)]
        intensity: Option<String>,

        #[arg(long)]
        speech_rate: Option<String>,

        #[arg(long)]
        video: Option<String>,

        #[arg(long)]
        audio: Option<String>,
    },

    #[command(about = "List a patient's sessions, newest first")]
    List { patient: String },

    #[command(about = "Show the full report for one session")]
    Show { id: String },

    #[command(about = "Delete a session")]
    Remove { id: String },

    #[command(
        about = "Import every *.txt file in a directory as sessions",
        long_about = "Import every *.txt file in a directory as sessions. The file stem becomes the session key. Files whose key is already recorded for the patient are skipped, so re-running an import only adds new files."
    )]
    Import {
        patient: String,

        dir: PathBuf,

        #[arg(long)]
        recursive: bool,
    },
}
