pub mod config;
pub mod error;
pub mod lexicon;
pub mod services;
pub mod store;
pub mod workspace;

pub use config::{AnalyzerConfig, Config, LexiconConfig, StoreConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use lexicon::{load_lexicon, save_lexicon};
pub use services::{
    DashboardService, ExportRow, ImportOptions, ImportOutcome, Overview, PatientSummary, SessionListing,
    SessionReport, SkippedFile,
};
pub use store::{MemoryStore, SessionStore};
pub use workspace::{InitResult, Workspace, WorkspaceOptions};
