mod dashboard;
mod export;
mod import;

pub use dashboard::{DashboardService, Overview, PatientSummary, SessionListing, SessionReport};
pub use export::ExportRow;
pub use import::{ImportOptions, ImportOutcome, SkippedFile};
