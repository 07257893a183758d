mod analysis;
mod lexicon;
mod notice;
mod patient;
mod session;

pub use analysis::AnalysisView;
pub use lexicon::LexiconView;
pub use notice::{ExportView, ImportView, InitView, Notice, OverviewView};
pub use patient::{PatientListView, PatientSummaryView};
pub use session::{SessionListView, SessionReportView};
