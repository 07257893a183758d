use super::dashboard::DashboardService;
use crate::{Error, Result};
use intend_types::{PatientName, SessionRecord, Transcript};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Descend into subdirectories
    pub recursive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportOutcome {
    pub imported: Vec<SessionRecord>,
    pub skipped: Vec<SkippedFile>,
}

fn is_transcript_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

impl DashboardService<'_> {
    /// Record every `*.txt` file under `dir` as a session of `patient`.
    ///
    /// The file stem becomes the session key, so `2025-10-17.txt` sorts as
    /// a dated session. Files whose key is already recorded for the patient
    /// are skipped, so re-running an import adds only new files. Unreadable
    /// files and failed writes are reported, not fatal.
    pub fn import_directory(
        &self,
        patient: &PatientName,
        dir: &Path,
        options: ImportOptions,
    ) -> Result<ImportOutcome> {
        if self.patient(patient)?.is_none() {
            return Err(Error::UnknownPatient(patient.to_string()));
        }
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("directory {}", dir.display())));
        }

        let max_depth = if options.recursive { usize::MAX } else { 1 };
        let mut known_keys = self.session_keys(patient)?;
        let mut outcome = ImportOutcome::default();

        for entry in WalkDir::new(dir)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    outcome.skipped.push(SkippedFile {
                        path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_transcript_file(path) {
                continue;
            }

            let key = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    outcome.skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: "file name is not valid UTF-8".to_string(),
                    });
                    continue;
                }
            };

            if known_keys.contains(&key) {
                outcome.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: format!("session '{}' already recorded", key),
                });
                continue;
            }

            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    outcome.skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let mut session = SessionRecord::new(patient.clone(), key, Transcript::from_text(text));
            session.media.transcript = Some(path.display().to_string());
            if let Err(err) = self.record_session(&session) {
                outcome.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
                continue;
            }
            known_keys.insert(session.key.clone());
            outcome.imported.push(session);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SessionStore};
    use intend_engine::Analyzer;
    use intend_types::{Lexicon, Patient};
    use tempfile::TempDir;

    fn budi() -> PatientName {
        PatientName::parse("Budi").unwrap()
    }

    #[test]
    fn test_imports_txt_files_with_stem_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("2025-10-16.txt"), "senang lega")?;
        std::fs::write(temp_dir.path().join("2025-10-17.txt"), "lelah capek")?;
        std::fs::write(temp_dir.path().join("notes.md"), "ignored")?;
        std::fs::create_dir(temp_dir.path().join("older"))?;
        std::fs::write(temp_dir.path().join("older/2025-09-01.txt"), "sedih")?;

        let store = MemoryStore::new();
        store.upsert_patient(&Patient::new(budi()))?;
        let analyzer = Analyzer::new(&Lexicon::default());
        let service = DashboardService::new(&store, &analyzer);

        let outcome = service.import_directory(&budi(), temp_dir.path(), ImportOptions::default())?;
        let keys: Vec<_> = outcome.imported.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["2025-10-16", "2025-10-17"]);
        assert!(outcome.skipped.is_empty());

        let outcome = service.import_directory(&budi(), &temp_dir.path().join("older"), ImportOptions { recursive: true })?;
        assert_eq!(outcome.imported.len(), 1);
        assert_eq!(store.count_sessions()?, 3);
        Ok(())
    }

    #[test]
    fn test_reimport_skips_recorded_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("2025-10-16.txt"), "senang")?;
        std::fs::write(temp_dir.path().join("2025-10-17.txt"), "capek")?;

        let store = MemoryStore::new();
        store.upsert_patient(&Patient::new(budi()))?;
        let analyzer = Analyzer::new(&Lexicon::default());
        let service = DashboardService::new(&store, &analyzer);

        let first = service.import_directory(&budi(), temp_dir.path(), ImportOptions::default())?;
        assert_eq!(first.imported.len(), 2);

        std::fs::write(temp_dir.path().join("2025-10-18.txt"), "lega")?;
        let second = service.import_directory(&budi(), temp_dir.path(), ImportOptions::default())?;
        let keys: Vec<_> = second.imported.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["2025-10-18"]);
        assert_eq!(second.skipped.len(), 2);
        assert!(second.skipped[0].reason.contains("already recorded"));
        assert_eq!(store.count_sessions()?, 3);
        Ok(())
    }

    #[test]
    fn test_same_stem_in_subdirectories_imports_once() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::create_dir_all(temp_dir.path().join("a"))?;
        std::fs::create_dir_all(temp_dir.path().join("b"))?;
        std::fs::write(temp_dir.path().join("a/2025-10-01.txt"), "capek")?;
        std::fs::write(temp_dir.path().join("b/2025-10-01.txt"), "lelah")?;

        let store = MemoryStore::new();
        store.upsert_patient(&Patient::new(budi()))?;
        let analyzer = Analyzer::new(&Lexicon::default());
        let service = DashboardService::new(&store, &analyzer);

        let outcome = service.import_directory(&budi(), temp_dir.path(), ImportOptions { recursive: true })?;
        assert_eq!(outcome.imported.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        Ok(())
    }

    #[test]
    fn test_recursive_descends() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::create_dir_all(temp_dir.path().join("a/b"))?;
        std::fs::write(temp_dir.path().join("a/b/2025-10-01.txt"), "capek")?;

        let store = MemoryStore::new();
        store.upsert_patient(&Patient::new(budi()))?;
        let analyzer = Analyzer::new(&Lexicon::default());
        let service = DashboardService::new(&store, &analyzer);

        let flat = service.import_directory(&budi(), temp_dir.path(), ImportOptions::default())?;
        assert!(flat.imported.is_empty());

        let deep = service.import_directory(&budi(), temp_dir.path(), ImportOptions { recursive: true })?;
        assert_eq!(deep.imported[0].key, "2025-10-01");
        Ok(())
    }

    #[test]
    fn test_unknown_patient_or_missing_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = MemoryStore::new();
        store.upsert_patient(&Patient::new(budi()))?;
        let analyzer = Analyzer::new(&Lexicon::default());
        let service = DashboardService::new(&store, &analyzer);

        let nobody = PatientName::parse("Nobody")?;
        assert!(matches!(
            service.import_directory(&nobody, temp_dir.path(), ImportOptions::default()),
            Err(Error::UnknownPatient(_))
        ));
        assert!(matches!(
            service.import_directory(&budi(), &temp_dir.path().join("missing"), ImportOptions::default()),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }
}
