use crate::config::Config;
use crate::services::DashboardService;
use crate::store::{MemoryStore, SessionStore};
use crate::{Error, Result};
use intend_engine::{Analyzer, AnalyzerOptions};
use intend_index::Database;
use intend_types::Lexicon;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Per-invocation overrides that win over `config.toml`
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOptions {
    pub lexicon_path: Option<PathBuf>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct InitResult {
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    /// False when an existing config.toml was kept
    pub created_config: bool,
    pub schema_version: i32,
    pub patient_count: usize,
    pub session_count: usize,
}

/// A data directory: its configuration, session store and analyzer
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    store: Box<dyn SessionStore>,
    lexicon: Lexicon,
    analyzer: Analyzer,
}

impl Workspace {
    /// Create the data directory, a default config and the database.
    /// Existing files are left untouched.
    pub fn init(data_dir: &Path) -> Result<InitResult> {
        std::fs::create_dir_all(data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE);
        let created_config = !config_path.exists();
        let config = if created_config {
            let config = Config::default();
            config.save_to(&config_path)?;
            config
        } else {
            Config::load_from(&config_path)?
        };

        let db_path = config.database_path(data_dir);
        let db = Database::open(&db_path)?;
        let stats = db.stats()?;

        Ok(InitResult {
            config_path,
            db_path,
            created_config,
            schema_version: stats.schema_version,
            patient_count: stats.patients,
            session_count: stats.sessions,
        })
    }

    /// Open the workspace at `data_dir`, creating the database on first use
    pub fn open(data_dir: PathBuf, options: WorkspaceOptions) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        let db = Database::open(&config.database_path(&data_dir))?;
        Self::assemble(data_dir, config, Box::new(db), options)
    }

    /// A throwaway [`MemoryStore`] workspace that still honors the
    /// configuration in `data_dir`. The database is never opened.
    pub fn in_memory(data_dir: PathBuf, options: WorkspaceOptions) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        Self::assemble(data_dir, config, Box::new(MemoryStore::new()), options)
    }

    fn assemble(
        data_dir: PathBuf,
        mut config: Config,
        store: Box<dyn SessionStore>,
        options: WorkspaceOptions,
    ) -> Result<Self> {
        if let Some(top_n) = options.top_n {
            if top_n == 0 {
                return Err(Error::Config("top must be at least 1".to_string()));
            }
            config.analyzer.top_n = top_n;
        }

        let lexicon = match options.lexicon_path {
            Some(path) => crate::lexicon::load_lexicon(&path)?,
            None => config.load_lexicon(&data_dir)?,
        };
        let analyzer = build_analyzer(&lexicon, &config);

        Ok(Self {
            data_dir,
            config,
            store,
            lexicon,
            analyzer,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The lexicon the analyzer was compiled from
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(self.store.as_ref(), &self.analyzer)
    }
}

fn build_analyzer(lexicon: &Lexicon, config: &Config) -> Analyzer {
    let empty = lexicon.empty_categories();
    if !empty.is_empty() {
        eprintln!(
            "Warning: lexicon categories with no entries: {}",
            empty.join(", ")
        );
    }

    Analyzer::with_options(
        lexicon,
        AnalyzerOptions {
            top_n: config.analyzer.top_n,
        },
    )
}
