use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DB_ENV: &str = "EXPENSEFLOW_DB";
pub(crate) const DATA_DIR_ENV: &str = "EXPENSEFLOW_DATA_DIR";
const DB_FILE: &str = "expenseflow.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
}

impl Config {
    /// `EXPENSEFLOW_DB` names the database file outright; otherwise it lives
    /// in `EXPENSEFLOW_DATA_DIR` or the platform data directory.
    pub(crate) fn from_env() -> Result<Self> {
        let db = std::env::var_os(DB_ENV).map(PathBuf::from);
        let data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        let platform_dir = || {
            directories::ProjectDirs::from("com", "expenseflow", "ExpenseFlow")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        };
        let config = Self::resolve(db, data_dir, platform_dir)?;
        config.ensure_parent()?;
        log::debug!("using database {}", config.db_path.display());
        Ok(config)
    }

    pub(crate) fn resolve(
        db: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        platform_dir: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        let db_path = match (db, data_dir) {
            (Some(db), _) => db,
            (None, Some(dir)) => dir.join(DB_FILE),
            (None, None) => platform_dir()?.join(DB_FILE),
        };
        Ok(Self { db_path })
    }

    fn ensure_parent(&self) -> Result<()> {
        let Some(dir) = self.db_path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(());
        };
        create_dir(dir)
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))
}
