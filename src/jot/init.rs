use crate::api::JotApi;
use crate::config::JotConfig;
use crate::error::{JotError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Environment override for the global notes file.
pub const ENV_NOTES_PATH: &str = "JOT_PATH";
/// Environment override for the category store directory.
pub const ENV_CATEGORIES_DIR: &str = "JOT_CATEGORIES";

/// Resolved store locations for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JotPaths {
    pub notes_file: PathBuf,
    pub categories_dir: PathBuf,
}

pub struct JotContext {
    pub api: JotApi<FileStore>,
    pub config: JotConfig,
    pub paths: JotPaths,
}

/// Build the context the binary runs with: load the per-user config,
/// resolve the store paths, open the file store.
pub fn initialize() -> Result<JotContext> {
    let proj_dirs = project_dirs()?;
    let config = JotConfig::load(proj_dirs.config_dir()).unwrap_or_default();
    let paths = resolve_paths(&config)?;

    let store = FileStore::new(paths.notes_file.clone(), paths.categories_dir.clone());
    Ok(JotContext {
        api: JotApi::new(store),
        config,
        paths,
    })
}

/// Where the stores live. An environment variable wins over the config
/// file, which wins over the platform default under the user data
/// directory.
pub fn resolve_paths(config: &JotConfig) -> Result<JotPaths> {
    let proj_dirs = project_dirs()?;
    Ok(resolve_with(
        env::var_os(ENV_NOTES_PATH).map(PathBuf::from),
        env::var_os(ENV_CATEGORIES_DIR).map(PathBuf::from),
        config,
        proj_dirs.data_dir(),
    ))
}

fn resolve_with(
    env_notes: Option<PathBuf>,
    env_categories: Option<PathBuf>,
    config: &JotConfig,
    data_dir: &Path,
) -> JotPaths {
    let notes_file = env_notes
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(|| data_dir.join("notes"));

    let categories_dir = env_categories
        .or_else(|| config.categories_dir.clone())
        .unwrap_or_else(|| data_dir.join("categories"));

    JotPaths {
        notes_file,
        categories_dir,
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "jot", "jot")
        .ok_or_else(|| JotError::Store("could not determine a home directory".to_string()))
}
