//! Content loading: local directory, remote source, embedded fallback.
//!
//! Sources are tried in precedence order and each failure is logged and
//! skipped; the embedded bundled copy always succeeds, so loading is total.

use super::model::{CommandTable, ContentError, ContentStore, Program, Project, SiteInfo};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const SITE_FILE: &str = "site.json";
const PROJECTS_FILE: &str = "projects.json";
const PROGRAMS_FILE: &str = "programs.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

static BUNDLED: Lazy<ContentStore> = Lazy::new(|| {
    assemble(
        include_str!("bundled/site.json"),
        include_str!("bundled/projects.json"),
        include_str!("bundled/programs.json"),
    )
    .expect("bundled content is valid")
});

#[derive(Deserialize)]
struct ProjectsDoc {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct ProgramsDoc {
    #[serde(default)]
    programs: Vec<Program>,
    #[serde(default)]
    commands: CommandTable,
}

/// Where to look for the three content documents, in precedence order.
#[derive(Debug, Clone, Default)]
pub struct ContentSources {
    /// Local directory containing the documents.
    pub dir: Option<std::path::PathBuf>,
    /// Base URL serving the documents. One attempt, no retry.
    pub remote_url: Option<String>,
    /// Skip the remote attempt entirely.
    pub offline: bool,
}

/// The embedded copy of the content, parsed once.
pub fn bundled() -> &'static ContentStore {
    &BUNDLED
}

/// Load content from the first source that works, falling back to the
/// bundled copy. Never fails and never surfaces an error to the user.
pub fn load(sources: &ContentSources) -> ContentStore {
    if let Some(dir) = &sources.dir {
        match load_from_dir(dir) {
            Ok(store) => {
                tracing::info!("Loaded content from {}", dir.display());
                return store;
            }
            Err(e) => {
                tracing::warn!("Failed to load content from {}: {}", dir.display(), e);
            }
        }
    }

    if !sources.offline {
        if let Some(url) = &sources.remote_url {
            match fetch_remote(url) {
                Ok(store) => {
                    tracing::info!("Loaded content from {}", url);
                    return store;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch content from {}: {}", url, e);
                }
            }
        }
    }

    tracing::debug!("Using bundled content");
    bundled().clone()
}

/// Load the three documents from a local directory.
pub fn load_from_dir(dir: &Path) -> Result<ContentStore, ContentError> {
    let read = |name: &str| -> Result<String, ContentError> {
        let path = dir.join(name);
        std::fs::read_to_string(&path)
            .map_err(|e| ContentError::IoError(format!("{}: {}", path.display(), e)))
    };

    assemble(&read(SITE_FILE)?, &read(PROJECTS_FILE)?, &read(PROGRAMS_FILE)?)
}

/// Fetch the three documents from a base URL. Any failure fails the whole
/// attempt; the caller falls back to the next source.
fn fetch_remote(base_url: &str) -> Result<ContentStore, ContentError> {
    let get = |name: &str| -> Result<String, ContentError> {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), name);
        ureq::get(&url)
            .timeout(FETCH_TIMEOUT)
            .call()
            .map_err(|e| ContentError::IoError(format!("{url}: {e}")))?
            .into_string()
            .map_err(|e| ContentError::IoError(format!("{url}: {e}")))
    };

    assemble(&get(SITE_FILE)?, &get(PROJECTS_FILE)?, &get(PROGRAMS_FILE)?)
}

fn assemble(site: &str, projects: &str, programs: &str) -> Result<ContentStore, ContentError> {
    let site: SiteInfo =
        serde_json::from_str(site).map_err(|e| ContentError::ParseError(format!("{SITE_FILE}: {e}")))?;
    let projects: ProjectsDoc = serde_json::from_str(projects)
        .map_err(|e| ContentError::ParseError(format!("{PROJECTS_FILE}: {e}")))?;
    let programs: ProgramsDoc = serde_json::from_str(programs)
        .map_err(|e| ContentError::ParseError(format!("{PROGRAMS_FILE}: {e}")))?;

    ContentStore::new(
        site,
        projects.projects,
        programs.programs,
        programs.commands,
    )
}
