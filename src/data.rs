//! Report document loading.
//!
//! One fetch per page lifetime: the document comes from an `http(s)` URL or
//! a local path, parses into [`AppData`], and the result drives the app's
//! load state. A failed load is terminal — there is no retry; restarting the
//! app is the recovery path.
use crate::types::AppData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed report document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Page-level load state. `Loading` is entered exactly once; there is no
/// `Error → Ready` transition.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Arc<AppData>),
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Data source: first CLI argument, or `data.json` next to the executable,
/// or plain `data.json` in the working directory as a last resort.
pub fn default_source() -> String {
    if let Some(arg) = std::env::args().nth(1) {
        return arg;
    }
    std::env::current_exe()
        .ok()
        .map(|exe| exe.with_file_name("data.json"))
        .filter(|p| p.exists())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string())
}

/// Fetch and parse the report document.
pub async fn load(source: &str) -> Result<AppData, LoadError> {
    info!("loading report data from {source}");
    let data = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source).await?
    } else {
        read_local(Path::new(source))?
    };
    info!(
        stats = data.stats.len(),
        charts = data.charts.len(),
        gallery = data.gallery.len(),
        "report data loaded"
    );
    Ok(data)
}

async fn fetch_remote(url: &str) -> Result<AppData, LoadError> {
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Err(LoadError::Status(resp.status()));
    }
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

fn read_local(path: &Path) -> Result<AppData, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Run a load to completion and fold the outcome into a [`LoadState`].
/// Both paths leave `Loading`; the loading overlay keys off that.
pub async fn load_into_state(source: &str) -> LoadState {
    match load(source).await {
        Ok(data) => LoadState::Ready(Arc::new(data)),
        Err(e) => {
            error!("report load failed: {e}");
            LoadState::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn local_load_parses_document() {
        let dir = std::env::temp_dir().join("relief-report-test-load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("data.json");
        std::fs::write(
            &path,
            r#"{"stats": {"beneficiaries": 52000}, "gallery": []}"#,
        )
        .unwrap();
        let data = read_local(&path).unwrap();
        assert_eq!(data.stat("beneficiaries"), Some(52000));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_local(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = std::env::temp_dir().join("relief-report-test-load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = read_local(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn failed_load_folds_to_error_state() {
        let state = load_into_state("/nonexistent/data.json").await;
        assert!(matches!(state, LoadState::Error(_)));
        assert!(!state.is_loading());
    }
}
