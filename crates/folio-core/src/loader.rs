//! Project list loading: status checks, BOM-tolerant parsing, store update.
//!
//! The network half lives in the host. This module decides what a response
//! means and what the page shows afterwards.
//!
//! # Failure Modes
//!
//! | Condition | Error | Store |
//! |-----------|-------|-------|
//! | Non-2xx status | `LoadError::Network` | unset |
//! | Fetch rejected | `LoadError::Transport` | unset |
//! | Body is not a valid project array | `LoadError::Parse` | unset |

use std::fmt;

use crate::messages::Messages;
use crate::project::ProjectRecord;
use crate::store::ProjectStore;

/// Relative resource name of the project list.
pub const DEFAULT_RESOURCE: &str = "projects.json";

const BOM: char = '\u{FEFF}';

/// Why the project list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The server answered with a non-success status.
    Network {
        status: u16,
        status_text: String,
        url: String,
    },
    /// The request never produced a response.
    Transport(String),
    /// The body was not a JSON array of project records.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network {
                status,
                status_text,
                url,
            } => write!(f, "HTTP {status} {status_text} - {url}"),
            Self::Transport(msg) => f.write_str(msg),
            Self::Parse(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Reject non-success responses.
pub fn check_status(status: u16, status_text: &str, url: &str) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(LoadError::Network {
        status,
        status_text: status_text.to_string(),
        url: url.to_string(),
    })
}

/// Drop one leading byte-order mark. A BOM anywhere else is left for the
/// JSON parser.
#[must_use]
pub fn strip_bom(body: &str) -> &str {
    body.strip_prefix(BOM).unwrap_or(body)
}

/// Parse the response body into project records.
pub fn parse_projects(body: &str) -> Result<Vec<ProjectRecord>, LoadError> {
    Ok(serde_json::from_str(strip_bom(body))?)
}

/// Text shown in the load-error region.
#[must_use]
pub fn failure_text(messages: &Messages, err: &LoadError) -> String {
    format!("{}: {err}", messages.load_failed)
}

/// Apply a load result to the store.
///
/// On success the store is populated and `Ok` carries the loaded count. On
/// failure the store is left untouched and `Err` carries the text for the
/// error region.
pub fn finish_load(
    store: &mut ProjectStore,
    result: Result<Vec<ProjectRecord>, LoadError>,
    messages: &Messages,
) -> Result<usize, String> {
    match result {
        Ok(projects) => {
            let count = projects.len();
            store.populate(projects);
            tracing::info!(count, "projects loaded");
            Ok(count)
        }
        Err(err) => {
            tracing::error!(error = %err, "project load failed");
            Err(failure_text(messages, &err))
        }
    }
}
