//! Word list loading.
//!
//! A word list is newline-separated rounds of comma-separated words, read
//! from a local file or fetched over HTTP(S). Loading never fails the game:
//! any problem is logged and the built-in suite is used instead.

use std::{io, time::Duration};

use thiserror::Error;
use vocon_words::{WordsSuite, parse_words_suite, sanitize_words_suite};

/// Upper bound for a remote fetch, connect to last byte.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Word list fetch errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Remote list could not be fetched.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the raw text of a word list from a path or an `http(s)://` URL.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the request fails,
/// times out or answers with a non-success status.
pub async fn fetch_words(source: &str) -> Result<String, SourceError> {
    if !is_remote(source) {
        return Ok(tokio::fs::read_to_string(source).await?);
    }

    tracing::debug!("Fetching word list from {}", source);

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let text = client.get(source).send().await?.error_for_status()?.text().await?;

    Ok(text)
}

/// Load the words suite named by `source`, or the built-in one.
///
/// Unusable words and empty rounds are dropped. If nothing is left, or the
/// source cannot be read at all, the built-in suite is returned.
pub async fn load_suite(source: Option<&str>) -> WordsSuite {
    let Some(source) = source else {
        return WordsSuite::default();
    };

    match fetch_words(source).await {
        Ok(text) => {
            let suite = sanitize_words_suite(parse_words_suite(&text));
            tracing::info!(rounds = suite.len(), source, "loaded words suite");
            suite
        },
        Err(e) => {
            tracing::warn!(source, "failed to load word list, using built-in suite: {e}");
            WordsSuite::default()
        },
    }
}
