use crate::error::{Result, SeolensError};
use crate::types::signals::PageSignals;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const STDIN_PATH: &str = "-";

/// Browser-internal pages the extractor cannot be injected into.
const UNSUPPORTED_SCHEMES: [&str; 4] = ["chrome", "about", "edge", "brave"];

pub fn load_signals(path: &Path) -> Result<PageSignals> {
    let raw = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(SeolensError::PathNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(path)?
    };
    debug!(bytes = raw.len(), source = %path.display(), "signals read");
    parse_signals(&raw)
}

/// Any JSON object is accepted; only non-object payloads are rejected.
pub fn parse_signals(raw: &str) -> Result<PageSignals> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(SeolensError::InvalidSignals(
            "expected a JSON object of page signals".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn ensure_analyzable(signals: &PageSignals) -> Result<()> {
    let full = signals.url.full.trim();
    let scheme = full
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme {
        Some(scheme) if UNSUPPORTED_SCHEMES.contains(&scheme.as_str()) => {
            Err(SeolensError::UnsupportedPage(full.to_string()))
        }
        _ => Ok(()),
    }
}
