pub mod json;
pub mod md;
pub mod sarif;

use crate::error::SeolensError;
use crate::types::report::AnalysisReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, SeolensError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SeolensError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(SeolensError::Json),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::analyze::Engine;
    use crate::types::report::AnalysisReport;
    use crate::types::signals::fixtures::ideal_signals;

    /// Ideal page with the viewport and canonical tags removed.
    pub fn sample_report() -> AnalysisReport {
        let mut signals = ideal_signals();
        signals.viewport.exists = false;
        signals.canonical.exists = false;
        Engine::default().analyze(&signals)
    }
}
