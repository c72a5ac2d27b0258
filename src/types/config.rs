use crate::error::SeolensError;
use crate::types::report::Priority;
use crate::types::scoring::{Score, MAX_SCORE};
use serde::Deserialize;

pub const SUPPORTED_FORMATS: [&str; 3] = ["md", "json", "sarif"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeolensConfig {
    pub report: Option<ReportConfig>,
    pub tips: Option<TipsConfig>,
    pub gate: Option<GateConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipsConfig {
    pub min_priority: Option<Priority>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub fail_under: Option<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl SeolensConfig {
    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn min_priority(&self) -> Priority {
        self.tips
            .as_ref()
            .and_then(|tips| tips.min_priority)
            .unwrap_or(Priority::Low)
    }

    pub fn fail_under(&self) -> Option<Score> {
        self.gate.as_ref().and_then(|gate| gate.fail_under)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), SeolensError> {
        if let Some(format) = self.report_format() {
            if !SUPPORTED_FORMATS.contains(&format) {
                return Err(SeolensError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected one of {})",
                    SUPPORTED_FORMATS.join(", ")
                )));
            }
        }

        if let Some(fail_under) = self.fail_under() {
            if fail_under > MAX_SCORE {
                return Err(SeolensError::ConfigParse(format!(
                    "gate.fail_under must be between 0 and {MAX_SCORE} (found {fail_under})"
                )));
            }
        }

        if let Some(level) = self.log_level() {
            if level.trim().is_empty() {
                return Err(SeolensError::ConfigParse(
                    "logging.level cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
