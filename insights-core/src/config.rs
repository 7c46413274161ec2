use crate::error::ConfigError;

/// Tunable thresholds for the anomaly heuristics.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Titles with fewer characters than this are flagged
    pub short_title_len: usize,
    /// Number of consecutive sorted post ids examined per burst window
    pub burst_window: usize,
    /// A window spanning fewer than this many ids counts as a burst
    pub burst_span: u64,
    /// Title pairs with an LCS ratio above this are considered similar
    pub similarity_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            short_title_len: 15,
            burst_window: 5,
            burst_span: 5,
            similarity_threshold: 0.85,
        }
    }
}

impl ClassifierConfig {
    /// Read threshold overrides from the environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("INSIGHTS_SHORT_TITLE_LEN") {
            config.short_title_len = parse_var("INSIGHTS_SHORT_TITLE_LEN", &raw)?;
        }
        if let Ok(raw) = std::env::var("INSIGHTS_BURST_WINDOW") {
            config.burst_window = parse_var("INSIGHTS_BURST_WINDOW", &raw)?;
        }
        if let Ok(raw) = std::env::var("INSIGHTS_BURST_SPAN") {
            config.burst_span = parse_var("INSIGHTS_BURST_SPAN", &raw)?;
        }
        if let Ok(raw) = std::env::var("INSIGHTS_SIMILARITY_THRESHOLD") {
            config.similarity_threshold = parse_var("INSIGHTS_SIMILARITY_THRESHOLD", &raw)?;
        }
        config.ensure_valid()?;
        Ok(config)
    }

    /// Reject unusable thresholds: every count-based tunable must be at
    /// least one.
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let counts = [
            ("INSIGHTS_SHORT_TITLE_LEN", self.short_title_len as u64),
            ("INSIGHTS_BURST_WINDOW", self.burst_window as u64),
            ("INSIGHTS_BURST_SPAN", self.burst_span),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: "0".to_string(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn parse_var<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
    })
}
