use super::ValueFormatter;

/// Abbreviates large values with thousand-step suffixes (`1k`, `5m`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeValueFormatter {
    pub suffix: Vec<String>,
    /// Text appended after the suffix.
    pub appendix: Option<String>,
}

impl Default for LargeValueFormatter {
    fn default() -> Self {
        Self {
            suffix: ["", "k", "m", "b", "t"].iter().map(|s| (*s).to_owned()).collect(),
            appendix: None,
        }
    }
}

impl LargeValueFormatter {
    #[must_use]
    pub fn with_appendix(appendix: impl Into<String>) -> Self {
        Self {
            appendix: Some(appendix.into()),
            ..Self::default()
        }
    }
}

impl ValueFormatter for LargeValueFormatter {
    fn string_for_value(&self, value: f64) -> String {
        let max_length = self.suffix.len().saturating_sub(1);
        let mut sig = value;
        let mut length = 0;
        while sig >= 1000.0 && length < max_length {
            sig /= 1000.0;
            length += 1;
        }

        let mut out = format!("{sig:2.0}");
        if let Some(suffix) = self.suffix.get(length) {
            out.push_str(suffix);
        }
        if let Some(appendix) = &self.appendix {
            out.push_str(appendix);
        }
        out
    }
}
