use std::fmt;

/// Five-digit ZIP code. Longer inputs (ZIP+4, stray suffixes) are truncated
/// to their first five characters before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZipCode(u32);

impl ZipCode {
    pub fn parse(raw: &str) -> Result<Self, ScenarioError> {
        let trimmed = raw.trim();
        let prefix: String = trimmed.chars().take(5).collect();
        if prefix.chars().count() < 5 || !prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScenarioError::InvalidZip {
                input: raw.to_string(),
            });
        }

        prefix
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ScenarioError::InvalidZip {
                input: raw.to_string(),
            })
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("Invalid ZIP code")]
    InvalidZip { input: String },
}
