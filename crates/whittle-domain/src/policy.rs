use thiserror::Error;

/// Lower length bound applied when the operator does not supply one.
pub const DEFAULT_MIN_LENGTH: usize = 7;

/// Immutable filter configuration. Built once at startup, validated before
/// any candidate is read, never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Policy {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub complexity: bool,
    pub account_names: Vec<String>,
    pub display_names: Vec<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("maximum length {max} is below minimum length {min}")]
    MaxBelowMin { min: usize, max: usize },
}

impl Policy {
    pub fn new(
        min_length: usize,
        max_length: Option<usize>,
        complexity: bool,
        account_names: Vec<String>,
        display_names: Vec<String>,
    ) -> Result<Self, PolicyError> {
        if let Some(max) = max_length
            && max < min_length
        {
            return Err(PolicyError::MaxBelowMin {
                min: min_length,
                max,
            });
        }
        Ok(Self {
            min_length,
            max_length,
            complexity,
            account_names,
            display_names,
        })
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: None,
            complexity: false,
            account_names: Vec::new(),
            display_names: Vec::new(),
        }
    }
}
