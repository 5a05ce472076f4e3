use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("capture in segment '{segment}' is not a valid regular expression: {source}")]
    InvalidCaptureRegex {
        segment: String,
        #[source]
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
