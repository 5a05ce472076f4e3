use thiserror::Error;

use crate::method::HttpMethod;
use crate::pattern::PatternError;

/// Registration-time failures. Both variants indicate a broken route
/// table and should abort application startup rather than be ignored.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route {method} {pattern} is already defined")]
    RouteAlreadyDefined {
        method: HttpMethod,
        pattern: String,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RouterResult<T> = Result<T, RouterError>;
