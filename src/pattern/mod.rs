mod error;
mod lexer;
mod matcher;
mod scoring;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::tokenize;
pub use matcher::{Args, match_segment, match_segments};
pub use scoring::{Specificity, WILDCARD_SPECIFICITY, route_specificity, segment_specificity};
pub use segment::{SegmentExpr, Token, TokenList, compile_pattern};

use crate::path::split_segments;

/// Matches one full pattern against one request path without a route
/// table, for callers that keep their own pattern lists. The wildcard
/// pattern `*` matches any path with no arguments.
pub fn match_pattern(pattern: &str, path: &str) -> PatternResult<Option<Args>> {
    if pattern == "*" {
        return Ok(Some(Args::new()));
    }

    let exprs = compile_pattern(pattern)?;
    Ok(match_segments(&exprs, &split_segments(path)))
}
