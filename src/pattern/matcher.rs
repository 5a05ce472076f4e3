use smallvec::SmallVec;

use super::segment::SegmentExpr;

/// Positional arguments extracted from a matched path, in segment order.
pub type Args = SmallVec<[String; 4]>;

/// Matches one decoded request segment against a compiled expression.
///
/// The expression's regex is anchored at both ends, so partial matches
/// never count. Returns the captured group values in order; a group that
/// did not participate in the match yields an empty string.
#[tracing::instrument(level = "trace", skip(expr), fields(pattern = %expr.source()))]
pub fn match_segment(expr: &SegmentExpr, candidate: &str) -> Option<Args> {
    let captures = expr.regex().captures(candidate)?;

    let mut args = Args::new();
    for group in captures.iter().skip(1) {
        args.push(group.map(|m| m.as_str().to_string()).unwrap_or_default());
    }

    Some(args)
}

/// Matches a sequence of compiled segments against the decoded request
/// segments. Segment counts must agree exactly; capture lists from all
/// segments are flattened left to right.
pub fn match_segments(exprs: &[SegmentExpr], segments: &[String]) -> Option<Args> {
    if exprs.len() != segments.len() {
        return None;
    }

    let mut args = Args::new();
    for (expr, segment) in exprs.iter().zip(segments) {
        args.extend(match_segment(expr, segment)?);
    }

    Some(args)
}
