use super::segment::{SegmentExpr, Token};

pub type Specificity = u32;

/// Score of the wildcard pattern `*`: matches everything, outranked by
/// every concrete pattern.
pub const WILDCARD_SPECIFICITY: Specificity = 0;

/// Literal tokens outrank captures of equal count, since they narrow the
/// match more.
pub fn segment_specificity(expr: &SegmentExpr) -> Specificity {
    expr.tokens()
        .iter()
        .map(|token| match token {
            Token::Literal(_) => 10,
            Token::Capture(_) => 1,
        })
        .sum()
}

/// Route-level score. The per-segment base of 100 biases toward patterns
/// with more segments; literal-vs-capture is the finer tie-break within
/// equal segment counts.
pub fn route_specificity(exprs: &[SegmentExpr]) -> Specificity {
    1 + exprs
        .iter()
        .map(|expr| 100 + segment_specificity(expr))
        .sum::<Specificity>()
}
