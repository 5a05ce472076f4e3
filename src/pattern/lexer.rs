use memchr::memchr;

use super::segment::{Token, TokenList};

/// Splits one path segment into literal runs and `{...}` captures.
///
/// An opening brace with no matching close is not an error: the remainder
/// of the segment, brace included, becomes a literal token.
#[tracing::instrument(level = "trace", skip(segment), fields(segment = %segment))]
pub fn tokenize(segment: &str) -> TokenList {
    let mut tokens = TokenList::new();
    let mut rest = segment;

    while !rest.is_empty() {
        let bytes = rest.as_bytes();

        if bytes[0] == b'{' {
            if let Some(close) = memchr(b'}', bytes) {
                tokens.push(Token::Capture(rest[1..close].to_string()));
                rest = &rest[close + 1..];
                continue;
            }

            tokens.push(Token::Literal(rest.to_string()));
            break;
        }

        let end = memchr(b'{', bytes).unwrap_or(rest.len());
        tokens.push(Token::Literal(rest[..end].to_string()));
        rest = &rest[end..];
    }

    tokens
}
