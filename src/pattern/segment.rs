use regex::Regex;
use smallvec::SmallVec;

use super::error::{PatternError, PatternResult};
use super::lexer::tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Capture(String),
}

pub type TokenList = SmallVec<[Token; 4]>;

/// One compiled `/`-delimited segment of a route pattern.
///
/// Compiled once at registration and immutable afterwards. The anchored
/// regex is built by escaping literal tokens verbatim and wrapping each
/// capture fragment in a group, so the whole candidate segment must match.
#[derive(Debug, Clone)]
pub struct SegmentExpr {
    source: Box<str>,
    tokens: TokenList,
    regex: Regex,
}

impl SegmentExpr {
    pub fn compile(segment: &str) -> PatternResult<Self> {
        let tokens = tokenize(segment);

        let mut pattern = String::with_capacity(segment.len() + 8);
        pattern.push('^');
        for token in &tokens {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Capture(fragment) => {
                    pattern.push('(');
                    pattern.push_str(fragment);
                    pattern.push(')');
                }
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| PatternError::InvalidCaptureRegex {
            segment: segment.to_string(),
            source,
        })?;

        Ok(Self {
            source: segment.into(),
            tokens,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for SegmentExpr {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for SegmentExpr {}

/// Compiles every segment of a full path pattern, leading and trailing
/// slashes ignored. The empty pattern compiles to a single empty segment,
/// which matches only the root path.
pub fn compile_pattern(pattern: &str) -> PatternResult<Vec<SegmentExpr>> {
    pattern
        .trim_matches('/')
        .split('/')
        .map(SegmentExpr::compile)
        .collect()
}
