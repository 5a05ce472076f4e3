use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::errors::{RouterError, RouterResult};
use crate::method::HttpMethod;
use crate::pattern::{
    Args, PatternResult, SegmentExpr, Specificity, WILDCARD_SPECIFICITY, compile_pattern,
    match_segments, route_specificity,
};

#[derive(Debug)]
enum CompiledPattern {
    /// The single-character pattern `*`: matches every path, captures
    /// nothing.
    Wildcard,
    Segments(Vec<SegmentExpr>),
}

/// One registered path pattern with its per-method handler bindings.
///
/// Created when a pattern is first registered, extended by later
/// registrations adding more methods, never removed.
#[derive(Debug)]
pub struct RouteEntry<T> {
    pattern: Box<str>,
    compiled: CompiledPattern,
    specificity: Specificity,
    handlers: HashMap<HttpMethod, T>,
}

impl<T> RouteEntry<T> {
    pub(crate) fn compile(pattern: &str) -> PatternResult<Self> {
        let (compiled, specificity) = if pattern == "*" {
            (CompiledPattern::Wildcard, WILDCARD_SPECIFICITY)
        } else {
            let exprs = compile_pattern(pattern)?;
            let specificity = route_specificity(&exprs);
            (CompiledPattern::Segments(exprs), specificity)
        };

        Ok(Self {
            pattern: pattern.into(),
            compiled,
            specificity,
            handlers: HashMap::new(),
        })
    }

    pub(crate) fn bind(&mut self, method: HttpMethod, handler: T) -> RouterResult<()> {
        match self.handlers.entry(method) {
            Entry::Occupied(_) => Err(RouterError::RouteAlreadyDefined {
                method,
                pattern: self.pattern.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    pub(crate) fn matches(&self, segments: &[String]) -> Option<Args> {
        match &self.compiled {
            CompiledPattern::Wildcard => Some(Args::new()),
            CompiledPattern::Segments(exprs) => match_segments(exprs, segments),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn handler(&self, method: HttpMethod) -> Option<&T> {
        self.handlers.get(&method)
    }

    pub fn allowed_methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.handlers.keys().copied()
    }
}
