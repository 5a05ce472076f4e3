//! A brace-pattern URL router: maps `(method, path)` to a registered
//! handler plus the positional arguments captured from the path.
//!
//! Patterns are `/`-delimited templates whose segments mix literal text
//! with `{regex-fragment}` captures; the single-character pattern `*`
//! matches any path. When several patterns match a path, the most
//! specific one wins: more segments beat fewer, and literal segments
//! beat captures within equal counts.
//!
//! Registration happens under `&mut` during startup; serving only needs
//! `&self`, so a finished table can be shared freely across request
//! workers.

pub mod errors;
mod handler;
mod method;
mod path;
pub mod pattern;
mod route;

pub use errors::{RouterError, RouterResult};
pub use handler::Handler;
pub use method::{HttpMethod, UnknownMethod};
pub use pattern::{Args, PatternError, Specificity, match_pattern};
pub use route::RouteEntry;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use tracing::debug;

use crate::path::split_segments;

/// The route table: pattern string to entry, insertion order irrelevant.
/// Lookup is exhaustive and ranked, not first-match.
#[derive(Debug)]
pub struct Router<T> {
    routes: HashMap<Box<str>, RouteEntry<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful path match: the winning entry and its captured
/// arguments. The caller picks the handler for the request method, which
/// keeps "no path matched" distinct from "path matched, wrong method".
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    entry: &'r RouteEntry<T>,
    args: Args,
}

impl<'r, T> RouteMatch<'r, T> {
    pub fn pattern(&self) -> &'r str {
        self.entry.pattern()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Args {
        self.args
    }

    pub fn handler(&self, method: HttpMethod) -> Option<&'r T> {
        self.entry.handler(method)
    }

    pub fn allowed_methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.entry.allowed_methods()
    }
}

/// Outcome of a full dispatch, method check included.
#[derive(Debug)]
pub enum RouteOutcome<'r, T> {
    Found { handler: &'r T, args: Args },
    MethodNotAllowed { allowed: Vec<HttpMethod> },
    NotFound,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Registers a handler for `(pattern, method)`. The pattern is
    /// compiled on first registration, so a bad capture fragment fails
    /// here rather than mid-traffic. Binding the same method to the same
    /// pattern twice is a configuration error.
    pub fn add(&mut self, pattern: &str, method: HttpMethod, handler: T) -> RouterResult<()> {
        let entry = match self.routes.entry(Box::from(pattern)) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => slot.insert(RouteEntry::compile(pattern)?),
        };

        entry.bind(method, handler)?;
        debug!(pattern, method = %method, "route registered");
        Ok(())
    }

    /// Matches a request path against every registered pattern and
    /// returns the highest-specificity match with its captured
    /// arguments, or `None` if nothing matches.
    ///
    /// Equal specificity ties break toward the lexicographically
    /// smaller pattern string, so the result never depends on table
    /// iteration order.
    #[tracing::instrument(level = "trace", skip(self), fields(routes = self.routes.len() as u64))]
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let segments = split_segments(path);

        let mut best: Option<RouteMatch<'_, T>> = None;
        for entry in self.routes.values() {
            let Some(args) = entry.matches(&segments) else {
                continue;
            };

            let better = match &best {
                None => true,
                Some(current) => {
                    entry.specificity() > current.entry.specificity()
                        || (entry.specificity() == current.entry.specificity()
                            && entry.pattern() < current.entry.pattern())
                }
            };
            if better {
                best = Some(RouteMatch { entry, args });
            }
        }

        best
    }

    /// `find` plus the per-method handler check, folded into one
    /// three-way outcome for dispatch loops.
    pub fn route(&self, method: HttpMethod, path: &str) -> RouteOutcome<'_, T> {
        match self.find(path) {
            None => RouteOutcome::NotFound,
            Some(found) => match found.entry.handler(method) {
                Some(handler) => RouteOutcome::Found {
                    handler,
                    args: found.args,
                },
                None => {
                    let mut allowed: Vec<HttpMethod> = found.entry.allowed_methods().collect();
                    allowed.sort_by_key(|m| m.as_str());
                    RouteOutcome::MethodNotAllowed { allowed }
                }
            },
        }
    }
}
