//! Route table and lookup.
//!
//! # Responsibilities
//! - Store the declared route tree
//! - Validate its structure once, at construction
//! - Resolve a location to exactly one entry, or an explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(n) scan per level (the tree is a dozen entries)
//! - Explicit NotFound rather than a silent default

use std::cmp::Reverse;

use serde::Serialize;
use thiserror::Error;

use crate::pages::PageKey;
use crate::routing::matcher::{split_location, PathPattern};

/// A declared route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: PathPattern,
    module: Option<PageKey>,
    children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// A layout entry that only groups children, e.g. the `/` chrome.
    pub fn layout(path: &str, children: Vec<RouteEntry>) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            module: None,
            children,
        }
    }

    /// A leaf page at `path`.
    pub fn page(path: &str, module: PageKey) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            module: Some(module),
            children: Vec::new(),
        }
    }

    /// A pathless group of nested routes under `path`.
    pub fn group(path: &str, children: Vec<RouteEntry>) -> Self {
        Self::layout(path, children)
    }

    /// The page shown at exactly the parent path.
    pub fn index(module: PageKey) -> Self {
        Self {
            pattern: PathPattern::Index,
            module: Some(module),
            children: Vec::new(),
        }
    }

    /// The match of last resort at its level.
    pub fn catch_all(module: PageKey) -> Self {
        Self {
            pattern: PathPattern::CatchAll,
            module: Some(module),
            children: Vec::new(),
        }
    }
}

/// The entry a location resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Full declared pattern, e.g. `/test/error` or `/*`.
    pub pattern: String,
    /// Page module to load.
    pub module: PageKey,
    /// True when only the catch-all matched.
    pub catch_all: bool,
}

/// Outcome of a route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    NotFound,
}

impl Resolution {
    pub fn matched(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NotFound => None,
        }
    }
}

/// Structural problems in a route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("more than one catch-all route under {0}")]
    DuplicateCatchAll(String),

    #[error("more than one index route under {0}")]
    DuplicateIndex(String),

    #[error("route {0} is declared twice")]
    DuplicatePath(String),

    #[error("route {0} has neither a page module nor children")]
    Empty(String),

    #[error("index and catch-all routes under {0} cannot have children")]
    LeafWithChildren(String),
}

/// Immutable route tree.
#[derive(Debug, Clone)]
pub struct RouteTable {
    roots: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and freeze a route declaration.
    pub fn new(roots: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        validate_level(&roots, "/")?;
        Ok(Self { roots })
    }

    /// Resolve a location to the single entry that matches it.
    pub fn resolve(&self, location: &str) -> Resolution {
        let segments = split_location(location);
        match match_level(&self.roots, &segments, "/") {
            Some(found) => Resolution::Matched(found),
            None => Resolution::NotFound,
        }
    }

    /// Every concrete (non catch-all) path with the module it shows.
    pub fn paths(&self) -> Vec<(String, PageKey)> {
        let mut out = Vec::new();
        collect_paths(&self.roots, "/", &mut out);
        out
    }

    /// Concrete path for a module, if it is routable.
    pub fn path_of(&self, key: PageKey) -> Option<String> {
        self.paths()
            .into_iter()
            .find(|(_, module)| *module == key)
            .map(|(path, _)| path)
    }
}

fn match_level(entries: &[RouteEntry], segments: &[&str], base: &str) -> Option<RouteMatch> {
    let mut candidates: Vec<&RouteEntry> =
        entries.iter().filter(|e| e.pattern.is_prefix()).collect();
    // Stable sort keeps declaration order between equal lengths.
    candidates.sort_by_key(|e| Reverse(e.pattern.static_len()));

    for entry in candidates {
        let Some(rest) = entry.pattern.strip(segments) else {
            continue;
        };
        let path = entry.pattern.join(base);
        if let Some(found) = match_level(&entry.children, rest, &path) {
            return Some(found);
        }
        if rest.is_empty() {
            if let Some(module) = entry.module {
                return Some(RouteMatch {
                    pattern: path,
                    module,
                    catch_all: false,
                });
            }
        }
    }

    if segments.is_empty() {
        let index = entries.iter().find(|e| e.pattern == PathPattern::Index);
        if let Some(module) = index.and_then(|e| e.module) {
            return Some(RouteMatch {
                pattern: base.to_string(),
                module,
                catch_all: false,
            });
        }
    }

    entries
        .iter()
        .find(|e| e.pattern == PathPattern::CatchAll)
        .and_then(|e| {
            e.module.map(|module| RouteMatch {
                pattern: PathPattern::CatchAll.join(base),
                module,
                catch_all: true,
            })
        })
}

fn validate_level(entries: &[RouteEntry], base: &str) -> Result<(), RouteTableError> {
    let mut seen: Vec<&PathPattern> = Vec::new();
    let mut catch_alls = 0;
    let mut indexes = 0;

    for entry in entries {
        let path = entry.pattern.join(base);
        match &entry.pattern {
            PathPattern::CatchAll | PathPattern::Index => {
                if entry.pattern == PathPattern::CatchAll {
                    catch_alls += 1;
                    if catch_alls > 1 {
                        return Err(RouteTableError::DuplicateCatchAll(base.to_string()));
                    }
                } else {
                    indexes += 1;
                    if indexes > 1 {
                        return Err(RouteTableError::DuplicateIndex(base.to_string()));
                    }
                }
                if !entry.children.is_empty() {
                    return Err(RouteTableError::LeafWithChildren(base.to_string()));
                }
                if entry.module.is_none() {
                    return Err(RouteTableError::Empty(path));
                }
            }
            PathPattern::Root | PathPattern::Static(_) => {
                if seen.contains(&&entry.pattern) {
                    return Err(RouteTableError::DuplicatePath(path));
                }
                seen.push(&entry.pattern);
                if entry.module.is_none() && entry.children.is_empty() {
                    return Err(RouteTableError::Empty(path));
                }
                validate_level(&entry.children, &path)?;
            }
        }
    }
    Ok(())
}

fn collect_paths(entries: &[RouteEntry], base: &str, out: &mut Vec<(String, PageKey)>) {
    for entry in entries {
        match &entry.pattern {
            PathPattern::CatchAll => {}
            PathPattern::Index => {
                if let Some(module) = entry.module {
                    out.push((base.to_string(), module));
                }
            }
            PathPattern::Root | PathPattern::Static(_) => {
                let path = entry.pattern.join(base);
                if let Some(module) = entry.module {
                    out.push((path.clone(), module));
                }
                collect_paths(&entry.children, &path, out);
            }
        }
    }
}
