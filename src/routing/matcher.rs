//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse declared route paths into patterns
//! - Split request locations into segments
//! - Match a pattern against the front of a segment list
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - One trailing slash is tolerated, nothing else is normalised
//! - Empty segments ("//") never match a static segment

/// A single route pattern as declared in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// The root layout, `/`. Consumes nothing.
    Root,
    /// One or more exact segments, e.g. `case-studies` or `test/error`.
    Static(Vec<String>),
    /// Matches exactly the parent path.
    Index,
    /// `*`, matches anything no sibling matched.
    CatchAll,
}

impl PathPattern {
    /// Parse a declared path.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => PathPattern::Root,
            "*" | "/*" => PathPattern::CatchAll,
            other => PathPattern::Static(
                other
                    .trim_matches('/')
                    .split('/')
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Root and static patterns take part in prefix matching.
    pub fn is_prefix(&self) -> bool {
        matches!(self, PathPattern::Root | PathPattern::Static(_))
    }

    /// Number of segments this pattern consumes.
    pub fn static_len(&self) -> usize {
        match self {
            PathPattern::Static(segments) => segments.len(),
            _ => 0,
        }
    }

    /// Strip this pattern from the front of `segments`, returning the rest.
    pub fn strip<'a, 'b>(&self, segments: &'a [&'b str]) -> Option<&'a [&'b str]> {
        match self {
            PathPattern::Root => Some(segments),
            PathPattern::Static(expected) => {
                if segments.len() < expected.len() {
                    return None;
                }
                let matched = expected
                    .iter()
                    .zip(segments.iter())
                    .all(|(want, got)| want == got);
                matched.then(|| &segments[expected.len()..])
            }
            PathPattern::Index | PathPattern::CatchAll => None,
        }
    }

    /// Append this pattern to an already-matched base path.
    pub fn join(&self, base: &str) -> String {
        let tail = match self {
            PathPattern::Root | PathPattern::Index => return base.to_string(),
            PathPattern::Static(segments) => segments.join("/"),
            PathPattern::CatchAll => "*".to_string(),
        };
        if base.ends_with('/') {
            format!("{}{}", base, tail)
        } else {
            format!("{}/{}", base, tail)
        }
    }
}

/// Split a location into path segments.
///
/// The leading slash and at most one trailing slash are dropped; `/`
/// yields no segments.
pub fn split_location(location: &str) -> Vec<&str> {
    let path = location.strip_prefix('/').unwrap_or(location);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        assert_eq!(PathPattern::parse("/"), PathPattern::Root);
        assert_eq!(PathPattern::parse("*"), PathPattern::CatchAll);
        assert_eq!(
            PathPattern::parse("test/error"),
            PathPattern::Static(vec!["test".into(), "error".into()])
        );
    }

    #[test]
    fn test_split_location() {
        assert!(split_location("/").is_empty());
        assert_eq!(split_location("/services"), vec!["services"]);
        assert_eq!(split_location("/services/"), vec!["services"]);
        assert_eq!(split_location("/test/error"), vec!["test", "error"]);
        // Only one trailing slash is forgiven.
        assert_eq!(split_location("/services//"), vec!["services", ""]);
    }

    #[test]
    fn test_strip_is_case_sensitive() {
        let pattern = PathPattern::parse("about");
        let lower = split_location("/about");
        let upper = split_location("/About");
        assert_eq!(pattern.strip(&lower), Some(&[][..]));
        assert_eq!(pattern.strip(&upper), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(PathPattern::parse("services").join("/"), "/services");
        assert_eq!(PathPattern::parse("error").join("/test"), "/test/error");
        assert_eq!(PathPattern::Index.join("/test"), "/test");
        assert_eq!(PathPattern::CatchAll.join("/"), "/*");
    }
}
