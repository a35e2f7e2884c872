//! Per-call strategy selection.
//!
//! Each algorithm family has two interchangeable implementations. The enums
//! here pick one; JS callers pass the lowercase name as a string.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How `depth_first` walks the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthFirstStrategy {
    /// Call-stack recursion. Can overflow on very deep graphs.
    Recursive,
    /// Explicit LIFO stack.
    #[default]
    Iterative,
}

/// How island flood fill expands from a seed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloodFill {
    #[default]
    DepthFirst,
    BreadthFirst,
}

/// How top-k selection picks the most frequent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Min-heap bounded at k entries, O(N log k).
    #[default]
    Heap,
    /// Frequency buckets, O(N).
    Bucket,
}

impl FromStr for DepthFirstStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(DepthFirstStrategy::Recursive),
            "iterative" => Ok(DepthFirstStrategy::Iterative),
            other => Err(SearchError::invalid_argument(format!(
                "unknown depth-first strategy: {other} (expected: recursive or iterative)"
            ))),
        }
    }
}

impl FromStr for FloodFill {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(FloodFill::DepthFirst),
            "breadth-first" | "bfs" => Ok(FloodFill::BreadthFirst),
            other => Err(SearchError::invalid_argument(format!(
                "unknown flood fill: {other} (expected: depth-first or breadth-first)"
            ))),
        }
    }
}

impl FromStr for Selection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heap" => Ok(Selection::Heap),
            "bucket" => Ok(Selection::Bucket),
            other => Err(SearchError::invalid_argument(format!(
                "unknown selection: {other} (expected: heap or bucket)"
            ))),
        }
    }
}

impl fmt::Display for DepthFirstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DepthFirstStrategy::Recursive => "recursive",
            DepthFirstStrategy::Iterative => "iterative",
        })
    }
}

impl fmt::Display for FloodFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloodFill::DepthFirst => "depth-first",
            FloodFill::BreadthFirst => "breadth-first",
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Selection::Heap => "heap",
            Selection::Bucket => "bucket",
        })
    }
}

/// Parse an optional strategy name coming from JS, falling back to the default.
pub(crate) fn parse_or_default<T>(name: Option<String>) -> Result<T, SearchError>
where
    T: FromStr<Err = SearchError> + Default,
{
    match name {
        Some(name) => name.parse(),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DepthFirstStrategy::default(), DepthFirstStrategy::Iterative);
        assert_eq!(FloodFill::default(), FloodFill::DepthFirst);
        assert_eq!(Selection::default(), Selection::Heap);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Recursive".parse::<DepthFirstStrategy>().unwrap(),
            DepthFirstStrategy::Recursive
        );
        assert_eq!("bfs".parse::<FloodFill>().unwrap(), FloodFill::BreadthFirst);
        assert_eq!(
            "depth-first".parse::<FloodFill>().unwrap(),
            FloodFill::DepthFirst
        );
        assert_eq!("bucket".parse::<Selection>().unwrap(), Selection::Bucket);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "quickselect".parse::<Selection>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for s in [DepthFirstStrategy::Recursive, DepthFirstStrategy::Iterative] {
            assert_eq!(s.to_string().parse::<DepthFirstStrategy>().unwrap(), s);
        }
        for s in [FloodFill::DepthFirst, FloodFill::BreadthFirst] {
            assert_eq!(s.to_string().parse::<FloodFill>().unwrap(), s);
        }
    }

    #[test]
    fn test_parse_or_default() {
        let s: Selection = parse_or_default(None).unwrap();
        assert_eq!(s, Selection::Heap);
        let s: Selection = parse_or_default(Some("bucket".to_string())).unwrap();
        assert_eq!(s, Selection::Bucket);
    }

    #[test]
    fn test_serde_names() {
        let s: FloodFill = serde_json::from_str("\"breadth-first\"").unwrap();
        assert_eq!(s, FloodFill::BreadthFirst);
        assert_eq!(
            serde_json::to_string(&DepthFirstStrategy::Recursive).unwrap(),
            "\"recursive\""
        );
    }
}
