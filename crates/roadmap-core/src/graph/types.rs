use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::RoadmapError;

/// Vertex index into the graph's dense vertex array
pub type VertexId = usize;

/// Turn taken when traversing an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Straight,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Straight,
        Direction::Back,
    ];

    /// Token used in map files and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Straight => "straight",
            Direction::Back => "back",
        }
    }

    /// Label for the same road travelled the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Straight => Direction::Back,
            Direction::Back => Direction::Straight,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = RoadmapError;

    /// Tokens are case-sensitive, matching the persisted map format.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match Direction::ALL.into_iter().find(|d| d.as_str() == s) {
            Some(direction) => Ok(direction),
            None => bail_invalid!("direction (expected: right, left, straight, back)", s),
        }
    }
}

/// Directed edge owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: u32,
    pub direction: Direction,
}

impl Edge {
    pub fn new(to: VertexId, weight: u32, direction: Direction) -> Self {
        Self {
            to,
            weight,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        for direction in Direction::ALL {
            let parsed: Direction = direction.as_str().parse().unwrap();
            assert_eq!(parsed, direction);
            assert_eq!(direction.to_string(), direction.as_str());
        }
    }

    #[test]
    fn test_direction_parse_is_case_sensitive() {
        assert!("Right".parse::<Direction>().is_err());
        assert!("STRAIGHT".parse::<Direction>().is_err());
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_parse_error_names_token() {
        let err = "up".parse::<Direction>().unwrap_err();
        assert!(err.to_string().contains("up"));
        assert!(err.to_string().contains("straight"));
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Straight.opposite(), Direction::Back);
        assert_eq!(Direction::Back.opposite(), Direction::Straight);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Straight).unwrap();
        assert_eq!(json, "\"straight\"");
    }
}
