use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// Positions order row-major (`y` first, then `x`), which is also the order in
/// which boards are generated and iterated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given offsets.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Canonical `"x,y"` string form of this coordinate.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_comma_separated() {
        assert_eq!(Position::new(3, 7).key(), "3,7");
        assert_eq!(Position::new(-1, 0).key(), "-1,0");
    }

    #[test]
    fn ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(2, 0),
            Position::new(0, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
