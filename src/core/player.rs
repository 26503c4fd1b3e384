//! The two sides of a round.
//!
//! Outcomes are always stated from the player's perspective; `Side`
//! names which tally component an outcome increments and which choice
//! display a renderer highlights.

use serde::{Deserialize, Serialize};

/// Player or computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Computer];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Iterate over both sides.
    ///
    /// ```
    /// use rust_rps::core::Side;
    ///
    /// let sides: Vec<_> = Side::all().collect();
    /// assert_eq!(sides, vec![Side::Player, Side::Computer]);
    /// ```
    pub fn all() -> impl Iterator<Item = Side> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
        for side in Side::all() {
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "Player");
        assert_eq!(format!("{}", Side::Computer), "Computer");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Side::Computer).unwrap();
        assert_eq!(json, "\"computer\"");
        let back: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Side::Computer);
    }
}
