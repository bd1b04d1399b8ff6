use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Fixed parameters of a difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    /// Number of digits in the secret and in every guess
    pub digit_count: usize,
    /// Scored guesses allowed before the game is lost
    pub max_tries: u32,
}

impl Difficulty {
    /// All levels in menu order
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn config(&self) -> DifficultyConfig {
        let (digit_count, max_tries) = match self {
            Difficulty::Easy => (3, 12),
            Difficulty::Medium => (4, 10),
            Difficulty::Hard => (5, 8),
            Difficulty::Expert => (6, 6),
        };
        DifficultyConfig {
            digit_count,
            max_tries,
        }
    }

    pub fn digit_count(&self) -> usize {
        self.config().digit_count
    }

    pub fn max_tries(&self) -> u32 {
        self.config().max_tries
    }

    /// Lowercase name, as stored in the statistics file
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Map a menu token ("1".."4") to a level
    pub fn from_menu_choice(choice: &str) -> Option<Difficulty> {
        match choice.trim() {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            "4" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_table() {
        assert_eq!(Difficulty::Easy.config(), DifficultyConfig { digit_count: 3, max_tries: 12 });
        assert_eq!(Difficulty::Medium.config(), DifficultyConfig { digit_count: 4, max_tries: 10 });
        assert_eq!(Difficulty::Hard.config(), DifficultyConfig { digit_count: 5, max_tries: 8 });
        assert_eq!(Difficulty::Expert.config(), DifficultyConfig { digit_count: 6, max_tries: 6 });
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(Difficulty::from_menu_choice("1"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_menu_choice(" 4 "), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_menu_choice("5"), None);
        assert_eq!(Difficulty::from_menu_choice("easy"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let parsed: Difficulty = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(parsed, Difficulty::Expert);
    }
}
