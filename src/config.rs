use serde::Deserialize;

use crate::types::Color;

/// Per-game settings supplied by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub black_name: String,
    pub white_name: String,
}

impl GameConfig {
    pub fn new(black_name: impl Into<String>, white_name: impl Into<String>) -> Self {
        Self {
            black_name: black_name.into(),
            white_name: white_name.into(),
        }
    }

    pub fn name_of(&self, color: Color) -> &str {
        match color {
            Color::Black => &self.black_name,
            Color::White => &self.white_name,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new("Peter", "Amanda")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_filled_in() {
        let config = GameConfig::default();

        assert_eq!(config.name_of(Color::Black), "Peter");
        assert_eq!(config.name_of(Color::White), "Amanda");
    }

    #[test]
    fn custom_names_follow_their_color() {
        let config = GameConfig::new("Kat", "Rob");

        assert_eq!(config.name_of(Color::Black), "Kat");
        assert_eq!(config.name_of(Color::White), "Rob");
    }
}
