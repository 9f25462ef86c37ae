//! The player's state before a rated session.

use serde::{Deserialize, Serialize};

/// Rating and game history shared by every federation's calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerContext {
    /// Current rating; 0 means unrated.
    pub current_rating: i32,
    /// Number of rated games played before this session.
    #[serde(default)]
    pub prior_game_count: u32,
}

impl PlayerContext {
    pub const fn new(current_rating: i32, prior_game_count: u32) -> Self {
        PlayerContext {
            current_rating,
            prior_game_count,
        }
    }

    /// Returns true if the player has neither a rating nor any rated games.
    #[inline]
    pub const fn is_unrated(&self) -> bool {
        self.current_rating == 0 && self.prior_game_count == 0
    }
}

/// Optional USCF inputs affecting initial ratings and rating floors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UscfProfile {
    /// Highest rating the player has ever held.
    pub highest_achieved_rating: Option<i32>,
    /// Player's age in years.
    pub age: Option<u32>,
    /// FIDE rating, used to seed an unrated player.
    pub fide_rating: Option<i32>,
    /// Chess Federation of Canada rating, used to seed an unrated player.
    pub cfc_rating: Option<i32>,
    /// Holder of the Life Master title.
    pub is_life_master: bool,
}

impl UscfProfile {
    /// Age from which the senior floor reduction applies.
    pub const SENIOR_AGE: u32 = 65;

    /// Returns true if the player qualifies as a senior.
    pub fn is_senior(&self) -> bool {
        self.age.is_some_and(|age| age >= Self::SENIOR_AGE)
    }
}
