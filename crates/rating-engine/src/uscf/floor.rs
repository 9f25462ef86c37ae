//! US Chess rating floors.

use rating_core::UscfProfile;

/// Floor guaranteed to Life Masters.
pub const LIFE_MASTER_FLOOR: i32 = 2000;

/// Reduction applied to a senior's floor.
const SENIOR_REDUCTION: i32 = 100;

/// Lowest floor a senior reduction can leave.
const SENIOR_MINIMUM: i32 = 100;

/// (highest achieved rating, floor) steps, highest first.
const FLOOR_STEPS: [(i32, i32); 6] = [
    (2200, 2000),
    (2000, 1800),
    (1800, 1600),
    (1600, 1400),
    (1400, 1200),
    (1200, 1000),
];

/// Floor earned by having reached `highest`, before title and age adjustments.
pub fn step_floor(highest: i32) -> i32 {
    FLOOR_STEPS
        .iter()
        .find(|(threshold, _)| highest >= *threshold)
        .map_or(0, |(_, floor)| *floor)
}

/// Calculate the player's rating floor.
///
/// An absent highest rating earns no step floor.
pub fn rating_floor(profile: &UscfProfile) -> i32 {
    let mut floor = step_floor(profile.highest_achieved_rating.unwrap_or(0));

    if profile.is_life_master && floor < LIFE_MASTER_FLOOR {
        floor = LIFE_MASTER_FLOOR;
    }

    if profile.is_senior() && floor > 0 {
        floor = (floor - SENIOR_REDUCTION).max(SENIOR_MINIMUM);
    }

    floor
}

/// Applies the floor to a computed rating.
pub fn apply_floor(rating: i32, floor: i32) -> i32 {
    rating.max(floor)
}
