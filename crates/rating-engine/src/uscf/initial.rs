//! Starting ratings for unrated US Chess players.

use rating_core::UscfProfile;

/// Rating assigned when nothing else is known.
pub const DEFAULT_INITIAL_RATING: i32 = 1300;

/// (upper age bound, rating) buckets for juniors.
const AGE_BUCKETS: [(u32, i32); 3] = [(10, 600), (15, 750), (20, 900)];

/// Converts a FIDE rating to a US Chess starting rating.
pub fn from_fide(fide: i32) -> i32 {
    (f64::from(fide) * 1.02 + 100.0).round() as i32
}

/// Converts a CFC rating to a US Chess starting rating.
pub fn from_cfc(cfc: i32) -> i32 {
    cfc + 50
}

/// Default starting rating by age.
pub fn from_age(age: u32) -> i32 {
    AGE_BUCKETS
        .iter()
        .find(|(limit, _)| age < *limit)
        .map_or(DEFAULT_INITIAL_RATING, |(_, rating)| *rating)
}

/// Picks a starting rating, preferring a FIDE conversion, then CFC, then age.
pub fn initial_rating(profile: &UscfProfile) -> i32 {
    if let Some(fide) = profile.fide_rating {
        from_fide(fide)
    } else if let Some(cfc) = profile.cfc_rating {
        from_cfc(cfc)
    } else if let Some(age) = profile.age {
        from_age(age)
    } else {
        DEFAULT_INITIAL_RATING
    }
}
