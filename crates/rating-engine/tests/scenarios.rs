//! End-to-end calculations for each federation.

use rating_core::{Federation, GameOutcome, PlayerContext, UscfProfile};
use rating_engine::{
    Classification, Ecf, EcfKFactor, EcfRequest, Fide, FideRequest, RatingResult, RatingSystem,
    Uscf, UscfRequest,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

// ---------------------------------------------------------------------------
// US Chess
// ---------------------------------------------------------------------------

#[test]
fn uscf_established_three_game_session() {
    let request = UscfRequest::new(
        PlayerContext::new(1400, 10),
        vec![
            GameOutcome::win(1450),
            GameOutcome::draw(1500),
            GameOutcome::loss(1380),
        ],
    );
    let result = Uscf.calculate(&request);

    assert_eq!(result.summary.k_factor, 32.0);
    assert!(!result.summary.is_provisional);
    assert_eq!(result.summary.expected_score, 1.32);
    assert_eq!(result.summary.actual_score, 1.5);
    assert!(close(result.summary.base_rating_change, 5.85));
    // 5.85 is below the 24-point threshold
    assert_eq!(result.bonus, 0.0);
    assert_eq!(result.summary.rating_change, 6);
    assert_eq!(result.summary.new_rating, 1406);
    assert_eq!(result.rating_without_floor, 1406);
    assert_eq!(result.initial_rating, None);

    assert_eq!(result.performance_rating.fide_method, Some(1443));
    assert_eq!(result.performance_rating.linear, Some(1443));
    assert_eq!(result.performance_rating.algorithm_400, Some(1443));
}

#[test]
fn uscf_negative_change_rounds_down() {
    let request = UscfRequest::new(PlayerContext::new(1400, 10), vec![GameOutcome::loss(1450)]);
    let result = Uscf.calculate(&request);

    assert!(close(result.summary.base_rating_change, -13.71));
    assert_eq!(result.summary.rating_change, -14);
    assert_eq!(result.summary.new_rating, 1386);
}

#[test]
fn uscf_bonus_for_strong_result() {
    let request = UscfRequest::new(
        PlayerContext::new(1400, 20),
        vec![
            GameOutcome::win(1800),
            GameOutcome::win(1850),
            GameOutcome::win(1900),
            GameOutcome::win(1950),
        ],
    );
    let result = Uscf.calculate(&request);

    assert!(close(result.summary.base_rating_change, 119.86));
    assert!(close(result.bonus, 95.86));
    assert_eq!(result.summary.rating_change, 216);
    assert_eq!(result.summary.new_rating, 1616);
    assert_eq!(result.performance_rating.fide_method, Some(2675));
}

#[test]
fn uscf_bonus_disabled() {
    let request = UscfRequest::new(
        PlayerContext::new(1400, 20),
        vec![
            GameOutcome::win(1800),
            GameOutcome::win(1850),
            GameOutcome::win(1900),
            GameOutcome::win(1950),
        ],
    )
    .with_bonus(false);
    let result = Uscf.calculate(&request);

    assert_eq!(result.bonus, 0.0);
    assert_eq!(result.summary.rating_change, 120);
}

#[test]
fn uscf_no_bonus_against_repeat_opponent() {
    let request = UscfRequest::new(
        PlayerContext::new(1400, 20),
        vec![
            GameOutcome::win(1800),
            GameOutcome::win(1800),
            GameOutcome::win(1800),
            GameOutcome::win(1900),
        ],
    );
    let result = Uscf.calculate(&request);

    assert!(close(result.summary.base_rating_change, 117.57));
    assert_eq!(result.bonus, 0.0);
    assert_eq!(result.summary.rating_change, 118);
}

#[test]
fn uscf_floor_stops_the_fall() {
    let request = UscfRequest::new(
        PlayerContext::new(1210, 20),
        vec![
            GameOutcome::loss(1200),
            GameOutcome::loss(1200).with_opponent("B"),
            GameOutcome::loss(1200).with_opponent("C"),
            GameOutcome::loss(1200).with_opponent("D"),
        ],
    )
    .with_profile(UscfProfile {
        highest_achieved_rating: Some(1450),
        ..UscfProfile::default()
    });
    let result = Uscf.calculate(&request);

    assert_eq!(result.summary.rating_change, -66);
    assert_eq!(result.rating_without_floor, 1144);
    assert_eq!(result.rating_floor, 1200);
    assert_eq!(result.summary.new_rating, 1200);
}

#[test]
fn uscf_life_master_floor() {
    let request = UscfRequest::new(PlayerContext::new(2010, 100), vec![GameOutcome::loss(2000)])
        .with_profile(UscfProfile {
            highest_achieved_rating: Some(1500),
            is_life_master: true,
            ..UscfProfile::default()
        });
    let result = Uscf.calculate(&request);

    assert_eq!(result.rating_floor, 2000);
    assert!(result.rating_without_floor < 2000);
    assert_eq!(result.summary.new_rating, 2000);
}

#[test]
fn uscf_unrated_player_seeded_from_fide() {
    let request = UscfRequest::new(PlayerContext::new(0, 0), vec![GameOutcome::win(1630)])
        .with_profile(UscfProfile {
            fide_rating: Some(1500),
            ..UscfProfile::default()
        });
    let result = Uscf.calculate(&request);

    assert_eq!(result.initial_rating, Some(1630));
    assert_eq!(result.summary.current_rating, 1630);
    assert!(result.summary.is_provisional);
    assert_eq!(result.summary.k_factor, 21.33);
    // Provisional expectation against an equal rating is exactly 0.5
    assert_eq!(result.summary.expected_score, 0.5);
    assert_eq!(result.summary.rating_change, 11);
    assert_eq!(result.summary.new_rating, 1641);
}

#[test]
fn uscf_unrated_junior_defaults_by_age() {
    let request = UscfRequest::new(PlayerContext::new(0, 0), vec![GameOutcome::draw(750)])
        .with_profile(UscfProfile {
            age: Some(12),
            ..UscfProfile::default()
        });
    let result = Uscf.calculate(&request);

    assert_eq!(result.initial_rating, Some(750));
    assert_eq!(result.summary.rating_change, 0);
    assert_eq!(result.summary.new_rating, 750);
}

// ---------------------------------------------------------------------------
// FIDE
// ---------------------------------------------------------------------------

#[test]
fn fide_fewer_than_five_games_is_provisional() {
    let request = FideRequest::new(
        PlayerContext::new(0, 0),
        vec![
            GameOutcome::win(1500),
            GameOutcome::win(1600),
            GameOutcome::draw(1700),
            GameOutcome::loss(1800),
        ],
    );
    let result = Fide.calculate(&request);

    assert!(result.summary.is_provisional);
    assert_eq!(result.summary.new_rating, 0);
    assert_eq!(result.summary.rating_change, 0);
    assert_eq!(result.summary.actual_score, 2.5);
    assert!(result.performance_rating.is_some());
}

#[test]
fn fide_new_player_uses_k_40() {
    let request = FideRequest::new(
        PlayerContext::new(1500, 3),
        vec![
            GameOutcome::win(1500),
            GameOutcome::win(1600),
            GameOutcome::loss(1700),
        ],
    );
    let result = Fide.calculate(&request);

    assert!(!result.summary.is_provisional);
    assert_eq!(result.summary.k_factor, 40.0);
    assert_eq!(result.summary.expected_score, 1.1);
    assert_eq!(result.summary.rating_change, 36);
    assert_eq!(result.summary.new_rating, 1536);
    assert_eq!(result.classification, Classification::ClassC);
    assert_eq!(result.dynamic_k_factor, 40);
}

#[test]
fn fide_established_even_score() {
    let request = FideRequest::new(
        PlayerContext::new(1600, 40),
        vec![
            GameOutcome::win(1700),
            GameOutcome::draw(1600),
            GameOutcome::loss(1500),
        ],
    );
    let result = Fide.calculate(&request);

    assert_eq!(result.summary.k_factor, 20.0);
    assert_eq!(result.summary.rating_change, 0);
    assert_eq!(result.summary.new_rating, 1600);
    assert_eq!(result.classification, Classification::ClassB);
    // 20 × 43 > 700
    assert_eq!(result.dynamic_k_factor, 16);
    assert_eq!(result.performance_rating, Some(1600));
}

#[test]
fn fide_dynamic_k_does_not_change_arithmetic() {
    let request = FideRequest::new(PlayerContext::new(1600, 100), vec![GameOutcome::loss(1600)]);
    let result = Fide.calculate(&request);

    assert_eq!(result.dynamic_k_factor, 6);
    assert_eq!(result.summary.k_factor, 20.0);
    assert_eq!(result.summary.rating_change, -10);
}

#[test]
fn fide_elite_k_factor() {
    let request = FideRequest::new(PlayerContext::new(2450, 200), vec![GameOutcome::win(2450)]);
    let result = Fide.calculate(&request);

    assert_eq!(result.summary.k_factor, 10.0);
    assert_eq!(result.summary.rating_change, 5);
    assert_eq!(result.classification, Classification::InternationalMaster);
}

// ---------------------------------------------------------------------------
// ECF
// ---------------------------------------------------------------------------

#[test]
fn ecf_documented_example() {
    let request = EcfRequest::new(150, vec![GameOutcome::win(100)]);
    let result = Ecf.calculate(&request);

    assert_eq!(result.summary.expected_score, 0.91);
    assert_eq!(result.summary.rating_change, 4);
    assert_eq!(result.summary.new_rating, 154);
    assert_eq!(result.summary.k_factor, 40.0);
}

#[test]
fn ecf_session_aggregates_chained_steps() {
    let request = EcfRequest::new(150, vec![GameOutcome::loss(150), GameOutcome::loss(150)])
        .with_k_factor(EcfKFactor::Standard);
    let result = Ecf.calculate(&request);

    assert_eq!(result.summary.total_games, 2);
    assert_eq!(result.summary.new_rating, 119);
    assert_eq!(result.summary.rating_change, -31);
    assert_eq!(result.summary.actual_score, 0.0);
    assert_eq!(result.summary.expected_score, 0.78);
}

// ---------------------------------------------------------------------------
// Tagged results
// ---------------------------------------------------------------------------

#[test]
fn rate_tags_results_by_federation() {
    let games = vec![GameOutcome::win(1500)];

    let uscf = Uscf.rate(&UscfRequest::new(PlayerContext::new(1500, 20), games.clone()));
    let fide = Fide.rate(&FideRequest::new(PlayerContext::new(1500, 20), games.clone()));
    let ecf = Ecf.rate(&EcfRequest::new(150, games));

    assert_eq!(uscf.federation(), Federation::Uscf);
    assert_eq!(fide.federation(), Federation::Fide);
    assert_eq!(ecf.federation(), Federation::Ecf);
    assert!(matches!(uscf, RatingResult::Uscf(_)));
    assert_eq!(Uscf.federation(), Federation::Uscf);
}

#[test]
fn identical_requests_give_identical_results() {
    let request = UscfRequest::new(
        PlayerContext::new(1723, 31),
        vec![GameOutcome::win(1810), GameOutcome::draw(1655)],
    );
    assert_eq!(Uscf.calculate(&request), Uscf.calculate(&request));
}

#[test]
fn uscf_result_serializes_camel_case() {
    let request = UscfRequest::new(PlayerContext::new(1400, 10), vec![GameOutcome::win(1450)]);
    let json = serde_json::to_value(Uscf.rate(&request)).unwrap();

    assert_eq!(json["federation"], "uscf");
    assert_eq!(json["kFactor"], 32.0);
    assert!(json.get("ratingWithoutFloor").is_some());
    assert!(json["performanceRating"].get("fideMethod").is_some());
    assert!(json.get("initialRating").is_none());
}
