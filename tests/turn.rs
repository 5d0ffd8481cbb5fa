//! Integration tests for the turn controller: scoring, busy gating and reset.

use rock_paper_scissors_web::{
    MatchState, Outcome, ScriptedGenerator, Sign, TurnController, TurnError,
    OPPONENT_THINKING_GLYPH, PLAYER_THINKING_GLYPH, UNKNOWN_GLYPH,
};

fn controller_against(opponent: Sign) -> TurnController<ScriptedGenerator> {
    TurnController::new(ScriptedGenerator::always(opponent))
}

#[test]
fn starts_empty() {
    let c = controller_against(Sign::Rock);
    assert_eq!(c.state(), &MatchState::new());
    assert!(!c.state().is_busy());
    assert_eq!(c.state().outcome(), None);
}

#[test]
fn rock_beats_scissors() {
    let mut c = controller_against(Sign::Scissors);
    assert_eq!(c.play(Sign::Rock), Ok(Outcome::Win));
    let s = c.state();
    assert_eq!(s.player, Some(Sign::Rock));
    assert_eq!(s.opponent, Some(Sign::Scissors));
    assert_eq!(s.outcome(), Some(Outcome::Win));
    assert_eq!((s.player_score, s.opponent_score), (1, 0));
}

#[test]
fn paper_ties_paper_without_scoring() {
    let mut c = TurnController::new(ScriptedGenerator::new(vec![Sign::Rock, Sign::Paper]));
    c.play(Sign::Paper).unwrap();
    assert_eq!((c.state().player_score, c.state().opponent_score), (1, 0));

    assert_eq!(c.play(Sign::Paper), Ok(Outcome::Tie));
    assert_eq!((c.state().player_score, c.state().opponent_score), (1, 0));
}

#[test]
fn scissors_loses_to_rock() {
    let mut c = controller_against(Sign::Rock);
    assert_eq!(c.play(Sign::Scissors), Ok(Outcome::Lose));
    assert_eq!((c.state().player_score, c.state().opponent_score), (0, 1));
}

#[test]
fn selection_while_resolving_is_ignored() {
    let mut c = controller_against(Sign::Scissors);
    let ticket = c.select_sign(Sign::Rock).unwrap();
    assert!(c.state().is_busy());
    assert_eq!(c.state().outcome(), None);

    let before = c.state().clone();
    assert_eq!(c.select_sign(Sign::Paper), Err(TurnError::Busy));
    assert_eq!(c.state(), &before);

    assert_eq!(c.complete_turn(ticket), Ok(Outcome::Win));
    assert_eq!(c.state().player, Some(Sign::Rock));
    assert!(!c.state().is_busy());
}

#[test]
fn ticket_resolves_only_once() {
    let mut c = controller_against(Sign::Scissors);
    let ticket = c.select_sign(Sign::Rock).unwrap();
    c.complete_turn(ticket).unwrap();
    assert_eq!(c.complete_turn(ticket), Err(TurnError::StaleTurn));
    assert_eq!(c.state().player_score, 1);
}

#[test]
fn new_turn_clears_previous_opponent() {
    let mut c = controller_against(Sign::Scissors);
    c.play(Sign::Rock).unwrap();
    c.select_sign(Sign::Paper).unwrap();
    assert_eq!(c.state().player, Some(Sign::Paper));
    assert_eq!(c.state().opponent, None);
}

#[test]
fn reset_clears_scores_and_signs() {
    let mut c = TurnController::new(ScriptedGenerator::new(vec![Sign::Scissors, Sign::Rock]));
    c.play(Sign::Rock).unwrap();
    c.play(Sign::Scissors).unwrap();
    assert_eq!((c.state().player_score, c.state().opponent_score), (1, 1));

    assert_eq!(c.reset(), None);
    assert_eq!(c.state(), &MatchState::new());
    assert_eq!(c.state().outcome(), None);
}

#[test]
fn reset_cancels_pending_turn() {
    let mut c = controller_against(Sign::Scissors);
    let ticket = c.select_sign(Sign::Rock).unwrap();
    assert_eq!(c.reset(), Some(ticket));
    assert_eq!(c.complete_turn(ticket), Err(TurnError::StaleTurn));
    assert_eq!(c.state(), &MatchState::new());

    // A fresh turn after the reset gets its own ticket and resolves normally.
    let next = c.select_sign(Sign::Rock).unwrap();
    assert_ne!(next, ticket);
    assert_eq!(c.complete_turn(next), Ok(Outcome::Win));
}

#[test]
fn view_shows_thinking_and_result() {
    let mut c = controller_against(Sign::Rock);
    let v = c.view();
    assert_eq!((v.player_glyph, v.opponent_glyph), (UNKNOWN_GLYPH, UNKNOWN_GLYPH));
    assert_eq!(v.result, None);

    let ticket = c.select_sign(Sign::Paper).unwrap();
    let v = c.view();
    assert!(v.busy);
    assert_eq!((v.player_glyph, v.opponent_glyph), (PLAYER_THINKING_GLYPH, OPPONENT_THINKING_GLYPH));

    c.complete_turn(ticket).unwrap();
    let v = c.view();
    assert!(!v.busy);
    assert_eq!(v.outcome, Some(Outcome::Win));
    assert_eq!(v.result, Some("You Win! 🎉"));
    assert_eq!((v.player_glyph, v.opponent_glyph), (Sign::Paper.glyph(), Sign::Rock.glyph()));
}

#[test]
fn view_serializes_for_the_page() {
    let mut c = controller_against(Sign::Paper);
    c.play(Sign::Paper).unwrap();
    let json = serde_json::to_value(c.view()).unwrap();
    assert_eq!(json["player"], "paper");
    assert_eq!(json["opponent"], "paper");
    assert_eq!(json["outcome"], "tie");
    assert_eq!(json["result"], "It's a Tie! 🤝");
    assert_eq!(json["busy"], false);
    assert_eq!(json["player_score"], 0);
}
