//! Integration tests for the RPS-Plus referee
//!
//! Tests the full stack: validation, resolution, state machine, bots and
//! referee text, through the public API of rpsplus-core.

use rpsplus_core::{
    apply, referee, resolve, validate, FinalResult, GameError, GameState, InvalidReason, Move,
    MoveLabel, MoveSource, RandomBot, Referee, RoundOutcome, ScriptedSource, ValidationResult,
    Verdict, MAX_ROUNDS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Validate both tokens against `state`, resolve, apply
fn play(state: GameState, user: &str, bot: &str) -> (GameState, RoundOutcome) {
    let outcome = resolve(
        &validate(user, state.user_bomb_used()),
        &validate(bot, state.bot_bomb_used()),
    );
    let next = apply(state, &outcome).expect("round should apply");
    (next, outcome)
}

const TOKENS: &[&str] = &["rock", "paper", "scissors", "bomb", "banana", " Rock ", "BOMB", ""];

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_scenario_rock_beats_scissors() {
    let (state, outcome) = play(GameState::new(), "rock", "scissors");
    assert_eq!(outcome.verdict(), Verdict::UserWins);
    assert_eq!((state.user_score(), state.bot_score()), (1, 0));
    assert_eq!(state.round(), 1);
}

#[test]
fn test_scenario_invalid_token_wastes_round() {
    let (state, _) = play(GameState::new(), "rock", "scissors");
    let (state, outcome) = play(state, "banana", "paper");

    assert_eq!(outcome.verdict(), Verdict::Wasted);
    assert_eq!((state.user_score(), state.bot_score()), (1, 0));
    assert_eq!(state.round(), 2);
    assert_eq!(state.history()[1].user, MoveLabel::Invalid);
    assert_eq!(state.history()[1].bot, MoveLabel::Played(Move::Paper));
}

#[test]
fn test_scenario_first_bomb_wins() {
    let (state, outcome) = play(GameState::new(), "bomb", "rock");
    assert_eq!(outcome.verdict(), Verdict::UserWins);
    assert!(state.user_bomb_used());
}

#[test]
fn test_scenario_second_bomb_rejected() {
    let (state, _) = play(GameState::new(), "bomb", "rock");

    assert_eq!(
        validate("bomb", state.user_bomb_used()),
        ValidationResult::Invalid(InvalidReason::BombReused)
    );

    for bot in ["rock", "paper", "scissors", "bomb"] {
        let (after, outcome) = play(state.clone(), "bomb", bot);
        assert_eq!(outcome.verdict(), Verdict::Wasted, "bot played {}", bot);
        assert_eq!(after.user_score(), state.user_score());
        assert!(after.user_bomb_used());
    }
}

#[test]
fn test_scenario_one_all_is_a_draw() {
    let (state, _) = play(GameState::new(), "rock", "scissors");
    let (state, _) = play(state, "rock", "paper");
    let (state, _) = play(state, "nonsense", "rock");

    assert!(state.is_over());
    assert_eq!((state.user_score(), state.bot_score()), (1, 1));
    assert_eq!(state.final_result(), Some(FinalResult::Draw));
    assert!(referee::final_summary(&state).contains("Result: Draw!"));
}

#[test]
fn test_scenario_fourth_apply_fails() {
    let mut state = GameState::new();
    for _ in 0..MAX_ROUNDS {
        state = play(state, "paper", "paper").0;
    }
    assert!(state.is_over());

    let outcome = resolve(&validate("rock", false), &validate("rock", false));
    assert_eq!(
        apply(state.clone(), &outcome).unwrap_err(),
        GameError::InvalidTransition { round: 3 }
    );
    assert_eq!(state.history().len(), 3);
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// Random token games keep every state invariant
#[test]
fn test_random_games_hold_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..300 {
        let mut state = GameState::new();

        while !state.is_over() {
            let user = TOKENS[rng.gen_range(0..TOKENS.len())];
            let bot = TOKENS[rng.gen_range(0..TOKENS.len())];
            let before = state.clone();

            let (next, outcome) = play(state, user, bot);

            assert_eq!(next.round(), before.round() + 1);
            assert_eq!(next.history().len(), next.round() as usize);
            assert_eq!(next.is_over(), next.round() >= MAX_ROUNDS);
            assert!(next.user_score() >= before.user_score());
            assert!(next.bot_score() >= before.bot_score());
            // Bomb flags never reset
            assert!(next.user_bomb_used() || !before.user_bomb_used());
            assert!(next.bot_bomb_used() || !before.bot_bomb_used());

            if outcome.is_wasted() || outcome.verdict() == Verdict::Draw {
                assert_eq!(next.user_score(), before.user_score());
                assert_eq!(next.bot_score(), before.bot_score());
            }

            // Flag flips only on a legally played bomb
            if next.user_bomb_used() && !before.user_bomb_used() {
                assert_eq!(outcome.user_validation(), ValidationResult::Valid(Move::Bomb));
            }
            if next.bot_bomb_used() && !before.bot_bomb_used() {
                assert_eq!(outcome.bot_validation(), ValidationResult::Valid(Move::Bomb));
            }

            state = next;
        }

        assert_eq!(state.round(), MAX_ROUNDS);
        assert_eq!(state.history().len(), MAX_ROUNDS as usize);
    }
}

#[test]
fn test_history_round_numbers() {
    let (state, _) = play(GameState::new(), "rock", "paper");
    let (state, _) = play(state, "huh", "paper");
    let (state, _) = play(state, "bomb", "bomb");

    let rounds: Vec<u8> = state.history().iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![1, 2, 3]);
    assert_eq!(state.history()[2].outcome, Verdict::Draw);
    assert!(state.user_bomb_used() && state.bot_bomb_used());
}

// ============================================================================
// REFEREE AND BOTS
// ============================================================================

#[test]
fn test_random_bot_respects_bomb_across_games() {
    for seed in 0..50 {
        let mut referee = Referee::new(RandomBot::with_seed(seed));
        while !referee.is_over() {
            let report = referee.play_turn("paper").unwrap();
            // Random bot never triggers its own bomb-reuse rejection
            assert_ne!(report.record.bot, MoveLabel::Invalid);
        }
        let bombs = referee
            .state()
            .history()
            .iter()
            .filter(|r| r.bot == MoveLabel::Played(Move::Bomb))
            .count();
        assert!(bombs <= 1);
    }
}

#[test]
fn test_bot_vs_bot_game_completes() {
    let mut user = RandomBot::with_seed(11);
    let mut referee = Referee::new(RandomBot::with_seed(12));

    while !referee.is_over() {
        let token = user.next_token(referee.state().user_bomb_used()).unwrap();
        referee.play_turn(&token).unwrap();
    }

    let state = referee.into_state();
    assert!(state.final_result().is_some());
    assert!(state.history().iter().all(|r| r.outcome != Verdict::Wasted));
}

#[test]
fn test_turn_reports_carry_messages_and_snapshots() {
    let mut referee = Referee::new(ScriptedSource::new(["paper", "rock", "bomb"]));

    let report = referee.play_turn("scissors").unwrap();
    assert_eq!(report.message, "Round 1: You win! scissors beats paper.\nScore: You 1 | Bot 0");
    assert_eq!(report.state.round(), 1);

    let report = referee.play_turn("bomb").unwrap();
    assert!(report.message.starts_with("Round 2: You win! bomb beats rock."));

    let report = referee.play_turn("bomb").unwrap();
    assert_eq!(report.record.outcome, Verdict::Wasted);
    assert!(report.state.is_over());
    assert!(report.state.bot_bomb_used());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["state"]["round"], 3);
    assert_eq!(json["record"]["user"], "invalid");
}
