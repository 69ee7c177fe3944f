//! Question source integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use millionaire::core::{Difficulty, GameConfig, GameRng};
use millionaire::error::SourceError;
use millionaire::game::{GameState, Session, Status};
use millionaire::source::{CachedSource, QuestionBank, QuestionSet, QuestionSource, TieredResponse};

/// Source that always fails.
struct Broken;

impl QuestionSource for Broken {
    fn fetch(&mut self, _config: &GameConfig, _rng: &mut GameRng) -> Result<QuestionSet, SourceError> {
        Err(SourceError::NotEnoughQuestions {
            difficulty: Difficulty::Easy,
            needed: 5,
            available: 0,
        })
    }
}

/// Wraps a bank and counts fetches.
struct Counting {
    bank: QuestionBank,
    fetches: usize,
}

impl QuestionSource for Counting {
    fn fetch(&mut self, config: &GameConfig, rng: &mut GameRng) -> Result<QuestionSet, SourceError> {
        self.fetches += 1;
        self.bank.fetch(config, rng)
    }
}

/// Test that the built-in bank yields a playable easy-to-hard session.
#[test]
fn test_session_from_builtin_bank() {
    let mut bank = QuestionBank::builtin().unwrap();
    let session = Session::from_source(GameConfig::classic(), &mut bank, 42);

    assert_eq!(session.state(), &GameState::initial());
    assert_eq!(session.questions().len(), 15);
    assert_eq!(session.questions()[0].difficulty, Difficulty::Easy);
    assert_eq!(session.questions()[14].difficulty, Difficulty::Hard);
}

/// Test that a fixed seed draws the same questions.
#[test]
fn test_same_seed_same_questions() {
    let mut bank = QuestionBank::builtin().unwrap();
    let a = Session::from_source(GameConfig::classic(), &mut bank, 7);
    let b = Session::from_source(GameConfig::classic(), &mut bank, 7);
    assert_eq!(a.questions(), b.questions());
}

/// Test that a failing source leaves the session with no content.
#[test]
fn test_failed_source_is_no_content() {
    let mut session = Session::from_source(GameConfig::classic(), &mut Broken, 1);
    assert_eq!(session.state(), &GameState::NoContent);
    assert_eq!(session.snapshot().status, Status::NoContent);
    assert!(session.snapshot().question.is_none());
    assert!(session.select_option(0).is_err());
}

/// Test that an empty bank leaves the session with no content.
#[test]
fn test_empty_bank_is_no_content() {
    let session = Session::from_source(GameConfig::classic(), &mut QuestionBank::new(), 1);
    assert_eq!(session.state(), &GameState::NoContent);
}

/// Test that new questions recover a no-content session.
#[test]
fn test_reset_with_new_questions_recovers() {
    let mut session = Session::from_source(GameConfig::classic(), &mut Broken, 1);
    let mut bank = QuestionBank::builtin().unwrap();
    let questions = bank.fetch(session.config(), &mut GameRng::new(2)).unwrap();

    session.reset_with(questions);
    assert_eq!(session.state(), &GameState::initial());
}

/// Test that the cache serves one set until the TTL runs out.
#[test]
fn test_cache_reuses_within_ttl() {
    let start = Instant::now();
    let offset = Arc::new(AtomicU64::new(0));
    let clock = {
        let offset = Arc::clone(&offset);
        move || start + Duration::from_secs(offset.load(Ordering::SeqCst))
    };
    let inner = Counting { bank: QuestionBank::builtin().unwrap(), fetches: 0 };
    let mut source = CachedSource::with_clock(inner, Duration::from_secs(60), clock);
    let config = GameConfig::classic();

    let first = source.fetch(&config, &mut GameRng::new(1)).unwrap();
    offset.store(60, Ordering::SeqCst);
    let second = source.fetch(&config, &mut GameRng::new(2)).unwrap();
    assert_eq!(first, second);
    assert_eq!(source.inner().fetches, 1);

    offset.store(61, Ordering::SeqCst);
    source.fetch(&config, &mut GameRng::new(3)).unwrap();
    assert_eq!(source.inner().fetches, 2);

    source.invalidate();
    source.fetch(&config, &mut GameRng::new(4)).unwrap();
    assert_eq!(source.inner().fetches, 3);
}

/// Test that play-again draws from the source, reusing the cached set within the TTL.
#[test]
fn test_reset_from_source_redraws_after_ttl() {
    let start = Instant::now();
    let offset = Arc::new(AtomicU64::new(0));
    let clock = {
        let offset = Arc::clone(&offset);
        move || start + Duration::from_secs(offset.load(Ordering::SeqCst))
    };
    let mut source = CachedSource::with_clock(QuestionBank::builtin().unwrap(), Duration::from_secs(60), clock);

    let mut session = Session::from_source(GameConfig::classic(), &mut source, 5);
    let first = session.questions().clone();
    session.walk_away().unwrap();

    offset.store(30, Ordering::SeqCst);
    session.reset_from_source(&mut source);
    assert_eq!(session.state(), &GameState::initial());
    assert_eq!(session.questions(), &first);

    offset.store(61, Ordering::SeqCst);
    session.reset_from_source(&mut source);
    assert_eq!(session.state(), &GameState::initial());
    assert_eq!(session.questions().len(), 15);
    assert_ne!(session.questions(), &first);
}

/// Test that play-again from a failing source ends in no content.
#[test]
fn test_reset_from_failed_source_is_no_content() {
    let mut bank = QuestionBank::builtin().unwrap();
    let mut session = Session::from_source(GameConfig::classic(), &mut bank, 5);
    session.reset_from_source(&mut Broken);
    assert_eq!(session.state(), &GameState::NoContent);
    assert!(session.questions().is_empty());
}

/// Test that a failed fetch is not cached.
#[test]
fn test_cache_does_not_store_failures() {
    let mut source = CachedSource::new(Broken);
    let config = GameConfig::classic();
    assert!(source.fetch(&config, &mut GameRng::new(1)).is_err());
    assert!(source.fetch(&config, &mut GameRng::new(1)).is_err());
}

/// Test that a tiered endpoint response plays end to end.
#[test]
fn test_tiered_response_feeds_session() {
    let row = |id: u32, difficulty: &str| {
        format!(
            r#"{{"id": {id}, "question": "Q{id}?", "option_a": "w", "option_b": "x", "option_c": "y", "option_d": "z", "correct_answer": "b", "difficulty": "{difficulty}"}}"#
        )
    };
    let json = format!(
        r#"{{"easy": [{}], "medium": [{}], "hard": [{}]}}"#,
        row(1, "easy"),
        row(2, "medium"),
        row(3, "hard")
    );
    let questions = TieredResponse::from_json(&json).unwrap().into_questions().unwrap();

    let mut session = Session::new(GameConfig::classic().instant(), questions, 5);
    for _ in 0..3 {
        session.select_option(1).unwrap();
        session.commit_final_answer().unwrap();
    }
    assert_eq!(session.state(), &GameState::Won { final_score: 2 });
}
