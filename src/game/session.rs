//! The game session: one player's run up the ladder.
//!
//! `Session` owns all mutable game state and is the only thing that changes
//! it. Each command checks its precondition against the current
//! [`GameState`], computes a whole new state, and swaps it in. Commands whose
//! precondition fails return a [`Rejection`] and change nothing.
//!
//! ## Pauses
//!
//! Locking in an answer and the two slow lifelines resolve after a delay.
//! These go through the [`Scheduler`]; the host moves virtual time with
//! [`Session::advance`] (or [`Session::settle`] to skip every pause). Every
//! task is stamped with the session token and question index it belongs to.
//! A reset changes the token, so nothing scheduled before it can land on the
//! new game.
//!
//! ```
//! use std::time::Duration;
//! use millionaire::{GameConfig, Session};
//! use millionaire::source::QuestionBank;
//!
//! let mut bank = QuestionBank::builtin().unwrap();
//! let mut session = Session::from_source(GameConfig::classic(), &mut bank, 42);
//!
//! let correct = session.current_question().unwrap().correct_option;
//! session.select_option(correct.index()).unwrap();
//! session.commit_final_answer().unwrap();
//!
//! session.advance(Duration::from_secs(3));
//! assert_eq!(session.state().round().unwrap().question_index, 1);
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use super::event::SessionEvent;
use super::scheduler::{Deferred, ScheduledTask, Scheduler, SessionToken};
use super::snapshot::Snapshot;
use super::state::{GameState, Round};
use crate::core::{GameConfig, GameRng, Question};
use crate::error::Rejection;
use crate::lifelines::{self, Lifeline};
use crate::source::QuestionSource;

/// One browser session's game.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    questions: Vector<Question>,
    /// Root stream; each play-through forks its own.
    rng: GameRng,
    play_rng: GameRng,
    state: GameState,
    token: SessionToken,
    scheduler: Scheduler,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Start a session over a fixed question list.
    ///
    /// An invalid config, an empty list, a list longer than the ladder, or an
    /// unplayable question leaves the session in [`GameState::NoContent`].
    pub fn new(config: GameConfig, questions: impl IntoIterator<Item = Question>, seed: u64) -> Self {
        let questions: Vector<Question> = questions.into_iter().collect();
        let mut rng = GameRng::new(seed);
        let play_rng = rng.fork();
        let state = if is_playable(&config, &questions) {
            GameState::initial()
        } else {
            GameState::NoContent
        };
        Self {
            config,
            questions,
            rng,
            play_rng,
            state,
            token: SessionToken::default(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Start a session with questions drawn from `source`.
    ///
    /// A source failure leaves the session in [`GameState::NoContent`].
    pub fn from_source<S: QuestionSource + ?Sized>(config: GameConfig, source: &mut S, seed: u64) -> Self {
        let mut draw_rng = GameRng::new(seed).for_context("questions");
        match source.fetch(&config, &mut draw_rng) {
            Ok(questions) => Self::new(config, questions, seed),
            Err(err) => {
                warn!(error = %err, "question source failed");
                Self::new(config, Vector::new(), seed)
            }
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The session's questions, in play order.
    #[must_use]
    pub fn questions(&self) -> &Vector<Question> {
        &self.questions
    }

    /// The question being played, if a game is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state
            .round()
            .and_then(|round| self.questions.get(round.question_index))
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Token of the current play-through.
    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Whether any pause is still running.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Presentation view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Events since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Pick an option (not final).
    pub fn select_option(&mut self, index: usize) -> Result<(), Rejection> {
        let next = self.playing()?.select(index);
        self.commit_round(next, "select_option")
    }

    /// Lock in the selected option. The verdict lands after the reveal delay.
    pub fn commit_final_answer(&mut self) -> Result<(), Rejection> {
        let next = self.playing()?.lock_answer();
        self.commit_round(next, "commit_final_answer")?;
        let Some(Round { question_index, selected: Some(option), .. }) = self.state.round().cloned() else {
            return Ok(());
        };
        info!(question_index, option = %option, "final answer");
        self.events.push(SessionEvent::AnswerLocked { question_index, option });
        self.schedule(self.config.reveal_delay, question_index, Deferred::Reveal);
        Ok(())
    }

    /// Leave with the banked winnings.
    pub fn walk_away(&mut self) -> Result<(), Rejection> {
        let next = match self.playing()?.walk_away(&self.config.safe_levels) {
            Ok(next) => next,
            Err(rejection) => return Err(self.reject("walk_away", rejection)),
        };
        if let Some(final_score) = next.final_score() {
            let prize = self.prize(final_score);
            info!(final_score, prize, "walked away");
            self.events.push(SessionEvent::WalkedAway { final_score, prize });
        }
        self.state = next;
        Ok(())
    }

    /// Remove two wrong answers.
    pub fn use_fifty_fifty(&mut self) -> Result<(), Rejection> {
        self.use_lifeline(Lifeline::FiftyFifty)
    }

    /// Poll the studio audience.
    pub fn use_ask_audience(&mut self) -> Result<(), Rejection> {
        self.use_lifeline(Lifeline::AskAudience)
    }

    /// Call a friend.
    pub fn use_phone_a_friend(&mut self) -> Result<(), Rejection> {
        self.use_lifeline(Lifeline::PhoneAFriend)
    }

    /// Invoke a lifeline. The result lands after its delay (50:50 has none).
    pub fn use_lifeline(&mut self, lifeline: Lifeline) -> Result<(), Rejection> {
        let round = self.playing()?;
        let question_index = round.question_index;
        let next = round.begin_lifeline(lifeline);
        self.commit_round(next, "use_lifeline")?;
        debug!(%lifeline, question_index, "lifeline requested");
        self.events.push(SessionEvent::LifelineRequested { lifeline });
        self.schedule(self.config.lifeline_delay_for(lifeline), question_index, Deferred::Lifeline(lifeline));
        Ok(())
    }

    /// Start over: fresh state, new token, pending pauses discarded.
    pub fn reset(&mut self) {
        let dropped = self.scheduler.cancel(self.token);
        self.token = self.token.next();
        self.play_rng = self.rng.fork();
        self.state = if is_playable(&self.config, &self.questions) {
            GameState::initial()
        } else {
            GameState::NoContent
        };
        info!(token = %self.token, dropped, "session reset");
        self.events.push(SessionEvent::Reset { token: self.token });
    }

    /// Start over with a new question list.
    pub fn reset_with(&mut self, questions: impl IntoIterator<Item = Question>) {
        self.questions = questions.into_iter().collect();
        self.reset();
    }

    /// Start over with questions freshly drawn from `source`.
    ///
    /// Each call draws from its own forked stream, so a fresh draw differs
    /// from the last one. A source failure leaves the session in
    /// [`GameState::NoContent`].
    pub fn reset_from_source<S: QuestionSource + ?Sized>(&mut self, source: &mut S) {
        let mut draw_rng = self.rng.fork().for_context("questions");
        match source.fetch(&self.config, &mut draw_rng) {
            Ok(questions) => self.reset_with(questions),
            Err(err) => {
                warn!(error = %err, "question source failed");
                self.reset_with(Vector::new());
            }
        }
    }

    // === Time ===

    /// Move virtual time forward, resolving whatever comes due.
    ///
    /// Returns every event since the last drain.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let due = self.scheduler.advance(elapsed);
        self.run(due);
        self.take_events()
    }

    /// Skip every pending pause.
    pub fn settle(&mut self) -> Vec<SessionEvent> {
        while !self.scheduler.is_idle() {
            let due = self.scheduler.advance_to_next();
            self.run(due);
        }
        self.take_events()
    }

    // === Internals ===

    fn playing(&self) -> Result<&Round, Rejection> {
        self.state.round().ok_or_else(|| {
            debug!(state = ?self.state, "ignored: not playing");
            Rejection::NotPlaying
        })
    }

    fn commit_round(&mut self, next: Result<Round, Rejection>, command: &'static str) -> Result<(), Rejection> {
        match next {
            Ok(round) => {
                self.state = GameState::Playing(round);
                Ok(())
            }
            Err(rejection) => Err(self.reject(command, rejection)),
        }
    }

    fn reject(&self, command: &'static str, rejection: Rejection) -> Rejection {
        debug!(command, %rejection, "ignored");
        rejection
    }

    fn prize(&self, rung: usize) -> u32 {
        self.config.ladder.prize(rung).unwrap_or(0)
    }

    /// Queue a deferred action; a zero delay resolves it right away.
    fn schedule(&mut self, delay: Duration, question_index: usize, action: Deferred) {
        self.scheduler.schedule(delay, self.token, question_index, action);
        if delay.is_zero() {
            let due = self.scheduler.advance(Duration::ZERO);
            self.run(due);
        }
    }

    fn run(&mut self, due: Vec<ScheduledTask>) {
        for task in due {
            self.fire(task);
        }
    }

    fn fire(&mut self, task: ScheduledTask) {
        let live = self
            .state
            .round()
            .filter(|round| task.token == self.token && round.question_index == task.question_index)
            .cloned();
        let Some(round) = live else {
            return self.drop_stale(task);
        };

        match task.action {
            Deferred::Reveal if round.answer_revealed => self.reveal(&round),
            Deferred::Lifeline(lifeline) if round.resolving.get(lifeline) => self.land_lifeline(&round, lifeline),
            _ => self.drop_stale(task),
        }
    }

    fn drop_stale(&mut self, task: ScheduledTask) {
        debug!(task = ?task.id, token = %task.token, question_index = task.question_index, "dropped stale resolution");
        self.events.push(SessionEvent::StaleDropped { task: task.id });
    }

    fn reveal(&mut self, round: &Round) {
        let Some(question) = self.questions.get(round.question_index) else {
            warn!(question_index = round.question_index, "no question at index");
            self.state = GameState::NoContent;
            return;
        };
        let question_index = round.question_index;
        let next = round.resolve_answer(question, self.last_index(), &self.config.safe_levels);

        if round.selected.is_some_and(|s| question.is_correct(s)) {
            self.events.push(SessionEvent::AnswerCorrect { question_index });
        } else {
            self.events.push(SessionEvent::AnswerWrong {
                question_index,
                correct: question.correct_option,
            });
        }

        match &next {
            GameState::Playing(next_round) => {
                info!(question_index = next_round.question_index, "advanced");
                self.events.push(SessionEvent::Advanced {
                    question_index: next_round.question_index,
                });
            }
            GameState::Won { final_score } => {
                let prize = self.prize(*final_score);
                info!(final_score, prize, "won");
                self.events.push(SessionEvent::Won { final_score: *final_score, prize });
            }
            GameState::Lost { final_score } => {
                let prize = self.prize(*final_score);
                info!(final_score, prize, "lost");
                self.events.push(SessionEvent::Lost { final_score: *final_score, prize });
            }
            GameState::NoContent => {}
        }
        self.state = next;
    }

    fn land_lifeline(&mut self, round: &Round, lifeline: Lifeline) {
        let Some(question) = self.questions.get(round.question_index) else {
            warn!(question_index = round.question_index, "no question at index");
            self.state = GameState::NoContent;
            return;
        };
        let result = lifelines::resolve(
            lifeline,
            &self.config,
            &mut self.play_rng,
            round.question_index,
            question.correct_option,
        );
        debug!(%lifeline, ?result, "lifeline resolved");
        self.state = GameState::Playing(round.apply_lifeline(lifeline, result));
        self.events.push(SessionEvent::LifelineResolved { lifeline });
    }
}

/// Whether a question list can be played under `config`.
fn is_playable(config: &GameConfig, questions: &Vector<Question>) -> bool {
    if let Err(err) = config.validate() {
        warn!(error = %err, "invalid game config");
        return false;
    }
    if questions.is_empty() {
        warn!("no questions available");
        return false;
    }
    if questions.len() > config.ladder.len() {
        warn!(questions = questions.len(), rungs = config.ladder.len(), "more questions than prize rungs");
        return false;
    }
    if let Some(err) = questions.iter().find_map(|q| q.validate().err()) {
        warn!(error = %err, "unplayable question");
        return false;
    }
    true
}
