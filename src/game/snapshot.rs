//! Read-only presentation view.
//!
//! A [`Snapshot`] carries everything a front end needs to draw the board
//! after any command: the question and per-option highlight flags, lifeline
//! buttons, lifeline results, the prize ladder, and the end screen. It is
//! computed fresh from the session; nothing in it feeds back into play.

use serde::Serialize;

use super::session::Session;
use super::state::GameState;
use crate::core::{format_prize, Difficulty, OptionIndex};
use crate::lifelines::{AudienceVotes, Confidence, Lifeline};

/// Coarse game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Playing,
    Won,
    Lost,
    NoContent,
}

/// Highlight once the answer is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Reveal {
    Correct,
    Incorrect,
}

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub letter: char,
    pub text: String,
    pub eliminated: bool,
    pub selected: bool,
    pub selectable: bool,
    pub reveal: Option<Reveal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    /// 1-based.
    pub number: usize,
    pub of: usize,
    pub prompt: String,
    pub difficulty: Difficulty,
    pub options: Vec<OptionView>,
}

/// One lifeline button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifelineView {
    pub lifeline: Lifeline,
    pub name: String,
    pub used: bool,
    pub resolving: bool,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendView {
    pub option: OptionIndex,
    pub confidence: Confidence,
    pub message: String,
}

/// One row of the prize ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RungView {
    /// 1-based.
    pub number: usize,
    pub prize: u32,
    pub label: String,
    pub safe: bool,
    pub current: bool,
    pub passed: bool,
}

/// Everything needed to render the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: Status,
    pub question: Option<QuestionView>,
    pub lifelines: Vec<LifelineView>,
    pub audience: Option<AudienceVotes>,
    pub friend: Option<FriendView>,
    pub ladder: Vec<RungView>,
    pub can_commit: bool,
    pub can_walk_away: bool,
    pub final_score: Option<usize>,
    pub prize_won: Option<u32>,
    pub prize_label: Option<String>,
    /// Won the top rung.
    pub millionaire: bool,
}

impl Snapshot {
    /// Build the view for a session.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        let config = session.config();
        let state = session.state();
        let round = state.round();

        let status = match state {
            GameState::Playing(_) => Status::Playing,
            GameState::Won { .. } => Status::Won,
            GameState::Lost { .. } => Status::Lost,
            GameState::NoContent => Status::NoContent,
        };

        let question = round.zip(session.current_question()).map(|(round, q)| QuestionView {
            number: round.question_index + 1,
            of: session.questions().len(),
            prompt: q.prompt.clone(),
            difficulty: q.difficulty,
            options: OptionIndex::ALL
                .into_iter()
                .map(|option| {
                    let selected = round.selected == Some(option);
                    let reveal = match (round.answer_revealed, q.is_correct(option)) {
                        (true, true) => Some(Reveal::Correct),
                        (true, false) if selected => Some(Reveal::Incorrect),
                        _ => None,
                    };
                    OptionView {
                        letter: option.letter(),
                        text: q.option(option).to_string(),
                        eliminated: round.eliminated.contains(&option),
                        selected,
                        selectable: round.is_selectable(option),
                        reveal,
                    }
                })
                .collect(),
        });

        let lifelines = Lifeline::ALL
            .into_iter()
            .map(|lifeline| {
                let used = round.is_some_and(|r| r.used.get(lifeline));
                let resolving = round.is_some_and(|r| r.resolving.get(lifeline));
                LifelineView {
                    lifeline,
                    name: lifeline.to_string(),
                    used,
                    resolving,
                    available: round.is_some_and(|r| r.check_lifeline(lifeline).is_ok()),
                }
            })
            .collect();

        let current = round.map(|r| r.question_index);
        let ladder = config
            .ladder
            .prizes()
            .iter()
            .enumerate()
            .map(|(rung, &prize)| RungView {
                number: rung + 1,
                prize,
                label: format_prize(prize),
                safe: config.safe_levels.contains(rung),
                current: current == Some(rung),
                passed: current.is_some_and(|c| rung < c),
            })
            .collect();

        let final_score = state.final_score();
        let prize_won = final_score.and_then(|rung| config.ladder.prize(rung));

        Self {
            status,
            question,
            lifelines,
            audience: round.and_then(|r| r.audience),
            friend: round.and_then(|r| r.friend).map(|s| FriendView {
                option: s.option,
                confidence: s.confidence,
                message: s.message(),
            }),
            ladder,
            can_commit: round.is_some_and(|r| r.selected.is_some() && !r.answer_revealed),
            can_walk_away: round.is_some_and(|r| !r.answer_revealed),
            final_score,
            prize_won,
            prize_label: prize_won.map(format_prize),
            millionaire: matches!(state, GameState::Won { final_score } if *final_score == config.ladder.top()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Question};

    fn questions() -> Vec<Question> {
        (0..15)
            .map(|i| {
                Question::new(
                    i,
                    format!("Q{i}"),
                    ["w", "x", "y", "z"],
                    OptionIndex::ALL[1],
                    Difficulty::Easy,
                )
            })
            .collect()
    }

    #[test]
    fn test_initial_snapshot() {
        let session = Session::new(GameConfig::classic(), questions(), 42);
        let snap = session.snapshot();

        assert_eq!(snap.status, Status::Playing);
        let question = snap.question.unwrap();
        assert_eq!(question.number, 1);
        assert_eq!(question.of, 15);
        assert_eq!(question.options.len(), 4);
        assert!(question.options.iter().all(|o| o.selectable && o.reveal.is_none()));
        assert!(snap.lifelines.iter().all(|l| l.available));
        assert_eq!(snap.ladder.len(), 15);
        assert!(snap.ladder[0].current);
        assert!(snap.ladder[4].safe);
        assert_eq!(snap.ladder[14].label, "$1,000,000");
        assert!(!snap.can_commit);
        assert!(snap.can_walk_away);
    }

    #[test]
    fn test_revealed_highlights() {
        let mut session = Session::new(GameConfig::classic(), questions(), 42);
        session.select_option(3).unwrap();
        session.commit_final_answer().unwrap();

        let snap = session.snapshot();
        let options = snap.question.unwrap().options;
        assert_eq!(options[1].reveal, Some(Reveal::Correct));
        assert_eq!(options[3].reveal, Some(Reveal::Incorrect));
        assert_eq!(options[0].reveal, None);
        assert!(options.iter().all(|o| !o.selectable));
        assert!(snap.lifelines.iter().all(|l| !l.available));
        assert!(!snap.can_walk_away);
    }

    #[test]
    fn test_end_screen() {
        let mut session = Session::new(GameConfig::classic(), questions(), 42);
        session.walk_away().unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.status, Status::Won);
        assert!(snap.question.is_none());
        assert_eq!(snap.final_score, Some(0));
        assert_eq!(snap.prize_won, Some(100));
        assert_eq!(snap.prize_label.as_deref(), Some("$100"));
        assert!(!snap.millionaire);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let session = Session::new(GameConfig::classic(), questions(), 42);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "playing");
        assert_eq!(json["canWalkAway"], true);
        assert_eq!(json["lifelines"][0]["lifeline"], "fiftyFifty");
    }
}
