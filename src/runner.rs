//! Walks a resolved list of questions and keeps the score.

use tracing::{debug, warn};

use crate::models::{Question, OPTION_SLOTS};

/// Where the runner is within the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to pick an option.
    AwaitingAnswer,
    /// An option was picked; further picks are ignored until `advance`.
    AnswerLocked { selected: usize, correct: bool },
    /// The last question was answered and the user moved on.
    Finished,
}

/// What happened when an answer was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

pub struct QuizRunner {
    questions: Vec<Question>,
    current_index: usize,
    phase: Phase,
    correct: usize,
    answers: Vec<Option<usize>>,
}

impl QuizRunner {
    /// `None` for an empty list: a run never starts without questions.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        for question in questions.iter().filter(|q| !q.is_well_formed()) {
            warn!(
                "Question {} has {} options, unavailable slots will be disabled",
                question.id,
                question.options.len()
            );
        }

        let num_questions = questions.len();
        Some(Self {
            questions,
            current_index: 0,
            phase: Phase::AwaitingAnswer,
            correct: 0,
            answers: vec![None; num_questions],
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        self.current_index + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.questions.len(),
        }
    }

    /// The four option slots of the current question; missing options are `None`.
    pub fn option_slots(&self) -> [Option<&str>; OPTION_SLOTS] {
        let options = &self.current().options;
        std::array::from_fn(|i| options.get(i).map(String::as_str))
    }

    pub fn is_option_available(&self, option: usize) -> bool {
        option < OPTION_SLOTS && option < self.current().options.len()
    }

    /// Lock in `option` for the current question. Ignored unless the runner
    /// is awaiting an answer and the slot holds an option.
    pub fn select(&mut self, option: usize) -> Option<AnswerOutcome> {
        if self.phase != Phase::AwaitingAnswer {
            debug!("Answer already locked, ignoring selection {}", option);
            return None;
        }
        if !self.is_option_available(option) {
            debug!("Option {} is not available", option);
            return None;
        }

        let correct = self.current().is_correct(option);
        if correct {
            self.correct += 1;
        }
        self.answers[self.current_index] = Some(option);
        self.phase = Phase::AnswerLocked {
            selected: option,
            correct,
        };

        Some(AnswerOutcome {
            selected: option,
            correct,
        })
    }

    /// The current question has no options, so it can only be skipped.
    pub fn is_unanswerable(&self) -> bool {
        self.phase == Phase::AwaitingAnswer && self.current().options.is_empty()
    }

    /// Move past a locked answer. While awaiting an answer this only moves
    /// past a question with no options, which stays unanswered and wrong.
    pub fn advance(&mut self) -> Phase {
        match self.phase {
            Phase::AnswerLocked { .. } => self.move_on(),
            Phase::AwaitingAnswer if self.is_unanswerable() => {
                warn!("Question {} has no options, skipping it", self.current().id);
                self.move_on();
            }
            _ => {}
        }
        self.phase
    }

    fn move_on(&mut self) {
        if self.is_last() {
            self.phase = Phase::Finished;
        } else {
            self.current_index += 1;
            self.phase = Phase::AwaitingAnswer;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::question;

    fn runner() -> QuizRunner {
        QuizRunner::new(vec![
            question(1, "first", 0, "17", "General"),
            question(2, "second", 1, "17", "General"),
            question(3, "third", 2, "21", "General"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_list_does_not_start() {
        assert!(QuizRunner::new(Vec::new()).is_none());
    }

    #[test]
    fn test_full_run() {
        let mut runner = runner();
        assert_eq!(runner.position(), 1);

        assert_eq!(
            runner.select(0),
            Some(AnswerOutcome {
                selected: 0,
                correct: true
            })
        );
        assert_eq!(runner.advance(), Phase::AwaitingAnswer);
        assert_eq!(runner.position(), 2);

        assert!(!runner.select(3).unwrap().correct);
        runner.advance();
        runner.select(2);
        assert_eq!(runner.advance(), Phase::Finished);

        assert_eq!(runner.score(), Score { correct: 2, total: 3 });
        assert_eq!(runner.answers(), &[Some(0), Some(3), Some(2)]);
    }

    #[test]
    fn test_select_when_locked_is_noop() {
        let mut runner = runner();
        runner.select(1);
        let phase = runner.phase();

        assert_eq!(runner.select(0), None);
        assert_eq!(runner.phase(), phase);
        assert_eq!(runner.score().correct, 0);
        assert_eq!(runner.answers()[0], Some(1));
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut runner = runner();
        assert_eq!(runner.advance(), Phase::AwaitingAnswer);
        assert_eq!(runner.position(), 1);
    }

    #[test]
    fn test_finished_ignores_input() {
        let mut runner = QuizRunner::new(vec![question(1, "only", 0, "8", "General")]).unwrap();
        runner.select(0);
        assert_eq!(runner.advance(), Phase::Finished);
        assert_eq!(runner.select(0), None);
        assert_eq!(runner.advance(), Phase::Finished);
        assert_eq!(runner.score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn test_malformed_question_disables_missing_slots() {
        let mut short = question(1, "short", 1, "Core", "General");
        short.options.truncate(2);
        let mut runner = QuizRunner::new(vec![short]).unwrap();

        assert_eq!(runner.option_slots()[2], None);
        assert!(runner.option_slots()[1].is_some());
        assert_eq!(runner.select(3), None);
        assert_eq!(runner.phase(), Phase::AwaitingAnswer);
        assert!(runner.select(1).unwrap().correct);
    }

    #[test]
    fn test_question_without_options_is_skipped_as_wrong() {
        let mut empty = question(1, "empty", 0, "Core", "General");
        empty.options.clear();
        let mut runner =
            QuizRunner::new(vec![empty, question(2, "second", 1, "Core", "General")]).unwrap();

        assert!(runner.is_unanswerable());
        assert!((0..OPTION_SLOTS).all(|option| runner.select(option).is_none()));
        assert_eq!(runner.advance(), Phase::AwaitingAnswer);
        assert_eq!(runner.position(), 2);
        assert!(!runner.is_unanswerable());

        runner.select(1);
        assert_eq!(runner.advance(), Phase::Finished);
        assert_eq!(runner.score(), Score { correct: 1, total: 2 });
        assert_eq!(runner.answers(), &[None, Some(1)]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Score { correct: 1, total: 4 }.percentage(), 25.0);
        assert_eq!(Score { correct: 0, total: 0 }.percentage(), 0.0);
    }
}
