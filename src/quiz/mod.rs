//! Recommendation quiz
//!
//! Four fixed questions followed by a completed state:
//!
//! ```text
//! Experience ─next─► Background ─next─► Interest ─next─► Time ─next─► Completed
//!      ◄─previous──        ◄─previous──       ◄─previous──
//! reset (any state) ─► Experience, no answers
//! ```
//!
//! `next` only moves when the current question has an answer.

mod answers;
mod recommend;

use serde::Serialize;

use crate::catalog::Example;
use crate::{FinderError, Result};

pub use answers::{Answer, Background, Experience, Interest, QuizAnswers, TimeBudget};
pub use recommend::{recommend, recommend_with_tier, MatchTier, QuizProfile, MAX_RECOMMENDATIONS};

/// The quiz questions, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Experience,
    Background,
    Interest,
    Time,
}

/// One selectable option of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub answer: Answer,
    pub label: &'static str,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::Experience,
        Question::Background,
        Question::Interest,
        Question::Time,
    ];

    /// Number of questions
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        match self {
            Question::Experience => 0,
            Question::Background => 1,
            Question::Interest => 2,
            Question::Time => 3,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Experience => "What's your experience level with blockchain development?",
            Question::Background => "What's your development background?",
            Question::Interest => "What type of project are you most interested in building?",
            Question::Time => "How much time do you have available for this project?",
        }
    }

    pub fn options(&self) -> Vec<QuizOption> {
        match self {
            Question::Experience => Experience::ALL
                .into_iter()
                .map(|e| QuizOption {
                    answer: Answer::Experience(e),
                    label: e.label(),
                })
                .collect(),
            Question::Background => Background::ALL
                .into_iter()
                .map(|b| QuizOption {
                    answer: Answer::Background(b),
                    label: b.label(),
                })
                .collect(),
            Question::Interest => Interest::options()
                .into_iter()
                .map(|i| QuizOption {
                    answer: Answer::Interest(i),
                    label: i.label(),
                })
                .collect(),
            Question::Time => TimeBudget::ALL
                .into_iter()
                .map(|t| QuizOption {
                    answer: Answer::Time(t),
                    label: t.label(),
                })
                .collect(),
        }
    }

    /// The question an answer belongs to
    pub fn of(answer: &Answer) -> Question {
        match answer {
            Answer::Experience(_) => Question::Experience,
            Answer::Background(_) => Question::Background,
            Answer::Interest(_) => Question::Interest,
            Answer::Time(_) => Question::Time,
        }
    }
}

/// Outcome of a `next` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTransition {
    /// Moved on to the given question
    Advanced(Question),
    /// Last question answered; recommendations are available
    Completed,
    /// Current question has no answer yet
    Blocked,
    /// Quiz was already completed
    AlreadyCompleted,
}

/// Quiz progress for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    step: usize,
    answers: QuizAnswers,
    completed: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current question
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// The question being asked, `None` once completed
    pub fn current_question(&self) -> Option<Question> {
        if self.completed {
            None
        } else {
            Question::ALL.get(self.step).copied()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// The selected answer for `question`, if any
    pub fn answer_for(&self, question: Question) -> Option<Answer> {
        match question {
            Question::Experience => self.answers.experience.map(Answer::Experience),
            Question::Background => self.answers.background.map(Answer::Background),
            Question::Interest => self.answers.interest.map(Answer::Interest),
            Question::Time => self.answers.time.map(Answer::Time),
        }
    }

    /// Record an answer; any question may be answered at any time
    pub fn select(&mut self, answer: Answer) {
        self.answers.set(answer);
    }

    /// Select option `index` of the current question
    pub fn select_option(&mut self, index: usize) -> Result<()> {
        let question = self
            .current_question()
            .ok_or_else(|| FinderError::Quiz("quiz is already completed".to_string()))?;
        let option = question.options().get(index).copied().ok_or_else(|| {
            FinderError::Quiz(format!(
                "option {} out of range for question {}",
                index,
                question.index() + 1
            ))
        })?;
        self.select(option.answer);
        Ok(())
    }

    /// Whether `next` would move forward
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.answer_for(q).is_some())
    }

    pub fn can_go_back(&self) -> bool {
        !self.completed && self.step > 0
    }

    /// Advance one question, or complete the quiz on the last one
    pub fn next(&mut self) -> QuizTransition {
        if self.completed {
            return QuizTransition::AlreadyCompleted;
        }
        if !self.can_advance() {
            return QuizTransition::Blocked;
        }

        if self.step + 1 < Question::COUNT {
            self.step += 1;
            QuizTransition::Advanced(Question::ALL[self.step])
        } else {
            self.completed = true;
            tracing::debug!(answers = ?self.answers, "quiz completed");
            QuizTransition::Completed
        }
    }

    /// Step back one question; returns whether the step changed
    pub fn previous(&mut self) -> bool {
        if self.can_go_back() {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first question with every answer cleared
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage shown in the progress bar
    pub fn progress_percent(&self) -> u16 {
        (((self.step + 1) * 100) / Question::COUNT) as u16
    }

    /// The recommender inputs, available once the quiz is completed
    pub fn profile(&self) -> Option<QuizProfile> {
        if !self.completed {
            return None;
        }
        Some(QuizProfile {
            experience: self.answers.experience?,
            interest: self.answers.interest.and_then(|i| i.category()),
            time: self.answers.time?,
        })
    }

    /// Recommendations for the completed quiz; empty before completion
    pub fn recommendations<'a>(&self, items: &[&'a Example]) -> Vec<&'a Example> {
        self.profile()
            .map(|profile| recommend(&profile, items))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Difficulty};

    fn answer_all(quiz: &mut QuizState, experience: Experience, interest: Interest, time: TimeBudget) {
        quiz.select(Answer::Experience(experience));
        assert_eq!(quiz.next(), QuizTransition::Advanced(Question::Background));
        quiz.select(Answer::Background(Background::Web2));
        assert_eq!(quiz.next(), QuizTransition::Advanced(Question::Interest));
        quiz.select(Answer::Interest(interest));
        assert_eq!(quiz.next(), QuizTransition::Advanced(Question::Time));
        quiz.select(Answer::Time(time));
        assert_eq!(quiz.next(), QuizTransition::Completed);
    }

    #[test]
    fn test_next_blocked_without_answer() {
        let mut quiz = QuizState::new();
        assert!(!quiz.can_advance());
        assert_eq!(quiz.next(), QuizTransition::Blocked);
        assert_eq!(quiz.current_step(), 0);
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut quiz = QuizState::new();
        assert!(!quiz.previous());
        assert_eq!(quiz.current_step(), 0);
    }

    #[test]
    fn test_previous_keeps_answers() {
        let mut quiz = QuizState::new();
        quiz.select_option(1).unwrap();
        quiz.next();
        assert!(quiz.previous());
        assert_eq!(quiz.current_question(), Some(Question::Experience));
        assert_eq!(quiz.answers().experience, Some(Experience::Familiar));
        assert!(quiz.can_advance());
    }

    #[test]
    fn test_full_run_produces_beginner_recommendations() {
        let mut quiz = QuizState::new();
        answer_all(
            &mut quiz,
            Experience::Newcomer,
            Interest::NoPreference,
            TimeBudget::Medium,
        );

        assert!(quiz.is_completed());
        assert_eq!(quiz.current_question(), None);

        let all = Catalog::builtin().all();
        let results = quiz.recommendations(&all);
        assert!(!results.is_empty());
        assert!(results.len() <= 3);
        assert!(results.iter().all(|e| e.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_background_does_not_affect_recommendations() {
        let all = Catalog::builtin().all();
        let mut first = QuizState::new();
        answer_all(&mut first, Experience::Familiar, Interest::Category(Category::Nft), TimeBudget::Short);
        let mut second = first.clone();
        second.select(Answer::Background(Background::Blockchain));
        assert_eq!(first.recommendations(&all), second.recommendations(&all));
    }

    #[test]
    fn test_no_recommendations_before_completion() {
        let mut quiz = QuizState::new();
        quiz.select(Answer::Experience(Experience::Newcomer));
        quiz.select(Answer::Time(TimeBudget::Short));
        assert!(quiz.profile().is_none());
        assert!(quiz.recommendations(&Catalog::builtin().all()).is_empty());
    }

    #[test]
    fn test_completed_quiz_ignores_navigation() {
        let mut quiz = QuizState::new();
        answer_all(&mut quiz, Experience::Newcomer, Interest::NoPreference, TimeBudget::Short);
        assert_eq!(quiz.next(), QuizTransition::AlreadyCompleted);
        assert!(!quiz.previous());
        assert!(quiz.select_option(0).is_err());
    }

    #[test]
    fn test_reset_after_navigation() {
        let mut quiz = QuizState::new();
        answer_all(&mut quiz, Experience::Experienced, Interest::Category(Category::Defi), TimeBudget::Long);
        quiz.reset();
        assert_eq!(quiz.current_step(), 0);
        assert!(quiz.answers().is_empty());
        assert!(!quiz.is_completed());

        quiz.select_option(0).unwrap();
        quiz.next();
        quiz.previous();
        quiz.next();
        quiz.reset();
        assert_eq!(quiz, QuizState::new());
    }

    #[test]
    fn test_select_option_out_of_range() {
        let mut quiz = QuizState::new();
        assert!(quiz.select_option(3).is_err());
        assert!(quiz.select_option(2).is_ok());
        assert_eq!(quiz.answers().experience, Some(Experience::Experienced));
    }

    #[test]
    fn test_progress_percent() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.progress_percent(), 25);
        quiz.select_option(0).unwrap();
        quiz.next();
        assert_eq!(quiz.progress_percent(), 50);
    }

    #[test]
    fn test_question_options_match_answer_kinds() {
        for question in Question::ALL {
            let options = question.options();
            assert!(!options.is_empty());
            assert!(options.iter().all(|o| Question::of(&o.answer) == question));
        }
        assert_eq!(Question::Interest.options().len(), 7);
    }
}
