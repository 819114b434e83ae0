use serde::Serialize;

use super::{CommandHandler, FinderContext};
use crate::catalog::Example;
use crate::cli::output::{self, NO_RECOMMENDATIONS};
use crate::quiz::{
    recommend_with_tier, Answer, Background, Experience, Interest, MatchTier, QuizAnswers,
    QuizState, QuizTransition, TimeBudget,
};
use crate::{FinderError, Result};

#[derive(Serialize)]
struct QuizOutput<'a> {
    answers: &'a QuizAnswers,
    tier: MatchTier,
    recommendations: Vec<&'a Example>,
}

/// Non-interactive run of the recommendation quiz
pub struct QuizCommand<'a> {
    context: &'a FinderContext,
    answers: [Answer; 4],
    json: bool,
}

impl<'a> QuizCommand<'a> {
    pub fn new(
        context: &'a FinderContext,
        experience: Experience,
        background: Background,
        interest: Interest,
        time: TimeBudget,
        json: bool,
    ) -> Self {
        Self {
            context,
            answers: [
                Answer::Experience(experience),
                Answer::Background(background),
                Answer::Interest(interest),
                Answer::Time(time),
            ],
            json,
        }
    }

    /// Walk the quiz with the given answers until it completes
    pub fn complete(&self) -> Result<QuizState> {
        let mut quiz = QuizState::new();
        for answer in self.answers {
            quiz.select(answer);
            match quiz.next() {
                QuizTransition::Advanced(_) | QuizTransition::Completed => {}
                other => {
                    return Err(FinderError::Quiz(format!(
                        "unexpected quiz transition {:?}",
                        other
                    )))
                }
            }
        }
        Ok(quiz)
    }

    pub fn render(&self) -> Result<String> {
        let quiz = self.complete()?;
        let profile = quiz
            .profile()
            .ok_or_else(|| FinderError::Quiz("quiz did not complete".to_string()))?;
        let (recommendations, tier) = recommend_with_tier(&profile, &self.context.catalog().all());

        if self.context.wants_json(self.json) {
            return output::to_json(&QuizOutput {
                answers: quiz.answers(),
                tier,
                recommendations,
            });
        }

        if recommendations.is_empty() {
            return Ok(NO_RECOMMENDATIONS.to_string());
        }
        Ok(format!(
            "Recommended for you:\n\n{}",
            output::examples_table(&recommendations)
        ))
    }
}

impl CommandHandler for QuizCommand<'_> {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Difficulty};

    #[test]
    fn test_quiz_completes() {
        let context = FinderContext::builtin();
        let command = QuizCommand::new(
            &context,
            Experience::Familiar,
            Background::Both,
            Interest::Category(Category::Defi),
            TimeBudget::Medium,
            false,
        );
        let quiz = command.complete().unwrap();
        assert!(quiz.is_completed());
        assert_eq!(quiz.answers().background, Some(Background::Both));
    }

    #[test]
    fn test_quiz_json() {
        let context = FinderContext::builtin();
        let command = QuizCommand::new(
            &context,
            Experience::Newcomer,
            Background::NewToDevelopment,
            Interest::NoPreference,
            TimeBudget::Medium,
            true,
        );
        let parsed: serde_json::Value = serde_json::from_str(&command.render().unwrap()).unwrap();
        let recommendations = parsed["recommendations"].as_array().unwrap();
        assert!(!recommendations.is_empty() && recommendations.len() <= 3);
        for example in recommendations {
            assert_eq!(example["difficulty"], Difficulty::Beginner.as_str());
        }
    }
}
