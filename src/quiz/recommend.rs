//! Quiz recommendations with cascading relaxation

use serde::{Deserialize, Serialize};

use super::answers::{Experience, TimeBudget};
use crate::catalog::{Category, Difficulty, Example};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// The answers the recommender actually uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProfile {
    pub experience: Experience,
    pub interest: Option<Category>,
    pub time: TimeBudget,
}

/// Which rule produced the recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Difficulty, interest and time all matched
    Exact,
    /// Interest only, or difficulty only when no interest was chosen
    Relaxed,
    /// Beginner examples
    Fallback,
    /// Nothing matched, not even a beginner example
    Empty,
}

/// Recommend up to [`MAX_RECOMMENDATIONS`] examples for `profile`
pub fn recommend<'a>(profile: &QuizProfile, items: &[&'a Example]) -> Vec<&'a Example> {
    recommend_with_tier(profile, items).0
}

/// Like [`recommend`], also reporting which tier matched
///
/// Tiers are tried in order and the first non-empty one wins:
/// 1. difficulty == target, interest category (if any), time budget;
/// 2. interest category alone if one was chosen, else difficulty alone;
/// 3. every beginner example.
///
/// Results keep catalog order and are truncated, never re-ranked.
pub fn recommend_with_tier<'a>(
    profile: &QuizProfile,
    items: &[&'a Example],
) -> (Vec<&'a Example>, MatchTier) {
    let target = profile.experience.target_difficulty();
    let interest_matches =
        |e: &Example| profile.interest.map_or(true, |category| e.has_category(category));

    let exact = select(items, |e| {
        e.difficulty == target
            && interest_matches(e)
            && profile.time.fits(e.estimated_time.as_deref())
    });
    if !exact.is_empty() {
        return (exact, MatchTier::Exact);
    }

    let relaxed = match profile.interest {
        Some(category) => select(items, |e| e.has_category(category)),
        None => select(items, |e| e.difficulty == target),
    };
    if !relaxed.is_empty() {
        tracing::debug!(?profile, "no exact quiz match, relaxed criteria");
        return (relaxed, MatchTier::Relaxed);
    }

    let fallback = select(items, |e| e.difficulty == Difficulty::Beginner);
    if !fallback.is_empty() {
        tracing::debug!(?profile, "no relaxed quiz match, falling back to beginner examples");
        return (fallback, MatchTier::Fallback);
    }

    tracing::warn!(?profile, candidates = items.len(), "quiz produced no recommendations");
    (Vec::new(), MatchTier::Empty)
}

fn select<'a>(items: &[&'a Example], predicate: impl Fn(&Example) -> bool) -> Vec<&'a Example> {
    items
        .iter()
        .copied()
        .filter(|&e| predicate(e))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn ids<'a>(examples: &[&'a Example]) -> Vec<&'a str> {
        examples.iter().map(|e| e.id.as_str()).collect()
    }

    fn profile(experience: Experience, interest: Option<Category>, time: TimeBudget) -> QuizProfile {
        QuizProfile {
            experience,
            interest,
            time,
        }
    }

    #[test]
    fn test_newcomer_medium_relaxes_to_beginner_difficulty() {
        let all = Catalog::builtin().all();
        // Both beginner examples take 1-2 hours, so the time check rejects them
        let (results, tier) =
            recommend_with_tier(&profile(Experience::Newcomer, None, TimeBudget::Medium), &all);
        assert_eq!(tier, MatchTier::Relaxed);
        assert_eq!(ids(&results), vec!["todo", "billboard"]);
        assert!(results.iter().all(|e| e.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_exact_match() {
        let all = Catalog::builtin().all();
        let (results, tier) = recommend_with_tier(
            &profile(Experience::Newcomer, Some(Category::Basics), TimeBudget::Short),
            &all,
        );
        assert_eq!(tier, MatchTier::Exact);
        assert_eq!(ids(&results), vec!["todo", "billboard"]);
    }

    #[test]
    fn test_exact_match_long_budget() {
        let all = Catalog::builtin().all();
        let (results, tier) = recommend_with_tier(
            &profile(Experience::Experienced, Some(Category::Defi), TimeBudget::Long),
            &all,
        );
        assert_eq!(tier, MatchTier::Exact);
        assert_eq!(ids(&results), vec!["dex"]);
    }

    #[test]
    fn test_interest_relaxation_ignores_difficulty() {
        let all = Catalog::builtin().all();
        let (results, tier) = recommend_with_tier(
            &profile(Experience::Newcomer, Some(Category::Defi), TimeBudget::Short),
            &all,
        );
        assert_eq!(tier, MatchTier::Relaxed);
        assert_eq!(ids(&results), vec!["nft", "launchpad", "vesting"]);
    }

    #[test]
    fn test_truncated_to_three() {
        let all = Catalog::builtin().all();
        let results = recommend(
            &profile(Experience::Familiar, None, TimeBudget::Medium),
            &all,
        );
        assert!(results.len() <= MAX_RECOMMENDATIONS);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_beginner_fallback() {
        let all = Catalog::builtin().all();
        let without_advanced: Vec<&Example> = all
            .iter()
            .copied()
            .filter(|e| e.difficulty != Difficulty::Advanced)
            .collect();
        // No advanced examples and no interest: tiers 1 and 2 are empty
        let (results, tier) = recommend_with_tier(
            &profile(Experience::Experienced, None, TimeBudget::Long),
            &without_advanced,
        );
        assert_eq!(tier, MatchTier::Fallback);
        assert_eq!(ids(&results), vec!["todo", "billboard"]);
    }

    #[test]
    fn test_empty_catalog() {
        let (results, tier) = recommend_with_tier(
            &profile(Experience::Newcomer, None, TimeBudget::Short),
            &[],
        );
        assert!(results.is_empty());
        assert_eq!(tier, MatchTier::Empty);
    }
}
