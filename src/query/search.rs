//! Free-text search
//!
//! Matching is case-insensitive substring containment. Each example gets a
//! relevance score and only examples scoring above zero survive. Survivors
//! keep their input order: the score gates results but does not rank them.

use crate::catalog::Example;

/// Score contributions for each kind of match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Whole query found in the title
    pub title: u32,
    /// Whole query found in a tag, per tag
    pub tag: u32,
    /// Whole query found in the short description
    pub description: u32,
    /// Whole query found in a user story, per story
    pub user_story: u32,
    /// Whole query found in the long description
    pub long_description: u32,
    /// Single query term found in a tag, per term and tag
    pub tag_term: u32,
    /// Single query term found in a user story, per term and story
    pub user_story_term: u32,
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    title: 10,
    tag: 8,
    description: 5,
    user_story: 4,
    long_description: 3,
    tag_term: 2,
    user_story_term: 1,
};

/// Filter `items` down to those relevant to `query`
///
/// An absent, empty or whitespace-only query returns the input unchanged.
pub fn search<'a>(query: Option<&str>, items: &[&'a Example]) -> Vec<&'a Example> {
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return items.to_vec();
    };

    let results: Vec<&'a Example> = items
        .iter()
        .copied()
        .filter(|example| relevance_score(query, example) > 0)
        .collect();

    tracing::debug!(
        query,
        candidates = items.len(),
        matched = results.len(),
        "search complete"
    );
    results
}

/// Relevance of `example` for `query` under [`SCORE_WEIGHTS`]
pub fn relevance_score(query: &str, example: &Example) -> u32 {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return 0;
    }

    let weights = SCORE_WEIGHTS;
    let contains = |text: &str, needle: &str| text.to_lowercase().contains(needle);
    let mut score = 0;

    if contains(&example.title, &query) {
        score += weights.title;
    }
    if contains(&example.description, &query) {
        score += weights.description;
    }
    if contains(&example.long_description, &query) {
        score += weights.long_description;
    }

    for tag in &example.tags {
        let tag = tag.to_lowercase();
        if tag.contains(&query) {
            score += weights.tag;
        }
        score += weights.tag_term * terms.iter().filter(|t| tag.contains(**t)).count() as u32;
    }

    for story in &example.user_stories {
        let story = story.to_lowercase();
        if story.contains(&query) {
            score += weights.user_story;
        }
        score += weights.user_story_term
            * terms.iter().filter(|t| story.contains(**t)).count() as u32;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn ids<'a>(examples: &[&'a Example]) -> Vec<&'a str> {
        examples.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = Catalog::builtin().all();
        assert_eq!(search(None, &all), all);
        assert_eq!(search(Some(""), &all), all);
        assert_eq!(search(Some("   "), &all), all);
    }

    #[test]
    fn test_nonexistent_query_matches_nothing() {
        let all = Catalog::builtin().all();
        assert!(search(Some("zz-nonexistent-zz"), &all).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = Catalog::builtin().all();
        let upper = search(Some("AUCTION"), &all);
        let lower = search(Some("auction"), &all);
        assert_eq!(upper, lower);
        assert!(ids(&lower).contains(&"dutch"));
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let all = Catalog::builtin().all();
        let results = search(Some("marketplace"), &all);
        assert_eq!(ids(&results), vec!["nft", "dutch"]);
    }

    #[test]
    fn test_higher_scores_are_not_promoted() {
        let all = Catalog::builtin().all();
        // Title match on Aptos Friend outscores the "beginner-friendly" tags
        let results = search(Some("friend"), &all);
        assert_eq!(ids(&results), vec!["todo", "billboard", "aptosfriend"]);
        assert!(
            relevance_score("friend", results[2]) > relevance_score("friend", results[0])
        );

        let results = search(Some("tokens"), &all);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| all.iter().position(|e| e.id == r.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_score_weights() {
        let todo = Catalog::builtin().get("todo").unwrap();
        // title + description + long description
        assert_eq!(relevance_score("to-do list", todo), 10 + 5 + 3);
        // long description, one tag (phrase + term), one story (phrase + term)
        assert_eq!(relevance_score("state", todo), 3 + (8 + 2) + (4 + 1));
        assert_eq!(relevance_score("zz", todo), 0);
    }

    #[test]
    fn test_multi_term_partial_matches() {
        let keyless = Catalog::builtin().get("keyless").unwrap();
        // The whole phrase matches nothing, but "login" appears in both user stories
        assert!(relevance_score("login flows zzz", keyless) > 0);
        assert_eq!(relevance_score("", keyless), 0);
    }
}
