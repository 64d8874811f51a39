//! Lexical content scoring - the "cringe score"
//!
//! A heuristic estimate of how jargon-laden and hype-sounding a thread is.
//! Higher scores mean less authentic-sounding text. The score feeds the
//! authenticity badge in the composer; it never gates generation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Corporate jargon and hype cliches, matched as substrings.
///
/// Matching is deliberately substring-based rather than word-bounded
/// ("scale" counts inside "scalextric"); the scored corpus depends on it.
const CRINGE_LEXICON: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "holistic",
    "disrupt",
    "thought leader",
    "game-changer",
    "crushing it",
    "hustle",
    "grind",
    "boss babe",
    "entrepreneur journey",
    "10x",
    "unlock",
    "monetize",
    "scale",
    "pivot",
    "growth hack",
    "influencer",
    "personal brand",
    "value bomb",
    "epic",
];

const LEXICON_WEIGHT: u32 = 10;
const EXCLAMATION_WEIGHT: u32 = 5;
/// The first two exclamation marks are free
const FREE_EXCLAMATIONS: usize = 2;
const ALL_CAPS_WEIGHT: u32 = 3;

/// Standalone runs of three or more uppercase ASCII letters
static ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("valid pattern"));

/// Score a tweet sequence on a 0-100 scale.
///
/// Pure and stateless; the same input always yields the same score.
/// An empty input scores 0.
pub fn cringe_score(tweets: &[String]) -> u32 {
    let joined = tweets.join(" ");
    let lowered = joined.to_lowercase();

    let mut score: u32 = 0;

    for term in CRINGE_LEXICON {
        score += LEXICON_WEIGHT * lowered.matches(term).count() as u32;
    }

    let exclamations = joined.matches('!').count();
    score += EXCLAMATION_WEIGHT * exclamations.saturating_sub(FREE_EXCLAMATIONS) as u32;

    score += ALL_CAPS_WEIGHT * ALL_CAPS.find_iter(&joined).count() as u32;

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(cringe_score(&[]), 0);
    }

    #[test]
    fn test_clean_text_scores_zero() {
        let input = tweets(&["Shipping beats planning.", "Write something every day."]);
        assert_eq!(cringe_score(&input), 0);
    }

    #[test]
    fn test_worked_example() {
        // leverage + hustle = 20, four exclamations = 10, SUCCESS = 3
        let input = tweets(&[
            "Stop doing this if you want to grow. Leverage your network! Hustle every day!!! SUCCESS awaits.",
        ]);
        assert_eq!(cringe_score(&input), 33);
    }

    #[test]
    fn test_lexicon_matches_substrings() {
        // "scale" inside "scalextric" still counts
        let input = tweets(&["My scalextric collection"]);
        assert_eq!(cringe_score(&input), 10);
    }

    #[test]
    fn test_first_two_exclamations_are_free() {
        assert_eq!(cringe_score(&tweets(&["Great! Really great!"])), 0);
        assert_eq!(cringe_score(&tweets(&["Great! Really! Truly!"])), 5);
    }

    #[test]
    fn test_all_caps_tokens() {
        // AI is only two letters; NEVER and STOP both count
        let input = tweets(&["NEVER use AI to STOP learning"]);
        assert_eq!(cringe_score(&input), 6);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        let input = tweets(&["synergy leverage paradigm holistic disrupt hustle grind 10x unlock monetize scale pivot"]);
        assert_eq!(cringe_score(&input), 100);
    }

    #[test]
    fn test_monotonic_in_jargon_count() {
        let one = cringe_score(&tweets(&["pure hustle"]));
        let two = cringe_score(&tweets(&["pure hustle hustle"]));
        assert!(two > one);
    }

    #[test]
    fn test_idempotent() {
        let input = tweets(&["Leverage the grind! GO BIG!!!"]);
        assert_eq!(cringe_score(&input), cringe_score(&input));
    }

    #[test]
    fn test_caps_counted_across_tweet_boundary_join() {
        // Joining with a space keeps tokens from fusing across tweets
        let input = tweets(&["end with CAPS", "MORE at the start"]);
        assert_eq!(cringe_score(&input), 6);
    }
}
