//! Prompt building functions for LLM requests
//!
//! One builder per operation kind. Each produces the system prompt; the
//! matching `*_user_message` helper produces the single user turn. Voice
//! profile context, when present, is interpolated as a labelled block and
//! omitted entirely when absent.

use crate::domain::value_objects::{
    CoachingStats, HookType, ReplyTone, TargetFormat, VoiceContext,
};

/// Build the system prompt for thread generation
pub fn build_generate_prompt(hook_type: HookType, voice: Option<&VoiceContext>) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are Twin, an AI that generates viral Twitter threads. Your job is to create engaging, authentic content that sounds human and avoids corporate jargon.\n\n",
    );

    push_voice_block(&mut prompt, voice);

    prompt.push_str("RULES:\n");
    prompt.push_str("1. Write 5-7 tweets per thread\n");
    prompt.push_str("2. Each tweet must be under 280 characters\n");
    prompt.push_str("3. Use the specified hook type for the first tweet\n");
    prompt.push_str("4. Make content punchy, valuable, and shareable\n");
    prompt.push_str("5. NO hashtags, NO emojis\n");
    prompt.push_str("6. Sound like a real person, not a marketer\n");
    prompt.push_str("7. Include actionable insights or surprising facts\n");
    prompt.push_str("8. End with a strong call-to-action or thought-provoking question\n\n");

    prompt.push_str(&format!("HOOK TYPE: {}\n", hook_type));
    prompt.push_str(hook_type.instructions());
    prompt.push_str("\n\n");

    prompt.push_str("Respond with ONLY a JSON array of strings, each string being one tweet in the thread.");

    prompt
}

/// User message for thread generation
pub fn generate_user_message(topic: &str) -> String {
    format!("Generate a Twitter thread about: {}", topic)
}

/// Build the system prompt for remixing a viral thread onto a new topic
pub fn build_remix_prompt(voice: Option<&VoiceContext>) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are Twin, an AI that studies viral Twitter threads and rewrites their winning structure around new topics. You never copy wording, only structure.\n\n",
    );

    push_voice_block(&mut prompt, voice);

    prompt.push_str("TASK:\n");
    prompt.push_str("1. Analyze the original thread: identify its hook type (negative, numbers, story, contrarian, or list), tweet count, the structural pattern it follows, and the key elements that make it work\n");
    prompt.push_str("2. Write a new thread about the given topic using that same structure\n");
    prompt.push_str("3. Keep each tweet under 280 characters, no hashtags, no emojis\n");
    prompt.push_str("4. Sound like a real person, not a marketer\n\n");

    prompt.push_str("Respond with ONLY a JSON object of this shape:\n");
    prompt.push_str(
        r#"{"analysis": {"hookType": "...", "tweetCount": 0, "pattern": "...", "keyElements": ["..."]}, "remixedThread": ["..."]}"#,
    );

    prompt
}

/// User message for the remix operation
pub fn remix_user_message(original_thread: &str, new_topic: &str) -> String {
    format!(
        "ORIGINAL THREAD:\n{}\n\nNEW TOPIC: {}",
        original_thread, new_topic
    )
}

/// Build the system prompt for repurposing a thread into another format
pub fn build_repurpose_prompt(format: TargetFormat, voice: Option<&VoiceContext>) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are Twin, an AI that repurposes Twitter threads into other content formats while keeping the author's ideas and voice intact.\n\n",
    );

    push_voice_block(&mut prompt, voice);

    prompt.push_str(&format!("TARGET FORMAT: {}\n", format));
    prompt.push_str(format.instruction());
    prompt.push_str("\n\n");

    prompt.push_str("RULES:\n");
    prompt.push_str("1. Preserve every substantive point from the thread\n");
    prompt.push_str("2. No hashtags, no emojis, no corporate jargon\n");
    prompt.push_str("3. Write a title that would make the author's audience click\n");
    prompt.push_str("4. Include a one-sentence summary of the piece\n\n");

    prompt.push_str("Respond with ONLY a JSON object of this shape:\n");
    prompt.push_str(r#"{"title": "...", "content": "...", "summary": "..."}"#);

    prompt
}

/// User message for the repurpose operation
pub fn repurpose_user_message(tweets: &[String]) -> String {
    format!("THREAD TO REPURPOSE:\n{}", tweets.join("\n"))
}

/// Build the system prompt for reply suggestions
pub fn build_reply_prompt(tone: ReplyTone, voice: Option<&VoiceContext>) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are Twin, an AI that drafts Twitter replies designed to spark conversation. Each reply must stand on its own and sound like the author wrote it off the cuff.\n\n",
    );

    push_voice_block(&mut prompt, voice);

    prompt.push_str(&format!("TONE: {}\n", tone));
    prompt.push_str(tone.instruction());
    prompt.push_str("\n\n");

    prompt.push_str("RULES:\n");
    prompt.push_str("1. Write exactly 3 reply options\n");
    prompt.push_str("2. Each reply must be under 280 characters\n");
    prompt.push_str("3. NO hashtags, NO emojis\n");
    prompt.push_str("4. Never open with \"Great post\" or any other generic compliment\n\n");

    prompt.push_str("Respond with ONLY a JSON array of strings, each string being one reply option.");

    prompt
}

/// User message for the reply operation
pub fn reply_user_message(tweet: &str) -> String {
    format!("Write replies to this tweet:\n\"{}\"", tweet)
}

/// Build the system prompt for coaching tips.
///
/// No voice block here: coaching speaks about the account, not in its voice.
pub fn build_coach_prompt(stats: &CoachingStats) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are Twin's growth coach, an AI that reviews a creator's recent output and gives blunt, specific advice for growing their audience.\n\n",
    );

    prompt.push_str("CREATOR STATS:\n");
    prompt.push_str(&format!("Threads written: {}\n", stats.thread_count));
    prompt.push_str(&format!(
        "Average engagement rate: {:.2}%\n",
        stats.avg_engagement_rate
    ));
    if !stats.recent_topics.is_empty() {
        prompt.push_str(&format!(
            "Recent topics: {}\n",
            stats.recent_topics.join(", ")
        ));
    }
    prompt.push_str("\n");

    prompt.push_str("RULES:\n");
    prompt.push_str("1. Give 3-5 tips, each one concrete enough to act on this week\n");
    prompt.push_str("2. Ground every tip in the stats above, not generic advice\n");
    prompt.push_str("3. Rate the creator's current content from 0 to 100\n\n");

    prompt.push_str("Respond with ONLY a JSON object of this shape:\n");
    prompt.push_str(r#"{"tips": ["..."], "contentScore": 0}"#);

    prompt
}

/// User message for the coach operation
pub fn coach_user_message() -> String {
    "Review my stats and coach me.".to_string()
}

/// Append the voice profile block when context is present; omit it entirely
/// when absent rather than leaving an empty section
fn push_voice_block(prompt: &mut String, voice: Option<&VoiceContext>) {
    if let Some(voice) = voice {
        prompt.push_str(&format!(
            "USER'S VOICE PROFILE:\n{}\n\n",
            voice.prompt_block()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_voice() -> VoiceContext {
        VoiceContext {
            style: "casual".to_string(),
            description: Some("Dry humor, short sentences".to_string()),
            writing_samples: vec!["Sample tweet".to_string()],
        }
    }

    #[test]
    fn test_generate_prompt_contains_hook_and_rules() {
        let prompt = build_generate_prompt(HookType::Contrarian, None);

        assert!(prompt.contains("HOOK TYPE: contrarian"));
        assert!(prompt.contains("Unpopular opinion"));
        assert!(prompt.contains("5-7 tweets"));
        assert!(prompt.contains("under 280 characters"));
        assert!(prompt.contains("ONLY a JSON array"));
        assert!(!prompt.contains("VOICE PROFILE"));
    }

    #[test]
    fn test_generate_prompt_includes_voice_block() {
        let voice = sample_voice();
        let prompt = build_generate_prompt(HookType::Story, Some(&voice));

        assert!(prompt.contains("USER'S VOICE PROFILE:"));
        assert!(prompt.contains("Writing Style: casual"));
        assert!(prompt.contains("Sample tweet"));
    }

    #[test]
    fn test_remix_prompt_demands_object_shape() {
        let prompt = build_remix_prompt(None);
        assert!(prompt.contains(r#""analysis""#));
        assert!(prompt.contains(r#""remixedThread""#));
    }

    #[test]
    fn test_repurpose_prompt_per_format() {
        let linkedin = build_repurpose_prompt(TargetFormat::Linkedin, None);
        let script = build_repurpose_prompt(TargetFormat::Script, None);

        assert!(linkedin.contains("TARGET FORMAT: linkedin"));
        assert!(linkedin.contains("LinkedIn post"));
        assert!(script.contains("podcast script"));
    }

    #[test]
    fn test_reply_prompt_contains_tone() {
        let prompt = build_reply_prompt(ReplyTone::Contrarian, None);
        assert!(prompt.contains("TONE: contrarian"));
        assert!(prompt.contains("exactly 3 reply options"));
    }

    #[test]
    fn test_coach_prompt_interpolates_stats() {
        let stats = CoachingStats {
            thread_count: 12,
            avg_engagement_rate: 3.5,
            recent_topics: vec!["rust".to_string(), "writing".to_string()],
        };
        let prompt = build_coach_prompt(&stats);

        assert!(prompt.contains("Threads written: 12"));
        assert!(prompt.contains("3.50%"));
        assert!(prompt.contains("rust, writing"));
    }

    #[test]
    fn test_coach_prompt_omits_empty_topics_line() {
        let stats = CoachingStats {
            thread_count: 0,
            avg_engagement_rate: 0.0,
            recent_topics: vec![],
        };
        assert!(!build_coach_prompt(&stats).contains("Recent topics"));
    }
}
