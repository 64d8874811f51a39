//! Reply tones for the reply-suggestion operation

use serde::{Deserialize, Serialize};

/// Tone requested for generated reply suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyTone {
    Supportive,
    Witty,
    Insightful,
    Contrarian,
}

impl ReplyTone {
    /// Instruction line interpolated into the reply prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            ReplyTone::Supportive => {
                "Agree with and build on the original tweet. Add a personal angle or a concrete example that reinforces the point."
            }
            ReplyTone::Witty => {
                "Be playful and sharp. A well-placed observation or twist beats a joke that tries too hard."
            }
            ReplyTone::Insightful => {
                "Add something the original tweet missed: a second-order effect, a data point, or a reframing that deepens the conversation."
            }
            ReplyTone::Contrarian => {
                "Respectfully push back. Name the strongest counterpoint and defend it in one or two sentences."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyTone::Supportive => "supportive",
            ReplyTone::Witty => "witty",
            ReplyTone::Insightful => "insightful",
            ReplyTone::Contrarian => "contrarian",
        }
    }

    /// Parse a tag, falling back to the default for unrecognized values
    pub fn parse_or_default(tag: &str) -> Self {
        match tag {
            "supportive" => ReplyTone::Supportive,
            "witty" => ReplyTone::Witty,
            "insightful" => ReplyTone::Insightful,
            "contrarian" => ReplyTone::Contrarian,
            _ => ReplyTone::default(),
        }
    }
}

impl Default for ReplyTone {
    fn default() -> Self {
        ReplyTone::Supportive
    }
}

impl std::fmt::Display for ReplyTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
