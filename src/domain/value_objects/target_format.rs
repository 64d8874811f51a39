//! Target formats for the repurpose operation

use serde::{Deserialize, Serialize};

/// Output format a thread can be repurposed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Linkedin,
    Newsletter,
    Script,
}

impl TargetFormat {
    /// Instruction line interpolated into the repurpose prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            TargetFormat::Linkedin => {
                "Rewrite as a LinkedIn post: a strong one-line opener, short paragraphs with line breaks between them, and a closing question or takeaway. Professional but still personal."
            }
            TargetFormat::Newsletter => {
                "Rewrite as an email newsletter section: a greeting-free lede, two or three developed paragraphs, and a sign-off line the reader can act on."
            }
            TargetFormat::Script => {
                "Rewrite as a video or podcast script: a spoken-word hook in the first sentence, conversational transitions, and explicit beats the speaker can pause on."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Linkedin => "linkedin",
            TargetFormat::Newsletter => "newsletter",
            TargetFormat::Script => "script",
        }
    }

    /// Strict parse used by request validation; unknown tags are a client error
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "linkedin" => Some(TargetFormat::Linkedin),
            "newsletter" => Some(TargetFormat::Newsletter),
            "script" => Some(TargetFormat::Script),
            _ => None,
        }
    }
}

impl Default for TargetFormat {
    fn default() -> Self {
        TargetFormat::Linkedin
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
