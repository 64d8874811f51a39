//! Hook types - rhetorical opening strategies for a thread

use serde::{Deserialize, Serialize};

/// The opening strategy requested for a thread's first tweet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Negative,
    Numbers,
    Story,
    Contrarian,
    List,
}

impl HookType {
    /// Instruction line interpolated into the generation prompt
    pub fn instructions(&self) -> &'static str {
        match self {
            HookType::Negative => {
                "Start with what NOT to do or a common mistake. Example: 'Stop doing X if you want Y'"
            }
            HookType::Numbers => {
                "Lead with a specific number. Example: '7 ways to 10x your Z' or 'I spent 3 years learning this'"
            }
            HookType::Story => {
                "Open with a personal story or experience. Example: 'In 2019, I was broke. Here's what changed.'"
            }
            HookType::Contrarian => {
                "Challenge a common belief. Example: 'Unpopular opinion: X is dead' or 'Everyone says X. They're wrong.'"
            }
            HookType::List => {
                "Promise a comprehensive list. Example: 'Everything I learned about X in one thread' or 'A complete guide to Y'"
            }
        }
    }

    /// Wire name used in prompts and persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::Negative => "negative",
            HookType::Numbers => "numbers",
            HookType::Story => "story",
            HookType::Contrarian => "contrarian",
            HookType::List => "list",
        }
    }

    /// Parse a tag, falling back to the default for unrecognized values
    pub fn parse_or_default(tag: &str) -> Self {
        match tag {
            "negative" => HookType::Negative,
            "numbers" => HookType::Numbers,
            "story" => HookType::Story,
            "contrarian" => HookType::Contrarian,
            "list" => HookType::List,
            _ => HookType::default(),
        }
    }
}

impl Default for HookType {
    fn default() -> Self {
        HookType::Negative
    }
}

impl std::fmt::Display for HookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_tag_falls_back_to_negative() {
        assert_eq!(HookType::parse_or_default("viral"), HookType::Negative);
        assert_eq!(HookType::parse_or_default(""), HookType::Negative);
    }

    #[test]
    fn test_known_tags_round_trip() {
        for tag in ["negative", "numbers", "story", "contrarian", "list"] {
            assert_eq!(HookType::parse_or_default(tag).as_str(), tag);
        }
    }
}
