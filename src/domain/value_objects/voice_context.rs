//! Voice context - read-only voice profile data fed into prompts

use serde::{Deserialize, Serialize};

/// Snapshot of a voice pack used as generation context.
///
/// This is consumed, never mutated: the orchestrator resolves it from the
/// voice pack repository and hands it to the prompt builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceContext {
    pub style: String,
    pub description: Option<String>,
    pub writing_samples: Vec<String>,
}

impl VoiceContext {
    /// Render the profile block interpolated into system prompts.
    ///
    /// Samples are separated by `---` lines; an absent description renders
    /// as "No description" rather than an empty field.
    pub fn prompt_block(&self) -> String {
        let mut block = String::new();

        block.push_str(&format!("Writing Style: {}\n", self.style));
        block.push_str(&format!(
            "Voice Description: {}\n",
            self.description.as_deref().unwrap_or("No description")
        ));

        if !self.writing_samples.is_empty() {
            block.push_str(&format!(
                "Sample Writings:\n{}",
                self.writing_samples.join("\n---\n")
            ));
        }

        block.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_block_with_samples() {
        let voice = VoiceContext {
            style: "casual".to_string(),
            description: Some("Short punchy sentences".to_string()),
            writing_samples: vec!["First sample".to_string(), "Second sample".to_string()],
        };

        let block = voice.prompt_block();
        assert!(block.contains("Writing Style: casual"));
        assert!(block.contains("Voice Description: Short punchy sentences"));
        assert!(block.contains("First sample\n---\nSecond sample"));
    }

    #[test]
    fn test_prompt_block_without_description_or_samples() {
        let voice = VoiceContext {
            style: "professional".to_string(),
            description: None,
            writing_samples: vec![],
        };

        let block = voice.prompt_block();
        assert!(block.contains("Voice Description: No description"));
        assert!(!block.contains("Sample Writings"));
    }
}
