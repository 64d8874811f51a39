//! Thread lifecycle status

use serde::{Deserialize, Serialize};

/// Where a thread sits in its publishing lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Draft,
    Scheduled,
    Posted,
}

impl ThreadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadStatus::Draft => "draft",
            ThreadStatus::Scheduled => "scheduled",
            ThreadStatus::Posted => "posted",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(ThreadStatus::Draft),
            "scheduled" => Some(ThreadStatus::Scheduled),
            "posted" => Some(ThreadStatus::Posted),
            _ => None,
        }
    }
}

impl Default for ThreadStatus {
    fn default() -> Self {
        ThreadStatus::Draft
    }
}

impl std::fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
