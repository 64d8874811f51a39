//! Hook template entity - reusable viral opening lines

use crate::domain::value_objects::{HookId, HookType};

/// A reusable hook template shown in the composer
#[derive(Debug, Clone)]
pub struct Hook {
    pub id: HookId,
    pub category: HookType,
    pub template_text: String,
    pub is_premium: bool,
}

impl Hook {
    pub fn new(category: HookType, template_text: impl Into<String>) -> Self {
        Self {
            id: HookId::new(),
            category,
            template_text: template_text.into(),
            is_premium: false,
        }
    }
}
