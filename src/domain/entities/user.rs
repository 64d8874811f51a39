//! User entity - account owner for voice packs, threads, and clients

use crate::domain::value_objects::UserId;

/// A Twin account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub subscription_tier: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            first_name: None,
            last_name: None,
            profile_image_url: None,
            subscription_tier: "free".to_string(),
        }
    }
}
