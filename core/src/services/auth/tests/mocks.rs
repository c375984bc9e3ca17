//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::domain::value_objects::{NewProfile, ProfileUpdate, UserProfile};
use crate::errors::DomainError;
use crate::services::provisioning::UserProvisioner;

/// User-management stand-in that fails its first `failures` calls
pub struct MockProvisioner {
    failures: u32,
    calls: AtomicU32,
    pub created: Mutex<Vec<NewProfile>>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
}

impl MockProvisioner {
    pub fn new() -> Self {
        Self::failing(0)
    }

    pub fn failing(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
            created: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_attempt(&self) -> Result<(), DomainError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n <= self.failures {
            return Err(DomainError::Collaborator {
                message: format!("user-management unavailable (call {})", n),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserProvisioner for MockProvisioner {
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, DomainError> {
        self.next_attempt()?;
        self.created.lock().unwrap().push(profile.clone());
        Ok(UserProfile {
            id: Some(500),
            name: Some(profile.name.clone()),
            email: Some(profile.email.clone()),
            designation: profile.designation.clone(),
            ..Default::default()
        })
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DomainError> {
        self.next_attempt()?;
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}
