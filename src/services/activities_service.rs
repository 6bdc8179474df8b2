use thiserror::Error;
use tracing::info;

use crate::database::{ActivityMap, ActivityStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,
    #[error("Activity is full")]
    Full,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOutcome {
    pub message: String,
    pub participants_count: usize,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.snapshot().await
}

pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<RegistryOutcome, RegistryError> {
    let count = store
        .update(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(RegistryError::AlreadyRegistered);
            }
            if activity.is_full() {
                return Err(RegistryError::Full);
            }
            activity.participants.push(email.to_string());
            Ok(activity.participants.len())
        })
        .await
        .ok_or(RegistryError::NotFound)??;

    info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
    Ok(RegistryOutcome {
        message: format!("Signed up {} for {}", email, activity_name),
        participants_count: count,
    })
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<RegistryOutcome, RegistryError> {
    let count = store
        .update(activity_name, |activity| {
            if !activity.remove_participant(email) {
                return Err(RegistryError::NotRegistered);
            }
            Ok(activity.participants.len())
        })
        .await
        .ok_or(RegistryError::NotFound)??;

    info!(activity = %activity_name, email = %email, participants = count, "unregister accepted");
    Ok(RegistryOutcome {
        message: format!("Unregistered {} from {}", email, activity_name),
        participants_count: count,
    })
}
