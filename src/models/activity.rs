use serde::{Deserialize, Serialize};

/// One extracurricular offering with a bounded roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Removes `email` keeping the order of the remaining roster.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}
