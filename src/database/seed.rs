use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::database::activity_store::ActivityMap;
use crate::models::Activity;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("activity name must not be empty")]
    EmptyName,
    #[error("activity '{name}' must allow at least one participant")]
    InvalidCapacity { name: String },
    #[error("activity '{name}' has {count} participants but allows {max}")]
    OverCapacity {
        name: String,
        count: usize,
        max: usize,
    },
    #[error("activity '{name}' lists {email} more than once")]
    DuplicateParticipant { name: String, email: String },
}

const SEED_ACTIVITIES: &[(&str, &str, &str, usize, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly games",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing and sculpture techniques",
        "Mondays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and produce plays and performances",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        16,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Science Club",
        "Run experiments and explore scientific discoveries",
        "Fridays, 2:00 PM - 3:30 PM",
        24,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// The built-in Mergington High School catalog.
pub fn default_activities() -> ActivityMap {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(*description, *schedule, *max, participants),
            )
        })
        .collect()
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ActivityMap, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&activities)?;
    Ok(activities)
}

pub fn validate(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        if name.trim().is_empty() {
            return Err(SeedError::EmptyName);
        }
        if activity.max_participants == 0 {
            return Err(SeedError::InvalidCapacity { name: name.clone() });
        }
        if activity.participants.len() > activity.max_participants {
            return Err(SeedError::OverCapacity {
                name: name.clone(),
                count: activity.participants.len(),
                max: activity.max_participants,
            });
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    name: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
