use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;

/// Reasons a roster mutation can be refused. The display strings double as
/// the `detail` field of the JSON error responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Participant not found")]
    ParticipantNotFound,
}

/// Process-wide collection of activities.
///
/// All reads and mutations go through this type. Precondition checks and the
/// mutation itself run under the same write lock, so concurrent signups can't
/// both pass the duplicate or capacity check. The lock is never held across
/// an await point.
pub struct ActivityDirectory {
    inner: RwLock<Vec<Activity>>,
}

impl ActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            inner: RwLock::new(activities),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(super::seed::seed_activities())
    }

    /// Current state of every activity, in definition order.
    pub fn snapshot(&self) -> Vec<Activity> {
        self.inner.read().clone()
    }

    /// Adds `email` to the roster of `activity_name`.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(DirectoryError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster of `activity_name`. Remaining entries
    /// keep their relative order.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::ParticipantNotFound)?;

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::new(vec![Activity {
            name: "Chess Club".to_string(),
            description: "Chess".to_string(),
            schedule: "Fridays".to_string(),
            max_participants: 3,
            participants: vec!["a@mergington.edu".to_string()],
        }])
    }

    #[test]
    fn signup_appends_in_order() {
        let dir = directory();
        dir.signup("Chess Club", "b@mergington.edu").unwrap();
        dir.signup("Chess Club", "c@mergington.edu").unwrap();

        let snapshot = dir.snapshot();
        assert_eq!(
            snapshot[0].participants,
            vec!["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let dir = directory();
        assert_eq!(
            dir.signup("Chess Club", "a@mergington.edu"),
            Err(DirectoryError::AlreadySignedUp)
        );
        assert_eq!(dir.snapshot()[0].participants.len(), 1);
    }

    #[test]
    fn signup_rejects_unknown_activity() {
        let dir = directory();
        assert_eq!(
            dir.signup("Debate Team", "a@mergington.edu"),
            Err(DirectoryError::ActivityNotFound)
        );
    }

    #[test]
    fn signup_rejects_full_activity() {
        let dir = directory();
        dir.signup("Chess Club", "b@mergington.edu").unwrap();
        dir.signup("Chess Club", "c@mergington.edu").unwrap();
        assert_eq!(
            dir.signup("Chess Club", "d@mergington.edu"),
            Err(DirectoryError::ActivityFull)
        );
        assert_eq!(dir.snapshot()[0].participants.len(), 3);
    }

    #[test]
    fn unregister_keeps_relative_order() {
        let dir = directory();
        dir.signup("Chess Club", "b@mergington.edu").unwrap();
        dir.signup("Chess Club", "c@mergington.edu").unwrap();

        dir.unregister("Chess Club", "b@mergington.edu").unwrap();
        assert_eq!(
            dir.snapshot()[0].participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn unregister_twice_fails_the_second_time() {
        let dir = directory();
        dir.unregister("Chess Club", "a@mergington.edu").unwrap();
        assert_eq!(
            dir.unregister("Chess Club", "a@mergington.edu"),
            Err(DirectoryError::ParticipantNotFound)
        );
    }

    #[test]
    fn unregister_rejects_unknown_activity() {
        let dir = directory();
        assert_eq!(
            dir.unregister("Debate Team", "a@mergington.edu"),
            Err(DirectoryError::ActivityNotFound)
        );
    }

    #[test]
    fn seeded_directory_matches_published_rosters() {
        let dir = ActivityDirectory::with_seed();
        let snapshot = dir.snapshot();

        let names: Vec<&str> = snapshot.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Chess Club", "Programming Class", "Gym Class"]);
        assert!(snapshot[0]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }
}
