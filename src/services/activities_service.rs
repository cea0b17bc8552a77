use serde_json::{json, Map, Value};

use crate::store::{ActivityDirectory, DirectoryError};

/// Builds the name -> record object for the activities listing. The object
/// keeps definition order (serde_json is built with `preserve_order`), so the
/// frontend renders activities the way the school publishes them.
pub fn list_activities(directory: &ActivityDirectory) -> Value {
    let mut out = Map::new();
    for activity in directory.snapshot() {
        out.insert(
            activity.name.clone(),
            json!({
                "description": activity.description,
                "schedule": activity.schedule,
                "max_participants": activity.max_participants,
                "participants": activity.participants,
            }),
        );
    }
    Value::Object(out)
}

pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.signup(activity_name, email)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.unregister(activity_name, email)?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
