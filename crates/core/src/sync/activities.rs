//! Activity compatibility check between Harvest and Redmine.

use std::collections::BTreeSet;

use harvestmine_domain::{Activity, ActivityId, ActivityMap, Result, SyncError};

/// Build the activity map for the configured names.
///
/// Fails with [`SyncError::UnknownActivities`] listing every configured name
/// that Redmine does not know, sorted. When Redmine reports the same name
/// twice the first id wins.
///
/// # Errors
/// `SyncError::UnknownActivities` when any configured name is missing.
pub fn resolve_activities<S: AsRef<str>>(
    configured: &[S],
    tracker_activities: &[Activity],
) -> Result<ActivityMap> {
    let mut map = ActivityMap::new();
    let mut missing = BTreeSet::new();

    for name in configured.iter().map(AsRef::as_ref) {
        match tracker_activities.iter().find(|activity| activity.name == name) {
            Some(activity) => map.insert(name, activity.id),
            None => {
                missing.insert(name.to_string());
            }
        }
    }

    if missing.is_empty() {
        Ok(map)
    } else {
        Err(SyncError::UnknownActivities(missing.into_iter().collect()))
    }
}

/// Pick the activity for an entry: its own task if mapped, else the default.
#[must_use]
pub fn resolve_activity<'a>(
    activities: &ActivityMap,
    task: &'a str,
    default_activity: &'a str,
) -> Option<(&'a str, ActivityId)> {
    activities
        .get(task)
        .map(|id| (task, id))
        .or_else(|| activities.get(default_activity).map(|id| (default_activity, id)))
}
