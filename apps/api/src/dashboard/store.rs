//! Explicitly owned in-memory stores.
//!
//! Dashboard state lives in one `Stores` object held by `AppState`, not in
//! module-level statics. Each store is a mutex-guarded repository with a
//! single-writer discipline: the lock is held for exactly one operation and
//! never across an await. The `Repository` trait is the seam a file- or
//! database-backed implementation would slot into.

use std::sync::Mutex;

use uuid::Uuid;

use crate::dashboard::models::{Application, DashboardStats, Notification, SavedJob};
use crate::models::Proposal;

/// Anything addressable by a stable id.
pub trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for Application {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for SavedJob {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Notification {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Proposal {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Minimal repository surface: get, list, save (upsert), remove.
pub trait Repository<T: Clone>: Send + Sync {
    fn get(&self, id: Uuid) -> Option<T>;
    fn list(&self) -> Vec<T>;
    fn save(&self, item: T) -> T;
    fn remove(&self, id: Uuid) -> bool;
}

/// Vec-backed store preserving insertion order. `save` replaces an existing
/// item with the same id in place, so updates don't reorder listings.
pub struct MemoryStore<T> {
    items: Mutex<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + HasId + Send> Repository<T> for MemoryStore<T> {
    fn get(&self, id: Uuid) -> Option<T> {
        let items = self.items.lock().expect("store mutex poisoned");
        items.iter().find(|item| item.id() == id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.items.lock().expect("store mutex poisoned").clone()
    }

    fn save(&self, item: T) -> T {
        let mut items = self.items.lock().expect("store mutex poisoned");
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        item
    }

    fn remove(&self, id: Uuid) -> bool {
        let mut items = self.items.lock().expect("store mutex poisoned");
        let before = items.len();
        items.retain(|item| item.id() != id);
        items.len() != before
    }
}

/// All dashboard stores, created once at startup and shared via `AppState`.
#[derive(Default)]
pub struct Stores {
    pub applications: MemoryStore<Application>,
    pub saved_jobs: MemoryStore<SavedJob>,
    pub proposals: MemoryStore<Proposal>,
    pub notifications: MemoryStore<Notification>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Derives the dashboard counts from the current store contents.
pub fn compute_stats(stores: &Stores) -> DashboardStats {
    let applications = stores.applications.list();
    let mut by_status = std::collections::HashMap::new();
    for application in &applications {
        *by_status.entry(application.status).or_insert(0) += 1;
    }

    DashboardStats {
        applications_total: applications.len(),
        applications_by_status: by_status,
        saved_jobs: stores.saved_jobs.list().len(),
        proposals_submitted: stores.proposals.list().len(),
        unread_notifications: stores
            .notifications
            .list()
            .iter()
            .filter(|n| !n.read)
            .count(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::models::{ApplicationStatus, NotificationKind};
    use chrono::Utc;

    fn make_application(status: ApplicationStatus) -> Application {
        Application {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            job_title: "Platform Engineer".to_string(),
            company: "Acme".to_string(),
            status,
            notes: String::new(),
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let store = MemoryStore::new();
        let application = make_application(ApplicationStatus::Applied);
        let id = application.id;
        store.save(application);

        let fetched = store.get(id).unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.job_title, "Platform Engineer");
    }

    #[test]
    fn test_save_with_existing_id_updates_in_place() {
        let store = MemoryStore::new();
        let first = make_application(ApplicationStatus::Applied);
        let second = make_application(ApplicationStatus::Applied);
        let updated_id = first.id;
        store.save(first.clone());
        store.save(second);

        let mut updated = first;
        updated.status = ApplicationStatus::Interviewing;
        store.save(updated);

        let listed = store.list();
        assert_eq!(listed.len(), 2, "update must not duplicate");
        assert_eq!(listed[0].id, updated_id, "update must not reorder");
        assert_eq!(listed[0].status, ApplicationStatus::Interviewing);
        assert_eq!(listed[1].status, ApplicationStatus::Applied, "other items unaffected");
    }

    #[test]
    fn test_remove_reports_whether_anything_was_deleted() {
        let store = MemoryStore::new();
        let application = make_application(ApplicationStatus::Applied);
        let id = application.id;
        store.save(application);

        assert!(store.remove(id));
        assert!(!store.remove(id), "second remove finds nothing");
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        let ids: Vec<Uuid> = (0..5)
            .map(|_| store.save(make_application(ApplicationStatus::Applied)).id)
            .collect();
        let listed: Vec<Uuid> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_stats_derive_from_store_contents() {
        let stores = Stores::new();
        stores.applications.save(make_application(ApplicationStatus::Applied));
        stores.applications.save(make_application(ApplicationStatus::Applied));
        stores
            .applications
            .save(make_application(ApplicationStatus::Interviewing));
        stores.notifications.save(Notification::new(
            NotificationKind::System,
            "welcome".to_string(),
        ));
        let mut read = Notification::new(NotificationKind::System, "old".to_string());
        read.read = true;
        stores.notifications.save(read);

        let stats = compute_stats(&stores);
        assert_eq!(stats.applications_total, 3);
        assert_eq!(stats.applications_by_status[&ApplicationStatus::Applied], 2);
        assert_eq!(
            stats.applications_by_status[&ApplicationStatus::Interviewing],
            1
        );
        assert_eq!(stats.unread_notifications, 1);
        assert_eq!(stats.saved_jobs, 0);
        assert_eq!(stats.proposals_submitted, 0);
    }
}
