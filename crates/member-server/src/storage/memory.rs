//! In-memory member store using DashMap

use dashmap::DashMap;
use member_types::Member;
use std::sync::atomic::{AtomicI64, Ordering};

use super::{MemberRepository, StoreError};

/// Member store backed by a concurrent map.
///
/// Ids come from a monotonic counter, so no two inserts can receive the
/// same id and an id is never reused after deletion within one process
/// lifetime. Saving a member that already carries an id advances the
/// counter past it, keeping later inserts collision-free.
pub struct InMemoryMemberStore {
    members: DashMap<i64, Member>,
    next_id: AtomicI64,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self {
            members: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MemberRepository for InMemoryMemberStore {
    async fn save(&self, mut member: Member) -> Result<Member, StoreError> {
        let id = match member.id {
            Some(id) => {
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        member.id = Some(id);
        self.members.insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError> {
        Ok(self.members.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Member>, StoreError> {
        let mut members: Vec<Member> = self
            .members
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by_key(|m| m.id);
        Ok(members)
    }

    async fn delete(&self, member: &Member) -> Result<(), StoreError> {
        if let Some(id) = member.id {
            self.members.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_round_trip() {
        let store = InMemoryMemberStore::new();

        let saved = store.save(Member::new("member1", "email1")).await.unwrap();
        assert_eq!(saved.id, Some(1));

        let found = store.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn assigns_distinct_monotonic_ids() {
        let store = InMemoryMemberStore::new();

        let mut ids = Vec::new();
        for n in 0..5 {
            let saved = store
                .save(Member::new(format!("m{n}"), format!("e{n}")))
                .await
                .unwrap();
            ids.push(saved.id.unwrap());
        }
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn find_all_returns_everything_in_id_order() {
        let store = InMemoryMemberStore::new();

        let a = store.save(Member::new("a", "ea")).await.unwrap();
        let b = store.save(Member::new("b", "eb")).await.unwrap();

        assert_eq!(store.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn delete_then_find_is_empty() {
        let store = InMemoryMemberStore::new();

        let saved = store.save(Member::new("a", "ea")).await.unwrap();
        store.delete(&saved).await.unwrap();

        assert_eq!(store.find_by_id(saved.id.unwrap()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_a_noop() {
        let store = InMemoryMemberStore::new();

        let ghost = Member {
            id: Some(999),
            username: "ghost".to_string(),
            email: "ghost".to_string(),
        };
        store.delete(&ghost).await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_with_id_replaces_existing_record() {
        let store = InMemoryMemberStore::new();

        let original = store.save(Member::new("a", "old")).await.unwrap();
        let replacement = Member {
            id: original.id,
            username: "a".to_string(),
            email: "new".to_string(),
        };
        store.save(replacement.clone()).await.unwrap();

        assert_eq!(
            store.find_by_id(original.id.unwrap()).await.unwrap(),
            Some(replacement)
        );
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_does_not_let_new_inserts_collide() {
        let store = InMemoryMemberStore::new();

        let explicit = Member {
            id: Some(10),
            username: "pinned".to_string(),
            email: "pinned".to_string(),
        };
        store.save(explicit).await.unwrap();

        let fresh = store.save(Member::new("fresh", "fresh")).await.unwrap();
        assert_eq!(fresh.id, Some(11));
    }
}
