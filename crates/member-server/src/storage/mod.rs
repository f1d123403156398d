//! Storage layer
//!
//! The repository is a trait so the HTTP layer stays agnostic of the
//! backing store; the only implementation today keeps everything in memory.

pub mod memory;

pub use memory::InMemoryMemberStore;

use async_trait::async_trait;
use member_types::Member;
use thiserror::Error;

/// Faults surfaced by a backing store.
///
/// The in-memory store never produces one, but the HTTP layer maps any
/// variant to an internal server error so a fallible backend can slot in.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed storage for member records.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Inserts the member, assigning the next id if it has none; a member
    /// that already carries an id replaces any existing record with that id.
    /// Returns the stored record with its id populated.
    async fn save(&self, member: Member) -> Result<Member, StoreError>;

    /// Looks up a member by id. A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError>;

    /// Returns every stored member, ordered by id.
    async fn find_all(&self) -> Result<Vec<Member>, StoreError>;

    /// Removes the record with the member's id; a no-op if the id is absent
    /// or the member has no id.
    async fn delete(&self, member: &Member) -> Result<(), StoreError>;
}
