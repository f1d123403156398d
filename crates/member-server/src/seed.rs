//! Startup seed data

use member_types::Member;
use tracing::info;

use crate::storage::{MemberRepository, StoreError};

/// Inserts the two fixed demo members at process start. Under a fresh store
/// they receive ids 1 and 2.
pub async fn insert_test_data(store: &dyn MemberRepository) -> Result<(), StoreError> {
    let m1 = store.save(Member::new("member1", "email1")).await?;
    let m2 = store.save(Member::new("member2", "email2")).await?;
    info!("Seeded members {:?} and {:?}", m1.id, m2.id);
    Ok(())
}
