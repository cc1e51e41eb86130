//! Project identity generation.
//!
//! # Invariants
//! - Generated ids never repeat within one generator's lifetime.
//! - Generated ids are never the nil UUID.

use crate::model::project::ProjectId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh project ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ProjectId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> ProjectId {
        (**self).next_id()
    }
}

/// Random v4 UUID ids. Default for real boards.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ProjectId {
        // v4 uuids carry version bits, so they are never nil.
        ProjectId::from_uuid(Uuid::new_v4()).unwrap_or_else(|| unreachable!("v4 uuid is nil"))
    }
}

/// Deterministic ids `00000000-0000-0000-0000-000000000001`, `..02`, ...
///
/// Used by tests and scripted demos that need stable output.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ProjectId {
        let value = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        // Counter starts at 1, so the uuid is never nil.
        ProjectId::from_uuid(Uuid::from_u128(u128::from(value)))
            .unwrap_or_else(|| unreachable!("sequential ids start at 1"))
    }
}
