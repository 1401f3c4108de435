//! Seam traits. The registry works against [`FamilyStore`] so a persistent
//! backend can be injected without touching the orchestration logic.

mod store;

pub use store::FamilyStore;
