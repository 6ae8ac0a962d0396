//! Database integration for seeding placeholder data.
//!
//! The [`Seeder`] creates the dashboard tables if they are missing and
//! bulk-inserts the embedded dataset with conflict-skip semantics.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
