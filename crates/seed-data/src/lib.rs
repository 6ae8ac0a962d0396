//! Placeholder data seeding for the Acme dashboard.
//!
//! This crate owns the embedded placeholder dataset and the [`db::Seeder`]
//! that loads it into PostgreSQL. Seeding is idempotent: tables are created
//! only if missing and every insert skips on unique-key conflict, so the
//! `seed` binary is safe to re-run against a populated database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let summary = Seeder::new(pool).run(&SeedData::placeholder()).await?;
//! tracing::info!("{} customers inserted", summary.customers);
//! ```

pub mod data;
pub mod db;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::data::{SeedCustomer, SeedData, SeedInvoice, SeedRevenue, SeedUser};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
}
