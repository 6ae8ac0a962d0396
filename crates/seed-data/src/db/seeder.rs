//! Database seeding for the dashboard tables.

use futures_util::future;
use sqlx::PgPool;
use sqlx::postgres::PgQueryResult;
use thiserror::Error;
use tracing::{error, info};

use crate::data::{SeedCustomer, SeedData, SeedInvoice, SeedRevenue, SeedUser};
use dashboard::auth;
use dashboard::errors::AppError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    Password(#[from] AppError),
}

/// Totals of rows actually inserted by a seed run.
///
/// A conflict-skipped insert reports zero affected rows, so reseeding an
/// already-populated database yields all-zero totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Seeder for the dashboard's placeholder dataset.
///
/// Tables are created only if missing and every insert skips on unique-key
/// conflict, so a run can be repeated indefinitely.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the full seed procedure: Users, Customers, Invoices, Revenue.
    ///
    /// Invoices carry a foreign key to customers, so the customers stage
    /// must settle before the invoices stage starts. A stage failure halts
    /// the remaining stages; already-committed stages are not rolled back,
    /// and re-running is the recovery path.
    pub async fn run(&self, data: &SeedData) -> Result<SeedSummary, SeedError> {
        self.enable_uuid_extension().await?;

        let users = self
            .seed_users(&data.users)
            .await
            .inspect_err(|e| error!("Error seeding users: {e}"))?;
        let customers = self
            .seed_customers(&data.customers)
            .await
            .inspect_err(|e| error!("Error seeding customers: {e}"))?;
        let invoices = self
            .seed_invoices(&data.invoices)
            .await
            .inspect_err(|e| error!("Error seeding invoices: {e}"))?;
        let revenue = self
            .seed_revenue(&data.revenue)
            .await
            .inspect_err(|e| error!("Error seeding revenue: {e}"))?;

        Ok(SeedSummary {
            users,
            customers,
            invoices,
            revenue,
        })
    }

    /// Enables server-side UUID generation for the id columns.
    ///
    /// Fatal if the engine cannot provide it; nothing is created before
    /// this succeeds.
    async fn enable_uuid_extension(&self) -> Result<(), SeedError> {
        sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Seeds login users, hashing each password before insertion.
    pub async fn seed_users(&self, users: &[SeedUser]) -> Result<u64, SeedError> {
        info!("Seeding {} users...", users.len());

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Hashing is independent per user; only the inserts go through
        // the pool.
        let mut hashed = Vec::with_capacity(users.len());
        for user in users {
            hashed.push(auth::hash_password(user.password)?);
        }

        let inserts = users.iter().zip(&hashed).map(|(user, password)| {
            sqlx::query(
                r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (email) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(user.name)
            .bind(user.email)
            .bind(password.as_str())
            .execute(&self.pool)
        });

        let inserted = settled_row_count(future::join_all(inserts).await)?;
        info!("Seeded {} users", inserted);
        Ok(inserted)
    }

    /// Seeds customers.
    pub async fn seed_customers(&self, customers: &[SeedCustomer]) -> Result<u64, SeedError> {
        info!("Seeding {} customers...", customers.len());

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                image_url TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let inserts = customers.iter().map(|customer| {
            sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (email) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(customer.name)
            .bind(customer.email)
            .bind(customer.image_url)
            .execute(&self.pool)
        });

        let inserted = settled_row_count(future::join_all(inserts).await)?;
        info!("Seeded {} customers", inserted);
        Ok(inserted)
    }

    /// Seeds invoices. The customers they reference must already be in
    /// place or the foreign key rejects the row.
    pub async fn seed_invoices(&self, invoices: &[SeedInvoice]) -> Result<u64, SeedError> {
        info!("Seeding {} invoices...", invoices.len());

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                customer_id UUID NOT NULL,
                amount INTEGER NOT NULL,
                status VARCHAR(255) NOT NULL,
                date DATE NOT NULL,
                FOREIGN KEY (customer_id) REFERENCES customers(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let inserts = invoices.iter().map(|invoice| {
            sqlx::query(
                r#"
                INSERT INTO invoices (customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(invoice.customer_id)
            .bind(invoice.amount)
            .bind(invoice.status.as_str())
            .bind(invoice.date)
            .execute(&self.pool)
        });

        let inserted = settled_row_count(future::join_all(inserts).await)?;
        info!("Seeded {} invoices", inserted);
        Ok(inserted)
    }

    /// Seeds monthly revenue.
    pub async fn seed_revenue(&self, revenue: &[SeedRevenue]) -> Result<u64, SeedError> {
        info!("Seeding {} revenue records...", revenue.len());

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS revenue (
                month VARCHAR(4) PRIMARY KEY,
                revenue INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let inserts = revenue.iter().map(|rev| {
            sqlx::query(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            )
            .bind(rev.month)
            .bind(rev.revenue)
            .execute(&self.pool)
        });

        let inserted = settled_row_count(future::join_all(inserts).await)?;
        info!("Seeded {} revenue records", inserted);
        Ok(inserted)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Sums affected rows once every insert in a batch has settled,
/// propagating the first failure in dataset order.
fn settled_row_count(
    results: Vec<Result<PgQueryResult, sqlx::Error>>,
) -> Result<u64, SeedError> {
    let mut inserted = 0;
    for result in results {
        inserted += result?.rows_affected();
    }
    Ok(inserted)
}
