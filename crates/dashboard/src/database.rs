use crate::errors::AppError;
use crate::models::{Customer, Invoice, Revenue, User};
use sqlx::PgPool;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn latest_invoices(&self, limit: i64) -> Result<Vec<Invoice>, AppError> {
        let invoices: Vec<Invoice> = sqlx::query_as(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            ORDER BY date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn monthly_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        let revenue: Vec<Revenue> = sqlx::query_as(
            r#"
            SELECT month, revenue
            FROM revenue
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(revenue)
    }

    pub async fn count_customers(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_invoices(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
