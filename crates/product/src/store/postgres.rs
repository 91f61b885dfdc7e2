//! PostgreSQL implementation of the `ProductStore` trait.
//!
//! Every statement binds its values; nothing is interpolated into SQL text.

use crate::error::{ProductError, ProductResult};
use crate::store::traits::ProductStore;
use crate::types::{Product, ProductInput};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, info, instrument};

const SCHEMA_SQL: &str = include_str!("../../sql/products.sql");

const SELECT_ALL: &str = "SELECT id, name, quantity, price FROM products";
const SELECT_ONE: &str = "SELECT id, name, quantity, price FROM products WHERE id = $1";
const INSERT: &str = "INSERT INTO products (name, quantity, price) VALUES ($1, $2, $3) \
                      RETURNING id, name, quantity, price";
const INSERT_DEFAULT_QUANTITY: &str = "INSERT INTO products (name, price) VALUES ($1, $2) \
                                       RETURNING id, name, quantity, price";
const UPDATE: &str = "UPDATE products SET name = $1, quantity = $2, price = $3 WHERE id = $4 \
                      RETURNING id, name, quantity, price";
const UPDATE_DEFAULT_QUANTITY: &str =
    "UPDATE products SET name = $1, quantity = DEFAULT, price = $2 WHERE id = $3 \
     RETURNING id, name, quantity, price";
const DELETE: &str = "DELETE FROM products WHERE id = $1";

/// Connection pool settings for [`PostgresProductStore::connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 20,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

/// PostgreSQL-backed product store over the `products` table.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Open a connection pool against `database_url`.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> ProductResult<Self> {
        let options = database_url
            .parse::<PgConnectOptions>()
            .map_err(|e| ProductError::Config(format!("Invalid database URL: {}", e)))?;
        Self::connect_with(options, settings).await
    }

    /// Connect using structured options, so credentials never pass
    /// through URL parsing.
    pub async fn connect_with(
        options: PgConnectOptions,
        settings: &PoolSettings,
    ) -> ProductResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .connect_with(options)
            .await
            .map_err(|e| ProductError::Config(format!("Failed to connect to database: {}", e)))?;

        info!(
            max_connections = settings.max_connections,
            "Connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    /// Create from an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `products` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> ProductResult<()> {
        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::Storage(format!("Failed to create products table: {}", e)))?;
        info!("Products table ready");
        Ok(())
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        sqlx::query_as::<_, Product>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create(&self, input: &ProductInput) -> ProductResult<Product> {
        let query = match input.quantity {
            Some(quantity) => sqlx::query_as::<_, Product>(INSERT)
                .bind(&input.name)
                .bind(quantity)
                .bind(input.price),
            None => sqlx::query_as::<_, Product>(INSERT_DEFAULT_QUANTITY)
                .bind(&input.name)
                .bind(input.price),
        };

        let product = query.fetch_one(&self.pool).await?;
        debug!(id = product.id, "Inserted product");
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: &ProductInput) -> ProductResult<Product> {
        let query = match input.quantity {
            Some(quantity) => sqlx::query_as::<_, Product>(UPDATE)
                .bind(&input.name)
                .bind(quantity)
                .bind(input.price)
                .bind(id),
            None => sqlx::query_as::<_, Product>(UPDATE_DEFAULT_QUANTITY)
                .bind(&input.name)
                .bind(input.price)
                .bind(id),
        };

        // RETURNING yields no row when nothing matched the id
        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    //! These run against a live database:
    //! `TEST_DATABASE_URL=postgres://... cargo test -p product -- --ignored`

    use super::*;
    use assert_matches::assert_matches;

    async fn fresh_store() -> PostgresProductStore {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let store = PostgresProductStore::connect(&url, &PoolSettings::default())
            .await
            .unwrap();
        store.ensure_schema().await.unwrap();
        sqlx::query("TRUNCATE products RESTART IDENTITY")
            .execute(store.pool())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    #[ignore]
    async fn test_first_insert_gets_id_one() {
        let store = fresh_store().await;
        let created = store
            .create(&ProductInput::new("keyboard", Some(100), 500.0))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_by_id(1).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore]
    async fn test_crud_cycle() {
        let store = fresh_store().await;

        let created = store
            .create(&ProductInput::new("connector", None, 10.0))
            .await
            .unwrap();
        assert_eq!(created.quantity, 0);

        let updated = store
            .update(created.id, &ProductInput::new("connector", Some(10), 10.0))
            .await
            .unwrap();
        assert_eq!(updated.quantity, 10);

        assert_eq!(store.list_all().await.unwrap(), vec![updated]);

        assert!(store.delete_by_id(created.id).await.unwrap());
        assert!(!store.delete_by_id(created.id).await.unwrap());
        assert_matches!(store.get_by_id(created.id).await, Err(ProductError::NotFound(_)));
        assert_matches!(
            store.update(created.id, &ProductInput::new("x", None, 1.0)).await,
            Err(ProductError::NotFound(_))
        );
    }

    #[tokio::test]
    #[ignore]
    async fn test_name_is_bound_not_interpolated() {
        let store = fresh_store().await;
        let hostile = "x'); DROP TABLE products; --";

        let created = store
            .create(&ProductInput::new(hostile, Some(1), 1.0))
            .await
            .unwrap();
        assert_eq!(store.get_by_id(created.id).await.unwrap().name, hostile);
    }
}
