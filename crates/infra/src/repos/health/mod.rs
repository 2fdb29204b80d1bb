use sqlx::PgPool;

/// Reports whether the storage backend is reachable
#[async_trait::async_trait]
pub trait IHealthRepo: Send + Sync {
    async fn check(&self) -> anyhow::Result<()>;
}

pub struct InMemoryHealthRepo {}

#[async_trait::async_trait]
impl IHealthRepo for InMemoryHealthRepo {
    async fn check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct PostgresHealthRepo {
    pool: PgPool,
}

impl PostgresHealthRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IHealthRepo for PostgresHealthRepo {
    async fn check(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT NOW()").execute(&self.pool).await?;
        Ok(())
    }
}
