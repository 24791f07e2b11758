use crate::{db, Result};
use async_trait::async_trait;
use deadpool_sqlite::Pool;
use std::sync::Arc;

/// Hash + list storage for leads. The request flow only ever writes.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn put(&self, key: &str, fields: Vec<(String, String)>) -> Result<()>;

    async fn append(&self, list: &str, key: &str) -> Result<()>;
}

pub struct SqliteLeadStore {
    pool: Arc<Pool>,
}

impl SqliteLeadStore {
    pub fn new(pool: &Arc<Pool>) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn fields(&self, key: &str) -> Result<Vec<(String, String)>> {
        db::lead::queries::select_fields(key.into(), &self.pool).await
    }

    pub async fn list(&self, list: &str, limit: i64) -> Result<Vec<String>> {
        db::lead::queries::select_list(list.into(), limit, &self.pool).await
    }
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn put(&self, key: &str, fields: Vec<(String, String)>) -> Result<()> {
        db::lead::queries::put_fields(key.into(), fields, &self.pool).await
    }

    async fn append(&self, list: &str, key: &str) -> Result<()> {
        db::lead::queries::append(list.into(), key.into(), &self.pool)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use super::{LeadStore, SqliteLeadStore};
    use crate::{db, Result};
    use actix_web::test;
    use std::sync::Arc;

    #[test]
    async fn put_then_append() -> Result<()> {
        let store = SqliteLeadStore::new(&Arc::new(db::test::pool().await));
        let fields = vec![("email".to_string(), "jane@example.com".to_string())];
        store.put("lead:1", fields.clone()).await?;
        store.append("leads:test", "lead:1").await?;
        store.put("lead:2", fields.clone()).await?;
        store.append("leads:test", "lead:2").await?;
        assert_eq!(fields, store.fields("lead:1").await?);
        assert_eq!(
            vec!["lead:2".to_string(), "lead:1".to_string()],
            store.list("leads:test", 10).await?,
        );
        assert!(store.list("leads:other", 10).await?.is_empty());
        Ok(())
    }
}
