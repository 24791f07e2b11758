use super::blocking_queries;
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn put_fields(key: String, fields: Vec<(String, String)>, pool: &Pool) -> Result<()> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::put_fields(&key, &fields, conn))
        .await?
}

pub async fn select_fields(key: String, pool: &Pool) -> Result<Vec<(String, String)>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_fields(&key, conn))
        .await?
}

pub async fn append(list: String, key: String, pool: &Pool) -> Result<i64> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::append(&list, &key, conn))
        .await?
}

pub async fn select_list(list: String, limit: i64, pool: &Pool) -> Result<Vec<String>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_list(&list, limit, conn))
        .await?
}
