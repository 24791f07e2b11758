use crate::conf::Conf;
use crate::lead::store::SqliteLeadStore;
use crate::lead::LIST_NAME;
use crate::{db, Error, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

const DEFAULT_LIMIT: i64 = 100;

/// Prints stored leads as JSON lines, newest first.
pub async fn run(args: &[String], conf: Conf) -> Result<()> {
    let limit = match args.first() {
        Some(arg) => arg
            .parse::<i64>()
            .map_err(|_| Error::CLI(format!("Invalid limit: {arg}")))?,
        None => DEFAULT_LIMIT,
    };
    let pool = Arc::new(db::pool(conf.db_path()?).await?);
    let store = SqliteLeadStore::new(&pool);
    for key in store.list(LIST_NAME, limit).await? {
        println!("{}", to_json(&key, store.fields(&key).await?));
    }
    Ok(())
}

fn to_json(key: &str, fields: Vec<(String, String)>) -> Value {
    let mut res = Map::new();
    res.insert("key".into(), key.into());
    for (field, value) in fields {
        res.insert(field, value.into());
    }
    Value::Object(res)
}
