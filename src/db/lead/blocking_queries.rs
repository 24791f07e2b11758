use super::schema::{self, FieldColumns, ListColumns};
use crate::Result;
use rusqlite::{named_params, Connection};

/// Writes every field under `key`, overwriting fields that already exist.
pub fn put_fields(key: &str, fields: &[(String, String)], conn: &mut Connection) -> Result<()> {
    let sql = format!(
        r#"
            INSERT OR REPLACE INTO {table} ({key}, {field}, {value})
            VALUES (:key, :field, :value)
        "#,
        table = schema::FIELD_TABLE_NAME,
        key = FieldColumns::Key.as_str(),
        field = FieldColumns::Field.as_str(),
        value = FieldColumns::Value.as_str(),
    );
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql)?;
        for (field, value) in fields {
            stmt.execute(named_params! {
                ":key": key,
                ":field": field,
                ":value": value,
            })?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn select_fields(key: &str, conn: &Connection) -> Result<Vec<(String, String)>> {
    let sql = format!(
        r#"
            SELECT {field}, {value}
            FROM {table}
            WHERE {key} = :key
            ORDER BY ROWID
        "#,
        table = schema::FIELD_TABLE_NAME,
        key = FieldColumns::Key.as_str(),
        field = FieldColumns::Field.as_str(),
        value = FieldColumns::Value.as_str(),
    );
    conn.prepare(&sql)?
        .query_map(named_params! { ":key": key }, |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Pushes `key` onto the head of `list` and returns the new list length.
pub fn append(list: &str, key: &str, conn: &Connection) -> Result<i64> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({list}, {key})
            VALUES (:list, :key)
        "#,
        table = schema::LIST_TABLE_NAME,
        list = ListColumns::List.as_str(),
        key = ListColumns::Key.as_str(),
    );
    conn.execute(&sql, named_params! { ":list": list, ":key": key })?;
    len(list, conn)
}

pub fn len(list: &str, conn: &Connection) -> Result<i64> {
    let sql = format!(
        r#"
            SELECT count(*)
            FROM {table}
            WHERE {list} = :list
        "#,
        table = schema::LIST_TABLE_NAME,
        list = ListColumns::List.as_str(),
    );
    conn.query_row(&sql, named_params! { ":list": list }, |row| row.get(0))
        .map_err(Into::into)
}

/// Newest first, the same order a list push to the head would produce.
pub fn select_list(list: &str, limit: i64, conn: &Connection) -> Result<Vec<String>> {
    let sql = format!(
        r#"
            SELECT {key}
            FROM {table}
            WHERE {list} = :list
            ORDER BY {id} DESC
            LIMIT :limit
        "#,
        table = schema::LIST_TABLE_NAME,
        id = ListColumns::Id.as_str(),
        list = ListColumns::List.as_str(),
        key = ListColumns::Key.as_str(),
    );
    conn.prepare(&sql)?
        .query_map(named_params! { ":list": list, ":limit": limit }, |row| {
            row.get(0)
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

#[cfg(test)]
mod test {
    use crate::{db::test::conn, Result};

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn put_and_select_fields() -> Result<()> {
        let mut conn = conn();
        let lead = fields(&[("email", "a@example.com"), ("teamSize", "5")]);
        super::put_fields("lead:1", &lead, &mut conn)?;
        assert_eq!(lead, super::select_fields("lead:1", &conn)?);
        assert!(super::select_fields("lead:2", &conn)?.is_empty());
        Ok(())
    }

    #[test]
    fn put_fields_overwrites_existing_field() -> Result<()> {
        let mut conn = conn();
        super::put_fields("lead:1", &fields(&[("email", "old@example.com")]), &mut conn)?;
        super::put_fields("lead:1", &fields(&[("email", "new@example.com")]), &mut conn)?;
        assert_eq!(
            fields(&[("email", "new@example.com")]),
            super::select_fields("lead:1", &conn)?,
        );
        Ok(())
    }

    #[test]
    fn append_returns_list_len() -> Result<()> {
        let conn = conn();
        assert_eq!(1, super::append("leads:a", "lead:1", &conn)?);
        assert_eq!(2, super::append("leads:a", "lead:2", &conn)?);
        assert_eq!(1, super::append("leads:b", "lead:3", &conn)?);
        assert_eq!(2, super::len("leads:a", &conn)?);
        Ok(())
    }

    #[test]
    fn select_list_newest_first() -> Result<()> {
        let conn = conn();
        super::append("leads:a", "lead:1", &conn)?;
        super::append("leads:a", "lead:2", &conn)?;
        super::append("leads:a", "lead:3", &conn)?;
        assert_eq!(
            vec!["lead:3".to_string(), "lead:2".to_string()],
            super::select_list("leads:a", 2, &conn)?,
        );
        Ok(())
    }
}
