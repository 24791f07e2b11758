use crate::conf::Conf;
use crate::{db, Error, Result};

pub async fn run(args: &[String], conf: Conf) -> Result<()> {
    let first_arg = match args.first() {
        Some(some) => some,
        None => Err(Error::CLI("No DB actions passed".into()))?,
    };

    match first_arg.as_str() {
        // Opening the pool applies pending migrations
        "migrate" => {
            db::pool(conf.db_path()?).await?;
        }
        _ => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}
