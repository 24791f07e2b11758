use crate::{service::filesystem::data_dir_file_path, Result};
use std::{env, path::PathBuf};

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_FROM: &str = "Ed at Semperr <ed@semperr.com>";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Clone)]
pub struct Conf {
    pub resend_api_key: String,
    pub resend_api_url: String,
    pub email_from: String,
    pub bind_addr: String,
    pub db_path: Option<PathBuf>,
}

impl Conf {
    pub fn from_env() -> Conf {
        Conf::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Conf {
        let var = |name: &str| var(name).filter(|it| !it.trim().is_empty());
        Conf {
            resend_api_key: var("RESEND_API_KEY").unwrap_or_default(),
            resend_api_url: var("RESEND_API_URL").unwrap_or(DEFAULT_RESEND_API_URL.into()),
            email_from: var("AUDIT_EMAIL_FROM").unwrap_or(DEFAULT_EMAIL_FROM.into()),
            bind_addr: var("AUDIT_BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.into()),
            db_path: var("AUDIT_DB_PATH").map(PathBuf::from),
        }
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => data_dir_file_path("leads.db"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn from_vars_defaults() {
        let conf = Conf::from_vars(|_| None);
        assert_eq!("", conf.resend_api_key);
        assert_eq!(super::DEFAULT_RESEND_API_URL, conf.resend_api_url);
        assert_eq!(super::DEFAULT_EMAIL_FROM, conf.email_from);
        assert_eq!(super::DEFAULT_BIND_ADDR, conf.bind_addr);
        assert!(conf.db_path.is_none());
    }

    #[test]
    fn from_vars_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RESEND_API_KEY", "re_123"),
            ("AUDIT_EMAIL_FROM", "Team <team@example.com>"),
            ("AUDIT_BIND_ADDR", "0.0.0.0:9000"),
            ("AUDIT_DB_PATH", "/tmp/leads.db"),
            ("RESEND_API_URL", "  "),
        ]
        .into_iter()
        .collect();
        let conf = Conf::from_vars(|name| vars.get(name).map(|it| it.to_string()));
        assert_eq!("re_123", conf.resend_api_key);
        assert_eq!("Team <team@example.com>", conf.email_from);
        assert_eq!("0.0.0.0:9000", conf.bind_addr);
        assert_eq!(Some(PathBuf::from("/tmp/leads.db")), conf.db_path);
        assert_eq!(super::DEFAULT_RESEND_API_URL, conf.resend_api_url);
    }
}
