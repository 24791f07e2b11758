use crate::conf::Conf;
use crate::email::resend::ResendMailer;
use crate::lead::store::SqliteLeadStore;
use crate::service::AuditService;
use crate::{db, rest, Error, Result};
use actix_web::dev::Service;
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use futures_util::future::FutureExt;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    if conf.resend_api_key.is_empty() {
        return Err(Error::Conf("RESEND_API_KEY is not set".into()));
    }

    // All the worker threads are sharing a single connection pool and a single HTTP client
    let pool = Arc::new(db::pool(conf.db_path()?).await?);
    let service = Data::new(AuditService::new(
        Arc::new(SqliteLeadStore::new(&pool)),
        Arc::new(ResendMailer::new(&conf.resend_api_url, &conf.resend_api_key)),
        &conf.email_from,
    ));

    info!(bind_addr = conf.bind_addr, "Starting server");

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                let req_real_ip = req
                    .connection_info()
                    .realip_remote_addr()
                    .unwrap_or_default()
                    .to_string();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        info!(
                            req_method,
                            req_path,
                            req_real_ip,
                            res_status,
                            res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64(),
                        );
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(service.clone())
            .service(rest::automation_audit::resource("/automation-audit"))
            .service(rest::automation_audit::resource("/api/automation-audit"))
    })
    .bind(conf.bind_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
