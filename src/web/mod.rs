use std::sync::Arc;
use std::time::{Duration, Instant};
use rocket::{Build, Data, Request, Response, Rocket};
use rocket::fairing::{AdHoc, Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::{catchers, routes};
use tracing::info;

use crate::common::config::AppConfig;
use crate::common::logging::{events, short_uuid};
use crate::structures::{BuildInfo, Metrics};
use crate::web::page::WelcomePage;

pub mod catchers;
pub mod page;
pub mod routes;

// Per-request data cached by the fairing
struct RequestTrace {
    id: String,
    start: Instant,
}

// Logs every request/response pair and feeds the HTTP metrics
pub struct RequestFairing;

#[rocket::async_trait]
impl Fairing for RequestFairing {
    fn info(&self) -> Info {
        Info { name: "Request logging + HTTP metrics", kind: Kind::Request | Kind::Response }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let trace = req.local_cache(|| RequestTrace { id: short_uuid(), start: Instant::now() });
        info!(event = events::HTTP_REQUEST, request_id = %trace.id, method = %req.method(), uri = %req.uri(), msg = "Request received");
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let trace = req.local_cache(|| RequestTrace { id: short_uuid(), start: Instant::now() });
        let elapsed = trace.start.elapsed();
        let status = res.status().code;

        info!(event = events::HTTP_RESPONSE, request_id = %trace.id, method = %req.method(), uri = %req.uri(), status = status, elapsed_ms = elapsed_ms(elapsed), msg = "Response sent");

        if let Some(metrics) = req.rocket().state::<Arc<Metrics>>() {
            metrics.observe(req.method().as_str(), status, elapsed.as_secs_f64());
        }
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Rocket figment with the bind address and port taken from `config`.
pub fn figment(config: &AppConfig) -> Figment {
    rocket::Config::figment()
        .merge(("address", config.host))
        .merge(("port", config.port))
}

/// Assembles the application: state, fairings, routes and catchers.
pub fn build(config: &AppConfig) -> anyhow::Result<Rocket<Build>> {
    let metrics = Arc::new(Metrics::new()?);
    let page = WelcomePage::render(&config.locale);
    let locale = config.locale.clone();

    Ok(rocket::custom(figment(config))
        .manage(metrics)
        .manage(page)
        .manage(BuildInfo::current())
        .attach(RequestFairing)
        .attach(AdHoc::on_liftoff("Ready log", move |rocket| Box::pin(async move {
            let cfg = rocket.config();
            info!(event = events::APP_READY, address = %cfg.address, port = cfg.port, locale = %locale, msg = "Server ready");
        })))
        .attach(AdHoc::on_shutdown("Shutdown log", |_| Box::pin(async {
            info!(event = events::APP_SHUTDOWN, msg = "Server stopping");
        })))
        .mount("/", routes![routes::welcome, routes::hello, routes::health, routes::metrics_export])
        .register("/", catchers![catchers::not_found, catchers::internal_error, catchers::fallback]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_saturates_instead_of_truncating() {
        assert_eq!(elapsed_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
