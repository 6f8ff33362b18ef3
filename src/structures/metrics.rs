use std::time::Instant;
use prometheus::{opts, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Registry, TextEncoder};

// Registry plus the HTTP metrics of one server instance
pub struct Metrics {
    pub registry: Registry,
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub uptime_seconds: IntGauge,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            opts!("http_requests_total", "Total HTTP requests by method and status"),
            &["method", "status"],
        )?;

        let histogram_opts = HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latencies in seconds",
        ).buckets(duration_buckets());

        let http_request_duration_seconds = HistogramVec::new(histogram_opts, &["method"])?;

        let uptime_seconds = IntGauge::new("uptime_seconds", "Process uptime in seconds")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            uptime_seconds,
            start_time: Instant::now(),
        })
    }

    pub fn observe(&self, method: &str, status: u16, elapsed_secs: f64) {
        let status = status.to_string();
        self.http_requests_total.with_label_values(&[method, status.as_str()]).inc();
        self.http_request_duration_seconds.with_label_values(&[method]).observe(elapsed_secs);
    }

    /// Refreshes the uptime gauge and returns its value.
    pub fn touch_uptime(&self) -> u64 {
        let secs = self.start_time.elapsed().as_secs();
        self.uptime_seconds.set(i64::try_from(secs).unwrap_or(i64::MAX));
        secs
    }

    pub fn gather_text(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&metric_families, &mut buffer) {
            tracing::warn!(error = %e, msg = "Metrics encoding failed");
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

// Histogram buckets sized for HTTP latencies (seconds)
fn duration_buckets() -> Vec<f64> {
    vec![
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25,
        0.5, 1.0, 2.5, 5.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_requests_show_up_in_text_export() {
        let metrics = Metrics::new().unwrap();
        metrics.observe("GET", 200, 0.002);
        metrics.observe("GET", 200, 0.003);
        metrics.observe("GET", 404, 0.001);

        let text = metrics.gather_text();
        assert!(text.contains(r#"http_requests_total{method="GET",status="200"} 2"#));
        assert!(text.contains(r#"http_requests_total{method="GET",status="404"} 1"#));
        assert!(text.contains("http_request_duration_seconds_bucket"));
    }

    #[test]
    fn instances_do_not_share_registries() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        a.observe("GET", 200, 0.01);
        assert!(!b.gather_text().contains(r#"status="200""#));
    }
}
