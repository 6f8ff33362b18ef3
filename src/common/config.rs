use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;

use crate::common::logging::LogFormat;
use crate::structures::Locale;

/// Runtime settings, read from flags first and the environment second.
#[derive(Debug, Clone, Parser)]
#[command(name = "challenge-site", version, about = "DevOps challenge hello service")]
pub struct AppConfig {
    /// Address to bind
    #[arg(long, env = "APP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Locale used for the welcome page `lang` attribute (e.g. en_US)
    #[arg(long, env = "APP_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Log line encoding
    #[arg(long, env = "APP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            locale: Locale::default(),
            log_format: LogFormat::default(),
        }
    }
}
