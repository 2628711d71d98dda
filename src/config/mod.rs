//! Configuration module for the Lafaek content backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default public origin for stored media objects.
pub const DEFAULT_MEDIA_ORIGIN: &str = "https://lafaek-media.s3.ap-southeast-2.amazonaws.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key guarding the admin API (required in production)
    pub admin_key: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Public origin media references resolve against
    pub media_origin: String,
    /// Bucket presigned uploads are issued for
    pub upload_bucket: String,
    /// Optional custom S3 endpoint (MinIO / LocalStack)
    pub s3_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_key = env::var("LAFAEK_ADMIN_KEY").ok();

        let db_path = env::var("LAFAEK_DB_PATH")
            .unwrap_or_else(|_| "./data/lafaek.sqlite".to_string())
            .into();

        let bind_addr = env::var("LAFAEK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid LAFAEK_BIND_ADDR format");

        let log_level = env::var("LAFAEK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let media_origin = env::var("LAFAEK_MEDIA_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_MEDIA_ORIGIN.to_string())
            .trim_end_matches('/')
            .to_string();

        let upload_bucket =
            env::var("LAFAEK_UPLOAD_BUCKET").unwrap_or_else(|_| "lafaek-media".to_string());

        let s3_endpoint = env::var("S3_ENDPOINT").ok();

        Self {
            admin_key,
            db_path,
            bind_addr,
            log_level,
            media_origin,
            upload_bucket,
            s3_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Clear any existing env vars
        env::remove_var("LAFAEK_ADMIN_KEY");
        env::remove_var("LAFAEK_DB_PATH");
        env::remove_var("LAFAEK_BIND_ADDR");
        env::remove_var("LAFAEK_LOG_LEVEL");
        env::remove_var("LAFAEK_MEDIA_ORIGIN");
        env::remove_var("LAFAEK_UPLOAD_BUCKET");
        env::remove_var("S3_ENDPOINT");

        let config = Config::from_env();

        assert!(config.admin_key.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/lafaek.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.media_origin, DEFAULT_MEDIA_ORIGIN);
        assert_eq!(config.upload_bucket, "lafaek-media");
        assert!(config.s3_endpoint.is_none());

        // A trailing slash on the media origin is trimmed
        env::set_var("LAFAEK_MEDIA_ORIGIN", "https://cdn.example.org/");
        let config = Config::from_env();
        assert_eq!(config.media_origin, "https://cdn.example.org");
        env::remove_var("LAFAEK_MEDIA_ORIGIN");
    }
}
