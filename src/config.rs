use crate::{
    error::{config::ConfigError, AppError},
    model::customer::CustomerRecord,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_TOKEN_TTL_SECONDS: u64 = 86_400;

// The two local development origins the frontend is served from.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4200,http://localhost:4201";

pub struct Config {
    pub database_url: String,
    pub token_key: String,
    pub token_ttl_seconds: u64,

    pub bind_addr: String,
    pub app_url: String,
    pub allowed_origins: Vec<String>,

    pub admin_email: String,

    pub mail: Option<MailSettings>,
    pub customers: Vec<CustomerRecord>,
}

/// Settings for the outbound mail API, bound from the `MAIL_*` variables.
///
/// Mail is optional: when `MAIL_API_URL` or `MAIL_API_KEY` is absent the
/// mailer is disabled and the application runs without outbound mail.
#[derive(Clone)]
pub struct MailSettings {
    pub api_url: String,
    pub api_key: String,
    pub sender_name: String,
    pub sender_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_seconds = match std::env::var("TOKEN_TTL_SECONDS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "TOKEN_TTL_SECONDS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let customers = match std::env::var("CUSTOMERS_FILE") {
            Ok(path) => load_customers(&path)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            token_key: std::env::var("TOKEN_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("TOKEN_KEY".to_string()))?,
            token_ttl_seconds,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".to_string()),
            mail: mail_settings_from_env(),
            customers,
        })
    }
}

/// Splits a comma-separated origin list, dropping empty segments.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Binds the mail settings section when both the API URL and key are present.
fn mail_settings_from_env() -> Option<MailSettings> {
    let api_url = std::env::var("MAIL_API_URL").ok()?;
    let api_key = std::env::var("MAIL_API_KEY").ok()?;

    Some(MailSettings {
        api_url,
        api_key,
        sender_name: std::env::var("MAIL_SENDER_NAME").unwrap_or_else(|_| "Motorpool".to_string()),
        sender_email: std::env::var("MAIL_SENDER_EMAIL")
            .unwrap_or_else(|_| "no-reply@motorpool.local".to_string()),
    })
}

/// Reads the customer records list from a JSON file.
fn load_customers(path: &str) -> Result<Vec<CustomerRecord>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::CustomersFile {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    parse_customers(&raw).map_err(|e| ConfigError::CustomersFile {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn parse_customers(raw: &str) -> Result<Vec<CustomerRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}
