use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub postgres_max_connections: u32,
    pub log_level: String,
}

/// Reads configuration values by key. Missing keys and values that do not
/// parse fall back to the given default.
struct Settings<L> {
    lookup: L,
}

impl<L: Fn(&str) -> Option<String>> Settings<L> {
    fn text(&self, key: &str, default: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| default.to_string())
    }

    fn parsed<T: FromStr>(&self, key: &str, default: T) -> T {
        (self.lookup)(key)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(default)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let settings = Settings { lookup };

        Self {
            port: settings.parsed("PORT", 8080),
            postgres_host: settings.text("POSTGRES_HOST", "127.0.0.1"),
            postgres_port: settings.parsed("POSTGRES_PORT", 5432),
            postgres_user: settings.text("POSTGRES_USER", "postgres"),
            postgres_password: settings.text("POSTGRES_PASSWORD", "postgres"),
            postgres_database: settings.text("POSTGRES_DATABASE", "video_catalog"),
            postgres_max_connections: settings.parsed("POSTGRES_MAX_CONNECTIONS", 10),
            log_level: settings.text("LOG_LEVEL", "info"),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}
