use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub lucky_draw: LuckyDrawConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 允许的前端来源，留空则不限制
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Admin tokens are issued by an external identity service; only the shared
/// secret is needed here to verify them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuckyDrawConfig {
    /// 未指定奖品时的默认奖品名称
    #[serde(default = "default_prize")]
    pub default_prize: String,
    /// 未指定中奖人数时的默认人数
    #[serde(default = "default_winners")]
    pub default_winners: u32,
}

fn default_prize() -> String {
    "Free Consultation".to_string()
}

fn default_winners() -> u32 {
    1
}

// 逗号分隔
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for LuckyDrawConfig {
    fn default() -> Self {
        Self {
            default_prize: default_prize(),
            default_winners: default_winners(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时完全依赖环境变量
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| format!("Failed to parse config file {config_path}: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                let database_url = get_env("DATABASE_URL")
                    .ok_or("DATABASE_URL is not set and no config.toml was found")?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                        cors_allowed_origins: get_env("CORS_ALLOWED_ORIGINS")
                            .map(|v| split_origins(&v))
                            .unwrap_or_default(),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    jwt: JwtConfig {
                        secret: get_env("JWT_SECRET")
                            .unwrap_or_else(|| "change-me-in-production".to_string()),
                    },
                    lucky_draw: LuckyDrawConfig {
                        default_prize: get_env("LUCKY_DRAW_DEFAULT_PRIZE")
                            .unwrap_or_else(default_prize),
                        default_winners: get_env_parse("LUCKY_DRAW_DEFAULT_WINNERS", 1u32),
                    },
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        config.apply_env_overrides();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(p) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.server.port = p;
        }
        if let Ok(v) = env::var("CORS_ALLOWED_ORIGINS") {
            self.server.cors_allowed_origins = split_origins(&v);
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(mc) = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.jwt.secret = v;
        }
        if let Ok(v) = env::var("LUCKY_DRAW_DEFAULT_PRIZE") {
            self.lucky_draw.default_prize = v;
        }
        if let Some(n) = env::var("LUCKY_DRAW_DEFAULT_WINNERS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.lucky_draw.default_winners = n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_with_defaults() {
        let raw = r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
url = "sqlite::memory:"
max_connections = 1

[jwt]
secret = "secret"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.lucky_draw.default_prize, "Free Consultation");
        assert_eq!(config.lucky_draw.default_winners, 1);
        assert!(config.server.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins("https://a.example, ,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_parse_toml_lucky_draw_section() {
        let raw = r#"
[server]
host = "0.0.0.0"
port = 8080

[database]
url = "postgres://localhost/app"
max_connections = 5

[jwt]
secret = "secret"

[lucky_draw]
default_prize = "Scholarship Voucher"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.lucky_draw.default_prize, "Scholarship Voucher");
        assert_eq!(config.lucky_draw.default_winners, 1);
    }
}
