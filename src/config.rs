//! Application configuration module / 应用配置模块
//!
//! Loaded from config.json in the working directory (or the file named by
//! `DORKGEN_CONFIG`). A default file is created on first run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Cross-origin configuration / 跨域配置
    pub cors: CorsConfig,
    /// Search link configuration / 搜索链接配置
    pub search: SearchConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// CORS configuration; an origin of `*` allows everything / 跨域配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

/// Search link configuration / 搜索链接配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Prefix the generated query is appended to / 搜索引擎URL前缀
    pub engine_url: String,
    /// Percent-encode the query inside the URL / 是否对查询进行URL编码
    pub encode_query: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://frontend:3000".to_string(),
            ],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: ["Origin", "Content-Type", "Accept", "Authorization"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: "https://www.google.com/search?q=".to_string(),
            encode_query: true,
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Apply a `PORT` value; unparsable values are ignored / 应用端口覆盖
    pub fn with_port_override(mut self, port: Option<&str>) -> Self {
        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", raw),
            }
        }
        self
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DORKGEN_CONFIG") {
        return PathBuf::from(path);
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration and apply environment overrides / 加载配置并应用环境变量
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = load_config_from(&get_config_path())?;
    let port = std::env::var("PORT").ok();
    Ok(config.with_port_override(port.as_deref()))
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config_to(&config, path)?;
        tracing::info!("Created default configuration at {:?}", path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
