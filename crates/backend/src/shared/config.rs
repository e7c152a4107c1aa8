use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// Каталог для временных файлов загрузки
    pub temp_dir: String,
    /// Максимальный размер тела запроса с файлом, байт
    pub max_bytes: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "target/db/app.db".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            temp_dir: "target/uploads".to_string(),
            max_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to built-in defaults
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = exe_dir() {
        candidates.push(exe_dir.join("config.toml"));
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default configuration");
    Ok(Config::default())
}

/// Сохраняет загруженную конфигурацию для обработчиков
pub fn init(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration was already initialized, keeping the first one");
    }
}

/// Текущая конфигурация; до `init` - значения по умолчанию
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

/// Каталог временных файлов загрузки (относительный путь - от каталога exe)
pub fn get_upload_dir(config: &Config) -> PathBuf {
    resolve_path(&config.upload.temp_dir)
}

fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match exe_dir() {
        Some(dir) => dir.join(path),
        None => PathBuf::from(path_str),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
