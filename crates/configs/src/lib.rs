use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::PathBuf;

pub const DEFAULT_NAMESPACES_PATH: &str = "data/namespaces.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub namespaces: NamespacesConfig,
}

/// Where the namespace store lives and how a brand-new store is seeded.
#[derive(Debug, Clone, Deserialize)]
pub struct NamespacesConfig {
    /// JSON file holding the `prefix -> namespace` map.
    #[serde(default)]
    pub path: PathBuf,
    /// Seed document used instead of the bundled defaults.
    #[serde(default)]
    pub defaults_path: Option<PathBuf>,
    /// Seed an empty store from the bundled defaults.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

impl Default for NamespacesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_NAMESPACES_PATH),
            defaults_path: None,
            seed_defaults: default_seed_defaults(),
        }
    }
}

fn default_seed_defaults() -> bool { true }

pub fn load_default() -> Result<AppConfig> {
    // 提前加载 .env，使得 CONFIG_PATH / NAMESPACES_PATH 生效
    dotenvy::dotenv().ok();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read config {path}: {e}"))?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.namespaces.normalize_from_env();
        self.namespaces.validate()?;
        Ok(())
    }
}

impl NamespacesConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供 path，则尝试从环境变量填充，最后回退到默认路径
        if self.path.as_os_str().is_empty() {
            self.path = std::env::var("NAMESPACES_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NAMESPACES_PATH));
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(anyhow!("namespaces.path 为空；请在 config.toml 或环境变量 NAMESPACES_PATH 中提供"));
        }
        if let Some(defaults) = &self.defaults_path {
            if defaults.as_os_str().is_empty() {
                return Err(anyhow!("namespaces.defaults_path 不能为空字符串"));
            }
            if defaults == &self.path {
                return Err(anyhow!("namespaces.defaults_path 不能与 namespaces.path 相同"));
            }
        }
        Ok(())
    }
}
