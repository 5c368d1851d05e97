use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Walk behavior for the pattern matcher.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    /// Match dot-files and descend into dot-directories even when the
    /// pattern does not name them explicitly.
    pub include_hidden: bool,
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShutdownConfig {
    /// Time allowed for in-flight responses after an interrupt before the
    /// process exits unconditionally.
    pub grace_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub scan: ScanConfig,
    pub shutdown: ShutdownConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match ::config::Config::builder()
            .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

impl AppConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: globview.toml (in CWD)
        .add_source(::config::File::with_name("globview").required(false));

    if let Ok(custom_path) = std::env::var("GLOBVIEW_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Umgebungsvariablen zuletzt, damit sie Vorrang haben
    builder = builder.add_source(::config::Environment::with_prefix("GLOBVIEW").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    if cfg.server.host.trim().is_empty() {
        return Err(anyhow::anyhow!("server.host must not be empty"));
    }
    if cfg.shutdown.grace_ms > 60_000 {
        return Err(anyhow::anyhow!("shutdown.grace_ms must be <= 60000, got {}", cfg.shutdown.grace_ms));
    }
    if let Some(dir) = cfg.logging.dir.as_deref() {
        if dir.trim().is_empty() {
            return Err(anyhow::anyhow!("logging.dir must not be empty when set"));
        }
    }
    Ok(())
}
