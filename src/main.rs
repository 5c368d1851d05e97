use std::net::SocketAddr;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use globview::{cli, config, index, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse_or_exit(std::env::args_os());

    // Load configuration (embedded defaults -> globview.toml -> env/.env)
    let app_cfg = config::load()?;

    // Logging (stdout, plus daily file rotation when logging.dir is set)
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let (file_layer, file_guard) = match app_cfg.logging.dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir).ok();
            let file_appender = tracing_appender::rolling::daily(dir, "globview.log");
            let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
            (Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb)), Some(guard))
        }
        None => (None, None),
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(file_layer)
        .init();
    // Guards am Leben halten, damit die Non-Blocking Writer beim Beenden flushen
    let _log_guards = (stdout_guard, file_guard);

    // Scan-Root einmalig festhalten, danach wird das Arbeitsverzeichnis nie wieder gelesen
    let root = std::env::current_dir()?;
    info!("Searching for images matching: {}", cli.pattern);
    let image_index = index::build_index(&cli.pattern, &root, &app_cfg.scan)?;
    info!("Found {} images", image_index.len());

    let addr: SocketAddr = app_cfg
        .listen_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid listen addr {} - {}", app_cfg.listen_addr(), e))?;
    info!("Starting server at http://localhost:{}", addr.port());

    let app = routes::router(AppState::new(image_index));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Open your browser and navigate to: http://localhost:{}", listener.local_addr()?.port());
    info!("Press Ctrl+C to stop the server");

    let grace = Duration::from_millis(app_cfg.shutdown.grace_ms);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(grace)).await?;
    info!("Server closed");

    Ok(())
}

/// Resolves on Ctrl-C (or SIGTERM on Unix). From then on in-flight requests
/// get `grace` to finish before the process exits regardless.
async fn shutdown_signal(grace: Duration) {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutting down server...");
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        std::process::exit(0);
    });
}
