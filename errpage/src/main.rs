#![forbid(unsafe_code)]

use bytes::Bytes;
use clap::{Parser, Subcommand};
use errpage_lib::config::{read_from_path, warn_missing_templates, Config, LoggingConfig};
use errpage_lib::preview::{self, PreviewState};
use errpage_lib::telemetry::init_tracing;
use errpage_lib::{check_templates, RenderContext, Renderer, TemplateKind};
use http::Response;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Error page renderer for the proxy's HTTP error surface")]
struct Cli {
    /// Path to configuration TOML file
    #[arg(short, long, value_name = "FILE", default_value = "errpage.toml", env = "ERRPAGE_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page and print the full response
    Render {
        /// Page kind, e.g. not-found or internal-server-error
        #[arg(short, long)]
        kind: TemplateKind,
        /// Request path exposed to the template
        #[arg(short, long, default_value = "/")]
        path: String,
        /// Error message exposed to the template
        #[arg(short, long)]
        error: Option<String>,
        /// Inline template used instead of the configured file
        #[arg(long, value_name = "TEMPLATE")]
        inline: Option<String>,
    },
    /// Load and execute every configured template
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the preview server
    Serve {
        /// Override `[preview] listen`
        #[arg(short, long)]
        listen: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = read_config(&cli.config);
    let logging = match &loaded {
        Ok((config, _)) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    if let Err(err) = init_tracing(&logging) {
        eprintln!("{err}");
    }

    let config = match loaded {
        Ok((config, source)) => {
            log_config(&cli.config, &config, source);
            config
        }
        Err(err) => {
            error!(%err, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Render { kind, path, error, inline } => {
            render(&config, kind, path, error, inline.as_deref())
        }
        Command::Check { json } => check(&config, json),
        Command::Serve { listen } => serve(&config, listen).await,
    };

    if let Err(err) = result {
        error!(%err, "command failed");
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Where the active configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    File,
    Defaults,
}

/// Read the config without logging; tracing is not installed yet
fn read_config(path: &Path) -> errpage_lib::Result<(Config, ConfigSource)> {
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Defaults));
    }
    Ok((read_from_path(path)?, ConfigSource::File))
}

fn log_config(path: &Path, config: &Config, source: ConfigSource) {
    match source {
        ConfigSource::File => info!(path = %path.display(), "configuration loaded"),
        ConfigSource::Defaults => {
            info!(path = %path.display(), "configuration file not found, using defaults")
        }
    }
    warn_missing_templates(config);
}

fn render(
    config: &Config,
    kind: TemplateKind,
    path: String,
    error: Option<String>,
    inline: Option<&str>,
) -> CliResult {
    let mut ctx = RenderContext::new(path);
    if let Some(error) = error {
        ctx = ctx.with_error(error);
    }

    let mut response = Response::new(Bytes::new());
    Renderer::new().render(kind, &mut response, &config.templates, &ctx, inline);

    let mut out = io::stdout().lock();
    writeln!(out, "{:?} {}", response.version(), response.status())?;
    for (name, value) in response.headers() {
        writeln!(out, "{name}: {}", value.to_str().unwrap_or_default())?;
    }
    writeln!(out)?;
    out.write_all(response.body())?;
    out.flush()?;
    Ok(())
}

fn check(config: &Config, json: bool) -> CliResult {
    let checks = check_templates(&config.templates);

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&checks)?)?;
    } else {
        for check in &checks {
            match &check.error {
                None => writeln!(out, "ok    {:<22} {}", check.kind, check.path.display())?,
                Some(err) => writeln!(out, "FAIL  {:<22} {err}", check.kind)?,
            }
        }
    }
    out.flush()?;

    let failed = checks.iter().filter(|check| !check.is_ok()).count();
    if failed > 0 {
        return Err(format!("{failed} template(s) failed to render").into());
    }
    Ok(())
}

async fn serve(config: &Config, listen: Option<SocketAddr>) -> CliResult {
    let addr = listen.unwrap_or(config.preview.listen);
    let state = Arc::new(PreviewState::from_config(config)?);
    let listener = TcpListener::bind(addr).await?;

    preview::run(listener, state, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to listen for ctrl-c");
        }
    })
    .await?;
    Ok(())
}
