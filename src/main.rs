mod cli;

use mediaaccess::{backends, config, server, service::MediaService};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use mediaaccess_common::CapabilityKind;

async fn start_server(host: String, port: u16, config_path: Option<&std::path::Path>) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting mediaaccess server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let registry = backends::build_registry(&config.providers)?;
    tracing::info!("Registered {} providers", registry.len());

    server::start_server(config, MediaService::new(registry)?).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediaaccess=trace,mediaaccess_common=debug,tower_http=debug".to_string()
        } else {
            "mediaaccess=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Providers => list_providers(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediaaccess {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn list_providers(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let registry = backends::build_registry(&config.providers)?;

    if registry.is_empty() {
        println!("No providers configured");
        return Ok(());
    }

    for kind in CapabilityKind::ALL {
        let descriptors = registry.descriptors(kind);
        if descriptors.is_empty() {
            continue;
        }
        println!("{}:", kind);
        for d in descriptors {
            println!("  [{}] {} ({})", d.id, d.name, d.backend);
        }
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Providers: {}", config.providers.len());
            for kind in CapabilityKind::ALL {
                let count = config.providers.iter().filter(|p| p.kind == kind).count();
                if count > 0 {
                    println!("    {}: {}", kind, count);
                }
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
