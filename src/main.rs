mod cli;

use submarine::{config, server};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use submarine_parser::{Protocol, ProtocolParser, ProtocolRelease};

async fn start_server(
    host: String,
    port: u16,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting Submarine server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

fn parse_title(
    title: &str,
    protocol: Protocol,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let parser = ProtocolParser::new(config.parser.to_parser_config());

    let parsed = parser.parse(title, protocol)?;

    if json {
        let json_str = serde_json::to_string_pretty(&parsed)?;
        println!("{}", json_str);
        return Ok(());
    }

    let release = parsed.release();
    println!("Title: {}", release.title);
    if !release.aliases.is_empty() {
        println!("Aliases: {}", release.aliases.join(", "));
    }
    if let Some(year) = release.year {
        println!("Year: {}", year);
    }
    println!("Type: {:?}", release.release_type);

    if let Some(ref series) = release.series_release_data {
        println!("  Kind: {:?}", series.release_type);
        if !series.seasons.is_empty() {
            println!("  Seasons: {:?}", series.seasons);
        }
        if !series.episodes.is_empty() {
            println!("  Episodes: {:?}", series.episodes);
        }
        if !series.absolute_episodes.is_empty() {
            println!("  Absolute episodes: {:?}", series.absolute_episodes);
        }
        if let Some(air_date) = series.air_date {
            println!("  Air date: {}", air_date);
        }
    }
    if let Some(ref movie) = release.movie_release_data {
        if let Some(ref edition) = movie.edition {
            println!("  Edition: {}", edition);
        }
    }

    println!("Quality: {}", release.quality.resolution.name());
    if release.quality.revision.version > 1 {
        println!("  Revision: v{}", release.quality.revision.version);
    }
    let languages: Vec<&str> = release.languages.iter().map(|l| l.name()).collect();
    println!("Languages: {}", languages.join(", "));
    if let Some(provider) = release.streaming_provider {
        println!("Streaming provider: {}", provider.display_name());
    }
    if let Some(ref group) = release.release_group {
        println!("Release group: {}", group);
    }
    if let Some(ref hash) = release.release_hash {
        println!("Release hash: {}", hash);
    }
    if let ProtocolRelease::Torrent(ref torrent) = parsed {
        if !torrent.flags.is_empty() {
            println!("Flags: {:?}", torrent.flags);
        }
    }
    println!("Protocol: {}", protocol);

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Default language: {}", config.parser.default_language.name());
            println!(
                "  Release group sources: {}",
                config.parser.release_group_sources.len()
            );
            println!("  Usenet validation: {}", config.parser.usenet_validation);
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

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "submarine=trace,submarine_parser=trace,tower_http=debug".to_string()
        } else {
            "submarine=debug,submarine_parser=info,tower_http=info".to_string()
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
        Commands::Parse {
            title,
            protocol,
            json,
        } => parse_title(&title, protocol, cli.config.as_deref(), json),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("submarine {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
