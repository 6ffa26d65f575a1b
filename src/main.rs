use clap::{Parser, Subcommand, ValueEnum};
use mlb_colors::commands::{self, export::ExportFormat};
use mlb_colors::config::{self, Config};
use mlb_colors::data_provider::HttpProvider;
use mlb_colors::types::Division;
use mlb_colors::{cache, ColorResolver, ResolverSettings, Strategy};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "mlb-colors")]
#[command(about = "MLB team brand color lookup and sampling", long_about = "MLB team brand color lookup and sampling\n\nTeams can be given as a numeric MLB team id (147) or an abbreviation (NYY).")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Static reference table
    Declared,
    /// Average of the opaque pixels of the team's spot image
    Sampled,
    /// Center pixel of the team's spot image
    Center,
    /// primaryLight from the branding feed
    Feed,
}

impl StrategyArg {
    /// Convert CLI StrategyArg enum to the library Strategy
    fn to_strategy(self) -> Strategy {
        match self {
            StrategyArg::Declared => Strategy::Declared,
            StrategyArg::Sampled => Strategy::Sampled,
            StrategyArg::Center => Strategy::CenterPixel,
            StrategyArg::Feed => Strategy::Feed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl FormatArg {
    fn to_export_format(self) -> ExportFormat {
        match self {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the brand color of one team
    Color {
        /// Team id (e.g., 147) or abbreviation (e.g., NYY)
        team: String,

        /// Resolution strategy (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<StrategyArg>,

        /// Image URL template for the sampling strategies; {team_id} is substituted
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Show the colors every strategy produces for one team
    Compare {
        /// Team id (e.g., 147) or abbreviation (e.g., NYY)
        team: String,
    },
    /// Display the team reference table
    Teams {
        /// Only show one division (e.g., "AL East")
        #[arg(short, long, value_parser = parse_division)]
        division: Option<Division>,
    },
    /// Resolve every team's color with one strategy
    Palette {
        /// Resolution strategy (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<StrategyArg>,
    },
    /// Export the team reference table
    Export {
        #[arg(short, long, default_value = "csv")]
        format: FormatArg,
    },
    /// Check the team reference table for gaps and inconsistencies
    Validate,
    /// Display current configuration
    Config,
}

fn parse_division(s: &str) -> Result<Division, String> {
    s.parse()
}

fn create_provider(timeout: Duration) -> HttpProvider {
    match HttpProvider::new(timeout) {
        Ok(provider) => provider,
        Err(e) => {
            let error_msg = format!("Failed to create HTTP client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("sentinel: {}", cfg.sentinel);
    println!("alpha_threshold: {}", cfg.alpha_threshold);
    println!("spot_url_template: {}", cfg.spot_url_template);
    println!("branding_url: {}", cfg.branding_url);
    println!("request_timeout_secs: {}", cfg.request_timeout_secs);
    println!("default_strategy: {}", cfg.default_strategy);
    println!("sample_cache_lifespan_secs: {}", cfg.sample_cache_lifespan_secs);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("show_swatches: {}", cfg.display.show_swatches);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(resolver: &ColorResolver, config: &Config, command: Commands) -> anyhow::Result<()> {
    let display = &config.display;
    let strategy_or_default = |arg: Option<StrategyArg>| {
        arg.map(StrategyArg::to_strategy).unwrap_or(config.default_strategy)
    };

    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Color { team, strategy, url } => {
            let id = commands::parse_team(&team)?;
            commands::color::run(resolver, id, strategy_or_default(strategy), url, display).await
        }
        Commands::Compare { team } => {
            let id = commands::parse_team(&team)?;
            commands::compare::run(resolver, id, display).await
        }
        Commands::Teams { division } => commands::teams::run(division, display),
        Commands::Palette { strategy } => {
            commands::palette::run(resolver, strategy_or_default(strategy), display).await
        }
        Commands::Export { format } => commands::export::run(format.to_export_format()),
        Commands::Validate => commands::validate::run(),
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let command = cli.command;

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    cache::set_cache_lifespan(config.sample_cache_lifespan_secs).await;

    let provider = create_provider(config.request_timeout());
    let resolver = ColorResolver::new(Arc::new(provider), ResolverSettings::from(&config));
    if let Err(e) = execute_command(&resolver, &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
