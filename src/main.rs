// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use asstran::app_config::{Config, LogLevel};
use asstran::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate an ASS subtitle file (default command)
    #[command(alias = "t")]
    Translate(TranslateArgs),

    /// Generate shell completions for asstran
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input .ass file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// API key for the translation endpoint
    #[arg(short, long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// API host, e.g. https://api.openai.com or a self-hosted server
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Model identifier to request
    #[arg(short, long)]
    model: Option<String>,

    /// Batch size of subtitle lines per request
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Disable the inter-batch rate-limit delay
    #[arg(long)]
    disable_rate_limit: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// asstran - AI-powered ASS subtitle translator
///
/// Translates the dialogue of Advanced SubStation Alpha subtitle files while
/// preserving timing, styling, and inline override tags.
#[derive(Parser, Debug)]
#[command(name = "asstran")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered ASS subtitle translator")]
#[command(long_about = "asstran translates the dialogue lines of .ass subtitle files with a
chat-completion API, leaving the header, timing, and {\\...} override tags
untouched.

EXAMPLES:
    asstran episode.ass                          # Translate using conf.json
    asstran -a sk-... episode.ass                # Pass the API key directly
    asstran -e http://localhost:8080 episode.ass # Use a self-hosted backend
    asstran -b 20 --disable-rate-limit episode.ass
    asstran /subs/                               # Translate every .ass file
    asstran completions bash > asstran.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .ass file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// API key for the translation endpoint
    #[arg(short, long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// API host, e.g. https://api.openai.com or a self-hosted server
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Model identifier to request
    #[arg(short, long)]
    model: Option<String>,

    /// Batch size of subtitle lines per request
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Disable the inter-batch rate-limit delay
    #[arg(long)]
    disable_rate_limit: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "asstran", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                input_path,
                api_key: cli.api_key,
                endpoint: cli.endpoint,
                model: cli.model,
                batch_size: cli.batch_size,
                disable_rate_limit: cli.disable_rate_limit,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

fn apply_log_level(level: &LogLevel) {
    let filter = match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    };
    log::set_max_level(filter);
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        apply_log_level(&cmd_log_level.clone().into());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config.save_to_file(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(api_key) = &options.api_key {
        config.api_key = api_key.clone();
    }

    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }

    if let Some(model) = &options.model {
        config.model = model.clone();
    }

    if let Some(batch_size) = options.batch_size {
        config.batch_size = batch_size;
    }

    if options.disable_rate_limit {
        config.rate_limit_enabled = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    apply_log_level(&config.log_level);

    let controller = Controller::with_config(config)?;
    controller.run(&options.input_path).await
}
