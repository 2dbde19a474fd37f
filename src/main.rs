//! Prefix Suggest - command-line entrypoint.
//!
//! Loads configuration and the vocabulary, then answers prefix queries either
//! once (`suggest`) or interactively (`repl`).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prefix_suggest_lib::config::{self, ConfigLoader, LogConfig, SuggestConfig};
use prefix_suggest_lib::error::{
    report_error, set_error_reporter, ErrorContext, SuggestError, SuggestResult,
    TracingErrorReporter,
};
use prefix_suggest_lib::vocabulary::load_trie;
use prefix_suggest_lib::PrefixTrie;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_suggest", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Vocabulary file, overriding `vocabulary.path`
    #[clap(long, value_parser)]
    vocabulary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for a single prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions (zero or negative prints nothing)
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Print the suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Read prefixes from stdin and print suggestions for each
    Repl {
        /// Maximum number of suggestions per prefix
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Validate the configuration and the vocabulary
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> SuggestResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SuggestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the report for a fatal error, naming the input that caused it.
fn fatal_context(error: SuggestError, component: &str, input: Option<&Path>) -> ErrorContext {
    let context = ErrorContext::new(error, component);
    match input {
        Some(path) => context.with_details(format!("input: {}", path.display())),
        None => context,
    }
}

/// Reports a fatal error and exits with a failure status.
fn fail(error: SuggestError, component: &str, input: Option<&Path>) -> ! {
    report_error(fatal_context(error, component, input));
    process::exit(1);
}

/// Loads the vocabulary named by the configuration.
fn load_vocabulary(config: &SuggestConfig) -> PrefixTrie {
    let source = config.vocabulary.source();
    match load_trie(&source, config.vocabulary.allow_empty) {
        Ok(trie) => trie,
        Err(e) => fail(e.into(), "vocabulary", Some(&config.vocabulary.path)),
    }
}

/// Answers one prefix per input line until EOF or `:q`.
fn run_repl(trie: &PrefixTrie, limit: usize) -> SuggestResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{} words loaded. Type a prefix, :q to quit", trie.len())?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let prefix = line.trim();
        if prefix == ":q" {
            break;
        }
        if prefix.is_empty() {
            continue;
        }

        let suggestions = trie.suggest(prefix, limit);
        debug!(prefix, found = suggestions.len(), "Query answered");
        if suggestions.is_empty() {
            writeln!(stdout, "  (no suggestions)")?;
        }
        for suggestion in suggestions {
            writeln!(stdout, "  {suggestion}")?;
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> SuggestResult<()> {
    let args = Args::parse();

    // Fall back to the bundled default file only when it is present
    let config_path = args.config.or_else(|| {
        let default_path = PathBuf::from(config::DEFAULT_CONFIG_PATH);
        default_path.exists().then_some(default_path)
    });
    let loader = ConfigLoader::new(config_path.as_deref(), config::ENV_PREFIX);
    let mut suggest_config = match loader.load() {
        Ok(config) => {
            init_logging(&config.log)?;
            config
        }
        Err(e) => {
            init_logging(&LogConfig::default())?;
            set_error_reporter(Arc::new(TracingErrorReporter));
            fail(e.into(), "config", config_path.as_deref());
        }
    };
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Some(path) = args.vocabulary {
        suggest_config.vocabulary.path = path;
    }
    config::init_global_config(suggest_config);
    let suggest_config = config::global_config()
        .ok_or_else(|| SuggestError::Custom("Global configuration unavailable".to_string()))?;

    match args.command.unwrap_or(Command::Repl { limit: None }) {
        Command::Suggest {
            prefix,
            limit,
            json,
        } => {
            let trie = load_vocabulary(&suggest_config);
            let limit = suggest_config.suggestion.effective_limit(limit);
            let suggestions = trie.suggest(&prefix, limit);
            debug!(%prefix, limit, found = suggestions.len(), "Query answered");

            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for suggestion in &suggestions {
                    println!("{suggestion}");
                }
            }
            Ok(())
        }
        Command::Repl { limit } => {
            let trie = load_vocabulary(&suggest_config);
            let limit = suggest_config.suggestion.effective_limit(limit);
            run_repl(&trie, limit)
        }
        Command::Validate => {
            info!("Validating configuration and vocabulary");
            let trie = load_vocabulary(&suggest_config);
            info!(
                words = trie.len(),
                nodes = trie.node_count(),
                "Configuration and vocabulary are valid"
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SuggestConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SuggestError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
