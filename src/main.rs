use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use speech_model_config::{
    config::ConfigFile,
    core::{TTSModelConfig, VADModelConfig},
    options::OptionRegistrar,
};

/// Environment variable prefix for `vad` options
const VAD_ENV_PREFIX: &str = "VAD";
/// Environment variable prefix for `tts` options
const TTS_ENV_PREFIX: &str = "TTS";

/// Speech model configuration - resolve and validate VAD/TTS model settings
#[derive(Parser, Debug)]
#[command(name = "speech-model-config")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One-line summary
    Text,
    /// Pretty-printed JSON
    Json,
}

fn vad_registrar<'a>() -> OptionRegistrar<'a> {
    OptionRegistrar::new("vad")
        .about("Resolve and validate a voice activity detection model config")
        .with_env_prefix(VAD_ENV_PREFIX)
}

fn tts_registrar<'a>() -> OptionRegistrar<'a> {
    OptionRegistrar::new("tts")
        .about("Resolve and validate a text-to-speech model config")
        .with_env_prefix(TTS_ENV_PREFIX)
}

/// Full command line, with subcommand defaults taken from compiled defaults
fn command() -> anyhow::Result<Command> {
    let mut vad = VADModelConfig::default();
    let mut vad_options = vad_registrar();
    vad.register(&mut vad_options)?;

    let mut tts = TTSModelConfig::default();
    let mut tts_options = tts_registrar();
    tts.register(&mut tts_options)?;

    Ok(Cli::command()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(vad_options.command())
        .subcommand(tts_options.command()))
}

fn report<T: Serialize + std::fmt::Display>(config: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{config}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

fn run_vad(base: VADModelConfig, matches: &ArgMatches, format: OutputFormat) -> anyhow::Result<bool> {
    let mut config = base;
    {
        let mut options = vad_registrar();
        config.register(&mut options)?;
        let overrides = options.apply(matches)?;
        info!("Applied {} VAD option override(s)", overrides);
    }

    report(&config, format)?;
    Ok(config.validate())
}

fn run_tts(base: TTSModelConfig, matches: &ArgMatches, format: OutputFormat) -> anyhow::Result<bool> {
    let mut config = base;
    {
        let mut options = tts_registrar();
        config.register(&mut options)?;
        let overrides = options.apply(matches)?;
        info!("Applied {} TTS option override(s)", overrides);
    }

    report(&config, format)?;
    Ok(config.validate())
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists (must be done before options are parsed)
    let _ = dotenvy::dotenv();

    // Initialize tracing; stdout carries the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command()?.get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let file = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {}", config_path.display());
            ConfigFile::from_file(config_path)?
        }
        None => ConfigFile::default(),
    };

    let valid = match matches.subcommand() {
        Some(("vad", sub_matches)) => run_vad(file.vad_or_default(), sub_matches, cli.format)?,
        Some(("tts", sub_matches)) => run_tts(file.tts_or_default(), sub_matches, cli.format)?,
        Some((name, _)) => return Err(anyhow!("Unknown subcommand '{}'", name)),
        None => return Err(anyhow!("A subcommand is required")),
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
