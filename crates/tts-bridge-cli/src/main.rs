use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tts_bridge::providers::espeak::{EspeakConfig, EspeakEngine};
use tts_bridge::providers::memory::RecordingEngine;
use tts_bridge::{
    BuiltinLocaleCatalog, LocaleCatalog, SpeechEngine, TtsConfig, TtsService, segment,
};

#[derive(Parser)]
#[command(name = "tts-bridge")]
#[command(about = "Speak text through espeak-ng, split into engine-sized utterances", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Record engine calls instead of producing audio
    #[arg(long, global = true)]
    dry_run: bool,

    /// espeak-ng binary to use (defaults to $ESPEAK_BIN or "espeak-ng")
    #[arg(long, global = true)]
    espeak_bin: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak text in the given language
    Speak {
        /// Language tag, e.g. "en_US" or "bn_BD"
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Text to speak
        text: String,

        /// How long to keep the process alive for playback
        #[arg(long, default_value = "10000")]
        wait_ms: u64,
    },
    /// Print the available languages as JSON
    Languages,
    /// Print how text would be split into utterances
    Segment {
        /// Maximum utterance length
        #[arg(short, long, default_value = "4000")]
        max: usize,

        /// Text to split
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TtsConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => TtsConfig::default(),
    };

    match cli.command {
        Commands::Segment { max, text } => {
            for part in segment(&text, max) {
                println!("{}", part);
            }
        }
        Commands::Speak {
            ref lang,
            ref text,
            wait_ms,
        } => {
            if cli.dry_run {
                let tts = TtsService::new(RecordingEngine::new().with_languages([lang.as_str()]), config);
                tts.speak(lang, text);
                for call in tts.engine().calls() {
                    println!("{:?}", call);
                }
            } else {
                let tts = TtsService::new(espeak_engine(cli.espeak_bin.clone())?, config);
                tts.speak(lang, text);
                log::info!("Waiting {} ms for playback", wait_ms);
                tokio::time::sleep(Duration::from_millis(wait_ms)).await;
            }
        }
        Commands::Languages => {
            let json = if cli.dry_run {
                // every built-in locale counts as installed
                let engine = RecordingEngine::new().with_locales(BuiltinLocaleCatalog.all_locales());
                languages(engine, config)
            } else {
                languages(espeak_engine(cli.espeak_bin.clone())?, config)
            };
            println!("{}", json);
        }
    }

    Ok(())
}

fn espeak_engine(binary: Option<PathBuf>) -> Result<EspeakEngine> {
    let mut espeak = EspeakConfig::default();
    if let Some(binary) = binary {
        espeak = espeak.with_binary(binary);
    }
    EspeakEngine::new(espeak).context("Failed to start espeak-ng")
}

fn languages<E: SpeechEngine>(engine: E, config: TtsConfig) -> String {
    TtsService::new(engine, config).available_languages()
}
