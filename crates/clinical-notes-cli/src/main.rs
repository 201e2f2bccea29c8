use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clinical_notes_core::{GenerateNotesRequest, NotesConfig, NotesService, PatientInfo, SoapNote};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soap-note")]
#[command(about = "Generate SOAP clinical notes from consultation transcripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a SOAP note
    Generate {
        #[command(flatten)]
        input: TranscriptInput,
        /// Patient name
        #[arg(long)]
        name: Option<String>,
        /// Patient age in years
        #[arg(long)]
        age: Option<String>,
        /// Patient gender
        #[arg(long)]
        gender: Option<String>,
        /// Print the note as JSON
        #[arg(long)]
        json: bool,
        /// Print the note's SHA-256 fingerprint
        #[arg(long)]
        fingerprint: bool,
    },
    /// Print the facts extracted from a transcript as JSON
    Extract {
        #[command(flatten)]
        input: TranscriptInput,
    },
}

/// Where to read the transcript from. Defaults to stdin.
#[derive(Args)]
struct TranscriptInput {
    /// Transcript text
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// Path to a transcript file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl TranscriptInput {
    fn read(self) -> anyhow::Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read transcript from {}", path.display()));
        }

        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read transcript from stdin")?;
        Ok(buffer)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("soap_note=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = NotesConfig::from_env().context("invalid configuration")?;
    tracing::debug!(
        max_transcript_chars = config.max_transcript_chars(),
        "resolved configuration"
    );
    let service = NotesService::new(config);

    match cli.command {
        Commands::Generate {
            input,
            name,
            age,
            gender,
            json,
            fingerprint,
        } => {
            let transcript = input.read()?;
            let patient_info = PatientInfo { name, age, gender };
            let request = GenerateNotesRequest {
                transcription: Some(transcript),
                patient_info: (!patient_info.is_empty()).then_some(patient_info),
            };

            let note = service.generate(&request)?;
            tracing::info!("generated SOAP note");

            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else {
                print_note(&note);
            }

            if fingerprint {
                println!("fingerprint: {}", note.fingerprint()?);
            }
        }
        Commands::Extract { input } => {
            let transcript = input.read()?;
            let facts = service.extract(&transcript)?;
            println!("{}", serde_json::to_string_pretty(&facts)?);
        }
    }

    Ok(())
}

fn print_note(note: &SoapNote) {
    for (heading, text) in note.sections() {
        println!("{}:", heading.to_uppercase());
        println!("{}", text.trim_end());
        println!();
    }
}
