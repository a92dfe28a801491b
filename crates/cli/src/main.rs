mod manifest;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xds_core::{
    new_retrieve_document_set_request,
    query::{find_documents_query, find_submission_sets_query, get_all_query},
};

use manifest::LoadedManifest;
use settings::Settings;

#[derive(Parser)]
#[command(name = "xds")]
#[command(about = "Builds IHE XDS.b registry and repository requests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a provide-and-register request from a YAML manifest
    Submit {
        /// Path to the submission manifest
        manifest: PathBuf,
        /// Document source OID (overrides XDS_SOURCE_ID)
        #[arg(long)]
        source_id: Option<String>,
        /// Default document language (overrides XDS_LANGUAGE_CODE)
        #[arg(long)]
        language: Option<String>,
        /// Print only the summary, not the request body
        #[arg(long)]
        summary: bool,
    },
    /// Build a FindDocuments stored query
    FindDocuments {
        /// Patient id in CX format
        patient_id: String,
        /// Document entry status URN (repeatable, default: Approved)
        #[arg(long)]
        status: Vec<String>,
    },
    /// Build a FindSubmissionSets stored query
    FindSubmissionSets {
        /// Patient id in CX format
        patient_id: String,
        /// Submission set status URN (repeatable, default: Approved)
        #[arg(long)]
        status: Vec<String>,
    },
    /// Build a GetAll stored query
    GetAll {
        /// Patient id in CX format
        patient_id: String,
    },
    /// Build retrieve document set requests
    Retrieve {
        /// Repository unique id (overrides XDS_REPOSITORY_UNIQUE_ID)
        #[arg(long)]
        repository: Option<String>,
        /// Home community id (overrides XDS_HOME_COMMUNITY_ID)
        #[arg(long)]
        home: Option<String>,
        /// Document unique ids
        document_ids: Vec<String>,
    },
}

/// Entry point for the `xds` command.
///
/// Every subcommand prints the request it builds as pretty JSON on stdout. Logs go to stderr and
/// are filtered by `RUST_LOG` (default: `xds=info`).
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("xds=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let env = Settings::from_env();

    match cli.command {
        Commands::Submit {
            manifest,
            source_id,
            language,
            summary,
        } => {
            let settings = env.merge(Settings {
                source_id,
                language_code: language,
                ..Settings::default()
            });
            let config = settings.to_config()?;
            let loaded = LoadedManifest::load(&manifest)?;
            let request = loaded.build(&config)?;
            tracing::info!(
                "built submission with {} document(s), {} bytes",
                request.documents.len(),
                request.content_len()
            );
            if summary {
                for payload in &request.documents {
                    println!("{} ({} bytes)", payload.id, payload.content.len());
                }
            } else {
                print_json(&request)?;
            }
        }
        Commands::FindDocuments { patient_id, status } => {
            let statuses: Vec<&str> = status.iter().map(String::as_str).collect();
            print_json(&find_documents_query(&patient_id, &statuses)?)?;
        }
        Commands::FindSubmissionSets { patient_id, status } => {
            let statuses: Vec<&str> = status.iter().map(String::as_str).collect();
            print_json(&find_submission_sets_query(&patient_id, &statuses)?)?;
        }
        Commands::GetAll { patient_id } => {
            print_json(&get_all_query(&patient_id)?)?;
        }
        Commands::Retrieve {
            repository,
            home,
            document_ids,
        } => {
            let settings = env.merge(Settings {
                home_community_id: home,
                repository_unique_id: repository,
                ..Settings::default()
            });
            let repository_id = settings.repository_id()?;
            let home_community_id = settings.home_community_urn()?;
            let requests = new_retrieve_document_set_request(
                repository_id.as_str(),
                &home_community_id,
                Some(document_ids.as_slice()),
            )?;
            print_json(&requests)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
