use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable_console::api::{ExportFormat, GenerateRequest};
use timetable_console::models::{EntityKind, FormFields};
use timetable_console::ui::{Tab, TerminalSurface};
use timetable_console::{Console, ConsoleConfig, HttpTimetableApi};

#[derive(Parser)]
#[command(name = "timetable-console")]
#[command(about = "Headless front end for the timetable server", long_about = None)]
struct Cli {
    /// API base URL (overrides TIMETABLE_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Courses,
    Faculty,
    Rooms,
    Students,
}

impl From<Kind> for EntityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Courses => EntityKind::Courses,
            Kind::Faculty => EntityKind::Faculty,
            Kind::Rooms => EntityKind::Rooms,
            Kind::Students => EntityKind::Students,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Excel,
}

#[derive(Subcommand)]
enum Commands {
    /// Show record counts for every collection
    Stats,
    /// List one collection
    List { kind: Kind },
    /// Add a record to a collection
    Add {
        kind: Kind,
        /// Field as key=value; repeatable
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Check that the server has enough data to generate
    Validate,
    /// Generate a timetable
    Generate {
        #[arg(long, default_value = "General")]
        program: String,
        #[arg(long, default_value = "Current")]
        semester: String,
        #[arg(long, default_value = "csp")]
        algorithm: String,
    },
    /// List saved timetables
    Timetables,
    /// Show one saved timetable
    Show { id: String },
    /// Print the download link for a saved timetable
    Export { format: Format, id: String },
    /// Ping the server
    Health,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "timetable_console=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ConsoleConfig::new_from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    info!("using timetable server at {}", config.base_url);

    let mut surface = TerminalSurface::new();
    if let Commands::Add { kind, fields } = &cli.command {
        let fields: FormFields = fields.iter().cloned().collect();
        surface = surface.with_form((*kind).into(), fields);
    }

    let api = Arc::new(HttpTimetableApi::new(config)?);
    let console = Console::new(api, Arc::new(surface));

    let ok = match cli.command {
        Commands::Stats => {
            console.refresh_stats().await;
            true
        }
        Commands::List { kind } => {
            let kind = EntityKind::from(kind);
            if kind == EntityKind::Courses {
                // Course rows need faculty names.
                console.refresh(EntityKind::Faculty).await;
            }
            console.refresh(kind).await;
            true
        }
        Commands::Add { kind, .. } => console.submit_form(kind.into()).await,
        Commands::Validate => {
            console.validate().await;
            true
        }
        Commands::Generate {
            program,
            semester,
            algorithm,
        } => {
            console
                .generate(GenerateRequest {
                    program,
                    semester,
                    algorithm,
                })
                .await;
            console.current_timetable_id().await.is_some()
        }
        Commands::Timetables => {
            console.switch_tab(Tab::View).await;
            true
        }
        Commands::Show { id } => {
            console.load_timetable_by_id(&id).await;
            console.current_timetable_id().await.as_deref() == Some(id.as_str())
        }
        Commands::Export { format, id } => {
            console.load_timetable_by_id(&id).await;
            let format = match format {
                Format::Pdf => ExportFormat::Pdf,
                Format::Excel => ExportFormat::Excel,
            };
            console.export(format).await
        }
        Commands::Health => console.check_health().await,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
