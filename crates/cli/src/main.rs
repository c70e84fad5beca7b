use clap::{Parser, Subcommand};
use odonto_core::{
    compute_dmft, fdi, ConditionCatalog, CoreConfig, HttpCanvasApi, OdontogramId,
    OdontogramSession, ToothCondition,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "odonto")]
#[command(about = "Odontogram charting toolkit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the DMFT index from an exported condition list (JSON array)
    Dmft {
        /// Path to a JSON file containing an array of tooth conditions
        file: PathBuf,
    },
    /// Classify FDI tooth numbers
    Classify {
        /// Two-digit FDI tooth numbers
        teeth: Vec<u8>,
    },
    /// Fetch one odontogram from the record service and print it
    Pull {
        /// Odontogram record id
        id: u64,
        /// Base URL of the record service, e.g. https://clinic.example/api
        #[arg(long)]
        base_url: String,
        /// CSRF token sourced from the host page
        #[arg(long)]
        csrf_token: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let catalog = ConditionCatalog::standard();

    match cli.command {
        Commands::Dmft { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let conditions: Vec<ToothCondition> = serde_json::from_str(&contents)?;
            let index = compute_dmft(&catalog, &conditions);
            println!("{index}");
        }
        Commands::Classify { teeth } => {
            for value in teeth {
                if !fdi::is_valid_tooth(value) {
                    println!("{value}: not a chartable FDI tooth number");
                    continue;
                }
                let quadrant = fdi::quadrant(value)
                    .map(|q| q.digit().to_string())
                    .unwrap_or_else(|| "?".into());
                let dentition = if fdi::is_deciduous(value) {
                    "deciduous"
                } else {
                    "permanent"
                };
                println!(
                    "{value}: quadrant {quadrant}, {dentition}, {}",
                    fdi::tooth_type(value).label()
                );
            }
        }
        Commands::Pull {
            id,
            base_url,
            csrf_token,
        } => {
            let cfg = Arc::new(CoreConfig::new(&base_url, csrf_token, None)?);
            let api = Arc::new(HttpCanvasApi::new(cfg)?);
            let mut session = OdontogramSession::new(api);
            session.bind(OdontogramId::new(id)).await?;

            let copy = session.working_copy();
            if let Some(summary) = session.summary() {
                if let Some(name) = &summary.patient_name {
                    println!("Patient: {name}");
                }
                if let Some(examined_at) = summary.examined_at {
                    println!("Examined: {examined_at}");
                }
            }

            if copy.conditions.is_empty() {
                println!("No conditions recorded.");
            } else {
                for condition in &copy.conditions {
                    let definition = catalog.lookup(&condition.condition_code);
                    let label = if definition.code.is_empty() {
                        condition.condition_code.as_str()
                    } else {
                        definition.label
                    };
                    match condition.surface {
                        Some(surface) => {
                            println!("Tooth {} [{surface}]: {label}", condition.tooth_number)
                        }
                        None => println!("Tooth {}: {label}", condition.tooth_number),
                    }
                }
            }
            println!(
                "Bridges: {}, indicators: {}",
                copy.bridges.len(),
                copy.indicators.len()
            );
            println!("DMFT: {}", compute_dmft(&catalog, &copy.conditions));
        }
    }

    Ok(())
}
