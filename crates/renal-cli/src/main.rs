//! `renal`: serve the renal transplant demo or evaluate a dosing request.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use renal_core::{DosingEvaluator, DosingOutcome, MessageCatalog};
use renal_web::{SiteConfig, DEFAULT_SITE_NAME};
use tracing_subscriber::EnvFilter;

/// Exit status when the submitted values fail validation.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "renal", version, about = "Renal transplant demo app (educational, non-clinical)")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server
    Serve(ServeArgs),

    /// Evaluate one dosing request and print the outcome
    Evaluate(EvaluateArgs),

    /// Print the built-in message catalog
    Catalog {
        #[arg(long, value_enum, default_value_t = CatalogFormat::Yaml)]
        format: CatalogFormat,
    },
}

#[derive(Debug, clap::Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Site name shown in the header and footer
    #[arg(long, env = "RENAL_SITE_NAME", default_value = DEFAULT_SITE_NAME)]
    site_name: String,

    /// Pin the footer year instead of using the current year
    #[arg(long, env = "RENAL_SITE_YEAR")]
    year: Option<i32>,

    /// Message catalog overriding the built-in wording (YAML or JSON)
    #[arg(long, env = "RENAL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long, env = "RENAL_PUBLIC_DIR")]
    public_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
struct EvaluateArgs {
    /// Drug name (tacrolimus, cyclosporin, mycophenolate or free text)
    #[arg(long)]
    drug: Option<String>,

    /// Body weight in kg
    #[arg(long, allow_hyphen_values = true)]
    weight_kg: String,

    /// Serum creatinine in µmol/L
    #[arg(long, allow_hyphen_values = true)]
    creatinine: String,

    /// Trough level in ng/mL
    #[arg(long, allow_hyphen_values = true)]
    trough: String,

    /// Message catalog overriding the built-in wording (YAML or JSON)
    #[arg(long, env = "RENAL_CATALOG")]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CatalogFormat {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Evaluate(args) => evaluate(args),
        Command::Catalog { format } => print_catalog(format),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_evaluator(catalog: Option<&Path>) -> Result<DosingEvaluator> {
    match catalog {
        Some(path) => {
            let catalog = MessageCatalog::from_path(path)
                .with_context(|| format!("loading message catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), "using custom message catalog");
            Ok(DosingEvaluator::with_catalog(catalog))
        }
        None => Ok(DosingEvaluator::new()),
    }
}

async fn serve(args: ServeArgs) -> Result<ExitCode> {
    let evaluator = load_evaluator(args.catalog.as_deref())?;

    let mut site = SiteConfig::new(args.site_name);
    site.year = args.year;
    if let Some(dir) = args.public_dir {
        if !dir.is_dir() {
            anyhow::bail!("public directory {} does not exist", dir.display());
        }
        site = site.with_public_dir(dir);
    }

    let addr = SocketAddr::new(args.host, args.port);
    renal_web::serve(addr, evaluator, site)
        .await
        .context("running web server")?;

    Ok(ExitCode::SUCCESS)
}

fn evaluate(args: EvaluateArgs) -> Result<ExitCode> {
    let evaluator = load_evaluator(args.catalog.as_deref())?;
    let outcome = evaluator.evaluate(
        args.drug.as_deref(),
        &args.weight_kg,
        &args.creatinine,
        &args.trough,
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => match &outcome {
            DosingOutcome::Suggestion(text) => println!("{}", text),
            DosingOutcome::Errors(errors) => {
                for error in errors {
                    eprintln!("{}", error);
                }
            }
        },
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}

fn exit_status(outcome: &DosingOutcome) -> u8 {
    match outcome {
        DosingOutcome::Suggestion(_) => 0,
        DosingOutcome::Errors(_) => EXIT_INVALID_INPUT,
    }
}

fn print_catalog(format: CatalogFormat) -> Result<ExitCode> {
    let catalog = MessageCatalog::default();
    let rendered = match format {
        CatalogFormat::Yaml => serde_yaml::to_string(&catalog)?,
        CatalogFormat::Json => serde_json::to_string_pretty(&catalog)?,
    };
    println!("{}", rendered.trim_end());
    Ok(ExitCode::SUCCESS)
}
