use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use clauseforge::{
    DocumentType, GenerateContractRequest, GroqClient, GroqConfig, PrintablePage,
    RiskAnalysisRequest, RiskLevel, SuggestionsRequest, analyze_risks, generate_contract,
    parse_clause_file, suggest_clauses, write_fragment,
};

#[derive(Parser)]
#[command(name = "clauseforge")]
#[command(author, version, about = "Contract drafting toolkit with AI analysis and deterministic fallbacks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full contract document as styled HTML
    Generate {
        /// Input clause file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        /// Wrap the fragment in a standalone printable page
        #[arg(long)]
        printable: bool,

        /// Governing jurisdiction (overrides the input file)
        #[arg(long)]
        jurisdiction: Option<String>,

        /// Skip the LLM and use deterministic output only
        #[arg(long)]
        offline: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze clauses for potential legal risks
    Risks {
        /// Input clause file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the LLM and use deterministic output only
        #[arg(long)]
        offline: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest additional clauses for the document
    Suggest {
        /// Input clause file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Document type (overrides the input file)
        #[arg(short, long)]
        document_type: Option<String>,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the LLM and use deterministic output only
        #[arg(long)]
        offline: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            printable,
            jurisdiction,
            offline,
            verbose,
        } => {
            setup_logging(verbose);
            run_generate(input, output, printable, jurisdiction, offline).await
        }
        Commands::Risks {
            input,
            output,
            offline,
            verbose,
        } => {
            setup_logging(verbose);
            run_risks(input, output, offline).await
        }
        Commands::Suggest {
            input,
            document_type,
            output,
            offline,
            verbose,
        } => {
            setup_logging(verbose);
            run_suggest(input, document_type, output, offline).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Build the LLM client from the environment, or return None to run the
/// deterministic fallbacks
fn build_client(offline: bool) -> Option<GroqClient> {
    if offline {
        info!("Offline mode: using deterministic fallbacks");
        return None;
    }
    match GroqConfig::from_env() {
        Ok(config) => {
            info!("Using model {}", config.model);
            Some(GroqClient::new(config))
        }
        Err(err) => {
            info!("LLM unavailable ({err}); using deterministic fallbacks");
            None
        }
    }
}

async fn run_generate(
    input: PathBuf,
    output: PathBuf,
    printable: bool,
    jurisdiction: Option<String>,
    offline: bool,
) -> Result<()> {
    info!("Loading clauses from {:?}", input);
    let file = parse_clause_file(&input).context("Failed to parse input clause file")?;
    info!("Loaded {} clauses", file.clauses.len());

    let client = build_client(offline);
    let request = GenerateContractRequest {
        clauses: file.clauses,
        language: file.language,
        jurisdiction: jurisdiction.or(file.jurisdiction),
    };

    let response = generate_contract(client.as_ref(), &request).await?;

    if printable {
        let title = file.title.as_deref().unwrap_or("Contract Draft");
        let document_type = file.document_type.unwrap_or(DocumentType::Other);
        let document_type = document_type.to_string();
        let page = PrintablePage::new(title, &document_type, &response.contract);
        page.write_file(&output)?;
    } else {
        write_fragment(&output, &response.contract)?;
    }

    info!("Contract written to {:?}", output);
    Ok(())
}

async fn run_risks(input: PathBuf, output: Option<PathBuf>, offline: bool) -> Result<()> {
    info!("Loading clauses from {:?}", input);
    let file = parse_clause_file(&input).context("Failed to parse input clause file")?;
    info!("Loaded {} clauses", file.clauses.len());

    let client = build_client(offline);
    let request = RiskAnalysisRequest {
        clauses: file.clauses,
        language: file.language,
    };

    let response = analyze_risks(client.as_ref(), &request).await?;

    let high = count_level(&response.risk_analysis, RiskLevel::High);
    let medium = count_level(&response.risk_analysis, RiskLevel::Medium);
    let low = count_level(&response.risk_analysis, RiskLevel::Low);
    info!(
        "Risk analysis complete: {} high, {} medium, {} low",
        high, medium, low
    );

    write_json(output.as_deref(), &response)
}

async fn run_suggest(
    input: PathBuf,
    document_type: Option<String>,
    output: Option<PathBuf>,
    offline: bool,
) -> Result<()> {
    info!("Loading clauses from {:?}", input);
    let file = parse_clause_file(&input).context("Failed to parse input clause file")?;

    let document_type = match document_type {
        Some(raw) => raw
            .parse::<DocumentType>()
            .map_err(|err| anyhow::anyhow!(err))?,
        None => file
            .document_type
            .context("Document type is required (set it in the input file or pass --document-type)")?,
    };
    info!(
        "Loaded {} clauses for a {} document",
        file.clauses.len(),
        document_type
    );

    let client = build_client(offline);
    let request = SuggestionsRequest {
        document_type,
        user_clauses: file.clauses,
        language: file.language,
    };

    let response = suggest_clauses(client.as_ref(), &request).await?;
    info!("{} suggestions produced", response.suggestions.len());

    write_json(output.as_deref(), &response)
}

fn count_level(assessments: &[clauseforge::RiskAssessment], level: RiskLevel) -> usize {
    assessments
        .iter()
        .filter(|a| a.risk_level == level)
        .count()
}

/// Write pretty JSON to the given path, or to stdout when no path is set
fn write_json<T: serde::Serialize>(path: Option<&std::path::Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    match path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write file: {:?}", path))?;
            info!("Output written to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
