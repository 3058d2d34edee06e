//! jsonmap CLI - Command-line tool for annotation-directed JSON mapping
//!
//! This binary provides command-line interfaces for:
//! - list: show the demonstration entities
//! - map: map a JSON document onto an entity and print the result
//! - paths: show the derived path of every field of an entity
//! - path: derive a single field path from a base, name and annotation
//! - docs: print the markdown documentation for all entities

use clap::{Parser, Subcommand, ValueEnum};
use jsonmap::reader::read_document;
use jsonmap::{derive_fragment, FieldKind, Limits, Mapper, Path};
use jsonmap_demo::{docs, Example, EXAMPLES};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonmap")]
#[command(about = "Annotation-directed JSON mapping CLI tool")]
#[command(version)]
struct Cli {
    /// TOML file with mapping limits (max_depth, max_input_bytes)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log mapping decisions to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List demonstration entities
    List {
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Map a JSON document onto an entity and print it
    ///
    /// Examples:
    ///   jsonmap map renamed
    ///   jsonmap map traversal order.json
    Map {
        /// Entity slug (see `jsonmap list`)
        entity: String,
        /// Input JSON file (defaults to the entity's sample document)
        input: Option<PathBuf>,
    },
    /// Show the derived path of every field of an entity
    Paths {
        /// Entity slug (see `jsonmap list`)
        entity: String,
        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Derive the path of one field
    ///
    /// Examples:
    ///   jsonmap path "" city --annotation town
    ///   jsonmap path address city --annotation "geo/"
    Path {
        /// Base path of the owning struct ("" for the root)
        base: String,
        /// Field name
        name: String,
        /// Field annotation
        #[arg(long)]
        annotation: Option<String>,
    },
    /// Print markdown documentation for every entity
    Docs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, serde::Serialize)]
struct EntitySummary {
    slug: &'static str,
    entity: &'static str,
    title: &'static str,
    annotation: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
struct PathSummary {
    name: &'static str,
    kind: &'static str,
    depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<&'static str>,
    path: String,
    display: String,
    segments: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let limits = load_limits(cli.config.as_deref())?;
    let mapper = Mapper::with_limits(limits)?;

    match cli.command {
        Commands::List { format } => handle_list(format)?,
        Commands::Map { entity, input } => handle_map(&mapper, &entity, input)?,
        Commands::Paths { entity, format } => handle_paths(&mapper, &entity, format)?,
        Commands::Path {
            base,
            name,
            annotation,
        } => handle_path(&base, &name, annotation.as_deref())?,
        Commands::Docs => handle_docs(&mapper)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_limits(path: Option<&std::path::Path>) -> Result<Limits, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(Limits::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("reading config {} failed: {e}", path.display()))?;
    let limits: Limits = toml::from_str(&content)
        .map_err(|e| format!("parsing config {} failed: {e}", path.display()))?;
    debug!(?limits, config = %path.display(), "loaded limits");
    Ok(limits)
}

fn lookup(slug: &str) -> Result<&'static Example, Box<dyn Error>> {
    jsonmap_demo::find(slug).ok_or_else(|| {
        let available: Vec<&str> = EXAMPLES.iter().map(|example| example.slug).collect();
        format!(
            "unknown entity '{slug}'. Available entities: {}",
            available.join(", ")
        )
        .into()
    })
}

fn handle_list(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let summaries: Vec<EntitySummary> = EXAMPLES
        .iter()
        .map(|example| EntitySummary {
            slug: example.slug,
            entity: example.entity_name(),
            title: example.title,
            annotation: example.annotation,
        })
        .collect();

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &summaries)?;
            writeln!(stdout)?;
        }
        OutputFormat::Table => {
            writeln!(stdout, "{:<14} {:<20} {}", "SLUG", "ENTITY", "TITLE")?;
            for summary in &summaries {
                writeln!(
                    stdout,
                    "{:<14} {:<20} {}",
                    summary.slug, summary.entity, summary.title
                )?;
            }
        }
    }
    Ok(())
}

fn handle_map(
    mapper: &Mapper,
    slug: &str,
    input: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let example = lookup(slug)?;
    let document = match input {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| format!("opening {} failed: {e}", path.display()))?;
            debug!(entity = slug, input = %path.display(), "mapping input file");
            read_document(file, mapper.limits().max_input_bytes)?
        }
        None => {
            debug!(entity = slug, "mapping sample document");
            example.fixture_document()?
        }
    };

    (example.print)(mapper, &document)?;
    Ok(())
}

fn handle_paths(
    mapper: &Mapper,
    slug: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let example = lookup(slug)?;
    let paths = (example.paths)(mapper)?;

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let summaries: Vec<PathSummary> = paths
                .iter()
                .map(|field| PathSummary {
                    name: field.name,
                    kind: match field.kind {
                        FieldKind::Leaf => "leaf",
                        FieldKind::Nested => "nested",
                    },
                    depth: field.depth,
                    annotation: field.annotation,
                    path: field.path.canonical().to_string(),
                    display: field.path.display_value().to_string(),
                    segments: field.path.segments().to_vec(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut stdout, &summaries)?;
            writeln!(stdout)?;
        }
        OutputFormat::Table => {
            for field in &paths {
                let indent = field.depth * 2;
                let label = format!("{:indent$}{}", "", field.name);
                writeln!(stdout, "{label:<24} {:<7} {}", field.kind, field.path)?;
            }
        }
    }
    Ok(())
}

fn handle_path(base: &str, name: &str, annotation: Option<&str>) -> Result<(), Box<dyn Error>> {
    let fragment = derive_fragment(name, annotation);
    let path = Path::new(base).append(&fragment);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{path}")?;
    Ok(())
}

fn handle_docs(mapper: &Mapper) -> Result<(), Box<dyn Error>> {
    let out = docs::readme_with(mapper)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    Ok(())
}
