use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use ringneck_incubator::app::{App, TableRow};
use ringneck_incubator::chart::JsonFileSurface;
use ringneck_incubator::config::Config;
use ringneck_incubator::export;
use ringneck_incubator::kv::FileKvStore;
use ringneck_incubator::metrics::parse_weight;
use ringneck_incubator::record::{parse_date, EggField, EggRecord};
use ringneck_incubator::store::CorruptStatePolicy;
use ringneck_incubator::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ring Neck egg weight-loss tracker", long_about = None)]
struct Cli {
    /// Configuration file (default: ringneck.toml in the working directory)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Data directory, overrides configuration
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every egg with loss percentages and statuses
    List,
    /// Add a new egg at the end of the collection
    Add(AddArgs),
    /// Edit one field of the egg at INDEX (0-based, as shown by `list`)
    Update(UpdateArgs),
    /// Write the current collection to storage
    Save,
    /// Export the collection as semicolon-delimited CSV
    Export(OutputArgs),
    /// Write chart series as JSON
    Chart(OutputArgs),
    /// Discard stored data and return to the seed eggs
    Reset,
}

#[derive(Parser, Debug)]
struct AddArgs {
    /// Egg label, e.g. B6
    #[arg(long)]
    id: String,

    /// Lay date (YYYY-MM-DD)
    #[arg(long)]
    lay_date: String,

    /// Initial weight in grams
    #[arg(long, allow_hyphen_values = true)]
    initial_weight: String,

    /// Incubator entry date (YYYY-MM-DD)
    #[arg(long)]
    incubator_date: String,
}

#[derive(Parser, Debug)]
struct UpdateArgs {
    /// Position of the egg
    index: usize,

    /// Field name (e.g. weightAtDay10, hatchDate, notes, peso_10_dias)
    field: String,

    /// New value; empty string clears optional fields
    #[arg(allow_hyphen_values = true, default_value = "")]
    value: String,
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output path (`-` for stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Reset must work on state that no longer decodes
    let policy = match cli.command {
        Command::Reset => CorruptStatePolicy::FallbackToSeed,
        _ => config.on_corrupt_state,
    };
    let mut app = App::open(FileKvStore::new(&config.data_dir), &config.storage_key, policy)
        .await
        .with_context(|| format!("failed to load eggs from {}", config.data_dir.display()))?;

    if let Some(chart_file) = &config.chart_file {
        app.bind_surface(Box::new(JsonFileSurface::new(chart_file)));
    }

    match cli.command {
        Command::List => print_table(&app.rows()),
        Command::Add(args) => handle_add(&mut app, args).await,
        Command::Update(args) => handle_update(&mut app, args).await,
        Command::Save => {
            app.save().await.map_err(recoverable)?;
            info!(count = app.records().len(), "data saved");
            Ok(())
        }
        Command::Export(args) => {
            let output = args.output.unwrap_or_else(|| config.export_file.clone());
            if output.as_os_str() == "-" {
                export::write_csv(app.records(), io::stdout().lock())?;
            } else {
                export::export_to_file(app.records(), &output)
                    .with_context(|| format!("failed to export {}", output.display()))?;
            }
            Ok(())
        }
        Command::Chart(args) => {
            let data = app.chart_data();
            match args.output {
                Some(path) if path.as_os_str() != "-" => {
                    std::fs::write(&path, serde_json::to_vec_pretty(&data)?)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
                _ => {
                    let mut stdout = io::stdout().lock();
                    serde_json::to_writer_pretty(&mut stdout, &data)?;
                    writeln!(stdout)?;
                }
            }
            Ok(())
        }
        Command::Reset => {
            app.reset().await?;
            info!("eggs reset to seed data");
            Ok(())
        }
    }
}

async fn handle_add(app: &mut App<FileKvStore>, args: AddArgs) -> Result<()> {
    let lay_date =
        parse_date(&args.lay_date).ok_or_else(|| anyhow!("invalid lay date {:?}", args.lay_date))?;
    let entry_date = parse_date(&args.incubator_date)
        .ok_or_else(|| anyhow!("invalid incubator date {:?}", args.incubator_date))?;
    let initial_weight = parse_weight(&args.initial_weight)
        .ok_or_else(|| anyhow!("invalid initial weight {:?}", args.initial_weight))?;
    if initial_weight <= 0.0 {
        warn!(weight = initial_weight, "initial weight is not positive");
    }
    if app.records().iter().any(|egg| egg.id() == args.id) {
        warn!(id = %args.id, "an egg with this id already exists");
    }

    let egg = EggRecord::new(args.id, lay_date, initial_weight, entry_date);
    app.add_record(egg).await.map_err(recoverable)
}

async fn handle_update(app: &mut App<FileKvStore>, args: UpdateArgs) -> Result<()> {
    let field: EggField = args.field.parse()?;
    app.update_field(args.index, field, &args.value)
        .await
        .map_err(recoverable)
}

/// Persistence failures are reported as warnings: the edit itself succeeded.
fn recoverable(err: Error) -> anyhow::Error {
    if matches!(err, Error::Persistence(_)) {
        warn!(error = %err, "changes could not be saved");
    }
    err.into()
}

fn cell(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn print_table(rows: &[TableRow<'_>]) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{:>3}  {:<6} {:<10} {:>7} {:<10}  {:<18} {:<18} {:<18} {:<18} {:<10} Observações",
        "#", "Ovo", "Postura", "Peso(g)", "Entrada", "5 dias", "10 dias", "15 dias", "20 dias", "Eclosão"
    )?;
    for row in rows {
        let egg = row.egg;
        let checkpoints: Vec<String> = row
            .checkpoints
            .iter()
            .map(|c| {
                format!(
                    "{} {} {}",
                    cell(c.weight),
                    cell(c.loss_pct.map(|loss| format!("{loss:.1}%"))),
                    cell(c.status)
                )
                .trim()
                .to_string()
            })
            .collect();
        writeln!(
            out,
            "{:>3}  {:<6} {:<10} {:>7} {:<10}  {:<18} {:<18} {:<18} {:<18} {:<10} {}",
            row.index,
            egg.id(),
            egg.lay_date(),
            egg.initial_weight(),
            egg.incubator_entry_date(),
            checkpoints[0],
            checkpoints[1],
            checkpoints[2],
            checkpoints[3],
            cell(egg.hatch_date()),
            egg.notes().unwrap_or_default(),
        )?;
    }
    Ok(())
}
