//! Strata CLI - render data as nested terminal layouts
//!
//! Usage:
//!   strata render <file>        Print the component record tree as JSON
//!   strata hydrate <records>    Show a record tree produced by `render`
//!   strata view <file>          Render, hydrate and show a JSON document
//!   strata init                 Write a default .strata/config.toml
//!
//! `-` reads from stdin.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use strata_core::{StrataConfig, Value};
use strata_hydrate::{to_plain_text, ComponentOutput, Element};
use strata_viewer::Viewer;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "strata")]
#[command(author, version, about = "Render data as nested terminal layouts")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding .strata/config.toml
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the component record tree for a JSON document
    Render {
        /// JSON file, or - for stdin
        file: PathBuf,

        #[command(flatten)]
        render: RenderArgs,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Show a component record tree in the terminal
    Hydrate {
        /// Record JSON file, or - for stdin
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a JSON document and show it in the terminal
    View {
        /// JSON file, or - for stdin
        file: PathBuf,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .strata/config.toml
    Init {
        /// Project path (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Overrides for the render settings in the config file
#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Viewport width in logical units
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in logical units
    #[arg(long)]
    height: Option<f64>,

    /// Path of the root node
    #[arg(long)]
    path: Option<String>,

    /// Treat RFC 3339 strings as dates
    #[arg(long)]
    detect_dates: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print plain text instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Columns used with --print
    #[arg(long, default_value = "80")]
    columns: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            file,
            render,
            pretty,
        } => cmd_render(&cli.project, &file, &render, pretty),
        Commands::Hydrate { file, output } => cmd_hydrate(&cli.project, &file, &output),
        Commands::View {
            file,
            render,
            output,
        } => cmd_view(&cli.project, &file, &render, &output),
        Commands::Init { path } => cmd_init(&path),
    }
}

/// Load the project config and apply command-line overrides
fn load_config(project: &Path, args: &RenderArgs) -> Result<StrataConfig> {
    let mut config = StrataConfig::load_or_default(project).context("Failed to load config")?;

    if let Some(width) = args.width {
        config.size.width = width;
    }
    if let Some(height) = args.height {
        config.size.height = height;
    }
    if let Some(path) = &args.path {
        config.root_path = path.clone();
    }
    if args.detect_dates {
        config.detect_dates = true;
    }

    config.validate().context("Invalid settings")?;
    debug!(?config, "effective config");
    Ok(config)
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))
    }
}

fn read_value(file: &Path, detect_dates: bool) -> Result<Value> {
    let content = read_input(file)?;
    let json: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse JSON input")?;
    Ok(Value::from_json(json, detect_dates))
}

fn title_for(file: &Path) -> String {
    if file == Path::new("-") {
        "<stdin>".to_string()
    } else {
        file.display().to_string()
    }
}

/// Print or open the viewer on a hydrated element
fn show(element: Element, title: &str, config: &StrataConfig, output: &OutputArgs) -> Result<()> {
    if output.print {
        println!("{}", to_plain_text(&element, output.columns, config.scale.into()));
        return Ok(());
    }

    strata_viewer::run(element, title, config)?;
    Ok(())
}

fn cmd_render(project: &Path, file: &Path, args: &RenderArgs, pretty: bool) -> Result<()> {
    let config = load_config(project, args)?;
    let value = read_value(file, config.detect_dates)?;

    let output = strata_components::render(&value, config.size, Some(&config.root_path), None)
        .context("Render failed")?;

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}

fn cmd_hydrate(project: &Path, file: &Path, output: &OutputArgs) -> Result<()> {
    let config = load_config(project, &RenderArgs::default())?;
    let content = read_input(file)?;
    let records: ComponentOutput =
        serde_json::from_str(&content).context("Failed to parse component records")?;

    info!("Hydrating {} records", records.node_count());
    let element = strata_hydrate::hydrate(&records);

    show(element, &title_for(file), &config, output)
}

fn cmd_view(project: &Path, file: &Path, args: &RenderArgs, output: &OutputArgs) -> Result<()> {
    let config = load_config(project, args)?;
    let value = read_value(file, config.detect_dates)?;

    let element = Viewer::new(&value, config.size)
        .path(config.root_path.clone())
        .view()
        .context("Render failed")?;

    match element {
        Some(element) => show(element, &title_for(file), &config, output),
        None => {
            info!("Nothing to show");
            Ok(())
        }
    }
}

fn cmd_init(path: &Path) -> Result<()> {
    info!("Initializing Strata in {:?}", path);

    StrataConfig::write_default(path).context("Failed to write config")?;

    println!("Initialized Strata in {:?}", path);
    println!("Created:");
    println!("  .strata/config.toml");

    Ok(())
}
