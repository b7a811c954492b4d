use clap::{Args, Parser, Subcommand};

mod config;
mod diagnostics;
mod error;
mod model;
mod render;
mod spec;
mod viewport;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "hub-deps")]
#[command(about = "Dataset version dependency graph builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dependency graph of a version (validates inputs while running).
    Graph(GraphArgs),

    /// Compute the pan/zoom transform for a rendered graph.
    Fit {
        /// Rendered graph width.
        #[arg(long)]
        width: f64,

        /// Rendered graph height.
        #[arg(long)]
        height: f64,

        #[arg(long)]
        viewport_width: f64,

        /// Explicit viewport height, if the page sets one.
        #[arg(long)]
        viewport_height: Option<f64>,

        #[arg(long, default_value_t = viewport::DEFAULT_MARGIN)]
        margin: f64,
    },
}

#[derive(Args, Debug, Clone)]
struct GraphArgs {
    /// Dependency payload: a list of records or an object with `dependencies`.
    #[arg(long)]
    deps: String,

    #[arg(long, value_enum, default_value_t = render::OutputFormat::Json)]
    format: render::OutputFormat,

    /// Separator between dataset name and version for same-hub nodes.
    #[arg(long, value_enum)]
    label_style: Option<model::LabelStyle>,

    /// Viewport margin used when fitting the HTML page.
    #[arg(long)]
    margin: Option<f64>,

    /// Enable pan/zoom in the HTML page.
    #[arg(long)]
    full: bool,

    /// TOML settings file; flags take precedence.
    #[arg(long)]
    config: Option<String>,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long)]
    out: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.cmd {
        Commands::Graph(args) => {
            let text = run_graph(&args)?;

            match &args.out {
                Some(path) => {
                    std::fs::write(path, text)?;
                    tracing::info!(path = %path, "wrote output");
                    println!("Wrote {}", path);
                }
                None => print!("{}", text),
            }
        }

        Commands::Fit {
            width,
            height,
            viewport_width,
            viewport_height,
            margin,
        } => {
            let fit = viewport::fit(
                viewport::Size { width, height },
                viewport_width,
                viewport_height,
                margin,
            );
            println!("{}", serde_json::to_string_pretty(&fit)?);
        }
    }

    Ok(())
}

/// Settings, then parse + validate deps.json, then build, then render.
fn run_graph(args: &GraphArgs) -> Result<String> {
    // 1) Settings: defaults < config file < flags.
    let cfg = config::Config::load(
        args.config.as_deref(),
        config::Overrides {
            label_style: args.label_style,
            margin: args.margin,
            full: args.full.then_some(true),
        },
    )?;

    // 2) Parse + validate deps.json.
    let edges = spec::load_deps_file(&args.deps)?;

    // 3) Build.
    let graph = model::build(&edges, cfg.label_style);
    let stats = graph.stats();
    tracing::info!(
        nodes = stats.nodes,
        edges = stats.edges,
        highlighted = stats.highlighted,
        "built dependency graph"
    );
    if let Some(msg) = selection_warning(&args.deps, &stats) {
        diagnostics::warn(msg);
    }

    // 4) Render.
    match args.format {
        render::OutputFormat::Json => render::render_json(&graph, &cfg.highlight_fill),
        render::OutputFormat::Dot => Ok(render::render_dot(&graph, &cfg.highlight_fill)),
        render::OutputFormat::Html => render::render_html_page(&graph, &cfg),
    }
}

/// A non-empty graph is expected to contain the version the page is about.
fn selection_warning(deps: &str, stats: &model::GraphStats) -> Option<String> {
    (stats.edges > 0 && stats.highlighted == 0)
        .then(|| format!("no node in {} is marked as selected", deps))
}
