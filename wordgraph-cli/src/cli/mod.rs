//! CLI command definitions and handlers

mod augment;
mod bridge;
mod path;
mod render;
mod shell;
mod stats;
mod walk;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};
use wordgraph_core::GraphStore;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::normalize::normalize_file;

/// Wordgraph - word adjacency graph explorer
#[derive(Parser, Debug)]
#[command(name = "wordgraph")]
#[command(
    version,
    about = "Build a word adjacency graph from a text file and query it",
    long_about = "Wordgraph reads a text file, normalizes it to lowercase words and builds a \
directed graph where each edge counts how often one word directly follows another.\n\n\
The graph answers bridge-word queries, inserts bridge words into new text, finds \
shortest paths and performs random walks.\n\n\
Run without a subcommand to start the interactive session.",
    after_help = "\
Examples:
  wordgraph -i story.txt                      Interactive session
  wordgraph -i story.txt bridge new life      Bridge words from 'new' to 'life'
  wordgraph -i story.txt augment seek a new life
  wordgraph -i story.txt path new life        All shortest paths
  wordgraph -i story.txt path new             Paths from 'new' to every word
  wordgraph -i story.txt --seed 7 walk        Reproducible random walk
  wordgraph -i story.txt render               Write output.dot and image.png"
)]
pub struct Cli {
    /// Text file to build the graph from (default: text.txt)
    #[arg(long, short = 'i', global = true, env = "WORDGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Config file (default: ./wordgraph.toml, ./.wordgraphrc.json, then user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for augment and walk randomness
    #[arg(long, global = true, env = "WORDGRAPH_SEED")]
    pub seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, short = 'f', global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node, edge and weight counts
    Stats,

    /// Print every edge as (source, target, weight)
    Export,

    /// Find bridge words: every C with edges WORD1 -> C and C -> WORD2
    Bridge { word1: String, word2: String },

    /// Insert a random bridge word between each adjacent pair of TEXT
    Augment {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// All shortest paths between two words, or one path to every word from one word
    Path {
        word1: String,
        word2: Option<String>,
    },

    /// Random walk until a dead end or a repeated edge
    Walk {
        /// Start word (default: uniformly random)
        #[arg(long)]
        start: Option<String>,

        /// Also write the walk to this file, one word per line
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write the graph as DOT and draw it with Graphviz
    Render {
        /// DOT output path (default: output.dot)
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Image output path (default: image.png)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Graphviz output format (png, svg, pdf, ...)
        #[arg(long)]
        image_format: Option<String>,

        /// Only write the DOT file
        #[arg(long)]
        no_image: bool,
    },

    /// Interactive session: bridge words, new text, shortest paths, random walk
    Shell {
        /// Skip writing the DOT file and image before the session starts
        #[arg(long)]
        no_render: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Everything a command needs: the graph, resolved settings and the RNG
pub struct Session {
    pub graph: GraphStore,
    pub config: ProjectConfig,
    pub format: OutputFormat,
    pub rng: ChaCha8Rng,
}

impl Session {
    /// Resolve config, read and normalize the corpus, build the graph
    fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => load_project_config(&std::env::current_dir()?),
        };

        let file = cli
            .file
            .clone()
            .or_else(|| config.file.clone())
            .unwrap_or_else(|| PathBuf::from("text.txt"));
        let tokens = normalize_file(&file)?;
        let graph = GraphStore::from_tokens(&tokens);
        debug!(file = %file.display(), "graph ready");

        let format = match cli.format.as_deref().or(config.output.format.as_deref()) {
            None => OutputFormat::Text,
            Some(value) => OutputFormat::parse(value).unwrap_or_else(|| {
                warn!("Unknown output format '{}', using text", value);
                OutputFormat::Text
            }),
        };

        let seed = cli.seed.or(config.walk.seed);
        Ok(Self::new(graph, config, format, seed))
    }

    pub fn new(
        graph: GraphStore,
        config: ProjectConfig,
        format: OutputFormat,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            graph,
            config,
            format,
            rng,
        }
    }
}

/// Lowercase and trim a word typed by the user
fn query_word(input: &str) -> String {
    input.trim().to_lowercase()
}

fn print_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mut session = Session::load(&cli)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Stats) => stats::run(&session, &mut out),
        Some(Commands::Export) => stats::export(&session, &mut out),
        Some(Commands::Bridge { word1, word2 }) => bridge::run(&session, &word1, &word2, &mut out),
        Some(Commands::Augment { text }) => augment::run(&mut session, &text.join(" "), &mut out),
        Some(Commands::Path { word1, word2 }) => {
            path::run(&session, &word1, word2.as_deref(), &mut out)
        }
        Some(Commands::Walk { start, output }) => {
            walk::run(&mut session, start.as_deref(), output, &mut out)
        }
        Some(Commands::Render {
            dot,
            image,
            image_format,
            no_image,
        }) => {
            let options = render::RenderOptions::resolve(
                &session.config,
                dot,
                image,
                image_format,
                !no_image,
            );
            render::run(&session, &options, &mut out)
        }
        Some(Commands::Shell { no_render: true }) => {
            let stdin = std::io::stdin();
            shell::run(&mut session, None, &mut stdin.lock(), &mut out)
        }
        Some(Commands::Shell { no_render: false }) | None => {
            let options = render::RenderOptions::resolve(&session.config, None, None, None, true);
            let stdin = std::io::stdin();
            shell::run(&mut session, Some(&options), &mut stdin.lock(), &mut out)
        }
    }
}
