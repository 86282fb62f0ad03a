use std::io::{self, Write};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use kruskal_core::{EdgeValidation, Graph, KruskalError, MinimumSpanningForest, MstBuilder};
use thiserror::Error;
use tracing::info;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the spanning tree of the built-in five-vertex graph.
    Sample,
    /// Compute the spanning forest of a graph described by `--edge` flags.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Number of vertices; edges may reference `0..VERTICES`.
    #[arg(long, allow_negative_numbers = true)]
    pub vertices: i64,

    /// Edge as `SRC-DEST:WEIGHT`; repeat once per edge.
    #[arg(long = "edge", value_name = "SRC-DEST:WEIGHT")]
    pub edges: Vec<EdgeSpec>,

    /// Range-check every edge before sorting rather than on first use.
    #[arg(long)]
    pub eager: bool,
}

/// A single `SRC-DEST:WEIGHT` edge argument.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::EdgeSpec;
///
/// let spec: EdgeSpec = "2-4:-1".parse()?;
/// assert_eq!((spec.source, spec.destination, spec.weight), (2, 4, -1));
/// # Ok::<(), kruskal_cli::cli::EdgeSpecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Source vertex index.
    pub source: usize,
    /// Destination vertex index.
    pub destination: usize,
    /// Edge weight.
    pub weight: i64,
}

/// Raised when an `--edge` argument is malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid edge `{raw}`: {reason}")]
pub struct EdgeSpecError {
    /// The argument as supplied.
    pub raw: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl FromStr for EdgeSpec {
    type Err = EdgeSpecError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| EdgeSpecError {
            raw: raw.to_owned(),
            reason,
        };
        let (endpoints, weight) = raw
            .split_once(':')
            .ok_or_else(|| invalid("expected `SRC-DEST:WEIGHT`"))?;
        let (source, destination) = endpoints
            .split_once('-')
            .ok_or_else(|| invalid("expected `SRC-DEST` before `:`"))?;

        Ok(Self {
            source: source
                .trim()
                .parse()
                .map_err(|_| invalid("source must be a non-negative integer"))?,
            destination: destination
                .trim()
                .parse()
                .map_err(|_| invalid("destination must be a non-negative integer"))?,
            weight: weight
                .trim()
                .parse()
                .map_err(|_| invalid("weight must be an integer"))?,
        })
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph construction or the spanning forest computation failed.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Label for the graph that was solved.
    pub graph: String,
    /// Spanning forest selected by Kruskal's algorithm.
    pub forest: MinimumSpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph is invalid.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{Cli, Command, run_cli};
///
/// let summary = run_cli(Cli { command: Command::Sample })?;
/// assert_eq!(summary.forest.total_weight(), 7);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let (label, graph, builder) = match cli.command {
        Command::Sample => ("sample", Graph::sample(), MstBuilder::new()),
        Command::Solve(command) => {
            let (graph, builder) = solve_inputs(&command)?;
            ("command line", graph, builder)
        }
    };

    let forest = builder.build(&graph)?;
    info!(
        graph = label,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        accepted = forest.edge_count(),
        total_weight = forest.total_weight(),
        "computed spanning forest"
    );
    Ok(ExecutionSummary {
        graph: label.to_owned(),
        forest,
    })
}

fn solve_inputs(command: &SolveCommand) -> Result<(Graph, MstBuilder), CliError> {
    let mut graph = Graph::try_new(command.vertices)?;
    for edge in &command.edges {
        graph.add_edge(edge.source, edge.destination, edge.weight);
    }

    let validation = if command.eager {
        EdgeValidation::Eager
    } else {
        EdgeValidation::Lazy
    };
    Ok((graph, MstBuilder::new().with_validation(validation)))
}

/// Renders `summary` to `writer`: a header, one `src-dest\tweight` line per
/// accepted edge in acceptance order, and the total weight. A forest spanning
/// several components adds a `components: N` line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli { command: Command::Sample })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Edge \tWeight\n2-4\t1\n0-1\t2\n1-4\t2\n3-4\t2\ntotal weight: 7\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Edge \tWeight")?;
    for edge in summary.forest.edges() {
        writeln!(
            writer,
            "{}-{}\t{}",
            edge.source(),
            edge.destination(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", summary.forest.total_weight())?;
    if summary.forest.component_count() > 1 {
        writeln!(writer, "components: {}", summary.forest.component_count())?;
    }
    Ok(())
}
