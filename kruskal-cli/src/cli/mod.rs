//! Command-line interface orchestration for the kruskal binary.
//!
//! The CLI offers a `sample` command that runs the built-in demonstration
//! graph and a `solve` command that takes the graph from repeated `--edge`
//! arguments.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeSpec, EdgeSpecError, ExecutionSummary, SolveCommand,
    render_summary, run_cli,
};
