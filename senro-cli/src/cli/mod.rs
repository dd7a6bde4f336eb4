//! Command-line interface for driving walks over a mesh file.
//!
//! The single `run` command loads an OBJ-style mesh, advances the walk engine
//! frame by frame the way a render host would, and summarises the polylines
//! each agent drew.

mod commands;

pub use commands::{
    AgentPaths, Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
