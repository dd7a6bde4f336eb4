//! Argument parsing and the `run` command.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use senro_core::{
    AdjacencyGraph, AgentId, DEFAULT_PATH_LENGTH_CAP, GraphError, PathSet, TopologySource,
    WalkEngine, WalkEngineBuilder, WalkError,
};
use senro_providers_mesh::{MeshSource, MeshSourceError, Position};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SEEDS: [u64; 2] = [42, 46];
const DEFAULT_FRAMES: u64 = 250;
const DEFAULT_FRAME_START: u64 = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "senro", about = "Grow self-avoiding random walks over a mesh.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Walk a mesh for a number of frames and print the resulting paths.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// OBJ-style mesh whose vertices and edges form the walk graph.
    pub path: PathBuf,

    /// Seed of one walking agent; repeat for several agents.
    #[arg(long = "seed", default_values_t = DEFAULT_SEEDS)]
    pub seeds: Vec<u64>,

    /// Maximum number of points in a path before it restarts.
    #[arg(long, default_value_t = DEFAULT_PATH_LENGTH_CAP)]
    pub path_length_cap: usize,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Number of the first frame; it triggers the full reset.
    #[arg(long, default_value_t = DEFAULT_FRAME_START)]
    pub frame_start: u64,

    /// Override name for the mesh (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The mesh file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Mesh parsing failed.
    #[error(transparent)]
    Mesh(#[from] MeshSourceError),
    /// Graph construction or a vertex lookup failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Engine configuration or stepping failed.
    #[error(transparent)]
    Core(#[from] WalkError),
}

/// Paths one agent drew since the last full reset.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentPaths {
    /// Agent that drew the paths.
    pub agent: AgentId,
    /// Polylines in drawing order, each resolved to vertex positions.
    pub polylines: Vec<Vec<Position>>,
}

/// Outcome of a `run` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Name of the mesh.
    pub source: String,
    /// Vertices in the walk graph.
    pub vertex_count: usize,
    /// Undirected edges in the walk graph.
    pub edge_count: usize,
    /// Frames simulated.
    pub frames: u64,
    /// Paths per agent in ascending agent order.
    pub agents: Vec<AgentPaths>,
}

impl ExecutionSummary {
    /// Returns the number of points across every agent and polyline.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.agents
            .iter()
            .flat_map(|agent| agent.polylines.iter())
            .map(Vec::len)
            .sum()
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the mesh, building the engine or
/// stepping it fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use senro_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         seeds: vec![42, 46],
///         path_length_cap: 500,
///         frames: 10,
///         frame_start: 1,
///         name: Some("triangle".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.agents.len(), 2);
/// assert_eq!(summary.point_count(), 20);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        agents = command.seeds.len(),
        path_length_cap = command.path_length_cap,
        frames = command.frames,
        frame_start = command.frame_start,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        seeds,
        path_length_cap,
        frames,
        frame_start,
        name,
    } = command;

    let mesh = load_mesh(&path, name.as_deref())?;
    let graph = AdjacencyGraph::from_source(&mesh)?;
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let mut engine = WalkEngineBuilder::new()
        .with_seeds(seeds)
        .with_path_length_cap(path_length_cap)
        .build(graph)?;

    let paths = drive_frames(&mut engine, frame_start, frames)?;
    let agents = resolve_positions(&mesh, &paths)?;
    let summary = ExecutionSummary {
        source: mesh.name().to_owned(),
        vertex_count,
        edge_count,
        frames,
        agents,
    };

    info!(
        source = summary.source.as_str(),
        points = summary.point_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.load_mesh",
    err,
    skip(path, name),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_mesh(path: &Path, name: Option<&str>) -> Result<MeshSource, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("override_name", field::display(name.unwrap_or("<derived>")));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = MeshSource::try_from_reader(derive_source_name(path, name), BufReader::new(file))?;
    Ok(mesh)
}

/// Runs frames `frame_start..frame_start + frames`, resetting on the first.
pub(super) fn drive_frames(
    engine: &mut WalkEngine,
    frame_start: u64,
    frames: u64,
) -> Result<PathSet, CliError> {
    let mut paths = PathSet::default();
    for frame in frame_start..frame_start.saturating_add(frames) {
        engine.advance(frame <= frame_start, &mut paths)?;
    }
    Ok(paths)
}

fn resolve_positions(mesh: &MeshSource, paths: &PathSet) -> Result<Vec<AgentPaths>, CliError> {
    paths
        .iter()
        .map(|(agent, polylines)| -> Result<AgentPaths, CliError> {
            let polylines = polylines
                .iter()
                .map(|polyline| {
                    polyline
                        .iter()
                        .map(|&vertex| mesh.position(vertex))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AgentPaths { agent, polylines })
        })
        .collect()
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "mesh".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`, one tab-separated line per polyline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use senro_cli::cli::{AgentPaths, ExecutionSummary, render_summary};
/// # use senro_core::AgentId;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     vertex_count: 2,
///     edge_count: 1,
///     frames: 2,
///     agents: vec![AgentPaths {
///         agent: AgentId::new(42),
///         polylines: vec![vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]],
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("42\t0\t0 0 0\t1 0 0\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "mesh: {}", summary.source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "frames: {}", summary.frames)?;
    for agent in &summary.agents {
        for (index, polyline) in agent.polylines.iter().enumerate() {
            write!(writer, "{}\t{index}", agent.agent)?;
            for [x, y, z] in polyline {
                write!(writer, "\t{x} {y} {z}")?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
