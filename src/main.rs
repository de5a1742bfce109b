use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fading_game::{Board, Cell, Game, GameResult};
use fading_oracle::Oracle;
use fading_solver::{enumerate, solve, write_table};
use tracing::info;

/// Trains, queries, and plays against solved fading-piece game tables.
#[derive(Parser)]
#[command(name = "fading_line")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Enumerate, solve, and persist the table for a board configuration.
  Train {
    #[arg(value_enum)]
    board: BoardConfig,
    /// Output table path.
    #[arg(short, long, default_value = "game_tree.data")]
    out: PathBuf,
    /// Stop enumeration after this many canonical nodes (calibration).
    #[arg(long)]
    expected_count: Option<usize>,
  },
  /// Look up a single raw key in a solved table.
  Query {
    #[arg(value_enum)]
    board: BoardConfig,
    table: PathBuf,
    key: u64,
  },
  /// Replay a move sequence through the kernel, then print the oracle's
  /// best reply for the side to move.
  Play {
    #[arg(value_enum)]
    board: BoardConfig,
    table: PathBuf,
    /// Comma-separated cell indices to replay before asking the oracle.
    #[arg(long, value_delimiter = ',')]
    moves: Vec<Cell>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum BoardConfig {
  #[value(name = "3x3m3")]
  Board3x3M3,
  #[value(name = "4x4m3")]
  Board4x4M3,
  #[value(name = "4x4m4")]
  Board4x4M4,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();
  let cli = Cli::parse();

  match cli.command {
    Commands::Train {
      board,
      out,
      expected_count,
    } => train(board, &out, expected_count),
    Commands::Query { board, table, key } => query(board, &table, key),
    Commands::Play {
      board,
      table,
      moves,
    } => play(board, &table, &moves),
  }
}

fn train(board: BoardConfig, out: &Path, expected_count: Option<usize>) -> Result<()> {
  match board {
    BoardConfig::Board3x3M3 => train_sized::<3, 3, 9>(out, expected_count),
    BoardConfig::Board4x4M3 => train_sized::<4, 3, 16>(out, expected_count),
    BoardConfig::Board4x4M4 => train_sized::<4, 4, 16>(out, expected_count),
  }
}

fn train_sized<const N: usize, const M: usize, const N2: usize>(
  out: &Path,
  expected_count: Option<usize>,
) -> Result<()> {
  info!(n = N, m = M, "enumerating canonical states");
  let mut graph = enumerate::<N, M, N2>(expected_count);
  info!(nodes = graph.nodes.len(), "solving game graph");
  solve(&mut graph);
  write_table(&graph, out).with_context(|| format!("writing table to {}", out.display()))?;
  info!(path = %out.display(), "wrote table");
  Ok(())
}

fn query(board: BoardConfig, table: &Path, key: u64) -> Result<()> {
  match board {
    BoardConfig::Board3x3M3 => print_query(Oracle::<3, 3, 9>::open(table)?, key),
    BoardConfig::Board4x4M3 => print_query(Oracle::<4, 3, 16>::open(table)?, key),
    BoardConfig::Board4x4M4 => print_query(Oracle::<4, 4, 16>::open(table)?, key),
  }
  Ok(())
}

fn print_query<const N: usize, const M: usize, const N2: usize>(
  oracle: Oracle<N, M, N2>,
  key: u64,
) {
  match oracle.query(key) {
    Some(record) => println!("{record:?}"),
    None => println!("not found"),
  }
}

fn play(board: BoardConfig, table: &Path, moves: &[Cell]) -> Result<()> {
  match board {
    BoardConfig::Board3x3M3 => play_sized::<3, 3, 9>(table, moves),
    BoardConfig::Board4x4M3 => play_sized::<4, 3, 16>(table, moves),
    BoardConfig::Board4x4M4 => play_sized::<4, 4, 16>(table, moves),
  }
}

fn play_sized<const N: usize, const M: usize, const N2: usize>(
  table: &Path,
  moves: &[Cell],
) -> Result<()> {
  let oracle =
    Oracle::<N, M, N2>::open(table).with_context(|| format!("opening {}", table.display()))?;
  let mut board = Board::<N, M, N2>::new();

  for &cell in moves {
    board
      .play(cell)
      .map_err(|err| anyhow!("replaying move {cell}: {err}"))?;
  }

  if let GameResult::Win(side) = board.finished() {
    println!("{side:?} already won after the given moves");
    return Ok(());
  }

  match oracle.make_move(&mut board) {
    Some(cell) => println!("{cell}"),
    None => println!("no legal moves remain"),
  }
  Ok(())
}
