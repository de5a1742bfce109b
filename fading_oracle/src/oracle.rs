use std::{cmp::Ordering, fs::File, path::Path};

use fading_game::{canonicalize, Board, Cell, Game, Side, SymmetryTable};
use fading_solver::{Record, RECORD_SIZE};
use memmap2::Mmap;

use crate::error::OracleError;

/// A read-only, memory-mapped lookup table over a solved board's canonical
/// key space. Opened once and queried from many
/// threads; the mapping is never mutated.
pub struct Oracle<const N: usize, const M: usize, const N2: usize> {
  mmap: Mmap,
  num_records: usize,
  table: SymmetryTable<N, N2>,
}

impl<const N: usize, const M: usize, const N2: usize> Oracle<N, M, N2> {
  pub fn open(path: impl AsRef<Path>) -> Result<Self, OracleError> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    if mmap.len() < 8 {
      return Err(OracleError::FileFormat {
        expected_len: 8,
        actual_len: mmap.len() as u64,
      });
    }
    let num_records = u64::from_le_bytes(mmap[0..8].try_into().unwrap()) as usize;
    let expected_len = 8 + RECORD_SIZE * num_records;
    if mmap.len() != expected_len {
      return Err(OracleError::FileFormat {
        expected_len: expected_len as u64,
        actual_len: mmap.len() as u64,
      });
    }

    Ok(Self {
      mmap,
      num_records,
      table: SymmetryTable::new(),
    })
  }

  fn record_at(&self, index: usize) -> Record {
    let offset = 8 + RECORD_SIZE * index;
    Record::from_bytes(self.mmap[offset..offset + RECORD_SIZE].try_into().unwrap())
  }

  /// Binary search over the mapped record array.
  pub fn query(&self, key: u64) -> Option<Record> {
    let (mut lo, mut hi) = (0usize, self.num_records);
    while lo < hi {
      let mid = lo + (hi - lo) / 2;
      let record = self.record_at(mid);
      match record.key.cmp(&key) {
        Ordering::Equal => return Some(record),
        Ordering::Less => lo = mid + 1,
        Ordering::Greater => hi = mid,
      }
    }
    None
  }

  /// Plays the best legal move for the side to move and returns the cell
  /// played (`None` if no empty cell remains): for each candidate,
  /// canonicalize the resulting successor, look up its outcome from the
  /// mover's point of view, and apply the tie-break policy (prefer winning
  /// over drawing over losing; among wins prefer the shallowest, among
  /// losses prefer the deepest).
  pub fn make_move(&self, board: &mut Board<N, M, N2>) -> Option<Cell> {
    let side = board.current_player();
    let pos = *board.position();
    let (canon_pos, sigma, _) = canonicalize(&self.table, &pos);

    let mut best: Option<(Cell, i8, u16)> = None;
    for cell in board.each_move() {
      let canon_cell = self.table.apply_cell(sigma, cell);
      let mut successor = canon_pos;
      successor.queue_mut(side).push(canon_cell);
      let (_, _, succ_key) = canonicalize(&self.table, &successor);

      let (outcome, depth) = match self.query(succ_key) {
        Some(record) => match side {
          Side::X => (record.v_o, record.depth_o),
          Side::O => (-record.v_x, record.depth_x),
        },
        None => (0, 0),
      };

      best = Some(match best {
        Some((best_cell, best_outcome, best_depth))
          if !is_better(outcome, depth, best_outcome, best_depth) =>
        {
          (best_cell, best_outcome, best_depth)
        }
        _ => (cell, outcome, depth),
      });
    }

    let chosen = best.map(|(cell, _, _)| cell);
    if let Some(cell) = chosen {
      board.make_move(cell);
    }
    chosen
  }
}

fn is_better(outcome: i8, depth: u16, best_outcome: i8, best_depth: u16) -> bool {
  if outcome != best_outcome {
    return outcome > best_outcome;
  }
  match outcome {
    1 => depth < best_depth,
    -1 => depth > best_depth,
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use fading_solver::{enumerate, solve, write_table};
  use rstest::rstest;

  use super::*;

  fn write_3x3_m3_table() -> std::path::PathBuf {
    let mut graph = enumerate::<3, 3, 9>(None);
    solve(&mut graph);
    let dir = std::env::temp_dir().join(format!("fading_oracle_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("3x3m3.data");
    write_table(&graph, &path).unwrap();
    path
  }

  #[test]
  fn test_open_rejects_truncated_file() {
    let path = write_3x3_m3_table();
    let bytes = std::fs::read(&path).unwrap();
    let bad_path = path.with_file_name("truncated.data");
    std::fs::write(&bad_path, &bytes[..bytes.len() - 1]).unwrap();

    let result = Oracle::<3, 3, 9>::open(&bad_path);
    assert!(matches!(result, Err(OracleError::FileFormat { .. })));
  }

  #[test]
  fn test_query_returns_none_for_unknown_key() {
    let path = write_3x3_m3_table();
    let oracle = Oracle::<3, 3, 9>::open(&path).unwrap();
    assert_eq!(oracle.query(u64::MAX), None);
  }

  #[rstest]
  #[case(1)]
  #[case(2)]
  #[case(4)]
  fn test_make_move_plays_legal_moves_for_n_plies(#[case] plies: usize) {
    // (3, 3) is a draw from the empty position: the oracle's own moves must
    // never run into an illegal-move panic across several plies of self-play.
    let path = write_3x3_m3_table();
    let oracle = Oracle::<3, 3, 9>::open(&path).unwrap();

    let mut board = Board::<3, 3, 9>::new();
    for _ in 0..plies {
      oracle.make_move(&mut board);
    }
    assert_eq!(board.history_len(), plies);
  }
}
