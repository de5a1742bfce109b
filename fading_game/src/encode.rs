use std::{error::Error, fmt::Display};

use algebra::Ordinal;

use crate::{
  board::{Cell, Position, Queue},
  symmetry::{SymmetryTable, D4},
};

/// Why a `u64` key did not decode back into a valid `Position`. Grounded in
/// `examples/original_source/strategies/perfect3x3/perfect_strategy.py`'s
/// `add_edge`, which silently drops positions failing these same checks;
/// here they are surfaced instead of swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
  /// A zero digit was followed by a nonzero digit: the queue had a gap.
  GapInQueue,
  /// A digit decoded to a cell index `>= N*N`.
  CellOutOfRange,
  /// The same cell appears twice in one queue.
  DuplicateCell,
  /// X and O queues share a cell.
  OverlappingCells,
  /// `|X|` and `|O|` cannot coexist under the fading rule.
  InvalidLengths,
}

impl Display for DecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let msg = match self {
      Self::GapInQueue => "queue digit sequence has a gap",
      Self::CellOutOfRange => "decoded cell index out of range",
      Self::DuplicateCell => "duplicate cell within one queue",
      Self::OverlappingCells => "X and O queues share a cell",
      Self::InvalidLengths => "queue lengths are not reachable under the fading rule",
    };
    f.write_str(msg)
  }
}

impl Error for DecodeError {}

const fn base_of(n2: usize) -> u64 {
  (n2 + 1) as u64
}

fn encode_queue<const M: usize>(queue: &Queue<M>, base: u64) -> u64 {
  queue
    .as_slice()
    .iter()
    .enumerate()
    .fold(0u64, |acc, (i, &cell)| {
      acc + (cell as u64 + 1) * base.pow(i as u32)
    })
}

/// Packs `pos` into a single key: `k_x * base^M + k_o`, where each `k_*` is a
/// base-`(N*N+1)` encoding of that player's queue, oldest stone first.
/// Fits in `u64` for the board sizes this crate targets
/// (`N <= 4`, `M <= 4`); not guaranteed beyond that.
pub fn encode<const N2: usize, const M: usize>(pos: &Position<M>) -> u64 {
  let base = base_of(N2);
  let s = base.pow(M as u32);
  encode_queue(&pos.x, base) * s + encode_queue(&pos.o, base)
}

fn decode_queue<const N2: usize, const M: usize>(
  mut code: u64,
  base: u64,
) -> Result<Queue<M>, DecodeError> {
  let mut digits = [0u64; M];
  for digit in digits.iter_mut() {
    *digit = code % base;
    code /= base;
  }

  let mut len = 0;
  while len < M && digits[len] != 0 {
    len += 1;
  }
  if digits[len..].iter().any(|&d| d != 0) {
    return Err(DecodeError::GapInQueue);
  }

  let mut queue = Queue::empty();
  for &digit in &digits[..len] {
    let cell = (digit - 1) as usize;
    if cell >= N2 {
      return Err(DecodeError::CellOutOfRange);
    }
    queue.push(cell as Cell);
  }
  Ok(queue)
}

fn has_duplicates(cells: &[Cell]) -> bool {
  cells
    .iter()
    .enumerate()
    .any(|(i, c)| cells[..i].contains(c))
}

/// Inverse of [`encode`]. Rejects any key that does not correspond to a
/// position reachable under the fading rule.
pub fn decode<const N2: usize, const M: usize>(key: u64) -> Result<Position<M>, DecodeError> {
  let base = base_of(N2);
  let s = base.pow(M as u32);
  let (kx, ko) = (key / s, key % s);

  let x = decode_queue::<N2, M>(kx, base)?;
  let o = decode_queue::<N2, M>(ko, base)?;

  if has_duplicates(x.as_slice()) || has_duplicates(o.as_slice()) {
    return Err(DecodeError::DuplicateCell);
  }
  if x.as_slice().iter().any(|c| o.contains(*c)) {
    return Err(DecodeError::OverlappingCells);
  }

  let pos = Position { x, o };
  if !pos.lengths_valid() {
    return Err(DecodeError::InvalidLengths);
  }
  Ok(pos)
}

/// `pos` transformed under every board symmetry, with the smallest resulting
/// key kept as canonical. Ties (two symmetries yielding the same key) break
/// toward the lowest symmetry ordinal.
pub fn canonicalize<const N: usize, const N2: usize, const M: usize>(
  table: &SymmetryTable<N, N2>,
  pos: &Position<M>,
) -> (Position<M>, D4, u64) {
  SymmetryTable::<N, N2>::all_ops()
    .into_iter()
    .map(|op| {
      let transformed = table.apply_position(op, pos);
      let key = encode::<N2, M>(&transformed);
      (transformed, op, key)
    })
    .min_by_key(|(_, op, key)| (*key, op.ord()))
    .expect("all_ops is non-empty")
}
