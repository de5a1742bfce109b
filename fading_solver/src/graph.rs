use std::collections::HashMap;

use fading_game::{canonicalize, decode, winner, Side, SymmetryTable};
use tracing::debug;

/// One game-graph node: per-side outcome and resolution depth, defaulting to
/// the draw value `(0, 0)` until the retrograde solve proves otherwise.
/// Index `0` is X, index `1` is O throughout this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
  pub v: [i8; 2],
  pub depth: [u16; 2],
}

impl Node {
  fn draw() -> Self {
    Self {
      v: [0, 0],
      depth: [0, 0],
    }
  }

  fn terminal(winning_side: Side) -> Self {
    match winning_side {
      Side::X => Self {
        v: [1, 1],
        depth: [0, 0],
      },
      Side::O => Self {
        v: [-1, -1],
        depth: [0, 0],
      },
    }
  }
}

pub(crate) fn side_index(side: Side) -> usize {
  match side {
    Side::X => 0,
    Side::O => 1,
  }
}

/// The canonical-node game graph built by enumeration: nodes
/// keyed by canonical key, plus a forward per-player adjacency list
/// (`edges[0]` for X-moves, `edges[1]` for O-moves).
pub struct GameGraph {
  pub nodes: HashMap<u64, Node>,
  pub edges: [HashMap<u64, Vec<u64>>; 2],
}

impl GameGraph {
  fn new() -> Self {
    Self {
      nodes: HashMap::new(),
      edges: [HashMap::new(), HashMap::new()],
    }
  }

  fn add_edge(&mut self, side: Side, from: u64, to: u64) {
    self.edges[side_index(side)]
      .entry(from)
      .or_default()
      .push(to);
  }
}

/// Enumerates the canonical key space for an `N`x`N`, cap-`M` board and
/// builds its game graph. Scans every raw key in `0..base^(2M)`, decoding
/// and discarding invalid or non-canonical ones; `expected_count`, if given,
/// stops the scan once that many canonical nodes exist, as a calibration
/// accelerator for known `(N, M)` node counts. Stopping early can leave
/// edges pointing at keys with no node entry; the solver treats those as
/// simply absent.
pub fn enumerate<const N: usize, const M: usize, const N2: usize>(
  expected_count: Option<usize>,
) -> GameGraph {
  let table = SymmetryTable::<N, N2>::new();
  let base = (N2 + 1) as u64;
  let key_space = base.pow(2 * M as u32);

  let mut graph = GameGraph::new();

  for raw_key in 0..key_space {
    if let Some(expected) = expected_count {
      if graph.nodes.len() >= expected {
        break;
      }
    }

    let Ok(pos) = decode::<N2, M>(raw_key) else {
      continue;
    };
    let (canon_pos, _, canon_key) = canonicalize(&table, &pos);
    if canon_key != raw_key || graph.nodes.contains_key(&canon_key) {
      continue;
    }

    if let Some(winning_side) = winner::<N, M, N2>(&canon_pos) {
      graph.nodes.insert(canon_key, Node::terminal(winning_side));
      continue;
    }

    graph.nodes.insert(canon_key, Node::draw());

    for side in [Side::X, Side::O] {
      for cell in 0..N2 as u8 {
        if canon_pos.x.contains(cell) || canon_pos.o.contains(cell) {
          continue;
        }
        let mut successor = canon_pos;
        successor.queue_mut(side).push(cell);
        let (_, _, succ_key) = canonicalize(&table, &successor);
        graph.add_edge(side, canon_key, succ_key);
      }
    }
  }

  debug!(nodes = graph.nodes.len(), "enumeration complete");
  graph
}
