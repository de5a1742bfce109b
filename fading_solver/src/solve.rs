use std::collections::{HashMap, VecDeque};

use fading_game::Side;
use tracing::debug;

use crate::graph::{side_index, GameGraph};

/// Retrograde backward induction over `graph`'s reverse edges. Two
/// independent passes: X-win propagation first, then O-win
/// propagation. Each pass seeds a queue with that side's terminals and
/// pushes the label backward one ply at a time, using a per-node
/// unsolved-successor counter to detect "every move from here is forced"
/// without ever revisiting a node twice for the same side.
pub fn solve(graph: &mut GameGraph) {
  let mut reverse: [HashMap<u64, Vec<u64>>; 2] = [HashMap::new(), HashMap::new()];
  for (side, edges) in graph.edges.iter().enumerate() {
    for (&from, tos) in edges {
      for &to in tos {
        reverse[side].entry(to).or_default().push(from);
      }
    }
  }

  let mut remaining: HashMap<u64, [usize; 2]> = graph
    .nodes
    .keys()
    .map(|&key| {
      let out = [
        graph.edges[0].get(&key).map_or(0, Vec::len),
        graph.edges[1].get(&key).map_or(0, Vec::len),
      ];
      (key, out)
    })
    .collect();

  propagate(graph, &reverse, &mut remaining, Side::X);
  propagate(graph, &reverse, &mut remaining, Side::O);

  debug!(
    resolved = graph.nodes.values().filter(|n| n.v[0] != 0).count(),
    total = graph.nodes.len(),
    "retrograde solve complete"
  );
}

fn propagate(
  graph: &mut GameGraph,
  reverse: &[HashMap<u64, Vec<u64>>; 2],
  remaining: &mut HashMap<u64, [usize; 2]>,
  side: Side,
) {
  let immediate = side_index(side);
  let forced = 1 - immediate;
  let value: i8 = if side == Side::X { 1 } else { -1 };

  let mut queue: VecDeque<u64> = graph
    .nodes
    .iter()
    .filter(|(_, n)| n.v[immediate] == value && n.v[forced] == value)
    .map(|(&key, _)| key)
    .collect();

  while let Some(t) = queue.pop_front() {
    let depth_t_forced = graph.nodes[&t].depth[forced];

    let Some(preds) = reverse[immediate].get(&t) else {
      continue;
    };
    // Cloning avoids holding a borrow of `reverse` across the mutable
    // borrows of `graph.nodes` below.
    for p in preds.clone() {
      let Some(node_p) = graph.nodes.get_mut(&p) else {
        continue;
      };
      if node_p.v[immediate] == value {
        continue;
      }
      debug_assert!(
        node_p.v[immediate] == 0,
        "node {p} relabeled v[{immediate}] from {} to {value}",
        node_p.v[immediate]
      );
      node_p.v[immediate] = value;
      node_p.depth[immediate] = depth_t_forced + 1;
      let depth_p_immediate = node_p.depth[immediate];
      queue.push_back(p);

      let Some(preds2) = reverse[forced].get(&p) else {
        continue;
      };
      for &q in preds2 {
        let Some(counter) = remaining.get_mut(&q) else {
          continue;
        };
        debug_assert!(
          counter[forced] > 0,
          "remaining[{q}][{forced}] underflowed: more forced successors consumed than exist"
        );
        counter[forced] -= 1;
        if counter[forced] == 0 {
          if let Some(node_q) = graph.nodes.get_mut(&q) {
            debug_assert!(
              node_q.v[forced] == 0,
              "node {q} relabeled v[{forced}] from {} to {value}",
              node_q.v[forced]
            );
            node_q.v[forced] = value;
            node_q.depth[forced] = depth_p_immediate + 1;
            queue.push_back(q);
          }
        }
      }
    }
  }
}
