use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

use crate::{graph::GameGraph, record::Record};

/// Serializes a solved graph to the bit-exact on-disk format: an 8-byte
/// little-endian record count, then 14-byte records sorted ascending by
/// key. Written to a sibling `.tmp` file and atomically renamed into
/// place, so a new table supersedes the old one atomically and a
/// concurrent reader never observes a partial write.
pub fn write_table(graph: &GameGraph, path: impl AsRef<Path>) -> io::Result<()> {
  let path = path.as_ref();
  let mut keys: Vec<u64> = graph.nodes.keys().copied().collect();
  keys.sort_unstable();

  let tmp_path = path.with_extension("tmp");
  {
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&(keys.len() as u64).to_le_bytes())?;
    for key in &keys {
      let node = &graph.nodes[key];
      let record = Record {
        key: *key,
        v_x: node.v[0],
        v_o: node.v[1],
        depth_x: node.depth[0],
        depth_o: node.depth[1],
      };
      writer.write_all(&record.to_bytes())?;
    }
    writer.flush()?;
  }
  std::fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{enumerate, solve};

  #[test]
  fn test_write_table_produces_sorted_bit_exact_file() {
    let mut graph = enumerate::<3, 3, 9>(None);
    solve(&mut graph);

    let dir = std::env::temp_dir().join(format!("fading_solver_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("3x3m3.data");
    write_table(&graph, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let num_records = u64::from_le_bytes(bytes[0..8].try_into().unwrap()) as usize;
    assert_eq!(bytes.len(), 8 + 14 * num_records);
    assert_eq!(num_records, graph.nodes.len());

    let mut prev_key = None;
    for i in 0..num_records {
      let offset = 8 + 14 * i;
      let record = Record::from_bytes(bytes[offset..offset + 14].try_into().unwrap());
      if let Some(prev) = prev_key {
        assert!(prev < record.key);
      }
      prev_key = Some(record.key);
    }

    std::fs::remove_dir_all(&dir).ok();
  }
}
