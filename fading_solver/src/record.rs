/// One on-disk row: a canonical key plus its solved outcome and depth for
/// both sides-to-move. The byte layout is a fixed compatibility contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
  pub key: u64,
  pub v_x: i8,
  pub v_o: i8,
  pub depth_x: u16,
  pub depth_o: u16,
}

pub const RECORD_SIZE: usize = 14;

impl Record {
  pub fn to_bytes(self) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[0..8].copy_from_slice(&self.key.to_le_bytes());
    buf[8] = self.v_x as u8;
    buf[9] = self.v_o as u8;
    buf[10..12].copy_from_slice(&self.depth_x.to_le_bytes());
    buf[12..14].copy_from_slice(&self.depth_o.to_le_bytes());
    buf
  }

  pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
    Self {
      key: u64::from_le_bytes(buf[0..8].try_into().unwrap()),
      v_x: buf[8] as i8,
      v_o: buf[9] as i8,
      depth_x: u16::from_le_bytes(buf[10..12].try_into().unwrap()),
      depth_o: u16::from_le_bytes(buf[12..14].try_into().unwrap()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_record_roundtrip() {
    let record = Record {
      key: 0x0102_0304_0506_0708,
      v_x: -1,
      v_o: 1,
      depth_x: 12,
      depth_o: 65000,
    };
    assert_eq!(Record::from_bytes(&record.to_bytes()), record);
  }

  #[test]
  fn test_byte_layout_is_little_endian() {
    let record = Record {
      key: 1,
      v_x: 1,
      v_o: -1,
      depth_x: 0,
      depth_o: 1,
    };
    let bytes = record.to_bytes();
    assert_eq!(&bytes[0..8], &[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(bytes[8], 1);
    assert_eq!(bytes[9], 0xff); // -1 as i8 reinterpreted as u8
    assert_eq!(&bytes[10..12], &[0, 0]);
    assert_eq!(&bytes[12..14], &[1, 0]);
  }
}
