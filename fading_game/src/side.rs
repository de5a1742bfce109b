/// Which player's turn it is. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
  X,
  O,
}

impl Side {
  pub const fn opposite(&self) -> Self {
    match self {
      Self::X => Self::O,
      Self::O => Self::X,
    }
  }

  pub const fn is_x(&self) -> bool {
    matches!(self, Self::X)
  }
}

/// The contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
  Empty,
  X,
  O,
}

impl From<Side> for TileState {
  fn from(side: Side) -> Self {
    match side {
      Side::X => TileState::X,
      Side::O => TileState::O,
    }
  }
}
