/// Expands to the concrete `Board<N, M, N*N>` type. Stable Rust cannot derive
/// one const generic from an arithmetic expression of another when it's used
/// as an array length, so callers name `N2` explicitly.
#[macro_export]
macro_rules! board_type {
  ($n:literal, $m:literal) => {
    $crate::Board<$n, $m, { $n * $n }>
  };
}

/// Expands to the concrete `SymmetryTable<N, N*N>` type for the same `N`.
#[macro_export]
macro_rules! symmetry_table_type {
  ($n:literal) => {
    $crate::SymmetryTable<$n, { $n * $n }>
  };
}

pub type Board3x3M3 = board_type!(3, 3);
pub type Board4x4M3 = board_type!(4, 3);
pub type Board4x4M4 = board_type!(4, 4);

pub type Symmetry3x3 = symmetry_table_type!(3);
pub type Symmetry4x4 = symmetry_table_type!(4);
