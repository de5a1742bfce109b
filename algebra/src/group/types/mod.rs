mod dihedral;

pub use dihedral::Dihedral;
