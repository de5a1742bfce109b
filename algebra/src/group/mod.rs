mod group_impl;
mod types;

pub use group_impl::Group;
pub use types::Dihedral;
