mod finite;
mod monoid;
mod ordinal;
mod semigroup;

pub mod group;

pub use finite::Finite;
pub use monoid::Monoid;
pub use ordinal::Ordinal;
pub use semigroup::Semigroup;
