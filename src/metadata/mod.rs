//! # Descriptive Metadata
//!
//! Molecules, literature sources and isotopologues are addressed by natural-key
//! names and carry any number of typed [`Alias`]es. An [`AliasRegistry`] maps
//! every such name to one canonical shared instance, so looking up "CH3Cl" and
//! "Methyl chloride" yields the same `Arc` once both are registered.
//!
//! Cross-section records only reference these entities; they resolve them
//! through the [`AliasResolver`] trait.

mod alias;
mod isotopologue;
mod molecule;
mod registry;
mod source;

#[cfg(test)]
mod tests;

pub use alias::{Alias, AliasKind};
pub use isotopologue::Isotopologue;
pub use molecule::Molecule;
pub use registry::{AliasRegistry, AliasResolver, Aliased};
pub use source::Source;
