/// Evaluation domain layer - pure openness rules
///
/// Nothing in this module performs I/O. Catalogs are built from already
/// deserialized definitions and every evaluation is a function of
/// (model, component catalog, license catalog).
pub mod catalog;
pub mod domain;
pub mod policies;
pub mod services;

#[cfg(test)]
pub(crate) mod test_fixtures;
