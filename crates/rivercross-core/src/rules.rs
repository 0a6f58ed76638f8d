pub mod invariants;
pub mod safety;
pub mod validation;
