//! Adapters for external dependencies.

pub mod animals_sea;
