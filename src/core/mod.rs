//! Core engine primitives shared across components.
//!
//! Currently this is the deterministic RNG. Every computation that needs
//! randomness takes one explicitly; nothing in the engine reads an ambient
//! clock or entropy source.

pub mod rng;

pub use rng::GameRng;
