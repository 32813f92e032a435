//! # AlphaLab Strategy Library
//!
//! This crate defines what an alpha is: a name, a signal function supplied by
//! the caller and an optional default universe.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of backtesting
//!   engines or diagnostics. It depends only on `core-types` and `configuration`.
//! - **Injected Signal Logic:** No signal-generation logic lives here. Callers supply it
//!   through the `SignalGenerator` trait, which every matching closure already implements.
//! - **Stable Output Shape:** `Alpha::run` always yields a `SignalTable` with an `asset`
//!   index and a single `signal` column, whatever generator produced it.
//!
//! ## Public API
//!
//! - `Alpha` / `AlphaBuilder`: the strategy holder and its constructor.
//! - `SignalGenerator`: the extension point for signal logic.
//! - `SignalTable`, `AlphaMetadata`: the results of `run` and `metadata`.
//! - `create_alpha`: the factory that applies configured defaults.

// Declare all the modules that constitute this crate.
pub mod alpha;
pub mod error;
pub mod factory;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use alpha::{Alpha, AlphaBuilder, AlphaMetadata};
pub use error::StrategyError;
pub use factory::create_alpha;
pub use table::{ASSET_COLUMN, SIGNAL_COLUMN, SignalTable};

// Re-export the shared shapes so callers need only this crate to define an alpha.
pub use core_types::{CoveragePolicy, SignalMap, Universe};

/// The capability every signal source provides.
///
/// Given the universe being scored, a generator returns one signal per asset.
/// It is called synchronously, once per `Alpha::run`. The `Send + Sync` bounds
/// let one generator be shared by several alphas.
pub trait SignalGenerator: Send + Sync {
    fn generate(&self, universe: &[String]) -> SignalMap;
}

impl<F> SignalGenerator for F
where
    F: Fn(&[String]) -> SignalMap + Send + Sync,
{
    fn generate(&self, universe: &[String]) -> SignalMap {
        self(universe)
    }
}
