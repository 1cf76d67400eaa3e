//! Random source adapters.
//!
//! Provides [`RngRandomSource`], a [`RandomSource`](quiz_domain::RandomSource)
//! backed by the `rand` crate. Seeded instances replay the same session.

mod rng_source;

pub use rng_source::RngRandomSource;
