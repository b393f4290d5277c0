//! Higher-level generators composed from the sampling primitives.
//!
//! Nothing here draws randomness directly; every generator goes through
//! [`Sampler::int_between`](crate::Sampler::int_between),
//! [`Sampler::from_slice`](crate::Sampler::from_slice),
//! [`Sampler::chance`](crate::Sampler::chance) or
//! [`Sampler::letter`](crate::Sampler::letter).

pub mod calendar;
pub mod color;
pub mod delay;
pub mod person;
pub mod text;
pub mod web;

pub use color::Color;
pub use color::ColorFormat;
pub use delay::Timer;
pub use delay::TokioTimer;
pub use text::capitalize_word;
