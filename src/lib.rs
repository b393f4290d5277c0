//! Random primitives for test data, fixture seeding and demos.
//!
//! Everything hangs off [`Sampler`], a stateless value that owns one
//! [`UniformSource`]. The core primitives ([`Sampler::int_between`],
//! [`Sampler::from_slice`], [`Sampler::sample`], [`Sampler::letter`] and
//! [`Sampler::arbitrary_string`]) turn uniform `[0, 1)` draws into bounded,
//! order-independent values. The [`compose`] and [`fixtures`] modules build
//! words, names, dates, colors and whole records on top of them.
//!
//! ```
//! use randkit::Sampler;
//!
//! let sampler = Sampler::thread_rng();
//! let n = sampler.int_between(3, 1);
//! assert!((1..=3).contains(&n));
//! let code = sampler.arbitrary_string("a2", "b1").unwrap();
//! assert!(["a1", "a2", "b1", "b2"].contains(&code.as_str()));
//! ```

pub mod collection;
pub mod compose;
pub mod error;
pub mod fixtures;
pub mod letter;
pub mod pattern;
pub mod range;
pub mod source;

pub use error::Error;
pub use error::Result;
pub use letter::Casing;
pub use range::normalize_min_max;
pub use source::FixedSource;
pub use source::RngSource;
pub use source::ThreadRngSource;
pub use source::UniformSource;

/// Groups the sampling primitives around one uniform source.
///
/// The sampler holds no state of its own, so a shared reference can be used
/// from many threads as long as the source allows it (every
/// [`UniformSource`] is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct Sampler<S = ThreadRngSource> {
    source: S,
}

impl Sampler {
    /// A sampler over the thread-local `rand` generator.
    pub fn thread_rng() -> Self {
        Self {
            source: ThreadRngSource,
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::thread_rng()
    }
}

impl<S: UniformSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn uniform(&self) -> f64 {
        self.source.uniform()
    }
}
