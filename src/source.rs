//! Uniform `[0, 1)` sources that every sampling primitive draws from.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use rand::Rng;
use rand::RngCore;

/// Produces independent uniform floats in the half-open interval `[0, 1)`.
pub trait UniformSource: Send + Sync {
    fn uniform(&self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &S {
    fn uniform(&self) -> f64 {
        (**self).uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Arc<S> {
    fn uniform(&self) -> f64 {
        (**self).uniform()
    }
}

/// The process default, backed by the thread-local generator of `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn uniform(&self) -> f64 {
        rand::rng().random()
    }
}

/// Adapts any `rand` generator. Mostly useful with a seeded `StdRng` in tests.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: Mutex<R>,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + Send> UniformSource for RngSource<R> {
    fn uniform(&self) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rng.random()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)` so a test double can never break the
/// contract callers rely on. An empty list behaves like `[0.0]`.
#[derive(Debug)]
pub struct FixedSource {
    values: Vec<f64>,
    index: AtomicUsize,
}

impl FixedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: AtomicUsize::new(0),
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl UniformSource for FixedSource {
    fn uniform(&self) -> f64 {
        let index = self.index.fetch_add(1, Ordering::SeqCst);
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[index % self.values.len()];
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
