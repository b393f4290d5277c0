use std::time::Duration;

use tracing::debug;
use tracing::instrument;

use crate::Error;
use crate::Result;
use crate::Sampler;
use crate::UniformSource;

#[async_trait::async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioTimer;

#[async_trait::async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

impl<S: UniformSource> Sampler<S> {
    /// Fails with [`Error::InjectedFailure`] with the given probability.
    ///
    /// Handy for exercising retry paths in tests. An invalid probability is
    /// reported as [`Error::InvalidProbability`] rather than ignored.
    pub fn maybe_fail(&self, probability: f64) -> Result<()> {
        if self.chance(probability)? {
            return Err(Error::InjectedFailure { probability });
        }
        Ok(())
    }

    /// Sleeps a whole number of milliseconds between `min` and `max`
    /// (inclusive, either order) and returns how long it slept.
    #[instrument(skip(self, timer))]
    pub async fn delay<T: Timer + ?Sized>(&self, timer: &T, min: Duration, max: Duration) -> Duration {
        let millis = |d: Duration| i64::try_from(d.as_millis()).unwrap_or(i64::MAX);
        let chosen = self.int_between(millis(min), millis(max));
        let duration = Duration::from_millis(u64::try_from(chosen).unwrap_or(0));
        debug!(?duration, "sleeping");
        timer.sleep(duration).await;
        duration
    }
}
