//! Drawing elements out of caller-owned pools.

use tracing::debug;

use crate::Error;
use crate::Result;
use crate::Sampler;
use crate::UniformSource;

impl<S: UniformSource> Sampler<S> {
    /// Picks one element, each with probability `1 / pool.len()`.
    pub fn from_slice<'a, T>(&self, pool: &'a [T]) -> Result<&'a T> {
        if pool.is_empty() {
            debug!("from_slice on empty pool");
            return Err(Error::EmptyPool);
        }
        Ok(&pool[self.index(pool.len())])
    }

    /// Draws `n` distinct elements without replacement, in draw order.
    ///
    /// When `n` is omitted it is itself drawn from `0..=len - 1`. At most
    /// `len - 1` elements can ever be requested: asking for the whole pool
    /// fails with [`Error::InvalidSampleSize`], and so does any request on an
    /// empty pool. The caller's pool is cloned, never touched.
    ///
    /// ```
    /// let sampler = randkit::Sampler::thread_rng();
    /// let pool = ["a", "b", "c"];
    /// let picked = sampler.sample(&pool, Some(2)).unwrap();
    /// assert_eq!(picked.len(), 2);
    /// assert_ne!(picked[0], picked[1]);
    /// assert!(sampler.sample(&pool, Some(3)).is_err());
    /// ```
    pub fn sample<T: Clone>(&self, pool: &[T], n: Option<usize>) -> Result<Vec<T>> {
        let Some(ceiling) = pool.len().checked_sub(1) else {
            debug!("sample on empty pool");
            return Err(Error::InvalidSampleSize {
                requested: n.unwrap_or(0),
                len: 0,
            });
        };
        let n = match n {
            Some(n) if n > ceiling => {
                debug!(n, len = pool.len(), "sample size above ceiling");
                return Err(Error::InvalidSampleSize {
                    requested: n,
                    len: pool.len(),
                });
            }
            Some(n) => n,
            None => self.index(pool.len()),
        };

        let mut remaining = pool.to_vec();
        let mut picked = Vec::with_capacity(n);
        while picked.len() < n {
            let index = self.index(remaining.len());
            picked.push(remaining.remove(index));
        }
        Ok(picked)
    }

    /// Picks one value out of any iterable, in iteration order.
    ///
    /// This is the shape to use for maps: pass `map.values()` or
    /// `map.into_values()`.
    pub fn from_values<T>(&self, values: impl IntoIterator<Item = T>) -> Result<T> {
        let mut values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            debug!("from_values on empty input");
            return Err(Error::EmptyPool);
        }
        let index = self.index(values.len());
        Ok(values.swap_remove(index))
    }

    /// Uniform index into a non-empty collection of `len` elements.
    pub(crate) fn index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
        usize::try_from(self.int_between(0, max)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    use super::*;
    use crate::testing::seeded;
    use crate::testing::DRAWS;
    use crate::FixedSource;

    #[test]
    fn singleton_pool_always_returns_its_element() {
        let sampler = seeded(10);
        for _ in 0..50 {
            assert_eq!(sampler.from_slice(&["only"]), Ok(&"only"));
        }
    }

    #[test]
    fn empty_pool_is_rejected_without_drawing() {
        let source = FixedSource::new([0.4]);
        let sampler = Sampler::new(&source);
        let empty: [u8; 0] = [];
        assert_eq!(sampler.from_slice(&empty), Err(Error::EmptyPool));
        assert_eq!(sampler.from_values(Vec::<u8>::new()), Err(Error::EmptyPool));
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn from_slice_reaches_every_element() {
        let sampler = seeded(11);
        let pool = [1, 2, 3, 4];
        let seen: BTreeSet<i32> = (0..DRAWS)
            .map(|_| *sampler.from_slice(&pool).unwrap())
            .collect();
        assert_eq!(seen, BTreeSet::from(pool));
    }

    #[test]
    fn sample_returns_distinct_elements_and_leaves_pool_alone() {
        let sampler = seeded(12);
        let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        for _ in 0..200 {
            let picked = sampler.sample(&pool, Some(2)).unwrap();
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|item| pool.contains(item)));
        }
        assert_eq!(pool, ["a", "b", "c"]);
    }

    #[test]
    fn sample_removes_in_draw_order() {
        // 0.0 takes the head each time, 0.99 takes the tail.
        let sampler = Sampler::new(FixedSource::new([0.0, 0.0, 0.99]));
        assert_eq!(sampler.sample(&[10, 20, 30, 40], Some(3)), Ok(vec![10, 20, 40]));
    }

    #[test]
    fn sample_rejects_whole_pool() {
        let sampler = seeded(13);
        let pool = [1, 2, 3];
        assert_eq!(
            sampler.sample(&pool, Some(3)),
            Err(Error::InvalidSampleSize {
                requested: 3,
                len: 3
            })
        );
        assert!(sampler.sample(&[0u8; 0], Some(0)).is_err());
        assert!(sampler.sample(&[0u8; 0], None).is_err());
        assert_eq!(sampler.sample(&[42], None), Ok(vec![]));
        assert_eq!(sampler.sample(&pool, Some(0)), Ok(vec![]));
    }

    #[test]
    fn default_sample_size_never_covers_the_pool() {
        let sampler = seeded(14);
        let pool: Vec<u32> = (0..5).collect();
        let sizes: BTreeSet<usize> = (0..DRAWS)
            .map(|_| sampler.sample(&pool, None).unwrap().len())
            .collect();
        assert_eq!(sizes, BTreeSet::from([0, 1, 2, 3, 4]));
    }

    #[test]
    fn from_values_follows_iteration_order() {
        let sampler = Sampler::new(FixedSource::new([0.0, 0.99]));
        let map = BTreeMap::from([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(sampler.from_values(map.values().copied()), Ok(1));
        assert_eq!(sampler.from_values(map.into_values()), Ok(3));
    }
}
