//! Memoized objective wrapper exposing a continuous call contract.

use std::collections::HashMap;

use crate::error::Result;
use crate::value::Value;
use crate::var::Bound;
use crate::vars::Vars;

/// Counters describing the state of an [`Objective`]'s memoization cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheInfo {
    /// Number of calls answered from the cache.
    pub hits: u64,
    /// Number of calls that invoked the user function.
    pub misses: u64,
    /// Number of entries currently cached.
    pub currsize: usize,
}

/// A user objective wrapped for consumption by a continuous optimizer.
///
/// The optimizer supplies a flat float vector within [`bounds`]; the wrapper
/// decodes it through [`Vars`], memoizes on the decoded values (plus any
/// extra arguments), and invokes the user function only on a cache miss.
/// Since many encoded vectors decode to the same values, memoization is what
/// keeps a discretized search from re-evaluating an expensive function on
/// points it has already scored.
///
/// By default a NaN-containing encoded vector short-circuits to a NaN score
/// without decoding. Some optimizers probe NaN vectors, which would
/// otherwise fail the variables' bounds checks; NaN is a sentinel for an
/// unscored point, not an error. Disable with
/// [`nan_passthrough`](Objective::nan_passthrough).
///
/// The cache is unbounded, never evicted, and unsynchronized: [`call`]
/// requires `&mut self`, so sharing across threads needs caller-side
/// locking, and each worker process keeps its own independent cache. To
/// suspend and resume, persist the [`Vars`] (serializable with the `serde`
/// feature) and rewrap the function with [`Objective::new`] — the cache is
/// deliberately not transferable and a restored objective starts empty.
///
/// # Example
///
/// ```
/// use discretize::{Objective, RandintVar, UniformVar, Value, Vars};
///
/// let vars = Vars::new(vec![
///     RandintVar::new(1, 10)?.into(),
///     UniformVar::new(-1.0, 1.0)?.into(),
/// ]);
/// let mut objective = Objective::new(
///     |decoded, _extra| {
///         let n = decoded[0].as_int().unwrap() as f64;
///         let x = decoded[1].as_float().unwrap();
///         n * x * x
///     },
///     vars,
/// );
///
/// // Configure the optimizer with objective.bounds(), then evaluate:
/// let score = objective.call(&[6.8, 0.5], &[])?;
/// assert_eq!(score, 7.0 * 0.25);
/// assert_eq!(objective.cache_info().misses, 1);
/// # Ok::<(), discretize::Error>(())
/// ```
///
/// [`bounds`]: Objective::bounds
/// [`call`]: Objective::call
pub struct Objective<F> {
    func: F,
    vars: Vars,
    cache: HashMap<(Vec<Value>, Vec<Value>), f64>,
    hits: u64,
    misses: u64,
    nan_passthrough: bool,
}

impl<F> core::fmt::Debug for Objective<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Objective")
            .field("vars", &self.vars)
            .field("cache_info", &self.cache_info())
            .field("nan_passthrough", &self.nan_passthrough)
            .finish_non_exhaustive()
    }
}

// Accessors that never invoke the function are unconstrained so they stay
// available (to `Debug` among others) for any `F`.
impl<F> Objective<F> {
    /// Returns the per-slot bounds the optimizer must be configured with.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        self.vars.bounds()
    }

    /// Returns the wrapped variable configuration.
    ///
    /// This is the part of an objective worth persisting or shipping to
    /// worker processes; each worker rewraps it with
    /// [`Objective::new`] and starts with a fresh cache.
    #[must_use]
    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    /// Decodes an encoded vector without evaluating, e.g. to inspect the
    /// optimizer's solution.
    ///
    /// # Errors
    ///
    /// Returns any [`Vars::decode`] error.
    pub fn decode(&self, encoded: &[f64]) -> Result<Vec<Value>> {
        self.vars.decode(encoded)
    }

    /// Encodes decoded values without evaluating, e.g. to seed the
    /// optimizer with a known starting point.
    ///
    /// # Errors
    ///
    /// Returns any [`Vars::encode`] error.
    pub fn encode(&self, decoded: &[Value]) -> Result<Vec<f64>> {
        self.vars.encode(decoded)
    }

    /// Returns the cache's hit/miss/size counters.
    ///
    /// Counters are per-process: workers evaluating in separate processes
    /// each keep independent caches, and totals are not reconciled.
    #[must_use]
    pub fn cache_info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits,
            misses: self.misses,
            currsize: self.cache.len(),
        }
    }
}

impl<F> Objective<F>
where
    F: Fn(&[Value], &[Value]) -> f64,
{
    /// Wraps a user function over the given variables with an empty cache.
    ///
    /// The function receives the decoded values in variable order and the
    /// extra arguments passed to [`call`](Objective::call).
    #[must_use]
    pub fn new(func: F, vars: Vars) -> Self {
        Self {
            func,
            vars,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
            nan_passthrough: true,
        }
    }

    /// Sets whether NaN-containing encoded input short-circuits to NaN.
    ///
    /// Enabled by default. When disabled, a NaN slot fails the variable's
    /// bounds check and [`call`](Objective::call) returns a domain error.
    #[must_use]
    pub fn nan_passthrough(mut self, enabled: bool) -> Self {
        self.nan_passthrough = enabled;
        self
    }

    /// Evaluates the objective on an encoded vector.
    ///
    /// This is the call contract a continuous optimizer expects: a float
    /// vector within [`bounds`](Objective::bounds) in, a scalar score out.
    /// `extra` is forwarded to the user function and participates in the
    /// cache key.
    ///
    /// # Errors
    ///
    /// Returns a shape error for a wrong-length vector and a domain error
    /// for a slot outside bounds, unless the slot is NaN and passthrough is
    /// enabled.
    pub fn call(&mut self, encoded: &[f64], extra: &[Value]) -> Result<f64> {
        if self.nan_passthrough && encoded.iter().any(|slot| slot.is_nan()) {
            trace_debug!("NaN encoded input short-circuited to a NaN score");
            return Ok(f64::NAN);
        }
        let decoded = self.vars.decode(encoded)?;
        let key = (decoded, extra.to_vec());
        if let Some(&score) = self.cache.get(&key) {
            self.hits += 1;
            trace_debug!(hits = self.hits, "objective cache hit");
            return Ok(score);
        }
        let score = (self.func)(&key.0, &key.1);
        self.misses += 1;
        trace_debug!(misses = self.misses, score, "objective cache miss");
        self.cache.insert(key, score);
        Ok(score)
    }
}
