#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Mixed discrete/continuous search spaces for continuous-only optimizers.
//!
//! Many good optimizers only accept a flat vector of floats with fixed
//! per-dimension bounds. This crate makes such an optimizer usable on
//! objective functions whose true domain mixes categoricals, ordered grids,
//! integers, quantized integers, quantized floats, and plain floats: each
//! variable defines an exactly round-trippable encoding into one or more
//! bounded float slots, and a memoizing [`Objective`] wrapper keeps the
//! optimizer's repeated evaluations of identical decoded points from
//! re-invoking an expensive user function.
//!
//! # Getting Started
//!
//! ```
//! use discretize::prelude::*;
//!
//! let vars = Vars::new(vec![
//!     ChoiceVar::new(["relu", "sigmoid", "tanh"])?.into(),
//!     RandintVar::new(1, 10)?.into(),
//!     QuniformVar::new(0.0, 0.9, 0.1)?.into(),
//! ]);
//!
//! let mut objective = Objective::new(
//!     |decoded, _extra| {
//!         let activation = decoded[0].as_str().unwrap();
//!         let layers = decoded[1].as_int().unwrap();
//!         let dropout = decoded[2].as_float().unwrap();
//!         // ... train a model, return its validation loss ...
//!         # let _ = (activation, layers, dropout);
//!         0.0
//!     },
//!     vars,
//! );
//!
//! // Configure the continuous optimizer with these per-slot bounds, then
//! // let it call `objective.call(&vector, &[])` repeatedly.
//! assert_eq!(objective.bounds().len(), 3 + 1 + 1);
//!
//! // Translate solutions outside a live optimization:
//! let encoded = objective.encode(&["tanh".into(), Value::Int(3), Value::Float(0.5)])?;
//! assert_eq!(
//!     objective.decode(&encoded)?,
//!     vec!["tanh".into(), Value::Int(3), Value::Float(0.5)],
//! );
//! # Ok::<(), discretize::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Variable`] | Per-variable contract: `bounds`, `decode`, `encode`. |
//! | [`ChoiceVar`], [`GridVar`], [`RandintVar`], [`QrandintVar`], [`UniformVar`], [`QuniformVar`] | The built-in variable types. |
//! | [`Var`] | Any built-in variable, for heterogeneous sequences. |
//! | [`Vars`] | An ordered variable sequence sharing one flat encoded vector. |
//! | [`Value`] | A decoded value: bool, int, float, or string. |
//! | [`Objective`] | The wrapped user function a continuous optimizer calls. |
//!
//! # Variable Guide
//!
//! | Variable | Decodes to | Encoded slots |
//! |----------|-----------|---------------|
//! | [`ChoiceVar`] | one of its categories | one per category (`0` if there is only one) |
//! | [`GridVar`] | one of its ordered values | 1 |
//! | [`RandintVar`] | integer in `[lower, upper]` | 1 |
//! | [`QrandintVar`] | integer multiple of a quantum | 1 |
//! | [`UniformVar`] | float in `[lower, upper]` | 1 |
//! | [`QuniformVar`] | float multiple of a quantum | 1 |
//!
//! Quantized and integer variables compute their bounds with exact decimal
//! arithmetic and adjacent-float stepping (see [`exact`]) so that every
//! encoded value inside the bounds decodes into the variable's domain, and
//! every decoded value survives `decode(encode(v)) == v` exactly.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Value`], the variable types, and [`Vars`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on cache activity | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod exact;
mod objective;
mod value;
mod var;
mod vars;

pub use error::{Error, Result};
pub use objective::{CacheInfo, Objective};
pub use value::Value;
pub use var::{
    Bound, ChoiceVar, GridVar, QrandintVar, QuniformVar, RandintVar, UniformVar, Var, Variable,
};
pub use vars::Vars;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use discretize::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::objective::{CacheInfo, Objective};
    pub use crate::value::Value;
    pub use crate::var::{
        Bound, ChoiceVar, GridVar, QrandintVar, QuniformVar, RandintVar, UniformVar, Var, Variable,
    };
    pub use crate::vars::Vars;
}
