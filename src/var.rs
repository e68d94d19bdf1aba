//! The [`Variable`] trait and built-in variable types.
//!
//! Each variable maps between a typed decoded value and one or more encoded
//! float slots with known [`bounds`](Variable::bounds). The built-in types
//! cover categoricals ([`ChoiceVar`]), ordered grids ([`GridVar`]), plain
//! and quantized integers ([`RandintVar`], [`QrandintVar`]), and plain and
//! quantized floats ([`UniformVar`], [`QuniformVar`]).
//!
//! Every variable guarantees an exact round trip: for any value in its
//! decoded domain, `decode(encode(v)) == v`, and any encoded slice within
//! its bounds decodes without error. Encoding is not injective — many
//! encoded slices may decode to the same value — but decoding is total on
//! the bounded region.
//!
//! # Example
//!
//! ```
//! use discretize::{RandintVar, Value, Variable};
//!
//! let var = RandintVar::new(1, 10)?;
//! assert_eq!(var.encoded_width(), 1);
//! assert_eq!(var.decode(&[6.8])?, Value::Int(7));
//! assert_eq!(var.encode(&Value::Int(7))?, vec![7.0]);
//! # Ok::<(), discretize::Error>(())
//! ```

// The `Var` suffix is the established naming for these types.
#![allow(clippy::module_name_repetitions)]

use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::exact;
use crate::value::Value;

/// An inclusive `(low, high)` range for one encoded slot.
pub type Bound = (f64, f64);

/// A single optimization variable with an encode/decode contract.
///
/// Implementors own an immutable domain fixed at construction time and a
/// cached bounds slice, one `(low, high)` pair per encoded slot.
pub trait Variable: Debug {
    /// Returns the per-slot bounds to configure a continuous optimizer with.
    fn bounds(&self) -> &[Bound];

    /// Returns the number of encoded slots this variable occupies.
    fn encoded_width(&self) -> usize {
        self.bounds().len()
    }

    /// Decodes an encoded slice into the variable's typed value.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `encoded` has the wrong number of slots and
    /// a domain error if a slot lies outside [`bounds`](Variable::bounds) or
    /// the decoded value falls outside the variable's domain.
    fn decode(&self, encoded: &[f64]) -> Result<Value>;

    /// Encodes a decoded value into its canonical encoded slice.
    ///
    /// The result is re-decoded and compared against `decoded` before it is
    /// returned, so a successful encode is always exactly round-trippable.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `decoded` is not a value this variable can
    /// produce.
    fn encode(&self, decoded: &Value) -> Result<Vec<f64>>;
}

fn check_width(encoded: &[f64], expected: usize) -> Result<()> {
    if encoded.len() == expected {
        Ok(())
    } else {
        Err(Error::EncodedLen {
            expected,
            got: encoded.len(),
        })
    }
}

fn check_in_bounds(value: f64, (low, high): Bound) -> Result<()> {
    // NaN fails the containment check as well.
    if (low..=high).contains(&value) {
        Ok(())
    } else {
        Err(Error::EncodedOutOfBounds { value, low, high })
    }
}

fn verify_round_trip(var: &dyn Variable, encoded: &[f64], decoded: &Value) -> Result<()> {
    if var.decode(encoded)? == *decoded {
        Ok(())
    } else {
        Err(Error::Internal("encode/decode round trip mismatch"))
    }
}

fn unique_values<I, T>(values: I) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(Error::EmptyValues);
    }
    for (index, value) in values.iter().enumerate() {
        if values[..index].contains(value) {
            return Err(Error::DuplicateValue(value.to_string()));
        }
    }
    Ok(values)
}

/// Bounds for a quantized range: centered on the quantized grid with half a
/// quantum of slack on each side, then nudged one representable float inward
/// so the extremes still decode inside `[lower, upper]`.
fn quantized_bounds(lower: f64, upper: f64, quantum: f64) -> Result<Bound> {
    let quantized_lower = exact::round_up(lower, quantum)?;
    let quantized_upper = exact::round_down(upper, quantum)?;
    if quantized_lower < lower
        || quantized_upper > upper
        || quantized_upper - quantized_lower < quantum
    {
        return Err(Error::InvalidQuantum {
            quantum,
            span: upper - lower,
        });
    }
    let half_step = exact::div(quantum, 2.0)?;
    let low = exact::next_float(exact::sum(&[quantized_lower, -half_step])?);
    let high = exact::prev_float(exact::sum(&[quantized_upper, half_step])?);
    Ok((low, high))
}

/// A categorical variable using one-max encoding.
///
/// Each category owns one encoded slot bounded by `[0, 1]`; decoding selects
/// the category whose slot holds the maximum value, ties broken by the
/// lowest index. A single-category variable occupies zero slots — the
/// category is implied, and a constant contributes nothing to the search
/// space. Two categories deliberately use two slots rather than one boolean
/// slot, keeping every category's slot independent.
///
/// # Example
///
/// ```
/// use discretize::{ChoiceVar, Value, Variable};
///
/// let var = ChoiceVar::new(["foo", "bar"])?;
/// assert_eq!(var.bounds(), &[(0.0, 1.0), (0.0, 1.0)]);
/// assert_eq!(var.decode(&[0.2, 0.9])?, Value::from("bar"));
/// assert_eq!(var.encode(&Value::from("bar"))?, vec![0.0, 1.0]);
/// # Ok::<(), discretize::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Choice", into = "serde_repr::Choice")
)]
pub struct ChoiceVar {
    categories: Vec<Value>,
    bounds: Vec<Bound>,
}

impl ChoiceVar {
    /// Creates a categorical variable over the given categories.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `categories` is empty or contains a
    /// duplicate.
    pub fn new<I, T>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let categories = unique_values(categories)?;
        let width = if categories.len() == 1 {
            0
        } else {
            categories.len()
        };
        Ok(Self {
            categories,
            bounds: vec![(0.0, 1.0); width],
        })
    }

    /// Returns the categories in input order.
    #[must_use]
    pub fn categories(&self) -> &[Value] {
        &self.categories
    }
}

impl Variable for ChoiceVar {
    fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        check_width(encoded, self.bounds.len())?;
        if self.bounds.is_empty() {
            return Ok(self.categories[0].clone());
        }
        let mut hot = 0;
        for (index, &slot) in encoded.iter().enumerate() {
            check_in_bounds(slot, (0.0, 1.0))?;
            // Strict comparison keeps the first of several maxima.
            if slot > encoded[hot] {
                hot = index;
            }
        }
        Ok(self.categories[hot].clone())
    }

    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let hot = self
            .categories
            .iter()
            .position(|category| category == decoded)
            .ok_or_else(|| Error::UnknownValue(decoded.to_string()))?;
        if self.bounds.is_empty() {
            return Ok(Vec::new());
        }
        let mut encoded = vec![0.0; self.bounds.len()];
        encoded[hot] = 1.0;
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// A continuous float variable over `[lower, upper]`.
///
/// The encoding is the identity: the optimizer's sample is the decoded
/// value. Nothing is clamped; an out-of-bounds sample is a contract
/// violation and decoding it fails.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Uniform", into = "serde_repr::Uniform")
)]
pub struct UniformVar {
    lower: f64,
    upper: f64,
    bounds: Vec<Bound>,
}

impl UniformVar {
    /// Creates a continuous float variable over `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `lower <= upper` and both are
    /// finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
            return Err(Error::InvalidBounds {
                low: lower,
                high: upper,
            });
        }
        Ok(Self {
            lower,
            upper,
            bounds: vec![(lower, upper)],
        })
    }
}

impl Variable for UniformVar {
    fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        check_width(encoded, 1)?;
        check_in_bounds(encoded[0], self.bounds[0])?;
        Ok(Value::Float(encoded[0]))
    }

    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let value = decoded.as_float().ok_or_else(|| Error::DecodedType {
            expected: "float",
            got: decoded.to_string(),
        })?;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value,
                lower: self.lower,
                upper: self.upper,
            });
        }
        let encoded = vec![value];
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// A quantized float variable: multiples of a quantum within
/// `[lower, upper]`.
///
/// The decoded value is always an exact multiple of `quantum` offset from
/// the quantized grid, computed with exact decimal rounding so every sample
/// inside a grid point's half-quantum window decodes to that grid point.
///
/// # Example
///
/// ```
/// use discretize::{QuniformVar, Value, Variable};
///
/// let var = QuniformVar::new(-11.1, 9.99, 0.22)?;
/// assert_eq!(var.decode(&[-11.09])?, Value::Float(-11.0));
/// # Ok::<(), discretize::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Quniform", into = "serde_repr::Quniform")
)]
pub struct QuniformVar {
    lower: f64,
    upper: f64,
    quantum: f64,
    bounds: Vec<Bound>,
}

impl QuniformVar {
    /// Creates a quantized float variable over `[lower, upper]` with the
    /// given quantum.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `lower <= upper` (both finite)
    /// and `0 < quantum <= upper - lower` with at least one whole quantum
    /// between the quantized endpoints.
    pub fn new(lower: f64, upper: f64, quantum: f64) -> Result<Self> {
        if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
            return Err(Error::InvalidBounds {
                low: lower,
                high: upper,
            });
        }
        if !(quantum > 0.0 && quantum <= upper - lower) {
            return Err(Error::InvalidQuantum {
                quantum,
                span: upper - lower,
            });
        }
        let bounds = quantized_bounds(lower, upper, quantum)?;
        Ok(Self {
            lower,
            upper,
            quantum,
            bounds: vec![bounds],
        })
    }
}

impl Variable for QuniformVar {
    fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        check_width(encoded, 1)?;
        check_in_bounds(encoded[0], self.bounds[0])?;
        let value = exact::round_nearest(encoded[0], self.quantum)?;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value,
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(Value::Float(value))
    }

    #[allow(clippy::float_cmp)]
    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let value = decoded.as_float().ok_or_else(|| Error::DecodedType {
            expected: "float",
            got: decoded.to_string(),
        })?;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value,
                lower: self.lower,
                upper: self.upper,
            });
        }
        if exact::round_nearest(value, self.quantum)? != value {
            return Err(Error::NotOnGrid {
                value,
                quantum: self.quantum,
            });
        }
        let encoded = vec![value];
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// An integer variable over `[lower, upper]`, both ends inclusive.
///
/// The encoded slot spans half a unit beyond each end, nudged one
/// representable float inward, so every integer is sampled with equal
/// probability and the extreme encoded values still decode in range.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Randint", into = "serde_repr::Randint")
)]
pub struct RandintVar {
    lower: i64,
    upper: i64,
    bounds: Vec<Bound>,
}

impl RandintVar {
    /// Creates an integer variable over `[lower, upper]`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `lower > upper`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidBounds {
                low: lower as f64,
                high: upper as f64,
            });
        }
        let low = exact::next_float(lower as f64 - 0.5);
        let high = exact::prev_float(upper as f64 + 0.5);
        Ok(Self {
            lower,
            upper,
            bounds: vec![(low, high)],
        })
    }
}

impl Variable for RandintVar {
    fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Decodes by rounding to the nearest integer, exact halves to even.
    ///
    /// The half-to-even convention matches the decimal midpoint rounding
    /// used by the quantized variables, so a sample landing exactly on a
    /// half-unit boundary resolves the same way everywhere.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        check_width(encoded, 1)?;
        check_in_bounds(encoded[0], self.bounds[0])?;
        let rounded = encoded[0].round_ties_even();
        if !(self.lower as f64..=self.upper as f64).contains(&rounded) {
            return Err(Error::DecodedOutOfDomain {
                value: rounded,
                lower: self.lower as f64,
                upper: self.upper as f64,
            });
        }
        Ok(Value::Int(rounded as i64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let value = decoded.as_int().ok_or_else(|| Error::DecodedType {
            expected: "int",
            got: decoded.to_string(),
        })?;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value: value as f64,
                lower: self.lower as f64,
                upper: self.upper as f64,
            });
        }
        let encoded = vec![value as f64];
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// A quantized integer variable: multiples of an integer quantum within
/// `[lower, upper]`, both ends inclusive.
///
/// # Example
///
/// ```
/// use discretize::{QrandintVar, Value, Variable};
///
/// let var = QrandintVar::new(1, 10, 2)?;
/// assert_eq!(var.decode(&[2.0])?, Value::Int(2));
/// assert_eq!(var.decode(&[4.9])?, Value::Int(4));
/// # Ok::<(), discretize::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Qrandint", into = "serde_repr::Qrandint")
)]
pub struct QrandintVar {
    lower: i64,
    upper: i64,
    quantum: i64,
    bounds: Vec<Bound>,
}

impl QrandintVar {
    /// Creates a quantized integer variable over `[lower, upper]` with the
    /// given quantum.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `lower <= upper` and
    /// `1 <= quantum <= upper - lower` with at least one whole quantum
    /// between the quantized endpoints.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(lower: i64, upper: i64, quantum: i64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidBounds {
                low: lower as f64,
                high: upper as f64,
            });
        }
        let span = i128::from(upper) - i128::from(lower);
        if quantum < 1 || i128::from(quantum) > span {
            return Err(Error::InvalidQuantum {
                quantum: quantum as f64,
                span: span as f64,
            });
        }
        let bounds = quantized_bounds(lower as f64, upper as f64, quantum as f64)?;
        Ok(Self {
            lower,
            upper,
            quantum,
            bounds: vec![bounds],
        })
    }
}

impl Variable for QrandintVar {
    fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        check_width(encoded, 1)?;
        check_in_bounds(encoded[0], self.bounds[0])?;
        let value = exact::round_nearest(encoded[0], self.quantum as f64)?;
        if value.fract() != 0.0 {
            return Err(Error::Internal(
                "integer quantum rounding produced a non-integer",
            ));
        }
        let value = value as i64;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value: value as f64,
                lower: self.lower as f64,
                upper: self.upper as f64,
            });
        }
        Ok(Value::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let value = decoded.as_int().ok_or_else(|| Error::DecodedType {
            expected: "int",
            got: decoded.to_string(),
        })?;
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::DecodedOutOfDomain {
                value: value as f64,
                lower: self.lower as f64,
                upper: self.upper as f64,
            });
        }
        if value.rem_euclid(self.quantum) != 0 {
            return Err(Error::NotOnGrid {
                value: value as f64,
                quantum: self.quantum as f64,
            });
        }
        let encoded = vec![value as f64];
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// An ordinal variable over an ordered list of values.
///
/// The values keep their input order — they are never sorted — so a
/// pre-ordered list like `["good", "better", "best"]` maps monotonically
/// onto the encoded axis. Internally this is a [`RandintVar`] over the
/// value indices.
///
/// # Example
///
/// ```
/// use discretize::{GridVar, Value, Variable};
///
/// let var = GridVar::new(["good", "better", "best"])?;
/// assert_eq!(var.decode(&[0.0])?, Value::from("good"));
/// assert_eq!(var.decode(&[2.0])?, Value::from("best"));
/// # Ok::<(), discretize::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_repr::Grid", into = "serde_repr::Grid")
)]
pub struct GridVar {
    values: Vec<Value>,
    index: RandintVar,
}

impl GridVar {
    /// Creates an ordinal variable over the given values, in input order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `values` is empty or contains a
    /// duplicate.
    #[allow(clippy::cast_possible_wrap)]
    pub fn new<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values = unique_values(values)?;
        let index = RandintVar::new(0, values.len() as i64 - 1)?;
        Ok(Self { values, index })
    }

    /// Returns the values in input order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Variable for GridVar {
    fn bounds(&self) -> &[Bound] {
        self.index.bounds()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        let index = self
            .index
            .decode(encoded)?
            .as_int()
            .ok_or(Error::Internal("index variable decoded to a non-integer"))?;
        Ok(self.values[index as usize].clone())
    }

    #[allow(clippy::cast_possible_wrap)]
    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        let index = self
            .values
            .iter()
            .position(|value| value == decoded)
            .ok_or_else(|| Error::UnknownValue(decoded.to_string()))?;
        let encoded = self.index.encode(&Value::Int(index as i64))?;
        verify_round_trip(self, &encoded, decoded)?;
        Ok(encoded)
    }
}

/// Any of the built-in variable types.
///
/// [`Vars`](crate::Vars) owns a heterogeneous sequence of these. Each
/// built-in type converts into `Var` with [`From`], and `Var` implements
/// [`Variable`] by delegating to the wrapped variable.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Var {
    /// A categorical variable.
    Choice(ChoiceVar),
    /// A continuous float variable.
    Uniform(UniformVar),
    /// A quantized float variable.
    Quniform(QuniformVar),
    /// An integer variable.
    Randint(RandintVar),
    /// A quantized integer variable.
    Qrandint(QrandintVar),
    /// An ordinal variable over ordered values.
    Grid(GridVar),
}

impl Variable for Var {
    fn bounds(&self) -> &[Bound] {
        match self {
            Self::Choice(var) => var.bounds(),
            Self::Uniform(var) => var.bounds(),
            Self::Quniform(var) => var.bounds(),
            Self::Randint(var) => var.bounds(),
            Self::Qrandint(var) => var.bounds(),
            Self::Grid(var) => var.bounds(),
        }
    }

    fn decode(&self, encoded: &[f64]) -> Result<Value> {
        match self {
            Self::Choice(var) => var.decode(encoded),
            Self::Uniform(var) => var.decode(encoded),
            Self::Quniform(var) => var.decode(encoded),
            Self::Randint(var) => var.decode(encoded),
            Self::Qrandint(var) => var.decode(encoded),
            Self::Grid(var) => var.decode(encoded),
        }
    }

    fn encode(&self, decoded: &Value) -> Result<Vec<f64>> {
        match self {
            Self::Choice(var) => var.encode(decoded),
            Self::Uniform(var) => var.encode(decoded),
            Self::Quniform(var) => var.encode(decoded),
            Self::Randint(var) => var.encode(decoded),
            Self::Qrandint(var) => var.encode(decoded),
            Self::Grid(var) => var.encode(decoded),
        }
    }
}

impl From<ChoiceVar> for Var {
    fn from(var: ChoiceVar) -> Self {
        Self::Choice(var)
    }
}

impl From<UniformVar> for Var {
    fn from(var: UniformVar) -> Self {
        Self::Uniform(var)
    }
}

impl From<QuniformVar> for Var {
    fn from(var: QuniformVar) -> Self {
        Self::Quniform(var)
    }
}

impl From<RandintVar> for Var {
    fn from(var: RandintVar) -> Self {
        Self::Randint(var)
    }
}

impl From<QrandintVar> for Var {
    fn from(var: QrandintVar) -> Self {
        Self::Qrandint(var)
    }
}

impl From<GridVar> for Var {
    fn from(var: GridVar) -> Self {
        Self::Grid(var)
    }
}

/// Serialized forms carrying only the domain parameters. Derived state like
/// bounds is rebuilt through the constructors on deserialization, which also
/// revalidates the incoming configuration.
#[cfg(feature = "serde")]
mod serde_repr {
    use serde::{Deserialize, Serialize};

    use super::{
        ChoiceVar, Error, GridVar, QrandintVar, QuniformVar, RandintVar, Result, UniformVar, Value,
    };

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    pub(crate) struct Choice {
        categories: Vec<Value>,
    }

    impl From<ChoiceVar> for Choice {
        fn from(var: ChoiceVar) -> Self {
            Self {
                categories: var.categories,
            }
        }
    }

    impl TryFrom<Choice> for ChoiceVar {
        type Error = Error;

        fn try_from(repr: Choice) -> Result<Self> {
            Self::new(repr.categories)
        }
    }

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    pub(crate) struct Grid {
        values: Vec<Value>,
    }

    impl From<GridVar> for Grid {
        fn from(var: GridVar) -> Self {
            Self { values: var.values }
        }
    }

    impl TryFrom<Grid> for GridVar {
        type Error = Error;

        fn try_from(repr: Grid) -> Result<Self> {
            Self::new(repr.values)
        }
    }

    #[derive(Serialize, Deserialize)]
    pub(crate) struct Uniform {
        lower: f64,
        upper: f64,
    }

    impl From<UniformVar> for Uniform {
        fn from(var: UniformVar) -> Self {
            Self {
                lower: var.lower,
                upper: var.upper,
            }
        }
    }

    impl TryFrom<Uniform> for UniformVar {
        type Error = Error;

        fn try_from(repr: Uniform) -> Result<Self> {
            Self::new(repr.lower, repr.upper)
        }
    }

    #[derive(Serialize, Deserialize)]
    pub(crate) struct Quniform {
        lower: f64,
        upper: f64,
        quantum: f64,
    }

    impl From<QuniformVar> for Quniform {
        fn from(var: QuniformVar) -> Self {
            Self {
                lower: var.lower,
                upper: var.upper,
                quantum: var.quantum,
            }
        }
    }

    impl TryFrom<Quniform> for QuniformVar {
        type Error = Error;

        fn try_from(repr: Quniform) -> Result<Self> {
            Self::new(repr.lower, repr.upper, repr.quantum)
        }
    }

    #[derive(Serialize, Deserialize)]
    pub(crate) struct Randint {
        lower: i64,
        upper: i64,
    }

    impl From<RandintVar> for Randint {
        fn from(var: RandintVar) -> Self {
            Self {
                lower: var.lower,
                upper: var.upper,
            }
        }
    }

    impl TryFrom<Randint> for RandintVar {
        type Error = Error;

        fn try_from(repr: Randint) -> Result<Self> {
            Self::new(repr.lower, repr.upper)
        }
    }

    #[derive(Serialize, Deserialize)]
    pub(crate) struct Qrandint {
        lower: i64,
        upper: i64,
        quantum: i64,
    }

    impl From<QrandintVar> for Qrandint {
        fn from(var: QrandintVar) -> Self {
            Self {
                lower: var.lower,
                upper: var.upper,
                quantum: var.quantum,
            }
        }
    }

    impl TryFrom<Qrandint> for QrandintVar {
        type Error = Error;

        fn try_from(repr: Qrandint) -> Result<Self> {
            Self::new(repr.lower, repr.upper, repr.quantum)
        }
    }
}
