//! Aggregation of an ordered variable sequence into one encoded vector.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;
use crate::var::{Bound, Var, Variable};

/// An ordered sequence of variables sharing one flat encoded vector.
///
/// Each variable occupies a contiguous slice of the vector, laid out in
/// sequence order; the concatenated per-slot [`bounds`](Vars::bounds) are
/// what a continuous optimizer must be configured with. The same variable
/// configuration may appear more than once — every occurrence gets its own
/// slice.
///
/// `Vars` is immutable after construction and, with the `serde` feature,
/// serializable, so a search-space configuration can be shipped to worker
/// processes and rewrapped there.
///
/// # Example
///
/// ```
/// use discretize::{ChoiceVar, RandintVar, Value, Vars};
///
/// let vars = Vars::new(vec![
///     ChoiceVar::new(["foo", "bar"])?.into(),
///     RandintVar::new(1, 10)?.into(),
/// ]);
/// assert_eq!(vars.encoded_len(), 3);
/// assert_eq!(vars.decoded_len(), 2);
///
/// let encoded = vars.encode(&[Value::from("bar"), Value::Int(7)])?;
/// assert_eq!(vars.decode(&encoded)?, vec![Value::from("bar"), Value::Int(7)]);
/// # Ok::<(), discretize::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Var>", into = "Vec<Var>"))]
pub struct Vars {
    variables: Vec<Var>,
    slices: Vec<(usize, usize)>,
    bounds: Vec<Bound>,
}

impl Vars {
    /// Creates an aggregate over the given variables, in sequence order.
    #[must_use]
    pub fn new(variables: Vec<Var>) -> Self {
        let mut slices = Vec::with_capacity(variables.len());
        let mut bounds = Vec::new();
        let mut offset = 0;
        for variable in &variables {
            let width = variable.encoded_width();
            slices.push((offset, offset + width));
            bounds.extend_from_slice(variable.bounds());
            offset += width;
        }
        Self {
            variables,
            slices,
            bounds,
        }
    }

    /// Returns the variables in sequence order.
    #[must_use]
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// Returns the number of decoded values, one per variable.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        self.variables.len()
    }

    /// Returns the total number of encoded slots.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.bounds.len()
    }

    /// Returns the concatenated per-slot bounds in sequence order.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Decodes a full encoded vector into one value per variable.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `encoded` does not have exactly
    /// [`encoded_len`](Vars::encoded_len) slots, or any per-variable decode
    /// error.
    pub fn decode(&self, encoded: &[f64]) -> Result<Vec<Value>> {
        if encoded.len() != self.encoded_len() {
            return Err(Error::EncodedLen {
                expected: self.encoded_len(),
                got: encoded.len(),
            });
        }
        self.variables
            .iter()
            .zip(&self.slices)
            .map(|(variable, &(start, end))| variable.decode(&encoded[start..end]))
            .collect()
    }

    /// Encodes one value per variable into a full encoded vector.
    ///
    /// The concatenated result is decoded back and compared against
    /// `decoded` before it is returned.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `decoded` does not have exactly
    /// [`decoded_len`](Vars::decoded_len) values, or any per-variable encode
    /// error.
    pub fn encode(&self, decoded: &[Value]) -> Result<Vec<f64>> {
        if decoded.len() != self.decoded_len() {
            return Err(Error::DecodedLen {
                expected: self.decoded_len(),
                got: decoded.len(),
            });
        }
        let mut encoded = Vec::with_capacity(self.encoded_len());
        for (variable, value) in self.variables.iter().zip(decoded) {
            encoded.extend(variable.encode(value)?);
        }
        if self.decode(&encoded)? != decoded {
            return Err(Error::Internal("encode/decode round trip mismatch"));
        }
        Ok(encoded)
    }
}

impl From<Vec<Var>> for Vars {
    fn from(variables: Vec<Var>) -> Self {
        Self::new(variables)
    }
}

impl From<Vars> for Vec<Var> {
    fn from(vars: Vars) -> Self {
        vars.variables
    }
}
