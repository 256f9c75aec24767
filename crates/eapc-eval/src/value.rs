//! Runtime values and the array object (§3 "Runtime value variants",
//! "Array object").

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, RuntimeError};

/// A runtime value. Arrays are reference objects: `Value::Array` wraps a
/// shared handle so a by-reference array parameter and its argument alias
/// the same storage (§9 "Array representation").
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Character(char),
    Str(String),
    Array(Rc<RefCell<Array>>),
    /// Sentinel emitted inside PRINT to force a newline (§4.4 "Built-in
    /// constant").
    Eoln,
}

impl Value {
    /// Truth coercion used by IF/WHILE/REPEAT-UNTIL conditions and `NOT`
    /// (§4.4 "Truth coercion").
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Real(r) => *r != 0.0,
            Value::Character(c) => *c != '\0',
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) => true,
            Value::Eoln => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
            Value::Boolean(_) => "BOOLEAN",
            Value::Character(_) => "CHARACTER",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Eoln => "EOLN",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Boolean(b) => write!(f, "{}", if *b { "ΑΛΗΘΗΣ" } else { "ΨΕΥΔΗΣ" }),
            Value::Character(c) => write!(f, "{c}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(_) => write!(f, "<array>"),
            Value::Eoln => Ok(()),
        }
    }
}

/// A dense, bounds-checked N-dimensional array. Every cell is its own
/// `Rc<RefCell<Value>>` so that an individual element, not just the whole
/// array, can be bound as a by-reference argument (§4.4 "Function/
/// procedure call protocol").
pub struct Array {
    bounds: Vec<(i64, i64)>,
    data: Vec<Rc<RefCell<Value>>>,
}

impl Array {
    /// Builds a dense array from `(lower, upper)` bounds per dimension,
    /// with every cell defaulting to integer zero (§3 "Array object").
    pub fn new(bounds: Vec<(i64, i64)>) -> Self {
        let len: usize = bounds
            .iter()
            .map(|&(lo, hi)| if hi >= lo { (hi - lo + 1) as usize } else { 0 })
            .product();
        let data = (0..len).map(|_| Rc::new(RefCell::new(Value::Integer(0)))).collect();
        Self { bounds, data }
    }

    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    pub fn get(&self, indices: &[i64]) -> Result<Value> {
        let offset = self.offset(indices)?;
        Ok(self.data[offset].borrow().clone())
    }

    pub fn set(&self, indices: &[i64], value: Value) -> Result<()> {
        let offset = self.offset(indices)?;
        *self.data[offset].borrow_mut() = value;
        Ok(())
    }

    /// The shared cell for one element, used to bind an array-access
    /// argument as a by-reference parameter.
    pub fn cell(&self, indices: &[i64]) -> Result<Rc<RefCell<Value>>> {
        let offset = self.offset(indices)?;
        Ok(Rc::clone(&self.data[offset]))
    }

    pub fn bounds(&self) -> &[(i64, i64)] {
        &self.bounds
    }

    /// A fresh array with its own cells holding copies of this array's
    /// values, used when an array is passed by value (§4.4 call protocol).
    pub fn deep_clone(&self) -> Self {
        let data = self
            .data
            .iter()
            .map(|cell| Rc::new(RefCell::new(cell.borrow().clone())))
            .collect();
        Self { bounds: self.bounds.clone(), data }
    }

    fn offset(&self, indices: &[i64]) -> Result<usize> {
        if indices.len() != self.bounds.len() {
            return Err(RuntimeError::DimensionMismatch {
                expected: self.bounds.len(),
                found: indices.len(),
            });
        }
        let mut offset = 0usize;
        for (dim, (&index, &(lower, upper))) in indices.iter().zip(self.bounds.iter()).enumerate()
        {
            if index < lower || index > upper {
                return Err(RuntimeError::IndexOutOfBounds {
                    dimension: dim + 1,
                    index,
                    lower,
                    upper,
                });
            }
            let extent = (upper - lower + 1) as usize;
            offset = offset * extent + (index - lower) as usize;
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_cells_default_to_zero() {
        let array = Array::new(vec![(1, 3)]);
        assert!(matches!(array.get(&[2]).unwrap(), Value::Integer(0)));
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let array = Array::new(vec![(1, 3)]);
        let err = array.set(&[4], Value::Integer(0)).unwrap_err();
        assert!(matches!(err, RuntimeError::IndexOutOfBounds { dimension: 1, index: 4, lower: 1, upper: 3 }));
    }

    #[test]
    fn two_dimensional_offsets_are_row_major() {
        let array = Array::new(vec![(1, 2), (1, 2)]);
        array.set(&[1, 1], Value::Integer(10)).unwrap();
        array.set(&[2, 2], Value::Integer(20)).unwrap();
        assert!(matches!(array.get(&[1, 1]).unwrap(), Value::Integer(10)));
        assert!(matches!(array.get(&[2, 2]).unwrap(), Value::Integer(20)));
    }

    #[test]
    fn cell_aliases_array_storage() {
        let array = Array::new(vec![(1, 1)]);
        let cell = array.cell(&[1]).unwrap();
        *cell.borrow_mut() = Value::Integer(7);
        assert!(matches!(array.get(&[1]).unwrap(), Value::Integer(7)));
    }
}
