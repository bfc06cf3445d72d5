use crate::category::{Arrow, HasInitial};

use core::ops::Shr;
use thiserror::Error;

/// A function between finite sets, stored as an array of indices.
///
/// Objects of the category are sizes: the object `n` stands for the set
/// `{0..n}`, and a morphism `m → n` is a length-`m` table of indices below
/// `n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FinFunction {
    pub table: Vec<usize>,
    pub target: usize,
}

/// Tables rejected by [`FinFunction::new`] and [`FinFunction::inclusion`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidFinFunction {
    #[error("table entry {value} is out of range for target {target}")]
    OutOfRange { value: usize, target: usize },

    #[error("an inclusion table must be strictly increasing")]
    NotIncreasing,
}

impl FinFunction {
    /// Construct a function from a table of indices, checking the entries
    /// are below `target`.
    pub fn new(table: Vec<usize>, target: usize) -> Result<Self, InvalidFinFunction> {
        if let Some(&value) = table.iter().find(|&&value| value >= target) {
            return Err(InvalidFinFunction::OutOfRange { value, target });
        }
        Ok(Self { table, target })
    }

    /// The canonical monomorphism of a subset of `{0..target}`: the table
    /// must list the subset's elements in strictly increasing order.
    ///
    /// ```rust
    /// # use subobject_algebra::finite_set::FinFunction;
    /// let f = FinFunction::inclusion(vec![0, 2], 4).unwrap();
    /// assert!(f.is_mono());
    /// assert!(FinFunction::inclusion(vec![2, 0], 4).is_err());
    /// ```
    pub fn inclusion(elements: Vec<usize>, target: usize) -> Result<Self, InvalidFinFunction> {
        if !elements.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(InvalidFinFunction::NotIncreasing);
        }
        Self::new(elements, target)
    }

    /// Whether this function is injective, and so presents a subobject of
    /// its target.
    pub fn is_mono(&self) -> bool {
        let mut seen = vec![false; self.target];
        self.table
            .iter()
            .all(|&value| !std::mem::replace(&mut seen[value], true))
    }

    /// The set of values this function hits, sorted and deduplicated.
    ///
    /// ```rust
    /// # use subobject_algebra::finite_set::FinFunction;
    /// let f = FinFunction::new(vec![3, 1, 3], 5).unwrap();
    /// assert_eq!(f.image(), vec![1, 3]);
    /// ```
    pub fn image(&self) -> Vec<usize> {
        let mut hit = vec![false; self.target];
        for &value in &self.table {
            hit[value] = true;
        }
        (0..self.target).filter(|&value| hit[value]).collect()
    }
}

impl Arrow for FinFunction {
    type Object = usize;

    fn source(&self) -> usize {
        self.table.len()
    }

    fn target(&self) -> usize {
        self.target
    }

    fn identity(a: &usize) -> Self {
        Self {
            table: (0..*a).collect(),
            target: *a,
        }
    }

    fn compose(&self, other: &Self) -> Option<Self> {
        if self.target != other.source() {
            return None;
        }
        let table = self.table.iter().map(|&i| other.table[i]).collect();
        Some(Self {
            table,
            target: other.target,
        })
    }
}

impl HasInitial for FinFunction {
    fn initial_object() -> usize {
        0
    }

    fn initial(a: &usize) -> Self {
        Self {
            table: Vec::new(),
            target: *a,
        }
    }
}

// Syntactic sugar for composition
impl Shr<&FinFunction> for &FinFunction {
    type Output = Option<FinFunction>;

    fn shr(self, rhs: &FinFunction) -> Option<FinFunction> {
        self.compose(rhs)
    }
}
