use std::fmt;

use itertools::Itertools;

use crate::{Error, Symbol, VertVec};

/// One ordering of a symbol set.  Once generated, a `Permutation` is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    values: Vec<Symbol>,
}

impl Permutation {
    pub fn new(values: Vec<Symbol>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Symbol] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The permutation reached by swapping the values at positions `pos` and `pos + 1`.
    ///
    /// # Panics
    ///
    /// If `pos + 1 >= self.len()`.
    pub fn swapped(&self, pos: usize) -> Self {
        let mut values = self.values.clone();
        values.swap(pos, pos + 1);
        Self { values }
    }

    /// Number of position pairs `(i, j)` with `i < j` whose values are out of order.  This is
    /// the number of adjacent swaps needed to sort `self`.
    pub fn inversions(&self) -> usize {
        self.values
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    pub fn is_even(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

/// Formats as `(1 2 3 4)`
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.values.iter().join(" "))
    }
}

/// Generate every ordering of `symbols`.
///
/// Permutations are produced by taking each symbol in input order, recursively permuting the
/// remaining symbols and prepending the taken symbol to each result.  The output order is
/// therefore fully determined by the input order: for `[1, 2, 3, 4]` it starts with `(1 2 3 4)`
/// and ends with `(4 3 2 1)`.
pub fn permutations(symbols: &[Symbol]) -> Result<VertVec<Permutation>, Error> {
    if symbols.is_empty() {
        return Err(Error::InvalidInput("symbol set is empty".to_owned()));
    }
    if !symbols.iter().all_unique() {
        return Err(Error::InvalidInput(format!(
            "symbol set {symbols:?} contains duplicates"
        )));
    }
    Ok(permute(symbols)
        .into_iter()
        .map(Permutation::new)
        .collect())
}

fn permute(symbols: &[Symbol]) -> Vec<Vec<Symbol>> {
    if symbols.len() == 1 {
        return vec![symbols.to_vec()];
    }
    let mut perms = Vec::new();
    for (i, &first) in symbols.iter().enumerate() {
        let mut rest = symbols.to_vec();
        rest.remove(i);
        for tail in permute(&rest) {
            let mut perm = Vec::with_capacity(symbols.len());
            perm.push(first);
            perm.extend(tail);
            perms.push(perm);
        }
    }
    perms
}
