//! Boundary table value object

use core::ops::Deref;
use smallvec::SmallVec;

/// Inline capacity before spilling to the heap
const INLINE_WORDS: usize = 16;

/// Ordered, strictly increasing boundary distances
///
/// Each distance counts characters from the scan-origin edge of the buffer
/// through the end of one word run. Index 0 is the boundary nearest the
/// origin. The last entry may instead be a padding entry equal to the buffer
/// length, covering trailing non-word content or a buffer without words.
///
/// Tables are produced by [`scan`](crate::scan) and shrunk in place by
/// [`consume_first_word`](crate::consume_first_word). An empty table means
/// the word-by-word loop is exhausted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BoundaryTable {
    distances: SmallVec<[usize; INLINE_WORDS]>,
}

impl BoundaryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_smallvec(distances: SmallVec<[usize; INLINE_WORDS]>) -> Self {
        debug_assert!(
            is_strictly_increasing(&distances),
            "Boundary distances must be strictly increasing"
        );
        Self { distances }
    }

    /// Number of entries (words, plus the padding entry if present)
    pub fn word_count(&self) -> usize {
        self.distances.len()
    }

    /// Distances as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.distances
    }

    /// Consume the table into a plain vector
    pub fn into_vec(self) -> Vec<usize> {
        self.distances.into_vec()
    }

    /// Lengths of the slices each entry adds on top of the previous one
    pub fn spans(&self) -> impl Iterator<Item = usize> + '_ {
        let mut previous = 0;
        self.distances.iter().map(move |&distance| {
            let span = distance - previous;
            previous = distance;
            span
        })
    }

    pub(crate) fn clear(&mut self) {
        self.distances.clear();
    }

    /// Drop the first entry and re-base the rest against a buffer that lost
    /// `removed` characters at its origin edge.
    pub(crate) fn drop_first_and_rebase(&mut self, removed: usize) {
        self.distances.remove(0);
        for distance in &mut self.distances {
            debug_assert!(*distance > removed, "rebase past a remaining boundary");
            *distance -= removed;
        }
    }
}

fn is_strictly_increasing(distances: &[usize]) -> bool {
    distances.windows(2).all(|pair| pair[0] < pair[1])
}

impl Deref for BoundaryTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.distances
    }
}

impl From<Vec<usize>> for BoundaryTable {
    fn from(distances: Vec<usize>) -> Self {
        Self::from_smallvec(SmallVec::from_vec(distances))
    }
}

impl<const N: usize> From<[usize; N]> for BoundaryTable {
    fn from(distances: [usize; N]) -> Self {
        Self::from_smallvec(distances.into_iter().collect())
    }
}

impl FromIterator<usize> for BoundaryTable {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_smallvec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BoundaryTable {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.distances.iter()
    }
}

impl PartialEq<[usize]> for BoundaryTable {
    fn eq(&self, other: &[usize]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for BoundaryTable {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
