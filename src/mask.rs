//! Expands a [`Decision`] into one on/off flag per LED cell.

use crate::decision::Decision;
use crate::word_layout::WordLayout;

/// One flag per cell of the face: `true` keeps the cell lit.
///
/// Always built from scratch by [`Mask::composite`]; it never depends on the previous mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask<const N: usize>([bool; N]);

impl<const N: usize> Mask<N> {
    /// Every cell dark.
    #[must_use]
    pub const fn dark() -> Self {
        Self([false; N])
    }

    /// Union of the ranges of every active phrase and the cells of every lit minute dot.
    ///
    /// ```rust
    /// use word_clock::decision::decide;
    /// use word_clock::mask::Mask;
    /// use word_clock::style::StyleConfig;
    /// use word_clock::word_layout::GRID_13X11;
    ///
    /// // 0:02 -> "ES IST MITTERNACHT" and two dots
    /// let mask = Mask::composite(&decide(0, 2, &StyleConfig::DEFAULT), &GRID_13X11);
    /// assert_eq!(mask.lit_count(), 2 + 3 + 11 + 2);
    /// assert!(mask.is_lit(130) && mask.is_lit(0) && !mask.is_lit(12));
    /// ```
    #[must_use]
    pub fn composite(decision: &Decision, layout: &WordLayout<N>) -> Self {
        let mut cells = [false; N];

        for phrase in decision.phrases.iter() {
            let range = layout.range(phrase);
            // WordLayout guarantees every range lies inside 0..N
            if let Some(run) = cells.get_mut(range.indexes()) {
                run.fill(true);
            }
        }

        for dot in decision.dots.lit() {
            if let Some(cell) = layout
                .minute_dot(dot)
                .and_then(|index| cells.get_mut(usize::from(index)))
            {
                *cell = true;
            }
        }

        Self(cells)
    }

    /// `false` for cells outside the face.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    /// Indexes of the dark cells, ascending.
    pub fn dark_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &lit)| (!lit).then_some(index))
    }

    #[must_use]
    pub const fn as_array(&self) -> &[bool; N] {
        &self.0
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::dark()
    }
}
