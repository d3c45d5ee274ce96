//! Tower module - the authoritative disc/peg arrangement
//!
//! Three pegs hold disc ids bottom-to-top; a side table maps each id to its
//! size (1 = smallest). Storage is fixed-capacity (`ArrayVec`) so moves never
//! allocate.
//!
//! The tower itself does not arbitrate moves. [`Tower::move_top`] is the raw
//! pop-then-push primitive; callers go through [`crate::validator`] first.

use arrayvec::ArrayVec;

use crate::types::{DiscId, PegId, MAX_DISCS, PEG_COUNT};

/// Capacity of one peg (and of the size table)
pub const PEG_CAPACITY: usize = MAX_DISCS as usize;

/// Disc sizes on one peg, bottom-to-top
pub type PegSizes = ArrayVec<u8, PEG_CAPACITY>;

/// Three pegs of discs plus per-disc size metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    pegs: [ArrayVec<DiscId, PEG_CAPACITY>; PEG_COUNT],
    /// Indexed by `DiscId`
    sizes: ArrayVec<u8, PEG_CAPACITY>,
}

impl Tower {
    /// Canonical start: `num_discs` discs stacked by size on the source peg.
    ///
    /// Discs are spawned largest first, so the largest disc gets `DiscId(0)`.
    /// `num_discs` is capped at [`PEG_CAPACITY`].
    pub fn new(num_discs: u8) -> Self {
        let n = num_discs.min(MAX_DISCS);
        let mut tower = Self {
            pegs: Default::default(),
            sizes: ArrayVec::new(),
        };
        for size in (1..=n).rev() {
            let id = DiscId(tower.sizes.len() as u8);
            tower.sizes.push(size);
            tower.pegs[PegId::Source.index()].push(id);
        }
        tower
    }

    /// Build an arbitrary legal arrangement from per-peg sizes (bottom-to-top).
    ///
    /// Returns `None` unless the sizes are exactly `1..=n` with no repeats,
    /// `n <= MAX_DISCS`, and every peg is strictly decreasing. Ids follow the
    /// spawn convention (`DiscId(n - size)`).
    pub fn from_sizes(pegs: [&[u8]; PEG_COUNT]) -> Option<Self> {
        let total: usize = pegs.iter().map(|p| p.len()).sum();
        if total > PEG_CAPACITY {
            return None;
        }
        let n = total as u8;

        let mut seen = [false; PEG_CAPACITY + 1];
        let mut tower = Self {
            pegs: Default::default(),
            sizes: (1..=n).rev().collect(),
        };

        for (peg_index, sizes) in pegs.iter().enumerate() {
            let mut below: Option<u8> = None;
            for &size in sizes.iter() {
                if size == 0 || size > n || seen[size as usize] {
                    return None;
                }
                if below.is_some_and(|b| b <= size) {
                    return None;
                }
                seen[size as usize] = true;
                below = Some(size);
                tower.pegs[peg_index].push(DiscId(n - size));
            }
        }

        Some(tower)
    }

    /// Total number of discs in play
    pub fn num_discs(&self) -> u8 {
        self.sizes.len() as u8
    }

    /// Disc ids on a peg, bottom-to-top
    pub fn peg(&self, peg: PegId) -> &[DiscId] {
        &self.pegs[peg.index()]
    }

    /// Number of discs on a peg
    pub fn height(&self, peg: PegId) -> usize {
        self.pegs[peg.index()].len()
    }

    pub fn is_empty(&self, peg: PegId) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Top disc of a peg
    pub fn top(&self, peg: PegId) -> Option<DiscId> {
        self.pegs[peg.index()].last().copied()
    }

    /// Size of a disc, `None` for an id that does not exist in this session
    pub fn size_of(&self, disc: DiscId) -> Option<u8> {
        self.sizes.get(disc.index()).copied()
    }

    /// Size of the top disc of a peg
    pub fn top_size(&self, peg: PegId) -> Option<u8> {
        self.top(peg).and_then(|d| self.size_of(d))
    }

    /// Peg currently holding a disc
    pub fn peg_of(&self, disc: DiscId) -> Option<PegId> {
        PegId::ALL
            .into_iter()
            .find(|&p| self.pegs[p.index()].contains(&disc))
    }

    /// Disc sizes on a peg, bottom-to-top
    pub fn sizes_on(&self, peg: PegId) -> PegSizes {
        self.pegs[peg.index()]
            .iter()
            .filter_map(|&d| self.size_of(d))
            .collect()
    }

    /// All discs on the source peg in size order, nothing anywhere else
    pub fn is_canonical(&self) -> bool {
        let n = self.num_discs() as usize;
        self.height(PegId::Source) == n
            && self.is_empty(PegId::Auxiliary)
            && self.is_empty(PegId::Destination)
            && self.is_ordered()
    }

    /// Every peg strictly decreasing bottom-to-top
    pub fn is_ordered(&self) -> bool {
        PegId::ALL.into_iter().all(|peg| {
            self.sizes_on(peg)
                .windows(2)
                .all(|pair| pair[0] > pair[1])
        })
    }

    /// Pop the top of `from` and push it onto `to`.
    ///
    /// No ordering check happens here. Returns the moved disc, or `None` when
    /// `from` is empty.
    pub(crate) fn move_top(&mut self, from: PegId, to: PegId) -> Option<DiscId> {
        let disc = self.pegs[from.index()].pop()?;
        self.pegs[to.index()].push(disc);
        Some(disc)
    }
}

impl Default for Tower {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_DISCS)
    }
}
