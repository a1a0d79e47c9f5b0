use pn_core::Seed;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded permutation of `0..=255`, stored twice back to back.
///
/// Duplicating the permutation means a masked coordinate plus one never
/// needs a wraparound check: every index produced by [`hash`](Self::hash)
/// stays inside the 512 entries.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    pub const PERIOD: usize = 256;

    /// Shuffle `0..=255` with a generator seeded from `seed`.
    ///
    /// The generator is created here and dropped on return, so building a
    /// table never touches shared random state.
    pub fn build(seed: Seed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.0);
        let mut source: [u8; 256] = std::array::from_fn(|i| i as u8);
        source.shuffle(&mut rng);

        tracing::trace!(seed = seed.0, "built permutation table");
        Self::duplicated(source)
    }

    /// Wrap an explicit permutation.
    ///
    /// Returns `None` unless every value in `0..=255` appears exactly once.
    pub fn from_permutation(source: [u8; 256]) -> Option<Self> {
        let mut seen = [false; 256];
        for &value in &source {
            if std::mem::replace(&mut seen[value as usize], true) {
                return None;
            }
        }
        Some(Self::duplicated(source))
    }

    fn duplicated(source: [u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);
        Self { perm }
    }

    /// Hash an integer lattice point.
    ///
    /// Both coordinates are masked to `0..=255` before lookup, so any `i64`
    /// (negative included) is accepted.
    #[inline]
    pub fn hash(&self, x: i64, y: i64) -> u8 {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.perm[self.perm[xi] as usize + yi]
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
