//! Content-seeded deterministic shuffling.
//!
//! The paper pass and the key pass build separate generator instances over
//! the same block and must arrive at the same option order with no shared
//! state. The seed is derived from the option strings themselves, so equal
//! content always produces an equal permutation, across processes and time.
//!
//! The hash and the generator are fixed here rather than pulled from a
//! crate: the permutation for given content is part of the output contract
//! and must never change under a dependency upgrade.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x1_0000_0001_b3;

/// FNV-1a over all options with a 0xFF separator byte between them. The
/// separator keeps the seed sensitive to option boundaries, not just the
/// concatenated bytes.
fn seed(options: &[String]) -> u64 {
    let mut hash = FNV_OFFSET;
    let mut mix = |byte: u64| {
        hash ^= byte;
        hash = hash.wrapping_mul(FNV_PRIME);
    };
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            mix(0xff);
        }
        for &byte in option.as_bytes() {
            mix(u64::from(byte));
        }
    }
    hash
}

/// SplitMix64. Small, fast, and stable; statistical quality well beyond
/// what an option shuffle needs.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Returns the options in their content-seeded shuffled order.
///
/// Identical input (same strings, same order) always yields the same
/// output order. Empty and single-element lists come back unchanged.
pub fn shuffle(options: &[String]) -> Vec<String> {
    let mut out = options.to_vec();
    let mut rng = SplitMix64::new(seed(options));
    for i in (1..out.len()).rev() {
        let j = (rng.next() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}
