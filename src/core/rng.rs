//! Dice randomness.
//!
//! ## Key Features
//!
//! - **Unbiased**: bytes are mapped to `0..n` by rejection sampling, so a die
//!   never favours low faces the way `byte % 6` would.
//! - **Best-effort secure**: `SecureDice` reads OS entropy and falls back to a
//!   ChaCha8 stream if the OS source fails. The fallback is still uniform.
//! - **Deterministic option**: `SeededDice` replays the same sequence for the
//!   same seed and can be checkpointed.
//! - **Scriptable**: `ScriptedDice` replays fixed faces for drivers and tests.
//!
//! ```
//! use knucklebones::core::{DiceSource, SeededDice};
//!
//! let mut a = SeededDice::new(7);
//! let mut b = SeededDice::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::die::Die;

/// A source of uniform dice rolls, coin flips and small index choices.
pub trait DiceSource {
    /// Roll one die, uniform over `1..=6`.
    fn roll_die(&mut self) -> Die;

    /// Flip a fair coin.
    fn flip_coin(&mut self) -> bool;

    /// Choose an index uniformly in `0..len`.
    ///
    /// `len` must be in `1..=256`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Reduce a byte stream to a uniform value in `0..n` by rejection sampling.
///
/// Bytes at or above the largest multiple of `n` that fits in 256 are
/// discarded. For `n = 6` that is every byte `>= 252`.
pub fn uniform_below(n: usize, mut next_byte: impl FnMut() -> u8) -> usize {
    assert!((1..=256).contains(&n), "uniform_below needs 1..=256 outcomes");
    let limit = 256 - 256 % n;
    loop {
        let byte = usize::from(next_byte());
        if byte < limit {
            return byte % n;
        }
    }
}

fn die_from_bytes(next_byte: impl FnMut() -> u8) -> Die {
    Die::from_index(uniform_below(usize::from(Die::FACES), next_byte) as u8)
}

fn coin_from_bytes(next_byte: impl FnMut() -> u8) -> bool {
    uniform_below(2, next_byte) == 0
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

// =============================================================================
// SecureDice
// =============================================================================

const BUFFER_LEN: usize = 64;

/// Fills a buffer from an entropy source.
type EntropyFill = fn(&mut [u8]) -> Result<(), rand::Error>;

fn os_entropy(buffer: &mut [u8]) -> Result<(), rand::Error> {
    OsRng.try_fill_bytes(buffer)
}

/// A fallback seed that differs between calls within the same clock tick.
fn fresh_seed() -> u64 {
    static CALLS: AtomicU64 = AtomicU64::new(0);
    let n = CALLS.fetch_add(1, Ordering::Relaxed);
    clock_seed() ^ n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// OS-entropy dice with a ChaCha8 fallback.
///
/// Entropy is read in blocks of 64 bytes. If the OS source ever fails the
/// source switches to a clock-seeded ChaCha8 stream for the rest of its life.
///
/// Cloning never shares randomness: the clone drops the buffered bytes and,
/// when degraded, reseeds its fallback.
pub struct SecureDice {
    buffer: [u8; BUFFER_LEN],
    cursor: usize,
    fallback: Option<ChaCha8Rng>,
    entropy: EntropyFill,
}

impl SecureDice {
    /// Create a source backed by OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entropy(os_entropy)
    }

    /// Create a source that is already running on its fallback generator.
    #[must_use]
    pub fn degraded(seed: u64) -> Self {
        Self {
            fallback: Some(ChaCha8Rng::seed_from_u64(seed)),
            ..Self::new()
        }
    }

    pub(crate) fn with_entropy(entropy: EntropyFill) -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            cursor: BUFFER_LEN,
            fallback: None,
            entropy,
        }
    }

    /// True once the OS source has failed and the fallback is in use.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    fn refill(&mut self) {
        if let Some(rng) = self.fallback.as_mut() {
            rng.fill_bytes(&mut self.buffer);
        } else if let Err(err) = (self.entropy)(&mut self.buffer) {
            log::warn!("os entropy unavailable ({err}), switching to seeded fallback");
            let mut rng = ChaCha8Rng::seed_from_u64(fresh_seed());
            rng.fill_bytes(&mut self.buffer);
            self.fallback = Some(rng);
        }
        self.cursor = 0;
    }

    fn next_byte(&mut self) -> u8 {
        if self.cursor == BUFFER_LEN {
            self.refill();
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        byte
    }
}

impl std::fmt::Debug for SecureDice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureDice")
            .field("buffered", &(BUFFER_LEN - self.cursor))
            .field("degraded", &self.is_degraded())
            .finish()
    }
}

impl Clone for SecureDice {
    fn clone(&self) -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            cursor: BUFFER_LEN,
            fallback: self
                .fallback
                .as_ref()
                .map(|_| ChaCha8Rng::seed_from_u64(fresh_seed())),
            entropy: self.entropy,
        }
    }
}

impl Default for SecureDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for SecureDice {
    fn roll_die(&mut self) -> Die {
        die_from_bytes(|| self.next_byte())
    }

    fn flip_coin(&mut self) -> bool {
        coin_from_bytes(|| self.next_byte())
    }

    fn choose_index(&mut self, len: usize) -> usize {
        uniform_below(len, || self.next_byte())
    }
}

// =============================================================================
// SeededDice
// =============================================================================

/// Deterministic dice for reproducible games.
///
/// Uses ChaCha8 so that a checkpoint is just the seed and word position.
#[derive(Clone, Debug)]
pub struct SeededDice {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededDice {
    /// Create a deterministic source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current position for checkpointing.
    #[must_use]
    pub fn state(&self) -> SeededDiceState {
        SeededDiceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved position.
    #[must_use]
    pub fn from_state(state: &SeededDiceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }

    fn next_byte(&mut self) -> u8 {
        // One word per byte keeps `word_pos` an exact checkpoint.
        self.inner.next_u32() as u8
    }
}

impl DiceSource for SeededDice {
    fn roll_die(&mut self) -> Die {
        die_from_bytes(|| self.next_byte())
    }

    fn flip_coin(&mut self) -> bool {
        coin_from_bytes(|| self.next_byte())
    }

    fn choose_index(&mut self, len: usize) -> usize {
        uniform_below(len, || self.next_byte())
    }
}

/// Serializable `SeededDice` position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededDiceState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

// =============================================================================
// ScriptedDice
// =============================================================================

/// Replays queued outcomes in order.
///
/// When a queue runs dry it keeps answering with face 1, `true` (player
/// first) and index 0, so a driver never stalls.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<Die>,
    coins: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl ScriptedDice {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the given faces. Values outside `1..=6` are skipped.
    #[must_use]
    pub fn with_faces(mut self, faces: &[u8]) -> Self {
        self.faces.extend(faces.iter().copied().filter_map(Die::new));
        self
    }

    /// Script coin outcomes.
    #[must_use]
    pub fn with_coins(mut self, coins: &[bool]) -> Self {
        self.coins.extend(coins.iter().copied());
        self
    }

    /// Script index choices (taken modulo `len` when consumed).
    #[must_use]
    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices.extend(indices.iter().copied());
        self
    }

    /// Queue one more face.
    pub fn push_face(&mut self, face: Die) {
        self.faces.push_back(face);
    }

    /// Number of faces still queued.
    #[must_use]
    pub fn remaining_faces(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> Die {
        self.faces.pop_front().unwrap_or(Die::from_index(0))
    }

    fn flip_coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().map_or(0, |i| i % len.max(1))
    }
}
