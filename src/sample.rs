//! Module: sample
//!
//! Purpose: Slot arithmetic for interleaved stereo batches. A batch is a
//! run of signed 32-bit words, alternating channel 0 / channel 1.
//!
//! Safety: Safe. Pure functions only.

/// Arithmetic right shift applied to every raw slot value.
///
/// The sensor left-justifies 24 significant bits in each 32-bit slot, so
/// shifting by 8 (sign-preserving) recovers the true 24-bit range.
pub const SAMPLE_SHIFT: u32 = 8;

/// Rescale one raw slot value to its true numeric range.
///
/// Rust's `>>` on `i32` is an arithmetic (sign-extending) shift, so the
/// sign survives: `-256 >> 8 == -1`, `i32::MIN >> 8 == -8_388_608`.
#[inline]
pub const fn rescale(raw: i32) -> i32 {
    raw >> SAMPLE_SHIFT
}

/// Iterate the complete `(ch0, ch1)` pairs of an interleaved batch.
///
/// A trailing unpaired word is silently dropped. Which physical mic is
/// ch0 depends on the peripheral's interleaving convention (the driver
/// may deliver Right,Left or the reverse), so the labels stay generic.
#[inline]
pub fn frame_pairs(words: &[i32]) -> impl Iterator<Item = (i32, i32)> + '_ {
    words.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
