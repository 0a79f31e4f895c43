//! Module: sampler
//!
//! Purpose: The acquisition loop. Block until the peripheral delivers a
//! batch of interleaved words, thin it down, rescale, print. Control
//! flow is strictly linear: Init → (Read → Decimate/Rescale → Emit)*.
//!
//! The batch storage lives inside [`Sampler`] and is overwritten in
//! place on every read; nothing is allocated per iteration and no data
//! is retained across iterations.
//!
//! Safety: Safe. Single thread of control, exclusively owned state.

use crate::config::WORDS_PER_READ;
use crate::decimate::Decimator;
use crate::sample::{frame_pairs, rescale};
use crate::serial::{emit_pair, LineSink};

/// A blocking supplier of interleaved sample batches.
///
/// The read is the loop's sole suspension point: it waits indefinitely
/// for a full batch, with no timeout and no cancellation. The device
/// has nothing else to do while waiting for audio data.
pub trait BatchSource {
    type Error;

    /// Fill `words` with interleaved samples.
    ///
    /// Returns the number of whole 32-bit words actually delivered,
    /// which may be less than `words.len()`.
    fn read_batch(&mut self, words: &mut [i32]) -> Result<usize, Self::Error>;
}

/// The probe's single component: batch storage plus the pair counter.
pub struct Sampler {
    words: [i32; WORDS_PER_READ],
    decim: Decimator,
}

impl Sampler {
    /// Create a sampler keeping one pair in `decimate`.
    pub const fn new(decimate: u32) -> Self {
        Self {
            words: [0; WORDS_PER_READ],
            decim: Decimator::new(decimate),
        }
    }

    /// One loop iteration: read a batch, emit its retained pairs.
    ///
    /// A read error or an empty read is absorbed silently: no output,
    /// and the pair counter does not move. The next iteration simply
    /// reads again.
    pub fn poll<S, W>(&mut self, source: &mut S, out: &mut W)
    where
        S: BatchSource,
        W: LineSink,
    {
        let n_words = match source.read_batch(&mut self.words) {
            Ok(n) if n > 0 => n.min(WORDS_PER_READ),
            _ => return,
        };

        for (ch0, ch1) in frame_pairs(&self.words[..n_words]) {
            if !self.decim.keep() {
                continue;
            }
            emit_pair(out, rescale(ch0), rescale(ch1));
        }
    }

    /// The steady state: read/decimate/emit forever.
    ///
    /// No terminal transition short of power-off; fatal configuration
    /// faults halt the device before this is ever entered.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> !
    where
        S: BatchSource,
        W: LineSink,
    {
        loop {
            self.poll(source, out);
        }
    }
}
