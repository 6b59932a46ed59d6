//! Alea deterministic pseudorandom number generator
//!
//! Alea is a multiply-with-carry generator over three fractional state
//! words. It is **not** cryptographically secure; its value is that a given
//! seed list always yields the same sequence, bit for bit, on every
//! platform and in every version of this crate.
//!
//! Seeding hashes the textual form of each seed with the `Mash` function
//! and subtracts the result from every state word. All arithmetic is done
//! in IEEE-754 doubles with explicit unsigned 32-bit truncation, so the
//! output matches other Alea 0.9 implementations exactly.

use chrono::Utc;
use tracing::trace;

use crate::rng::entropy::EntropyCollector;
use crate::rng::generator::RandomGenerator;
use crate::rng::seed::Seed;

/// Initial value of the Mash accumulator (`0xefc8249d`).
const MASH_INIT: f64 = 4_022_871_197.0;

/// Multiplier applied to the accumulator for every code unit.
const MASH_FACTOR: f64 = 0.025_196_032_824_169_38;

/// Multiplier of the step function.
const MULTIPLIER: f64 = 2_091_639.0;

pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

pub(crate) const TWO_POW_NEG_32: f64 = 2.328_306_436_538_696_3e-10;

const TWO_POW_21: f64 = 2_097_152.0;

const TWO_POW_NEG_53: f64 = 1.110_223_024_625_156_5e-16;

const VERSION: &str = "Alea 0.9";

/// Truncates toward zero and reduces modulo 2^32.
///
/// Inputs are always finite and non-negative here.
#[inline(always)]
fn to_uint32(x: f64) -> f64 {
    f64::from(x as u64 as u32)
}

/// Stateful string hash used to turn seeds into state words.
struct Mash {
    n: f64,
}

impl Mash {
    fn new() -> Self {
        Self { n: MASH_INIT }
    }

    /// Mixes `data` into the accumulator and returns a fraction in `[0, 1)`.
    fn mash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += f64::from(unit);

            let mut h = MASH_FACTOR * self.n;
            self.n = to_uint32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_uint32(h);
            h -= self.n;
            self.n += h * TWO_POW_32;
        }

        to_uint32(self.n) * TWO_POW_NEG_32
    }
}

/// Seeded deterministic generator.
///
/// Two instances built from the same seeds produce identical output for
/// every operation of [`RandomGenerator`], indefinitely.
///
/// ```
/// use fortuity::{Alea, RandomGenerator};
///
/// let mut a = Alea::new([0]);
/// assert_eq!(a.id(), "cp9hWvhg8GSvuZ9os");
/// ```
#[derive(Clone, Debug)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,

    /// Carry, always an integer in `[0, 2091639]`.
    c: f64,

    args: Vec<Seed>,
}

impl Alea {
    /// Creates a generator from an ordered list of seeds.
    ///
    /// An empty list is replaced by the current timestamp in milliseconds;
    /// the resulting sequence is then not reproducible. Use
    /// [`RandomGenerator::create_with_seeds`] to reject empty lists instead.
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Seed>,
    {
        let mut args: Vec<Seed> = seeds.into_iter().map(Into::into).collect();

        if args.is_empty() {
            args.push(Seed::Int(Utc::now().timestamp_millis()));
        }

        let mut mash = Mash::new();
        let mut s0 = mash.mash(" ");
        let mut s1 = mash.mash(" ");
        let mut s2 = mash.mash(" ");

        for seed in &args {
            let text = seed.to_string();

            for s in [&mut s0, &mut s1, &mut s2] {
                *s -= mash.mash(&text);
                if *s < 0.0 {
                    *s += 1.0;
                }
            }
        }

        trace!(seeds = args.len(), "seeded alea generator");

        Self {
            s0,
            s1,
            s2,
            c: 1.0,
            args,
        }
    }

    /// Creates a generator seeded from heuristic host entropy.
    ///
    /// This is the insecure fallback used when no cryptographic source is
    /// available. See [`EntropyCollector`].
    pub fn from_entropy() -> Self {
        Self::new(EntropyCollector::default().collect())
    }

    /// The seeds this generator was built from.
    pub fn args(&self) -> &[Seed] {
        &self.args
    }

    /// Algorithm version tag.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Advances the state and returns the next fraction in `[0, 1)`.
    fn step(&mut self) -> f64 {
        let t = MULTIPLIER * self.s0 + self.c * TWO_POW_NEG_32;

        self.s0 = self.s1;
        self.s1 = self.s2;
        self.c = t.trunc();
        self.s2 = t - self.c;

        self.s2
    }

    /// Returns a 32-bit unsigned value (one draw).
    pub fn uint32(&mut self) -> u32 {
        (self.step() * TWO_POW_32) as u32
    }

    /// Returns a fraction with 53 bits of resolution (two draws).
    pub fn fract53(&mut self) -> f64 {
        let high = self.step();
        let low = (self.step() * TWO_POW_21).trunc();

        high + low * TWO_POW_NEG_53
    }
}

impl RandomGenerator for Alea {
    fn fraction(&mut self) -> f64 {
        self.step()
    }
}
