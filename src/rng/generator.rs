//! Shared derivation contract
//!
//! [`RandomGenerator`] has a single required method, [`fraction`], and
//! derives every other operation from it. Concrete generators (the seeded
//! [`Alea`] engine and the secure adapters) are peers that only supply the
//! primitive; a few of them also override [`hex_string`] or [`uuid`] when
//! the host offers something better.
//!
//! ## Draw counts
//!
//! Callers relying on reproducibility need to know how many primitive
//! draws each operation consumes:
//!
//! | operation                          | draws            |
//! |------------------------------------|------------------|
//! | `choice`, `choice_str`             | 1                |
//! | `hex_string(n)`, `id_with_len(n)`, `secret_with_len(n)` | `n` |
//! | `uuid`                             | 16               |
//! | `date`, `integer`, `cardinal`, `number`, `decimal`, `from_range` | 1 |
//!
//! [`fraction`]: RandomGenerator::fraction
//! [`hex_string`]: RandomGenerator::hex_string
//! [`uuid`]: RandomGenerator::uuid

use chrono::{DateTime, Months, Utc};
use uuid::Builder;

use crate::error::{RandomError, Result};
use crate::rng::alea::Alea;
use crate::rng::alphabet::{BASE64_URL, HEX, UNMISTAKABLE};
use crate::rng::seed::Seed;

/// Default identifier length: about 96 bits of entropy, the amount of
/// state in the Alea generator.
pub const DEFAULT_ID_CHARS: usize = 17;

/// Default secret length: 43 characters at 6 bits each, about 256 bits.
pub const DEFAULT_SECRET_CHARS: usize = 43;

/// Upper bound used by [`RandomGenerator::integer`] and
/// [`RandomGenerator::cardinal`] when no bound is given.
pub const DEFAULT_INTEGER_MAX: i64 = 100;

/// Default number of decimal places for [`RandomGenerator::decimal`].
pub const DEFAULT_DECIMAL_PRECISION: u32 = 2;

/// Default upper bound for [`RandomGenerator::decimal`].
pub const DEFAULT_DECIMAL_MAX: f64 = 1.0;

/// Width of the default [`RandomGenerator::date`] window.
const DEFAULT_DATE_WINDOW: Months = Months::new(100 * 12);

/// Random value generation built on one primitive.
///
/// Every provided method consumes draws from [`fraction`](Self::fraction)
/// in a fixed order, so two generators that return the same fractions
/// return the same derived values.
pub trait RandomGenerator {
    /// Returns a number in `[0, 1)`, never exactly 1.
    fn fraction(&mut self) -> f64;

    /// Returns `digits` lowercase hexadecimal characters.
    fn hex_string(&mut self, digits: usize) -> String {
        random_string(self, digits, HEX)
    }

    /// Returns a random RFC 4122 version 4 UUID in hyphenated lowercase form.
    fn uuid(&mut self) -> String {
        derive_uuid(self)
    }

    /// Returns a [`DEFAULT_ID_CHARS`]-character identifier such as
    /// `"Jjwjg6gouWLXhMGKW"`, likely to be unique in the whole world.
    fn id(&mut self) -> String {
        self.id_with_len(DEFAULT_ID_CHARS)
    }

    /// Returns an identifier of `chars` unmistakable characters.
    fn id_with_len(&mut self, chars: usize) -> String {
        random_string(self, chars, UNMISTAKABLE)
    }

    /// Returns a [`DEFAULT_SECRET_CHARS`]-character URL-safe secret.
    fn secret(&mut self) -> String {
        self.secret_with_len(DEFAULT_SECRET_CHARS)
    }

    /// Returns a secret of `chars` URL-safe base64 characters.
    fn secret_with_len(&mut self, chars: usize) -> String {
        random_string(self, chars, BASE64_URL)
    }

    /// Picks one element of `items`, or `None` if it is empty.
    ///
    /// A draw is consumed even when `items` is empty.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let index = (self.fraction() * items.len() as f64) as usize;
        items.get(index)
    }

    /// Picks one character of `text`, returned as a one-character slice.
    ///
    /// Returns `""` for empty input.
    fn choice_str<'a>(&mut self, text: &'a str) -> &'a str {
        let len = text.chars().count();
        let index = (self.fraction() * len as f64) as usize;

        text.char_indices()
            .nth(index)
            .map_or("", |(start, ch)| &text[start..start + ch.len_utf8()])
    }

    /// Returns a timestamp between `start` and `end`, at millisecond
    /// resolution.
    ///
    /// `start` defaults to 100 years before now and `end` to now.
    fn date(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> DateTime<Utc> {
        let now = Utc::now();
        let end = end.unwrap_or(now);
        let start = start.unwrap_or_else(|| {
            now.checked_sub_months(DEFAULT_DATE_WINDOW)
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        });

        let from = start.timestamp_millis() as f64;
        let to = end.timestamp_millis() as f64;
        let millis = from + self.fraction() * (to - from);

        DateTime::from_timestamp_millis(millis as i64).unwrap_or(start)
    }

    /// Returns an integer in `[min, max]`, both ends inclusive.
    ///
    /// With no bounds, use `cardinal(DEFAULT_INTEGER_MAX)`; with only an
    /// upper bound, use [`cardinal`](Self::cardinal).
    fn integer(&mut self, min: i64, max: i64) -> i64 {
        let width = max as f64 - min as f64 + 1.0;
        let value = ((self.fraction() * width).floor() + min as f64) as i64;

        if min <= max { value.min(max) } else { value }
    }

    /// Returns an integer in `[0, max]`; same as `integer(0, max)`.
    fn cardinal(&mut self, max: i64) -> i64 {
        self.integer(0, max)
    }

    /// Returns a number in `[min, max)`; the upper bound is exclusive,
    /// unlike [`integer`](Self::integer).
    ///
    /// With no bounds this is [`fraction`](Self::fraction); with only an
    /// upper bound, pass `0.0` as `min`.
    fn number(&mut self, min: f64, max: f64) -> f64 {
        min + self.fraction() * (max - min)
    }

    /// Returns a number in `[0, max]` rounded to `precision` decimal places.
    ///
    /// Rounding can land exactly on `max`.
    fn decimal(&mut self, precision: u32, max: f64) -> f64 {
        let factor = 10f64.powi(precision as i32);
        // Half-up rounding, not half-away-from-zero.
        (self.fraction() * max * factor + 0.5).floor() / factor
    }

    /// Returns a number in `[min, max)`.
    fn from_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.fraction() * (max - min)
    }

    /// Builds an independent seeded [`Alea`] generator.
    ///
    /// Fails with [`RandomError::NoSeeds`] when `seeds` is empty.
    fn create_with_seeds<I, S>(&self, seeds: I) -> Result<Alea>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<Seed>,
    {
        create_with_seeds(seeds)
    }
}

impl<G: RandomGenerator + ?Sized> RandomGenerator for Box<G> {
    fn fraction(&mut self) -> f64 {
        (**self).fraction()
    }

    fn hex_string(&mut self, digits: usize) -> String {
        (**self).hex_string(digits)
    }

    fn uuid(&mut self) -> String {
        (**self).uuid()
    }
}

/// Builds a seeded [`Alea`] generator, rejecting an empty seed list.
pub fn create_with_seeds<I, S>(seeds: I) -> Result<Alea>
where
    I: IntoIterator<Item = S>,
    S: Into<Seed>,
{
    let seeds: Vec<Seed> = seeds.into_iter().map(Into::into).collect();

    if seeds.is_empty() {
        return Err(RandomError::NoSeeds);
    }

    Ok(Alea::new(seeds))
}

/// Builds a version 4 UUID from 16 draws of `generator`.
///
/// Each byte is `floor(fraction() * 256)`; the version nibble and variant
/// bits are then forced per RFC 4122. Adapters that override
/// [`RandomGenerator::uuid`] fall back to this.
pub fn derive_uuid<G: RandomGenerator + ?Sized>(generator: &mut G) -> String {
    let mut bytes = [0u8; 16];
    for byte in bytes.iter_mut() {
        *byte = (generator.fraction() * 256.0) as u8;
    }

    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn random_string<G: RandomGenerator + ?Sized>(
    generator: &mut G,
    chars: usize,
    alphabet: &str,
) -> String {
    let mut out = String::with_capacity(chars);
    for _ in 0..chars {
        out.push_str(generator.choice_str(alphabet));
    }
    out
}
