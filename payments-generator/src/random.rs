use chrono::Duration;
use rand::{Rng, RngCore};
use uuid::Builder;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHABETIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// The only capability the generator needs from a source of randomness.
///
/// Every [`RngCore`] is a `RandomSource`, so both `thread_rng()` and a seeded
/// `StdRng` can drive generation.
pub trait RandomSource {
    /// Returns a float uniformly distributed in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// `floor(r * len)`, clamped so a source returning exactly `1.0` stays in bounds
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn random_index(rng: &mut impl RandomSource, len: usize) -> usize {
    ((rng.next_f64() * len as f64).floor() as usize).min(len - 1)
}

#[must_use]
pub fn random_digit(rng: &mut impl RandomSource) -> u8 {
    // 10 always fits in a u8
    #[allow(clippy::cast_possible_truncation)]
    let digit = random_index(rng, 10) as u8;
    digit
}

/// Both bounds are inclusive. `min` must not be greater than `max`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn random_int_inclusive(rng: &mut impl RandomSource, min: u32, max: u32) -> u32 {
    let span = (max - min) as usize + 1;
    min + random_index(rng, span) as u32
}

/// `charset` must not be empty when `len` is non-zero
#[must_use]
pub fn random_string(rng: &mut impl RandomSource, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(charset[random_index(rng, charset.len())]))
        .collect()
}

#[must_use]
pub fn random_uppercase_string(rng: &mut impl RandomSource, len: usize) -> String {
    random_string(rng, UPPERCASE, len)
}

/// Mixed-case letters only, no digits
#[must_use]
pub fn random_alphabetic_string(rng: &mut impl RandomSource, len: usize) -> String {
    random_string(rng, ALPHABETIC, len)
}

/// A plate shaped like `AB12CDE`
#[must_use]
pub fn random_vrn(rng: &mut impl RandomSource) -> String {
    let prefix = random_uppercase_string(rng, 2);
    let first = random_digit(rng);
    let second = random_digit(rng);
    let suffix = random_uppercase_string(rng, 3);
    format!("{}{}{}{}", prefix, first, second, suffix)
}

/// Lowercase, hyphenated `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` where `y` is one of `8`, `9`,
/// `a` or `b`. Unique only with high probability.
#[must_use]
pub fn uuid_v4(rng: &mut impl RandomSource) -> String {
    let mut bytes = [0_u8; 16];
    for byte in &mut bytes {
        // 256 possible indexes, each fits in a u8
        #[allow(clippy::cast_possible_truncation)]
        let value = random_index(rng, 256) as u8;
        *byte = value;
    }
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// A duration uniformly spread over `[0, days)`, with millisecond precision
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn random_offset_within_days(rng: &mut impl RandomSource, days: u32) -> Duration {
    let millis = (rng.next_f64() * MILLIS_PER_DAY * f64::from(days)).floor();
    Duration::milliseconds(millis as i64)
}
