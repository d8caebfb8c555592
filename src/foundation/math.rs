/// Polynomial string hash (`h = h * 31 + unit`) over UTF-16 code units,
/// wrapped to 32-bit signed arithmetic and folded to its absolute value.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringHash(i32);

impl StringHash {
    const MULTIPLIER: i32 = 31;

    /// Start an empty hash.
    pub fn new() -> Self {
        Self(0)
    }

    /// Feed a string.
    pub fn write_str(&mut self, s: &str) {
        for unit in s.encode_utf16() {
            self.write_unit(unit);
        }
    }

    /// Feed a single UTF-16 code unit.
    pub fn write_unit(&mut self, unit: u16) {
        self.0 = self
            .0
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(i32::from(unit));
    }

    /// Non-negative hash value. `i32::MIN` folds to `2^31`.
    pub fn finish(self) -> u32 {
        self.0.unsigned_abs()
    }
}

/// Hash `label` followed by `salt` into a generator seed.
pub fn seed_for_label(label: &str, salt: &str) -> u32 {
    let mut h = StringHash::new();
    h.write_str(label);
    h.write_str(salt);
    h.finish()
}

/// Linear congruential generator producing floats in `[0, 1)`.
///
/// The constants are part of the layout reproducibility contract: changing them
/// moves every placement on the page.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Multiplier `A`.
    pub const MULTIPLIER: u64 = 9301;
    /// Increment `C`.
    pub const INCREMENT: u64 = 49297;
    /// Modulus `M`.
    pub const MODULUS: u64 = 233_280;

    /// Seed the generator; the first output already advances past the seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }

    /// Uniform draw in `[lo, hi]`; a degenerate range still consumes one value.
    pub fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
