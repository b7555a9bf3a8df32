use crate::foundation::core::Point;

/// 64-bit FNV-1a hasher.
///
/// Identity-derived values must be reproducible across runs and platforms; `std::hash` is not.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// FNV-1a over the UTF-8 bytes of `s`.
pub(crate) fn fnv1a64_str(s: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(s.as_bytes());
    h.finish()
}

/// Componentwise linear interpolation; `t` is not clamped.
#[inline]
pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
