//! Shade-to-colour mapping
//!
//! A palette blends between two endpoint colours. Note the direction: shade 0
//! gives `one` and shade 1 gives `zero`, so nearer geometry takes the `zero`
//! colour.

use polyview_math::GeometryError;

/// Two-colour linear palette
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    zero: [f64; 3],
    one: [f64; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self::BLUE
    }
}

impl Palette {
    /// Blue to white
    pub const BLUE: Palette = Palette {
        zero: [0.0, 0.0, 1.0],
        one: [1.0, 1.0, 1.0],
    };

    /// Create a palette from two RGB colours with components in [0, 1]
    ///
    /// # Errors
    ///
    /// [`GeometryError::OutOfRange`] with the first offending component.
    pub fn new(zero: [f64; 3], one: [f64; 3]) -> Result<Self, GeometryError> {
        for component in zero.iter().chain(one.iter()) {
            if !(0.0..=1.0).contains(component) {
                return Err(GeometryError::OutOfRange(*component));
            }
        }
        Ok(Self { zero, one })
    }

    pub fn zero(&self) -> [f64; 3] {
        self.zero
    }

    pub fn one(&self) -> [f64; 3] {
        self.one
    }

    /// Map a shade in [0, 1] to an 8-bit RGB triple
    ///
    /// Channels are rounded half to even, so 127.5 becomes 128 and 0.5
    /// becomes 0.
    ///
    /// # Errors
    ///
    /// [`GeometryError::OutOfRange`] if `c` is outside [0, 1] or NaN.
    pub fn color(&self, c: f64) -> Result<[u8; 3], GeometryError> {
        if !(0.0..=1.0).contains(&c) {
            return Err(GeometryError::OutOfRange(c));
        }

        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let precise = (1.0 - c) * self.one[channel] + c * self.zero[channel];
            *out = (precise * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;
        }
        Ok(rgb)
    }

    /// [`color`](Self::color) with an opaque alpha channel
    pub fn color_rgba(&self, c: f64) -> Result<[u8; 4], GeometryError> {
        let [r, g, b] = self.color(c)?;
        Ok([r, g, b, 255])
    }
}
