//! Named drawing surfaces and pixel helpers
//!
//! A `Surface` is a small ARGB framebuffer standing in for a page canvas.
//! Collaborators draw onto surfaces by name; the dropdown subsystem never
//! touches them.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Linear interpolation between two colors, `t` in `0.0..=1.0`
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Blend a source pixel (with alpha) onto a destination pixel
///
/// Both colors are in ARGB format. The source alpha determines the blend
/// ratio; the result alpha is the "over" composite of both alphas.
#[inline]
pub fn blend_pixel(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 {
        return src;
    }

    let inv_alpha = 255 - alpha;
    let dst_alpha = (dst >> 24) & 0xFF;

    let r = ((((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let g = ((((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let b = (((src & 0xFF) * alpha + (dst & 0xFF) * inv_alpha) / 255) & 0xFF;
    let a = (alpha + dst_alpha * inv_alpha / 255).min(255);

    (a << 24) | (r << 16) | (g << 8) | b
}

/// A fixed-size ARGB framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Surface {
    /// Create a fully transparent surface
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = 0);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Replace a pixel, ignoring out-of-bounds coordinates
    pub fn put(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            if let Some(p) = self.pixels.get_mut(y * self.width + x) {
                *p = color;
            }
        }
    }

    /// Composite a pixel over the existing content
    pub fn blend(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            if let Some(p) = self.pixels.get_mut(y * self.width + x) {
                *p = blend_pixel(color, *p);
            }
        }
    }

    /// Number of pixels that are not fully transparent
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| (*p >> 24) != 0).count()
    }
}
