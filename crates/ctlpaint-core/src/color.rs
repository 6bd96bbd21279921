//! RGBA colors and HLS shading
//!
//! Border shading (3D inset/outset edges) is done in HLS space on the
//! classic 0..=240 scale: the hue and saturation of a base color are kept
//! while its luminosity is pushed towards a shadow or a highlight.
//!
//! 32-bit pixels are packed as `0xRRGGBBAA` (red in MSB, alpha in LSB).

/// Upper bound of the hue/luminosity/saturation scale
pub const HLS_MAX: i32 = 240;
/// Upper bound of an RGB channel
pub const RGB_MAX: i32 = 255;
/// Hue assigned to achromatic colors
pub const HUE_UNDEFINED: i32 = HLS_MAX * 2 / 3;

/// Luminosity adjustment (per mille) that produces the shadow tone
const SHADOW_ADJ: i32 = -333;
/// Luminosity adjustment (per mille) that produces the highlight tone
const HIGHLIGHT_ADJ: i32 = 500;

/// Shift amounts for packing channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Black color
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White color
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Mid gray
    pub const GRAY: Color = Color::new(128, 128, 128);
    /// Default face color of a 3D control
    pub const CONTROL: Color = Color::new(240, 240, 240);
    /// Red color
    pub const RED: Color = Color::new(255, 0, 0);
    /// Green color
    pub const GREEN: Color = Color::new(0, 255, 0);
    /// Blue color
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// True when the color has no transparency
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
            | ((self.a as u32) << ALPHA_SHIFT)
    }

    /// Decompose a 32-bit RGBA pixel
    pub fn from_pixel32(pixel: u32) -> Self {
        Self {
            r: ((pixel >> RED_SHIFT) & 0xff) as u8,
            g: ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            b: ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            a: ((pixel >> ALPHA_SHIFT) & 0xff) as u8,
        }
    }

    /// Convert to HLS (alpha is dropped).
    pub fn to_hls(&self) -> Hls {
        let r = self.r as i32;
        let g = self.g as i32;
        let b = self.b as i32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let luminosity = (sum * HLS_MAX + RGB_MAX) / (2 * RGB_MAX);

        let dif = max - min;
        if dif == 0 {
            return Hls {
                hue: HUE_UNDEFINED,
                luminosity,
                saturation: 0,
            };
        }

        let saturation = if luminosity <= HLS_MAX / 2 {
            (dif * HLS_MAX + sum / 2) / sum
        } else {
            let rest = 2 * RGB_MAX - sum;
            (dif * HLS_MAX + rest / 2) / rest
        };

        let delta = |c: i32| ((max - c) * (HLS_MAX / 6) + dif / 2) / dif;
        let (rd, gd, bd) = (delta(r), delta(g), delta(b));

        let mut hue = if r == max {
            bd - gd
        } else if g == max {
            HLS_MAX / 3 + rd - bd
        } else {
            2 * HLS_MAX / 3 + gd - rd
        };
        if hue < 0 {
            hue += HLS_MAX;
        }
        if hue > HLS_MAX {
            hue -= HLS_MAX;
        }

        Hls {
            hue,
            luminosity,
            saturation,
        }
    }

    /// Darker tone of this color.
    ///
    /// `percent = 0.0` gives the shadow tone (two thirds of the original
    /// luminosity), `percent = 1.0` gives black.
    pub fn dark(&self, percent: f32) -> Color {
        let hls = self.to_hls();
        let zero = new_luma(hls.luminosity, SHADOW_ADJ);
        let luminosity = zero - (zero as f32 * percent) as i32;
        Hls {
            luminosity,
            ..hls
        }
        .to_color(self.a)
    }

    /// Lighter tone of this color.
    ///
    /// `percent = 0.0` keeps the original luminosity, `percent = 1.0` gives
    /// the highlight tone.
    pub fn light(&self, percent: f32) -> Color {
        let hls = self.to_hls();
        let zero = hls.luminosity;
        let one = new_luma(hls.luminosity, HIGHLIGHT_ADJ);
        let luminosity = zero + ((one - zero) as f32 * percent) as i32;
        Hls {
            luminosity,
            ..hls
        }
        .to_color(self.a)
    }

    /// Darkest tone (`dark(1.0)`)
    pub fn dark_dark(&self) -> Color {
        self.dark(1.0)
    }

    /// Lightest tone (`light(1.0)`)
    pub fn light_light(&self) -> Color {
        self.light(1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Hue / luminosity / saturation, each on `0..=HLS_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hls {
    pub hue: i32,
    pub luminosity: i32,
    pub saturation: i32,
}

impl Hls {
    /// Convert back to RGB with the given alpha.
    pub fn to_color(&self, alpha: u8) -> Color {
        let luminosity = self.luminosity.clamp(0, HLS_MAX);
        let saturation = self.saturation.clamp(0, HLS_MAX);

        if saturation == 0 {
            let v = channel(luminosity * RGB_MAX / HLS_MAX);
            return Color::rgba(v, v, v, alpha);
        }

        let magic2 = if luminosity <= HLS_MAX / 2 {
            (luminosity * (HLS_MAX + saturation) + HLS_MAX / 2) / HLS_MAX
        } else {
            luminosity + saturation - (luminosity * saturation + HLS_MAX / 2) / HLS_MAX
        };
        let magic1 = 2 * luminosity - magic2;

        let scale = |h: i32| channel((hue_to_rgb(magic1, magic2, h) * RGB_MAX + HLS_MAX / 2) / HLS_MAX);
        Color::rgba(
            scale(self.hue + HLS_MAX / 3),
            scale(self.hue),
            scale(self.hue - HLS_MAX / 3),
            alpha,
        )
    }
}

fn channel(v: i32) -> u8 {
    v.clamp(0, RGB_MAX) as u8
}

/// Luminosity moved by `n` per mille towards black (n < 0) or towards the
/// top of the scale (n > 0).
fn new_luma(luminosity: i32, n: i32) -> i32 {
    if n == 0 {
        luminosity
    } else if n > 0 {
        ((luminosity as i64 * (1000 - n) as i64 + (HLS_MAX as i64 + 1) * n as i64) / 1000) as i32
    } else {
        ((luminosity as i64 * (n + 1000) as i64) / 1000) as i32
    }
}

fn hue_to_rgb(n1: i32, n2: i32, mut hue: i32) -> i32 {
    if hue < 0 {
        hue += HLS_MAX;
    }
    if hue > HLS_MAX {
        hue -= HLS_MAX;
    }

    if hue < HLS_MAX / 6 {
        n1 + ((n2 - n1) * hue + HLS_MAX / 12) / (HLS_MAX / 6)
    } else if hue < HLS_MAX / 2 {
        n2
    } else if hue < HLS_MAX * 2 / 3 {
        n1 + ((n2 - n1) * (HLS_MAX * 2 / 3 - hue) + HLS_MAX / 12) / (HLS_MAX / 6)
    } else {
        n1
    }
}
