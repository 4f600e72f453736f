use palette::{LinSrgb, Mix, Srgb};

/// Straight-alpha sRGB color, the `rgba()` of a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Opaque color as written to an output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_linear(self) -> LinSrgb {
        Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear()
    }

    fn from_linear(color: LinSrgb) -> Self {
        let srgb: Srgb<u8> = Srgb::<f32>::from_linear(color).into_format();
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scale the alpha channel, e.g. by the opacity of a fading ancestor.
    pub fn fade(self, opacity: f32) -> Self {
        self.with_alpha(self.a * opacity.clamp(0.0, 1.0))
    }

    pub fn opaque(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Source-over composite onto an opaque backdrop, blended in linear light.
    pub fn over(self, backdrop: Rgb) -> Rgb {
        let alpha = self.a.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return backdrop;
        }
        let mixed = backdrop.to_linear().mix(self.opaque().to_linear(), alpha);
        Rgb::from_linear(mixed)
    }

    /// Interpolate towards `other` (t in 0.0..=1.0).
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let rgb = Rgb::from_linear(self.opaque().to_linear().mix(other.opaque().to_linear(), t));
        Color {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: self.a + (other.a - self.a) * t,
        }
    }
}
