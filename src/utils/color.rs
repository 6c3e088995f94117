use eframe::egui::Color32;

/// Packed `0xAARRGGBB` color, the way the paint objects store it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Construct from a packed ARGB value as-is.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Construct a fully opaque color from 0-255 channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Same RGB channels with the alpha forced to `0xFF`.
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    /// Convert to egui's 8-bit color format.
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Convert from egui's 8-bit color format.
    pub fn from_color32(c: Color32) -> Self {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Parse any CSS color string (`#ff8800`, `rebeccapurple`, `rgb(...)`).
    pub fn parse(s: &str) -> Result<Self, csscolorparser::ParseColorError> {
        let [r, g, b, a] = csscolorparser::parse(s)?.to_rgba8();
        Ok(Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
