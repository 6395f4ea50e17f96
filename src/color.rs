// Simple color struct, created from an unsigned 32 representing RRGGBB
// and formatted as a CSS rgba() string for canvas styles

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b }
    }

    pub fn to_rgba(&self, alpha: f64) -> String {
        let alpha = alpha.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_channels() {
        let c = Color::from_u32(0x6f80ff);
        assert_eq!(c, Color { r: 111, g: 128, b: 255 });
    }

    #[test]
    fn formats_css_rgba() {
        let c = Color::from_u32(0x6f80ff);
        assert_eq!(c.to_rgba(0.8), "rgba(111, 128, 255, 0.8)");
        assert_eq!(c.to_rgba(0.0), "rgba(111, 128, 255, 0)");
    }

    #[test]
    fn alpha_is_clamped() {
        let c = Color::from_u32(0x000000);
        assert_eq!(c.to_rgba(1.5), "rgba(0, 0, 0, 1)");
        assert_eq!(c.to_rgba(-0.2), "rgba(0, 0, 0, 0)");
    }
}
