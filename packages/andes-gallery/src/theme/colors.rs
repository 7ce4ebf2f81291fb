//! Color conversion between stylesheet colors and GPUI

use andes_message::Color;
use gpui::Hsla;

/// Convert a stylesheet color to Hsla
pub fn hsla(color: Color) -> Hsla {
    rgb_to_hsla(color.r, color.g, color.b, color.a)
}

/// Convert RGB to HSLA
fn rgb_to_hsla(r: u8, g: u8, b: u8, a: u8) -> Hsla {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;
    let a = a as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        Hsla {
            h: 0.0,
            s: 0.0,
            l,
            a,
        }
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            let h = (g - b) / d;
            if g < b { h + 6.0 } else { h }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsla {
            h: h / 6.0,
            s,
            l,
            a,
        }
    }
}

/// Set the alpha of a color
pub fn with_alpha(color: Hsla, alpha: f32) -> Hsla {
    Hsla { a: alpha, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andes_message::color::hex;

    #[test]
    fn test_hsla_conversion() {
        let white = hsla(hex("#ffffff"));
        assert!((white.l - 1.0).abs() < 0.01);

        let black = hsla(hex("#000000"));
        assert!((black.l - 0.0).abs() < 0.01);

        let red = hsla(hex("#ff0000"));
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_alpha_is_carried() {
        let translucent = hsla(hex("#3483fa80"));
        assert!((translucent.a - 128.0 / 255.0).abs() < 0.01);
        assert!((with_alpha(translucent, 1.0).a - 1.0).abs() < 0.01);
    }
}
