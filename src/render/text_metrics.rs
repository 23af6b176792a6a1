use crate::render::FontSpec;

/// Measured extent of one line of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Font metrics lookup used by label placement.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> TextSize;
}

/// Deterministic, backend-independent glyph-width estimate.
///
/// Height is the font line height so placement matches what a real
/// backend reports for single-line labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> TextSize {
        if text.is_empty() {
            return TextSize {
                width: 0.0,
                height: font.line_height_px,
            };
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextSize {
            width: units * font.size_px,
            height: font.line_height_px,
        }
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: FontSpec) -> TextSize {
        (**self).measure(text, font)
    }
}
