use crate::config::DisplayConfig;
use crate::types::BrandColor;
use crossterm::style::{Color, Stylize};

/// Rule characters for headers and table separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Horizontal rule of `width` characters
pub fn format_rule(width: usize, display: &DisplayConfig) -> String {
    display.box_chars.horizontal.repeat(width)
}

/// Truecolor block painted in `color`, empty when swatches are disabled
pub fn swatch(color: BrandColor, width: usize, display: &DisplayConfig) -> String {
    if !display.show_swatches {
        return String::new();
    }
    let fill = Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    };
    " ".repeat(width).on(fill).to_string()
}

/// Hex followed by a swatch, the standard way a color is printed
pub fn format_color(color: BrandColor, display: &DisplayConfig) -> String {
    let block = swatch(color, 4, display);
    if block.is_empty() {
        color.to_hex()
    } else {
        format!("{} {}", color.to_hex(), block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            show_swatches: false,
            box_chars: BoxChars::ascii(),
        }
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n═══════════\n");
    }

    #[test]
    fn test_format_header_ascii() {
        let display = ascii_display();
        assert_eq!(format_header("MLB", false, &display), "MLB\n---\n");
        assert_eq!(format_header("MLB", true, &display), "MLB\n===\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig::default();
        let result = format_header("", false, &display);
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_swatch_disabled() {
        let display = ascii_display();
        assert_eq!(swatch(BrandColor::WHITE, 4, &display), "");
        assert_eq!(format_color(BrandColor::SENTINEL, &display), "#666666");
    }

    #[test]
    fn test_swatch_uses_truecolor_background() {
        // crossterm drops color codes entirely under NO_COLOR
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let display = DisplayConfig::default();
        let block = swatch(BrandColor::new(19, 36, 72), 2, &display);
        assert!(block.contains("48;2;19;36;72"), "{:?}", block);
        assert!(format_color(BrandColor::new(19, 36, 72), &display).starts_with("#132448 "));
    }

    #[test]
    fn test_format_rule() {
        assert_eq!(format_rule(3, &ascii_display()), "---");
        assert_eq!(format_rule(2, &DisplayConfig::default()), "──");
    }
}
