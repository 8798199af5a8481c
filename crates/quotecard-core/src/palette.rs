//! The fixed background color palette.
//!
//! Seventeen colors, in display order. Custom colors are not
//! supported; the picker only ever offers these values.

/// Palette colors in display order.
pub const COLORS: [&str; 17] = [
    "#2CFFB4",
    "#2CD8FF",
    "#2C94FF",
    "#312CFF",
    "#782CFF",
    "#A92CFF",
    "#D62CFF",
    "#FF2CD5",
    "#FF2C6F",
    "#FF2C2C",
    "#FF5F2C",
    "#FF8D2C",
    "#FFC32C",
    "#FFE82C",
    "#CAFF2C",
    "#85FF2C",
    "#2CFF95",
];

/// Default background color: the first palette entry.
pub const DEFAULT: &str = COLORS[0];

/// Whether `color` is a member of the palette.
#[must_use]
pub fn contains(color: &str) -> bool {
    COLORS.iter().any(|c| *c == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_seventeen_unique_colors() {
        let mut seen = std::collections::HashSet::new();
        for color in COLORS {
            assert!(seen.insert(color), "duplicate palette color: {color}");
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn palette_entries_are_hex_rgb() {
        for color in COLORS {
            assert_eq!(color.len(), 7, "{color} is not #RRGGBB");
            assert!(color.starts_with('#'), "{color} is missing the # prefix");
            assert!(
                color[1..].bytes().all(|b| b.is_ascii_hexdigit()),
                "{color} contains a non-hex digit"
            );
        }
    }

    #[test]
    fn default_is_the_first_entry() {
        assert_eq!(DEFAULT, COLORS[0]);
        assert_eq!(DEFAULT, "#2CFFB4");
        assert!(contains(DEFAULT));
    }

    #[test]
    fn contains_rejects_foreign_colors() {
        assert!(!contains("#123456"));
        assert!(!contains(""));
        // Palette membership is exact, not case-insensitive.
        assert!(!contains("#2cffb4"));
    }
}
