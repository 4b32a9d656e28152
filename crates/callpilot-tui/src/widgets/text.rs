//! Small text formatting helpers shared by widgets

use unicode_width::UnicodeWidthStr;

/// Mask character for passwords
pub const MASK_CHAR: char = '•';

/// `$1,234.50`
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// `1,247`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One mask character per input character
pub fn mask(text: &str) -> String {
    text.chars().map(|_| MASK_CHAR).collect()
}

/// Truncate to `max` display columns, adding an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(21.5), "$21.50");
        assert_eq!(format_money(2847.5), "$2,847.50");
        assert_eq!(format_money(7152.5), "$7,152.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-3.25), "-$3.25");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1247), "1,247");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("parol"), "•••••");
        assert_eq!(mask("şifr"), "••••");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Shikoyat", 20), "Shikoyat");
        assert_eq!(truncate("Mahsulot haqida so'rov", 10), "Mahsulot …");
        assert_eq!(truncate("abc", 0), "");
    }
}
