//! Locale-aware number formatting.
//!
//! The original report formatted every figure with `ar-EG` conventions:
//! Eastern Arabic-Indic digits and the Arabic thousands separator. English
//! gets ASCII digits with comma grouping.
use crate::lang::Language;

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABIC_SEPARATOR: char = '٬';

/// Format `n` with thousands grouping for `lang`.
pub fn group_digits(n: u64, lang: Language) -> String {
    let digits = n.to_string();
    let sep = match lang {
        Language::Ar => ARABIC_SEPARATOR,
        Language::En => ',',
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        match lang {
            Language::Ar => out.push(ARABIC_DIGITS[c as usize - '0' as usize]),
            Language::En => out.push(c),
        }
    }
    out
}

/// Same grouping for chart values, truncating the fraction. Chart series are
/// whole counts in practice; negatives are clamped to zero.
pub fn group_f64(v: f64, lang: Language) -> String {
    group_digits(v.max(0.0) as u64, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn english_grouping() {
        assert_eq!(group_digits(0, Language::En), "0");
        assert_eq!(group_digits(999, Language::En), "999");
        assert_eq!(group_digits(1_000, Language::En), "1,000");
        assert_eq!(group_digits(1_234_567, Language::En), "1,234,567");
    }

    #[test]
    fn arabic_grouping_uses_arabic_indic_digits() {
        assert_eq!(group_digits(7, Language::Ar), "٧");
        assert_eq!(group_digits(1_000, Language::Ar), "١٬٠٠٠");
        assert_eq!(group_digits(120, Language::Ar), "١٢٠");
    }

    #[test]
    fn float_values_truncate() {
        assert_eq!(group_f64(1234.9, Language::En), "1,234");
        assert_eq!(group_f64(-5.0, Language::En), "0");
    }
}
