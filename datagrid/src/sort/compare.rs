//! Type-aware comparison of cell values.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::SortDirection;
use crate::model::CellValue;

/// Result of comparing two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The values have a defined order.
    Ordered(Ordering),
    /// The value types cannot be compared. Sorts treat this as equal.
    Incomparable {
        left: &'static str,
        right: &'static str,
    },
}

impl Comparison {
    /// Ordering to sort by; incomparable pairs are equal.
    pub fn ordering(self) -> Ordering {
        match self {
            Comparison::Ordered(ord) => ord,
            Comparison::Incomparable { .. } => Ordering::Equal,
        }
    }

    pub fn is_incomparable(self) -> bool {
        matches!(self, Comparison::Incomparable { .. })
    }
}

/// Compare two cells for a sort in `direction`.
///
/// - absent (missing or null) sorts last ascending, first descending;
///   two absent values are equal
/// - text: locale-style comparison, see [`locale_cmp`]
/// - number, bool (`false < true`), date: natural order
/// - lists: by first element when both are strings, else equal
/// - any other pairing is [`Comparison::Incomparable`]
pub fn compare(a: Option<&CellValue>, b: Option<&CellValue>, direction: SortDirection) -> Comparison {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    // Absent ranks above every present value, so it lands last ascending
    // and, after the reversal below, first descending.
    let ascending = match (a, b) {
        (None, None) => Comparison::Ordered(Ordering::Equal),
        (None, Some(_)) => Comparison::Ordered(Ordering::Greater),
        (Some(_), None) => Comparison::Ordered(Ordering::Less),
        (Some(a), Some(b)) => compare_present(a, b),
    };

    match (ascending, direction) {
        (Comparison::Ordered(ord), SortDirection::Descending) => Comparison::Ordered(ord.reverse()),
        (other, _) => other,
    }
}

fn compare_present(a: &CellValue, b: &CellValue) -> Comparison {
    let ord = match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => locale_cmp(a, b),
        (CellValue::Number(a), CellValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
        (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
        // Multi-select cells: first element only. Anything else is equal.
        (CellValue::List(a), CellValue::List(b)) => match (a.first(), b.first()) {
            (Some(a), Some(b)) => locale_cmp(a, b),
            _ => Ordering::Equal,
        },
        _ => {
            return Comparison::Incomparable {
                left: a.type_name(),
                right: b.type_name(),
            };
        }
    };
    Comparison::Ordered(ord)
}

/// Locale-style string ordering.
///
/// Letters compare on their base form first, ignoring accents and case
/// ("Émile" < "Zoe"). Ties are broken by accent, unaccented first, then
/// by case, lowercase first ("e" < "é" < "É").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowered(a).cmp(lowered(b)))
        // Reversed raw comparison puts lowercase ahead on ties.
        .then_with(|| b.nfd().cmp(a.nfd()))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowered(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_cmp_case_insensitive_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zed", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_wins_ties() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_folds_accents() {
        assert_eq!(locale_cmp("é", "f"), Ordering::Less);
        assert_eq!(locale_cmp("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
        assert_eq!(locale_cmp("é", "É"), Ordering::Less);
        // Precomposed and decomposed forms are the same string.
        assert_eq!(locale_cmp("\u{e9}", "e\u{301}"), Ordering::Equal);
    }
}
