//! Locale-aware name comparison used by the name sort.
//!
//! Approximates root-locale collation in three strengths:
//!
//! 1. **Primary**: letters compared case-folded with diacritics stripped
//!    (`"éclair"` sorts next to `"eclair"`, not after `"z"`).
//! 2. **Secondary**: unaccented before accented.
//! 3. **Tertiary**: lowercase before uppercase.
//!
//! Remaining ties fall back to code-point order so the comparison is total.

use std::cmp::Ordering;

/// Compare two names the way a user expects them listed A to Z.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(primary_key(right))
        .then_with(|| secondary_key(left).cmp(secondary_key(right)))
        .then_with(|| tertiary_key(left).cmp(tertiary_key(right)))
        .then_with(|| left.cmp(right))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(strip_diacritic)
}

fn secondary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|ch| strip_diacritic(ch) != ch)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Base letter for common Latin accented characters (Latin-1 Supplement and
/// Latin Extended-A, lowercase input). Other characters pass through.
fn strip_diacritic(ch: char) -> char {
    match ch {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn case_does_not_split_alphabet() {
        assert_eq!(
            sorted(vec!["banana", "Cherry", "apple", "Banana"]),
            vec!["apple", "banana", "Banana", "Cherry"]
        );
    }

    #[test]
    fn accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(vec!["zebra", "éclair", "eclair", "Ångström", "apple"]),
            vec!["Ångström", "apple", "eclair", "éclair", "zebra"]
        );
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_compare("Mug", "Mug Set"), Ordering::Less);
        assert_eq!(locale_compare("Mug Set", "Mug"), Ordering::Greater);
    }

    #[test]
    fn equal_only_for_identical_strings() {
        assert_eq!(locale_compare("Lamp", "Lamp"), Ordering::Equal);
        assert_ne!(locale_compare("Lamp", "lamp"), Ordering::Equal);
    }

    #[test]
    fn antisymmetric_on_samples() {
        let samples = ["a", "A", "á", "Á", "b", "ab", "Ab", "résumé", "resume"];
        for l in samples {
            for r in samples {
                assert_eq!(locale_compare(l, r), locale_compare(r, l).reverse(), "{l} vs {r}");
            }
        }
    }
}
