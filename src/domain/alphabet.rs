//! The fixed symbol alphabet every generator enumerates over.
//!
//! Order matters: it defines the enumeration order of every generated
//! category, so the same alphabet always produces the same sequences.

/// The 36 symbols candidate roots are built from: `a`–`z` then `0`–`9`.
///
/// No duplicates; the array order is the canonical enumeration order.
pub const SYMBOLS: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Number of symbols in the alphabet.
pub const SYMBOL_COUNT: usize = SYMBOLS.len();

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_36_unique_symbols() {
        assert_eq!(SYMBOL_COUNT, 36);

        let unique: HashSet<char> = SYMBOLS.iter().copied().collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn test_alphabet_is_lowercase_letters_then_digits() {
        assert!(SYMBOLS[..26].iter().all(|c| c.is_ascii_lowercase()));
        assert!(SYMBOLS[26..].iter().all(|c| c.is_ascii_digit()));
        assert_eq!(SYMBOLS[0], 'a');
        assert_eq!(SYMBOLS[25], 'z');
        assert_eq!(SYMBOLS[26], '0');
        assert_eq!(SYMBOLS[35], '9');
    }
}
