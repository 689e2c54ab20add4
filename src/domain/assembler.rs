//! Assembles fully qualified candidate domains from roots and TLDs.

/// Static TLD list the assembler crosses every root with.
///
/// Treated as configuration: order is stable and observable in the
/// assembler output.
pub const TLDS: [&str; 28] = [
    "io", "dev", "app", "ai", "co", "me", "us", "to", "sh", "gg", "so", "xyz", "net", "org", "com",
    "cc", "tv", "fm", "in", "it", "is", "ly", "be", "at", "ch", "de", "gl", "vc",
];

/// Cross product of roots and TLDs as `root.tld` strings.
///
/// The TLD varies fastest: all TLDs for the first root, then all TLDs for
/// the second, and so on. Output length is exactly `roots.len() * tlds.len()`;
/// nothing is filtered or deduplicated here.
pub fn assemble<R, T>(roots: &[R], tlds: &[T]) -> Vec<String>
where
    R: AsRef<str>,
    T: AsRef<str>,
{
    let mut out = Vec::with_capacity(roots.len() * tlds.len());
    for root in roots {
        for tld in tlds {
            out.push(format!("{}.{}", root.as_ref(), tld.as_ref()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_length_is_product() {
        let roots = ["aa", "ab", "zz"];
        let out = assemble(&roots, &TLDS);
        assert_eq!(out.len(), roots.len() * TLDS.len());
    }

    #[test]
    fn test_assemble_tld_varies_fastest() {
        let out = assemble(&["ab"], &["io", "dev"]);
        assert_eq!(out, vec!["ab.io".to_string(), "ab.dev".to_string()]);
    }

    #[test]
    fn test_assemble_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(assemble(&none, &TLDS).is_empty());
        assert!(assemble(&["ab"], &none).is_empty());
    }

    #[test]
    fn test_tld_list_has_28_entries() {
        assert_eq!(TLDS.len(), 28);
    }
}
