// Bill number canonicalization

/// Normalize a printed bill number for comparison.
///
/// Uppercases, drops whitespace, dots and dashes, then strips the run of
/// leading zeros that follows the alphabetic prefix, so `"AB 858"`,
/// `"ab-858"` and `"AB0858"` all become `"AB858"`. At least one digit is
/// always kept after the prefix (`"HR000"` becomes `"HR0"`).
pub fn normalize(input: &str) -> String {
    let compact: String = input
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect();

    let prefix_len = compact
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(compact.len());
    if prefix_len == 0 {
        return compact;
    }

    let (prefix, rest) = compact.split_at(prefix_len);
    let zeros = rest.len() - rest.trim_start_matches('0').len();
    if zeros == 0 {
        return compact;
    }

    let tail = &rest[zeros..];
    if tail.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{prefix}{tail}")
    } else if zeros > 1 {
        format!("{prefix}0{tail}")
    } else {
        compact
    }
}
