/// Field escaping for the `$`-joined transport form.
///
/// `$` is the field delimiter, so a literal `$` becomes a placeholder
/// token. Path separators get swapped for control characters instead of
/// percent-escapes: intermediate proxies have been seen decoding `%2F`
/// back to `/` before this code ever runs, which would corrupt field
/// boundaries for namespaces and group names that contain slashes. The
/// control characters survive a percent-encode/decode round trip intact.
///
/// Known risk, inherited from the previous implementation: a name that
/// legitimately contains U+001F, U+001E or the literal placeholder token
/// will not round-trip.
const DOLLAR_TOKEN: &str = "_DOLLAR_";
const SLASH_MARK: &str = "\u{1f}";
const BACKSLASH_MARK: &str = "\u{1e}";

pub fn escape_field(value: &str) -> String {
    value
        .replace('$', DOLLAR_TOKEN)
        .replace('/', SLASH_MARK)
        .replace('\\', BACKSLASH_MARK)
}

/// Inverse of [`escape_field`]. Also accepts regular percent-escapes for
/// the path separators (`%2F`, `%5C`), which upstream layers sometimes
/// leave intact as an alternate encoding.
pub fn unescape_field(value: &str) -> String {
    value
        .replace(SLASH_MARK, "/")
        .replace("%2F", "/")
        .replace("%2f", "/")
        .replace(BACKSLASH_MARK, "\\")
        .replace("%5C", "\\")
        .replace("%5c", "\\")
        .replace(DOLLAR_TOKEN, "$")
}
