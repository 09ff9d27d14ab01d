/// 32-bit rolling hash over the UTF-16 code units of a string:
/// `acc = acc * 31 + unit`, wrapping at i32. Identifiers minted by the
/// previous frontend used the same algorithm over `charCodeAt`, so the
/// accumulator runs over UTF-16 units rather than bytes and the result may
/// be negative. Not cryptographic: a compact fingerprint, nothing more.
pub fn fingerprint(value: &str) -> i32 {
    let mut acc: i32 = 0;
    for unit in value.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    acc
}

pub fn fingerprint_string(value: &str) -> String {
    fingerprint(value).to_string()
}
