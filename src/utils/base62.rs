//! Base62 codec mapping database ids to short codes.
//!
//! The alphabet is digits, then lowercase, then uppercase. The order is part
//! of the wire format: every code ever issued decodes against this exact
//! sequence, so it must never be reordered.

/// Ordered base62 alphabet. Index in this slice is the digit value.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: i64 = 62;

/// Encodes a positive id as its minimal base62 representation.
///
/// Ids come from the `short_links` sequence and are always positive. For
/// `id <= 0` this returns `"0"` as a defensive fallback; `0` is never a
/// stored id, so such a code can never resolve.
pub fn encode(id: i64) -> String {
    if id <= 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut n = id;
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Decodes a base62 short code back to its numeric id.
///
/// Returns the sentinel `0` for anything that is not a well-formed code:
/// the empty string, any out-of-alphabet character, or a code long enough
/// to overflow `i64` (no issuable code ever does). Since id `0` never
/// exists in storage, callers treat `0` as "not found".
pub fn decode(code: &str) -> i64 {
    let mut id: i64 = 0;
    for c in code.chars() {
        let Some(value) = digit_value(c) else {
            return 0;
        };
        id = match id.checked_mul(BASE).and_then(|n| n.checked_add(value)) {
            Some(n) => n,
            None => return 0,
        };
    }
    id
}

fn digit_value(c: char) -> Option<i64> {
    match c {
        '0'..='9' => Some(c as i64 - '0' as i64),
        'a'..='z' => Some(c as i64 - 'a' as i64 + 10),
        'A'..='Z' => Some(c as i64 - 'A' as i64 + 36),
        _ => None,
    }
}
