//! Percent-encoding utilities.
//!
//! Everything in this module is a pure function of its input. Components
//! call [`decode`] once when they are constructed, so that the value they
//! store is in a canonical form, and call [`encode_with`] every time their
//! content is read.

pub mod table;

pub use table::{Rule, Table};

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::str;

/// A mode in which the content of a component is rendered.
///
/// The mode is chosen at every read; it is never stored in a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// The content is returned as stored, without any encoding.
    NoEncoding,
    /// Percent-encoding as specified by [RFC 3986].
    ///
    /// [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-2.1
    #[default]
    Rfc3986,
    /// The human-readable IRI form of [RFC 3987].
    ///
    /// Only control characters are percent-encoded.
    ///
    /// [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/#section-3.2
    Rfc3987,
    /// [`Rfc3986`] with `'+'` and `'~'` encoded as well, for use with the
    /// `application/x-www-form-urlencoded` convention of RFC 1738 where
    /// `'+'` stands for a space.
    ///
    /// [`Rfc3986`]: Self::Rfc3986
    LegacyForm,
}

/// Checks whether both bytes are hexadecimal digits.
pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    table::HEXDIG.allows_ascii(hi) && table::HEXDIG.allows_ascii(lo)
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(is_hexdig_pair(hi, lo));
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Percent-encodes a byte, always with uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use uri_components::pct_enc::encode_byte;
///
/// assert_eq!(encode_byte(b' '), "%20");
/// assert_eq!(encode_byte(0xbf), "%BF");
/// ```
#[must_use]
pub fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Returns the length of the UTF-8 sequence starting with the given byte.
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

/// Checks for a percent-encoded octet at index `i`.
fn pct_encoded_at(bytes: &[u8], i: usize) -> Option<(u8, u8)> {
    if bytes[i] == b'%' && i + 2 < bytes.len() && is_hexdig_pair(bytes[i + 1], bytes[i + 2]) {
        Some((bytes[i + 1], bytes[i + 2]))
    } else {
        None
    }
}

/// Percent-encodes every character not allowed by the table.
///
/// A character is left as is if it is ASCII and the table [allows] it.
/// Otherwise, each byte of its UTF-8 encoding is percent-encoded
/// separately. A `'%'` is left as is only if it starts a valid
/// percent-encoded octet and the table [allows percent-encoded octets];
/// the hexadecimal digits of such an octet are uppercased.
///
/// This function never fails and allocates only when the output differs
/// from the input.
///
/// [allows]: Table::allows
/// [allows percent-encoded octets]: Table::allows_pct_encoded
///
/// # Examples
///
/// ```
/// use uri_components::pct_enc::{encode, table::QUERY_FRAGMENT};
///
/// assert_eq!(encode("doc 3", QUERY_FRAGMENT), "doc%203");
/// assert_eq!(encode("%e2%82%ac and 100%", QUERY_FRAGMENT), "%E2%82%AC%20and%20100%25");
/// assert_eq!(encode("¿", QUERY_FRAGMENT), "%C2%BF");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let mut buf = String::new();
    // Bytes before this index have been accounted for in `buf`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let x = bytes[i];
        if table.allows_ascii(x) {
            i += 1;
            continue;
        }

        if table.allows_pct_encoded() {
            if let Some((hi, lo)) = pct_encoded_at(bytes, i) {
                if hi.is_ascii_lowercase() || lo.is_ascii_lowercase() {
                    buf.push_str(&s[copied..i]);
                    buf.push('%');
                    buf.push(char::from(hi.to_ascii_uppercase()));
                    buf.push(char::from(lo.to_ascii_uppercase()));
                    copied = i + 3;
                }
                i += 3;
                continue;
            }
        }

        buf.push_str(&s[copied..i]);
        let width = utf8_width(x);
        for &y in &bytes[i..i + width] {
            buf.push_str(encode_byte(y));
        }
        i += width;
        copied = i;
    }

    if copied == 0 {
        Cow::Borrowed(s)
    } else {
        buf.push_str(&s[copied..]);
        Cow::Owned(buf)
    }
}

/// Percent-encodes control characters (`U+0000` to `U+001F` and `U+007F`)
/// and leaves everything else as is.
fn encode_controls(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|x| x.is_ascii_control()) {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        if ch.is_ascii_control() {
            buf.push_str(encode_byte(ch as u8));
        } else {
            buf.push(ch);
        }
    }
    Cow::Owned(buf)
}

/// Renders a string with the given rule in the given mode.
///
/// - [`NoEncoding`] returns the string unchanged.
/// - [`Rfc3986`] calls [`encode`] with the table [allowed] by the rule.
/// - [`Rfc3987`] only encodes control characters.
/// - [`LegacyForm`] does what [`Rfc3986`] does, then encodes
///   `'+'` as `"%2B"` and `'~'` as `"%7E"`.
///
/// [`NoEncoding`]: Encoding::NoEncoding
/// [`Rfc3986`]: Encoding::Rfc3986
/// [`Rfc3987`]: Encoding::Rfc3987
/// [`LegacyForm`]: Encoding::LegacyForm
/// [allowed]: Rule::allowed
///
/// # Examples
///
/// ```
/// use uri_components::pct_enc::{encode_with, Encoding, Rule};
///
/// let s = "a+b~c d\u{7f}é";
/// assert_eq!(encode_with(s, Rule::QueryFragment, Encoding::NoEncoding), s);
/// assert_eq!(encode_with(s, Rule::QueryFragment, Encoding::Rfc3986), "a+b~c%20d%7F%C3%A9");
/// assert_eq!(encode_with(s, Rule::QueryFragment, Encoding::Rfc3987), "a+b~c d%7Fé");
/// assert_eq!(encode_with(s, Rule::QueryFragment, Encoding::LegacyForm), "a%2Bb%7Ec%20d%7F%C3%A9");
/// ```
#[must_use]
pub fn encode_with(s: &str, rule: Rule, encoding: Encoding) -> Cow<'_, str> {
    match encoding {
        Encoding::NoEncoding => Cow::Borrowed(s),
        Encoding::Rfc3987 => encode_controls(s),
        Encoding::Rfc3986 => encode(s, rule.allowed()),
        Encoding::LegacyForm => {
            let encoded = encode(s, rule.allowed());
            if encoded.contains(['+', '~']) {
                Cow::Owned(encoded.replace('+', "%2B").replace('~', "%7E"))
            } else {
                encoded
            }
        }
    }
}

/// Like [`encode_with`], but passes an absent value through as absent.
#[must_use]
pub fn transcode(s: Option<&str>, rule: Rule, encoding: Encoding) -> Option<Cow<'_, str>> {
    s.map(|s| encode_with(s, rule, encoding))
}

/// Decodes the percent-encoded octets in a string, except for those
/// whose character is allowed by `preserved` and for `"%25"`.
///
/// The octets that are kept encoded get their hexadecimal digits uppercased.
/// A `'%'` that does not start a valid percent-encoded octet is written
/// as `"%25"`, so decoding again never forms a new octet.
/// If the decoded bytes are not valid UTF-8, the offending octets are kept
/// encoded as well, so no information is lost.
///
/// Together with [`encode`], this yields the canonical form of a string:
/// `encode(decode(s, rule.preserved()), rule.allowed())` is the same for
/// any two strings that only differ in how they are percent-encoded, and
/// `decode(decode(s, t), t)` equals `decode(s, t)`.
///
/// # Examples
///
/// ```
/// use uri_components::pct_enc::{decode, Rule};
///
/// assert_eq!(decode("a%20b%2fc%41", Rule::Path.preserved()), "a b%2FcA");
/// assert_eq!(decode("a%20b%2fc%41", Rule::User.preserved()), "a b/cA");
/// assert_eq!(decode("100%25%", Rule::Path.preserved()), "100%25%25");
/// assert_eq!(decode("%%341", Rule::Path.preserved()), "%2541");
/// assert_eq!(decode("%C2%BF%FF", Rule::Path.preserved()), "¿%FF");
/// ```
#[must_use]
pub fn decode(s: &str, preserved: Table) -> Cow<'_, str> {
    if !s.contains('%') {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if let Some((hi, lo)) = pct_encoded_at(bytes, i) {
            let x = decode_octet(hi, lo);
            if x == b'%' || preserved.allows_ascii(x) {
                out.extend_from_slice(encode_byte(x).as_bytes());
            } else {
                out.push(x);
            }
            i += 3;
        } else if bytes[i] == b'%' {
            out.extend_from_slice(b"%25");
            i += 1;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    let mut buf = String::with_capacity(out.len());
    for chunk in out.utf8_chunks() {
        buf.push_str(chunk.valid());
        for &x in chunk.invalid() {
            buf.push_str(encode_byte(x));
        }
    }

    if buf == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(buf)
    }
}
