//! Character classes from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

use super::is_hexdig_pair;

const MASK_PCT_ENCODED: u64 = 1 << b'%';
const MASK_UNENCODED_ASCII: u64 = !MASK_PCT_ENCODED;

/// A table specifying the characters allowed unencoded in a string.
///
/// Only ASCII characters can be allowed. Whether percent-encoded octets
/// are allowed is tracked separately by [`allows_pct_encoded`].
///
/// [`allows_pct_encoded`]: Self::allows_pct_encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as allowing percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self(self.0 | MASK_PCT_ENCODED, self.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given unencoded byte is allowed by the table.
    ///
    /// Always returns `false` for `b'%'` and for non-ASCII bytes.
    #[inline]
    #[must_use]
    pub const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0 & MASK_UNENCODED_ASCII
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given unencoded character is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Checks whether percent-encoded octets are allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.0 & MASK_PCT_ENCODED != 0
    }

    /// Checks whether the given string only consists of byte patterns
    /// allowed by the table.
    #[must_use]
    pub const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if x == b'%' && self.allows_pct_encoded() {
                if i + 2 >= s.len() || !is_hexdig_pair(s[i + 1], s[i + 2]) {
                    return false;
                }
                i += 3;
            } else {
                if !self.allows_ascii(x) {
                    return false;
                }
                i += 1;
            }
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `label = ALPHA / DIGIT / "-"` (the LDH rule of RFC 1123)
pub const LABEL: Table = ALPHA.or(DIGIT).or(new(b"-"));

/// `user = *( unreserved / pct-encoded / sub-delims )`
pub const USER: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// `password = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const PASSWORD: Table = USER.or(new(b":"));

/// `path = *( pchar / "/" )`, where
/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub const PATH: Table = USER.or(new(b":@/"));

/// `query = fragment = *( pchar / "/" / "?" )`
pub const QUERY_FRAGMENT: Table = PATH.or(new(b"?"));

/// The rule set used to transcode a component.
///
/// Each rule selects the characters that, on top of the unreserved
/// characters, may appear unencoded in the component, and the characters
/// whose percent-encoded form is kept as is when normalizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The user name in the userinfo subcomponent.
    User,
    /// The password in the userinfo subcomponent.
    Pass,
    /// The path component.
    Path,
    /// The query or fragment component.
    QueryFragment,
}

impl Rule {
    /// Returns the table of characters (and percent-encoded octets)
    /// that are left unencoded by the rule.
    #[must_use]
    pub const fn allowed(self) -> Table {
        match self {
            Self::User => USER,
            Self::Pass => PASSWORD,
            Self::Path => PATH,
            Self::QueryFragment => QUERY_FRAGMENT,
        }
    }

    /// Returns the table of characters that keep their percent-encoded
    /// form when decoding.
    ///
    /// These are the characters the rule allows unencoded apart from the
    /// unreserved ones. Decoding any of them would turn data into
    /// a delimiter, e.g. `%2F` into a path separator.
    #[must_use]
    pub const fn preserved(self) -> Table {
        self.allowed().sub(UNRESERVED.or_pct_encoded())
    }
}
