use super::ext_error::RANGE_SEPARATOR;

/// Separator between RESINFO attributes.
pub const ATTRIBUTE_DELIMITER: char = '*';

pub const QNAME_MINIMIZATION_FLAG: &str = "qnamemin";

pub const EXTENDED_ERRORS_KEY: &str = "exterr";

pub const INFO_URL_KEY: &str = "infourl";

const KNOWN_FLAGS: &[&str] = &[QNAME_MINIMIZATION_FLAG];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeToken<'a> {
    KeyValue { key: &'a str, value: &'a str },
    Flag(&'a str),
    Unrecognized(&'a str),
}

impl<'a> AttributeToken<'a> {
    /// Extract the attributes of one whitespace-free word, in order of appearance.
    ///
    /// Known keys are searched anywhere in the word and independently of each
    /// other, so a printable length octet from a hex-decoded character-string
    /// can join two attributes without hiding either. An `exterr` value is
    /// the `<digits>[-<digits>]` prefix after the `=`; an `infourl` value runs
    /// to the end of the word or to the next known attribute.
    pub fn scan(word: &'a str) -> Vec<Self> {
        let exterr = find_key(word, EXTENDED_ERRORS_KEY, 0);
        let infourl = find_key(word, INFO_URL_KEY, 0);

        let mut found: Vec<(usize, Self)> = Vec::with_capacity(2);

        if let Some((at, rest)) = exterr {
            found.push((
                at,
                AttributeToken::KeyValue {
                    key: EXTENDED_ERRORS_KEY,
                    value: error_range_prefix(rest),
                },
            ));
        }

        if let Some((at, rest)) = infourl {
            let value_start = word.len() - rest.len();
            let later_exterr = find_key(word, EXTENDED_ERRORS_KEY, value_start).map(|(p, _)| p);
            let later_flag = word[value_start..]
                .find(QNAME_MINIMIZATION_FLAG)
                .map(|p| value_start + p);
            let value_end = [later_exterr, later_flag]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(word.len());
            found.push((
                at,
                AttributeToken::KeyValue {
                    key: INFO_URL_KEY,
                    value: &word[value_start..value_end],
                },
            ));
        }

        if !found.is_empty() {
            found.sort_by_key(|(at, _)| *at);
            return found.into_iter().map(|(_, token)| token).collect();
        }

        if KNOWN_FLAGS.contains(&word) {
            return vec![AttributeToken::Flag(word)];
        }

        match word.split_once('=') {
            Some((key, value)) if !key.is_empty() => vec![AttributeToken::KeyValue { key, value }],
            _ => vec![AttributeToken::Unrecognized(word)],
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        match self {
            AttributeToken::KeyValue { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// First `key=` at or after byte `from`; returns its position and the text after `=`.
fn find_key<'a>(word: &'a str, key: &str, from: usize) -> Option<(usize, &'a str)> {
    let tail = word.get(from..)?;
    tail.match_indices(key).find_map(|(at, _)| {
        tail[at + key.len()..]
            .strip_prefix('=')
            .map(|rest| (from + at, rest))
    })
}

/// The `<digits>[-<digits>]` prefix of an `exterr` value.
///
/// Text that does not start with a digit is returned whole so that it is
/// reported as an invalid range instead of vanishing.
fn error_range_prefix(rest: &str) -> &str {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let start = digits(rest);
    if start == 0 {
        return rest;
    }

    let end = match rest[start..].strip_prefix(RANGE_SEPARATOR) {
        Some(tail) if digits(tail) > 0 => start + RANGE_SEPARATOR.len_utf8() + digits(tail),
        _ => start,
    };
    &rest[..end]
}

/// Split decoded payload text into attribute tokens.
///
/// Segments are delimited by `*`; inside a segment, whitespace and control
/// characters also separate words, which covers resolvers that publish
/// space-separated attributes.
pub fn tokenize(text: &str) -> impl Iterator<Item = AttributeToken<'_>> {
    text.split(ATTRIBUTE_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| {
            segment
                .split(|c: char| c.is_whitespace() || c.is_control())
                .filter(|word| !word.is_empty())
        })
        .flat_map(AttributeToken::scan)
}
