use super::ext_error::ErrorInterpretation;
use serde::Serialize;

/// What a resolver advertises about itself in RESINFO.
///
/// Every field is always serialized; an absent value means "not advertised".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolverCapabilities {
    pub qname_minimization: bool,
    pub extended_errors: Option<ErrorInterpretation>,
    pub info_url: Option<String>,
}

impl ResolverCapabilities {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold a later record of the same resolver into this one.
    ///
    /// The flag is ORed; for the optional fields the earlier value wins.
    pub fn merge(&mut self, other: ResolverCapabilities) {
        self.qname_minimization |= other.qname_minimization;
        if self.extended_errors.is_none() {
            self.extended_errors = other.extended_errors;
        }
        if self.info_url.is_none() {
            self.info_url = other.info_url;
        }
    }

    pub fn merged<I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = ResolverCapabilities>,
    {
        records.into_iter().reduce(|mut acc, next| {
            acc.merge(next);
            acc
        })
    }
}
