use libfuzzer_sys::arbitrary::{self, Arbitrary};
use uri_components::pct_enc::{Encoding, Rule};

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum RuleWrapper {
    User,
    Pass,
    Path,
    QueryFragment,
}

impl From<RuleWrapper> for Rule {
    fn from(wrapper: RuleWrapper) -> Self {
        match wrapper {
            RuleWrapper::User => Rule::User,
            RuleWrapper::Pass => Rule::Pass,
            RuleWrapper::Path => Rule::Path,
            RuleWrapper::QueryFragment => Rule::QueryFragment,
        }
    }
}

#[derive(Arbitrary, Clone, Copy, Debug)]
pub enum EncodingWrapper {
    NoEncoding,
    Rfc3986,
    Rfc3987,
    LegacyForm,
}

impl From<EncodingWrapper> for Encoding {
    fn from(wrapper: EncodingWrapper) -> Self {
        match wrapper {
            EncodingWrapper::NoEncoding => Encoding::NoEncoding,
            EncodingWrapper::Rfc3986 => Encoding::Rfc3986,
            EncodingWrapper::Rfc3987 => Encoding::Rfc3987,
            EncodingWrapper::LegacyForm => Encoding::LegacyForm,
        }
    }
}
