use thiserror::Error;

/// Hard failures raised by the date/time resolution helpers.
///
/// The interpreter itself never returns these: unrecognized input is
/// represented as data (an `INFO` or `QUESTION` result). A `ResolveError`
/// means a token reached the resolver that the extractor regexes should
/// never have produced, or a syntactically valid token named an impossible
/// calendar date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown weekday name: {0}")]
    InvalidWeekday(String),

    #[error("invalid calendar date: {month} doesn't have {day} days")]
    InvalidDate { month: String, day: u32 },

    #[error("unrecognized date token: {0}")]
    InvalidDateToken(String),

    #[error("unrecognized or out-of-range time: {0}")]
    InvalidTime(String),
}
