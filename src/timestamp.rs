use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use flex_error::{define_error, TraceError};
use serde::{Deserialize, Serialize};

/// A timestamp as a monotonic nanosecond counter.
///
/// Solo machine consensus timestamps travel on the wire as plain nanosecond
/// counts; no calendar interpretation is performed inside this crate. A zero
/// timestamp means "unset".
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
pub struct Timestamp {
    nanoseconds: u64,
}

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    ParseTimestampError {
        ParseInt
            { raw: String }
            [ TraceError<ParseIntError> ]
            | e | { format_args!("cannot parse timestamp from string {0}", e.raw) },
    }
}

impl Timestamp {
    pub fn from_nanoseconds(nanoseconds: u64) -> Timestamp {
        Timestamp { nanoseconds }
    }

    pub fn nanoseconds(&self) -> u64 {
        self.nanoseconds
    }

    pub fn is_set(&self) -> bool {
        self.nanoseconds != 0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.nanoseconds)
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nanoseconds = s
            .parse::<u64>()
            .map_err(|e| ParseTimestampError::parse_int(s.to_string(), e))?;

        Ok(Timestamp::from_nanoseconds(nanoseconds))
    }
}
