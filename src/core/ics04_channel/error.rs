use core::num::ParseIntError;

use flex_error::{define_error, TraceError};

use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidSourcePort
            [ ValidationError ]
            | _ | { "invalid source port" },

        InvalidDestinationPort
            [ ValidationError ]
            | _ | { "invalid destination port" },

        InvalidSourceChannel
            [ ValidationError ]
            | _ | { "invalid source channel" },

        InvalidDestinationChannel
            [ ValidationError ]
            | _ | { "invalid destination channel" },

        ZeroPacketSequence
            | _ | { "packet sequence cannot be 0" },

        ZeroPacketTimeout
            | _ | { "packet timeout cannot be 0" },

        ZeroPacketData
            | _ | { "packet data bytes cannot be empty" },

        InvalidStringAsSequence
            { value: String }
            [ TraceError<ParseIntError> ]
            | e | { format_args!("invalid string {0} as sequence", e.value) },
    }
}
