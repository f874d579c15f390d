use crate::types::Timestamp;

const MINUTE_IN_SECONDS: Timestamp = 60;
pub(crate) const HOUR_IN_SECONDS: Timestamp = 60 * MINUTE_IN_SECONDS;
pub(crate) const DAY_IN_SECONDS: Timestamp = 24 * HOUR_IN_SECONDS;

/// The withdrawal period.
pub const WITHDRAWAL_PERIOD: Timestamp = 7 * DAY_IN_SECONDS;

/// Weight charged per XCM instruction by the transport.
pub const XCM_INSTRUCTION_FEE: u64 = 1_000_000_000;

/// Number of XCM instructions in a signed transact (descend origin, withdraw asset, buy execution
/// and transact).
pub const XCM_INSTRUCTION_COUNT: u64 = 4;
