use tracing::level_filters::LevelFilter;

/// Name of the environment variable holding the verbosity.
pub const TRACE_ENV_VAR: &str = "TRACE";

/// Diagnostic verbosity.
///
/// - 1: API call failures.
/// - 2: low-volume information about messages.
/// - 3: high-volume messages, e.g. pointer movement.
///
/// Anything at or below 0 silences diagnostics entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TraceLevel(i32);

impl TraceLevel {
    pub const OFF: TraceLevel = TraceLevel(0);
    pub const FAILURES: TraceLevel = TraceLevel(1);
    pub const INFO: TraceLevel = TraceLevel(2);
    pub const VERBOSE: TraceLevel = TraceLevel(3);

    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Level for a raw `TRACE` value: unset means [`TraceLevel::FAILURES`], anything else is read
    /// with [`parse_leading_int`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(value) => Self(parse_leading_int(value)),
            None => Self::FAILURES,
        }
    }

    /// Maximum `tracing` level that passes at this verbosity.
    pub fn level_filter(self) -> LevelFilter {
        match self.0 {
            i32::MIN..=0 => LevelFilter::OFF,
            1 => LevelFilter::WARN,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl Default for TraceLevel {
    fn default() -> Self {
        Self::FAILURES
    }
}

/// Read an integer the way C `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then as many decimal digits as
/// follow. No digits yields 0; overflow saturates.
pub fn parse_leading_int(text: &str) -> i32 {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1);
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
