use chrono::{DateTime, SecondsFormat, Utc};
use tokio::time::Instant;

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

pub fn get_instant() -> Instant {
    Instant::now()
}

pub fn to_rfc3339(unix_ts: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(unix_ts, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
