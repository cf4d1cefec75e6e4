use std::time::Duration;

/// Event poll timeout in milliseconds. Also bounds how late a snackbar can
/// be dismissed after its deadline.
pub const POLL_MS: u64 = 100;

pub fn poll_timeout() -> Duration {
    Duration::from_millis(POLL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::DEFAULT_DURATION_MS;

    #[test]
    fn test_poll_is_finer_than_notice_duration() {
        assert_eq!(poll_timeout(), Duration::from_millis(100));
        assert!(POLL_MS * 10 <= DEFAULT_DURATION_MS);
    }
}
