//! Resend-cooldown arithmetic for the OTP flow. Only a send timestamp is
//! tracked client-side; the OTP value itself never touches this layer.

/// Seconds a user must wait before requesting another OTP.
pub const RESEND_COOLDOWN_SECS: u64 = 90;

/// Whole seconds left on the cooldown, given millisecond clock readings.
pub fn resend_wait_secs(now_ms: f64, sent_ms: f64) -> u64 {
    let elapsed = ((now_ms - sent_ms) / 1000.0).floor();
    if elapsed < 0.0 {
        return RESEND_COOLDOWN_SECS;
    }
    RESEND_COOLDOWN_SECS.saturating_sub(elapsed as u64)
}

pub fn can_resend(now_ms: f64, sent_ms: f64) -> bool {
    resend_wait_secs(now_ms, sent_ms) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENT: f64 = 1_700_000_000_000.0;

    #[test]
    fn full_cooldown_at_send_time() {
        assert_eq!(resend_wait_secs(SENT, SENT), 90);
        assert!(!can_resend(SENT, SENT));
    }

    #[test]
    fn counts_down_by_whole_seconds() {
        assert_eq!(resend_wait_secs(SENT + 999.0, SENT), 90);
        assert_eq!(resend_wait_secs(SENT + 1_000.0, SENT), 89);
        assert_eq!(resend_wait_secs(SENT + 45_500.0, SENT), 45);
    }

    #[test]
    fn reenables_at_exactly_ninety_seconds() {
        assert_eq!(resend_wait_secs(SENT + 89_999.0, SENT), 1);
        assert!(!can_resend(SENT + 89_999.0, SENT));
        assert_eq!(resend_wait_secs(SENT + 90_000.0, SENT), 0);
        assert!(can_resend(SENT + 90_000.0, SENT));
        assert!(can_resend(SENT + 300_000.0, SENT));
    }

    #[test]
    fn clock_skew_before_send_keeps_the_button_disabled() {
        assert_eq!(resend_wait_secs(SENT - 5_000.0, SENT), 90);
    }
}
