//! Rolling withdrawal window.
//!
//! A window is anchored at its last reset, not at a calendar boundary. Once
//! `WINDOW_LENGTH` seconds have passed since `window_start` the window is
//! expired; reads treat it as fresh, and the next retrieval resets it.

use soroban_sdk::contracttype;

use crate::errors::LockerError;

/// Length of one withdrawal window, in seconds.
pub const WINDOW_LENGTH: u64 = 86_400;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawalWindow {
    pub daily_limit: i128,
    pub window_start: u64,
    pub withdrawn_in_window: i128,
}

impl WithdrawalWindow {
    pub fn new(daily_limit: i128, now: u64) -> Self {
        Self {
            daily_limit,
            window_start: now,
            withdrawn_in_window: 0,
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.window_start) >= WINDOW_LENGTH
    }

    /// Amount still retrievable at `now`, without touching the window.
    pub fn remaining(&self, now: u64) -> i128 {
        if self.is_expired(now) {
            self.daily_limit
        } else {
            self.daily_limit
                .saturating_sub(self.withdrawn_in_window)
                .max(0)
        }
    }

    /// Reset the window if it has expired.
    pub fn roll_over(&mut self, now: u64) {
        if self.is_expired(now) {
            self.window_start = now;
            self.withdrawn_in_window = 0;
        }
    }

    /// Count `amount` against the current window.
    ///
    /// Callers roll the window over first. Leaves `self` untouched on error.
    pub fn record(&mut self, amount: i128) -> Result<(), LockerError> {
        let total = self
            .withdrawn_in_window
            .checked_add(amount)
            .ok_or(LockerError::Overflow)?;
        if total > self.daily_limit {
            return Err(LockerError::DailyLimitExceeded);
        }
        self.withdrawn_in_window = total;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_window_exposes_full_limit() {
        let window = WithdrawalWindow::new(10, 1_000);
        assert_eq!(window.remaining(1_000), 10);
        assert!(!window.is_expired(1_000 + WINDOW_LENGTH - 1));
        assert!(window.is_expired(1_000 + WINDOW_LENGTH));
    }

    #[test]
    fn record_accumulates_up_to_limit() {
        let mut window = WithdrawalWindow::new(2, 0);
        window.record(1).unwrap();
        window.record(1).unwrap();
        assert_eq!(window.remaining(10), 0);
        assert_eq!(window.record(1), Err(LockerError::DailyLimitExceeded));
        assert_eq!(window.withdrawn_in_window, 2);
    }

    #[test]
    fn remaining_is_a_projection() {
        let mut window = WithdrawalWindow::new(5, 100);
        window.record(5).unwrap();
        assert_eq!(window.remaining(100 + WINDOW_LENGTH), 5);
        // Projection alone leaves the counter as it was.
        assert_eq!(window.withdrawn_in_window, 5);
        assert_eq!(window.window_start, 100);
    }

    #[test]
    fn roll_over_only_after_window_length() {
        let mut window = WithdrawalWindow::new(5, 100);
        window.record(3).unwrap();

        window.roll_over(100 + WINDOW_LENGTH - 1);
        assert_eq!(window.withdrawn_in_window, 3);
        assert_eq!(window.window_start, 100);

        window.roll_over(100 + WINDOW_LENGTH);
        assert_eq!(window.withdrawn_in_window, 0);
        assert_eq!(window.window_start, 100 + WINDOW_LENGTH);
    }

    #[test]
    fn lowered_limit_saturates_at_zero() {
        let mut window = WithdrawalWindow::new(10, 0);
        window.record(8).unwrap();
        window.daily_limit = 4;
        assert_eq!(window.remaining(1), 0);
        assert_eq!(window.record(1), Err(LockerError::DailyLimitExceeded));
    }

    #[test]
    fn record_reports_counter_overflow() {
        let mut window = WithdrawalWindow::new(i128::MAX, 0);
        window.record(i128::MAX).unwrap();
        assert_eq!(window.record(1), Err(LockerError::Overflow));
        assert_eq!(window.withdrawn_in_window, i128::MAX);
    }
}
