//! 標準時刻実装（chrono::Utc を委譲）

use crate::ports::outbound::Clock;

/// システム時刻を返す Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// 固定時刻を返す Clock 実装（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(StdClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(42).now_ms(), 42);
    }
}
