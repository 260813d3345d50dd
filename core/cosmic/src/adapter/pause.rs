//! 固定時間の待機

use std::time::Duration;

use crate::ports::outbound::Pause;

/// thread::sleep で待つ
pub struct StdPause;

impl Pause for StdPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}


#[cfg(test)]
pub use record::NoPause;
