//! 固定時間の待機 Outbound ポート

use std::time::Duration;

pub trait Pause: Send + Sync {
    fn pause(&self, duration: Duration);
}
