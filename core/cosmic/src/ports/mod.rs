//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（生成サービス・記録・端末・待機）を使うための trait

pub mod inbound;
pub mod outbound;
