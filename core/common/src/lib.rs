//! Cosmic Mate 共通ライブラリ
//!
//! `cosmic` コマンドが使うエラー型・ポート・標準アダプタ・LLM プロバイダを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports（外界への依頼の trait）
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;
