//! ユースケース層

pub mod admin;
pub mod flow;

pub use admin::{AdminOverview, AdminUseCase};
pub use flow::MatchFlowUseCase;
