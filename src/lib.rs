//! 燃料アドバイザー（アルコール / ガソリンの給油判定と履歴の永続化）
//!
//! 2 つの価格文字列から推奨燃料を計算し、結果メッセージを追記専用の
//! 履歴として保存するサブシステム。UI レイヤーは `FuelCalculator`
//! （inbound ポート）経由でこれを駆動し、描画はこのクレートの範囲外。

/// エラーハンドリング（永続化まわり）
pub mod error;

/// ドメイン型（Newtype、enum、計算ルール）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ（ファイル保存・ログ・stderr 報告）
pub mod adapter;

/// ユースケース（計算＋履歴記録、画面状態の保持）
pub mod usecase;

/// 配線: 標準アダプタで App を組み立てる
pub mod wiring;

#[cfg(test)]
mod tests;

pub use domain::{calculate, CalculationError, CalculationResult, Fuel, StoreDir};
pub use error::Error;
pub use ports::inbound::FuelCalculator;
pub use usecase::{AdvisorSession, AdvisorUseCase};
pub use wiring::{wire_advisor, App};
