//! ユースケース（計算＋履歴記録、画面状態の保持）

pub mod advisor;
pub mod session;

pub use advisor::AdvisorUseCase;
pub use session::AdvisorSession;
