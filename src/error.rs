//! エラーハンドリング（永続化まわりのエラー型）
//!
//! ユーザーにそのまま表示する計算エラーは domain::CalculationError が担う。
//! ここで扱うのは履歴スロットの読み書きで起きる I/O / JSON エラーで、
//! 呼び出し側はこれを回復可能なものとして扱う（セッションを落とさない）。

/// ストレージ操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
    /// JSON の直列化・復元の失敗
    #[error("{0}")]
    Json(String),
}

impl Error {
    /// I/O エラー（メッセージ付き）
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// JSON エラー（メッセージ付き）
    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }
}
