//! 計算履歴の永続ストア Outbound ポート
//!
//! 履歴は単一の名前付きスロット（文字列の JSON 配列）として全量を読み書きする。
//! 追記は「読む・足す・全量書き戻す」の一連で、部分更新はない。

use crate::error::Error;

/// 計算履歴の読み込み・追記
///
/// 実装は `adapter::FileHistoryStorage`（スロットをストアディレクトリ直下の
/// JSON ファイルに対応させる）など。
pub trait HistoryStore: Send + Sync {
    /// 保存済みの履歴を古い順で返す。スロット未作成なら空。
    fn load(&self) -> Result<Vec<String>, Error>;

    /// 履歴の末尾に 1 件追記し、書き込み後にストアから読み直した列を返す。
    /// 失敗したときは永続状態を変更しない。
    fn append(&self, message: &str) -> Result<Vec<String>, Error>;
}
