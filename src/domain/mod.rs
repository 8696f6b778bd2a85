//! ドメイン型（Newtype、enum、計算ルール）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。
//! 計算は純関数として置き、永続化・画面状態には触れない。

pub mod calculation;
pub mod price;
pub mod recommendation;

use std::path::{Path, PathBuf};

pub use calculation::{calculate, CalculationError, CalculationResult};
pub use price::parse_price;
pub use recommendation::Fuel;

/// 履歴スロットを置くストアディレクトリのパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDir(PathBuf);

impl StoreDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for StoreDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for StoreDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for StoreDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
