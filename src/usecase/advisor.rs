//! 計算と履歴操作のユースケース
//!
//! calculate は副作用なし。保存は record で明示的に行い、呼び出し側が
//! 結果を見てから逐次合成する（計算失敗時に保存が走ることはない）。

use crate::domain::{self, CalculationError, CalculationResult};
use crate::error::Error;
use crate::ports::outbound::HistoryStore;
use std::sync::Arc;

/// 燃料計算と履歴のユースケース
#[derive(Clone)]
pub struct AdvisorUseCase {
    store: Arc<dyn HistoryStore>,
}

impl AdvisorUseCase {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// 2 つの価格文字列から計算結果を作る（保存はしない）
    pub fn calculate(
        &self,
        alcohol_input: &str,
        gasoline_input: &str,
    ) -> Result<CalculationResult, CalculationError> {
        domain::calculate(alcohol_input, gasoline_input)
    }

    /// 計算結果のメッセージを履歴に追記し、保存後の履歴を返す
    pub fn record(&self, result: &CalculationResult) -> Result<Vec<String>, Error> {
        self.store.append(&result.message)
    }

    /// 保存済みの履歴を読み込む（古い順）
    pub fn history(&self) -> Result<Vec<String>, Error> {
        self.store.load()
    }
}
