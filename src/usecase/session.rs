//! 計算画面のセッション状態（呼び出し側が所有する状態オブジェクト）
//!
//! グローバルな可変状態は持たず、UI レイヤーがこのオブジェクトを 1 つ持って
//! inbound ポート（FuelCalculator）経由で駆動する。メモリ上の履歴は
//! 「保存後にストアから読み直した列」で置き換えるため、常に永続状態の
//! コピーであり、保存失敗時には変化しない。

use crate::error::Error;
use crate::ports::inbound::FuelCalculator;
use crate::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord, ReportSink};
use crate::usecase::AdvisorUseCase;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 計算画面 1 枚分のセッション状態
pub struct AdvisorSession {
    advisor: AdvisorUseCase,
    logger: Arc<dyn Log>,
    report: Box<dyn ReportSink>,
    calculator_visible: bool,
    alcohol_input: String,
    gasoline_input: String,
    result_message: Option<String>,
    history: Vec<String>,
}

impl AdvisorSession {
    /// セッションを開始し、保存済み履歴を読み込む。
    ///
    /// 読み込みに失敗した場合は空の履歴で開始する（エラーはログと
    /// コンソール報告に流し、セッション自体は使える状態で返す）。
    pub fn start(
        advisor: AdvisorUseCase,
        logger: Arc<dyn Log>,
        report: Box<dyn ReportSink>,
    ) -> Self {
        let mut session = Self {
            advisor,
            logger,
            report,
            calculator_visible: false,
            alcohol_input: String::new(),
            gasoline_input: String::new(),
            result_message: None,
            history: Vec::new(),
        };
        match session.advisor.history() {
            Ok(entries) => session.history = entries,
            Err(e) => {
                session.log_error("history load failed", &e);
                let _ = session
                    .report
                    .report(&format!("Erro ao carregar o histórico: {}", e));
            }
        }
        session.log_started();
        session
    }

    fn log_started(&self) {
        let mut fields = BTreeMap::new();
        fields.insert("history_len".to_string(), serde_json::json!(self.history.len()));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "session started".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: Some(fields),
        });
    }

    fn log_error(&self, message: &str, e: &Error) {
        let mut fields = BTreeMap::new();
        fields.insert("error".to_string(), serde_json::json!(e.to_string()));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Error,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("history".to_string()),
            fields: Some(fields),
        });
    }
}

impl FuelCalculator for AdvisorSession {
    fn set_alcohol_price(&mut self, text: &str) {
        self.alcohol_input = text.to_string();
    }

    fn set_gasoline_price(&mut self, text: &str) {
        self.gasoline_input = text.to_string();
    }

    fn open_calculator(&mut self) {
        self.calculator_visible = true;
    }

    fn dismiss(&mut self) {
        self.calculator_visible = false;
    }

    fn calculate(&mut self) {
        match self.advisor.calculate(&self.alcohol_input, &self.gasoline_input) {
            Ok(result) => {
                // 結果表示は保存より先に確定する（保存失敗でも結果は残す）
                self.result_message = Some(result.message.clone());
                match self.advisor.record(&result) {
                    Ok(persisted) => self.history = persisted,
                    Err(e) => {
                        // 追記失敗: メモリ側の履歴も変更しない
                        self.log_error("history append failed", &e);
                        let _ = self
                            .report
                            .report(&format!("Erro ao salvar o histórico: {}", e));
                    }
                }
            }
            Err(e) => {
                // 入力エラーの文言を結果メッセージの位置にそのまま出す
                self.result_message = Some(e.to_string());
            }
        }
        // 結果の成否に関わらず計算画面は閉じる
        self.calculator_visible = false;
    }

    fn calculator_visible(&self) -> bool {
        self.calculator_visible
    }

    fn alcohol_price_input(&self) -> &str {
        &self.alcohol_input
    }

    fn gasoline_price_input(&self) -> &str {
        &self.gasoline_input
    }

    fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    fn history(&self) -> &[String] {
        &self.history
    }
}
