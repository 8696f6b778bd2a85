//! 計算履歴スロットのファイル実装（fuelCalculationHistory.json）
//!
//! スロットはストアディレクトリ直下の単一 JSON ファイルで、中身は
//! 文字列の JSON 配列（コンパクト形式）。既存の保存データと互換。
//! 追記は「読む・足す・全量書き戻す・読み直す」の一連を Mutex で直列化し、
//! 複数スレッドから同時に呼ばれても更新が失われない。

use crate::domain::StoreDir;
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, FileSystem, HistoryStore, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// 履歴スロットの固定キー（ファイル名の stem に使う）
pub const HISTORY_KEY: &str = "fuelCalculationHistory";

/// スロットを JSON ファイルに対応させる HistoryStore 実装
pub struct FileHistoryStorage {
    fs: Arc<dyn FileSystem>,
    logger: Arc<dyn Log>,
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileHistoryStorage {
    pub fn new(fs: Arc<dyn FileSystem>, logger: Arc<dyn Log>, store_dir: &StoreDir) -> Self {
        let path = store_dir.join(format!("{}.json", HISTORY_KEY));
        Self {
            fs,
            logger,
            path,
            lock: Mutex::new(()),
        }
    }

    /// スロットの現在値を読む（ファイルが無ければ空）
    fn read_slot(&self) -> Result<Vec<String>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", self.path.display(), e)))
    }

    /// スロットへ全量を書き戻す（ストアディレクトリが無ければ作成）
    fn write_slot(&self, entries: &[String]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string(entries).map_err(|e| Error::json(e.to_string()))?;
        self.fs.write(&self.path, &json)
    }

    fn log_slot(&self, message: &str, operation: &str, len: usize) {
        let mut fields = BTreeMap::new();
        fields.insert("operation".to_string(), serde_json::json!(operation));
        fields.insert("slot".to_string(), serde_json::json!(HISTORY_KEY));
        fields.insert("len".to_string(), serde_json::json!(len));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("adapter".to_string()),
            kind: Some("history".to_string()),
            fields: Some(fields),
        });
    }
}

impl HistoryStore for FileHistoryStorage {
    fn load(&self) -> Result<Vec<String>, Error> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::io_msg("history lock poisoned"))?;
        let entries = self.read_slot()?;
        self.log_slot("history read", "load", entries.len());
        Ok(entries)
    }

    fn append(&self, message: &str) -> Result<Vec<String>, Error> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::io_msg("history lock poisoned"))?;
        let mut entries = self.read_slot()?;
        entries.push(message.to_string());
        self.write_slot(&entries)?;
        // 書き込み後にストアから読み直した列を返す（メモリ側はこれで置き換える）
        let persisted = self.read_slot()?;
        self.log_slot("history write", "append", persisted.len());
        Ok(persisted)
    }
}
