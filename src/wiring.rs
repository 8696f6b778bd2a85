//! 配線: 標準アダプタで UseCase を組み立てる
//!
//! 設定はストアディレクトリ 1 つだけ。環境変数・設定ファイルは読まない
//! （どこに置くかは UI レイヤーの持ち物のため、引数で受け取る）。

use std::sync::Arc;

use crate::adapter::{FileHistoryStorage, FileJsonLog, StdFileSystem, StderrReportSink};
use crate::domain::StoreDir;
use crate::ports::outbound::{FileSystem, HistoryStore, Log};
use crate::usecase::{AdvisorSession, AdvisorUseCase};

/// 構造化ログの出力先（ストアディレクトリ配下）
const LOG_FILENAME: &str = "advisor.log.jsonl";
const LOG_DIR: &str = "logs";

/// 配線で組み立てたポート群（UI レイヤーから利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub history_store: Arc<dyn HistoryStore>,
    /// 構造化ログ（ファイルへ JSONL）。ユーザー向けのコンソール報告とは別。
    pub logger: Arc<dyn Log>,
    pub advisor: AdvisorUseCase,
}

impl App {
    /// 計算画面のセッションを開始する（保存済み履歴の読み込みまで行う）
    pub fn start_session(&self) -> AdvisorSession {
        AdvisorSession::start(
            self.advisor.clone(),
            Arc::clone(&self.logger),
            Box::new(StderrReportSink::new()),
        )
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_advisor(store_dir: StoreDir) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        store_dir.join(LOG_DIR).join(LOG_FILENAME),
    ));
    let history_store: Arc<dyn HistoryStore> = Arc::new(FileHistoryStorage::new(
        Arc::clone(&fs),
        Arc::clone(&logger),
        &store_dir,
    ));
    let advisor = AdvisorUseCase::new(Arc::clone(&history_store));
    App {
        fs,
        history_store,
        logger,
        advisor,
    }
}
