use crate::adapter::{FileHistoryStorage, NoopLog, SilentReportSink, StdFileSystem};
use crate::domain::StoreDir;
use crate::error::Error;
use crate::ports::inbound::FuelCalculator;
use crate::ports::outbound::{FileSystem, HistoryStore, Log, ReportSink};
use crate::usecase::{AdvisorSession, AdvisorUseCase};
use crate::wiring::wire_advisor;
use anyhow::Result;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 報告をため込む Sink（文言の検証用）
struct CollectReportSink(Arc<Mutex<Vec<String>>>);

impl ReportSink for CollectReportSink {
    fn report(&mut self, message: &str) -> Result<()> {
        self.0.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// 読み込みは固定値を返し、追記だけ失敗するストア
struct FailingStore {
    entries: Vec<String>,
}

impl HistoryStore for FailingStore {
    fn load(&self) -> Result<Vec<String>, Error> {
        Ok(self.entries.clone())
    }

    fn append(&self, _message: &str) -> Result<Vec<String>, Error> {
        Err(Error::io_msg("disk full"))
    }
}

/// 読み込みも追記も失敗するストア
struct BrokenStore;

impl HistoryStore for BrokenStore {
    fn load(&self) -> Result<Vec<String>, Error> {
        Err(Error::io_msg("permission denied"))
    }

    fn append(&self, _message: &str) -> Result<Vec<String>, Error> {
        Err(Error::io_msg("permission denied"))
    }
}

fn file_store(dir: &Path) -> Arc<dyn HistoryStore> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = Arc::new(NoopLog);
    Arc::new(FileHistoryStorage::new(fs, logger, &StoreDir::new(dir)))
}

fn session_with(store: Arc<dyn HistoryStore>) -> AdvisorSession {
    AdvisorSession::start(
        AdvisorUseCase::new(store),
        Arc::new(NoopLog),
        Box::new(SilentReportSink),
    )
}

#[test]
fn start_begins_hidden_and_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let session = session_with(file_store(tmp.path()));

    assert!(!session.calculator_visible());
    assert_eq!(session.alcohol_price_input(), "");
    assert_eq!(session.gasoline_price_input(), "");
    assert_eq!(session.result_message(), None);
    assert!(session.history().is_empty());
}

#[test]
fn start_loads_persisted_history() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());
    store.append("earlier run").unwrap();

    let session = session_with(store);
    assert_eq!(session.history(), ["earlier run"]);
}

#[test]
fn calculation_at_exact_ratio_limit_recommends_gasoline() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());
    let mut session = session_with(Arc::clone(&store));

    session.open_calculator();
    session.set_alcohol_price("3,50");
    session.set_gasoline_price("5,00");
    session.calculate();

    let expected = "Álcool: R$3.50, Gasolina: R$5.00. Abasteça com: Gasolina";
    assert_eq!(session.result_message(), Some(expected));
    assert_eq!(session.history(), [expected]);
    assert_eq!(store.load().unwrap(), vec![expected]);
    assert!(!session.calculator_visible());
}

#[test]
fn calculation_below_ratio_limit_recommends_alcohol() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_with(file_store(tmp.path()));

    session.set_alcohol_price("3,49");
    session.set_gasoline_price("5,00");
    session.calculate();

    assert_eq!(
        session.result_message(),
        Some("Álcool: R$3.49, Gasolina: R$5.00. Abasteça com: Álcool")
    );
}

#[test]
fn consecutive_calculations_accumulate_oldest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());
    let mut session = session_with(Arc::clone(&store));

    session.set_alcohol_price("3,49");
    session.set_gasoline_price("5,00");
    session.calculate();
    session.set_alcohol_price("4,00");
    session.calculate();

    let expected = [
        "Álcool: R$3.49, Gasolina: R$5.00. Abasteça com: Álcool",
        "Álcool: R$4.00, Gasolina: R$5.00. Abasteça com: Gasolina",
    ];
    assert_eq!(session.history(), expected);
    assert_eq!(store.load().unwrap(), expected);
}

#[test]
fn empty_input_shows_prompt_and_leaves_history_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());
    let mut session = session_with(Arc::clone(&store));

    session.open_calculator();
    session.set_alcohol_price("3,50");
    session.calculate();

    assert_eq!(session.result_message(), Some("Preencha os dois valores!"));
    assert!(session.history().is_empty());
    assert_eq!(store.load().unwrap(), Vec::<String>::new());
    // 画面はエラーでも閉じる
    assert!(!session.calculator_visible());
}

#[test]
fn invalid_input_shows_invalid_message_and_leaves_history_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());
    let mut session = session_with(Arc::clone(&store));

    session.set_alcohol_price("abc");
    session.set_gasoline_price("5,00");
    session.calculate();

    assert_eq!(
        session.result_message(),
        Some("Valores inválidos. Use números e vírgula ou ponto.")
    );
    assert!(session.history().is_empty());
}

#[test]
fn append_failure_keeps_result_and_reports_save_error() {
    let store = Arc::new(FailingStore {
        entries: vec!["old".to_string()],
    });
    let reports = Arc::new(Mutex::new(Vec::new()));
    let mut session = AdvisorSession::start(
        AdvisorUseCase::new(store),
        Arc::new(NoopLog),
        Box::new(CollectReportSink(Arc::clone(&reports))),
    );
    assert_eq!(session.history(), ["old"]);

    session.set_alcohol_price("3,50");
    session.set_gasoline_price("5,00");
    session.calculate();

    // 結果は表示されるが、メモリ上の履歴は変化しない
    assert_eq!(
        session.result_message(),
        Some("Álcool: R$3.50, Gasolina: R$5.00. Abasteça com: Gasolina")
    );
    assert_eq!(session.history(), ["old"]);

    let reported = reports.lock().unwrap();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0], "Erro ao salvar o histórico: disk full");
}

#[test]
fn load_failure_at_start_reports_and_starts_empty() {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let mut session = AdvisorSession::start(
        AdvisorUseCase::new(Arc::new(BrokenStore)),
        Arc::new(NoopLog),
        Box::new(CollectReportSink(Arc::clone(&reports))),
    );

    assert!(session.history().is_empty());
    assert_eq!(
        reports.lock().unwrap().as_slice(),
        ["Erro ao carregar o histórico: permission denied"]
    );

    // セッションはそのまま使える（計算はでき、追記失敗も報告される）
    session.set_alcohol_price("3,00");
    session.set_gasoline_price("5,00");
    session.calculate();
    assert_eq!(
        session.result_message(),
        Some("Álcool: R$3.00, Gasolina: R$5.00. Abasteça com: Álcool")
    );
    assert_eq!(
        reports.lock().unwrap().last().map(String::as_str),
        Some("Erro ao salvar o histórico: permission denied")
    );
}

#[test]
fn dismiss_hides_the_screen_and_keeps_everything_else() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_with(file_store(tmp.path()));

    session.open_calculator();
    session.set_alcohol_price("3,49");
    session.set_gasoline_price("5,00");
    session.calculate();
    session.open_calculator();
    assert!(session.calculator_visible());

    session.dismiss();

    assert!(!session.calculator_visible());
    assert_eq!(session.alcohol_price_input(), "3,49");
    assert_eq!(session.gasoline_price_input(), "5,00");
    assert_eq!(
        session.result_message(),
        Some("Álcool: R$3.49, Gasolina: R$5.00. Abasteça com: Álcool")
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn two_sessions_share_persisted_history() {
    let tmp = tempfile::tempdir().unwrap();
    let store = file_store(tmp.path());

    let mut first = session_with(Arc::clone(&store));
    first.set_alcohol_price("2,00");
    first.set_gasoline_price("5,00");
    first.calculate();

    let second = session_with(store);
    assert_eq!(
        second.history(),
        ["Álcool: R$2.00, Gasolina: R$5.00. Abasteça com: Álcool"]
    );
}

#[test]
fn wire_advisor_builds_a_working_app() {
    let tmp = tempfile::tempdir().unwrap();
    let app = wire_advisor(StoreDir::new(tmp.path()));

    let mut session = app.start_session();
    session.set_alcohol_price("3,50");
    session.set_gasoline_price("5,00");
    session.calculate();

    let slot = tmp.path().join("fuelCalculationHistory.json");
    assert!(app.fs.exists(&slot));
    assert_eq!(
        app.history_store.load().unwrap(),
        ["Álcool: R$3.50, Gasolina: R$5.00. Abasteça com: Gasolina"]
    );
    // 構造化ログはストアディレクトリ配下の logs/ に JSONL で書かれる
    assert!(app.fs.exists(&tmp.path().join("logs").join("advisor.log.jsonl")));
}
