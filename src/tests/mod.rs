//! モジュール横断のテスト（履歴ストア・セッション・配線）

mod session_tests;
