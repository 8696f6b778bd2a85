//! Ports & Adapters のポート定義
//!
//! - inbound: UI レイヤー（描画側）がこのサブシステムを駆動するインターフェース
//! - outbound: サブシステムが外界（ファイル保存・ログ・報告）を使うための trait

pub mod inbound;
pub mod outbound;
