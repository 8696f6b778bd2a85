//! Inbound ポート: UI レイヤーがサブシステムを駆動するインターフェース
//!
//! UI が送るのは 2 つの価格文字列と 2 つのトリガー（calculate / dismiss）のみ。
//! 受け取るのは表示状態（画面の開閉・入力値・結果メッセージ・履歴リスト）のみ。
//! 描画そのものはこのクレートの範囲外。

/// 燃料計算画面の操作面
pub trait FuelCalculator {
    /// アルコール価格入力の変更を反映する
    fn set_alcohol_price(&mut self, text: &str);

    /// ガソリン価格入力の変更を反映する
    fn set_gasoline_price(&mut self, text: &str);

    /// 計算画面を開く
    fn open_calculator(&mut self);

    /// 計算画面を閉じる。入力・結果・履歴には触れない
    fn dismiss(&mut self);

    /// 保持中の入力で計算を実行し、結果（またはエラー文言）を反映して画面を閉じる。
    /// 成功時は履歴への追記まで行う
    fn calculate(&mut self);

    /// 計算画面が表示中かどうか
    fn calculator_visible(&self) -> bool;

    /// 現在のアルコール価格入力
    fn alcohol_price_input(&self) -> &str;

    /// 現在のガソリン価格入力
    fn gasoline_price_input(&self) -> &str;

    /// 表示する結果メッセージ（計算前は None、エラー時はエラー文言）
    fn result_message(&self) -> Option<&str>;

    /// 描画用の履歴（古い順）
    fn history(&self) -> &[String];
}
