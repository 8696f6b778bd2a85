//! 計算の実行（純関数）と結果・エラー型
//!
//! ここでは副作用を一切起こさない。履歴への保存は usecase 側が
//! 結果を見てから明示的に行う。

use super::price::parse_price;
use super::recommendation::Fuel;

/// 計算エラー（Display がそのままユーザー向け文言になる）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    /// どちらかの入力が空
    #[error("Preencha os dois valores!")]
    EmptyInput,
    /// 数値として解釈できない入力
    #[error("Valores inválidos. Use números e vírgula ou ponto.")]
    InvalidNumber,
}

/// 1 回の計算の結果（生成後は不変）
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// パース済みアルコール価格
    pub alcohol_price: f64,
    /// パース済みガソリン価格
    pub gasoline_price: f64,
    /// 推奨燃料
    pub recommendation: Fuel,
    /// 表示・履歴共用の結果メッセージ
    pub message: String,
}

/// 2 つの価格文字列から推奨燃料と結果メッセージを作る。
///
/// 空チェックは正規化前の生文字列に対して行う（空白のみの入力は
/// 空扱いにならず、パース段階で InvalidNumber になる）。
/// ガソリン価格 0 はガードしない。比率が無限大・NaN になり、
/// 判定はガソリン側に倒れる。
pub fn calculate(
    alcohol_input: &str,
    gasoline_input: &str,
) -> Result<CalculationResult, CalculationError> {
    if alcohol_input.is_empty() || gasoline_input.is_empty() {
        return Err(CalculationError::EmptyInput);
    }
    let alcohol_price = parse_price(alcohol_input)?;
    let gasoline_price = parse_price(gasoline_input)?;
    let recommendation = Fuel::recommend(alcohol_price / gasoline_price);
    let message = format!(
        "Álcool: R${:.2}, Gasolina: R${:.2}. Abasteça com: {}",
        alcohol_price,
        gasoline_price,
        recommendation.label()
    );
    Ok(CalculationResult {
        alcohol_price,
        gasoline_price,
        recommendation,
        message,
    })
}
