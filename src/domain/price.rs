//! 価格入力の正規化とパース
//!
//! 小数点はピリオドとカンマの両方を受け付ける（カンマはピリオドへ正規化）。
//! 前後の空白は無視する。それ以外の形式ゆらぎは許容せず InvalidNumber にする。

use super::calculation::CalculationError;

/// 価格文字列を f64 にパースする。
///
/// 正規化（trim + カンマ→ピリオド置換）後に文字列全体を数値として解釈する。
/// 数値にならない入力、および NaN になる入力は InvalidNumber。
/// 空文字チェックは呼び出し側（calculate）が正規化前の文字列に対して行う。
pub fn parse_price(input: &str) -> Result<f64, CalculationError> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| CalculationError::InvalidNumber)?;
    if value.is_nan() {
        return Err(CalculationError::InvalidNumber);
    }
    Ok(value)
}
