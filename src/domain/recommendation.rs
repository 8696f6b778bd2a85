//! 給油判定ルール（アルコール価格 / ガソリン価格の比率）

use std::fmt;

/// アルコールが有利と判定する比率の上限（これ未満ならアルコール）
pub const ALCOHOL_RATIO_LIMIT: f64 = 0.7;

/// 推奨燃料
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuel {
    Alcohol,
    Gasoline,
}

impl Fuel {
    /// 比率（アルコール価格 ÷ ガソリン価格）から推奨燃料を決める。
    ///
    /// 比率がちょうど上限・無限大・NaN のときはガソリン側に倒れる
    /// （`<` の比較が成立しないため。ガソリン価格 0 をガードしない理由）。
    pub fn recommend(ratio: f64) -> Fuel {
        if ratio < ALCOHOL_RATIO_LIMIT {
            Fuel::Alcohol
        } else {
            Fuel::Gasoline
        }
    }

    /// 結果メッセージに埋め込む表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Fuel::Alcohol => "Álcool",
            Fuel::Gasoline => "Gasolina",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
