//! 数値 widening 格子。
//!
//! 各行は「スロット種別 → 受け入れ可能な値の種別」を推移閉包済みで列挙する。
//! `BigInteger` は `double`/`float`/`BigDecimal` を受け入れないが、
//! `BigDecimal` は `BigInteger` を受け入れる。この非対称は規則表どおりに保持する。

use propwire_meta::{NumericKind, TypeDescriptor};

/// widening 判定を提供するテーブル。
#[derive(Debug, Default)]
pub struct WideningLattice;

impl WideningLattice {
    /// `to` 型のスロットが受け入れる自分以外の数値種別。
    pub fn accepted_sources(to: NumericKind) -> &'static [NumericKind] {
        use NumericKind::*;

        const NONE: &[NumericKind] = &[];
        const SHORT_SOURCES: &[NumericKind] = &[Byte];
        const CHAR_SOURCES: &[NumericKind] = &[Short, Byte];
        const INT_SOURCES: &[NumericKind] = &[Char, Short, Byte];
        const LONG_SOURCES: &[NumericKind] = &[Int, Char, Short, Byte];
        const FLOAT_SOURCES: &[NumericKind] = &[Long, Int, Char, Short, Byte];
        const DOUBLE_SOURCES: &[NumericKind] = &[Float, Long, Int, Char, Short, Byte];
        const BIG_INTEGER_SOURCES: &[NumericKind] = &[Long, Int, Char, Short, Byte];
        const BIG_DECIMAL_SOURCES: &[NumericKind] =
            &[Double, Float, Long, Int, Char, Short, Byte, BigInteger];

        match to {
            Byte => NONE,
            Short => SHORT_SOURCES,
            Char => CHAR_SOURCES,
            Int => INT_SOURCES,
            Long => LONG_SOURCES,
            Float => FLOAT_SOURCES,
            Double => DOUBLE_SOURCES,
            BigInteger => BIG_INTEGER_SOURCES,
            BigDecimal => BIG_DECIMAL_SOURCES,
        }
    }

    /// 種別同士の判定。同一種別は常に受け入れる。
    pub fn accepts(to: NumericKind, from: NumericKind) -> bool {
        to == from || Self::accepted_sources(to).contains(&from)
    }

    /// `from` の値を `to` と宣言されたスロットへ格納できるか。
    ///
    /// どちらかが数値種別でなければ（boolean を含む）常に `false`。
    pub fn widens(to: &TypeDescriptor, from: &TypeDescriptor) -> bool {
        match (to.numeric_kind(), from.numeric_kind()) {
            (Some(to), Some(from)) => Self::accepts(to, from),
            _ => false,
        }
    }
}

/// [`WideningLattice::widens`] の短縮形。
pub fn widens(to: &TypeDescriptor, from: &TypeDescriptor) -> bool {
    WideningLattice::widens(to, from)
}
