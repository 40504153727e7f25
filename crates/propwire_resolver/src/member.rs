//! 階層走査で見つかったアクセサの記述。

use propwire_meta::{AnnotationTag, MethodEntry, TypeDescriptor};
use std::collections::{BTreeSet, HashSet};

/// アクセサの形状。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberShape {
    /// 引数なし・非 void 戻り値。
    Getter,
    /// 引数 1 つ・void 戻り値。
    Setter,
}

impl MemberShape {
    /// 名前の接頭辞と引数個数・戻り値から形状を判定する。
    ///
    /// 接頭辞の直後の文字が小文字でないことを要求する。`setX` や `isReady` は
    /// 該当し、`settle` や `issue`、接頭辞そのもの（`set`）は該当しない。
    pub fn matches<S: AsRef<str>>(self, method: &MethodEntry, prefixes: &[S]) -> bool {
        let shaped = match self {
            MemberShape::Getter => method.arity() == 0 && !method.return_type.is_void(),
            MemberShape::Setter => method.arity() == 1 && method.return_type.is_void(),
        };
        shaped
            && prefixes.iter().any(|prefix| {
                method
                    .name
                    .strip_prefix(prefix.as_ref())
                    .and_then(|rest| rest.chars().next())
                    .is_some_and(|ch| !ch.is_lowercase())
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            MemberShape::Getter => "getter",
            MemberShape::Setter => "setter",
        }
    }
}

/// ゲッター/セッターのスナップショット。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: String,
    pub declaring_type: String,
    pub shape: MemberShape,
    /// セッターなら引数型、ゲッターなら戻り値型。
    pub value_type: TypeDescriptor,
    /// 問い合わせた型を 0 とした祖先段数。
    pub depth: usize,
    pub annotations: BTreeSet<AnnotationTag>,
}

impl MemberDescriptor {
    /// 既に形状判定済みのメソッドから記述子を組み立てる。
    pub(crate) fn from_method(
        method: &MethodEntry,
        shape: MemberShape,
        declaring_type: &str,
        depth: usize,
    ) -> Self {
        let value_type = match shape {
            MemberShape::Getter => method.return_type.clone(),
            MemberShape::Setter => method.parameters[0].clone(),
        };
        Self {
            name: method.name.clone(),
            declaring_type: declaring_type.to_string(),
            shape,
            value_type,
            depth,
            annotations: method.annotations.clone(),
        }
    }

    pub fn parameter_type(&self) -> Option<&TypeDescriptor> {
        (self.shape == MemberShape::Setter).then_some(&self.value_type)
    }

    pub fn result_type(&self) -> Option<&TypeDescriptor> {
        (self.shape == MemberShape::Getter).then_some(&self.value_type)
    }
}

/// オーバーライドを考慮して重複を畳み込む。
///
/// 名前・形状・値型が同じものは最も浅い段の宣言だけを残し、順序は維持する。
/// 階層走査そのものは重複を除去しないため、集合的な扱いが必要な呼び出し側が使う。
pub fn dedup_overrides(mut members: Vec<MemberDescriptor>) -> Vec<MemberDescriptor> {
    members.sort_by_key(|member| member.depth);

    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|member| {
            seen.insert((
                member.name.clone(),
                member.shape,
                member.value_type.clone(),
            ))
        })
        .collect()
}
