//! 値の実行時型を受け入れられるセッターの解決。

use crate::ResolveError;
use crate::config::{ResolutionMode, ResolverConfig};
use crate::duality::is_boolean_mismatch;
use crate::lattice::WideningLattice;
use crate::member::MemberDescriptor;
use crate::walker::HierarchyWalker;
use propwire_meta::{TypeDescriptor, TypeHost};
use tracing::{debug, trace};

/// セッター引数と値型の一致理由。判定は列挙順に行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// 型が完全一致。strict モードで唯一許可される。
    Exact,
    /// 参照型として代入可能（引数型が値型の上位型）。
    Assignable,
    /// 数値 widening 格子による受け入れ。
    Widening,
    /// `boolean` と `java.lang.Boolean` の相互置換。
    BooleanDuality,
}

impl MatchKind {
    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Assignable => "assignable",
            MatchKind::Widening => "widening",
            MatchKind::BooleanDuality => "boolean-duality",
        }
    }
}

/// 一致したセッターと、それを受け入れた最初の値型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterMatch {
    pub member: MemberDescriptor,
    pub value_type: TypeDescriptor,
    pub kind: MatchKind,
}

/// 階層ウォーカーと互換性規則を組み合わせたリゾルバ。
#[derive(Debug, Clone)]
pub struct MemberResolver<'h, H: ?Sized> {
    walker: HierarchyWalker<'h, H>,
    mode: ResolutionMode,
}

impl<'h, H: TypeHost + ?Sized> MemberResolver<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self::with_config(host, &ResolverConfig::default())
    }

    pub fn with_config(host: &'h H, config: &ResolverConfig) -> Self {
        Self {
            walker: HierarchyWalker::with_config(host, config),
            mode: config.mode,
        }
    }

    pub fn walker(&self) -> &HierarchyWalker<'h, H> {
        &self.walker
    }

    /// 設定で既定されたモード。
    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn find_getters(&self, type_name: &str) -> Result<Vec<MemberDescriptor>, ResolveError> {
        self.walker.find_getters(type_name)
    }

    pub fn find_setters(&self, type_name: &str) -> Result<Vec<MemberDescriptor>, ResolveError> {
        self.walker.find_setters(type_name)
    }

    /// `value_kinds` のいずれかを受け入れるセッターを走査順で返す。
    ///
    /// `value_kinds` が空の場合は制約なしとして全セッターを返す。
    /// `strict` では完全一致のみ、そうでなければ代入可能性・数値 widening・
    /// boolean の相互置換も受け入れる。
    pub fn find_setters_for_type(
        &self,
        type_name: &str,
        strict: bool,
        value_kinds: &[TypeDescriptor],
    ) -> Result<Vec<MemberDescriptor>, ResolveError> {
        let setters = self.find_setters(type_name)?;
        if value_kinds.is_empty() {
            debug!(
                ty = type_name,
                candidates = setters.len(),
                "no value constraint; returning all setters"
            );
            return Ok(setters);
        }

        Ok(self
            .match_setters(type_name, setters, ResolutionMode::from(strict), value_kinds)?
            .into_iter()
            .map(|matched| matched.member)
            .collect())
    }

    /// 設定のモードで [`find_setters_for_type`](Self::find_setters_for_type) を行う。
    pub fn resolve(
        &self,
        type_name: &str,
        value_kinds: &[TypeDescriptor],
    ) -> Result<Vec<MemberDescriptor>, ResolveError> {
        self.find_setters_for_type(type_name, self.mode.is_strict(), value_kinds)
    }

    /// 一致理由付きで互換セッターを返す。空の `value_kinds` は一致なしとなる。
    pub fn find_setter_matches(
        &self,
        type_name: &str,
        mode: ResolutionMode,
        value_kinds: &[TypeDescriptor],
    ) -> Result<Vec<SetterMatch>, ResolveError> {
        let setters = self.find_setters(type_name)?;
        self.match_setters(type_name, setters, mode, value_kinds)
    }

    /// 単一の引数型と値型の一致判定。
    pub fn classify(
        &self,
        parameter: &TypeDescriptor,
        value: &TypeDescriptor,
        mode: ResolutionMode,
    ) -> Option<MatchKind> {
        if parameter == value {
            return Some(MatchKind::Exact);
        }
        if mode.is_strict() {
            return None;
        }
        if self.is_assignable(parameter, value) {
            Some(MatchKind::Assignable)
        } else if WideningLattice::widens(parameter, value) {
            Some(MatchKind::Widening)
        } else if is_boolean_mismatch(parameter, value) {
            Some(MatchKind::BooleanDuality)
        } else {
            None
        }
    }

    fn is_assignable(&self, parameter: &TypeDescriptor, value: &TypeDescriptor) -> bool {
        match (parameter.reference_name(), value.reference_name()) {
            (Some(parameter), Some(value)) => {
                self.walker.host().is_supertype_of(&parameter, &value)
            }
            _ => false,
        }
    }

    fn match_setters(
        &self,
        type_name: &str,
        setters: Vec<MemberDescriptor>,
        mode: ResolutionMode,
        value_kinds: &[TypeDescriptor],
    ) -> Result<Vec<SetterMatch>, ResolveError> {
        if value_kinds.iter().any(TypeDescriptor::is_void) {
            return Err(ResolveError::InvalidArgument {
                reason: "`void` is not a value type".to_string(),
            });
        }

        let candidates = setters.len();
        let matches: Vec<SetterMatch> = setters
            .into_iter()
            .filter_map(|member| {
                let (value_type, kind) = value_kinds.iter().find_map(|value| {
                    self.classify(&member.value_type, value, mode)
                        .map(|kind| (value.clone(), kind))
                })?;
                trace!(
                    setter = %member.name,
                    declaring = %member.declaring_type,
                    value = %value_type,
                    rule = kind.label(),
                    "setter accepts value type"
                );
                Some(SetterMatch {
                    member,
                    value_type,
                    kind,
                })
            })
            .collect();

        debug!(
            ty = type_name,
            strict = mode.is_strict(),
            values = value_kinds.len(),
            candidates,
            matched = matches.len(),
            "resolved setters for value types"
        );
        Ok(matches)
    }
}
