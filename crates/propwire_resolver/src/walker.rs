//! 型階層を祖先方向へ走査し、ゲッター/セッター形状のメソッドを収集する。
//!
//! 走査は重複除去を行わない。サブタイプが再宣言したセッターは宣言された段ごとに
//! 1 件ずつ現れ、`depth` で区別される。集合として扱いたい呼び出し側は
//! [`dedup_overrides`](crate::member::dedup_overrides) を明示的に使うこと。

use crate::ResolveError;
use crate::config::ResolverConfig;
use crate::member::{MemberDescriptor, MemberShape};
use propwire_meta::{TypeEntry, TypeHost};
use tracing::trace;

/// ホスト型システム上の祖先チェーンを走査するウォーカー。
#[derive(Debug, Clone)]
pub struct HierarchyWalker<'h, H: ?Sized> {
    host: &'h H,
    getter_prefixes: Vec<String>,
    setter_prefixes: Vec<String>,
}

impl<'h, H: TypeHost + ?Sized> HierarchyWalker<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self::with_config(host, &ResolverConfig::default())
    }

    pub fn with_config(host: &'h H, config: &ResolverConfig) -> Self {
        Self {
            host,
            getter_prefixes: config.getter_prefixes.clone(),
            setter_prefixes: config.setter_prefixes.clone(),
        }
    }

    pub fn host(&self) -> &'h H {
        self.host
    }

    /// 問い合わせ型から根までの祖先スナップショット（深さ順）。
    pub fn ancestry(&self, type_name: &str) -> Result<Vec<&'h TypeEntry>, ResolveError> {
        Ok(self.host.ancestry(type_name)?)
    }

    /// 祖先すべてのゲッターを宣言順・深さ順に返す。重複除去はしない。
    pub fn find_getters(&self, type_name: &str) -> Result<Vec<MemberDescriptor>, ResolveError> {
        self.collect(type_name, MemberShape::Getter)
    }

    /// 祖先すべてのセッターを宣言順・深さ順に返す。重複除去はしない。
    pub fn find_setters(&self, type_name: &str) -> Result<Vec<MemberDescriptor>, ResolveError> {
        self.collect(type_name, MemberShape::Setter)
    }

    fn collect(
        &self,
        type_name: &str,
        shape: MemberShape,
    ) -> Result<Vec<MemberDescriptor>, ResolveError> {
        let prefixes = match shape {
            MemberShape::Getter => self.getter_prefixes.as_slice(),
            MemberShape::Setter => self.setter_prefixes.as_slice(),
        };

        let mut members = Vec::new();
        for (depth, entry) in self.ancestry(type_name)?.into_iter().enumerate() {
            let before = members.len();
            members.extend(
                entry
                    .methods
                    .iter()
                    .filter(|method| shape.matches(method, prefixes))
                    .map(|method| {
                        MemberDescriptor::from_method(method, shape, &entry.fqcn, depth)
                    }),
            );
            trace!(
                ty = %entry.fqcn,
                depth,
                shape = shape.label(),
                found = members.len() - before,
                "scanned ancestor level"
            );
        }
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propwire_meta::{HierarchyError, JavaPrimitive, MethodEntry, TypeDescriptor, TypeIndex};

    fn long() -> TypeDescriptor {
        TypeDescriptor::primitive(JavaPrimitive::Long)
    }

    fn shadowing_index() -> TypeIndex {
        TypeIndex::new()
            .with_type(
                TypeEntry::new("a.Base")
                    .with_method(MethodEntry::setter("setId", long()))
                    .with_method(MethodEntry::getter("getId", long())),
            )
            .with_type(
                TypeEntry::new("a.Child")
                    .extends("a.Base")
                    .with_method(MethodEntry::setter("setId", long()))
                    .with_method(MethodEntry::setter(
                        "setName",
                        TypeDescriptor::reference("java.lang.String"),
                    )),
            )
    }

    #[test]
    fn redeclared_setter_appears_once_per_level() {
        let index = shadowing_index();
        let walker = HierarchyWalker::new(&index);
        let setters = walker.find_setters("a.Child").unwrap();

        let found: Vec<(&str, &str, usize)> = setters
            .iter()
            .map(|m| (m.name.as_str(), m.declaring_type.as_str(), m.depth))
            .collect();
        assert_eq!(
            found,
            vec![
                ("setId", "a.Child", 0),
                ("setName", "a.Child", 0),
                ("setId", "a.Base", 1),
            ]
        );
    }

    #[test]
    fn getters_are_collected_from_ancestors() {
        let index = shadowing_index();
        let walker = HierarchyWalker::new(&index);
        let getters = walker.find_getters("a.Child").unwrap();
        assert_eq!(getters.len(), 1);
        assert_eq!(getters[0].declaring_type, "a.Base");
        assert_eq!(getters[0].depth, 1);
        assert_eq!(getters[0].result_type(), Some(&long()));
    }

    #[test]
    fn configured_prefixes_replace_defaults() {
        let index = TypeIndex::new().with_type(
            TypeEntry::new("a.Fluent")
                .with_method(MethodEntry::setter("withLimit", long()))
                .with_method(MethodEntry::setter("setLimit", long())),
        );
        let config = ResolverConfig {
            setter_prefixes: vec!["with".to_string()],
            ..ResolverConfig::default()
        };
        let walker = HierarchyWalker::with_config(&index, &config);
        let setters = walker.find_setters("a.Fluent").unwrap();
        assert_eq!(setters.len(), 1);
        assert_eq!(setters[0].name, "withLimit");
    }

    #[test]
    fn unknown_type_is_reported() {
        let index = TypeIndex::new();
        let walker = HierarchyWalker::new(&index);
        let error = walker.find_setters("a.Nowhere").unwrap_err();
        assert!(matches!(
            error,
            ResolveError::Hierarchy(HierarchyError::UnknownType { .. })
        ));
    }
}
