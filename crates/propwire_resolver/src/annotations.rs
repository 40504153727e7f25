//! アノテーションタグによるフィールド/メソッドの絞り込み。
//!
//! 空のタグ列に対して `has_all` は常に `true`、`has_any` は常に `false` を返す。
//!
//! `has_all`/`has_any` は検証を行わない純粋な述語で、空白のタグは単に存在しない
//! タグとして扱う。空白タグを不正引数として拒否するのは `find_*_with_*` の入口のみ。

use crate::ResolveError;
use crate::member::MemberDescriptor;
use crate::walker::HierarchyWalker;
use propwire_meta::{AnnotationTag, FieldEntry, MethodEntry, TypeEntry, TypeHost};
use std::collections::BTreeSet;
use tracing::trace;

/// タグ集合を持つ要素。
pub trait Annotated {
    fn annotations(&self) -> &BTreeSet<AnnotationTag>;
}

impl Annotated for FieldEntry {
    fn annotations(&self) -> &BTreeSet<AnnotationTag> {
        &self.annotations
    }
}

impl Annotated for MethodEntry {
    fn annotations(&self) -> &BTreeSet<AnnotationTag> {
        &self.annotations
    }
}

impl Annotated for MemberDescriptor {
    fn annotations(&self) -> &BTreeSet<AnnotationTag> {
        &self.annotations
    }
}

/// `tags` のすべてを持つか。
pub fn has_all<A: Annotated + ?Sized>(member: &A, tags: &[AnnotationTag]) -> bool {
    let present = member.annotations();
    tags.iter().all(|tag| present.contains(tag))
}

/// `tags` のいずれかを持つか。
pub fn has_any<A: Annotated + ?Sized>(member: &A, tags: &[AnnotationTag]) -> bool {
    let present = member.annotations();
    tags.iter().any(|tag| present.contains(tag))
}

/// 祖先チェーン上で見つかった宣言と、その宣言元。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declared<'h, T> {
    pub item: &'h T,
    pub declaring_type: &'h str,
    pub depth: usize,
}

type Predicate<T> = fn(&T, &[AnnotationTag]) -> bool;

impl<'h, H: TypeHost + ?Sized> HierarchyWalker<'h, H> {
    pub fn find_fields_with_all(
        &self,
        type_name: &str,
        tags: &[AnnotationTag],
    ) -> Result<Vec<Declared<'h, FieldEntry>>, ResolveError> {
        self.find_declared(type_name, tags, fields_of, has_all)
    }

    pub fn find_fields_with_any(
        &self,
        type_name: &str,
        tags: &[AnnotationTag],
    ) -> Result<Vec<Declared<'h, FieldEntry>>, ResolveError> {
        self.find_declared(type_name, tags, fields_of, has_any)
    }

    pub fn find_methods_with_all(
        &self,
        type_name: &str,
        tags: &[AnnotationTag],
    ) -> Result<Vec<Declared<'h, MethodEntry>>, ResolveError> {
        self.find_declared(type_name, tags, methods_of, has_all)
    }

    pub fn find_methods_with_any(
        &self,
        type_name: &str,
        tags: &[AnnotationTag],
    ) -> Result<Vec<Declared<'h, MethodEntry>>, ResolveError> {
        self.find_declared(type_name, tags, methods_of, has_any)
    }

    /// 祖先の全段を走査する。getter/setter と同様に重複除去はしない。
    fn find_declared<T: 'h>(
        &self,
        type_name: &str,
        tags: &[AnnotationTag],
        items: fn(&TypeEntry) -> &[T],
        predicate: Predicate<T>,
    ) -> Result<Vec<Declared<'h, T>>, ResolveError> {
        if tags.iter().any(|tag| tag.as_str().trim().is_empty()) {
            return Err(ResolveError::InvalidArgument {
                reason: "annotation tags must not be blank".to_string(),
            });
        }

        let mut found = Vec::new();
        for (depth, entry) in self.ancestry(type_name)?.into_iter().enumerate() {
            found.extend(
                items(entry)
                    .iter()
                    .filter(|&item| predicate(item, tags))
                    .map(|item| Declared {
                        item,
                        declaring_type: entry.fqcn.as_str(),
                        depth,
                    }),
            );
        }
        trace!(ty = type_name, tags = tags.len(), found = found.len(), "annotation query");
        Ok(found)
    }
}

fn fields_of(entry: &TypeEntry) -> &[FieldEntry] {
    &entry.fields
}

fn methods_of(entry: &TypeEntry) -> &[MethodEntry] {
    &entry.methods
}
