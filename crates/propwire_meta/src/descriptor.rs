//! Java 型記述子とプリミティブ/ボックス型の対応表。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

const BIG_INTEGER_FQCN: &str = "java.math.BigInteger";
const BIG_DECIMAL_FQCN: &str = "java.math.BigDecimal";

/// Java プリミティブ型の列挙。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JavaPrimitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl JavaPrimitive {
    pub const ALL: [JavaPrimitive; 8] = [
        JavaPrimitive::Boolean,
        JavaPrimitive::Byte,
        JavaPrimitive::Short,
        JavaPrimitive::Int,
        JavaPrimitive::Long,
        JavaPrimitive::Float,
        JavaPrimitive::Double,
        JavaPrimitive::Char,
    ];

    /// Java 言語仕様に基づくプリミティブ型名（lower case）。
    pub const fn java_name(self) -> &'static str {
        match self {
            JavaPrimitive::Boolean => "boolean",
            JavaPrimitive::Byte => "byte",
            JavaPrimitive::Short => "short",
            JavaPrimitive::Int => "int",
            JavaPrimitive::Long => "long",
            JavaPrimitive::Float => "float",
            JavaPrimitive::Double => "double",
            JavaPrimitive::Char => "char",
        }
    }

    /// 対応する boxed 型の完全修飾クラス名。
    pub const fn boxed_fqcn(self) -> &'static str {
        match self {
            JavaPrimitive::Boolean => "java.lang.Boolean",
            JavaPrimitive::Byte => "java.lang.Byte",
            JavaPrimitive::Short => "java.lang.Short",
            JavaPrimitive::Int => "java.lang.Integer",
            JavaPrimitive::Long => "java.lang.Long",
            JavaPrimitive::Float => "java.lang.Float",
            JavaPrimitive::Double => "java.lang.Double",
            JavaPrimitive::Char => "java.lang.Character",
        }
    }

    /// widening 格子に参加する数値種別。boolean は対象外。
    pub const fn numeric_kind(self) -> Option<NumericKind> {
        match self {
            JavaPrimitive::Boolean => None,
            JavaPrimitive::Byte => Some(NumericKind::Byte),
            JavaPrimitive::Short => Some(NumericKind::Short),
            JavaPrimitive::Int => Some(NumericKind::Int),
            JavaPrimitive::Long => Some(NumericKind::Long),
            JavaPrimitive::Float => Some(NumericKind::Float),
            JavaPrimitive::Double => Some(NumericKind::Double),
            JavaPrimitive::Char => Some(NumericKind::Char),
        }
    }

    /// Java のプリミティブ型名称から列挙値を生成する。
    pub fn from_java_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(JavaPrimitive::Boolean),
            "byte" => Some(JavaPrimitive::Byte),
            "short" => Some(JavaPrimitive::Short),
            "int" => Some(JavaPrimitive::Int),
            "long" => Some(JavaPrimitive::Long),
            "float" => Some(JavaPrimitive::Float),
            "double" => Some(JavaPrimitive::Double),
            "char" => Some(JavaPrimitive::Char),
            _ => None,
        }
    }

    /// Rust 風の別名（`i32` など）を含めてプリミティブを解決する。
    pub fn from_alias(identifier: &str) -> Option<Self> {
        match identifier {
            "bool" => Some(JavaPrimitive::Boolean),
            "i8" => Some(JavaPrimitive::Byte),
            "i16" => Some(JavaPrimitive::Short),
            "i32" => Some(JavaPrimitive::Int),
            "i64" => Some(JavaPrimitive::Long),
            "f32" => Some(JavaPrimitive::Float),
            "f64" => Some(JavaPrimitive::Double),
            _ => Self::from_java_name(identifier),
        }
    }

    /// Boxed 型の識別子（単純名/FQCN）からプリミティブ型を判定する。
    pub fn from_boxed(identifier: &str) -> Option<Self> {
        match identifier {
            "Integer" | "java.lang.Integer" => Some(JavaPrimitive::Int),
            "Long" | "java.lang.Long" => Some(JavaPrimitive::Long),
            "Short" | "java.lang.Short" => Some(JavaPrimitive::Short),
            "Byte" | "java.lang.Byte" => Some(JavaPrimitive::Byte),
            "Float" | "java.lang.Float" => Some(JavaPrimitive::Float),
            "Double" | "java.lang.Double" => Some(JavaPrimitive::Double),
            "Boolean" | "java.lang.Boolean" => Some(JavaPrimitive::Boolean),
            "Character" | "java.lang.Character" => Some(JavaPrimitive::Char),
            _ => None,
        }
    }
}

/// widening 格子上の数値表現。プリミティブとボックス型は同じ種別に畳み込まれる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumericKind {
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
}

impl NumericKind {
    pub const ALL: [NumericKind; 9] = [
        NumericKind::Byte,
        NumericKind::Short,
        NumericKind::Char,
        NumericKind::Int,
        NumericKind::Long,
        NumericKind::Float,
        NumericKind::Double,
        NumericKind::BigInteger,
        NumericKind::BigDecimal,
    ];
}

/// 型記述子の解析エラー。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("type identifier is empty")]
    Empty,
    #[error("invalid type identifier `{identifier}`")]
    InvalidIdentifier { identifier: String },
}

/// 実行時型の識別子。
///
/// 数値・真偽値の種別は格子判定に参加し、それ以外の参照型は
/// ホスト型システムの上位型関係のみで比較される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    Void,
    Primitive(JavaPrimitive),
    Boxed(JavaPrimitive),
    BigInteger,
    BigDecimal,
    Reference(String),
}

impl TypeDescriptor {
    pub fn primitive(primitive: JavaPrimitive) -> Self {
        TypeDescriptor::Primitive(primitive)
    }

    pub fn boxed(primitive: JavaPrimitive) -> Self {
        TypeDescriptor::Boxed(primitive)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference(name.into())
    }

    /// 文字列表現から記述子を組み立てる。
    ///
    /// プリミティブ名は小文字のみ受け付ける（`Boolean` は boxed 型として扱う）。
    /// 配列型（`byte[]` や JVM 形式の `[B`）は表記を保ったまま参照型になる。
    pub fn parse(identifier: &str) -> Result<Self, DescriptorError> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(DescriptorError::Empty);
        }

        if trimmed == "void" {
            return Ok(TypeDescriptor::Void);
        }
        if let Some(primitive) = JavaPrimitive::from_alias(trimmed) {
            return Ok(TypeDescriptor::Primitive(primitive));
        }
        if let Some(primitive) = JavaPrimitive::from_boxed(trimmed) {
            return Ok(TypeDescriptor::Boxed(primitive));
        }

        match trimmed {
            "BigInteger" | BIG_INTEGER_FQCN => Ok(TypeDescriptor::BigInteger),
            "BigDecimal" | BIG_DECIMAL_FQCN => Ok(TypeDescriptor::BigDecimal),
            name if is_qualified_name(name) || is_array_name(name) => {
                Ok(TypeDescriptor::Reference(name.to_string()))
            }
            _ => Err(DescriptorError::InvalidIdentifier {
                identifier: trimmed.to_string(),
            }),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Void)
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            TypeDescriptor::Primitive(primitive) | TypeDescriptor::Boxed(primitive) => {
                primitive.numeric_kind()
            }
            TypeDescriptor::BigInteger => Some(NumericKind::BigInteger),
            TypeDescriptor::BigDecimal => Some(NumericKind::BigDecimal),
            TypeDescriptor::Void | TypeDescriptor::Reference(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric_kind().is_some()
    }

    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Primitive(JavaPrimitive::Boolean)
                | TypeDescriptor::Boxed(JavaPrimitive::Boolean)
        )
    }

    /// 参照型として扱える場合のクラス名。プリミティブと `void` は `None`。
    pub fn reference_name(&self) -> Option<Cow<'_, str>> {
        match self {
            TypeDescriptor::Boxed(primitive) => Some(Cow::Borrowed(primitive.boxed_fqcn())),
            TypeDescriptor::BigInteger => Some(Cow::Borrowed(BIG_INTEGER_FQCN)),
            TypeDescriptor::BigDecimal => Some(Cow::Borrowed(BIG_DECIMAL_FQCN)),
            TypeDescriptor::Reference(name) => Some(Cow::Borrowed(name.as_str())),
            TypeDescriptor::Void | TypeDescriptor::Primitive(_) => None,
        }
    }

    /// boxing の相方。プリミティブ⇔ボックスの全単射で、それ以外は `None`。
    pub fn boxing_counterpart(&self) -> Option<TypeDescriptor> {
        match self {
            TypeDescriptor::Primitive(primitive) => Some(TypeDescriptor::Boxed(*primitive)),
            TypeDescriptor::Boxed(primitive) => Some(TypeDescriptor::Primitive(*primitive)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Void => f.write_str("void"),
            TypeDescriptor::Primitive(primitive) => f.write_str(primitive.java_name()),
            TypeDescriptor::Boxed(primitive) => f.write_str(primitive.boxed_fqcn()),
            TypeDescriptor::BigInteger => f.write_str(BIG_INTEGER_FQCN),
            TypeDescriptor::BigDecimal => f.write_str(BIG_DECIMAL_FQCN),
            TypeDescriptor::Reference(name) => f.write_str(name),
        }
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeDescriptor::parse(&value)
    }
}

impl From<TypeDescriptor> for String {
    fn from(value: TypeDescriptor) -> Self {
        value.to_string()
    }
}

fn is_qualified_name(name: &str) -> bool {
    name.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => chars
                .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$'),
            _ => false,
        }
    })
}

/// `byte[]` のようなソース形式か、`[B`・`[Ljava.lang.String;` の JVM 形式の配列型。
fn is_array_name(name: &str) -> bool {
    if let Some(component) = name.strip_prefix('[') {
        return is_jvm_component(component);
    }

    let mut element = name;
    let mut dimensions = 0;
    while let Some(rest) = element.strip_suffix("[]") {
        element = rest.trim_end();
        dimensions += 1;
    }
    dimensions > 0
        && (JavaPrimitive::from_java_name(element).is_some() || is_qualified_name(element))
}

fn is_jvm_component(component: &str) -> bool {
    match component.as_bytes().first() {
        Some(b'[') => is_jvm_component(&component[1..]),
        Some(b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z') => component.len() == 1,
        Some(b'L') => component[1..]
            .strip_suffix(';')
            .is_some_and(is_qualified_name),
        _ => false,
    }
}
