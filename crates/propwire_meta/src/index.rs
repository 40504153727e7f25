use crate::descriptor::TypeDescriptor;
use crate::host::TypeHost;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Aggregated type metadata describing a closed hierarchy of classes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypeIndex {
    pub types: HashMap<String, TypeEntry>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup_type(&self, fqcn: &str) -> Option<&TypeEntry> {
        self.types.get(fqcn)
    }

    pub fn contains(&self, fqcn: &str) -> bool {
        self.types.contains_key(fqcn)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Inserts or replaces the entry registered under the entry's FQCN.
    pub fn add_type(&mut self, entry: TypeEntry) {
        self.types.insert(entry.fqcn.clone(), entry);
    }

    /// Builder-style variant of [`TypeIndex::add_type`].
    pub fn with_type(mut self, entry: TypeEntry) -> Self {
        self.add_type(entry);
        self
    }

    /// Supertype references that point outside of the index.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling: Vec<(&str, &str)> = self
            .types
            .values()
            .flat_map(|entry| {
                entry
                    .supertypes()
                    .filter(|name| !self.types.contains_key(*name))
                    .map(move |name| (entry.fqcn.as_str(), name))
            })
            .collect();
        dangling.sort();
        dangling
    }
}

impl TypeHost for TypeIndex {
    fn lookup_type(&self, name: &str) -> Option<&TypeEntry> {
        TypeIndex::lookup_type(self, name)
    }
}

/// Opaque marker attached to a field or method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationTag(String);

impl AnnotationTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnnotationTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AnnotationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a single class: its direct supertypes and the members it declares.
///
/// `fields` and `methods` keep declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeEntry {
    pub fqcn: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

impl TypeEntry {
    pub fn new(fqcn: impl Into<String>) -> Self {
        Self {
            fqcn: fqcn.into(),
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_field(mut self, field: FieldEntry) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodEntry) -> Self {
        self.methods.push(method);
        self
    }

    /// Direct supertypes: the superclass first, then interfaces in declaration order.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.superclass
            .as_deref()
            .into_iter()
            .chain(self.interfaces.iter().map(String::as_str))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|method| method.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub annotations: BTreeSet<AnnotationTag>,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: BTreeSet::new(),
        }
    }

    pub fn annotated(mut self, tag: impl Into<AnnotationTag>) -> Self {
        self.annotations.insert(tag.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<TypeDescriptor>,
    #[serde(default = "void_descriptor")]
    pub return_type: TypeDescriptor,
    #[serde(default)]
    pub annotations: BTreeSet<AnnotationTag>,
}

fn void_descriptor() -> TypeDescriptor {
    TypeDescriptor::Void
}

impl MethodEntry {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
            annotations: BTreeSet::new(),
        }
    }

    /// `void name(parameter)`
    pub fn setter(name: impl Into<String>, parameter: TypeDescriptor) -> Self {
        Self::new(name, vec![parameter], TypeDescriptor::Void)
    }

    /// `result name()`
    pub fn getter(name: impl Into<String>, result: TypeDescriptor) -> Self {
        Self::new(name, Vec::new(), result)
    }

    pub fn annotated(mut self, tag: impl Into<AnnotationTag>) -> Self {
        self.annotations.insert(tag.into());
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::JavaPrimitive;

    #[test]
    fn add_type_replaces_existing_entry() {
        let mut index = TypeIndex::new();
        index.add_type(TypeEntry::new("com.example.A"));
        index.add_type(
            TypeEntry::new("com.example.A").with_method(MethodEntry::setter(
                "setValue",
                TypeDescriptor::primitive(JavaPrimitive::Int),
            )),
        );

        assert_eq!(index.len(), 1);
        let entry = index.lookup_type("com.example.A").unwrap();
        assert!(entry.has_method("setValue"));
    }

    #[test]
    fn dangling_references_are_reported_in_order() {
        let index = TypeIndex::new()
            .with_type(
                TypeEntry::new("com.example.B")
                    .extends("com.example.Missing")
                    .implements("java.io.Serializable"),
            )
            .with_type(TypeEntry::new("com.example.A").extends("com.example.B"));

        assert_eq!(
            index.dangling_references(),
            vec![
                ("com.example.B", "com.example.Missing"),
                ("com.example.B", "java.io.Serializable"),
            ]
        );
    }
}
