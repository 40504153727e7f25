use propwire_meta::{AnnotationTag, JavaPrimitive, TypeDescriptor, TypeIndex};
use propwire_resolver::{HierarchyWalker, MemberResolver, MemberShape, ResolveError, has_all};

const ENTITY_METADATA: &str = r#"{
  "types": [
    {
      "fqcn": "com.example.Auditable",
      "fields": [
        { "name": "createdBy", "type": "java.lang.String", "annotations": ["Column", "Audit"] }
      ],
      "methods": [
        { "name": "setCreatedBy", "parameters": ["java.lang.String"], "annotations": ["Audit"] },
        { "name": "getCreatedBy", "return_type": "java.lang.String" },
        { "name": "setVersion", "parameters": ["int"] }
      ]
    },
    {
      "fqcn": "com.example.Order",
      "superclass": "com.example.Auditable",
      "fields": [
        { "name": "total", "type": "java.math.BigDecimal", "annotations": ["Column"] },
        { "name": "cache", "type": "java.lang.Object" }
      ],
      "methods": [
        { "name": "setVersion", "parameters": ["int"], "annotations": ["Override"] },
        { "name": "setTotal", "parameters": ["java.math.BigDecimal"], "annotations": ["Column", "Inject"] },
        { "name": "getTotal", "return_type": "java.math.BigDecimal" },
        { "name": "isPaid", "return_type": "boolean" },
        { "name": "recalculate", "parameters": ["boolean", "int"] },
        { "name": "setup" }
      ]
    }
  ]
}"#;

fn tags(names: &[&str]) -> Vec<AnnotationTag> {
    names.iter().copied().map(AnnotationTag::from).collect()
}

fn index() -> TypeIndex {
    TypeIndex::from_json_str(ENTITY_METADATA).expect("fixture metadata is valid")
}

#[test]
fn setters_are_listed_per_declaring_level() {
    let index = index();
    let walker = HierarchyWalker::new(&index);
    let setters = walker.find_setters("com.example.Order").unwrap();

    let listed: Vec<(&str, usize)> = setters
        .iter()
        .map(|member| (member.name.as_str(), member.depth))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("setVersion", 0),
            ("setTotal", 0),
            ("setCreatedBy", 1),
            ("setVersion", 1),
        ]
    );
    assert!(setters.iter().all(|m| m.shape == MemberShape::Setter));
    assert_eq!(
        setters[0].parameter_type(),
        Some(&TypeDescriptor::primitive(JavaPrimitive::Int))
    );
}

#[test]
fn getters_include_boolean_predicates() {
    let index = index();
    let resolver = MemberResolver::new(&index);
    let getters = resolver.find_getters("com.example.Order").unwrap();

    let listed: Vec<&str> = getters.iter().map(|member| member.name.as_str()).collect();
    assert_eq!(listed, vec!["getTotal", "isPaid", "getCreatedBy"]);
}

#[test]
fn annotated_fields_are_found_on_every_level() {
    let index = index();
    let walker = HierarchyWalker::new(&index);

    let columns = walker
        .find_fields_with_all("com.example.Order", &tags(&["Column"]))
        .unwrap();
    let found: Vec<(&str, &str, usize)> = columns
        .iter()
        .map(|decl| (decl.item.name.as_str(), decl.declaring_type, decl.depth))
        .collect();
    assert_eq!(
        found,
        vec![
            ("total", "com.example.Order", 0),
            ("createdBy", "com.example.Auditable", 1),
        ]
    );

    let audited = walker
        .find_fields_with_all("com.example.Order", &tags(&["Column", "Audit"]))
        .unwrap();
    assert_eq!(audited.len(), 1);
    assert_eq!(audited[0].item.name, "createdBy");
}

#[test]
fn empty_tag_queries_are_vacuous() {
    let index = index();
    let walker = HierarchyWalker::new(&index);

    let all = walker.find_fields_with_all("com.example.Order", &[]).unwrap();
    assert_eq!(all.len(), 3);

    let any = walker.find_fields_with_any("com.example.Order", &[]).unwrap();
    assert!(any.is_empty());

    let methods = walker.find_methods_with_all("com.example.Order", &[]).unwrap();
    assert_eq!(methods.len(), 9);
}

#[test]
fn method_queries_cover_every_shape() {
    let index = index();
    let walker = HierarchyWalker::new(&index);

    let any = walker
        .find_methods_with_any("com.example.Order", &tags(&["Inject", "Audit"]))
        .unwrap();
    let names: Vec<&str> = any.iter().map(|decl| decl.item.name.as_str()).collect();
    assert_eq!(names, vec!["setTotal", "setCreatedBy"]);

    let all = walker
        .find_methods_with_all("com.example.Order", &tags(&["Inject", "Column"]))
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].item.name, "setTotal");
}

#[test]
fn member_descriptors_carry_annotations() {
    let index = index();
    let walker = HierarchyWalker::new(&index);
    let setters = walker.find_setters("com.example.Order").unwrap();

    let injected: Vec<&str> = setters
        .iter()
        .filter(|member| has_all(*member, &tags(&["Inject"])))
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(injected, vec!["setTotal"]);
}

#[test]
fn blank_tags_are_rejected() {
    let index = index();
    let walker = HierarchyWalker::new(&index);
    let error = walker
        .find_methods_with_any("com.example.Order", &tags(&["Inject", " "]))
        .unwrap_err();
    assert!(matches!(error, ResolveError::InvalidArgument { .. }));
}
