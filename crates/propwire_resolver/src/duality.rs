use propwire_meta::{JavaPrimitive, TypeDescriptor};

/// `boolean` と `java.lang.Boolean` の組み合わせ（順不同）のときだけ `true`。
///
/// 同じ boolean 種別同士は完全一致として扱われるため、ここでは `false`。
pub fn is_boolean_mismatch(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    use TypeDescriptor::{Boxed, Primitive};

    matches!(
        (a, b),
        (Primitive(JavaPrimitive::Boolean), Boxed(JavaPrimitive::Boolean))
            | (Boxed(JavaPrimitive::Boolean), Primitive(JavaPrimitive::Boolean))
    )
}
