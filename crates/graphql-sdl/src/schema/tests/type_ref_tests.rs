use crate::ast::TypeReference;
use crate::schema::TypeRef;

#[test]
fn from_ast_preserves_wrapper_structure() {
    // [[ID!]]!
    let ast_ref = TypeReference::non_null(TypeReference::list_of(
        TypeReference::list_of(TypeReference::non_null(
            TypeReference::named("ID"),
        )),
    ));
    let realized = TypeRef::from_ast(&ast_ref);

    assert_eq!(
        realized,
        TypeRef::non_null(TypeRef::list_of(TypeRef::list_of(
            TypeRef::non_null(TypeRef::named("ID")),
        ))),
    );
    assert_eq!(realized.simple_print(), "[[ID!]]!");
    assert_eq!(realized.innermost_name(), "ID");
}

#[test]
fn from_ast_handles_deep_wrapper_chains() {
    let mut ast_ref = TypeReference::named("T");
    for _ in 0..10_000 {
        ast_ref = TypeReference::list_of(ast_ref);
    }
    let realized = TypeRef::from_ast(&ast_ref);
    assert_eq!(realized.innermost_name(), "T");
}

#[test]
fn walk_visits_outermost_first() {
    let type_ref =
        TypeRef::non_null(TypeRef::list_of(TypeRef::named("Widget")));

    let mut prints = vec![];
    type_ref.walk(|node| prints.push(node.simple_print()));
    assert_eq!(prints, vec!["[Widget]!", "[Widget]", "Widget"]);
}
