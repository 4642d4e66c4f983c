use super::*;
use crate::test_fixtures::*;
use tsbind_common::{InterfaceInfo, ParsedInfo, PropertyInfo, TypeInfo, TypeParameter};

fn render_in_root(parsed: &ParsedInfo, root: &str, ty: &TypeInfo) -> Result<String, SolverError> {
    let universe = TypeUniverse::new(parsed);
    let resolver = TypeResolver::new(&universe);
    let root = universe.interface(root).expect("root interface");
    resolver.render(ty, &SymbolParent::root(root), None, None)
}

fn holder() -> InterfaceInfo {
    InterfaceInfo::new("Holder")
}

#[test]
fn test_builtin_keywords() {
    let parsed = parsed(vec![holder()]);
    let cases = [
        ("any", "IJSObject"),
        ("void", "IJSObject"),
        ("null", "IJSObject"),
        ("", "IJSObject"),
        ("undefined", "JSUndefined"),
        ("boolean", "JSBoolean"),
        ("string", "JSString"),
        ("number", "JSNumber"),
    ];
    for (name, expected) in cases {
        let rendered = render_in_root(&parsed, "Holder", &TypeInfo::named(name)).unwrap();
        assert_eq!(rendered, expected, "rendering '{name}'");
    }
}

#[test]
fn test_arrays_of_builtin_scalars() {
    let parsed = parsed(vec![holder()]);
    let cases = [
        (string(), "IJSArray<JSString>"),
        (number(), "IJSArray<JSNumber>"),
        (boolean(), "IJSArray<JSBoolean>"),
        (TypeInfo::named("undefined"), "IJSArray<JSUndefined>"),
        (TypeInfo::any(), "IJSArray<IJSObject>"),
    ];
    for (element, expected) in cases {
        let rendered = render_in_root(&parsed, "Holder", &TypeInfo::array(element)).unwrap();
        assert_eq!(rendered, expected);
    }
}

#[test]
fn test_function_and_unresolved_shapes() {
    let parsed = parsed(vec![holder()]);
    assert_eq!(
        render_in_root(&parsed, "Holder", &TypeInfo::Function).unwrap(),
        "JSFunction"
    );
    assert_eq!(
        render_in_root(&parsed, "Holder", &TypeInfo::Unresolved).unwrap(),
        "IJSObject"
    );
}

#[test]
fn test_unresolved_uses_fallback() {
    let parsed = parsed(vec![holder()]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let ctx = SymbolParent::root(universe.interface("Holder").unwrap());

    let rendered = resolver
        .render(&TypeInfo::Unresolved, &ctx, None, Some(&string()))
        .unwrap();
    assert_eq!(rendered, "JSString");

    // The fallback only applies to the outer reference.
    let rendered = resolver
        .render(&TypeInfo::array(TypeInfo::Unresolved), &ctx, None, Some(&string()))
        .unwrap();
    assert_eq!(rendered, "IJSArray<IJSObject>");
}

#[test]
fn test_unknown_name_renders_object() {
    let parsed = parsed(vec![holder()]);
    let rendered = render_in_root(&parsed, "Holder", &TypeInfo::named("HTMLCollectionOf")).unwrap();
    assert_eq!(rendered, "IJSObject");
}

#[test]
fn test_alias_chain_expands() {
    let mut parsed = parsed(vec![holder()]);
    parsed.type_aliases = vec![
        alias("DOMString", string()),
        alias("Names", TypeInfo::array(TypeInfo::named("DOMString"))),
    ];
    let rendered = render_in_root(&parsed, "Holder", &TypeInfo::named("Names")).unwrap();
    assert_eq!(rendered, "IJSArray<JSString>");
}

#[test]
fn test_alias_cycle_is_reported_with_chain() {
    let mut parsed = parsed(vec![holder()]);
    parsed.type_aliases = vec![
        alias("A", TypeInfo::named("B")),
        alias("B", TypeInfo::named("A")),
    ];
    let err = render_in_root(&parsed, "Holder", &TypeInfo::named("A")).unwrap_err();
    assert_eq!(
        err,
        SolverError::TypeAliasCycle {
            chain: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        }
    );
    assert!(err.to_string().contains("A -> B -> A"));
}

#[test]
fn test_local_type_parameter_passes_through() {
    let parsed = parsed(vec![holder()]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let ctx = SymbolParent::root(universe.interface("Holder").unwrap());
    let locals = [TypeParameter::new("TResult")];

    let rendered = resolver
        .render(
            &TypeInfo::array(TypeInfo::named("TResult")),
            &ctx,
            Some(&locals),
            None,
        )
        .unwrap();
    assert_eq!(rendered, "IJSArray<TResult>");
}

#[test]
fn test_root_type_parameter_passes_through() {
    let parsed = parsed(vec![
        InterfaceInfo::new("Box").with_type_parameters(vec![TypeParameter::new("T")]),
    ]);
    let rendered = render_in_root(&parsed, "Box", &TypeInfo::named("T")).unwrap();
    assert_eq!(rendered, "T");
}

#[test]
fn test_bare_generic_reference_uses_default() {
    let boxed = InterfaceInfo::new("Box").with_type_parameters(vec![
        TypeParameter::new("T").with_default(TypeInfo::named("Foo")),
    ]);

    let with_foo = parsed(vec![holder(), boxed.clone(), InterfaceInfo::new("Foo")]);
    assert_eq!(
        render_in_root(&with_foo, "Holder", &TypeInfo::named("Box")).unwrap(),
        "IBox<IFoo>"
    );

    let without_foo = parsed(vec![holder(), boxed]);
    assert_eq!(
        render_in_root(&without_foo, "Holder", &TypeInfo::named("Box")).unwrap(),
        "IBox<IJSObject>"
    );
}

#[test]
fn test_missing_argument_without_default_renders_object() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Map")
            .with_type_parameters(vec![TypeParameter::new("K"), TypeParameter::new("V")]),
    ]);
    let rendered = render_in_root(
        &parsed,
        "Holder",
        &TypeInfo::generic("Map", vec![string()]),
    )
    .unwrap();
    assert_eq!(rendered, "IMap<JSString, IJSObject>");
}

#[test]
fn test_default_may_refer_to_earlier_parameter() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Pair").with_type_parameters(vec![
            TypeParameter::new("K"),
            TypeParameter::new("V").with_default(TypeInfo::named("K")),
        ]),
    ]);
    let rendered = render_in_root(
        &parsed,
        "Holder",
        &TypeInfo::generic("Pair", vec![number()]),
    )
    .unwrap();
    assert_eq!(rendered, "IPair<JSNumber, JSNumber>");
}

#[test]
fn test_self_referential_default_falls_back() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Node").with_type_parameters(vec![
            TypeParameter::new("T").with_default(TypeInfo::named("Node")),
        ]),
    ]);
    let rendered = render_in_root(&parsed, "Holder", &TypeInfo::named("Node")).unwrap();
    assert_eq!(rendered, "INode<INode<IJSObject>>");
}

#[test]
fn test_mutually_referential_defaults_terminate() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Swap").with_type_parameters(vec![
            TypeParameter::new("A").with_default(TypeInfo::named("B")),
            TypeParameter::new("B").with_default(TypeInfo::named("A")),
        ]),
    ]);
    let rendered = render_in_root(&parsed, "Holder", &TypeInfo::named("Swap")).unwrap();
    assert_eq!(rendered, "ISwap<IJSObject, IJSObject>");
}

#[test]
fn test_unresolved_argument_uses_constraint() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Foo"),
        InterfaceInfo::new("Keyed").with_type_parameters(vec![
            TypeParameter::new("T").with_constraint(TypeInfo::named("Foo")),
        ]),
    ]);
    let rendered = render_in_root(
        &parsed,
        "Holder",
        &TypeInfo::generic("Keyed", vec![TypeInfo::Unresolved]),
    )
    .unwrap();
    assert_eq!(rendered, "IKeyed<IFoo>");
}

#[test]
fn test_extra_arguments_are_dropped() {
    let parsed = parsed(vec![holder(), InterfaceInfo::new("Plain")]);
    let rendered = render_in_root(
        &parsed,
        "Holder",
        &TypeInfo::generic("Plain", vec![string()]),
    )
    .unwrap();
    assert_eq!(rendered, "IPlain");
}

#[test]
fn test_ancestor_parameter_is_substituted() {
    let parsed = parsed(vec![
        InterfaceInfo::new("Base")
            .with_type_parameters(vec![TypeParameter::new("T")])
            .with_property(PropertyInfo::new("value", TypeInfo::named("T"))),
        InterfaceInfo::new("Derived").extending(TypeInfo::generic("Base", vec![string()])),
    ]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let root = SymbolParent::root(universe.interface("Derived").unwrap());
    let base = SymbolParent::extended(universe.interface("Base").unwrap(), vec![string()], &root);

    let rendered = resolver
        .render(&TypeInfo::named("T"), &base, None, None)
        .unwrap();
    assert_eq!(rendered, "JSString");
}

#[test]
fn test_substitution_through_two_levels() {
    let parsed = parsed(vec![
        InterfaceInfo::new("A").with_type_parameters(vec![TypeParameter::new("T")]),
        InterfaceInfo::new("B")
            .with_type_parameters(vec![TypeParameter::new("U")])
            .extending(TypeInfo::generic("A", vec![TypeInfo::array(TypeInfo::named("U"))])),
        InterfaceInfo::new("C").extending(TypeInfo::generic("B", vec![string()])),
    ]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let c = SymbolParent::root(universe.interface("C").unwrap());
    let b = SymbolParent::extended(universe.interface("B").unwrap(), vec![string()], &c);
    let a = SymbolParent::extended(
        universe.interface("A").unwrap(),
        vec![TypeInfo::array(TypeInfo::named("U"))],
        &b,
    );

    let rendered = resolver
        .render(&TypeInfo::named("T"), &a, None, None)
        .unwrap();
    assert_eq!(rendered, "IJSArray<JSString>");
    assert_eq!(resolver.render_origin(&a).unwrap(), "IA<IJSArray<JSString>>");
    assert_eq!(resolver.render_origin(&b).unwrap(), "IB<JSString>");
}

#[test]
fn test_missing_ancestor_argument_uses_default_in_same_context() {
    let parsed = parsed(vec![
        InterfaceInfo::new("Base").with_type_parameters(vec![
            TypeParameter::new("T"),
            TypeParameter::new("U").with_default(number()),
            TypeParameter::new("V"),
        ]),
        InterfaceInfo::new("Derived").extending(TypeInfo::generic("Base", vec![string()])),
    ]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let root = SymbolParent::root(universe.interface("Derived").unwrap());
    let base = SymbolParent::extended(universe.interface("Base").unwrap(), vec![string()], &root);

    assert_eq!(
        resolver.render(&TypeInfo::named("U"), &base, None, None).unwrap(),
        "JSNumber"
    );
    assert_eq!(
        resolver.render(&TypeInfo::named("V"), &base, None, None).unwrap(),
        "IJSObject"
    );
    assert_eq!(
        resolver.render_origin(&base).unwrap(),
        "IBase<JSString, JSNumber, IJSObject>"
    );
}

#[test]
fn test_render_origin_at_root_uses_declared_names() {
    let parsed = parsed(vec![
        InterfaceInfo::new("Map")
            .with_type_parameters(vec![TypeParameter::new("K"), TypeParameter::new("V")]),
    ]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let root = SymbolParent::root(universe.interface("Map").unwrap());
    assert_eq!(resolver.render_origin(&root).unwrap(), "IMap<K, V>");
}

#[test]
fn test_rendering_is_deterministic() {
    let parsed = parsed(vec![
        holder(),
        InterfaceInfo::new("Pair").with_type_parameters(vec![
            TypeParameter::new("K"),
            TypeParameter::new("V").with_default(TypeInfo::named("K")),
        ]),
    ]);
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let ctx = SymbolParent::root(universe.interface("Holder").unwrap());
    let ty = TypeInfo::array(TypeInfo::generic("Pair", vec![string()]));

    let first = resolver.render(&ty, &ctx, None, None).unwrap();
    let second = resolver.render(&ty, &ctx, None, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_excessive_nesting_is_unresolvable() {
    let parsed = parsed(vec![holder()]);
    let mut ty = string();
    for _ in 0..200 {
        ty = TypeInfo::array(ty);
    }
    let err = render_in_root(&parsed, "Holder", &ty).unwrap_err();
    assert!(matches!(err, SolverError::UnresolvableType { .. }));
}

#[test]
fn test_is_void_follows_aliases() {
    let mut parsed = parsed(vec![holder()]);
    parsed.type_aliases = vec![alias("Nothing", void())];
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);

    assert!(resolver.is_void(&void()).unwrap());
    assert!(resolver.is_void(&TypeInfo::named("Nothing")).unwrap());
    assert!(!resolver.is_void(&string()).unwrap());
}
