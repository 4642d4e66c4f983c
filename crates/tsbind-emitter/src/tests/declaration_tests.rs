use crate::declaration::{base_list, emit_declaration_file, where_clauses};
use crate::options::{EmitterOptions, NewLine};
use tsbind_common::{
    ConstructorInfo, InterfaceInfo, MethodInfo, ParameterInfo, ParsedInfo, PropertyInfo, TypeInfo,
    TypeParameter,
};
use tsbind_solver::{
    ProcessedInfo, ProcessedTypeParameterInfo, SolverOptions, process,
};

fn project(interfaces: Vec<InterfaceInfo>) -> ProcessedInfo {
    let parsed = ParsedInfo {
        interfaces,
        ..ParsedInfo::default()
    };
    process(&parsed, &SolverOptions::default()).expect("projection")
}

fn map_model() -> Vec<InterfaceInfo> {
    vec![
        InterfaceInfo::new("Named"),
        InterfaceInfo::new("Base").with_type_parameters(vec![TypeParameter::new("T")]),
        InterfaceInfo::new("Map")
            .with_type_parameters(vec![
                TypeParameter::new("K").with_constraint(TypeInfo::named("Named")),
                TypeParameter::new("V"),
            ])
            .extending(TypeInfo::generic("Base", vec![TypeInfo::named("V")]))
            .with_method(MethodInfo::new(
                "get",
                vec![ParameterInfo::new("key", TypeInfo::named("K"))],
                TypeInfo::named("V"),
            ))
            .with_property(PropertyInfo::readonly("size", TypeInfo::named("number"))),
    ]
}

#[test]
fn test_generic_interface_declaration() {
    let processed = project(map_model());
    let view = processed.interface("Map").unwrap();
    let text = emit_declaration_file(view, &EmitterOptions::default());

    let expected = "\
/// <auto-generated />
using RealGoodApps.BlazorJavascript.Interop.BuiltIns;

namespace RealGoodApps.BlazorJavascript.Interop.Interfaces
{
    public interface IMap<K, V> : IBase<V>, IJSObject
        where K : INamed
    {
        V get(K key);
        JSNumber size { get; }
    }
}
";
    assert_eq!(text, expected);
}

#[test]
fn test_plain_interface_extends_only_object() {
    let processed = project(map_model());
    let view = processed.interface("Named").unwrap();
    let text = emit_declaration_file(view, &EmitterOptions::default());

    assert!(text.contains("    public interface INamed : IJSObject\n    {\n    }\n"));
}

#[test]
fn test_members_of_every_kind() {
    let mut widget = InterfaceInfo::new("Widget")
        .with_property(PropertyInfo::new("title", TypeInfo::named("string")))
        .with_method(
            MethodInfo::new(
                "find",
                vec![ParameterInfo::new("selector", TypeInfo::named("T"))],
                TypeInfo::named("T"),
            )
            .with_type_parameters(vec![
                TypeParameter::new("T").with_constraint(TypeInfo::named("Widget")),
            ]),
        )
        .with_method(MethodInfo::new("reset", vec![], TypeInfo::named("void")));
    widget.body.constructors.push(ConstructorInfo::new(
        vec![ParameterInfo::new("object", TypeInfo::named("string"))],
        TypeInfo::named("Widget"),
    ));
    widget.body.indexers.push(tsbind_common::IndexerInfo {
        index_name: "index".to_string(),
        index_type: TypeInfo::named("number"),
        return_type: TypeInfo::named("string"),
        is_readonly: false,
    });
    widget.body.set_accessors.push(tsbind_common::SetAccessorInfo {
        name: "onclick".to_string(),
        parameters: vec![ParameterInfo::new("handler", TypeInfo::Function)],
    });

    let processed = project(vec![widget]);
    let text = emit_declaration_file(
        processed.interface("Widget").unwrap(),
        &EmitterOptions::default(),
    );

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let body = [
        "IWidget construct(JSString @object);",
        "T find<T>(T selector) where T : IWidget;",
        "IJSObject reset();",
        "JSString title { get; set; }",
        "JSFunction onclick { set; }",
        "JSString this[JSNumber index] { get; set; }",
    ];
    let start = lines
        .iter()
        .position(|line| *line == body[0])
        .expect("constructor line");
    assert_eq!(&lines[start..start + body.len()], body);
}

#[test]
fn test_custom_namespace_and_crlf() {
    let processed = project(map_model());
    let options = EmitterOptions {
        namespace: "Acme.Interop".to_string(),
        new_line: NewLine::CrLf,
    };
    let text = emit_declaration_file(processed.interface("Named").unwrap(), &options);

    assert!(text.contains("using Acme.Interop.BuiltIns;\r\n"));
    assert!(text.contains("namespace Acme.Interop.Interfaces\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_helpers() {
    assert_eq!(base_list(&[]), "IJSObject");
    assert_eq!(
        base_list(&["IA".to_string(), "IJSObject".to_string()]),
        "IA, IJSObject"
    );

    let type_parameters = [
        ProcessedTypeParameterInfo {
            name: "T".to_string(),
            constraint: Some("INode".to_string()),
        },
        ProcessedTypeParameterInfo {
            name: "U".to_string(),
            constraint: None,
        },
    ];
    assert_eq!(where_clauses(&type_parameters), ["where T : INode"]);
}

#[test]
fn test_indexer_parameter_named_value_is_renamed() {
    let mut store = InterfaceInfo::new("Store");
    store.body.indexers.push(tsbind_common::IndexerInfo {
        index_name: "value".to_string(),
        index_type: TypeInfo::named("string"),
        return_type: TypeInfo::named("number"),
        is_readonly: false,
    });

    let processed = project(vec![store]);
    let text = emit_declaration_file(
        processed.interface("Store").unwrap(),
        &EmitterOptions::default(),
    );

    assert!(text.contains("JSNumber this[JSString index] { get; set; }"));
    assert!(!text.contains("value]"));
}
