use super::*;
use crate::test_fixtures::*;
use tsbind_common::{
    ConstructorInfo, GlobalVariableInfo, InterfaceBodyInfo, InterfaceInfo, ParsedInfo,
    PropertyInfo, TypeInfo,
};

fn window_model() -> ParsedInfo {
    let mut parsed = parsed(vec![
        InterfaceInfo::new("Window")
            .extending(TypeInfo::named("WindowOrWorkerGlobalScope"))
            .with_property(PropertyInfo::readonly("document", TypeInfo::named("Document"))),
        InterfaceInfo::new("WindowOrWorkerGlobalScope"),
        InterfaceInfo::new("Document"),
        InterfaceInfo::new("CacheStorage"),
    ]);
    parsed.global_variables = vec![
        GlobalVariableInfo::typed("document", TypeInfo::named("Document")),
        GlobalVariableInfo::typed("caches", TypeInfo::named("CacheStorage")),
    ];
    parsed
}

fn loose_names(parsed: &ParsedInfo, options: &SolverOptions) -> Vec<String> {
    let universe = TypeUniverse::new(parsed);
    LooseGlobals::discover(&universe, options)
        .unwrap()
        .iter()
        .map(|loose| loose.interface.name.clone())
        .collect()
}

#[test]
fn test_global_exposed_by_window_is_not_loose() {
    let parsed = window_model();
    assert_eq!(loose_names(&parsed, &SolverOptions::default()), ["cachesGlobal"]);
}

#[test]
fn test_getter_on_window_ancestor_counts_as_exposed() {
    let mut parsed = window_model();
    parsed.interfaces[1]
        .body
        .get_accessors
        .push(getter("caches", TypeInfo::named("CacheStorage")));

    assert!(loose_names(&parsed, &SolverOptions::default()).is_empty());
}

#[test]
fn test_typed_global_extends_its_interface() {
    let parsed = window_model();
    let universe = TypeUniverse::new(&parsed);
    let globals = LooseGlobals::discover(&universe, &SolverOptions::default()).unwrap();

    let caches = globals.find("caches").unwrap();
    assert_eq!(caches.interface.extends_list, [TypeInfo::named("CacheStorage")]);
    assert!(caches.interface.body.is_empty());
}

#[test]
fn test_inline_global_takes_body_and_constructors() {
    let mut parsed = window_model();
    let mut global = GlobalVariableInfo::inline(
        "Blob",
        InterfaceBodyInfo {
            properties: vec![PropertyInfo::readonly("prototype", TypeInfo::named("Blob"))],
            ..InterfaceBodyInfo::default()
        },
    );
    global.constructors = vec![ConstructorInfo::new(vec![], TypeInfo::named("Blob"))];
    parsed.global_variables.push(global);

    let universe = TypeUniverse::new(&parsed);
    let globals = LooseGlobals::discover(&universe, &SolverOptions::default()).unwrap();
    let blob = globals.find("Blob").unwrap();

    assert_eq!(blob.interface.name, "BlobGlobal");
    assert!(blob.interface.extends_list.is_empty());
    assert_eq!(blob.interface.body.properties.len(), 1);
    assert_eq!(blob.interface.body.constructors.len(), 1);
}

#[test]
fn test_globals_without_usable_type_are_skipped() {
    let mut parsed = window_model();
    parsed.global_variables.push(GlobalVariableInfo::typed(
        "mystery",
        TypeInfo::named("NotDeclared"),
    ));
    parsed.global_variables.push(GlobalVariableInfo {
        name: "bare".to_string(),
        ty: None,
        inline_interface: None,
        constructors: vec![],
    });

    assert_eq!(loose_names(&parsed, &SolverOptions::default()), ["cachesGlobal"]);
}

#[test]
fn test_synthetic_name_colliding_with_declared_interface_is_skipped() {
    let mut parsed = window_model();
    parsed.interfaces.push(InterfaceInfo::new("cachesGlobal"));
    assert!(loose_names(&parsed, &SolverOptions::default()).is_empty());
}

#[test]
fn test_missing_global_scope_interface_makes_every_global_loose() {
    let parsed = window_model();
    let options = SolverOptions {
        global_scope_interface: "WorkerGlobalScope".to_string(),
    };
    assert_eq!(
        loose_names(&parsed, &options),
        ["documentGlobal", "cachesGlobal"]
    );
}

#[test]
fn test_global_scope_gains_a_getter_per_loose_global() {
    let parsed = window_model();
    let universe = TypeUniverse::new(&parsed);
    let resolver = TypeResolver::new(&universe);
    let options = SolverOptions::default();
    let globals = LooseGlobals::discover(&universe, &options).unwrap();
    let merger = ConformanceMerger::new(&resolver, &options, &globals);

    let window = universe.interface("Window").unwrap();
    let symbols = SymbolCollector::new(&universe).collect(window, false).unwrap();
    let merged = merger.merge(&symbols, &SymbolParent::root(window)).unwrap();

    let caches = merged.property("caches").unwrap();
    assert_eq!(caches.ty, "IcachesGlobal");
    assert_eq!(caches.mode, PropertyMode::GetterOnly);
    assert!(merged.property("document").is_some());

    // Other interfaces are left alone.
    let document = universe.interface("Document").unwrap();
    let symbols = SymbolCollector::new(&universe).collect(document, false).unwrap();
    let merged = merger.merge(&symbols, &SymbolParent::root(document)).unwrap();
    assert!(merged.property("caches").is_none());
}

#[test]
fn test_global_typed_through_alias_is_loose() {
    let mut parsed = window_model();
    parsed.type_aliases = vec![alias("StorageAlias", TypeInfo::named("CacheStorage"))];
    parsed
        .global_variables
        .push(GlobalVariableInfo::typed("storage", TypeInfo::named("StorageAlias")));

    let universe = TypeUniverse::new(&parsed);
    let globals = LooseGlobals::discover(&universe, &SolverOptions::default()).unwrap();

    let storage = globals.find("storage").unwrap();
    assert_eq!(storage.interface.name, "storageGlobal");
    assert_eq!(storage.interface.extends_list, [TypeInfo::named("CacheStorage")]);
}

#[test]
fn test_window_ancestor_behind_alias_still_exposes_names() {
    let mut parsed = window_model();
    parsed.interfaces[0].extends_list = vec![TypeInfo::named("ScopeAlias")];
    parsed.interfaces[1]
        .body
        .get_accessors
        .push(getter("caches", TypeInfo::named("CacheStorage")));
    parsed.type_aliases = vec![alias("ScopeAlias", TypeInfo::named("WindowOrWorkerGlobalScope"))];

    assert!(loose_names(&parsed, &SolverOptions::default()).is_empty());
}

#[test]
fn test_alias_cycle_in_global_type_is_fatal() {
    let mut parsed = window_model();
    parsed.type_aliases = vec![
        alias("A", TypeInfo::named("B")),
        alias("B", TypeInfo::named("A")),
    ];
    parsed
        .global_variables
        .push(GlobalVariableInfo::typed("looping", TypeInfo::named("A")));

    let universe = TypeUniverse::new(&parsed);
    let err = LooseGlobals::discover(&universe, &SolverOptions::default()).unwrap_err();
    assert!(matches!(err, SolverError::TypeAliasCycle { .. }));
}
