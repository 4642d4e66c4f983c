use super::config::{
    NewLineSetting, ResolvedOptions, load_config, options_from_path, parse_config,
    resolve_options,
};
use tsbind_emitter::NewLine;

#[test]
fn empty_config_resolves_to_defaults() {
    let config = parse_config("{}").expect("empty object is a valid config");
    let resolved = resolve_options(&config).expect("defaults resolve");

    assert_eq!(resolved, ResolvedOptions::default());
    assert_eq!(
        resolved.emitter.namespace,
        "RealGoodApps.BlazorJavascript.Interop"
    );
    assert_eq!(resolved.solver.global_scope_interface, "Window");
    assert_eq!(resolved.emitter.new_line, NewLine::Lf);
}

#[test]
fn overrides_every_field() {
    let config = parse_config(
        r#"{
            "namespace": "Acme.Interop",
            "globalScopeInterface": "WorkerGlobalScope",
            "newLine": "crlf"
        }"#,
    )
    .expect("config should parse");
    assert_eq!(config.new_line, Some(NewLineSetting::Crlf));

    let resolved = resolve_options(&config).expect("config should resolve");
    assert_eq!(resolved.emitter.namespace, "Acme.Interop");
    assert_eq!(resolved.solver.global_scope_interface, "WorkerGlobalScope");
    assert_eq!(resolved.emitter.new_line, NewLine::CrLf);
}

#[test]
fn rejects_unknown_fields_and_values() {
    assert!(parse_config(r#"{ "nameSpace": "Acme" }"#).is_err());
    assert!(parse_config(r#"{ "newLine": "cr" }"#).is_err());
    assert!(parse_config("not json").is_err());
}

#[test]
fn rejects_invalid_names() {
    for namespace in ["", "Acme.", "Acme..Interop", "1Acme", "Acme-Interop"] {
        let config = parse_config(&format!(r#"{{ "namespace": "{namespace}" }}"#))
            .expect("syntactically valid");
        assert!(
            resolve_options(&config).is_err(),
            "namespace '{namespace}' should be rejected"
        );
    }

    let config = parse_config(r#"{ "globalScopeInterface": "Window<T>" }"#).unwrap();
    assert!(resolve_options(&config).is_err());
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tsbind.json");
    std::fs::write(&path, r#"{ "newLine": "lf", "namespace": "_Private.Bindings" }"#).unwrap();

    let config = load_config(&path).expect("config file should load");
    assert_eq!(config.namespace.as_deref(), Some("_Private.Bindings"));

    let resolved = options_from_path(Some(&path)).expect("config file should resolve");
    assert_eq!(resolved.emitter.namespace, "_Private.Bindings");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
    assert_eq!(options_from_path(None).unwrap(), ResolvedOptions::default());
}
