//! Contract (interface) declarations.

use crate::options::EmitterOptions;
use crate::runtime::{CONSTRUCT_MEMBER, OBJECT_INTERFACE, SubNamespace};
use crate::source_writer::SourceWriter;
use tsbind_solver::{
    ProcessedInterfaceInfo, ProcessedParameterInfo, ProcessedSymbols, ProcessedTypeParameterInfo,
    PropertyMode,
};

pub(crate) const AUTO_GENERATED_HEADER: &str = "/// <auto-generated />";

/// `<T, U>`, or nothing for a non-generic declaration.
pub(crate) fn type_parameter_list(type_parameters: &[ProcessedTypeParameterInfo]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = type_parameters
        .iter()
        .map(|type_parameter| type_parameter.name.as_str())
        .collect();
    format!("<{}>", names.join(", "))
}

/// One `where T : X` clause per constrained parameter.
pub(crate) fn where_clauses(type_parameters: &[ProcessedTypeParameterInfo]) -> Vec<String> {
    type_parameters
        .iter()
        .filter_map(|type_parameter| {
            let constraint = type_parameter.constraint.as_ref()?;
            Some(format!("where {} : {constraint}", type_parameter.name))
        })
        .collect()
}

pub(crate) fn parameter_list(parameters: &[ProcessedParameterInfo]) -> String {
    parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.ty, parameter.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn accessor_list(mode: PropertyMode) -> &'static str {
    match mode {
        PropertyMode::GetterOnly => "{ get; }",
        PropertyMode::SetterOnly => "{ set; }",
        PropertyMode::GetterAndSetter => "{ get; set; }",
    }
}

/// Base list of a contract: its rendered bases, then `IJSObject`.
pub(crate) fn base_list(extends: &[String]) -> String {
    let mut bases: Vec<&str> = extends
        .iter()
        .map(String::as_str)
        .filter(|base| *base != OBJECT_INTERFACE)
        .collect();
    bases.push(OBJECT_INTERFACE);
    bases.join(", ")
}

/// Declaration line followed by its `where` clauses, one level deeper.
pub(crate) fn write_header(w: &mut SourceWriter, header: &str, clauses: &[String]) {
    w.line(header);
    w.increase_indent();
    for clause in clauses {
        w.line(clause);
    }
    w.decrease_indent();
}

fn member_suffix(type_parameters: &[ProcessedTypeParameterInfo]) -> String {
    where_clauses(type_parameters)
        .iter()
        .map(|clause| format!(" {clause}"))
        .collect()
}

fn write_members(w: &mut SourceWriter, symbols: &ProcessedSymbols) {
    for constructor in &symbols.constructors {
        w.line(&format!(
            "{} {CONSTRUCT_MEMBER}{}({}){};",
            constructor.return_type,
            type_parameter_list(&constructor.type_parameters),
            parameter_list(&constructor.parameters),
            member_suffix(&constructor.type_parameters),
        ));
    }
    for method in &symbols.methods {
        w.line(&format!(
            "{} {}{}({}){};",
            method.return_type,
            method.name,
            type_parameter_list(&method.type_parameters),
            parameter_list(&method.parameters),
            member_suffix(&method.type_parameters),
        ));
    }
    for property in &symbols.properties {
        w.line(&format!(
            "{} {} {}",
            property.ty,
            property.name,
            accessor_list(property.mode)
        ));
    }
    for indexer in &symbols.indexers {
        w.line(&format!(
            "{} this[{} {}] {}",
            indexer.return_type,
            indexer.index_type,
            indexer.index_name,
            accessor_list(indexer.mode)
        ));
    }
}

/// `public interface IFoo<T> : IBase, IJSObject { .. }`
pub fn write_interface(w: &mut SourceWriter, view: &ProcessedInterfaceInfo) {
    let header = format!(
        "public interface {}{} : {}",
        view.name,
        type_parameter_list(&view.type_parameters),
        base_list(&view.extends)
    );
    write_header(w, &header, &where_clauses(&view.type_parameters));
    w.open_block();
    write_members(w, &view.symbols);
    w.close_block();
}

/// Contents of `I<Name>.cs`.
pub fn emit_declaration_file(view: &ProcessedInterfaceInfo, options: &EmitterOptions) -> String {
    let mut w = SourceWriter::new(options.new_line.as_str());
    w.line(AUTO_GENERATED_HEADER);
    w.line(&format!(
        "using {};",
        SubNamespace::BuiltIns.qualify(&options.namespace)
    ));
    w.blank_line();
    w.line(&format!(
        "namespace {}",
        SubNamespace::Interfaces.qualify(&options.namespace)
    ));
    w.open_block();
    write_interface(&mut w, view);
    w.close_block();
    w.finish()
}
