//! Shim classes.
//!
//! A shim wraps a handle to a live foreign object and implements a contract
//! by looking each member up by name at call time. Every member is an
//! explicit interface implementation, so blocks for different ancestor
//! instantiations never clash.

use crate::declaration::{
    AUTO_GENERATED_HEADER, parameter_list, type_parameter_list, where_clauses, write_header,
    write_interface,
};
use crate::options::EmitterOptions;
use crate::runtime::{
    BINDING_EXCEPTION, BINDING_FAILURE, BindingFailure, CONSTRUCT, CONSTRUCT_MEMBER,
    FUNCTION_TYPE, GET_INDEX, GET_PROPERTY, INVOKE, OBJECT_INTERFACE, OBJECT_REFERENCE_TYPE,
    RUNTIME_TYPE, SET_INDEX, SET_PROPERTY, SubNamespace,
};
use crate::source_writer::{SourceWriter, string_literal};
use tsbind_solver::{
    ProcessedClassImplementationInfo, ProcessedClassInfo, ProcessedConstructorInfo,
    ProcessedIndexerInfo, ProcessedInterfaceInfo, ProcessedMethodInfo, ProcessedParameterInfo,
    ProcessedPropertyInfo,
};

/// Label used in binding failures raised by indexers.
const INDEXER_LABEL: &str = "this[]";

fn throw(w: &mut SourceWriter, failure: BindingFailure, member: &str) {
    w.line(&format!(
        "throw new {BINDING_EXCEPTION}({BINDING_FAILURE}.{}, {});",
        failure.as_str(),
        string_literal(member)
    ));
}

/// `if (value is not T typed) throw ..; return typed;`
fn return_checked(w: &mut SourceWriter, value: &str, ty: &str, member: &str) {
    let typed = format!("{value}Typed");
    w.line(&format!("if ({value} is not {ty} {typed})"));
    w.open_block();
    throw(w, BindingFailure::ResultShapeMismatch, member);
    w.close_block();
    w.blank_line();
    w.line(&format!("return {typed};"));
}

/// `this, a, b` for an invocation with the handle as receiver.
fn invocation_arguments(receiver: &str, parameters: &[ProcessedParameterInfo]) -> String {
    std::iter::once(receiver)
        .chain(parameters.iter().map(|parameter| parameter.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn argument_list(parameters: &[ProcessedParameterInfo]) -> String {
    parameters
        .iter()
        .map(|parameter| parameter.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_constructor(w: &mut SourceWriter, prefix: &str, constructor: &ProcessedConstructorInfo) {
    w.line(&format!(
        "{} {prefix}.{CONSTRUCT_MEMBER}{}({})",
        constructor.return_type,
        type_parameter_list(&constructor.type_parameters),
        parameter_list(&constructor.parameters),
    ));
    w.open_block();
    let call = format!(
        "this.{CONSTRUCT}({})",
        argument_list(&constructor.parameters)
    );
    if constructor.returns_void {
        w.line(&format!("return {call};"));
    } else {
        w.line(&format!("var __result = {call};"));
        return_checked(w, "__result", &constructor.return_type, CONSTRUCT_MEMBER);
    }
    w.close_block();
}

fn write_method(w: &mut SourceWriter, prefix: &str, method: &ProcessedMethodInfo) {
    let member = method.original_name.as_str();
    w.line(&format!(
        "{} {prefix}.{}{}({})",
        method.return_type,
        method.name,
        type_parameter_list(&method.type_parameters),
        parameter_list(&method.parameters),
    ));
    w.open_block();

    w.line(&format!(
        "var __member = this.{GET_PROPERTY}({});",
        string_literal(member)
    ));
    w.line("if (__member == null)");
    w.open_block();
    throw(w, BindingFailure::MemberNotFound, member);
    w.close_block();
    w.blank_line();

    w.line(&format!("if (__member is not {FUNCTION_TYPE} __function)"));
    w.open_block();
    throw(w, BindingFailure::NotInvocable, member);
    w.close_block();
    w.blank_line();

    let call = format!(
        "__function.{INVOKE}({})",
        invocation_arguments("this", &method.parameters)
    );
    if method.returns_void {
        w.line(&format!("return {call};"));
    } else {
        w.line(&format!("var __result = {call};"));
        return_checked(w, "__result", &method.return_type, member);
    }
    w.close_block();
}

fn write_property(w: &mut SourceWriter, prefix: &str, property: &ProcessedPropertyInfo) {
    let member = property.original_name.as_str();
    w.line(&format!("{} {prefix}.{}", property.ty, property.name));
    w.open_block();
    if property.mode.has_getter() {
        w.line("get");
        w.open_block();
        w.line(&format!(
            "var __value = this.{GET_PROPERTY}({});",
            string_literal(member)
        ));
        return_checked(w, "__value", &property.ty, member);
        w.close_block();
    }
    if property.mode.has_setter() {
        w.line("set");
        w.open_block();
        w.line(&format!(
            "this.{SET_PROPERTY}({}, value);",
            string_literal(member)
        ));
        w.close_block();
    }
    w.close_block();
}

fn write_indexer(w: &mut SourceWriter, prefix: &str, indexer: &ProcessedIndexerInfo) {
    let index = &indexer.index_name;
    w.line(&format!(
        "{} {prefix}.this[{} {index}]",
        indexer.return_type, indexer.index_type
    ));
    w.open_block();
    if indexer.mode.has_getter() {
        w.line("get");
        w.open_block();
        w.line(&format!("var __value = this.{GET_INDEX}({index});"));
        return_checked(w, "__value", &indexer.return_type, INDEXER_LABEL);
        w.close_block();
    }
    if indexer.mode.has_setter() {
        w.line("set");
        w.open_block();
        w.line(&format!("this.{SET_INDEX}({index}, value);"));
        w.close_block();
    }
    w.close_block();
}

fn write_implementation(w: &mut SourceWriter, implementation: &ProcessedClassImplementationInfo) {
    let prefix = implementation.prefix.as_str();
    let symbols = &implementation.symbols;
    for constructor in &symbols.constructors {
        w.blank_line();
        write_constructor(w, prefix, constructor);
    }
    for method in &symbols.methods {
        w.blank_line();
        write_method(w, prefix, method);
    }
    for property in &symbols.properties {
        w.blank_line();
        write_property(w, prefix, property);
    }
    for indexer in &symbols.indexers {
        w.blank_line();
        write_indexer(w, prefix, indexer);
    }
}

/// `public class FooPrototype<T> : IFoo<T>, IJSObject { .. }`
pub fn write_class(w: &mut SourceWriter, class: &ProcessedClassInfo) {
    let type_parameters = type_parameter_list(&class.type_parameters);
    let header = format!(
        "public class {}{type_parameters} : {}{type_parameters}, {OBJECT_INTERFACE}",
        class.name, class.interface_name
    );
    write_header(w, &header, &where_clauses(&class.type_parameters));
    w.open_block();

    w.line(&format!(
        "public {}({RUNTIME_TYPE} jsInProcessRuntime, {OBJECT_REFERENCE_TYPE} jsObjectReference)",
        class.name
    ));
    w.open_block();
    w.line("Runtime = jsInProcessRuntime;");
    w.line("ObjectReference = jsObjectReference;");
    w.close_block();
    w.blank_line();
    w.line(&format!("public {RUNTIME_TYPE} Runtime {{ get; }}"));
    w.line(&format!("public {OBJECT_REFERENCE_TYPE} ObjectReference {{ get; }}"));

    for implementation in &class.implementations {
        write_implementation(w, implementation);
    }

    w.close_block();
}

fn write_shim_usings(w: &mut SourceWriter, options: &EmitterOptions) {
    w.line(AUTO_GENERATED_HEADER);
    w.line("using Microsoft.JSInterop;");
    for namespace in [
        SubNamespace::BuiltIns,
        SubNamespace::Extensions,
        SubNamespace::Interfaces,
    ] {
        w.line(&format!("using {};", namespace.qualify(&options.namespace)));
    }
    w.blank_line();
}

/// Contents of `<Name>Prototype.cs`.
pub fn emit_prototype_file(class: &ProcessedClassInfo, options: &EmitterOptions) -> String {
    let mut w = SourceWriter::new(options.new_line.as_str());
    write_shim_usings(&mut w, options);
    w.line(&format!(
        "namespace {}",
        SubNamespace::Prototypes.qualify(&options.namespace)
    ));
    w.open_block();
    write_class(&mut w, class);
    w.close_block();
    w.finish()
}

/// Contents of `<name>Global.cs`: the synthetic contract, in the
/// `Interfaces` namespace next to every other contract, and its shim.
pub fn emit_global_file(
    view: &ProcessedInterfaceInfo,
    class: &ProcessedClassInfo,
    options: &EmitterOptions,
) -> String {
    let mut w = SourceWriter::new(options.new_line.as_str());
    write_shim_usings(&mut w, options);

    w.line(&format!(
        "namespace {}",
        SubNamespace::Interfaces.qualify(&options.namespace)
    ));
    w.open_block();
    write_interface(&mut w, view);
    w.close_block();
    w.blank_line();

    w.line(&format!(
        "namespace {}",
        SubNamespace::GlobalVariables.qualify(&options.namespace)
    ));
    w.open_block();
    write_class(&mut w, class);
    w.close_block();
    w.finish()
}
