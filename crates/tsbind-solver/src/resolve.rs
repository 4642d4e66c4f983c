//! Type reference resolution.
//!
//! Every type written in the model is rendered to a C# type name against the
//! runtime surface. Rendering happens relative to a [`SymbolParent`] chain:
//! a type parameter of an ancestor is replaced by the argument the `extends`
//! clause supplied for it, rendered in turn relative to the node that wrote
//! the clause.
//!
//! Resolution order for one reference:
//!
//! 1. alias expansion
//! 2. shape (`T[]`, function, unresolved)
//! 3. builtin keywords
//! 4. local type parameters (of the method or constructor being rendered)
//! 5. type parameters of the context owner
//! 6. interface references, with defaults filled in for missing arguments
//! 7. anything else is `IJSObject`

use crate::diagnostics::SolverError;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::symbol::SymbolParent;
use crate::universe::TypeUniverse;
use std::rc::Rc;
use tracing::{trace, warn};
use tsbind_common::limits::MAX_RENDER_DEPTH;
use tsbind_common::{InterfaceInfo, SingleTypeInfo, TypeInfo, TypeParameter};

pub const OBJECT_TYPE: &str = "IJSObject";
pub const UNDEFINED_TYPE: &str = "JSUndefined";
pub const BOOLEAN_TYPE: &str = "JSBoolean";
pub const STRING_TYPE: &str = "JSString";
pub const NUMBER_TYPE: &str = "JSNumber";
pub const ARRAY_TYPE: &str = "IJSArray";
pub const FUNCTION_TYPE: &str = "JSFunction";

/// Name of the generated contract for `interface_name`.
pub fn contract_name(interface_name: &str) -> String {
    format!("I{interface_name}")
}

/// The contract of `interface` applied to its own parameter names
/// (`IMap<K, V>`).
pub fn declared_reference(interface: &InterfaceInfo) -> String {
    let name = contract_name(&interface.name);
    if !interface.is_generic() {
        return name;
    }
    let parameters: Vec<&str> = interface
        .type_parameters
        .iter()
        .map(|type_parameter| type_parameter.name.as_str())
        .collect();
    format!("{name}<{}>", parameters.join(", "))
}

/// Short human-readable form of a reference, for diagnostics.
pub fn describe(ty: &TypeInfo) -> String {
    match ty {
        TypeInfo::Single(single) if single.name.is_empty() => "<anonymous>".to_string(),
        TypeInfo::Single(single) => single.name.clone(),
        TypeInfo::Array(element) => format!("{}[]", describe(element)),
        TypeInfo::Function => "function".to_string(),
        TypeInfo::Unresolved => "<unresolved>".to_string(),
    }
}

/// Per-call state of one top-level render.
struct RenderScope<'a> {
    defaults: RecursionGuard<(&'a str, &'a str)>,
    depth: u32,
}

impl RenderScope<'_> {
    fn new() -> Self {
        Self {
            defaults: RecursionGuard::with_profile(RecursionProfile::DefaultExpansion),
            depth: 0,
        }
    }
}

pub struct TypeResolver<'a> {
    universe: &'a TypeUniverse<'a>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(universe: &'a TypeUniverse<'a>) -> Self {
        Self { universe }
    }

    pub fn universe(&self) -> &'a TypeUniverse<'a> {
        self.universe
    }

    /// Render `ty` in context `ctx`.
    ///
    /// `locals` are the type parameters of the member being rendered; they
    /// pass through by name. `fallback` replaces an unresolved type.
    pub fn render(
        &self,
        ty: &TypeInfo,
        ctx: &Rc<SymbolParent<'a>>,
        locals: Option<&[TypeParameter]>,
        fallback: Option<&TypeInfo>,
    ) -> Result<String, SolverError> {
        let mut scope = RenderScope::new();
        self.render_in(&mut scope, ty, ctx, locals, fallback)
    }

    /// Implementation-block prefix for an origin: the contract of its owner
    /// as instantiated by the `extends` clause that reached it, or with the
    /// declared parameter names at the root.
    pub fn render_origin(&self, origin: &Rc<SymbolParent<'a>>) -> Result<String, SolverError> {
        match (origin.parent(), origin.type_arguments()) {
            (Some(parent), Some(arguments)) => {
                let mut scope = RenderScope::new();
                self.render_reference(&mut scope, origin.owner(), arguments, parent, None)
            }
            _ => Ok(declared_reference(origin.owner())),
        }
    }

    pub fn is_void(&self, ty: &TypeInfo) -> Result<bool, SolverError> {
        Ok(self.universe.expand_aliases(ty)?.single_name() == Some("void"))
    }

    fn render_in(
        &self,
        scope: &mut RenderScope<'a>,
        ty: &TypeInfo,
        ctx: &Rc<SymbolParent<'a>>,
        locals: Option<&[TypeParameter]>,
        fallback: Option<&TypeInfo>,
    ) -> Result<String, SolverError> {
        if scope.depth >= MAX_RENDER_DEPTH {
            return Err(SolverError::UnresolvableType {
                reference: describe(ty),
                depth: MAX_RENDER_DEPTH,
            });
        }
        scope.depth += 1;
        let rendered = self.render_shape(scope, ty, ctx, locals, fallback);
        scope.depth -= 1;
        rendered
    }

    fn render_shape(
        &self,
        scope: &mut RenderScope<'a>,
        ty: &TypeInfo,
        ctx: &Rc<SymbolParent<'a>>,
        locals: Option<&[TypeParameter]>,
        fallback: Option<&TypeInfo>,
    ) -> Result<String, SolverError> {
        match self.universe.expand_aliases(ty)? {
            TypeInfo::Array(element) => {
                let element = self.render_in(scope, element, ctx, locals, None)?;
                Ok(format!("{ARRAY_TYPE}<{element}>"))
            }
            TypeInfo::Function => Ok(FUNCTION_TYPE.to_string()),
            TypeInfo::Unresolved => match fallback {
                Some(fallback) => self.render_in(scope, fallback, ctx, locals, None),
                None => Ok(OBJECT_TYPE.to_string()),
            },
            TypeInfo::Single(single) => self.render_single(scope, single, ctx, locals),
        }
    }

    fn render_single(
        &self,
        scope: &mut RenderScope<'a>,
        single: &SingleTypeInfo,
        ctx: &Rc<SymbolParent<'a>>,
        locals: Option<&[TypeParameter]>,
    ) -> Result<String, SolverError> {
        let name = single.name.as_str();
        match name {
            "" | "any" | "void" | "null" => return Ok(OBJECT_TYPE.to_string()),
            "undefined" => return Ok(UNDEFINED_TYPE.to_string()),
            "boolean" => return Ok(BOOLEAN_TYPE.to_string()),
            "string" => return Ok(STRING_TYPE.to_string()),
            "number" => return Ok(NUMBER_TYPE.to_string()),
            _ => {}
        }

        if locals.is_some_and(|locals| locals.iter().any(|local| local.name == name)) {
            return Ok(name.to_string());
        }

        let owner = ctx.owner();
        if let Some((index, type_parameter)) = owner
            .type_parameters
            .iter()
            .enumerate()
            .find(|(_, type_parameter)| type_parameter.name == name)
        {
            return self.substitute(scope, owner, index, type_parameter, ctx);
        }

        if let Some(target) = self.universe.interface(name) {
            return self.render_reference(scope, target, &single.type_arguments, ctx, locals);
        }

        Ok(OBJECT_TYPE.to_string())
    }

    /// Replace a type parameter of the context owner.
    fn substitute(
        &self,
        scope: &mut RenderScope<'a>,
        owner: &'a InterfaceInfo,
        index: usize,
        type_parameter: &'a TypeParameter,
        ctx: &Rc<SymbolParent<'a>>,
    ) -> Result<String, SolverError> {
        match (ctx.type_arguments(), ctx.parent()) {
            (Some(arguments), Some(parent)) => match arguments.get(index) {
                Some(argument) => self.render_in(scope, argument, parent, None, None),
                None => self.render_default(scope, owner, type_parameter, ctx),
            },
            _ => Ok(type_parameter.name.clone()),
        }
    }

    /// `I<Target>` with every parameter of the target given an argument.
    fn render_reference(
        &self,
        scope: &mut RenderScope<'a>,
        target: &'a InterfaceInfo,
        arguments: &[TypeInfo],
        ctx: &Rc<SymbolParent<'a>>,
        locals: Option<&[TypeParameter]>,
    ) -> Result<String, SolverError> {
        trace!(target = %target.name, arguments = arguments.len(), "render_reference");

        let parameters = &target.type_parameters;
        let supplied = &arguments[..arguments.len().min(parameters.len())];
        let mut rendered = Vec::with_capacity(parameters.len());

        for (argument, type_parameter) in supplied.iter().zip(parameters) {
            let constraint = type_parameter.constraint.as_ref();
            rendered.push(self.render_in(scope, argument, ctx, locals, constraint)?);
        }

        if supplied.len() < parameters.len() {
            let instantiated = SymbolParent::extended(target, supplied.to_vec(), ctx);
            for type_parameter in &parameters[supplied.len()..] {
                rendered.push(self.render_default(scope, target, type_parameter, &instantiated)?);
            }
        }

        let name = contract_name(&target.name);
        if rendered.is_empty() {
            Ok(name)
        } else {
            Ok(format!("{name}<{}>", rendered.join(", ")))
        }
    }

    /// The default of `type_parameter`, or `IJSObject` when it has none or
    /// when its expansion comes back to itself.
    fn render_default(
        &self,
        scope: &mut RenderScope<'a>,
        owner: &'a InterfaceInfo,
        type_parameter: &'a TypeParameter,
        ctx: &Rc<SymbolParent<'a>>,
    ) -> Result<String, SolverError> {
        let Some(default) = type_parameter.default.as_ref() else {
            return Ok(OBJECT_TYPE.to_string());
        };

        let key = (owner.name.as_str(), type_parameter.name.as_str());
        match scope.defaults.enter(key) {
            RecursionResult::Entered => {
                let rendered = self.render_in(scope, default, ctx, None, None);
                scope.defaults.leave(key);
                rendered
            }
            RecursionResult::Cycle => {
                warn!(
                    interface = %owner.name,
                    parameter = %type_parameter.name,
                    "default type argument refers back to itself, using {OBJECT_TYPE}"
                );
                Ok(OBJECT_TYPE.to_string())
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                Err(SolverError::UnresolvableType {
                    reference: owner.name.clone(),
                    depth: MAX_RENDER_DEPTH,
                })
            }
        }
    }
}
