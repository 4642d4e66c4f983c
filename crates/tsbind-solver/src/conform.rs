//! Overload conformance.
//!
//! C# cannot express every TypeScript overload set, so members that share a
//! name and arity are merged into one signature per group. Slots on which
//! the overloads agree keep their type; slots on which they disagree widen
//! to `any`. Names always come from the first member of a group.

use crate::diagnostics::SolverError;
use crate::globals::LooseGlobals;
use crate::options::SolverOptions;
use crate::processed::{
    ProcessedConstructorInfo, ProcessedIndexerInfo, ProcessedMethodInfo, ProcessedParameterInfo,
    ProcessedPropertyInfo, ProcessedSymbols, ProcessedTypeParameterInfo, PropertyMode,
};
use crate::resolve::{OBJECT_TYPE, TypeResolver, contract_name};
use crate::symbol::{SymbolInfo, SymbolKind, SymbolParent};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::rc::Rc;
use tracing::trace;
use tsbind_common::{
    ConstructorInfo, GetAccessorInfo, IndexerInfo, MethodInfo, ParameterInfo, PropertyInfo,
    SetAccessorInfo, TypeInfo, TypeParameter, sanitize_name,
};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Render type parameters, keeping a constraint only when it says more
/// than `IJSObject`.
pub fn process_type_parameters<'a>(
    resolver: &TypeResolver<'a>,
    type_parameters: &[TypeParameter],
    ctx: &Rc<SymbolParent<'a>>,
    locals: Option<&[TypeParameter]>,
) -> Result<Vec<ProcessedTypeParameterInfo>, SolverError> {
    type_parameters
        .iter()
        .map(|type_parameter| {
            let constraint = match &type_parameter.constraint {
                Some(constraint) => {
                    let rendered = resolver.render(constraint, ctx, locals, None)?;
                    (rendered != OBJECT_TYPE).then_some(rendered)
                }
                None => None,
            };
            Ok(ProcessedTypeParameterInfo {
                name: type_parameter.name.clone(),
                constraint,
            })
        })
        .collect()
}

/// Borrowed view of a method or constructor signature.
#[derive(Clone, Copy)]
struct Signature<'m> {
    type_parameters: &'m [TypeParameter],
    parameters: &'m [ParameterInfo],
    return_type: &'m TypeInfo,
}

impl<'m> From<&'m MethodInfo> for Signature<'m> {
    fn from(method: &'m MethodInfo) -> Self {
        Self {
            type_parameters: &method.type_parameters,
            parameters: &method.parameters,
            return_type: &method.return_type,
        }
    }
}

impl<'m> From<&'m ConstructorInfo> for Signature<'m> {
    fn from(constructor: &'m ConstructorInfo) -> Self {
        Self {
            type_parameters: &constructor.type_parameters,
            parameters: &constructor.parameters,
            return_type: &constructor.return_type,
        }
    }
}

/// The signature every member of an overload group conforms to.
struct Conformed<'m> {
    type_parameters: Vec<TypeParameter>,
    parameters: Vec<(&'m str, TypeInfo)>,
    return_type: TypeInfo,
}

fn conform<'m>(group: &[Signature<'m>]) -> Option<Conformed<'m>> {
    let (first, _) = group.split_first()?;

    let type_parameters = first
        .type_parameters
        .iter()
        .enumerate()
        .map(|(index, type_parameter)| {
            let agrees = group.iter().all(|signature| {
                signature
                    .type_parameters
                    .get(index)
                    .is_some_and(|other| other.constraint == type_parameter.constraint)
            });
            TypeParameter {
                name: type_parameter.name.clone(),
                constraint: if agrees {
                    type_parameter.constraint.clone()
                } else {
                    None
                },
                default: None,
            }
        })
        .collect();

    let parameters = first
        .parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| {
            let agrees = group.iter().all(|signature| {
                signature
                    .parameters
                    .get(index)
                    .is_some_and(|other| other.ty == parameter.ty)
            });
            let ty = if agrees {
                parameter.ty.clone()
            } else {
                TypeInfo::any()
            };
            (parameter.name.as_str(), ty)
        })
        .collect();

    let return_type = if group
        .iter()
        .all(|signature| signature.return_type == first.return_type)
    {
        first.return_type.clone()
    } else {
        TypeInfo::any()
    };

    Some(Conformed {
        type_parameters,
        parameters,
        return_type,
    })
}

#[derive(Default)]
struct AccessorGroup<'a> {
    getters: Vec<&'a GetAccessorInfo>,
    setters: Vec<&'a SetAccessorInfo>,
}

impl AccessorGroup<'_> {
    /// The type all accessors agree on, or `any`.
    fn conforming_type(&self) -> TypeInfo {
        let mut types: Vec<&TypeInfo> = self
            .getters
            .iter()
            .map(|getter| &getter.return_type)
            .collect();
        for setter in &self.setters {
            match setter.parameters.first() {
                Some(parameter) => types.push(&parameter.ty),
                None => return TypeInfo::any(),
            }
        }
        match types.split_first() {
            Some((first, rest)) if rest.iter().all(|ty| ty == first) => (*first).clone(),
            _ => TypeInfo::any(),
        }
    }

    fn mode(&self) -> PropertyMode {
        match (self.getters.is_empty(), self.setters.is_empty()) {
            (false, true) => PropertyMode::GetterOnly,
            (true, false) => PropertyMode::SetterOnly,
            _ => PropertyMode::GetterAndSetter,
        }
    }
}

pub struct ConformanceMerger<'a> {
    resolver: &'a TypeResolver<'a>,
    global_scope_interface: String,
    /// Getters appended to the global-scope interface, one per loose global.
    global_properties: Vec<ProcessedPropertyInfo>,
}

impl<'a> ConformanceMerger<'a> {
    pub fn new(
        resolver: &'a TypeResolver<'a>,
        options: &SolverOptions,
        loose_globals: &LooseGlobals<'_>,
    ) -> Self {
        let global_properties = loose_globals
            .iter()
            .map(|loose| ProcessedPropertyInfo {
                ty: contract_name(&loose.interface.name),
                name: sanitize_name(&loose.global.name),
                original_name: loose.global.name.clone(),
                mode: PropertyMode::GetterOnly,
            })
            .collect();

        Self {
            resolver,
            global_scope_interface: options.global_scope_interface.clone(),
            global_properties,
        }
    }

    /// Merge the members of `symbols` found at `origin`.
    pub fn merge(
        &self,
        symbols: &[SymbolInfo<'a>],
        origin: &Rc<SymbolParent<'a>>,
    ) -> Result<ProcessedSymbols, SolverError> {
        let mut constructors: FxIndexMap<(usize, usize), Vec<Signature<'a>>> =
            FxIndexMap::default();
        let mut methods: FxIndexMap<(&'a str, usize, usize), Vec<Signature<'a>>> =
            FxIndexMap::default();
        let mut properties: FxIndexMap<&'a str, &'a PropertyInfo> = FxIndexMap::default();
        let mut accessors: FxIndexMap<&'a str, AccessorGroup<'a>> = FxIndexMap::default();
        let mut indexers: Vec<&'a IndexerInfo> = Vec::new();

        for symbol in symbols.iter().filter(|symbol| symbol.parent == *origin) {
            match symbol.kind {
                SymbolKind::Constructor(constructor) => constructors
                    .entry((
                        constructor.parameters.len(),
                        constructor.type_parameters.len(),
                    ))
                    .or_default()
                    .push(constructor.into()),
                SymbolKind::Method(method) => methods
                    .entry((
                        method.name.as_str(),
                        method.parameters.len(),
                        method.type_parameters.len(),
                    ))
                    .or_default()
                    .push(method.into()),
                SymbolKind::Property(property) => {
                    properties.entry(property.name.as_str()).or_insert(property);
                }
                SymbolKind::GetAccessor(getter) => accessors
                    .entry(getter.name.as_str())
                    .or_default()
                    .getters
                    .push(getter),
                SymbolKind::SetAccessor(setter) => accessors
                    .entry(setter.name.as_str())
                    .or_default()
                    .setters
                    .push(setter),
                SymbolKind::Indexer(indexer) => indexers.push(indexer),
            }
        }

        trace!(
            origin = %origin.owner().name,
            constructors = constructors.len(),
            methods = methods.len(),
            properties = properties.len(),
            accessors = accessors.len(),
            indexers = indexers.len(),
            "merging origin"
        );

        let mut processed = ProcessedSymbols::default();

        for group in constructors.values() {
            if let Some(constructor) = self.merge_constructor(group, origin)? {
                processed.constructors.push(constructor);
            }
        }

        for ((name, _, _), group) in &methods {
            if let Some(method) = self.merge_method(name, group, origin)? {
                processed.methods.push(method);
            }
        }

        for (name, property) in &properties {
            processed.properties.push(ProcessedPropertyInfo {
                ty: self.resolver.render(&property.ty, origin, None, None)?,
                name: sanitize_name(name),
                original_name: (*name).to_string(),
                mode: if property.is_readonly {
                    PropertyMode::GetterOnly
                } else {
                    PropertyMode::GetterAndSetter
                },
            });
        }

        for (name, group) in &accessors {
            if properties.contains_key(name) {
                trace!(name = %name, "accessor shadowed by a property");
                continue;
            }
            processed.properties.push(ProcessedPropertyInfo {
                ty: self
                    .resolver
                    .render(&group.conforming_type(), origin, None, None)?,
                name: sanitize_name(name),
                original_name: (*name).to_string(),
                mode: group.mode(),
            });
        }

        let mut index_types: FxHashSet<String> = FxHashSet::default();
        for indexer in indexers {
            let index_type = self
                .resolver
                .render(&indexer.index_type, origin, None, None)?;
            if !index_types.insert(index_type.clone()) {
                trace!(index_type = %index_type, "duplicate indexer skipped");
                continue;
            }
            processed.indexers.push(ProcessedIndexerInfo {
                index_name: indexer_parameter_name(&indexer.index_name),
                index_type,
                return_type: self
                    .resolver
                    .render(&indexer.return_type, origin, None, None)?,
                mode: if indexer.is_readonly {
                    PropertyMode::GetterOnly
                } else {
                    PropertyMode::GetterAndSetter
                },
            });
        }

        if origin.owner().name == self.global_scope_interface {
            processed
                .properties
                .extend(self.global_properties.iter().cloned());
        }

        Ok(processed)
    }

    fn merge_constructor(
        &self,
        group: &[Signature<'a>],
        origin: &Rc<SymbolParent<'a>>,
    ) -> Result<Option<ProcessedConstructorInfo>, SolverError> {
        let Some(conformed) = conform(group) else {
            return Ok(None);
        };
        let (type_parameters, parameters, return_type, returns_void) =
            self.render_conformed(&conformed, origin)?;
        Ok(Some(ProcessedConstructorInfo {
            return_type,
            returns_void,
            type_parameters,
            parameters,
        }))
    }

    fn merge_method(
        &self,
        name: &str,
        group: &[Signature<'a>],
        origin: &Rc<SymbolParent<'a>>,
    ) -> Result<Option<ProcessedMethodInfo>, SolverError> {
        let Some(conformed) = conform(group) else {
            return Ok(None);
        };
        let (type_parameters, parameters, return_type, returns_void) =
            self.render_conformed(&conformed, origin)?;
        Ok(Some(ProcessedMethodInfo {
            name: sanitize_name(name),
            original_name: name.to_string(),
            return_type,
            returns_void,
            type_parameters,
            parameters,
        }))
    }

    fn render_conformed(
        &self,
        conformed: &Conformed<'_>,
        origin: &Rc<SymbolParent<'a>>,
    ) -> Result<
        (
            Vec<ProcessedTypeParameterInfo>,
            Vec<ProcessedParameterInfo>,
            String,
            bool,
        ),
        SolverError,
    > {
        let locals = Some(conformed.type_parameters.as_slice());
        let type_parameters =
            process_type_parameters(self.resolver, &conformed.type_parameters, origin, locals)?;
        let parameters = conformed
            .parameters
            .iter()
            .map(|(name, ty)| {
                Ok(ProcessedParameterInfo {
                    ty: self.resolver.render(ty, origin, locals, None)?,
                    name: sanitize_name(name),
                })
            })
            .collect::<Result<Vec<_>, SolverError>>()?;
        let return_type = self
            .resolver
            .render(&conformed.return_type, origin, locals, None)?;
        let returns_void = self.resolver.is_void(&conformed.return_type)?;
        Ok((type_parameters, parameters, return_type, returns_void))
    }
}

/// `value` is the implicit setter parameter in C#, so an index parameter
/// may not use it.
fn indexer_parameter_name(name: &str) -> String {
    if name == "value" {
        "index".to_string()
    } else {
        sanitize_name(name)
    }
}
