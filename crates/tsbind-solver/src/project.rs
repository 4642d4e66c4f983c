//! Interface and class projection.
//!
//! For every source interface, and then every loose-global interface, the
//! projector produces two views:
//!
//! - the **interface view**: the interface's own members, merged, with its
//!   `extends` list rendered as base contracts;
//! - the **class view**: every member reachable through the inheritance
//!   chain, grouped by the ancestor instantiation it came from. Each group
//!   becomes one explicit-implementation block of the shim class.

use crate::collect::SymbolCollector;
use crate::conform::{ConformanceMerger, process_type_parameters};
use crate::diagnostics::SolverError;
use crate::globals::LooseGlobals;
use crate::options::SolverOptions;
use crate::processed::{
    InterfaceOrigin, ProcessedClassImplementationInfo, ProcessedClassInfo, ProcessedInfo,
    ProcessedInterfaceInfo,
};
use crate::resolve::{OBJECT_TYPE, TypeResolver, contract_name};
use crate::symbol::SymbolParent;
use crate::universe::TypeUniverse;
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::rc::Rc;
use tracing::{Level, debug, span, trace};
use tsbind_common::InterfaceInfo;

/// Open generic form of a type name: `Map<,>` for two parameters.
pub fn unbound_name(interface: &InterfaceInfo) -> String {
    match interface.type_parameters.len() {
        0 => interface.name.clone(),
        count => format!("{}<{}>", interface.name, ",".repeat(count - 1)),
    }
}

pub struct Projector<'a> {
    universe: &'a TypeUniverse<'a>,
    resolver: &'a TypeResolver<'a>,
    collector: SymbolCollector<'a>,
    merger: ConformanceMerger<'a>,
    loose_globals: &'a LooseGlobals<'a>,
    prototype_targets: FxHashSet<&'a str>,
}

impl<'a> Projector<'a> {
    pub fn new(
        universe: &'a TypeUniverse<'a>,
        resolver: &'a TypeResolver<'a>,
        loose_globals: &'a LooseGlobals<'a>,
        options: &SolverOptions,
    ) -> Result<Self, SolverError> {
        let mut prototype_targets = FxHashSet::default();
        for ty in universe
            .global_variables()
            .iter()
            .filter_map(|global| global.prototype_type())
        {
            if let Some(name) = universe.expand_aliases(ty)?.single_name() {
                prototype_targets.insert(name);
            }
        }

        Ok(Self {
            universe,
            resolver,
            collector: SymbolCollector::new(universe),
            merger: ConformanceMerger::new(resolver, options, loose_globals),
            loose_globals,
            prototype_targets,
        })
    }

    pub fn project(&self) -> Result<ProcessedInfo, SolverError> {
        let mut processed = ProcessedInfo::default();

        for interface in self.universe.interfaces() {
            let view = self.project_interface(interface, InterfaceOrigin::Source)?;
            let class =
                self.project_class(interface, format!("{}Prototype", interface.name), &view)?;
            processed.interfaces.push(view);
            processed.classes.push(class);
        }

        for loose in self.loose_globals.iter() {
            let origin = InterfaceOrigin::LooseGlobal {
                global_name: loose.global.name.clone(),
            };
            let view = self.project_interface(&loose.interface, origin)?;
            let class = self.project_class(&loose.interface, loose.interface.name.clone(), &view)?;
            processed.interfaces.push(view);
            processed.classes.push(class);
        }

        debug!(
            interfaces = processed.interfaces.len(),
            loose_globals = self.loose_globals.len(),
            "projection complete"
        );
        Ok(processed)
    }

    pub fn project_interface(
        &self,
        interface: &'a InterfaceInfo,
        origin: InterfaceOrigin,
    ) -> Result<ProcessedInterfaceInfo, SolverError> {
        let _span = span!(Level::DEBUG, "project_interface", name = %interface.name).entered();

        let ctx = SymbolParent::root(interface);
        let type_parameters =
            process_type_parameters(self.resolver, &interface.type_parameters, &ctx, None)?;

        let mut extends: Vec<String> = Vec::new();
        for entry in &interface.extends_list {
            let target = self.universe.expand_aliases(entry)?;
            if target.single_name() == Some(interface.name.as_str()) {
                continue;
            }
            let rendered = self.resolver.render(entry, &ctx, None, None)?;
            if rendered != OBJECT_TYPE && !extends.contains(&rendered) {
                extends.push(rendered);
            }
        }

        let symbols = self
            .merger
            .merge(&self.collector.collect(interface, false)?, &ctx)?;

        let has_prototype = matches!(origin, InterfaceOrigin::Source)
            && self.prototype_targets.contains(interface.name.as_str());

        Ok(ProcessedInterfaceInfo {
            name: contract_name(&interface.name),
            source_name: interface.name.clone(),
            unbound_name: unbound_name(interface),
            type_parameters,
            extends,
            symbols,
            origin,
            has_prototype,
        })
    }

    pub fn project_class(
        &self,
        interface: &'a InterfaceInfo,
        class_name: String,
        view: &ProcessedInterfaceInfo,
    ) -> Result<ProcessedClassInfo, SolverError> {
        let _span = span!(Level::DEBUG, "project_class", name = %class_name).entered();

        let symbols = self.collector.collect(interface, true)?;

        let mut origins: IndexSet<Rc<SymbolParent<'a>>, FxBuildHasher> = IndexSet::default();
        for symbol in &symbols {
            origins.insert(Rc::clone(&symbol.parent));
        }
        // The root takes part even without members of its own; the
        // global-scope interface gains members during merging.
        origins.insert(SymbolParent::root(interface));

        let mut prefixes: FxHashSet<String> = FxHashSet::default();
        let mut implementations = Vec::new();
        for origin in &origins {
            let prefix = self.resolver.render_origin(origin)?;
            if prefixes.contains(&prefix) {
                trace!(prefix = %prefix, "duplicate implementation block skipped");
                continue;
            }
            let merged = self.merger.merge(&symbols, origin)?;
            if merged.is_empty() {
                continue;
            }
            prefixes.insert(prefix.clone());
            implementations.push(ProcessedClassImplementationInfo {
                prefix,
                symbols: merged,
            });
        }

        Ok(ProcessedClassInfo {
            name: class_name,
            interface_name: view.name.clone(),
            type_parameters: view.type_parameters.clone(),
            implementations,
        })
    }
}
