//! Inheritance flattening.

use crate::diagnostics::SolverError;
use crate::symbol::{SymbolInfo, SymbolKind, SymbolParent};
use crate::universe::TypeUniverse;
use rustc_hash::FxHashSet;
use std::rc::Rc;
use tracing::{debug, warn};
use tsbind_common::InterfaceInfo;
use tsbind_common::limits::MAX_EXTENDS_DEPTH;

pub struct SymbolCollector<'a> {
    universe: &'a TypeUniverse<'a>,
}

impl<'a> SymbolCollector<'a> {
    pub fn new(universe: &'a TypeUniverse<'a>) -> Self {
        Self { universe }
    }

    /// Members visible on `root`, each tagged with the node it was found at.
    ///
    /// With `recursive`, every `extends` entry resolving to a known interface
    /// is followed first, so inherited members precede the root's own. An
    /// interface reachable by two paths contributes once per path.
    pub fn collect(
        &self,
        root: &'a InterfaceInfo,
        recursive: bool,
    ) -> Result<Vec<SymbolInfo<'a>>, SolverError> {
        let mut symbols = Vec::new();
        let ctx = SymbolParent::root(root);
        if recursive {
            self.collect_extended(&ctx, &mut symbols)?;
        } else {
            push_body(&ctx, &mut symbols);
        }
        Ok(symbols)
    }

    fn collect_extended(
        &self,
        node: &Rc<SymbolParent<'a>>,
        symbols: &mut Vec<SymbolInfo<'a>>,
    ) -> Result<(), SolverError> {
        let owner = node.owner();
        for entry in &owner.extends_list {
            let Some(single) = self.universe.expand_aliases(entry)?.as_single() else {
                continue;
            };
            let Some(base) = self.universe.interface(&single.name) else {
                debug!(interface = %owner.name, base = %single.name, "extends entry is not a known interface");
                continue;
            };
            if node.has_owner_on_path(&base.name) {
                debug!(interface = %owner.name, base = %base.name, "skipping cyclic extends entry");
                continue;
            }
            if node.depth() >= MAX_EXTENDS_DEPTH {
                warn!(interface = %owner.name, base = %base.name, "extends chain too deep, truncating");
                continue;
            }

            let child = SymbolParent::extended(base, single.type_arguments.clone(), node);
            self.collect_extended(&child, symbols)?;
        }
        push_body(node, symbols);
        Ok(())
    }

    /// Every member of every interface reachable from `root`, each interface
    /// counted once. Type arguments are not tracked; each interface is its
    /// own root. Used for name-collision checks only.
    pub fn collect_flat(
        &self,
        root: &'a InterfaceInfo,
    ) -> Result<Vec<SymbolInfo<'a>>, SolverError> {
        let mut symbols = Vec::new();
        let mut visited: FxHashSet<&'a str> = FxHashSet::default();
        self.collect_flat_into(root, &mut visited, &mut symbols)?;
        Ok(symbols)
    }

    fn collect_flat_into(
        &self,
        interface: &'a InterfaceInfo,
        visited: &mut FxHashSet<&'a str>,
        symbols: &mut Vec<SymbolInfo<'a>>,
    ) -> Result<(), SolverError> {
        if !visited.insert(interface.name.as_str()) {
            return Ok(());
        }
        for entry in &interface.extends_list {
            let base = self
                .universe
                .expand_aliases(entry)?
                .single_name()
                .and_then(|name| self.universe.interface(name));
            if let Some(base) = base {
                self.collect_flat_into(base, visited, symbols)?;
            }
        }
        push_body(&SymbolParent::root(interface), symbols);
        Ok(())
    }
}

fn push_body<'a>(node: &Rc<SymbolParent<'a>>, symbols: &mut Vec<SymbolInfo<'a>>) {
    let body = &node.owner().body;
    symbols.extend(
        body.methods
            .iter()
            .map(|method| SymbolInfo::new(node, SymbolKind::Method(method))),
    );
    symbols.extend(
        body.constructors
            .iter()
            .map(|constructor| SymbolInfo::new(node, SymbolKind::Constructor(constructor))),
    );
    symbols.extend(
        body.properties
            .iter()
            .map(|property| SymbolInfo::new(node, SymbolKind::Property(property))),
    );
    symbols.extend(
        body.get_accessors
            .iter()
            .map(|getter| SymbolInfo::new(node, SymbolKind::GetAccessor(getter))),
    );
    symbols.extend(
        body.set_accessors
            .iter()
            .map(|setter| SymbolInfo::new(node, SymbolKind::SetAccessor(setter))),
    );
    symbols.extend(
        body.indexers
            .iter()
            .map(|indexer| SymbolInfo::new(node, SymbolKind::Indexer(indexer))),
    );
}
