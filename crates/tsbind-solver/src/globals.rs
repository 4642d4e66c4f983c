//! Loose globals: global variables that are not already reachable as a
//! member of the global-scope interface.
//!
//! Each one gets a synthetic interface named `<name>Global`. An inline
//! object type becomes the body of that interface; a global typed with a
//! known interface gets a synthetic interface extending it. Construct
//! signatures of the global are appended to the body either way.

use crate::collect::SymbolCollector;
use crate::diagnostics::SolverError;
use crate::options::SolverOptions;
use crate::symbol::SymbolKind;
use crate::universe::TypeUniverse;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};
use tsbind_common::{GlobalVariableInfo, InterfaceInfo};

#[derive(Debug, Clone)]
pub struct LooseGlobal<'a> {
    pub global: &'a GlobalVariableInfo,
    /// Synthetic interface named `<global>Global`.
    pub interface: InterfaceInfo,
}

#[derive(Debug, Clone, Default)]
pub struct LooseGlobals<'a> {
    globals: Vec<LooseGlobal<'a>>,
}

/// Name of the synthetic interface for a global variable.
pub fn synthetic_interface_name(global_name: &str) -> String {
    format!("{global_name}Global")
}

impl<'a> LooseGlobals<'a> {
    pub fn discover(
        universe: &'a TypeUniverse<'a>,
        options: &SolverOptions,
    ) -> Result<Self, SolverError> {
        let exposed = exposed_names(universe, &options.global_scope_interface)?;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut globals = Vec::new();

        for global in universe.global_variables() {
            if exposed.contains(global.name.as_str()) {
                debug!(global = %global.name, "global already exposed by the global scope");
                continue;
            }
            if !seen.insert(global.name.as_str()) {
                warn!(global = %global.name, "duplicate global variable ignored");
                continue;
            }

            let name = synthetic_interface_name(&global.name);
            if universe.interface(&name).is_some() {
                warn!(global = %global.name, interface = %name, "synthetic interface name collides with a declared interface");
                continue;
            }

            let Some(interface) = synthesize(universe, global, name)? else {
                debug!(global = %global.name, "global has neither an inline type nor a known interface type");
                continue;
            };
            globals.push(LooseGlobal { global, interface });
        }

        Ok(Self { globals })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LooseGlobal<'a>> {
        self.globals.iter()
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    pub fn find(&self, global_name: &str) -> Option<&LooseGlobal<'a>> {
        self.globals
            .iter()
            .find(|loose| loose.global.name == global_name)
    }
}

/// Property and getter names anywhere in the global-scope interface's
/// hierarchy.
fn exposed_names<'a>(
    universe: &'a TypeUniverse<'a>,
    scope_name: &str,
) -> Result<FxHashSet<&'a str>, SolverError> {
    let Some(scope) = universe.interface(scope_name) else {
        warn!(interface = %scope_name, "global scope interface not found, every global is loose");
        return Ok(FxHashSet::default());
    };

    Ok(SymbolCollector::new(universe)
        .collect_flat(scope)?
        .into_iter()
        .filter_map(|symbol| match symbol.kind {
            SymbolKind::Property(property) => Some(property.name.as_str()),
            SymbolKind::GetAccessor(getter) => Some(getter.name.as_str()),
            _ => None,
        })
        .collect())
}

fn synthesize<'a>(
    universe: &TypeUniverse<'a>,
    global: &'a GlobalVariableInfo,
    name: String,
) -> Result<Option<InterfaceInfo>, SolverError> {
    let mut interface = InterfaceInfo::new(name);

    if let Some(body) = &global.inline_interface {
        interface.body = body.clone();
    } else {
        let Some(ty) = &global.ty else {
            return Ok(None);
        };
        let resolved = universe.expand_aliases(ty)?;
        let known = resolved
            .single_name()
            .is_some_and(|base| universe.interface(base).is_some());
        if !known {
            return Ok(None);
        }
        interface = interface.extending(resolved.clone());
    }

    interface
        .body
        .constructors
        .extend(global.constructors.iter().cloned());
    Ok(Some(interface))
}
