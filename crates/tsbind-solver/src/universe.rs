//! Name lookup over the declaration model.

use crate::diagnostics::SolverError;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;
use tsbind_common::{GlobalVariableInfo, InterfaceInfo, ParsedInfo, TypeAlias, TypeInfo};

/// Read-only index of interfaces and aliases by name.
///
/// When the model declares a name twice the first declaration wins; later
/// ones are reported and otherwise ignored.
pub struct TypeUniverse<'a> {
    parsed: &'a ParsedInfo,
    interfaces: FxHashMap<&'a str, &'a InterfaceInfo>,
    aliases: FxHashMap<&'a str, &'a TypeAlias>,
}

impl<'a> TypeUniverse<'a> {
    pub fn new(parsed: &'a ParsedInfo) -> Self {
        let mut interfaces = FxHashMap::default();
        for interface in &parsed.interfaces {
            if interfaces.contains_key(interface.name.as_str()) {
                warn!(name = %interface.name, "duplicate interface declaration ignored");
                continue;
            }
            interfaces.insert(interface.name.as_str(), interface);
        }

        let mut aliases = FxHashMap::default();
        for alias in &parsed.type_aliases {
            if aliases.contains_key(alias.name.as_str()) {
                warn!(name = %alias.name, "duplicate type alias ignored");
                continue;
            }
            aliases.insert(alias.name.as_str(), alias);
        }

        Self {
            parsed,
            interfaces,
            aliases,
        }
    }

    pub fn interface(&self, name: &str) -> Option<&'a InterfaceInfo> {
        self.interfaces.get(name).copied()
    }

    pub fn alias(&self, name: &str) -> Option<&'a TypeAlias> {
        self.aliases.get(name).copied()
    }

    /// Source interfaces in declaration order, without shadowed duplicates.
    pub fn interfaces(&self) -> impl Iterator<Item = &'a InterfaceInfo> + '_ {
        self.parsed
            .interfaces
            .iter()
            .filter(|interface| {
                self.interface(&interface.name)
                    .is_some_and(|indexed| std::ptr::eq(indexed, *interface))
            })
    }

    pub fn global_variables(&self) -> &'a [GlobalVariableInfo] {
        &self.parsed.global_variables
    }

    /// Follow alias names until a non-alias shape is reached.
    ///
    /// Type arguments written on an alias reference are discarded; aliases
    /// are not generic in the model.
    pub fn expand_aliases<'t>(&self, ty: &'t TypeInfo) -> Result<&'t TypeInfo, SolverError>
    where
        'a: 't,
    {
        let mut current = ty;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut chain: Vec<String> = Vec::new();

        while let Some(alias) = current.single_name().and_then(|name| self.alias(name)) {
            chain.push(alias.name.clone());
            if !seen.insert(alias.name.as_str()) {
                return Err(SolverError::TypeAliasCycle { chain });
            }
            current = &alias.alias_type;
        }

        Ok(current)
    }
}
