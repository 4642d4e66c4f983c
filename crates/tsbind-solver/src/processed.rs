//! Render-ready output of the projector.
//!
//! Every type in here is already a rendered C# type name, and every member
//! name is already sanitized. The emitter only lays the text out.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedTypeParameterInfo {
    pub name: String,
    /// Rendered constraint. `None` when absent, diverging or `IJSObject`.
    pub constraint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedParameterInfo {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedConstructorInfo {
    pub return_type: String,
    pub returns_void: bool,
    pub type_parameters: Vec<ProcessedTypeParameterInfo>,
    pub parameters: Vec<ProcessedParameterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedMethodInfo {
    /// Sanitized C# name.
    pub name: String,
    /// Name used for the dynamic lookup.
    pub original_name: String,
    pub return_type: String,
    pub returns_void: bool,
    pub type_parameters: Vec<ProcessedTypeParameterInfo>,
    pub parameters: Vec<ProcessedParameterInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyMode {
    GetterOnly,
    SetterOnly,
    GetterAndSetter,
}

impl PropertyMode {
    pub fn has_getter(self) -> bool {
        matches!(self, Self::GetterOnly | Self::GetterAndSetter)
    }

    pub fn has_setter(self) -> bool {
        matches!(self, Self::SetterOnly | Self::GetterAndSetter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPropertyInfo {
    pub ty: String,
    pub name: String,
    pub original_name: String,
    pub mode: PropertyMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedIndexerInfo {
    pub index_name: String,
    pub index_type: String,
    pub return_type: String,
    pub mode: PropertyMode,
}

/// Merged members of one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedSymbols {
    pub constructors: Vec<ProcessedConstructorInfo>,
    pub methods: Vec<ProcessedMethodInfo>,
    pub properties: Vec<ProcessedPropertyInfo>,
    pub indexers: Vec<ProcessedIndexerInfo>,
}

impl ProcessedSymbols {
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
            && self.methods.is_empty()
            && self.properties.is_empty()
            && self.indexers.is_empty()
    }

    pub fn property(&self, name: &str) -> Option<&ProcessedPropertyInfo> {
        self.properties.iter().find(|property| property.original_name == name)
    }
}

/// Where a projected interface came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceOrigin {
    /// Declared in the model.
    Source,
    /// Synthesized for a global variable.
    LooseGlobal { global_name: String },
}

/// Declaration view of one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedInterfaceInfo {
    /// Contract name (`IFoo`).
    pub name: String,
    /// Name in the model (`Foo`, or `fooGlobal` for a loose global).
    pub source_name: String,
    /// Open generic form (`Foo<,>`), equal to `source_name` when not generic.
    pub unbound_name: String,
    pub type_parameters: Vec<ProcessedTypeParameterInfo>,
    /// Rendered base contracts, without `IJSObject`.
    pub extends: Vec<String>,
    /// The interface's own members.
    pub symbols: ProcessedSymbols,
    pub origin: InterfaceOrigin,
    /// Some global exposes this interface as its `prototype`.
    pub has_prototype: bool,
}

/// One explicit-implementation block of a shim class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedClassImplementationInfo {
    /// Instantiated contract the block implements (`IBase<JSString>`).
    pub prefix: String,
    pub symbols: ProcessedSymbols,
}

/// Shim class view of one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedClassInfo {
    /// Class name (`FooPrototype`, or `fooGlobal`).
    pub name: String,
    /// Contract name of the interface the class implements.
    pub interface_name: String,
    pub type_parameters: Vec<ProcessedTypeParameterInfo>,
    pub implementations: Vec<ProcessedClassImplementationInfo>,
}

impl ProcessedClassInfo {
    pub fn implementation(&self, prefix: &str) -> Option<&ProcessedClassImplementationInfo> {
        self.implementations
            .iter()
            .find(|implementation| implementation.prefix == prefix)
    }
}

/// Interface and class views in output order; `classes[i]` belongs to
/// `interfaces[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedInfo {
    pub interfaces: Vec<ProcessedInterfaceInfo>,
    pub classes: Vec<ProcessedClassInfo>,
}

impl ProcessedInfo {
    pub fn interface(&self, source_name: &str) -> Option<&ProcessedInterfaceInfo> {
        self.interfaces
            .iter()
            .find(|interface| interface.source_name == source_name)
    }

    pub fn class_for(&self, source_name: &str) -> Option<&ProcessedClassInfo> {
        let index = self
            .interfaces
            .iter()
            .position(|interface| interface.source_name == source_name)?;
        self.classes.get(index)
    }

    /// Pairs of interface view and class view, in output order.
    pub fn pairs(&self) -> impl Iterator<Item = (&ProcessedInterfaceInfo, &ProcessedClassInfo)> {
        self.interfaces.iter().zip(&self.classes)
    }
}
