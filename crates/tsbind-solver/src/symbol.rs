//! Contextualized members.
//!
//! A [`SymbolParent`] records how an interface was reached from the root
//! being processed: which interface owns the members, which type arguments
//! the `extends` clause supplied, and the node it was extended from. The
//! chain is the substitution context for every type reference inside those
//! members.

use std::hash::{Hash, Hasher};
use std::rc::Rc;
use tsbind_common::{
    ConstructorInfo, GetAccessorInfo, IndexerInfo, InterfaceInfo, MethodInfo, PropertyInfo,
    SetAccessorInfo, TypeInfo,
};

#[derive(Debug, Clone)]
pub struct SymbolParent<'a> {
    owner: &'a InterfaceInfo,
    /// `None` at the root. An `extends` entry without arguments yields
    /// `Some(vec![])`.
    type_arguments: Option<Vec<TypeInfo>>,
    parent: Option<Rc<SymbolParent<'a>>>,
}

impl<'a> SymbolParent<'a> {
    pub fn root(owner: &'a InterfaceInfo) -> Rc<Self> {
        Rc::new(Self {
            owner,
            type_arguments: None,
            parent: None,
        })
    }

    /// `owner` reached from `parent` with the given arguments.
    pub fn extended(
        owner: &'a InterfaceInfo,
        type_arguments: Vec<TypeInfo>,
        parent: &Rc<Self>,
    ) -> Rc<Self> {
        Rc::new(Self {
            owner,
            type_arguments: Some(type_arguments),
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn owner(&self) -> &'a InterfaceInfo {
        self.owner
    }

    pub fn type_arguments(&self) -> Option<&[TypeInfo]> {
        self.type_arguments.as_deref()
    }

    pub fn parent(&self) -> Option<&Rc<SymbolParent<'a>>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of `extends` hops from the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.as_deref();
        }
        depth
    }

    /// Whether an interface named `name` owns this node or any ancestor.
    pub fn has_owner_on_path(&self, name: &str) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.owner.name == name {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }
}

impl PartialEq for SymbolParent<'_> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.owner.name == other.owner.name
            && self.type_arguments == other.type_arguments
            && match (&self.parent, &other.parent) {
                (None, None) => true,
                (Some(left), Some(right)) => Rc::ptr_eq(left, right) || left == right,
                _ => false,
            }
    }
}

impl Eq for SymbolParent<'_> {}

impl Hash for SymbolParent<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.name.hash(state);
        self.type_arguments.hash(state);
        if let Some(parent) = &self.parent {
            parent.hash(state);
        }
    }
}

/// One raw member as declared in the model.
#[derive(Debug, Clone, Copy)]
pub enum SymbolKind<'a> {
    Method(&'a MethodInfo),
    Constructor(&'a ConstructorInfo),
    Property(&'a PropertyInfo),
    GetAccessor(&'a GetAccessorInfo),
    SetAccessor(&'a SetAccessorInfo),
    Indexer(&'a IndexerInfo),
}

/// A member tagged with the node it was found at.
#[derive(Debug, Clone)]
pub struct SymbolInfo<'a> {
    pub parent: Rc<SymbolParent<'a>>,
    pub kind: SymbolKind<'a>,
}

impl<'a> SymbolInfo<'a> {
    pub fn new(parent: &Rc<SymbolParent<'a>>, kind: SymbolKind<'a>) -> Self {
        Self {
            parent: Rc::clone(parent),
            kind,
        }
    }

    /// Declared name, for members that have one.
    pub fn name(&self) -> Option<&'a str> {
        match self.kind {
            SymbolKind::Method(method) => Some(method.name.as_str()),
            SymbolKind::Property(property) => Some(property.name.as_str()),
            SymbolKind::GetAccessor(getter) => Some(getter.name.as_str()),
            SymbolKind::SetAccessor(setter) => Some(setter.name.as_str()),
            SymbolKind::Constructor(_) | SymbolKind::Indexer(_) => None,
        }
    }
}
