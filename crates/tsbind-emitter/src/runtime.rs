//! Names from the interop runtime that generated code calls into.
//!
//! The runtime itself is hand-written C#; these are the only entry points
//! the emitter relies on.

/// Root contract every generated interface and shim implements.
pub const OBJECT_INTERFACE: &str = "IJSObject";
pub const FUNCTION_TYPE: &str = "JSFunction";
/// Instance method on `JSFunction`: `Invoke(receiver, args...)`.
pub const INVOKE: &str = "Invoke";

/// Extension methods on `IJSObject` (`Extensions` namespace).
pub const GET_PROPERTY: &str = "GetPropertyOfObject";
pub const SET_PROPERTY: &str = "SetPropertyOfObject";
pub const GET_INDEX: &str = "GetIndexOfObject";
pub const SET_INDEX: &str = "SetIndexOfObject";
pub const CONSTRUCT: &str = "ConstructObject";

/// Name of the generated member standing in for a construct signature.
pub const CONSTRUCT_MEMBER: &str = "construct";

pub const BINDING_EXCEPTION: &str = "JSBindingException";
pub const BINDING_FAILURE: &str = "JSBindingFailure";

/// Blazor handles a shim is constructed from.
pub const RUNTIME_TYPE: &str = "IJSInProcessRuntime";
pub const OBJECT_REFERENCE_TYPE: &str = "IJSObjectReference";

/// Why a shim member gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingFailure {
    /// The member is absent on the foreign object.
    MemberNotFound,
    /// The member exists but is not a function.
    NotInvocable,
    /// The value read or returned is not of the declared type.
    ResultShapeMismatch,
}

impl BindingFailure {
    pub const fn as_str(self) -> &'static str {
        match self {
            BindingFailure::MemberNotFound => "MemberNotFound",
            BindingFailure::NotInvocable => "NotInvocable",
            BindingFailure::ResultShapeMismatch => "ResultShapeMismatch",
        }
    }
}

/// Sub-namespaces of the interop library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubNamespace {
    BuiltIns,
    Extensions,
    Interfaces,
    Prototypes,
    GlobalVariables,
}

impl SubNamespace {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubNamespace::BuiltIns => "BuiltIns",
            SubNamespace::Extensions => "Extensions",
            SubNamespace::Interfaces => "Interfaces",
            SubNamespace::Prototypes => "Prototypes",
            SubNamespace::GlobalVariables => "GlobalVariables",
        }
    }

    pub fn qualify(self, root: &str) -> String {
        format!("{root}.{}", self.as_str())
    }
}
