//! Declaration model produced by the front end.
//!
//! The front end walks a `.d.ts` file and serializes what it found as a
//! [`ParsedInfo`] JSON document. Everything in this module is read-only input
//! to the solver: it is deserialized once per run and never mutated.
//!
//! Type references use the front end's wire shape, an object with nullable
//! `single`, `array` and `function` fields:
//!
//! ```json
//! { "single": { "name": "Promise", "typeArguments": [ { "single": { "name": "string" } } ] } }
//! { "array": { "single": { "name": "number" } } }
//! { "function": { } }
//! null
//! ```
//!
//! In memory that shape is folded into the closed [`TypeInfo`] enum.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `null` wherever the front end may omit a list or string.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Type references
// =============================================================================

/// A reference to a type, as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<RawTypeInfo>", into = "RawTypeInfo")]
pub enum TypeInfo {
    /// A named reference, possibly with type arguments.
    Single(SingleTypeInfo),
    /// `T[]`.
    Array(Box<TypeInfo>),
    /// A function type. Parameter and return detail is erased.
    Function,
    /// The front end could not classify the type.
    #[default]
    Unresolved,
}

impl TypeInfo {
    /// A plain named reference without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeInfo::Single(SingleTypeInfo::new(name))
    }

    /// A named reference with type arguments.
    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeInfo>) -> Self {
        TypeInfo::Single(SingleTypeInfo {
            name: name.into(),
            type_arguments,
            is_unhandled: false,
        })
    }

    pub fn array(element: TypeInfo) -> Self {
        TypeInfo::Array(Box::new(element))
    }

    /// The type used whenever a slot cannot be given a precise type.
    pub fn any() -> Self {
        TypeInfo::named("any")
    }

    /// Name of a `Single` reference.
    pub fn single_name(&self) -> Option<&str> {
        match self {
            TypeInfo::Single(single) => Some(single.name.as_str()),
            TypeInfo::Array(_) | TypeInfo::Function | TypeInfo::Unresolved => None,
        }
    }

    pub fn as_single(&self) -> Option<&SingleTypeInfo> {
        match self {
            TypeInfo::Single(single) => Some(single),
            TypeInfo::Array(_) | TypeInfo::Function | TypeInfo::Unresolved => None,
        }
    }
}

/// Wire shape of a [`TypeInfo`].
///
/// When more than one field is populated, `array` wins over `function`, which
/// wins over `single`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    single: Option<SingleTypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    array: Option<Box<TypeInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function: Option<serde_json::Value>,
}

impl From<Option<RawTypeInfo>> for TypeInfo {
    fn from(raw: Option<RawTypeInfo>) -> Self {
        let Some(raw) = raw else {
            return TypeInfo::Unresolved;
        };
        if let Some(element) = raw.array {
            return TypeInfo::Array(element);
        }
        if raw.function.is_some() {
            return TypeInfo::Function;
        }
        match raw.single {
            Some(single) => TypeInfo::Single(single),
            None => TypeInfo::Unresolved,
        }
    }
}

impl From<TypeInfo> for RawTypeInfo {
    fn from(type_info: TypeInfo) -> Self {
        match type_info {
            TypeInfo::Single(single) => RawTypeInfo {
                single: Some(single),
                ..RawTypeInfo::default()
            },
            TypeInfo::Array(element) => RawTypeInfo {
                array: Some(element),
                ..RawTypeInfo::default()
            },
            TypeInfo::Function => RawTypeInfo {
                function: Some(serde_json::Value::Object(serde_json::Map::new())),
                ..RawTypeInfo::default()
            },
            TypeInfo::Unresolved => RawTypeInfo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleTypeInfo {
    /// Builtin keyword, interface name, alias name or type-parameter name.
    /// Empty when the front end produced no name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_arguments: Vec<TypeInfo>,
    /// Set for literal or otherwise unclassified shapes.
    #[serde(default)]
    pub is_unhandled: bool,
}

impl SingleTypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
            is_unhandled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAlias {
    pub name: String,
    #[serde(default)]
    pub alias_type: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub constraint: Option<TypeInfo>,
    #[serde(default)]
    pub default: Option<TypeInfo>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }

    pub fn with_constraint(mut self, constraint: TypeInfo) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_default(mut self, default: TypeInfo) -> Self {
        self.default = Some(default);
        self
    }
}

// =============================================================================
// Members
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: TypeInfo,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default)]
    pub return_type: TypeInfo,
}

impl MethodInfo {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ParameterInfo>,
        return_type: TypeInfo,
    ) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters,
            return_type,
        }
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default)]
    pub return_type: TypeInfo,
}

impl ConstructorInfo {
    pub fn new(parameters: Vec<ParameterInfo>, return_type: TypeInfo) -> Self {
        Self {
            type_parameters: Vec::new(),
            parameters,
            return_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: TypeInfo,
    #[serde(default)]
    pub is_readonly: bool,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty,
            is_readonly: false,
        }
    }

    pub fn readonly(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            is_readonly: true,
            ..Self::new(name, ty)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccessorInfo {
    pub name: String,
    #[serde(default)]
    pub return_type: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAccessorInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerInfo {
    pub index_name: String,
    #[serde(default)]
    pub index_type: TypeInfo,
    #[serde(default)]
    pub return_type: TypeInfo,
    #[serde(default)]
    pub is_readonly: bool,
}

/// Ordered member lists of one interface (or one inline object type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceBodyInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<MethodInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constructors: Vec<ConstructorInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<PropertyInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub get_accessors: Vec<GetAccessorInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub set_accessors: Vec<SetAccessorInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indexers: Vec<IndexerInfo>,
}

impl InterfaceBodyInfo {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
            && self.constructors.is_empty()
            && self.properties.is_empty()
            && self.get_accessors.is_empty()
            && self.set_accessors.is_empty()
            && self.indexers.is_empty()
    }
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extends_list: Vec<TypeInfo>,
    #[serde(default)]
    pub body: InterfaceBodyInfo,
}

impl InterfaceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            extends_list: Vec::new(),
            body: InterfaceBodyInfo::default(),
        }
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn extending(mut self, base: TypeInfo) -> Self {
        self.extends_list.push(base);
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.body.methods.push(method);
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.body.properties.push(property);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    pub fn type_parameter_index(&self, name: &str) -> Option<usize> {
        self.type_parameters
            .iter()
            .position(|type_parameter| type_parameter.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalVariableInfo {
    pub name: String,
    /// Declared type, when it is a named reference.
    #[serde(rename = "type", default)]
    pub ty: Option<TypeInfo>,
    /// Anonymous body, when the declared type is an object literal.
    #[serde(default)]
    pub inline_interface: Option<InterfaceBodyInfo>,
    /// Construct signatures of a constructible global.
    #[serde(default, deserialize_with = "null_as_default")]
    pub constructors: Vec<ConstructorInfo>,
}

impl GlobalVariableInfo {
    pub fn typed(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            inline_interface: None,
            constructors: Vec::new(),
        }
    }

    pub fn inline(name: impl Into<String>, body: InterfaceBodyInfo) -> Self {
        Self {
            name: name.into(),
            ty: None,
            inline_interface: Some(body),
            constructors: Vec::new(),
        }
    }

    /// Declared type of the inline `prototype` property, if any.
    pub fn prototype_type(&self) -> Option<&TypeInfo> {
        self.inline_interface
            .as_ref()?
            .properties
            .iter()
            .find(|property| property.name == "prototype")
            .map(|property| &property.ty)
    }
}

/// Root of the declaration model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub interfaces: Vec<InterfaceInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub global_variables: Vec<GlobalVariableInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_aliases: Vec<TypeAlias>,
}

impl ParsedInfo {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
