/// Root namespace of the interop library the bindings are generated into.
pub const DEFAULT_NAMESPACE: &str = "RealGoodApps.BlazorJavascript.Interop";

/// Line terminator of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewLine {
    #[default]
    Lf,
    CrLf,
}

impl NewLine {
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Root namespace; artifacts go into its `Interfaces`, `Prototypes` and
    /// `GlobalVariables` sub-namespaces.
    pub namespace: String,
    pub new_line: NewLine,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            new_line: NewLine::default(),
        }
    }
}
