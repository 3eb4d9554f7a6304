//! Import node

/// `import path as alias` and `from path import a as b, c`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Dotted module path
    pub path: String,
    pub alias: Option<String>,
    pub items: ImportSet,
}

impl Import {
    /// Variable the module is bound to when the whole module is imported
    pub fn binding(&self) -> Option<&str> {
        match self.items {
            ImportSet::Module => Some(
                self.alias
                    .as_deref()
                    .unwrap_or_else(|| self.path.rsplit('.').next().unwrap_or(&self.path)),
            ),
            _ => None,
        }
    }
}

/// What an import brings into scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSet {
    /// Bind the whole module to one variable
    Module,
    /// Bring every exported name into scope
    Everything,
    /// Bring the listed names into scope
    Named(Vec<ImportItem>),
}

impl From<Option<Vec<ImportItem>>> for ImportSet {
    /// Absent list means the module, an empty list means everything
    fn from(items: Option<Vec<ImportItem>>) -> Self {
        match items {
            None => ImportSet::Module,
            Some(items) if items.is_empty() => ImportSet::Everything,
            Some(items) => ImportSet::Named(items),
        }
    }
}

/// `name as alias`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportItem {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Name the item is bound to in the importing scope
    pub fn binding(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}
