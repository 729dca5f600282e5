use crate::ast;

/// A realized reference to a schema type, by name. The wrapper tree mirrors
/// [`ast::TypeReference`] but carries no node metadata; resolving the
/// innermost name against [`crate::Schema::get_type`] walks the cycle-safe
/// name indirection of the realized graph.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}

enum Wrapper {
    List,
    NonNull,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list_of(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub(crate) fn from_ast(ast_ref: &ast::TypeReference) -> Self {
        let mut wrappers = vec![];
        let mut current = ast_ref;
        let name = loop {
            match current {
                ast::TypeReference::List(list_type) => {
                    wrappers.push(Wrapper::List);
                    current = &list_type.inner;
                },
                ast::TypeReference::NonNull(non_null_type) => {
                    wrappers.push(Wrapper::NonNull);
                    current = &non_null_type.inner;
                },
                ast::TypeReference::Named(named_type) =>
                    break named_type.name.clone(),
            }
        };

        let mut realized = Self::Named(name);
        for wrapper in wrappers.into_iter().rev() {
            realized = match wrapper {
                Wrapper::List => Self::list_of(realized),
                Wrapper::NonNull => Self::non_null(realized),
            };
        }
        realized
    }

    /// The name at the bottom of the wrapper tree. Iterative; wrapper chains
    /// in hostile documents can be arbitrarily deep.
    pub fn innermost_name(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                Self::List(inner) => current = inner,
                Self::NonNull(inner) => current = inner,
                Self::Named(name) => return name,
            }
        }
    }

    /// Visit this node and every nested wrapper, outermost first.
    pub fn walk(&self, mut visit: impl FnMut(&TypeRef)) {
        let mut current = self;
        loop {
            visit(current);
            match current {
                Self::List(inner) => current = inner,
                Self::NonNull(inner) => current = inner,
                Self::Named(_) => return,
            }
        }
    }

    /// Render in SDL notation, e.g. `[Widget!]!`.
    pub fn simple_print(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
