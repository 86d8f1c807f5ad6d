//! Node kinds and the category groupings over them.

use std::fmt;

/// Tag of a node variant. The set is closed.
///
/// The self expression kind is spelled `SelfExpr` because `Self` is
/// reserved in Rust; its display form is still `Self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Environment,
    Package,
    Class,
    Singleton,
    Mixin,
    Program,
    Describe,
    Test,
    Reference,
    SelfExpr,
    Literal,
    Send,
    Super,
    New,
    If,
    Throw,
    Try,
    Variable,
    Return,
    Assignment,
    Field,
    Method,
    Constructor,
    Parameter,
    Body,
    Catch,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Environment => "Environment",
            Kind::Package => "Package",
            Kind::Class => "Class",
            Kind::Singleton => "Singleton",
            Kind::Mixin => "Mixin",
            Kind::Program => "Program",
            Kind::Describe => "Describe",
            Kind::Test => "Test",
            Kind::Reference => "Reference",
            Kind::SelfExpr => "Self",
            Kind::Literal => "Literal",
            Kind::Send => "Send",
            Kind::Super => "Super",
            Kind::New => "New",
            Kind::If => "If",
            Kind::Throw => "Throw",
            Kind::Try => "Try",
            Kind::Variable => "Variable",
            Kind::Return => "Return",
            Kind::Assignment => "Assignment",
            Kind::Field => "Field",
            Kind::Method => "Method",
            Kind::Constructor => "Constructor",
            Kind::Parameter => "Parameter",
            Kind::Body => "Body",
            Kind::Catch => "Catch",
        };
        f.write_str(name)
    }
}

/// Kind groupings accepted by [`Node::is`](crate::model::Node::is).
/// A kind may belong to more than one category (every module is also
/// an entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Entity,
    Module,
    Expression,
    Sentence,
    Other,
}

impl Category {
    pub fn contains(self, kind: Kind) -> bool {
        use Kind::*;
        match self {
            Category::Entity => matches!(
                kind,
                Package | Class | Singleton | Mixin | Program | Describe | Test
            ),
            Category::Module => matches!(kind, Class | Singleton | Mixin),
            Category::Expression => matches!(
                kind,
                Reference | SelfExpr | Literal | Send | Super | New | If | Throw | Try
            ),
            Category::Sentence => matches!(kind, Variable | Return | Assignment),
            Category::Other => matches!(
                kind,
                Field | Method | Constructor | Parameter | Body | Catch | Environment
            ),
        }
    }
}

/// Argument of kind predicates: a specific kind or a whole category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindOrCategory {
    Kind(Kind),
    Category(Category),
}

impl KindOrCategory {
    pub fn matches(self, kind: Kind) -> bool {
        match self {
            KindOrCategory::Kind(k) => k == kind,
            KindOrCategory::Category(c) => c.contains(kind),
        }
    }
}

impl From<Kind> for KindOrCategory {
    fn from(kind: Kind) -> Self {
        KindOrCategory::Kind(kind)
    }
}

impl From<Category> for KindOrCategory {
    fn from(category: Category) -> Self {
        KindOrCategory::Category(category)
    }
}
