use strum::Display;

/// The closed set of Chimera types.
///
/// `List` is the type of the empty list literal `{}`. It is never the declared type of a
/// binding; it only flows into contexts that expect one of the concrete list types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Type {
    Bool,
    Int,
    String,
    Void,
    List,
    IntList,
    StringList,
    BoolList,
}

impl Type {
    /// The list type whose elements are `self`, if `self` is a simple type.
    pub fn to_list_type(self) -> Option<Type> {
        match self {
            Type::Int => Some(Type::IntList),
            Type::String => Some(Type::StringList),
            Type::Bool => Some(Type::BoolList),
            _ => None,
        }
    }

    /// The element type of a concrete list type.
    pub fn element_type(self) -> Option<Type> {
        match self {
            Type::IntList => Some(Type::Int),
            Type::StringList => Some(Type::String),
            Type::BoolList => Some(Type::Bool),
            _ => None,
        }
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            Type::List | Type::IntList | Type::StringList | Type::BoolList
        )
    }

    /// Whether a value of type `value` may flow into a context expecting `self`.
    ///
    /// The generic `List` only flows one way: into any concrete list context. Two concrete
    /// list types of different element kind never accept each other.
    pub fn accepts(self, value: Type) -> bool {
        self == value || (value == Type::List && self.is_list())
    }
}
