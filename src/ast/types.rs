//! Type tags of the Chalk language.
//!
//! Chalk has no compound types: every value is one of a small closed set of
//! primitives, so a type is a plain `Copy` enumeration rather than a tree.

use std::fmt::Display;

/// A Chalk type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    Void,
}

impl Type {
    pub const ALL: [Type; 5] = [Type::Int, Type::Float, Type::String, Type::Bool, Type::Void];

    /// Resolves a type name as written in source. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "int" => Some(Type::Int),
            "float" => Some(Type::Float),
            "string" => Some(Type::String),
            "bool" => Some(Type::Bool),
            "void" => Some(Type::Void),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Void => "void",
        }
    }

    /// Whether arithmetic negation applies to values of this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn test_type_names_round_trip() {
        for ty in Type::ALL {
            assert_eq!(Type::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_type_names_are_case_sensitive() {
        assert_eq!(Type::from_name("Int"), None);
        assert_eq!(Type::from_name("i32"), None);
        assert_eq!(Type::from_name(""), None);
    }

    #[test]
    fn test_numeric_types() {
        assert!(Type::Int.is_numeric());
        assert!(Type::Float.is_numeric());
        assert!(!Type::String.is_numeric());
        assert!(!Type::Bool.is_numeric());
        assert!(!Type::Void.is_numeric());
    }
}
