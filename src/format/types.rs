use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

/// A runtime description of a type, used to annotate formatted composites and to build function
/// signatures.
///
/// The [`Display`] implementation is the type-name formatter: it renders a human readable name,
/// recursing through references, functions, channels, sequences and maps.
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Type {
    Bool,
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
    Complex32,
    Complex64,
    Char,
    Text,
    /// The universal polymorphic type, whose values may be of any type.
    Any,
    /// A user-defined type with a declared name and scalar (or otherwise opaque) contents.
    Named(Cow<'static, str>),
    /// A fixed-layout structure, with its declared name when it has one.
    Record(Option<Cow<'static, str>>),
    Reference(Box<Type>),
    Unsafe,
    Function {
        params: Vec<Type>,
        results: Vec<Type>,
    },
    Channel(Box<Type>),
    Sequence(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Tuple(Vec<Type>),
}

impl Type {
    /// Creates a named type.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Type {
        Type::Named(name.into())
    }

    /// Splits a return type into the list of results used by a function signature. The unit
    /// type produces no results and other tuples produce one result per element.
    pub fn into_results(self) -> Vec<Type> {
        match self {
            Type::Tuple(types) => types,
            other => vec![other],
        }
    }
}

/// Returns the human readable name of the provided type.
///
/// # Examples
/// ```
/// # use missing_utilities::format::{type_name, Type};
/// let ty = Type::Map(Box::new(Type::Text), Box::new(Type::Sequence(Box::new(Type::I64))));
/// assert_eq!(type_name(&ty), "map[String, array[i64]]");
/// ```
pub fn type_name(ty: &Type) -> String {
    ty.to_string()
}

struct List<'a>(&'a [Type]);

impl<'a> Display for List<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, ty) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        Ok(())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::U8 => write!(f, "u8"),
            Type::U16 => write!(f, "u16"),
            Type::U32 => write!(f, "u32"),
            Type::U64 => write!(f, "u64"),
            Type::Usize => write!(f, "usize"),
            Type::I8 => write!(f, "i8"),
            Type::I16 => write!(f, "i16"),
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::Isize => write!(f, "isize"),
            Type::F32 => write!(f, "f32"),
            Type::F64 => write!(f, "f64"),
            Type::Complex32 => write!(f, "Complex<f32>"),
            Type::Complex64 => write!(f, "Complex<f64>"),
            Type::Char => write!(f, "char"),
            Type::Text => write!(f, "String"),
            Type::Any => write!(f, "any"),
            Type::Named(name) => write!(f, "{}", name),
            Type::Record(Some(name)) => write!(f, "{}", name),
            Type::Record(None) => write!(f, "struct"),
            Type::Reference(referent) => write!(f, "&{}", referent),
            Type::Unsafe => write!(f, "<unsafe>"),
            Type::Function { params, results } => {
                write!(f, "func({})", List(params))?;
                if !results.is_empty() {
                    write!(f, " ({})", List(results))?;
                }
                Ok(())
            },
            Type::Channel(element) => write!(f, "chan {}", element),
            Type::Sequence(element) => write!(f, "array[{}]", element),
            Type::Map(key, value) => write!(f, "map[{}, {}]", key, value),
            Type::Tuple(types) => write!(f, "({})", List(types)),
        }
    }
}
