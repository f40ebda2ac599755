use std::borrow::Cow;
use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, IsVariant};

use crate::format::{Category, Reflect, Type};

/// A complex number made of two floating point parts.
///
/// The standard library has no complex type, so this one only exists to be reflected and
/// formatted. Arithmetic is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

impl Complex<f32> {
    /// Returns the magnitude (absolute value) of the complex number.
    pub fn norm(&self) -> f32 {
        self.re.hypot(self.im)
    }
}

impl Complex<f64> {
    /// Returns the magnitude (absolute value) of the complex number.
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// A reflected runtime value, borrowed from the data it describes for lifetime `'a`.
///
/// Every variant corresponds to exactly one [`Category`]. Composite variants carry the static
/// type information needed to annotate their output, even when they are empty.
#[derive(Clone, IsVariant)]
pub enum Value<'a> {
    /// The absence of a value.
    Nil,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    F32(f32),
    F64(f64),
    Complex32(Complex<f32>),
    Complex64(Complex<f64>),
    Char(char),
    Text(Cow<'a, str>),
    Sequence(Sequence<'a>),
    Map(Map<'a>),
    Record(Record<'a>),
    Reference(Reference<'a>),
    /// A value whose static type says nothing about its contents. Never visible in output.
    Any(Box<Value<'a>>),
    Function(Function),
    Channel(Channel),
    /// A raw memory handle, which is never dereferenced.
    Unsafe,
}

impl<'a> Value<'a> {
    /// Creates a text value borrowing or owning the provided string.
    pub fn text(value: impl Into<Cow<'a, str>>) -> Value<'a> {
        Value::Text(value.into())
    }

    /// Wraps the provided value in a polymorphic wrapper, as if stored in an `any` slot.
    pub fn any(value: Value<'a>) -> Value<'a> {
        Value::Any(Box::new(value))
    }

    /// Returns the shape category of this value.
    pub const fn category(&self) -> Category {
        match self {
            Value::Nil => Category::Undefined,
            Value::Bool(_) => Category::Boolean,
            Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
                Category::UnsignedInteger
            },
            Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) | Value::Isize(_) => {
                Category::SignedInteger
            },
            Value::F32(_) | Value::F64(_) => Category::Float,
            Value::Complex32(_) | Value::Complex64(_) => Category::Complex,
            Value::Char(_) => Category::Character,
            Value::Text(_) => Category::Text,
            Value::Sequence(_) => Category::Sequence,
            Value::Map(_) => Category::AssociativeCollection,
            Value::Record(_) => Category::Record,
            Value::Reference(_) => Category::Reference,
            Value::Any(_) => Category::PolymorphicWrapper,
            Value::Function(_) => Category::Executable,
            Value::Channel(_) => Category::StreamChannel,
            Value::Unsafe => Category::Opaque,
        }
    }

    /// Returns the dynamic type of this value, as used to annotate composite output.
    pub fn type_of(&self) -> Type {
        match self {
            Value::Nil | Value::Any(_) => Type::Any,
            Value::Bool(_) => Type::Bool,
            Value::U8(_) => Type::U8,
            Value::U16(_) => Type::U16,
            Value::U32(_) => Type::U32,
            Value::U64(_) => Type::U64,
            Value::Usize(_) => Type::Usize,
            Value::I8(_) => Type::I8,
            Value::I16(_) => Type::I16,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::Isize(_) => Type::Isize,
            Value::F32(_) => Type::F32,
            Value::F64(_) => Type::F64,
            Value::Complex32(_) => Type::Complex32,
            Value::Complex64(_) => Type::Complex64,
            Value::Char(_) => Type::Char,
            Value::Text(_) => Type::Text,
            Value::Sequence(seq) => seq.type_of(),
            Value::Map(map) => map.type_of(),
            Value::Record(record) => record.ty.clone(),
            Value::Reference(reference) => reference.type_of(),
            Value::Function(function) => function.type_of(),
            Value::Channel(channel) => Type::Channel(Box::new(channel.element.clone())),
            Value::Unsafe => Type::Unsafe,
        }
    }
}

impl<'a> Debug for Value<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::format_value(self))
    }
}

/// An ordered sequence of values sharing a static element type.
#[derive(Debug, Clone)]
pub struct Sequence<'a> {
    pub element: Type,
    pub items: Vec<Value<'a>>,
}

impl<'a> Sequence<'a> {
    pub fn new(element: Type, items: impl IntoIterator<Item = Value<'a>>) -> Sequence<'a> {
        Sequence {
            element,
            items: items.into_iter().collect(),
        }
    }

    pub fn type_of(&self) -> Type {
        Type::Sequence(Box::new(self.element.clone()))
    }
}

impl<'a> From<Sequence<'a>> for Value<'a> {
    fn from(value: Sequence<'a>) -> Self {
        Value::Sequence(value)
    }
}

/// A key-value store. The order of `entries` carries no meaning; it is whatever order the
/// underlying storage happened to produce.
#[derive(Debug, Clone)]
pub struct Map<'a> {
    pub key: Type,
    pub value: Type,
    pub entries: Vec<(Value<'a>, Value<'a>)>,
}

impl<'a> Map<'a> {
    pub fn new(
        key: Type,
        value: Type,
        entries: impl IntoIterator<Item = (Value<'a>, Value<'a>)>,
    ) -> Map<'a> {
        Map {
            key,
            value,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn type_of(&self) -> Type {
        Type::Map(Box::new(self.key.clone()), Box::new(self.value.clone()))
    }
}

impl<'a> From<Map<'a>> for Value<'a> {
    fn from(value: Map<'a>) -> Self {
        Value::Map(value)
    }
}

/// A named slot in a [`Record`]. A field without a value is private and is never read.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub name: Cow<'static, str>,
    pub value: Option<Value<'a>>,
}

impl<'a> Field<'a> {
    pub fn public(name: impl Into<Cow<'static, str>>, value: Value<'a>) -> Field<'a> {
        Field {
            name: name.into(),
            value: Some(value),
        }
    }

    pub fn private(name: impl Into<Cow<'static, str>>) -> Field<'a> {
        Field {
            name: name.into(),
            value: None,
        }
    }

    pub const fn is_private(&self) -> bool {
        self.value.is_none()
    }
}

/// A fixed layout structure of named fields.
///
/// # Examples
/// ```
/// # use missing_utilities::format::{format, Record, Reflect, Value};
/// struct Point {
///     x: i64,
///     y: i64,
///     tag: u8,
/// }
///
/// impl Reflect for Point {
///     fn reflect(&self) -> Value<'_> {
///         Record::named("Point")
///             .field("x", &self.x)
///             .field("y", &self.y)
///             .private("tag")
///             .into()
///     }
/// }
///
/// let point = Point { x: 3, y: 4, tag: 0 };
/// assert_eq!(format(&point), "[\n    x: 3\n    y: 4\n    tag: <private>\n](Point)");
/// ```
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub ty: Type,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    /// Creates an empty record of a named type.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Record<'a> {
        Record {
            ty: Type::Record(Some(name.into())),
            fields: Vec::new(),
        }
    }

    /// Creates an empty record of a type with no declared name.
    pub const fn anonymous() -> Record<'a> {
        Record {
            ty: Type::Record(None),
            fields: Vec::new(),
        }
    }

    /// Appends a readable field, reflecting the provided value.
    pub fn field<T: Reflect + ?Sized>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: &'a T,
    ) -> Record<'a> {
        self.fields.push(Field::public(name, value.reflect()));
        self
    }

    /// Appends a readable field holding an already reflected value.
    pub fn field_value(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: Value<'a>,
    ) -> Record<'a> {
        self.fields.push(Field::public(name, value));
        self
    }

    /// Appends a field that is not readable and renders as `<private>`.
    pub fn private(mut self, name: impl Into<Cow<'static, str>>) -> Record<'a> {
        self.fields.push(Field::private(name));
        self
    }
}

impl<'a> From<Record<'a>> for Value<'a> {
    fn from(value: Record<'a>) -> Self {
        Value::Record(value)
    }
}

/// A single level of indirection to another reflectable value.
///
/// The target is reflected lazily, when rendered, which is what allows cyclic structures (built
/// from [`Rc`](std::rc::Rc) or [`OnceCell`](std::cell::OnceCell)) to be formatted at all.
#[derive(Clone)]
pub struct Reference<'a> {
    pub referent: Type,
    pub target: Option<&'a dyn Reflect>,
}

impl<'a> Reference<'a> {
    pub const fn new(referent: Type, target: Option<&'a dyn Reflect>) -> Reference<'a> {
        Reference { referent, target }
    }

    pub fn type_of(&self) -> Type {
        Type::Reference(Box::new(self.referent.clone()))
    }
}

impl<'a> Debug for Reference<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("referent", &self.referent)
            .field("target", &self.target.map(|_| ".."))
            .finish()
    }
}

impl<'a> From<Reference<'a>> for Value<'a> {
    fn from(value: Reference<'a>) -> Self {
        Value::Reference(value)
    }
}

/// The signature of something invocable, with its name when one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Option<Cow<'static, str>>,
    pub params: Vec<Type>,
    pub results: Vec<Type>,
}

impl Function {
    pub fn anonymous(params: Vec<Type>, results: Vec<Type>) -> Function {
        Function {
            name: None,
            params,
            results,
        }
    }

    pub fn named(
        name: impl Into<Cow<'static, str>>,
        params: Vec<Type>,
        results: Vec<Type>,
    ) -> Function {
        Function {
            name: Some(name.into()),
            params,
            results,
        }
    }

    pub fn type_of(&self) -> Type {
        Type::Function {
            params: self.params.clone(),
            results: self.results.clone(),
        }
    }
}

impl<'a> From<Function> for Value<'a> {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Direction {
    Send,
    Receive,
    Both,
}

/// A snapshot of a communication channel. `capacity` is `None` for unbounded channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub direction: Direction,
    pub capacity: Option<usize>,
    pub len: usize,
    pub element: Type,
}

impl<'a> From<Channel> for Value<'a> {
    fn from(value: Channel) -> Self {
        Value::Channel(value)
    }
}

/// A key-value pair produced by a [`Renderable`](crate::format::Renderable) association list.
#[derive(Debug, Clone)]
pub struct Association<'a> {
    key: Value<'a>,
    value: Value<'a>,
}

impl<'a> Association<'a> {
    pub const fn new(key: Value<'a>, value: Value<'a>) -> Association<'a> {
        Association { key, value }
    }

    pub const fn key(&self) -> &Value<'a> {
        &self.key
    }

    pub const fn value(&self) -> &Value<'a> {
        &self.value
    }
}
