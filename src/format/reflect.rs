use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::format::{
    Association, Complex, Field, Function, Map, Reference, Sequence, Type, Value,
};

/// Runtime introspection of a value.
///
/// Implementors describe themselves as a [`Value`] borrowing from `self`. Composite values
/// reflect their children eagerly, except behind a [`Reference`], which is reflected only when it
/// is rendered.
pub trait Reflect {
    fn reflect(&self) -> Value<'_>;

    /// Exposes a custom rendering surface for values reached through a reference. Most types
    /// don't have one.
    fn as_renderable(&self) -> Option<&dyn Renderable> {
        None
    }
}

/// Static type information, available without an instance (e.g. for empty collections).
pub trait Typed {
    fn static_type() -> Type;
}

/// Custom rendering capabilities for a type reached through a [`Reference`].
///
/// The formatter probes these in order: [`as_sequence`](Renderable::as_sequence), then
/// [`as_associations`](Renderable::as_associations), then [`as_fields`](Renderable::as_fields).
/// The first one returning [`Some`] is rendered in place of the dereferenced value.
///
/// # Examples
/// ```
/// # use missing_utilities::format::{format, Reflect, Renderable, Value, Type, Record};
/// struct Names(Vec<String>);
///
/// impl Reflect for Names {
///     fn reflect(&self) -> Value<'_> {
///         Record::named("Names").field("0", &self.0).into()
///     }
///
///     fn as_renderable(&self) -> Option<&dyn Renderable> {
///         Some(self)
///     }
/// }
///
/// impl Renderable for Names {
///     fn as_sequence(&self) -> Option<Vec<Value<'_>>> {
///         Some(self.0.iter().map(|name| name.reflect()).collect())
///     }
/// }
///
/// let names = Box::new(Names(vec!["alpha".into(), "beta".into()]));
/// # impl missing_utilities::format::Typed for Names {
/// #     fn static_type() -> Type { Type::named("Names") }
/// # }
/// assert_eq!(format(&names), "&[\n    \"alpha\"\n    \"beta\"\n](&Names)");
/// ```
pub trait Renderable {
    fn as_sequence(&self) -> Option<Vec<Value<'_>>> {
        None
    }

    fn as_associations(&self) -> Option<Vec<Association<'_>>> {
        None
    }

    fn as_fields(&self) -> Option<Vec<Field<'_>>> {
        None
    }
}

macro_rules! reflect_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn static_type() -> Type {
                    Type::$variant
                }
            }

            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::$variant(*self)
                }
            }
        )*
    };
}

reflect_scalar! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    f32 => F32,
    f64 => F64,
    Complex<f32> => Complex32,
    Complex<f64> => Complex64,
    char => Char,
}

impl Typed for str {
    fn static_type() -> Type {
        Type::Text
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self))
    }
}

impl Typed for String {
    fn static_type() -> Type {
        Type::Text
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Typed for Cow<'_, str> {
    fn static_type() -> Type {
        Type::Text
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_ref()))
    }
}

impl<'v> Reflect for Value<'v> {
    fn reflect(&self) -> Value<'_> {
        self.clone()
    }
}

// Shared and mutable borrows are transparent: they are how Rust passes values around rather than
// a level of indirection the value itself chose.

impl<T: Typed + ?Sized> Typed for &T {
    fn static_type() -> Type {
        T::static_type()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        (**self).as_renderable()
    }
}

impl<T: Typed + ?Sized> Typed for &mut T {
    fn static_type() -> Type {
        T::static_type()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        (**self).as_renderable()
    }
}

impl<'a> Typed for dyn Reflect + 'a {
    fn static_type() -> Type {
        Type::Any
    }
}

macro_rules! reflect_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Typed> Typed for $ptr<T> {
                fn static_type() -> Type {
                    Type::Reference(Box::new(T::static_type()))
                }
            }

            impl<T: Reflect + Typed> Reflect for $ptr<T> {
                fn reflect(&self) -> Value<'_> {
                    let target: &dyn Reflect = &**self;
                    Value::Reference(Reference::new(T::static_type(), Some(target)))
                }
            }
        )*
    };
}

reflect_pointer!(Box, Rc, Arc);

impl<T: Typed> Typed for Option<T> {
    fn static_type() -> Type {
        Type::Reference(Box::new(T::static_type()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Reference(Reference::new(
            T::static_type(),
            self.as_ref().map(|value| value as &dyn Reflect),
        ))
    }
}

/// An owned value of any reflectable type, for heterogeneous collections.
///
/// Values stored behind it reflect as a polymorphic wrapper, which the formatter unwraps.
pub struct Dynamic<'a>(pub Box<dyn Reflect + 'a>);

impl<'a> Dynamic<'a> {
    pub fn new<T: Reflect + 'a>(value: T) -> Dynamic<'a> {
        Dynamic(Box::new(value))
    }
}

impl Typed for Dynamic<'_> {
    fn static_type() -> Type {
        Type::Any
    }
}

impl Reflect for Dynamic<'_> {
    fn reflect(&self) -> Value<'_> {
        Value::any(self.0.reflect())
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        self.0.as_renderable()
    }
}

impl<T: ?Sized> Typed for *const T {
    fn static_type() -> Type {
        Type::Unsafe
    }
}

impl<T: ?Sized> Reflect for *const T {
    fn reflect(&self) -> Value<'_> {
        Value::Unsafe
    }
}

impl<T: ?Sized> Typed for *mut T {
    fn static_type() -> Type {
        Type::Unsafe
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn reflect(&self) -> Value<'_> {
        Value::Unsafe
    }
}

impl<T: Typed> Typed for [T] {
    fn static_type() -> Type {
        Type::Sequence(Box::new(T::static_type()))
    }
}

impl<T: Reflect + Typed> Reflect for [T] {
    fn reflect(&self) -> Value<'_> {
        Sequence::new(T::static_type(), self.iter().map(Reflect::reflect)).into()
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn static_type() -> Type {
        Type::Sequence(Box::new(T::static_type()))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn static_type() -> Type {
        Type::Sequence(Box::new(T::static_type()))
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Typed> Typed for VecDeque<T> {
    fn static_type() -> Type {
        Type::Sequence(Box::new(T::static_type()))
    }
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value<'_> {
        Sequence::new(T::static_type(), self.iter().map(Reflect::reflect)).into()
    }
}

impl<K: Typed, V: Typed, S> Typed for HashMap<K, V, S> {
    fn static_type() -> Type {
        Type::Map(Box::new(K::static_type()), Box::new(V::static_type()))
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(Map::new(
            K::static_type(),
            V::static_type(),
            self.iter().map(|(key, value)| (key.reflect(), value.reflect())),
        ))
    }
}

impl<K: Typed, V: Typed> Typed for BTreeMap<K, V> {
    fn static_type() -> Type {
        Type::Map(Box::new(K::static_type()), Box::new(V::static_type()))
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(Map::new(
            K::static_type(),
            V::static_type(),
            self.iter().map(|(key, value)| (key.reflect(), value.reflect())),
        ))
    }
}

impl Typed for () {
    fn static_type() -> Type {
        Type::Tuple(Vec::new())
    }
}

macro_rules! typed_tuple {
    ($($name:ident),+) => {
        impl<$($name: Typed),+> Typed for ($($name,)+) {
            fn static_type() -> Type {
                Type::Tuple(vec![$($name::static_type()),+])
            }
        }
    };
}

typed_tuple!(A);
typed_tuple!(A, B);
typed_tuple!(A, B, C);

// Function pointers carry no name at runtime, so they reflect as anonymous signatures. Use
// `Function::named` to reflect something with a known name.
macro_rules! reflect_fn {
    ($($arg:ident),*) => {
        impl<R: Typed, $($arg: Typed),*> Typed for fn($($arg),*) -> R {
            fn static_type() -> Type {
                Type::Function {
                    params: vec![$($arg::static_type()),*],
                    results: R::static_type().into_results(),
                }
            }
        }

        impl<R: Typed, $($arg: Typed),*> Reflect for fn($($arg),*) -> R {
            fn reflect(&self) -> Value<'_> {
                Value::Function(Function::anonymous(
                    vec![$($arg::static_type()),*],
                    R::static_type().into_results(),
                ))
            }
        }
    };
}

reflect_fn!();
reflect_fn!(A);
reflect_fn!(A, B);
reflect_fn!(A, B, C);

#[cfg(feature = "channel")]
mod channel {
    use crossbeam::channel::{Receiver, Sender};

    use super::{Reflect, Typed};
    use crate::format::{Channel, Direction, Type, Value};

    impl<T: Typed> Typed for Sender<T> {
        fn static_type() -> Type {
            Type::Channel(Box::new(T::static_type()))
        }
    }

    impl<T: Typed> Reflect for Sender<T> {
        fn reflect(&self) -> Value<'_> {
            Value::Channel(Channel {
                direction: Direction::Send,
                capacity: self.capacity(),
                len: self.len(),
                element: T::static_type(),
            })
        }
    }

    impl<T: Typed> Typed for Receiver<T> {
        fn static_type() -> Type {
            Type::Channel(Box::new(T::static_type()))
        }
    }

    impl<T: Typed> Reflect for Receiver<T> {
        fn reflect(&self) -> Value<'_> {
            Value::Channel(Channel {
                direction: Direction::Receive,
                capacity: self.capacity(),
                len: self.len(),
                element: T::static_type(),
            })
        }
    }
}
