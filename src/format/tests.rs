#![cfg(test)]

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

struct Point {
    x: i64,
    y: i64,
}

impl Typed for Point {
    fn static_type() -> Type {
        Type::Record(Some("Point".into()))
    }
}

impl Reflect for Point {
    fn reflect(&self) -> Value<'_> {
        Record::named("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .into()
    }
}

struct Line {
    start: Point,
    end: Point,
    label: &'static str,
}

impl Reflect for Line {
    fn reflect(&self) -> Value<'_> {
        Record::named("Line")
            .field("start", &self.start)
            .field("end", &self.end)
            .private("label")
            .into()
    }
}

struct Node {
    value: i64,
    next: OnceCell<Rc<Node>>,
}

impl Typed for Node {
    fn static_type() -> Type {
        Type::Record(Some("Node".into()))
    }
}

impl Reflect for Node {
    fn reflect(&self) -> Value<'_> {
        let next = self.next.get().map(|node| &**node as &dyn Reflect);
        Record::named("Node")
            .field("value", &self.value)
            .field_value("next", Reference::new(Node::static_type(), next).into())
            .into()
    }
}

struct Catalog(Vec<(&'static str, i64)>);

impl Typed for Catalog {
    fn static_type() -> Type {
        Type::named("Catalog")
    }
}

impl Reflect for Catalog {
    fn reflect(&self) -> Value<'_> {
        Record::named("Catalog").into()
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }
}

impl Renderable for Catalog {
    fn as_associations(&self) -> Option<Vec<Association<'_>>> {
        Some(
            self.0.iter()
                .map(|(key, value)| Association::new(key.reflect(), value.reflect()))
                .collect()
        )
    }
}

struct FooBar {
    foo: i64,
    bar: Option<String>,
    sequential: bool,
}

impl Typed for FooBar {
    fn static_type() -> Type {
        Type::named("FooBar")
    }
}

impl Reflect for FooBar {
    fn reflect(&self) -> Value<'_> {
        Record::named("FooBar").private("foo").private("bar").into()
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }
}

impl Renderable for FooBar {
    fn as_sequence(&self) -> Option<Vec<Value<'_>>> {
        self.sequential.then(|| vec![self.foo.reflect()])
    }

    fn as_fields(&self) -> Option<Vec<Field<'_>>> {
        Some(vec![
            Field::public("Foo", self.foo.reflect()),
            Field::public("Bar", self.bar.reflect()),
        ])
    }
}

#[test]
fn test_scalars() {
    assert_eq!(format(&false), "false");
    assert_eq!(format(&true), "true");
    assert_eq!(format(&16_u8), "0x10");
    assert_eq!(format(&5_u8), "0x5");
    assert_eq!(format(&u64::MAX), "0xffffffffffffffff");
    assert_eq!(format(&13), "13");
    assert_eq!(format(&-42_i8), "-42");
    assert_eq!(format(&i64::MIN), "-9223372036854775808");
    assert_eq!(format(&'Ѐ'), "'Ѐ'");
    assert_eq!(format(&'\n'), "'\\n'");
    assert_eq!(format(&'\''), "'\\''");
    assert_eq!(format(&'\u{E000}'), "'\\ue000'", "Private use characters should be escaped.");
    assert_eq!(format("Hello World!"), "\"Hello World!\"");
    assert_eq!(format(&String::from("tab\t")), "\"tab\\t\"");
}

#[test]
fn test_floats() {
    let float = format(&1.23e10);
    assert!(
        float.contains('.') || float.contains('E'),
        "A float should never look like an integer: {}", float
    );
    assert_eq!(float, "1.23E+10");
    assert_eq!(format(&42.0), "42.0");
    assert_eq!(format(&0.5_f32), "0.5");
    assert_eq!(format(&-0.0), "-0.0");
    assert_eq!(format(&f64::INFINITY), "+Inf.0");
    assert_eq!(format(&f64::NEG_INFINITY), "-Inf.0");
    assert_eq!(format(&f64::NAN), "NaN.0");
    assert_eq!(format(&f32::NAN), "NaN.0");
    assert_eq!(
        format(&Complex::new(f64::NAN, f64::INFINITY)),
        "(NaN+Infi)",
        "Complex parts never get the float suffix."
    );
    assert_eq!(format(&Complex::new(0.0_f64, 5.0)), "(0+5i)");
    assert_eq!(format(&Complex::new(4.0_f32, 0.0)), "(4+0i)");
}

#[test]
fn test_empty_composites() {
    assert_eq!(format(&Vec::<i64>::new()), "[ ](array[i64])");
    assert_eq!(format(&HashMap::<String, i64>::new()), "[:](map[String, i64])");
    assert_eq!(format(&[0_u8; 0]), "[ ](array[u8])");
    assert_eq!(format_value(&Record::anonymous().into()), "[\n](struct)");
}

#[test]
fn test_sequences() {
    assert_eq!(
        format(&vec![1_i64, 5, 3]),
        "[\n    1\n    5\n    3\n](array[i64])"
    );
    assert_eq!(
        format(&vec![vec!["a"], vec![]]),
        "[\n    [\n        \"a\"\n    ](array[String])\n    [ ](array[String])\n](array[array[String]])"
    );
    assert_eq!(
        format(&VecDeque::from([true])),
        "[\n    true\n](array[bool])"
    );
}

#[test]
fn test_maps() {
    let map = HashMap::from([
        ("three".to_string(), 3_u16),
        ("one".to_string(), 1),
        ("two".to_string(), 2),
    ]);
    assert_eq!(
        format(&map),
        "[\n    \"one\": 0x1\n    \"three\": 0x3\n    \"two\": 0x2\n](map[String, u16])"
    );

    let nested = BTreeMap::from([(2_i8, vec!['b']), (-1, vec![])]);
    assert_eq!(
        format(&nested),
        "[\n    -1: [ ](array[char])\n    2: [\n        'b'\n    ](array[char])\n](map[i8, array[char]])"
    );
}

#[test]
fn test_mixed_keys() {
    let keys = [
        Value::text("b"),
        Value::I64(5),
        Value::Bool(true),
        Value::F64(1.5),
        Value::text("a"),
    ];
    let map = Map::new(
        Type::Any,
        Type::Usize,
        keys.into_iter().enumerate().map(|(index, key)| (Value::any(key), Value::Usize(index))),
    );
    assert_eq!(
        format_value(&map.into()),
        "[\n    true: 0x2\n    5: 0x1\n    1.5: 0x3\n    \"a\": 0x4\n    \"b\": 0x0\n](map[any, usize])"
    );
}

#[test]
fn test_key_ranks() {
    assert_eq!(KeyRank::of(&Value::Bool(false)), Some(KeyRank::Bool));
    assert_eq!(KeyRank::of(&Value::any(Value::Char('x'))), Some(KeyRank::Char));
    assert_eq!(KeyRank::of(&Value::any(Value::any(Value::Char('x')))), None);
    assert_eq!(KeyRank::of(&Value::Unsafe), None);

    assert!(KeyRank::Usize < KeyRank::I8, "Unsigned kinds should precede signed kinds.");
    assert!(KeyRank::Complex64 < KeyRank::Char);

    let small = Value::Complex64(Complex::new(3.0, 4.0));
    let large = Value::Complex64(Complex::new(0.0, -6.0));
    assert!(compare_keys(&small, &large).is_lt(), "Complex keys should sort by magnitude.");
    assert!(compare_keys(&Value::U8(200), &Value::I8(-1)).is_lt());
    assert!(compare_keys(&Value::Bool(false), &Value::Bool(true)).is_lt());
}

#[test]
fn test_sort_stability() {
    let first = Value::text("same");
    let second = Value::text("same");
    let other = Value::Bool(false);
    let mut keys = vec![&first, &other, &second];
    sort_keys(&mut keys);
    assert!(std::ptr::eq(keys[0], &other));
    assert!(std::ptr::eq(keys[1], &first), "Equal keys should keep their relative order.");
    assert!(std::ptr::eq(keys[2], &second));
}

#[test]
fn test_unsupported_keys() {
    assert_panics!({
        let map = Map::new(
            Type::Unsafe,
            Type::I64,
            [(Value::Unsafe, Value::I64(1)), (Value::Unsafe, Value::I64(2))],
        );
        format_value(&map.into())
    });

    assert_panics!({
        compare_keys(&Value::text("a"), &Value::Function(Function::anonymous(vec![], vec![])))
    });

    // A lone key is never compared.
    let single = Map::new(Type::Unsafe, Type::I64, [(Value::Unsafe, Value::I64(1))]);
    assert_eq!(format_value(&single.into()), "[\n    <unsafe>: 1\n](map[<unsafe>, i64])");
}

#[test]
fn test_records() {
    let line = Line {
        start: Point { x: 1, y: 2 },
        end: Point { x: 3, y: 4 },
        label: "diagonal",
    };
    assert_eq!(line.label, "diagonal");
    assert_eq!(
        format(&line),
        "[
    start: [
        x: 1
        y: 2
    ](Point)
    end: [
        x: 3
        y: 4
    ](Point)
    label: <private>
](Line)"
    );
}

#[test]
fn test_references() {
    assert_eq!(format(&Box::new(5_i64)), "&[5](&i64)");
    assert_eq!(format(&None::<i64>), "&[<nil>](&i64)");
    assert_eq!(format(&Some(Box::new(5_u8))), "&[&[0x5](&u8)](&&u8)");
    assert_eq!(
        format(&Rc::new(Point { x: 0, y: -1 })),
        "&[[\n    x: 0\n    y: -1\n](Point)](&Point)"
    );
    assert_eq!(format(&&&7_i32), "7", "Borrows should be transparent.");
}

#[test]
fn test_renderable_surfaces() {
    let catalog = Box::new(Catalog(vec![("two", 2), ("one", 1)]));
    assert_eq!(
        format(&catalog),
        "&[\n    \"two\": 2\n    \"one\": 1\n](&Catalog)",
        "Association lists should keep the order they were provided in."
    );
    assert_eq!(format(&Box::new(Catalog(vec![]))), "&[:](&Catalog)");

    let foo_bar = Box::new(FooBar {
        foo: 42,
        bar: Some("the answer".to_string()),
        sequential: false,
    });
    assert_eq!(
        format(&foo_bar),
        "&[\n    Foo: 42\n    Bar: &[\"the answer\"](&String)\n](&FooBar)"
    );

    let sequential = Box::new(FooBar {
        foo: 1,
        bar: None,
        sequential: true,
    });
    assert_eq!(
        format(&sequential),
        "&[\n    1\n](&FooBar)",
        "The sequence surface should take priority over fields."
    );

    assert_eq!(
        format(&*foo_bar),
        "[\n    foo: <private>\n    bar: <private>\n](FooBar)",
        "Surfaces are only used through a reference."
    );
}

#[test]
fn test_cycles() {
    let node = Rc::new(Node {
        value: 1,
        next: OnceCell::new(),
    });
    let _ = node.next.set(Rc::clone(&node));

    let output = format(&node);
    assert!(output.contains("..."), "A cycle should be truncated: {}", output);
    assert_eq!(output.matches("value: 1").count(), MAXIMUM_DEPTH);

    let config = FormatConfig::new().with_max_depth(1);
    assert_eq!(
        format_with(&*node, &config),
        "[\n    value: 1\n    next: &[[...](Node)](&Node)\n](Node)"
    );
}

#[test]
fn test_reference_chains() {
    struct Mirror;

    impl Typed for Mirror {
        fn static_type() -> Type {
            Type::named("Mirror")
        }
    }

    impl Reflect for Mirror {
        fn reflect(&self) -> Value<'_> {
            Reference::new(Mirror::static_type(), Some(self as &dyn Reflect)).into()
        }
    }

    let output = format(&Mirror);
    assert_eq!(output.matches("&[").count(), MAXIMUM_DEPTH + 1);
    assert!(output.contains("&[...](&Mirror)"));
}

#[test]
fn test_polymorphic_wrappers() {
    let values = vec![Dynamic::new(1_i64), Dynamic::new("x"), Dynamic::new(Box::new(2_u8))];
    assert_eq!(
        format(&values),
        "[\n    1\n    \"x\"\n    &[0x2](&u8)\n](array[any])"
    );
    assert_eq!(format(&Value::any(Value::Nil)), "<nil>");
}

#[test]
fn test_functions() {
    let predicate: fn(i64) -> bool = |value| value > 0;
    assert!(predicate(1));
    assert_eq!(format(&predicate), "func(i64) (bool)");

    let action: fn() = || ();
    action();
    assert_eq!(format(&action), "func()");

    let pair: fn(u8, String) -> (i32, f64) = |_, _| (0, 0.0);
    assert_eq!(pair(0, String::new()), (0, 0.0));
    assert_eq!(format(&pair), "func(u8, String) (i32, f64)");

    let named = Function::named("add", vec![Type::I64, Type::I64], vec![Type::I64]);
    assert_eq!(format_value(&named.into()), "func add(i64, i64) (i64)");
}

#[test]
fn test_opaque_values() {
    let value = 5;
    let pointer: *const i32 = &value;
    assert_eq!(format(&pointer), "<unsafe>");
    assert_eq!(format(&vec![pointer]), "[\n    <unsafe>\n](array[<unsafe>])");
}

#[cfg(feature = "channel")]
#[test]
fn test_channels() {
    let (sender, receiver) = crossbeam::channel::bounded::<String>(4);
    sender.send("queued".to_string()).expect("channel should be open");
    assert_eq!(
        format(&sender),
        "[\n    Direction: Send\n    Capacity: 4\n    Size: 1\n](chan String)"
    );

    let (_, unbounded) = crossbeam::channel::unbounded::<u8>();
    assert_eq!(
        format(&unbounded),
        "[\n    Direction: Receive\n    Capacity: unbounded\n    Size: 0\n](chan u8)"
    );
    drop(receiver);
}

#[test]
fn test_channel_snapshot() {
    let channel = Channel {
        direction: Direction::Both,
        capacity: Some(0),
        len: 0,
        element: Type::Bool,
    };
    assert_eq!(
        format_value(&channel.into()),
        "[\n    Direction: Both\n    Capacity: 0\n    Size: 0\n](chan bool)"
    );
}

#[test]
fn test_type_names() {
    assert_eq!(type_name(&Type::Any), "any");
    assert_eq!(type_name(&Type::Record(None)), "struct");
    assert_eq!(type_name(&Type::Unsafe), "<unsafe>");
    assert_eq!(type_name(&Option::<Box<i8>>::static_type()), "&&i8");
    assert_eq!(type_name(&<fn(bool)>::static_type()), "func(bool)");
    assert_eq!(type_name(&<fn() -> (u8, u8)>::static_type()), "func() (u8, u8)");
    assert_eq!(type_name(&Type::Channel(Box::new(Type::Char))), "chan char");
    assert_eq!(type_name(&<(i8, bool)>::static_type()), "(i8, bool)");
    assert_eq!(type_name(&HashMap::<char, Vec<f32>>::static_type()), "map[char, array[f32]]");
}

#[test]
fn test_annotations_match_type_names() {
    let sequence = vec![1_i64];
    let annotation = format!("({})", type_name(&Vec::<i64>::static_type()));
    assert!(format(&sequence).ends_with(&annotation));

    let map = BTreeMap::from([("key", Some(1.5_f32))]);
    let annotation = format!("({})", type_name(&BTreeMap::<&str, Option<f32>>::static_type()));
    assert!(format(&map).ends_with(&annotation));

    let point = Point { x: 1, y: 1 };
    assert_eq!(point.reflect().type_of(), Point::static_type());
    assert!(format(&point).ends_with(&format!("({})", type_name(&Point::static_type()))));
}

#[test]
fn test_classification() {
    assert_eq!(classify(&Value::Nil), Category::Undefined);
    assert_eq!(classify(&16_u8.reflect()), Category::UnsignedInteger);
    assert_eq!(classify(&(-1_isize).reflect()), Category::SignedInteger);
    assert_eq!(classify(&'c'.reflect()), Category::Character);
    assert_eq!(classify(&"text".reflect()), Category::Text);
    assert_eq!(classify(&vec![1].reflect()), Category::Sequence);
    assert_eq!(classify(&BTreeMap::<u8, u8>::new().reflect()), Category::AssociativeCollection);
    assert_eq!(classify(&Point { x: 0, y: 0 }.reflect()), Category::Record);
    assert_eq!(classify(&Box::new(1).reflect()), Category::Reference);
    assert_eq!(classify(&Dynamic::new(1).reflect()), Category::PolymorphicWrapper);
    assert_eq!(classify(&Value::Unsafe), Category::Opaque);

    assert!(Category::Record.is_composite());
    assert!(!Category::Text.is_composite());
    assert!(Category::Complex.is_scalar());
    assert!(!Category::Executable.is_scalar());
}

#[test]
fn test_definedness() {
    assert!(is_defined(&0));
    assert!(is_defined(&5));
    assert!(is_undefined(""));
    assert!(is_defined("FooBar"));
    assert!(is_undefined(&None::<String>));
    assert!(is_defined(&Vec::<i32>::new()));
    assert!(is_undefined(&Value::Nil));
    assert!(is_undefined(&Dynamic::new(String::new())));
    assert!(is_defined(&Box::new(0)));
}

proptest! {
    #[test]
    fn prop_map_output_ignores_insertion_order(
        map in prop::collection::hash_map(any::<String>(), any::<i64>(), 0..16)
    ) {
        let mut entries: Vec<_> = map.clone().into_iter().collect();
        entries.reverse();
        let reordered: HashMap<String, i64> = entries.into_iter().collect();
        prop_assert_eq!(format(&map), format(&reordered));
    }

    #[test]
    fn prop_keys_are_grouped_by_rank(keys in prop::collection::vec(
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<u8>().prop_map(Value::U8),
            any::<i64>().prop_map(Value::I64),
            any::<f64>().prop_map(Value::F64),
            any::<char>().prop_map(Value::Char),
            "[a-z]{0,4}".prop_map(|text: String| Value::text(text)),
        ],
        0..24,
    )) {
        let mut sorted: Vec<_> = keys.iter().collect();
        sort_keys(&mut sorted);
        for pair in sorted.windows(2) {
            prop_assert!(compare_keys(pair[0], pair[1]).is_le());
            prop_assert!(KeyRank::of(pair[0]) <= KeyRank::of(pair[1]));
        }
    }
}
