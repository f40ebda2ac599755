use std::fmt::Write;

use tracing::{debug, trace};

use crate::format::scalar::{write_complex, write_float, write_quoted};
use crate::format::sort::sort_entries;
use crate::format::{
    Association, Category, Channel, Field, Function, Map, Record, Reference, Reflect, Renderable,
    Sequence, Type, Value,
};

/// The nesting depth at which composite bodies are truncated to `...`. This bounds the output of
/// cyclic values.
pub const MAXIMUM_DEPTH: usize = 8;

/// The number of spaces added per nesting level.
pub const INDENTATION: usize = 4;

/// Configuration for formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Composite bodies at or below this depth render as `...`.
    pub max_depth: usize,
    /// Number of spaces per nesting level.
    pub indent: usize,
}

impl FormatConfig {
    pub const fn new() -> FormatConfig {
        FormatConfig {
            max_depth: MAXIMUM_DEPTH,
            indent: INDENTATION,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> FormatConfig {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_indent(mut self, indent: usize) -> FormatConfig {
        self.indent = indent;
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a canonical string describing any reflectable value.
///
/// Composites (sequences, maps, records, references and channels) are written one element per
/// line, indented four spaces per nesting level and annotated with their type. Map keys are sorted
/// so that the output doesn't depend on iteration order. Nesting beyond [`MAXIMUM_DEPTH`] is
/// truncated to `...`, which guarantees termination for cyclic values.
///
/// # Panics
/// Panics if a map has two or more keys that can't be ordered, see
/// [`compare_keys`](crate::format::compare_keys).
///
/// # Examples
/// ```
/// # use missing_utilities::format::format;
/// assert_eq!(format(&true), "true");
/// assert_eq!(format(&16_u8), "0x10");
/// assert_eq!(format(&2.0), "2.0");
/// assert_eq!(format("Hello World!"), "\"Hello World!\"");
/// assert_eq!(format(&Vec::<i64>::new()), "[ ](array[i64])");
/// assert_eq!(format(&vec![1, 2]), "[\n    1\n    2\n](array[i32])");
/// ```
pub fn format<T: Reflect + ?Sized>(value: &T) -> String {
    format_with(value, &FormatConfig::default())
}

/// Formats the provided value using a custom configuration.
///
/// # Examples
/// ```
/// # use missing_utilities::format::{format_with, FormatConfig};
/// let config = FormatConfig::new().with_indent(2).with_max_depth(1);
/// assert_eq!(format_with(&vec![vec![1_u8]], &config), "[\n  [...](array[u8])\n](array[array[u8]])");
/// ```
pub fn format_with<T: Reflect + ?Sized>(value: &T, config: &FormatConfig) -> String {
    let mut renderer = Renderer::new(config);
    renderer.value(&value.reflect(), RenderContext::default());
    renderer.buf
}

/// Formats an already reflected value.
pub fn format_value(value: &Value<'_>) -> String {
    let config = FormatConfig::default();
    let mut renderer = Renderer::new(&config);
    renderer.value(value, RenderContext::default());
    renderer.buf
}

/// Position of the renderer within the value being formatted.
#[derive(Debug, Clone, Copy, Default)]
struct RenderContext {
    /// Number of composite bodies entered.
    depth: usize,
    /// Number of references followed since the last composite body was entered.
    indirections: usize,
}

impl RenderContext {
    const fn enter(self) -> RenderContext {
        RenderContext {
            depth: self.depth + 1,
            indirections: 0,
        }
    }

    const fn follow(self) -> RenderContext {
        RenderContext {
            depth: self.depth,
            indirections: self.indirections + 1,
        }
    }
}

struct Renderer<'c> {
    config: &'c FormatConfig,
    buf: String,
}

impl<'c> Renderer<'c> {
    const fn new(config: &'c FormatConfig) -> Renderer<'c> {
        Renderer {
            config,
            buf: String::new(),
        }
    }

    fn value(&mut self, value: &Value<'_>, ctx: RenderContext) {
        match value {
            Value::Nil => self.buf.push_str("<nil>"),
            Value::Bool(value) => self.buf.push_str(if *value { "true" } else { "false" }),
            Value::U8(value) => self.unsigned(*value as u64),
            Value::U16(value) => self.unsigned(*value as u64),
            Value::U32(value) => self.unsigned(*value as u64),
            Value::U64(value) => self.unsigned(*value),
            Value::Usize(value) => self.unsigned(*value as u64),
            Value::I8(value) => self.signed(*value as i64),
            Value::I16(value) => self.signed(*value as i64),
            Value::I32(value) => self.signed(*value as i64),
            Value::I64(value) => self.signed(*value),
            Value::Isize(value) => self.signed(*value as i64),
            Value::F32(value) => write_float(&mut self.buf, *value),
            Value::F64(value) => write_float(&mut self.buf, *value),
            Value::Complex32(value) => write_complex(&mut self.buf, *value),
            Value::Complex64(value) => write_complex(&mut self.buf, *value),
            Value::Char(value) => {
                let mut encoded = [0; 4];
                write_quoted(&mut self.buf, value.encode_utf8(&mut encoded), '\'');
            },
            Value::Text(value) => write_quoted(&mut self.buf, value, '"'),
            Value::Sequence(seq) => self.sequence(seq, ctx),
            Value::Map(map) => self.map(map, ctx),
            Value::Record(record) => self.record(record, ctx),
            Value::Reference(reference) => self.reference(reference, ctx),
            // The wrapper itself is never shown.
            Value::Any(inner) => self.value(inner, ctx),
            Value::Function(function) => self.function(function),
            Value::Channel(channel) => self.channel(channel, ctx),
            Value::Unsafe => self.buf.push_str("<unsafe>"),
        }
    }

    fn unsigned(&mut self, value: u64) {
        let _ = write!(self.buf, "0x{:x}", value);
    }

    fn signed(&mut self, value: i64) {
        let _ = write!(self.buf, "{}", value);
    }

    fn sequence(&mut self, seq: &Sequence<'_>, ctx: RenderContext) {
        self.buf.push('[');
        self.items(&seq.items, Category::Sequence, ctx);
        self.annotate(&seq.type_of());
    }

    fn map(&mut self, map: &Map<'_>, ctx: RenderContext) {
        self.buf.push('[');
        if map.entries.is_empty() {
            self.buf.push(':');
        } else {
            self.nested(Category::AssociativeCollection, ctx, |this, inner| {
                let mut entries: Vec<_> = map.entries.iter().collect();
                sort_entries(&mut entries);
                for (key, value) in entries {
                    this.newline(inner);
                    this.association(key, value, inner);
                }
            });
        }
        self.annotate(&map.type_of());
    }

    fn record(&mut self, record: &Record<'_>, ctx: RenderContext) {
        self.buf.push('[');
        self.fields(&record.fields, Category::Record, ctx);
        self.annotate(&record.ty);
    }

    fn reference(&mut self, reference: &Reference<'_>, ctx: RenderContext) {
        self.buf.push_str("&[");
        if ctx.indirections >= self.config.max_depth {
            self.truncate(Category::Reference, ctx);
        } else {
            let ctx = ctx.follow();
            match reference.target {
                None => self.buf.push_str("<nil>"),
                Some(target) => match target.as_renderable() {
                    Some(renderable) => self.surface(renderable, target, ctx),
                    None => self.value(&target.reflect(), ctx),
                },
            }
        }
        self.annotate(&reference.type_of());
    }

    /// Renders the first custom surface the target exposes, falling back to the target itself.
    fn surface(&mut self, renderable: &dyn Renderable, target: &dyn Reflect, ctx: RenderContext) {
        if let Some(items) = renderable.as_sequence() {
            debug!(count = items.len(), "rendering reference as a sequence");
            self.items(&items, Category::Sequence, ctx);
        } else if let Some(associations) = renderable.as_associations() {
            debug!(count = associations.len(), "rendering reference as associations");
            self.associations(&associations, ctx);
        } else if let Some(fields) = renderable.as_fields() {
            debug!(count = fields.len(), "rendering reference as fields");
            self.fields(&fields, Category::Record, ctx);
        } else {
            self.value(&target.reflect(), ctx);
        }
    }

    fn items(&mut self, items: &[Value<'_>], category: Category, ctx: RenderContext) {
        if items.is_empty() {
            self.buf.push(' ');
            return;
        }
        self.nested(category, ctx, |this, inner| {
            for item in items {
                this.newline(inner);
                this.value(item, inner);
            }
        });
    }

    /// Association lists are already ordered by their owner and are rendered as provided.
    fn associations(&mut self, associations: &[Association<'_>], ctx: RenderContext) {
        if associations.is_empty() {
            self.buf.push(':');
            return;
        }
        self.nested(Category::AssociativeCollection, ctx, |this, inner| {
            for association in associations {
                this.newline(inner);
                this.association(association.key(), association.value(), inner);
            }
        });
    }

    fn association(&mut self, key: &Value<'_>, value: &Value<'_>, ctx: RenderContext) {
        self.value(key, ctx);
        self.buf.push_str(": ");
        self.value(value, ctx);
    }

    fn fields(&mut self, fields: &[Field<'_>], category: Category, ctx: RenderContext) {
        self.nested(category, ctx, |this, inner| {
            for field in fields {
                this.newline(inner);
                this.buf.push_str(&field.name);
                this.buf.push_str(": ");
                match &field.value {
                    Some(value) => this.value(value, inner),
                    None => this.buf.push_str("<private>"),
                }
            }
        });
    }

    fn function(&mut self, function: &Function) {
        let signature = function.type_of().to_string();
        match &function.name {
            Some(name) => {
                let params = signature.strip_prefix("func").unwrap_or(&signature);
                let _ = write!(self.buf, "func {}{}", name, params);
            },
            None => self.buf.push_str(&signature),
        }
    }

    fn channel(&mut self, channel: &Channel, ctx: RenderContext) {
        self.buf.push('[');
        self.nested(Category::StreamChannel, ctx, |this, inner| {
            this.newline(inner);
            let _ = write!(this.buf, "Direction: {}", channel.direction);
            this.newline(inner);
            match channel.capacity {
                Some(capacity) => {
                    let _ = write!(this.buf, "Capacity: {}", capacity);
                },
                None => this.buf.push_str("Capacity: unbounded"),
            }
            this.newline(inner);
            let _ = write!(this.buf, "Size: {}", channel.len);
        });
        self.annotate(&Type::Channel(Box::new(channel.element.clone())));
    }

    /// Writes a composite body one level deeper, followed by the newline before its closing
    /// bracket, or `...` once the depth ceiling is reached.
    fn nested(
        &mut self,
        category: Category,
        ctx: RenderContext,
        body: impl FnOnce(&mut Self, RenderContext),
    ) {
        if ctx.depth >= self.config.max_depth {
            self.truncate(category, ctx);
            return;
        }
        body(self, ctx.enter());
        self.newline(ctx);
    }

    fn truncate(&mut self, category: Category, ctx: RenderContext) {
        trace!(%category, depth = ctx.depth, "depth ceiling reached, truncating");
        self.buf.push_str("...");
    }

    fn newline(&mut self, ctx: RenderContext) {
        self.buf.push('\n');
        for _ in 0..ctx.depth * self.config.indent {
            self.buf.push(' ');
        }
    }

    fn annotate(&mut self, ty: &Type) {
        let _ = write!(self.buf, "]({})", ty);
    }
}
