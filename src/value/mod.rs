//! Dynamic value graph for dumping
//!
//! Rust has no universal reflection, so values to be dumped are modeled as a
//! [`Value`] graph: atoms, shared sequences, shared mappings, and composite
//! objects that opt in through the [`ObjectFields`] trait. Sequences and
//! mappings live behind `Rc<RefCell<..>>` so aliased and cyclic structures
//! can be built and dumped safely.

pub mod convert;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Capability trait for composite objects: anything exposing a named-field
/// set can be dumped by implementing this.
pub trait ObjectFields {
    /// Declared type name, used in summary headers.
    fn type_name(&self) -> &str;

    /// Defining unit of the type, conventionally `module_path!()`.
    ///
    /// Consulted by the contained-instance policy: `Module` compares the full
    /// path, `Package` compares the path with its final segment dropped.
    fn defining_module(&self) -> &str;

    /// The object's (name, value) pairs, in a stable order of the
    /// implementation's choosing.
    fn fields(&self) -> Vec<(String, Value)>;

    /// Optional custom one-line rendering appended to the summary header.
    fn string_form(&self) -> Option<String> {
        None
    }

    /// Field names that are always rendered on a single line and never
    /// descended into, however large their values are.
    fn shallow_fields(&self) -> &[&str] {
        &[]
    }
}

/// A shared, possibly cyclic sequence of values.
pub type SharedSeq = Rc<RefCell<Vec<Value>>>;

/// A shared mapping, kept in insertion order and sorted at render time.
pub type SharedMap = Rc<RefCell<Vec<(Key, Value)>>>;

/// A value to be dumped.
///
/// Every value classifies into exactly one of four categories: atoms
/// (`Null`/`Bool`/`Int`/`Float`/`Str`), sequences, mappings, and composite
/// objects.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A text string.
    Str(String),
    /// An ordered, numerically-indexed collection.
    Seq(SharedSeq),
    /// A key/value collection.
    Map(SharedMap),
    /// A composite object with named fields.
    Object(Rc<dyn ObjectFields>),
}

impl Value {
    /// Build a sequence value from an iterator of elements.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Seq(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Build a mapping value from an iterator of entries. Insertion order is
    /// preserved internally; multi-line rendering sorts by key.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(Rc::new(RefCell::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )))
    }

    /// Wrap a composite object.
    pub fn object(object: impl ObjectFields + 'static) -> Self {
        Self::Object(Rc::new(object))
    }

    /// Wrap an already shared composite object, so the same instance can be
    /// referenced from several places and keep one identity.
    #[must_use]
    pub fn shared_object(object: Rc<dyn ObjectFields>) -> Self {
        Self::Object(object)
    }

    /// Identity token for cycle detection.
    ///
    /// Sequences, mappings and objects take the address of their shared
    /// allocation, so clones of one `Value` handle share an identity while
    /// equal but separately built values do not. Atoms have no identity.
    #[must_use]
    pub fn identity(&self) -> Option<ObjectId> {
        match self {
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => None,
            Self::Seq(items) => Some(ObjectId(Rc::as_ptr(items) as usize)),
            Self::Map(entries) => Some(ObjectId(Rc::as_ptr(entries) as usize)),
            Self::Object(object) => Some(ObjectId(Rc::as_ptr(object).cast::<()>() as usize)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(i) => write!(f, "Int({i})"),
            Self::Float(x) => write!(f, "Float({x})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::Seq(items) => write!(f, "Seq(len={})", items.borrow().len()),
            Self::Map(entries) => write!(f, "Map(len={})", entries.borrow().len()),
            Self::Object(object) => write!(f, "Object({})", object.type_name()),
        }
    }
}

/// Stable per-object identity token, compared instead of value equality when
/// breaking cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    /// The raw address backing this identity.
    #[must_use]
    pub const fn addr(self) -> usize {
        self.0
    }
}

/// A mapping key.
///
/// `Int`, `Float` and `Str` keys are comparable with a deterministic total
/// order: numeric before text, numeric compared numerically, text
/// lexicographic. `Other` carries a pre-rendered label for keys outside that
/// set; mappings containing one fall back to insertion order when rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// An integer key.
    Int(i64),
    /// A floating-point key.
    Float(f64),
    /// A text key.
    Str(String),
    /// An incomparable key, carried as its rendered text.
    Other(String),
}

impl Key {
    /// Compare two keys, or `None` when either side is incomparable.
    #[must_use]
    pub fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Other(_), _) | (_, Self::Other(_)) => None,
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => Some(a.total_cmp(b)),
            #[allow(clippy::cast_precision_loss)]
            (Self::Int(a), Self::Float(b)) => Some((*a as f64).total_cmp(b)),
            #[allow(clippy::cast_precision_loss)]
            (Self::Float(a), Self::Int(b)) => Some(a.total_cmp(&(*b as f64))),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            (Self::Int(_) | Self::Float(_), Self::Str(_)) => Some(Ordering::Less),
            (Self::Str(_), Self::Int(_) | Self::Float(_)) => Some(Ordering::Greater),
        }
    }

    /// The key's label for multi-line entry prefixes. Text keys render bare,
    /// without quotes.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Str(s) | Self::Other(s) => s.clone(),
        }
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

impl From<i32> for Key {
    fn from(key: i32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<f64> for Key {
    fn from(key: f64) -> Self {
        Self::Float(key)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::Str(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self::Str(key)
    }
}
