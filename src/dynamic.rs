//! Partitioning over dynamically typed values.
//!
//! [`Value`] models the values of a scripting host: primitives, shared
//! holey arrays, property bags and native functions. [`Value::partition`]
//! runs the same algorithm as [`partition`](crate::partition()) but takes its
//! callback as a `Value`, so a callback that is not a function is a runtime
//! error rather than a type error.

use alloc::{
    collections::BTreeMap,
    format,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::{cell::RefCell, fmt};

use tracing::debug;

use crate::{ArrayLike, PartitionError, Partitioned, SparseVec, Truthy, try_partition};

/// Largest length an array-like object may report.
const MAX_LENGTH: f64 = 9_007_199_254_740_991.0;

/// Signature of a native function body: `(this, arguments) -> result`, where
/// `Err` carries a thrown value.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, Value>;

/// A named, callable value.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    body: Rc<NativeFn>,
}

impl Function {
    /// Wraps a native closure as a function named `name`.
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Value> + 'static,
    {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// The name the function was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function with `this` as its receiver.
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, Value> {
        (self.body)(this, args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

/// A dynamically typed value.
///
/// Arrays, objects and functions are shared handles and compare by identity;
/// primitives compare by value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(Rc<RefCell<SparseVec<Value>>>),
    Object(Rc<RefCell<BTreeMap<String, Value>>>),
    Function(Function),
}

impl Value {
    /// Builds an array from its slots; each `None` is a hole.
    ///
    /// ```
    /// use stable_partition::Value;
    ///
    /// let a = Value::array([Some(Value::from(1)), None]);
    /// assert_eq!(a.to_string(), "1,");
    /// ```
    pub fn array<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        Value::Array(Rc::new(RefCell::new(slots.into_iter().collect())))
    }

    /// Builds an object from its properties.
    pub fn object<I, K>(props: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(Rc::new(RefCell::new(
            props.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    /// Builds a function value; see [`Function::new`].
    pub fn function<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Value> + 'static,
    {
        Value::Function(Function::new(name, body))
    }

    /// Returns the shared element store if this is an array.
    pub fn as_array(&self) -> Option<&Rc<RefCell<SparseVec<Value>>>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the shared property map if this is an object.
    pub fn as_object(&self) -> Option<&Rc<RefCell<BTreeMap<String, Value>>>> {
        match self {
            Value::Object(props) => Some(props),
            _ => None,
        }
    }

    /// Returns the number if this is a number. No conversion is attempted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric conversion of a value, as the host performs it.
    ///
    /// Strings are trimmed; an empty string is `0`, a decimal or `0x`/`0o`/`0b`
    /// literal is its value and anything else is NaN. An array converts
    /// through its string form, so `[2]` is `2` and `[]` is `0`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Array(_) => string_to_number(&self.to_string()),
            Value::Object(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// Splits this array-like value with `callback`, called with `this_arg` as
    /// its receiver and `(value, index, self)` as its arguments.
    ///
    /// Fails with [`PartitionError::NotObjectCoercible`] for `undefined` and
    /// `null`, and with [`PartitionError::InvalidCallback`] when `callback` is
    /// not a function; neither case calls anything. A value thrown by the
    /// callback comes back as [`PartitionError::Thrown`].
    ///
    /// ```
    /// use stable_partition::{PartitionError, Value};
    ///
    /// let xs = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
    /// let is_odd = Value::function("isOdd", |_, args| {
    ///     Ok(Value::Bool(args[0].to_number() % 2.0 == 1.0))
    /// });
    ///
    /// let p = xs.partition(&is_odd, &Value::Undefined).unwrap();
    /// assert_eq!(p.selected(), &[Value::from(1), Value::from(3)]);
    ///
    /// let err = xs.partition(&Value::from("not a function"), &Value::Undefined);
    /// assert!(matches!(err, Err(PartitionError::InvalidCallback { .. })));
    /// ```
    pub fn partition(
        &self,
        callback: &Value,
        this_arg: &Value,
    ) -> Result<Partitioned<Value>, PartitionError> {
        if matches!(self, Value::Undefined | Value::Null) {
            return Err(PartitionError::NotObjectCoercible {
                value: self.to_string(),
            });
        }

        let Value::Function(function) = callback else {
            debug!(%callback, "partition callback is not callable");
            return Err(PartitionError::InvalidCallback {
                callback: callback.to_string(),
            });
        };

        try_partition(self, |value, index, receiver| {
            function.call(this_arg, &[value.clone(), Value::from(index), receiver.clone()])
        })
        .map_err(PartitionError::Thrown)
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // rust also accepts "inf" and "nan", the host does not
        _ if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => f64::NAN,
        _ => s.parse().unwrap_or(f64::NAN),
    }
}

/// Clamps a numeric length to `0..=2^53 - 1`, truncating any fraction.
fn to_length(n: f64) -> usize {
    if n.is_nan() || n <= 0.0 {
        return 0;
    }
    // the cast truncates toward zero
    let n = n.min(MAX_LENGTH) as u64;
    usize::try_from(n).unwrap_or(usize::MAX)
}

impl ArrayLike for Value {
    type Item = Value;

    fn length(&self) -> usize {
        match self {
            Value::Array(items) => items.borrow().len(),
            Value::String(s) => s.chars().count(),
            Value::Object(props) => to_length(
                props
                    .borrow()
                    .get("length")
                    .map_or(f64::NAN, Value::to_number),
            ),
            _ => 0,
        }
    }

    fn get(&self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) => items.borrow().get(index).cloned(),
            Value::String(s) => s.chars().nth(index).map(Value::from),
            Value::Object(props) => props.borrow().get(&index.to_string()).cloned(),
            _ => None,
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.is_truthy(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

/// Writes `value` the way the host stringifies it. `open` holds the arrays
/// being written further up; one met again is written as nothing.
fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    open: &mut Vec<*const RefCell<SparseVec<Value>>>,
) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write_number(f, *n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            let id = Rc::as_ptr(items);
            if open.contains(&id) {
                return Ok(());
            }
            open.push(id);

            let items = items.borrow();
            for index in 0..items.len() {
                if index > 0 {
                    f.write_str(",")?;
                }
                match items.get(index) {
                    None | Some(Value::Undefined | Value::Null) => {}
                    Some(item) => write_value(f, item, open)?,
                }
            }

            open.pop();
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
        Value::Function(function) => {
            write!(f, "function {}() {{ [native code] }}", function.name())
        }
    }
}

/// Host number formatting: exponent form below `1e-6` and from `1e21` up.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n == f64::INFINITY {
        return f.write_str("Infinity");
    }
    if n == f64::NEG_INFINITY {
        return f.write_str("-Infinity");
    }
    // covers -0
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = if n < 0.0 { -n } else { n };
    if !(1e-6..1e21).contains(&magnitude) {
        let exponential = format!("{n:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&exponential),
        };
    }
    write!(f, "{n}")
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(Rc::from(&*c.encode_utf8(&mut [0; 4])))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<Vec<Value>> for Value {
    /// A dense array.
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items.into())))
    }
}
