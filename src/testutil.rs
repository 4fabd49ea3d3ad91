//! Shared test utilities
//!
//! Composite-object fixtures used across test modules. Only compiled in
//! test builds.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::{ObjectFields, Value};

/// Configurable composite fixture: type name, defining module, mutable
/// fields (so tests can close reference cycles after construction), an
/// optional string form, and shallow field names.
pub struct TestObject {
    type_name: &'static str,
    module: &'static str,
    fields: RefCell<Vec<(String, Value)>>,
    string_form: RefCell<Option<String>>,
    shallow: Vec<&'static str>,
}

impl TestObject {
    /// Create an empty fixture behind an `Rc` so tests can alias it.
    pub fn new(type_name: &'static str, module: &'static str) -> Rc<Self> {
        Rc::new(Self {
            type_name,
            module,
            fields: RefCell::new(Vec::new()),
            string_form: RefCell::new(None),
            shallow: Vec::new(),
        })
    }

    /// Like `new`, with shallow field names declared up front.
    pub fn with_shallow(
        type_name: &'static str,
        module: &'static str,
        shallow: Vec<&'static str>,
    ) -> Rc<Self> {
        Rc::new(Self {
            type_name,
            module,
            fields: RefCell::new(Vec::new()),
            string_form: RefCell::new(None),
            shallow,
        })
    }

    /// Append a field.
    pub fn set_field(&self, name: &str, value: Value) {
        self.fields.borrow_mut().push((name.to_string(), value));
    }

    /// Set the custom string form appended to the summary header.
    pub fn set_string_form(&self, form: &str) {
        *self.string_form.borrow_mut() = Some(form.to_string());
    }

    /// Wrap the shared fixture as a `Value`, keeping its identity.
    pub fn value(this: &Rc<Self>) -> Value {
        Value::shared_object(Rc::clone(this) as Rc<dyn ObjectFields>)
    }
}

impl ObjectFields for TestObject {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn defining_module(&self) -> &str {
        self.module
    }

    fn fields(&self) -> Vec<(String, Value)> {
        self.fields.borrow().clone()
    }

    fn string_form(&self) -> Option<String> {
        self.string_form.borrow().clone()
    }

    fn shallow_fields(&self) -> &[&str] {
        &self.shallow
    }
}
