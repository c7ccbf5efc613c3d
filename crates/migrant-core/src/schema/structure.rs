use super::{DataType, Field};
use crate::Value;

use indexmap::{map::Entry, IndexMap};

/// Collects the fields a model declares.
///
/// A structure is handed to the configuration closure passed to the
/// registry's `structure` call:
///
/// ```
/// # use migrant_core::schema::Structure;
/// let mut s = Structure::default();
/// s.string("title");
/// s.integer("pages").nullable();
/// s.example("status", "draft");
/// assert_eq!(s.len(), 3);
/// ```
///
/// Declaring the same name twice replaces the first declaration while keeping
/// its position. Malformed declarations are recorded and reported when the
/// registry is built.
#[derive(Debug, Default, Clone)]
pub struct Structure {
    fields: IndexMap<String, Field>,
    errors: Vec<String>,
}

impl Structure {
    /// Declare a field of the given type.
    pub fn field(&mut self, name: &str, ty: DataType) -> &mut Field {
        if name.trim().is_empty() {
            self.errors.push(format!("field declared with an empty name ({ty})"));
        }

        let field = Field::new(name, ty);
        match self.fields.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(field);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(field),
        }
    }

    /// Declare a field whose type is inferred from `value`. Mocks of the model
    /// reproduce the example rather than synthesizing a value.
    pub fn example(&mut self, name: &str, value: impl Into<Value>) -> &mut Field {
        let value = value.into();
        let ty = match DataType::infer(&value) {
            Some(ty) => ty,
            None => {
                self.errors.push(format!(
                    "cannot infer the type of field `{name}` from a {} example",
                    value.ty_name()
                ));
                DataType::String
            }
        };
        self.field(name, ty).example(value)
    }

    pub fn boolean(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Boolean)
    }

    pub fn integer(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Integer)
    }

    pub fn float(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Float)
    }

    pub fn decimal(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Decimal)
    }

    pub fn string(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::String)
    }

    pub fn text(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Text)
    }

    pub fn date(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::Date)
    }

    pub fn datetime(&mut self, name: &str) -> &mut Field {
        self.field(name, DataType::DateTime)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_parts(self) -> (IndexMap<String, Field>, Vec<String>) {
        (self.fields, self.errors)
    }
}
