use super::DataType;
use crate::Value;

use rand::Rng;

/// A declared column of a model's structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: String,

    /// The field's data type
    pub ty: DataType,

    /// True if the column accepts null.
    pub nullable: bool,

    /// Value the host ORM defaults the column to. Mocks do not read it; it
    /// is only checked against `ty` when the schema is built.
    pub default: Option<Value>,

    /// Representative value. When set, mocks use it instead of synthesizing one.
    pub example: Option<Value>,

    /// True if the column should be indexed on its own.
    pub index: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default: None,
            example: None,
            index: false,
        }
    }

    /// Column populated through an association rather than declared.
    pub(crate) fn association_column(name: impl Into<String>, ty: DataType) -> Self {
        debug_assert!(ty.is_foreign_key());
        Self {
            nullable: true,
            ..Self::new(name, ty)
        }
    }

    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn default(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    pub fn example(&mut self, value: impl Into<Value>) -> &mut Self {
        self.example = Some(value.into());
        self
    }

    pub fn index(&mut self) -> &mut Self {
        self.index = true;
        self
    }

    pub fn is_foreign_key(&self) -> bool {
        self.ty.is_foreign_key()
    }

    /// A representative value for this field: the declared example if there
    /// is one, otherwise whatever the data type synthesizes.
    pub fn mock<R: Rng>(&self, rng: &mut R) -> Option<Value> {
        if self.ty.is_foreign_key() {
            return None;
        }

        match &self.example {
            Some(example) => Some(example.clone()),
            None => self.ty.mock(rng),
        }
    }
}
