//! Model structures: declared fields, reflected associations and the schemas
//! assembled from them.

mod association;
pub use association::{Association, AssociationKind};

mod builder;
pub use builder::{Builder, Declaration, SubclassColumns};

mod data_type;
pub use data_type::DataType;

mod field;
pub use field::Field;

mod index;
pub use index::Index;

mod name;
pub use name::Name;

mod structure;
pub use structure::Structure;

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// The assembled structure of one model.
///
/// Built once when the registry is frozen and read-only afterwards.
#[derive(Debug)]
pub struct Schema {
    /// Identifies the model within its registry
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Distinguishes base models from single-table-inheritance subclasses
    pub kind: SchemaKind,

    /// Fields declared along the model's inheritance line
    declared: IndexMap<String, Field>,

    /// Effective columns: `declared` plus anything cascaded up from subclasses
    columns: IndexMap<String, Field>,

    /// Key columns derived from `belongs_to` associations
    foreign_keys: IndexMap<String, Field>,

    associations: IndexMap<String, Association>,

    indexes: Vec<Index>,
}

#[derive(Debug)]
pub enum SchemaKind {
    /// A model mapped directly to its own table
    Base,

    /// A subclass sharing its parent's table
    Inherited(InheritedSchema),
}

/// Schema of a single-table-inheritance subclass.
#[derive(Debug)]
pub struct InheritedSchema {
    /// Schema of the superclass. Its fields and associations are merged into
    /// the subclass's, with the subclass's own declarations taking precedence.
    pub parent: Arc<Schema>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Schema {
    /// Effective columns, keyed by field name.
    pub fn columns(&self) -> &IndexMap<String, Field> {
        &self.columns
    }

    /// Fields declared by the model and its ancestors, without the fields
    /// cascaded up from subclasses.
    pub fn declared(&self) -> &IndexMap<String, Field> {
        &self.declared
    }

    /// Key columns derived from `belongs_to` associations rather than
    /// declared. Polymorphic associations contribute a type column as well.
    pub fn foreign_keys(&self) -> &IndexMap<String, Field> {
        &self.foreign_keys
    }

    /// Look up a declared field, falling back to the association key columns.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.columns
            .get(name)
            .or_else(|| self.foreign_keys.get(name))
    }

    pub fn associations(&self) -> impl ExactSizeIterator<Item = &Association> {
        self.associations.values()
    }

    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations.get(name)
    }

    pub fn belongs_to(&self) -> impl Iterator<Item = &Association> {
        self.associations().filter(|association| association.is_belongs_to())
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn is_inherited(&self) -> bool {
        matches!(self.kind, SchemaKind::Inherited(_))
    }

    pub fn parent(&self) -> Option<&Arc<Schema>> {
        match &self.kind {
            SchemaKind::Base => None,
            SchemaKind::Inherited(inherited) => Some(&inherited.parent),
        }
    }

    /// The base model at the root of the inheritance line.
    pub fn base(&self) -> &Schema {
        match self.parent() {
            Some(parent) => parent.base(),
            None => self,
        }
    }
}

impl ModelId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<&Schema> for ModelId {
    fn from(value: &Schema) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
