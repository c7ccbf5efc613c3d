use crate::{registry, Error, Result};
use migrant_core::{
    schema::{Association, Name, Schema},
    Attributes, Value,
};

use std::{any::TypeId, fmt, sync::Arc};

/// The capabilities a host ORM model exposes to Migrant.
///
/// Implementations describe the model (its name, superclass and associations)
/// and know how to construct an unsaved instance from an attribute map. The
/// provided methods add the class-level `mock` and `schema` entry points; they
/// read the process-wide registry installed with [`registry::install`].
pub trait Model: Sized + 'static {
    /// Name of the model. Association targets are resolved against it.
    const NAME: &'static str;

    /// The superclass, if this model is a single-table-inheritance subclass.
    fn inherits() -> Option<ModelRef> {
        None
    }

    /// Association reflection.
    fn associations() -> Vec<Association> {
        Vec::new()
    }

    /// Construct an unsaved instance from its initial attribute set.
    fn load(attributes: Attributes) -> Result<Self>;

    /// Generate a mock, populating `belongs_to` associations one level deep.
    fn mock() -> Result<Self> {
        Self::mock_with(Attributes::new(), true)
    }

    /// Generate a mock. `attributes` override synthesized values; `recursive`
    /// controls whether `belongs_to` associations get nested mocks.
    fn mock_with(attributes: Attributes, recursive: bool) -> Result<Self> {
        registry::global()?.mock::<Self>(attributes, recursive)
    }

    /// The model's schema in the installed registry.
    fn schema() -> Result<Arc<Schema>> {
        registry::global()?
            .schema::<Self>()
            .cloned()
            .ok_or_else(|| Error::missing_structure(Self::NAME))
    }

    /// Remove the association `name` from `attributes` and load it as `Self`.
    ///
    /// Returns `None` when the association was not populated.
    fn load_association(attributes: &mut Attributes, name: &str) -> Result<Option<Self>> {
        match attributes.remove(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Instance(instance)) => {
                if instance.model != Name::new(Self::NAME) {
                    crate::bail!(
                        "association `{name}` holds a `{}`, expected a `{}`",
                        instance.model,
                        Self::NAME
                    );
                }
                Self::load(instance.into_attributes()).map(Some)
            }
            Some(value) => Err(Error::type_conversion(&value, Self::NAME)),
        }
    }
}

/// A type-erased handle to a [`Model`] implementation.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: TypeId,
    name: &'static str,
    inherits: fn() -> Option<ModelRef>,
    associations: fn() -> Vec<Association>,
}

impl ModelRef {
    pub fn of<M: Model>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: M::NAME,
            inherits: M::inherits,
            associations: M::associations,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn inherits(&self) -> Option<ModelRef> {
        (self.inherits)()
    }

    pub fn associations(&self) -> Vec<Association> {
        (self.associations)()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl fmt::Debug for ModelRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelRef({})", self.name)
    }
}
