use super::Attributes;
use crate::schema::Name;

/// A type-erased model instance.
///
/// Nested mocks are stored as instances inside their parent's attribute map;
/// the parent's constructor turns them back into the concrete model type.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Name of the model the attributes belong to
    pub model: Name,

    /// The instance's initial attribute set
    pub attributes: Attributes,
}

impl Instance {
    pub fn new(model: Name, attributes: Attributes) -> Self {
        Self { model, attributes }
    }

    pub fn get(&self, name: &str) -> Option<&super::Value> {
        self.attributes.get(name)
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}
