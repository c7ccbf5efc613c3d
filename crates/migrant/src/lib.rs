//! Structure declarations and mock generation for ORM models.
//!
//! A model describes itself to the registry through [`Model`]. Structures are
//! declared on a [`registry::Builder`], frozen into a [`Registry`], and mocks
//! are generated from the frozen schemas:
//!
//! ```ignore
//! let registry = Registry::builder()
//!     .structure::<Order>(|s| {
//!         s.decimal("total");
//!     })
//!     .no_structure::<Tagging>()
//!     .build()?;
//!
//! let order: Order = registry.mock(Attributes::new(), true)?;
//! ```

mod mock;

mod model;
pub use model::{Model, ModelRef};

pub mod registry;
pub use registry::Registry;

pub use migrant_core::{
    bail, err,
    schema::{
        self, Association, AssociationKind, DataType, Field, Index, ModelId, Name, Schema,
        Structure, SubclassColumns,
    },
    value, Attributes, Error, Instance, Result, Value,
};
