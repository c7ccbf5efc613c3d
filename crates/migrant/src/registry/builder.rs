use super::{Entry, Registry};
use crate::{Model, ModelRef, Result};
use migrant_core::{
    schema::{self, Declaration, ModelId, Name, Structure, SubclassColumns},
    Error,
};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap};

/// Collects structure declarations and freezes them into a [`Registry`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Declared models, in registration order
    models: IndexMap<TypeId, Pending>,

    subclass_columns: SubclassColumns,
}

#[derive(Debug)]
struct Pending {
    model: ModelRef,
    structure: Option<Structure>,
}

impl Builder {
    /// Make `M` known to the registry without declaring a structure for it.
    ///
    /// Registered models resolve as association targets but have no mock
    /// capability.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.register_ref(ModelRef::of::<M>());
        self
    }

    /// Declare fields on `M`.
    ///
    /// May be called more than once for the same model; declarations
    /// accumulate. For a single-table-inheritance subclass, every ancestor is
    /// registered as well and receives a structure.
    pub fn structure<M: Model>(&mut self, f: impl FnOnce(&mut Structure)) -> &mut Self {
        let pending = self.register_ref(ModelRef::of::<M>());
        f(pending.structure.get_or_insert_with(Structure::default));
        self
    }

    /// Declare a structure with no fields of its own. The model's
    /// associations are still reflected; join models are the typical use.
    pub fn no_structure<M: Model>(&mut self) -> &mut Self {
        self.structure::<M>(|_| {})
    }

    /// Where subclass fields become visible. Defaults to
    /// [`SubclassColumns::Cascade`].
    pub fn subclass_columns(&mut self, subclass_columns: SubclassColumns) -> &mut Self {
        self.subclass_columns = subclass_columns;
        self
    }

    pub fn build(&self) -> Result<Registry> {
        let mut core = schema::Builder::default();
        core.subclass_columns(self.subclass_columns);

        for pending in self.models.values() {
            let parent = pending
                .model
                .inherits()
                .and_then(|parent| self.models.get_index_of(&parent.type_id()))
                .map(ModelId);

            core.declare(Declaration {
                name: Name::new(pending.model.name()),
                parent,
                associations: pending.model.associations(),
                structure: pending.structure.clone(),
            });
        }

        let schemas = core.build()?;

        let mut models = IndexMap::with_capacity(self.models.len());
        let mut by_name = HashMap::with_capacity(self.models.len());

        for ((type_id, pending), schema) in self.models.iter().zip(schemas) {
            let id = ModelId(models.len());
            let name = Name::new(pending.model.name());

            if let Some(existing) = by_name.insert(name, id) {
                return Err(Error::invalid_schema(format!(
                    "models {:?} and {:?} share the name `{}`",
                    self.models[existing.0].model,
                    pending.model,
                    pending.model.name(),
                )));
            }

            models.insert(
                *type_id,
                Entry {
                    id,
                    model: pending.model,
                    schema,
                },
            );
        }

        tracing::debug!(models = models.len(), "built registry");

        Ok(Registry { models, by_name })
    }

    /// Build the registry and install it as the process-wide one.
    pub fn install(&self) -> Result<&'static Registry> {
        super::install(self.build()?)
    }

    /// Register `model` and its ancestors, returning the pending declaration
    /// for `model`.
    fn register_ref(&mut self, model: ModelRef) -> &mut Pending {
        if !self.models.contains_key(&model.type_id()) {
            self.models.insert(
                model.type_id(),
                Pending {
                    model,
                    structure: None,
                },
            );

            // Inserting before walking up keeps a cyclic hierarchy from
            // recursing forever; the cycle is reported by `build`.
            if let Some(parent) = model.inherits() {
                self.register_ref(parent);
            }
        }

        let index = self
            .models
            .get_index_of(&model.type_id())
            .expect("model was just registered");
        &mut self.models[index]
    }
}
