mod builder;
pub use builder::Builder;

use crate::{err, Model, ModelRef, Result};
use migrant_core::schema::{ModelId, Name, Schema};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap, sync::Arc, sync::OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Frozen set of model schemas, keyed by model type.
///
/// A registry is immutable once built, so it can be shared freely between
/// threads and mocks can be generated concurrently.
#[derive(Debug)]
pub struct Registry {
    /// Registered models, in registration order. A model's position is its
    /// [`ModelId`].
    pub(crate) models: IndexMap<TypeId, Entry>,

    by_name: HashMap<Name, ModelId>,
}

/// A registered model.
#[derive(Debug)]
pub struct Entry {
    pub id: ModelId,

    pub model: ModelRef,

    /// `None` if the model is known to the registry but never declared a
    /// structure. Such models have no mock capability.
    pub schema: Option<Arc<Schema>>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.models.values()
    }

    pub fn model_id<M: Model>(&self) -> Option<ModelId> {
        self.models
            .get_index_of(&TypeId::of::<M>())
            .map(ModelId)
    }

    /// Get a model by ID
    pub fn entry(&self, id: impl Into<ModelId>) -> &Entry {
        let id = id.into();
        self.models
            .get_index(id.0)
            .map(|(_, entry)| entry)
            .expect("invalid model ID")
    }

    pub fn schema<M: Model>(&self) -> Option<&Arc<Schema>> {
        self.models.get(&TypeId::of::<M>())?.schema.as_ref()
    }

    /// Look a model up by name. Spelling variations of the same name (`OrderItem`,
    /// `order_item`) resolve to the same model.
    pub fn lookup(&self, name: &Name) -> Option<ModelId> {
        self.by_name.get(name).copied()
    }

    pub fn schema_by_name(&self, name: &str) -> Option<&Arc<Schema>> {
        let id = self.lookup(&Name::new(name))?;
        self.entry(id).schema.as_ref()
    }
}

/// Install `registry` as the process-wide registry used by [`Model::mock`] and
/// [`Model::schema`].
///
/// Fails if a registry has already been installed.
pub fn install(registry: Registry) -> Result<&'static Registry> {
    let mut installed = false;

    let global = GLOBAL.get_or_init(|| {
        installed = true;
        registry
    });

    if !installed {
        crate::bail!("a registry has already been installed");
    }

    tracing::debug!(models = global.models.len(), "installed registry");
    Ok(global)
}

/// Returns the process-wide registry, building and installing it with `f` on
/// first use. Concurrent callers block until the first one finishes.
pub fn get_or_install(f: impl FnOnce() -> Registry) -> &'static Registry {
    GLOBAL.get_or_init(f)
}

/// The process-wide registry.
pub fn global() -> Result<&'static Registry> {
    GLOBAL
        .get()
        .ok_or_else(|| err!("no registry installed; build one and call `registry::install`"))
}
