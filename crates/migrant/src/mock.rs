use crate::{err, Error, Model, Registry, Result};
use migrant_core::{
    schema::{Association, ModelId, Name},
    Attributes, Instance,
};

use rand::Rng;

impl Registry {
    /// Generate an unsaved mock of `M`.
    ///
    /// Every non foreign key column is synthesized from its data type. When
    /// `recursive` is set, each `belongs_to` association whose target has a
    /// structure is populated with a non-recursive mock of the target.
    /// `attributes` are merged over the result before `M` is constructed.
    pub fn mock<M: Model>(&self, attributes: Attributes, recursive: bool) -> Result<M> {
        self.mock_with_rng(attributes, recursive, &mut rand::thread_rng())
    }

    /// [`mock`](Self::mock) with a caller supplied source of randomness.
    pub fn mock_with_rng<M: Model, R: Rng>(
        &self,
        attributes: Attributes,
        recursive: bool,
        rng: &mut R,
    ) -> Result<M> {
        let id = self
            .model_id::<M>()
            .ok_or_else(|| Error::missing_structure(M::NAME))?;

        let attributes = self.mock_attributes(id, attributes, recursive, rng)?;

        M::load(attributes).map_err(|err| err.context(err!("{}::load()", M::NAME)))
    }

    /// Generate a mock of the model named `model` without knowing its type.
    pub fn mock_instance(
        &self,
        model: &str,
        attributes: Attributes,
        recursive: bool,
    ) -> Result<Instance> {
        let name = Name::new(model);
        let id = self
            .lookup(&name)
            .ok_or_else(|| Error::missing_structure(model))?;

        let attributes =
            self.mock_attributes(id, attributes, recursive, &mut rand::thread_rng())?;

        Ok(Instance::new(name, attributes))
    }

    /// The attribute set a mock of model `id` is constructed from.
    pub fn mock_attributes<R: Rng>(
        &self,
        id: ModelId,
        overrides: Attributes,
        recursive: bool,
        rng: &mut R,
    ) -> Result<Attributes> {
        let entry = self.entry(id);
        let schema = entry
            .schema
            .as_ref()
            .ok_or_else(|| Error::missing_structure(entry.model.name()))?;

        let mut attributes = Attributes::new();

        for field in schema.columns().values() {
            if field.is_foreign_key() {
                continue;
            }

            if let Some(value) = field.mock(rng) {
                attributes.insert(field.name.clone(), value);
            }
        }

        // Only one level deep; nested mocks never recurse.
        if recursive {
            for association in schema.belongs_to() {
                let Some(target) = self.mock_target(association) else {
                    continue;
                };

                let nested = self.mock_attributes(target, Attributes::new(), false, rng)?;
                let model = self.entry(target).model.name();
                attributes.insert(
                    association.name.clone(),
                    Instance::new(Name::new(model), nested),
                );
            }
        }

        attributes.merge(overrides);

        tracing::trace!(
            model = %schema.name,
            attributes = attributes.len(),
            recursive,
            "generated mock"
        );

        Ok(attributes)
    }

    /// Resolve the model a mock of `association` should be generated for.
    ///
    /// Returns `None` when the target cannot be mocked: the association is
    /// polymorphic, its target is not registered, or the target has no
    /// structure.
    pub fn mock_target(&self, association: &Association) -> Option<ModelId> {
        let Some(target) = &association.target else {
            tracing::trace!(
                association = %association.name,
                "skipping polymorphic association"
            );
            return None;
        };

        let Some(id) = self.lookup(target) else {
            tracing::trace!(
                association = %association.name,
                target = %target,
                "skipping association; target is not registered"
            );
            return None;
        };

        if self.entry(id).schema.is_none() {
            tracing::trace!(
                association = %association.name,
                target = %target,
                "skipping association; target has no structure"
            );
            return None;
        }

        Some(id)
    }
}
