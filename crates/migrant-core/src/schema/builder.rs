use super::{
    Association, DataType, Field, Index, InheritedSchema, ModelId, Name, Schema, SchemaKind,
    Structure,
};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Decides where fields declared by a single-table-inheritance subclass are
/// visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubclassColumns {
    /// Subclass fields also become columns of every ancestor, since they all
    /// share one table. Siblings still only see their own inheritance line.
    #[default]
    Cascade,

    /// Subclass fields stay on the subclass.
    Scoped,
}

/// Everything known about a model before its schema is assembled.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Name of the model
    pub name: Name,

    /// Superclass, for single-table-inheritance subclasses
    pub parent: Option<ModelId>,

    /// Associations reported by the host ORM
    pub associations: Vec<Association>,

    /// Declared fields. `None` if the model never declared a structure.
    pub structure: Option<Structure>,
}

/// Assembles [`Schema`]s from a set of declarations.
#[derive(Debug, Default)]
pub struct Builder {
    declarations: Vec<Declaration>,
    subclass_columns: SubclassColumns,
}

/// Columns, associations and indexes contributed by one model on its own.
#[derive(Debug, Default)]
struct Own {
    columns: IndexMap<String, Field>,
    foreign_keys: IndexMap<String, Field>,
    associations: IndexMap<String, Association>,
    indexes: Vec<Index>,
}

impl Builder {
    /// Add a declaration, returning the id it will be registered under.
    pub fn declare(&mut self, declaration: Declaration) -> ModelId {
        let id = ModelId(self.declarations.len());
        self.declarations.push(declaration);
        id
    }

    pub fn subclass_columns(&mut self, subclass_columns: SubclassColumns) -> &mut Self {
        self.subclass_columns = subclass_columns;
        self
    }

    /// Assemble the schemas. The result is indexed by [`ModelId`]; models
    /// without a structure get `None`.
    pub fn build(mut self) -> Result<Vec<Option<Arc<Schema>>>> {
        self.verify_inheritance()?;
        self.cascade_structures();

        let own = self
            .declarations
            .iter()
            .map(|declaration| match &declaration.structure {
                Some(structure) => own_columns(declaration, structure).map(Some),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>>>()?;

        self.verify_association_names(&own)?;

        let mut schemas = vec![None; self.declarations.len()];
        for index in 0..self.declarations.len() {
            self.build_schema(ModelId(index), &own, &mut schemas);
        }

        Ok(schemas)
    }

    /// Reject unknown parents and inheritance cycles.
    fn verify_inheritance(&self) -> Result<()> {
        let len = self.declarations.len();

        for (index, declaration) in self.declarations.iter().enumerate() {
            let mut steps = 0;
            let mut curr = declaration.parent;

            while let Some(parent) = curr {
                let Some(parent_declaration) = self.declarations.get(parent.index()) else {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` inherits from {parent:?}, which was not declared",
                        self.declarations[index].name
                    )));
                };

                steps += 1;
                if parent.index() == index || steps > len {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` inherits from itself",
                        declaration.name
                    )));
                }

                curr = parent_declaration.parent;
            }
        }

        Ok(())
    }

    /// Reject a declared field named after a `belongs_to` association anywhere
    /// on the same inheritance line. The association's attribute holds the
    /// nested mock, so the two would collide.
    fn verify_association_names(&self, own: &[Option<Own>]) -> Result<()> {
        for index in 0..self.declarations.len() {
            let Some(model) = &own[index] else {
                continue;
            };

            for ancestor in self.lineage(ModelId(index)) {
                let Some(ancestor) = &own[ancestor.index()] else {
                    continue;
                };

                let shadowed = ancestor
                    .associations
                    .values()
                    .filter(|association| association.is_belongs_to())
                    .find(|association| model.columns.contains_key(&association.name));

                if let Some(association) = shadowed {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` has the same name as a `belongs_to` association",
                        self.declarations[index].name, association.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// A subclass declaring a structure declares one on each ancestor as well,
    /// even if the ancestor never did so itself.
    fn cascade_structures(&mut self) {
        for index in 0..self.declarations.len() {
            if self.declarations[index].structure.is_none() {
                continue;
            }

            let mut curr = self.declarations[index].parent;
            while let Some(parent) = curr {
                let parent = &mut self.declarations[parent.index()];
                parent.structure.get_or_insert_with(Structure::default);
                curr = parent.parent;
            }
        }
    }

    /// Returns true if `ancestor` appears on `model`'s inheritance line.
    fn inherits_from(&self, model: ModelId, ancestor: ModelId) -> bool {
        let mut curr = self.declarations[model.index()].parent;
        while let Some(parent) = curr {
            if parent == ancestor {
                return true;
            }
            curr = self.declarations[parent.index()].parent;
        }
        false
    }

    /// The inheritance line ending at `model`, base model first.
    fn lineage(&self, model: ModelId) -> Vec<ModelId> {
        let mut lineage = vec![model];
        let mut curr = self.declarations[model.index()].parent;
        while let Some(parent) = curr {
            lineage.push(parent);
            curr = self.declarations[parent.index()].parent;
        }
        lineage.reverse();
        lineage
    }

    fn build_schema(
        &self,
        id: ModelId,
        own: &[Option<Own>],
        schemas: &mut [Option<Arc<Schema>>],
    ) -> Option<Arc<Schema>> {
        if let Some(schema) = &schemas[id.index()] {
            return Some(schema.clone());
        }

        if own[id.index()].is_none() {
            return None;
        }

        let declaration = &self.declarations[id.index()];

        let parent = declaration
            .parent
            .and_then(|parent| self.build_schema(parent, own, schemas));

        let mut declared = IndexMap::new();
        let mut foreign_keys = IndexMap::new();
        let mut associations = IndexMap::new();
        let mut indexes = vec![];

        // Later entries on the line override earlier ones by name
        for ancestor in self.lineage(id) {
            let Some(ancestor) = &own[ancestor.index()] else {
                continue;
            };

            declared.extend(ancestor.columns.clone());
            foreign_keys.extend(ancestor.foreign_keys.clone());
            associations.extend(ancestor.associations.clone());
            extend_indexes(&mut indexes, &ancestor.indexes);
        }

        let mut columns = declared.clone();

        if self.subclass_columns == SubclassColumns::Cascade {
            for (index, descendant) in own.iter().enumerate() {
                let Some(descendant) = descendant else {
                    continue;
                };

                if !self.inherits_from(ModelId(index), id) {
                    continue;
                }

                for (name, field) in &descendant.columns {
                    columns
                        .entry(name.clone())
                        .or_insert_with(|| field.clone());
                }
                for (name, field) in &descendant.foreign_keys {
                    foreign_keys
                        .entry(name.clone())
                        .or_insert_with(|| field.clone());
                }
                extend_indexes(&mut indexes, &descendant.indexes);
            }
        }

        let kind = match parent {
            Some(parent) => SchemaKind::Inherited(InheritedSchema { parent }),
            None => SchemaKind::Base,
        };

        tracing::debug!(
            model = %declaration.name,
            columns = columns.len(),
            associations = associations.len(),
            inherited = matches!(kind, SchemaKind::Inherited(_)),
            "built schema"
        );

        let schema = Arc::new(Schema {
            id,
            name: declaration.name.clone(),
            kind,
            declared,
            columns,
            foreign_keys,
            associations,
            indexes,
        });

        schemas[id.index()] = Some(schema.clone());
        Some(schema)
    }
}

/// Key columns of the model's `belongs_to` associations and its declared
/// fields. A declared field replaces a key column of the same name.
fn own_columns(declaration: &Declaration, structure: &Structure) -> Result<Own> {
    let mut own = Own::default();

    for association in &declaration.associations {
        own.associations
            .insert(association.name.clone(), association.clone());

        if !association.is_belongs_to() || association.foreign_key.is_empty() {
            continue;
        }

        let mut index = Vec::with_capacity(2);

        if let Some(type_column) = association.type_column() {
            own.foreign_keys.insert(
                type_column.clone(),
                Field::association_column(type_column.clone(), DataType::Polymorphic),
            );
            index.push(type_column);
        }

        own.foreign_keys.insert(
            association.foreign_key.clone(),
            Field::association_column(association.foreign_key.clone(), DataType::ForeignKey),
        );
        index.push(association.foreign_key.clone());

        extend_indexes(&mut own.indexes, &[Index::new(index)]);
    }

    let (fields, errors) = structure.clone().into_parts();

    if let Some(message) = errors.into_iter().next() {
        return Err(Error::invalid_schema(format!(
            "model `{}`: {message}",
            declaration.name
        )));
    }

    for (name, field) in fields {
        verify_values(declaration, &field)?;

        if field.index {
            extend_indexes(&mut own.indexes, &[Index::single(&name)]);
        }

        own.foreign_keys.shift_remove(&name);
        own.columns.insert(name, field);
    }

    Ok(own)
}

/// The example and default of a field must fit its declared type.
fn verify_values(declaration: &Declaration, field: &Field) -> Result<()> {
    for (what, value) in [("example", &field.example), ("default", &field.default)] {
        let Some(value) = value else {
            continue;
        };

        if value.is_null() && !field.nullable {
            return Err(Error::invalid_schema(format!(
                "field `{}::{}` has a null {what} but is not nullable",
                declaration.name, field.name
            )));
        }

        if !field.ty.accepts(value) {
            return Err(Error::invalid_schema(format!(
                "field `{}::{}` is declared as {} but its {what} has type {}",
                declaration.name,
                field.name,
                field.ty,
                value.ty_name()
            )));
        }
    }

    Ok(())
}

fn extend_indexes(indexes: &mut Vec<Index>, other: &[Index]) {
    for index in other {
        if !indexes.contains(index) {
            indexes.push(index.clone());
        }
    }
}
