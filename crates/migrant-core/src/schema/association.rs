use super::Name;

/// The kind of an association, as reported by the host ORM's reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

/// An association between two models.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    /// Name of the association; also the attribute a nested mock is stored under
    pub name: String,

    /// Belongs-to, has-many, ...
    pub kind: AssociationKind,

    /// Name of the associated model. `None` for polymorphic associations, whose
    /// target is only known per row.
    pub target: Option<Name>,

    /// Column holding the key. For `belongs_to` it lives on the declaring
    /// model, for the `has_*` kinds on the target.
    pub foreign_key: String,

    /// True for a polymorphic `belongs_to`.
    pub polymorphic: bool,
}

impl Association {
    /// `belongs_to :customer` targets `Customer` through `customer_id`.
    pub fn belongs_to(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: AssociationKind::BelongsTo,
            target: Some(Name::new(name)),
            foreign_key: format!("{}_id", Name::new(name).snake_case()),
            polymorphic: false,
        }
    }

    /// `has_one :profile` targets `Profile`.
    pub fn has_one(name: &str) -> Self {
        Self::collection(name, AssociationKind::HasOne, Name::new(name))
    }

    /// `has_many :comments` targets `Comment`.
    pub fn has_many(name: &str) -> Self {
        Self::collection(name, AssociationKind::HasMany, Name::new(name).singularize())
    }

    /// `has_and_belongs_to_many :tags` targets `Tag`.
    pub fn has_and_belongs_to_many(name: &str) -> Self {
        Self::collection(
            name,
            AssociationKind::HasAndBelongsToMany,
            Name::new(name).singularize(),
        )
    }

    fn collection(name: &str, kind: AssociationKind, target: Name) -> Self {
        Self {
            name: name.to_string(),
            kind,
            foreign_key: String::new(),
            target: Some(target),
            polymorphic: false,
        }
    }

    /// Override the inferred target model.
    pub fn class_name(mut self, target: &str) -> Self {
        self.target = Some(Name::new(target));
        self
    }

    /// Override the inferred foreign key column.
    pub fn foreign_key(mut self, column: &str) -> Self {
        self.foreign_key = column.to_string();
        self
    }

    /// Make a `belongs_to` polymorphic: the target is stored per row in a
    /// `<name>_type` column.
    pub fn polymorphic(mut self) -> Self {
        debug_assert!(self.is_belongs_to(), "only `belongs_to` can be polymorphic");
        self.polymorphic = true;
        self.target = None;
        self
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self.kind, AssociationKind::BelongsTo)
    }

    /// Name of the type column of a polymorphic association.
    pub fn type_column(&self) -> Option<String> {
        self.polymorphic
            .then(|| format!("{}_type", Name::new(&self.name).snake_case()))
    }
}
