use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn join_model_has_no_columns() {
    let registry = shop().build().unwrap();
    let tagging = registry.schema::<Tagging>().unwrap();

    assert!(tagging.columns().is_empty());
    assert!(tagging.declared().is_empty());
}

#[test]
fn join_model_reflects_its_associations() {
    let registry = shop().build().unwrap();
    let tagging = registry.schema::<Tagging>().unwrap();

    let associations: Vec<_> = tagging
        .associations()
        .map(|association| (association.name.as_str(), association.kind))
        .collect();

    assert_eq!(
        associations,
        [
            ("post", AssociationKind::BelongsTo),
            ("tag", AssociationKind::BelongsTo),
        ]
    );

    let keys: Vec<_> = tagging.foreign_keys().keys().map(String::as_str).collect();
    assert_eq!(keys, ["post_id", "tag_id"]);

    for key in tagging.foreign_keys().values() {
        assert_eq!(key.ty, DataType::ForeignKey);
        assert!(key.nullable);
    }
}

#[test]
fn join_model_mock_carries_only_nested_instances() {
    let registry = shop().build().unwrap();
    let id = registry.model_id::<Tagging>().unwrap();

    let attributes = registry
        .mock_attributes(id, Attributes::new(), true, &mut seeded_rng(3))
        .unwrap();

    assert_eq!(attributes.keys().collect::<Vec<_>>(), ["post", "tag"]);
    assert!(attributes.iter().all(|(_, value)| value.is_instance()));

    let attributes = registry
        .mock_attributes(id, Attributes::new(), false, &mut seeded_rng(3))
        .unwrap();
    assert!(attributes.is_empty());
}

#[test]
fn registered_model_is_distinct_from_an_empty_structure() {
    let registry = Registry::builder()
        .register::<Tagging>()
        .build()
        .unwrap();

    assert!(registry.schema::<Tagging>().is_none());
    assert!(registry
        .mock::<Tagging>(Attributes::new(), false)
        .unwrap_err()
        .is_missing_structure());
}
