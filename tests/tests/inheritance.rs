use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::prelude::*;

#[test]
fn subclass_fields_cascade_onto_the_superclass() {
    init_logging();

    let registry = fleet().build().unwrap();
    let vehicle = registry.schema::<Vehicle>().unwrap();

    assert_eq!(
        column_names(vehicle),
        ["wheels", "color", "doors", "basket", "top_speed"]
    );
    assert_eq!(vehicle.field("doors").unwrap().ty, DataType::Integer);
    assert_eq!(declared_names(vehicle), ["wheels", "color"]);
}

#[test]
fn subclass_schema_is_the_union_of_inherited_and_local_fields() {
    let registry = fleet().build().unwrap();
    let car = registry.schema::<Car>().unwrap();

    assert!(car.is_inherited());
    assert!(Arc::ptr_eq(
        car.parent().unwrap(),
        registry.schema::<Vehicle>().unwrap()
    ));

    // `top_speed` cascades up from `SportsCar`; `basket` belongs to a sibling
    assert_eq!(column_names(car), ["wheels", "color", "doors", "top_speed"]);
    assert_eq!(declared_names(car), ["wheels", "color", "doors"]);
}

#[test]
fn sibling_fields_do_not_leak() {
    let registry = fleet().build().unwrap();
    let bike = registry.schema::<Bike>().unwrap();

    assert_eq!(column_names(bike), ["wheels", "color", "basket"]);
    assert!(bike.field("doors").is_none());
}

#[test]
fn multi_level_inheritance_walks_to_the_base() {
    let registry = fleet().build().unwrap();
    let sports_car = registry.schema::<SportsCar>().unwrap();

    assert_eq!(
        column_names(sports_car),
        ["wheels", "color", "doors", "top_speed"]
    );
    assert_eq!(sports_car.base().name.upper_camel_case(), "Vehicle");
    assert_eq!(
        sports_car.parent().unwrap().name.upper_camel_case(),
        "Car"
    );
}

#[test]
fn local_declarations_take_precedence() {
    let registry = Registry::builder()
        .structure::<Vehicle>(|s| {
            s.integer("wheels");
            s.string("color");
        })
        .structure::<Bike>(|s| {
            s.example("wheels", 2);
            s.boolean("basket");
        })
        .build()
        .unwrap();

    let bike = registry.schema::<Bike>().unwrap();
    assert_eq!(bike.field("wheels").unwrap().example, Some(Value::I64(2)));

    // The base keeps its own declaration of a name it already has
    let vehicle = registry.schema::<Vehicle>().unwrap();
    assert_eq!(vehicle.field("wheels").unwrap().example, None);
}

#[test]
fn subclass_declaration_gives_the_superclass_a_schema() {
    let registry = Registry::builder()
        .structure::<Car>(|s| {
            s.integer("doors");
        })
        .build()
        .unwrap();

    let vehicle = registry.schema::<Vehicle>().unwrap();
    assert_eq!(column_names(vehicle), ["doors"]);
    assert!(vehicle.association("owner").is_some());
    assert!(vehicle.foreign_keys().contains_key("owner_id"));
}

#[test]
fn associations_are_inherited() {
    let registry = fleet().build().unwrap();
    let car = registry.schema::<Car>().unwrap();

    assert_eq!(car.belongs_to().count(), 1);
    assert!(car.foreign_keys().contains_key("owner_id"));
}

#[test]
fn scoped_subclass_columns_stay_on_the_subclass() {
    let registry = fleet()
        .subclass_columns(SubclassColumns::Scoped)
        .build()
        .unwrap();

    let vehicle = registry.schema::<Vehicle>().unwrap();
    assert_eq!(column_names(vehicle), ["wheels", "color"]);

    let car = registry.schema::<Car>().unwrap();
    assert_eq!(column_names(car), ["wheels", "color", "doors"]);
}

#[test]
fn subclasses_may_be_declared_before_their_parents() {
    let registry = Registry::builder()
        .structure::<SportsCar>(|s| {
            s.float("top_speed");
        })
        .structure::<Vehicle>(|s| {
            s.integer("wheels");
        })
        .structure::<Car>(|s| {
            s.integer("doors");
        })
        .build()
        .unwrap();

    assert_eq!(
        column_names(registry.schema::<SportsCar>().unwrap()),
        ["wheels", "doors", "top_speed"]
    );
    // Cascaded columns follow registration order
    assert_eq!(
        column_names(registry.schema::<Vehicle>().unwrap()),
        ["wheels", "top_speed", "doors"]
    );
}

struct Ouroboros;
struct Serpent;

impl Model for Ouroboros {
    const NAME: &'static str = "Ouroboros";

    fn inherits() -> Option<ModelRef> {
        Some(ModelRef::of::<Serpent>())
    }

    fn load(_: Attributes) -> Result<Self> {
        Ok(Ouroboros)
    }
}

impl Model for Serpent {
    const NAME: &'static str = "Serpent";

    fn inherits() -> Option<ModelRef> {
        Some(ModelRef::of::<Ouroboros>())
    }

    fn load(_: Attributes) -> Result<Self> {
        Ok(Serpent)
    }
}

#[test]
fn inheritance_cycles_are_rejected() {
    let err = Registry::builder()
        .no_structure::<Ouroboros>()
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("inherits from itself"));
}

#[test]
fn subclass_field_cannot_shadow_an_inherited_belongs_to() {
    for mode in [SubclassColumns::Cascade, SubclassColumns::Scoped] {
        let err = fleet()
            .subclass_columns(mode)
            .structure::<Car>(|s| {
                s.string("owner");
            })
            .build()
            .unwrap_err();

        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: field `Car::owner` has the same name as a `belongs_to` association"
        );
    }
}

#[test]
fn deep_subclass_field_cannot_shadow_an_inherited_belongs_to() {
    let err = Registry::builder()
        .structure::<SportsCar>(|s| {
            s.string("owner");
        })
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid schema: field `SportsCar::owner` has the same name as a `belongs_to` association"
    );
}
