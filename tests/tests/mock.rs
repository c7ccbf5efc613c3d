use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tests::prelude::*;

#[test]
fn every_declared_field_gets_a_value_of_its_type() {
    init_logging();

    let registry = shop().build().unwrap();
    let attributes = registry
        .mock_attributes(
            registry.model_id::<Order>().unwrap(),
            Attributes::new(),
            false,
            &mut seeded_rng(1),
        )
        .unwrap();

    assert!(matches!(attributes.get("total"), Some(Value::Decimal(_))));
    assert!(matches!(attributes.get("placed_on"), Some(Value::Date(_))));
    assert!(!attributes.contains("customer_id"));
    assert!(!attributes.contains("customer"));
}

#[test]
fn mock_constructs_the_model() {
    let registry = shop().build().unwrap();

    let post: Post = registry.mock(Attributes::new(), true).unwrap();
    assert!(!post.title.is_empty());

    let customer: Customer = registry.mock(Attributes::new(), true).unwrap();
    assert_eq!(customer.email, "jane@example.com");
}

#[test]
fn overrides_take_precedence() {
    let registry = shop().build().unwrap();
    let total = Decimal::new(4_250, 2);

    let order: Order = registry
        .mock(
            Attributes::new()
                .with("total", total)
                .with("customer_id", 7),
            true,
        )
        .unwrap();

    assert_eq!(order.total, total);
    assert_eq!(order.customer_id, Some(7));
}

#[test]
fn override_replaces_a_nested_mock() {
    let registry = shop().build().unwrap();

    let order: Order = registry
        .mock(Attributes::new().with("customer", Value::Null), true)
        .unwrap();

    assert_eq!(order.customer, None);
}

#[test]
fn non_recursive_mock_leaves_associations_empty() {
    let registry = shop().build().unwrap();

    let order: Order = registry.mock(Attributes::new(), false).unwrap();
    assert_eq!(order.customer, None);

    let tagging: Tagging = registry.mock(Attributes::new(), false).unwrap();
    assert_eq!(tagging, Tagging { post: None, tag: None });
}

#[test]
fn recursive_mock_populates_belongs_to() {
    let registry = shop().build().unwrap();

    let order: Order = registry.mock(Attributes::new(), true).unwrap();
    let customer = order.customer.unwrap();
    assert_eq!(customer.email, "jane@example.com");

    let tagging: Tagging = registry.mock(Attributes::new(), true).unwrap();
    assert!(tagging.post.is_some());
    assert!(tagging.tag.is_some());
}

#[test]
fn nested_mocks_do_not_recurse() {
    let registry = Registry::builder()
        .structure::<Employee>(|s| {
            s.string("name");
        })
        .build()
        .unwrap();

    let employee: Employee = registry.mock(Attributes::new(), true).unwrap();
    let manager = employee.manager.unwrap();
    assert_eq!(manager.manager, None);

    let instance = registry
        .mock_instance("Employee", Attributes::new(), true)
        .unwrap();
    let manager = instance.get("manager").unwrap().expect_instance();
    assert!(manager.get("name").is_some());
    assert!(manager.get("manager").is_none());
}

#[test]
fn target_without_structure_is_skipped() {
    let registry = Registry::builder()
        .register::<Customer>()
        .structure::<Order>(|s| {
            s.decimal("total");
            s.date("placed_on");
        })
        .build()
        .unwrap();

    let order: Order = registry.mock(Attributes::new(), true).unwrap();
    assert_eq!(order.customer, None);

    let customer = registry.schema::<Order>().unwrap().association("customer").unwrap();
    assert_eq!(registry.mock_target(customer), None);
}

#[test]
fn unregistered_target_is_skipped() {
    let registry = Registry::builder()
        .structure::<Invoice>(|s| {
            s.integer("number");
        })
        .build()
        .unwrap();

    let invoice: Invoice = registry.mock(Attributes::new(), true).unwrap();
    assert!((0..1000).contains(&invoice.number));
}

#[test]
fn polymorphic_target_is_skipped() {
    let registry = shop().build().unwrap();

    let comment: Comment = registry.mock(Attributes::new(), true).unwrap();
    assert!(!comment.body.is_empty());
    assert!(comment.author.is_some());

    let commentable = registry
        .schema::<Comment>()
        .unwrap()
        .association("commentable")
        .unwrap();
    assert_eq!(registry.mock_target(commentable), None);
}

#[test]
fn subclass_mock_includes_inherited_fields() {
    let registry = fleet().build().unwrap();

    let car: Car = registry.mock(Attributes::new(), true).unwrap();
    assert!((0..1000).contains(&car.doors));
    assert!(!car.color.is_empty());
    assert!(car.top_speed.is_some());
    assert_eq!(car.owner, None);

    let vehicle: Vehicle = registry.mock(Attributes::new(), true).unwrap();
    assert!(vehicle.doors.is_some());
    assert!(vehicle.basket.is_some());
}

#[test]
fn subclass_mock_follows_inherited_associations() {
    let mut builder = fleet();
    builder.structure::<Customer>(|s| {
        s.string("name");
        s.string("email");
        s.boolean("vip");
    });
    let registry = builder.build().unwrap();

    let car: Car = registry.mock(Attributes::new(), true).unwrap();
    assert!(car.owner.is_some());
}

#[test]
fn unknown_override_propagates() {
    let registry = shop().build().unwrap();

    let err = registry
        .mock::<Tag>(Attributes::new().with("colour", "red"), true)
        .unwrap_err();

    assert!(err.is_unknown_attribute());
    assert_eq!(err.to_string(), "Tag::load(): unknown attribute `colour`");
}

#[test]
fn mistyped_override_propagates() {
    let registry = shop().build().unwrap();

    let err = registry
        .mock::<Order>(Attributes::new().with("total", "a lot"), true)
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "Order::load(): attribute `total`: cannot convert string to Decimal"
    );
}

#[test]
fn model_without_structure_cannot_be_mocked() {
    let registry = Registry::builder().register::<Customer>().build().unwrap();

    let err = registry.mock::<Customer>(Attributes::new(), true).unwrap_err();
    assert!(err.is_missing_structure());

    let err = registry.mock::<Order>(Attributes::new(), true).unwrap_err();
    assert!(err.is_missing_structure());

    let err = registry
        .mock_instance("Supplier", Attributes::new(), true)
        .unwrap_err();
    assert!(err.is_missing_structure());
}

#[test]
fn seeded_mocks_are_reproducible() {
    let registry = shop().build().unwrap();

    let a: Order = registry
        .mock_with_rng(Attributes::new(), true, &mut seeded_rng(42))
        .unwrap();
    let b: Order = registry
        .mock_with_rng(Attributes::new(), true, &mut seeded_rng(42))
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn mocks_can_be_generated_concurrently() {
    let registry = shop().build().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| registry.mock::<Order>(Attributes::new(), true)))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    });
}

#[test]
fn mock_instance_is_type_erased() {
    let registry = shop().build().unwrap();

    let instance = registry
        .mock_instance("order", Attributes::new(), true)
        .unwrap();

    assert_eq!(instance.model.upper_camel_case(), "Order");
    let customer = instance.get("customer").unwrap().expect_instance();
    assert_eq!(customer.model.upper_camel_case(), "Customer");
    assert_eq!(customer.get("email"), Some(&Value::from("jane@example.com")));
}
