use datamapper::{record, Criteria, Options, Outcome};
use pretty_assertions::assert_eq;
use tests::{models::User, MapperTest, Operation, Stub};

#[tokio::test]
async fn empty_result_yields_empty_vec() {
    let mut test = MapperTest::stub(Stub::new());

    let users = test
        .mapper
        .find_all::<User>(&Criteria::new(), &Options::new())
        .await
        .unwrap();

    assert!(users.is_empty());
    assert!(matches!(test.log().pop_op(), Operation::FindAll { .. }));
}

#[tokio::test]
async fn preserves_connector_order_and_runs_hook_per_instance() {
    let test = MapperTest::stub(Stub::new().find_all_returns(vec![
        record! { "id" => 3, "firstName" => "C" },
        record! { "id" => 1, "firstName" => "A" },
        record! { "id" => 2, "firstName" => "B" },
    ]));

    let users = test
        .mapper
        .find_all::<User>(&Criteria::new(), &Options::new().set("scope", "all"))
        .await
        .unwrap();

    let ids: Vec<_> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, [Some(3), Some(1), Some(2)]);

    for user in &users {
        assert_eq!(user.hooks.names(), ["on_after_find"]);
        assert_eq!(
            user.hooks.options_for("on_after_find"),
            Some(&Options::new().set("scope", "all"))
        );
    }
}

#[tokio::test]
async fn call_options_layer_over_default_options() {
    let mut test = MapperTest::with_default_options(
        Stub::new(),
        Options::new().set("tenant", "acme").set("page", 1),
    );

    test.mapper
        .find_all::<User>(&Criteria::new(), &Options::new().set("page", 2))
        .await
        .unwrap();

    let Operation::FindAll { options, .. } = test.log().pop_op() else {
        panic!("expected a find_all");
    };
    assert_eq!(options.settings, record! { "tenant" => "acme", "page" => 2 });
}

#[tokio::test]
async fn malformed_record_fails_to_decode() {
    let test = MapperTest::stub(Stub::new().find_all_returns(vec![record! { "id" => "oops" }]));

    let err = test
        .mapper
        .find_all::<User>(&Criteria::new(), &Options::new())
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn each_call_reaches_the_connector_once() {
    let mut test = MapperTest::memory();
    let mut user = User::new("Tan", "Nguyen");

    let outcome = test
        .mapper
        .create(&mut user, &Options::new())
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Done);
    test.log().clear();

    for _ in 0..2 {
        let users = test
            .mapper
            .find_all::<User>(&Criteria::new(), &Options::new())
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    assert_eq!(test.log().len(), 2);
    assert_eq!(
        test.log()
            .count(|op| matches!(op, Operation::FindAll { .. })),
        2
    );
    test.log()
        .with_ops(|ops| assert!(ops.iter().all(|op| op.succeeded)));
}
