use datamapper::{record, Criteria, Options, Value};
use pretty_assertions::assert_eq;
use tests::{models::Article, models::User, MapperTest, Operation, Stub};

fn tan() -> datamapper::Record {
    record! { "id" => 1, "firstName" => "Tan", "lastName" => "Nguyen" }
}

#[tokio::test]
async fn find_returns_none_when_nothing_matches() {
    let mut test = MapperTest::stub(Stub::new());
    let criteria = Criteria::by_key("firstName", "Nobody");

    let found = test
        .mapper
        .find::<User>(&criteria, &Options::new())
        .await
        .unwrap();

    assert!(found.is_none());
    assert_eq!(
        test.log().pop_op(),
        Operation::Find {
            model: "test".into(),
            criteria,
            options: Options::new(),
        }
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn find_builds_instance_and_runs_after_find_once() {
    let test = MapperTest::stub(Stub::new().find_returns(tan()));

    let user = test
        .mapper
        .find::<User>(&Criteria::by_key("firstName", "Tan"), &Options::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(user.first_name, "Tan");
    assert_eq!(user.last_name, "Nguyen");
    assert_eq!(user.hooks.names(), ["on_after_find"]);
}

#[tokio::test]
async fn find_by_pk_looks_up_where_primary_key() {
    let mut test = MapperTest::stub(Stub::new().find_returns(tan()));
    let options = Options::new().set("random", "stuff");

    let user = test
        .mapper
        .find_by_pk::<User>(1, &options)
        .await
        .unwrap()
        .unwrap();

    let expected = options.with_primary_key("id", 1);
    assert_eq!(
        test.log().pop_op(),
        Operation::Find {
            model: "test".into(),
            criteria: Criteria::by_key("id", 1),
            options: expected.clone(),
        }
    );
    assert_eq!(user.hooks.options_for("on_after_find"), Some(&expected));

    // The caller's options are left as they were
    assert_eq!(options.primary_key, None);
}

#[tokio::test]
async fn find_by_pk_uses_model_primary_key() {
    let mut test = MapperTest::stub(
        Stub::new().find_returns(record! { "slug" => "hello", "title" => "Hello" }),
    );

    let article = test
        .mapper
        .find_by_pk::<Article>("hello", &Options::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.title, "Hello");

    let Operation::Find {
        criteria, options, ..
    } = test.log().pop_op()
    else {
        panic!("expected a find");
    };
    assert_eq!(criteria.filter, record! { "slug" => "hello" });
    assert_eq!(options.primary_key.as_deref(), Some("slug"));
    assert_eq!(options.primary_key_value, Some(Value::from("hello")));
}

#[tokio::test]
async fn find_one_reads_through_find_all_with_limit_one() {
    let mut test = MapperTest::stub(Stub::new().find_all_returns(vec![
        tan(),
        record! { "id" => 2, "firstName" => "Minh", "lastName" => "Nguyen" },
    ]));

    let user = test
        .mapper
        .find_one::<User>(
            &Criteria::by_key("lastName", "Nguyen").limit(5),
            &Options::new(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(
        test.log().pop_op(),
        Operation::FindAll {
            model: "test".into(),
            criteria: Criteria::by_key("lastName", "Nguyen").limit(1),
            options: Options::new(),
        }
    );
}

#[tokio::test]
async fn find_one_returns_none_on_empty_result() {
    let test = MapperTest::stub(Stub::new());

    let user = test
        .mapper
        .find_one::<User>(&Criteria::new(), &Options::new())
        .await
        .unwrap();

    assert!(user.is_none());
}
