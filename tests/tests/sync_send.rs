use datamapper::{Criteria, Mapper, Options, Outcome};
use tests::{models::User, MapperTest};

fn assert_sync_send<T: Send>(val: T) -> T {
    val
}

fn assert_shareable<T: Send + Sync + Clone + 'static>() {}

#[tokio::test]
async fn ensure_types_sync_send() {
    assert_shareable::<Mapper>();

    let test = MapperTest::memory();
    let options = Options::new();

    let mut user = User::new("Tan", "Nguyen");
    let outcome = assert_sync_send(test.mapper.create(&mut user, &options))
        .await
        .unwrap();
    assert!(outcome.is_done());

    let users = assert_sync_send(test.mapper.find_all::<User>(&Criteria::new(), &options))
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn mapper_moves_across_tasks() {
    let test = MapperTest::memory();
    let mapper = test.mapper.clone();

    let handle = tokio::spawn(async move {
        let mut user = User::new("Tan", "Nguyen");
        let outcome = mapper.create(&mut user, &Options::new()).await.unwrap();
        (outcome, user.id)
    });

    assert_eq!(handle.await.unwrap(), (Outcome::Done, Some(1)));
}
