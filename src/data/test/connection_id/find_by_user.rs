use super::*;

/// Tests fetching all connection records of one user.
///
/// A user with two open sessions has two rows; another user's row is not
/// included.
///
/// Expected: Ok with exactly the user's two records
#[tokio::test]
async fn returns_only_the_users_connections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::connection_id::create_connection_with_id(db, user.id, "conn-a").await?;
    factory::connection_id::create_connection_with_id(db, user.id, "conn-b").await?;
    factory::connection_id::create_connection_with_id(db, other.id, "conn-c").await?;

    let repo = ConnectionIdRepository::new(db);
    let connections = repo.find_by_user(user.id).await?;

    let mut ids: Vec<String> = connections.into_iter().map(|c| c.connection_id).collect();
    ids.sort();
    assert_eq!(ids, vec!["conn-a".to_string(), "conn-b".to_string()]);

    Ok(())
}

/// Tests fetching connections for a user with none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_user_without_connections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ConnectionIdRepository::new(db);
    let connections = repo.find_by_user(user.id).await?;

    assert!(connections.is_empty());

    Ok(())
}
