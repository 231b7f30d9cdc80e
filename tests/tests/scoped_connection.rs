use pretty_assertions::assert_eq;
use rowbind::{bail, driver::Response, Result};
use tests::setup;

#[tokio::test]
async fn one_connection_for_many_operations() {
    let (db, log, driver) = setup();
    driver
        .respond(Response::count(1))
        .respond(Response::scalar(42));

    let value = db
        .with_connection(|session| async move {
            session.command("DELETE FROM Logs").exec_non_query().await?;
            session.command("SELECT COUNT(*) FROM Logs").exec_scalar().await
        })
        .await
        .unwrap();

    assert_eq!(value, 42.into());
    assert_eq!(log.queries().len(), 2);
    assert_eq!((log.connects(), log.closes()), (1, 1));
}

#[tokio::test]
async fn closes_after_early_return() {
    let (db, log, _driver) = setup();

    let res: Result<()> = db
        .with_connection(|session| async move {
            session.command("SELECT 1").exec_rows().await?;
            bail!("stop here");
        })
        .await;

    assert_eq!(res.unwrap_err().to_string(), "stop here");
    assert_eq!((log.connects(), log.closes()), (1, 1));
}

#[tokio::test]
async fn close_error_after_success_is_returned() {
    let (db, log, driver) = setup();
    driver.fail_close();

    let err = db.command("SELECT 1").exec_non_query().await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "close failed");
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn operation_error_wins_over_close_error() {
    let (db, log, driver) = setup();
    driver.fail_close().fail_next("timeout");

    let err = db.command("SELECT 1").exec_non_query().await.unwrap_err();

    assert_eq!(err.to_string(), "timeout");
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn connect_failure_never_runs_the_operation() {
    let (db, log, driver) = setup();
    driver.fail_connect();

    let err = db.command("SELECT 1").exec_rows().await.unwrap_err();

    assert_eq!(err.to_string(), "connection refused");
    assert!(log.is_empty());
    assert_eq!(log.closes(), 0);
}

#[tokio::test]
async fn each_db_operation_gets_its_own_connection() {
    let (db, log, _driver) = setup();

    db.command("SELECT 1").exec_rows().await.unwrap();
    db.command("SELECT 2").exec_rows().await.unwrap();

    assert_eq!(log.sql(), ["SELECT 1", "SELECT 2"]);
    assert_eq!((log.connects(), log.closes()), (2, 2));
}

fn assert_send<T: Send>(val: T) -> T {
    val
}

#[tokio::test]
async fn futures_are_send() {
    let (db, _log, _driver) = setup();

    assert_send(db.command("SELECT 1").exec_rows()).await.unwrap();
    assert_send(db.with_connection(|session| async move { session.command("SELECT 1").exec_scalar().await }))
        .await
        .unwrap();
}
