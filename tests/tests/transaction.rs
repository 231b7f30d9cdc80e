use pretty_assertions::assert_eq;
use rowbind::{
    driver::{Response, Transaction},
    err, Fields, Filter,
};
use tests::setup;

#[derive(Debug, Default, rowbind::Model)]
struct Account {
    #[key]
    #[rename("AccountId")]
    id: i64,

    balance: i64,
}

#[tokio::test]
async fn commits_after_handler() {
    let (db, log, driver) = setup();
    driver.respond(Response::count(1)).respond(Response::count(1));

    let moved = db
        .transaction(|tx| async move {
            let from = Account { id: 1, balance: 50 };
            let to = Account { id: 2, balance: 150 };

            tx.insert_model("Accounts", &from, &Fields::all()).await?;
            tx.insert_model("Accounts", &to, &Fields::all()).await?;
            Ok(100)
        })
        .await
        .unwrap();

    assert_eq!(moved, 100);
    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
    assert_eq!(log.queries().len(), 2);
    assert_eq!((log.connects(), log.closes()), (1, 1));
}

#[tokio::test]
async fn rolls_back_on_handler_error() {
    let (db, log, _driver) = setup();

    let err = db
        .transaction(|tx| async move {
            tx.delete_model("Accounts", &Filter::new().eq("AccountId", 1))
                .await?;
            Err::<(), _>(err!("insufficient funds"))
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "insufficient funds");
    assert_eq!(
        log.transactions(),
        [Transaction::Start, Transaction::Rollback]
    );
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn rolls_back_on_driver_error() {
    let (db, log, driver) = setup();
    driver.fail_next("deadlock");

    let err = db
        .transaction(|tx| async move {
            tx.command("UPDATE Accounts SET Balance = 0")
                .exec_non_query()
                .await
        })
        .await
        .unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "deadlock");
    assert_eq!(
        log.transactions(),
        [Transaction::Start, Transaction::Rollback]
    );
}

#[tokio::test]
async fn failed_commit_is_rolled_back() {
    let (db, log, driver) = setup();
    driver.fail_transaction(Transaction::Commit);

    let err = db
        .transaction(|_tx| async move { Ok(()) })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Commit failed");
    assert_eq!(
        log.transactions(),
        [
            Transaction::Start,
            Transaction::Commit,
            Transaction::Rollback
        ]
    );
}

#[tokio::test]
async fn failed_rollback_keeps_original_error() {
    let (db, log, driver) = setup();
    driver.fail_transaction(Transaction::Rollback);

    let err = db
        .transaction(|_tx| async move { Err::<(), _>(err!("handler failed")) })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "handler failed");
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn failed_start_runs_nothing() {
    let (db, log, driver) = setup();
    driver.fail_transaction(Transaction::Start);

    let err = db
        .transaction(|tx| async move { tx.command("SELECT 1").exec_scalar().await })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Start failed");
    assert!(log.queries().is_empty());
    assert_eq!(log.transactions(), [Transaction::Start]);
}
