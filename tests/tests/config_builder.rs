use pretty_assertions::assert_eq;
use rowbind::{Config, Db, Filter, Flavor};
use tests::RecordingDriver;

#[tokio::test]
async fn connect_uses_default_connection_string() {
    let config = Config::from_json(
        r#"{
            "connection_strings": {
                "main": "Host=main",
                "reporting": "Host=reporting"
            },
            "connection_string_name": "reporting",
            "flavor": "postgresql"
        }"#,
    )
    .unwrap();

    let driver = RecordingDriver::new();
    let log = driver.log();
    let mut seen = None;

    let db = Db::builder()
        .config(config)
        .unwrap()
        .connect(|target| {
            seen = Some(target.to_string());
            Ok(driver)
        })
        .unwrap();

    assert_eq!(seen.as_deref(), Some("Host=reporting"));
    assert_eq!(db.serializer().flavor(), Flavor::Postgresql);

    db.delete_model("users", &Filter::new().eq("id", 1))
        .await
        .unwrap();
    assert_eq!(log.last().sql, r#"DELETE FROM "users" WHERE "id" = $1"#);
}

#[tokio::test]
async fn strict_flag_from_config() {
    let config = Config::from_json(r#"{ "strict": true }"#).unwrap();

    let db = Db::builder()
        .config(config)
        .unwrap()
        .build(RecordingDriver::new())
        .unwrap();

    assert!(db.composer().is_strict());
    let err = db.delete_model("users", &Filter::new()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsafe statement: DELETE FROM users has no WHERE clause"
    );
}

#[test]
fn connect_without_config_gets_empty_target() {
    let mut seen = None;

    Db::builder()
        .connect(|target| {
            seen = Some(target.to_string());
            Ok(RecordingDriver::new())
        })
        .unwrap();

    assert_eq!(seen.as_deref(), Some(""));
}

#[test]
fn driver_construction_errors_propagate() {
    let err = Db::builder()
        .connect(|_| Err::<RecordingDriver, _>(rowbind::err!("bad connection string")))
        .unwrap_err();

    assert_eq!(err.to_string(), "bad connection string");
}
