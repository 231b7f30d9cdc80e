use pretty_assertions::assert_eq;
use rowbind::{
    driver::{CommandType, Exec, Param, Response},
    stmt::Value,
    Fields, Row,
};
use tests::setup;

#[derive(Debug, Default, PartialEq, rowbind::Model)]
struct OrderSearch {
    #[param("CustomerId")]
    customer: i64,

    #[convert(join_strings)]
    statuses: Vec<String>,

    #[skip(param)]
    page_size: i32,

    note: Option<String>,
}

#[derive(Debug, Default, PartialEq, rowbind::Model)]
struct Order {
    #[column("OrderId")]
    id: i64,

    #[convert(default = "unknown")]
    status: String,

    #[readonly]
    secret: String,
}

#[tokio::test]
async fn stored_procedure_with_output_parameters() {
    let (db, log, driver) = setup();
    driver.respond(Response::count(0).with_params(vec![
        Param {
            value: Value::I32(12),
            ..Param::output("Total")
        },
        Param {
            value: Value::I32(0),
            ..Param::return_value("Status")
        },
    ]));

    let response = db
        .command("dbo.CountOrders")
        .stored_procedure()
        .bind("CustomerId", 7)
        .bind_out("Total")
        .bind_return("Status")
        .exec()
        .await
        .unwrap();

    assert_eq!(response.output("Total"), Some(&Value::I32(12)));
    assert_eq!(response.output("Status"), Some(&Value::I32(0)));
    assert_eq!(response.output("CustomerId"), None);

    let query = log.last();
    assert_eq!(query.sql, "dbo.CountOrders");
    assert_eq!(query.command_type, CommandType::StoredProcedure);
    assert_eq!(
        query.params,
        vec![
            Param::input("CustomerId", 7),
            Param::output("Total"),
            Param::return_value("Status"),
        ]
    );
}

#[tokio::test]
async fn bind_model_skips_nulls_and_excluded_fields() {
    let (db, log, _driver) = setup();

    let search = OrderSearch {
        customer: 7,
        statuses: vec!["open".to_string(), "held".to_string()],
        page_size: 50,
        note: None,
    };

    db.command("dbo.SearchOrders")
        .stored_procedure()
        .bind_model(&search, &Fields::all())
        .unwrap()
        .bind("Extra", true)
        .exec_non_query()
        .await
        .unwrap();

    assert_eq!(
        log.last().params,
        vec![
            Param::input("CustomerId", 7_i64),
            Param::input("statuses", "open,held"),
            Param::input("Extra", true),
        ]
    );
}

#[tokio::test]
async fn exec_models_applies_result_rules() {
    let (db, log, driver) = setup();
    driver.respond(Response::values(vec![
        Row::new().with("OrderId", 1_i64).with("status", "open"),
        Row::new().with("OrderId", 2_i64).with("secret", "hidden"),
    ]));

    let orders: Vec<Order> = db
        .command("SELECT * FROM Orders")
        .exec_models(&Fields::all())
        .await
        .unwrap();

    assert_eq!(
        orders,
        vec![
            Order {
                id: 1,
                status: "open".to_string(),
                secret: String::new(),
            },
            Order {
                id: 2,
                status: "unknown".to_string(),
                secret: String::new(),
            },
        ]
    );

    let query = log.last();
    assert_eq!(query.exec, Exec::Rows);
    assert_eq!(query.command_type, CommandType::Text);
}

#[tokio::test]
async fn exec_scalar_reads_first_cell() {
    let (db, _log, driver) = setup();
    driver.respond(Response::values(vec![Row::new().with("n", 3_i64).with("m", 4_i64)]));

    let value = db.command("SELECT n, m FROM t").exec_scalar().await.unwrap();
    assert_eq!(value, Value::I64(3));

    let value = db.command("SELECT n FROM empty").exec_scalar().await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn mismatched_response_is_an_invalid_result() {
    let (db, _log, driver) = setup();
    driver.respond(Response::scalar(1));

    let err = db.command("SELECT 1").exec_rows().await.unwrap_err();

    assert!(err.is_invalid_result());
    assert_eq!(err.to_string(), "invalid result: expected Values, got Scalar");
}

#[tokio::test]
async fn session_commands_share_the_connection() {
    let (db, log, _driver) = setup();

    db.with_connection(|session| async move {
        for n in 0..3 {
            session
                .command("INSERT INTO t (n) VALUES (@n)")
                .bind("n", n)
                .exec_non_query()
                .await?;
        }
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(log.queries().len(), 3);
    assert_eq!(log.connects(), 1);
}
