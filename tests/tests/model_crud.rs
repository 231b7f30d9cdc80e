use pretty_assertions::assert_eq;
use rowbind::{
    driver::{Exec, Param, Query, Response},
    Fields, Filter, Row, UpdateOptions,
};
use tests::setup;

#[derive(Debug, Default, PartialEq, rowbind::Model)]
#[rename_all("PascalCase")]
struct Product {
    #[key]
    id: i64,

    name: String,

    price: Option<f64>,

    #[convert(split_ints)]
    #[convert(join_ints)]
    tags: Vec<i32>,
}

fn widget() -> Product {
    Product {
        id: 1,
        name: "Widget".to_string(),
        price: Some(9.5),
        tags: vec![1, 2],
    }
}

fn widget_row() -> Row {
    Row::new()
        .with("Id", 1_i64)
        .with("Name", "Widget")
        .with("Price", 9.5)
        .with("Tags", "1,2")
}

#[tokio::test]
async fn get_model_reads_first_row() {
    let (db, log, driver) = setup();
    driver.respond(Response::values(vec![widget_row(), Row::new().with("Id", 2_i64)]));

    let product: Option<Product> = db
        .get_model("Products", &Filter::new().eq("Id", 1), &Fields::all())
        .await
        .unwrap();

    assert_eq!(product, Some(widget()));

    let query = log.last();
    assert_eq!(query.sql, "SELECT * FROM [Products] WHERE [Id] = @Id");
    assert_eq!(query.params, vec![Param::input("Id", 1)]);
    assert_eq!(query.exec, Exec::Rows);
    assert_eq!((log.connects(), log.closes()), (1, 1));
}

#[tokio::test]
async fn get_model_without_rows_is_none() {
    let (db, _log, _driver) = setup();

    let product: Option<Product> = db
        .get_model("Products", &Filter::new().eq("Id", 404), &Fields::all())
        .await
        .unwrap();

    assert_eq!(product, None);
}

#[tokio::test]
async fn get_model_list_with_exclude() {
    let (db, log, driver) = setup();
    driver.respond(Response::values(vec![
        Row::new().with("Id", 1_i64).with("Name", "a"),
        Row::new().with("Id", 2_i64).with("Name", "b"),
    ]));

    let products: Vec<Product> = db
        .get_model_list("dbo.Products", &Fields::all().exclude(["Tags", "Price"]))
        .await
        .unwrap();

    assert_eq!(
        products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["a", "b"]
    );
    assert!(products.iter().all(|p| p.price.is_none() && p.tags.is_empty()));
    assert_eq!(log.last().sql, "SELECT [Id], [Name] FROM [dbo].[Products]");
}

#[tokio::test]
async fn insert_model_binds_converted_values() {
    let (db, log, driver) = setup();
    driver.respond(Response::count(1));

    let count = db
        .insert_model("Products", &widget(), &Fields::all())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let query = log.last();
    assert_eq!(
        query.sql,
        "INSERT INTO [Products] ([Id], [Name], [Price], [Tags]) VALUES (@Id, @Name, @Price, @Tags)"
    );
    assert_eq!(
        query.params,
        vec![
            Param::input("Id", 1_i64),
            Param::input("Name", "Widget"),
            Param::input("Price", 9.5),
            Param::input("Tags", "1,2"),
        ]
    );
    assert_eq!(query.exec, Exec::NonQuery);
}

#[tokio::test]
async fn insert_model_omits_null_fields() {
    let (db, log, _driver) = setup();

    let product = Product {
        price: None,
        ..widget()
    };

    db.insert_model("Products", &product, &Fields::all().include(["Id", "Price"]))
        .await
        .unwrap();

    assert_eq!(log.last().sql, "INSERT INTO [Products] ([Id]) VALUES (@Id)");
}

#[tokio::test]
async fn update_model_routes_key_to_where() {
    let (db, log, driver) = setup();
    driver.respond(Response::count(1));

    let product = Product {
        price: None,
        ..widget()
    };

    let count = db
        .update_model("Products", &product, &UpdateOptions::new())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let query = log.last();
    assert_eq!(
        query.sql,
        "UPDATE [Products] SET [Name] = @Name, [Tags] = @Tags WHERE [Id] = @Id"
    );
    assert_eq!(query.params.last(), Some(&Param::input("Id", 1_i64)));
}

#[tokio::test]
async fn update_model_keeps_nulls_when_asked() {
    let (db, log, _driver) = setup();

    let product = Product {
        price: None,
        ..widget()
    };

    db.update_model(
        "Products",
        &product,
        &UpdateOptions::new()
            .skip_null(false)
            .primary_keys(["Name"])
            .fields(Fields::all().exclude(["Tags"])),
    )
    .await
    .unwrap();

    let query = log.last();
    assert_eq!(
        query.sql,
        "UPDATE [Products] SET [Id] = @Id, [Price] = @Price WHERE [Name] = @Name"
    );
    assert_eq!(query.params[1], Param::input("Price", rowbind::stmt::Value::Null));
}

#[tokio::test]
async fn delete_model() {
    let (db, log, driver) = setup();
    driver.respond(Response::count(3));

    let count = db
        .delete_model("Products", &Filter::new().eq("Name", "old"))
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(log.last().sql, "DELETE FROM [Products] WHERE [Name] = @Name");
}

#[tokio::test]
async fn strict_mode_refuses_unfiltered_delete() {
    let (db, log, _driver) = tests::setup_with(|builder| {
        builder.strict(true);
    });

    let err = db
        .delete_model("Products", &Filter::new())
        .await
        .unwrap_err();

    assert!(err.is_unsafe_statement());
    assert!(log.is_empty());
    // The connection is still released
    assert_eq!((log.connects(), log.closes()), (1, 1));
}

#[tokio::test]
async fn query_models_filters_columns() {
    let (db, log, driver) = setup();
    driver.respond(Response::values(vec![widget_row()]));

    let mut query = Query::new("SELECT * FROM Products WHERE Price > @Min", Exec::NonQuery);
    query.params.push(Param::input("Min", 5.0));

    let products: Vec<Product> = db
        .query_models(query, &Fields::all().include(["Id", "Name"]))
        .await
        .unwrap();

    assert_eq!(
        products,
        vec![Product {
            id: 1,
            name: "Widget".to_string(),
            price: None,
            tags: vec![],
        }]
    );
    assert_eq!(log.last().exec, Exec::Rows);
}

#[tokio::test]
async fn load_rows_without_a_connection() {
    let (db, log, _driver) = setup();

    let products: Vec<Product> = db
        .load_rows(&[widget_row(), Row::new().with("id", 7_i64)])
        .unwrap();

    assert_eq!(products[0], widget());
    assert_eq!(products[1].id, 7);
    assert_eq!(log.connects(), 0);
}

#[tokio::test]
async fn conversion_errors_name_the_field() {
    let (db, _log, driver) = setup();
    driver.respond(Response::values(vec![widget_row().with("Tags", true)]));

    let err = db
        .get_model_list::<Product>("Products", &Fields::all())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "loading `Product.tags`: conversion `split_ints` failed: expected String, got Bool"
    );
}
