use pretty_assertions::assert_eq;
use rowbind::{
    driver::Response, stmt::Value, Convert, Direction, Fields, Mapping, Register, Result, Row,
};
use tests::{setup, setup_with};

#[derive(Debug)]
struct Upper;

impl Convert for Upper {
    fn convert(&self, value: Value) -> Result<Value> {
        Ok(match value {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        })
    }
}

#[derive(Debug, Default, rowbind::Model)]
#[metadata(CustomerMetadata)]
struct Customer {
    #[key]
    id: i64,

    #[convert(with = Upper, direction = result)]
    code: String,

    #[skip(result)]
    display: String,

    r#type: Option<String>,
}

#[allow(dead_code)]
#[derive(rowbind::Metadata)]
struct CustomerMetadata {
    #[rename("CustomerType")]
    r#type: (),
}

#[allow(dead_code)]
#[derive(rowbind::Metadata)]
struct ReportingMetadata {
    #[column("Kind")]
    r#type: (),

    #[key]
    #[column("Code")]
    code: (),
}

fn names(mapping: &Mapping) -> Vec<&str> {
    mapping.names().collect()
}

#[test]
fn declared_schema() {
    let schema = Customer::schema();

    assert_eq!(schema.name, "Customer");
    assert_eq!(
        schema.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        ["id", "code", "display", "type"]
    );
    assert!(schema.fields[0].primary_key);
    assert!(schema.fields[2].skip_result);
    assert_eq!(schema.fields[1].rules.len(), 1);
    assert!(schema.metadata.is_some());

    let metadata = CustomerMetadata::schema();
    assert_eq!(metadata.fields[0].column_name.as_deref(), Some("CustomerType"));
    assert_eq!(metadata.fields[0].param_name.as_deref(), Some("CustomerType"));
}

#[test]
fn default_metadata_is_layered() {
    let result = Mapping::of::<Customer>(Direction::ResultToModel, None).unwrap();
    assert_eq!(names(&result), ["id", "code", "CustomerType"]);

    let param = Mapping::of::<Customer>(Direction::ModelToParameter, None).unwrap();
    assert_eq!(names(&param), ["id", "code", "display", "CustomerType"]);
    assert!(param.get("code").unwrap().rule.is_none());
}

#[test]
fn explicit_metadata_replaces_descriptors() {
    let reporting = ReportingMetadata::schema();
    let result = Mapping::of::<Customer>(Direction::ResultToModel, Some(&reporting)).unwrap();

    assert_eq!(names(&result), ["id", "Code", "Kind"]);

    // The replacement keeps the model's accessor but not its rule
    let code = result.get("Code").unwrap();
    assert_eq!(code.index, 1);
    assert!(code.primary_key);
    assert!(code.rule.is_none());
}

#[tokio::test]
async fn loads_through_custom_rule() {
    let (db, _log, driver) = setup();
    driver.respond(Response::values(vec![Row::new()
        .with("id", 3_i64)
        .with("code", "abc")
        .with("display", "ignored")
        .with("CustomerType", "vip")]));

    let customers: Vec<Customer> = db
        .get_model_list("Customers", &Fields::all())
        .await
        .unwrap();

    let customer = &customers[0];
    assert_eq!(customer.id, 3);
    assert_eq!(customer.code, "ABC");
    assert_eq!(customer.display, "");
    assert_eq!(customer.r#type.as_deref(), Some("vip"));
}

#[tokio::test]
async fn builder_metadata_applies_to_every_statement() {
    let (db, log, _driver) = setup_with(|builder| {
        builder.metadata::<ReportingMetadata>();
    });

    db.get_model_list::<Customer>("Customers", &Fields::all().exclude(["display"]))
        .await
        .unwrap();

    assert_eq!(log.last().sql, "SELECT [id], [Code], [Kind] FROM [Customers]");
}
