//! Integration tests for the star schema pipeline.

use std::collections::HashSet;

use chrono::NaiveDate;

use star_model::{RawSalesRecord, StarSchema};
use star_transform::{
    IssueKind, KeyStrategy, TransformError, TransformOptions, UnparsedDatePolicy,
    build_star_schema,
};

fn sale(
    customer: (&str, &str, &str),
    product: (&str, &str, &str),
    date: &str,
    quantity: &str,
    total: &str,
) -> RawSalesRecord {
    RawSalesRecord {
        customer_name: customer.0.to_string(),
        city: customer.1.to_string(),
        state: customer.2.to_string(),
        product_name: product.0.to_string(),
        category: product.1.to_string(),
        manufacturer: product.2.to_string(),
        sale_date: date.to_string(),
        quantity_sold: quantity.to_string(),
        total_value: total.to_string(),
    }
}

const ANA: (&str, &str, &str) = ("Ana", "Porto", "PR");
const BRUNO: (&str, &str, &str) = ("Bruno", "Lisboa", "LX");
const PEN: (&str, &str, &str) = ("Caneta", "Papelaria", "Bic");
const PENCIL: (&str, &str, &str) = ("Lapis", "Papelaria", "Faber");

fn assert_referential_integrity(schema: &StarSchema) {
    let customers: HashSet<_> = schema.customers.iter().map(|row| row.customer_id).collect();
    let products: HashSet<_> = schema.products.iter().map(|row| row.product_id).collect();
    let dates: HashSet<_> = schema.dates.iter().map(|row| row.date_id).collect();
    for fact in &schema.sales {
        if let Some(id) = fact.customer_id {
            assert!(customers.contains(&id), "dangling customer_id {id}");
        }
        if let Some(id) = fact.product_id {
            assert!(products.contains(&id), "dangling product_id {id}");
        }
        if let Some(id) = fact.date_id {
            assert!(dates.contains(&id), "dangling date_id {id}");
        }
    }
}

#[test]
fn repeated_customer_gets_one_dimension_row() {
    let records = vec![
        sale(ANA, PEN, "2023-11-07", "1", "2.50"),
        sale(ANA, PENCIL, "2023-11-08", "3", "4.50"),
    ];
    let build = build_star_schema(&records, &TransformOptions::default()).unwrap();
    let schema = &build.schema;

    assert_eq!(schema.customers.len(), 1);
    assert_eq!(schema.customers[0].name, "Ana");
    assert_eq!(schema.sales.len(), 2);
    let ana = schema.customers[0].customer_id;
    assert!(schema.sales.iter().all(|fact| fact.customer_id == Some(ana)));
    assert_eq!(schema.products.len(), 2);
    assert_eq!(schema.dates.len(), 2);
    assert!(build.report.is_clean());
    assert_referential_integrity(schema);
}

#[test]
fn unparseable_date_yields_null_date_id_and_no_dimension_row() {
    let records = vec![
        sale(ANA, PEN, "not-a-date", "1", "2.50"),
        sale(BRUNO, PEN, "2023-11-07", "1", "2.50"),
    ];
    let build = build_star_schema(&records, &TransformOptions::default()).unwrap();
    let schema = &build.schema;

    assert_eq!(schema.sales.len(), 2);
    assert_eq!(schema.sales[0].date_id, None);
    assert!(schema.sales[1].date_id.is_some());
    assert_eq!(schema.dates.len(), 1);
    assert!(schema.dates.iter().all(|row| row.calendar_date.is_some()));
    assert_eq!(build.report.count(IssueKind::UnparsedDate), 1);
    assert_eq!(build.report.examples(IssueKind::UnparsedDate)[0].value, "not-a-date");
    assert_referential_integrity(schema);
}

#[test]
fn null_row_policy_folds_unparseable_dates_into_one_row() {
    let records = vec![
        sale(ANA, PEN, "not-a-date", "1", "2.50"),
        sale(BRUNO, PEN, "07/11/2023", "1", "2.50"),
        sale(BRUNO, PEN, "2023-11-07", "1", "2.50"),
    ];
    let options = TransformOptions::new().with_unparsed_dates(UnparsedDatePolicy::NullRow);
    let build = build_star_schema(&records, &options).unwrap();
    let schema = &build.schema;

    let null_rows: Vec<_> = schema
        .dates
        .iter()
        .filter(|row| row.calendar_date.is_none())
        .collect();
    assert_eq!(null_rows.len(), 1);
    assert_eq!(null_rows[0].year, None);
    let null_id = Some(null_rows[0].date_id);
    assert_eq!(schema.sales[0].date_id, null_id);
    assert_eq!(schema.sales[1].date_id, null_id);
    assert_ne!(schema.sales[2].date_id, null_id);
    assert_eq!(build.report.count(IssueKind::UnparsedDate), 2);
    assert_eq!(build.report.count(IssueKind::DateNotFound), 0);
}

#[test]
fn invalid_quantity_is_null_without_touching_total() {
    let records = vec![sale(ANA, PEN, "2023-11-07", "abc", "19.90")];
    let build = build_star_schema(&records, &TransformOptions::default()).unwrap();
    let fact = &build.schema.sales[0];

    assert_eq!(fact.quantity_sold, None);
    assert_eq!(fact.total_value, Some(19.9));
    assert!(fact.customer_id.is_some());
    assert_eq!(build.report.count(IssueKind::InvalidQuantity), 1);
    assert_eq!(build.report.count(IssueKind::InvalidTotalValue), 0);
}

#[test]
fn date_dimension_is_decomposed() {
    let records = vec![sale(ANA, PEN, "2023-11-07", "1", "1")];
    let build = build_star_schema(&records, &TransformOptions::default()).unwrap();
    let row = &build.schema.dates[0];

    assert_eq!(row.calendar_date, NaiveDate::from_ymd_opt(2023, 11, 7));
    assert_eq!((row.year, row.month, row.day), (Some(2023), Some(11), Some(7)));
}

#[test]
fn empty_input_is_a_structural_error() {
    let result = build_star_schema(&[], &TransformOptions::default());

    assert!(matches!(result, Err(TransformError::EmptyInput)));
}

#[test]
fn partitioned_run_matches_sequential_shape() {
    let mut records = Vec::new();
    for idx in 0..50 {
        let customer = if idx % 2 == 0 { ANA } else { BRUNO };
        let product = if idx % 3 == 0 { PEN } else { PENCIL };
        let date = format!("2023-11-{:02}", idx % 28 + 1);
        let quantity = if idx % 7 == 0 { "x" } else { "2" };
        records.push(sale(customer, product, &date, quantity, "1.25"));
    }

    let sequential = build_star_schema(&records, &TransformOptions::default()).unwrap();
    let options = TransformOptions::new().with_key_strategy(KeyStrategy::for_partitions(4));
    let partitioned = build_star_schema(&records, &options).unwrap();

    assert_eq!(partitioned.schema.sales.len(), records.len());
    assert_eq!(
        partitioned.schema.customers.len(),
        sequential.schema.customers.len()
    );
    assert_eq!(partitioned.schema.dates.len(), sequential.schema.dates.len());
    assert_eq!(partitioned.report, sequential.report);

    let sale_ids: HashSet<_> = partitioned.schema.sales.iter().map(|row| row.sale_id).collect();
    assert_eq!(sale_ids.len(), records.len());
    assert!(sale_ids.iter().any(|id| id.value() >= 1 << 33));
    assert_referential_integrity(&partitioned.schema);

    for (fact, record) in partitioned.schema.sales.iter().zip(&records) {
        let customer = partitioned
            .schema
            .customers
            .iter()
            .find(|row| Some(row.customer_id) == fact.customer_id)
            .unwrap();
        assert_eq!(customer.name, record.customer_name);
    }
}
