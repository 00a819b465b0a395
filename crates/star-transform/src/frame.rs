//! DataFrame views of the star schema tables.
//!
//! Column order follows [`StarTable::columns`]. Calendar dates are rendered
//! as `YYYY-MM-DD` text and null keys or measures stay null.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use star_model::{
    CustomerDimensionRow, DateDimensionRow, FactSalesRow, ProductDimensionRow, StarSchema,
    StarTable, SurrogateKey,
};

use crate::date::DATE_FORMAT;
use crate::error::Result;

fn key_column(name: &str, keys: impl Iterator<Item = SurrogateKey>) -> Column {
    let values: Vec<i64> = keys.map(SurrogateKey::value).collect();
    Series::new(name.into(), values).into_column()
}

fn nullable_key_column(name: &str, keys: impl Iterator<Item = Option<SurrogateKey>>) -> Column {
    let values: Vec<Option<i64>> = keys.map(|key| key.map(SurrogateKey::value)).collect();
    Series::new(name.into(), values).into_column()
}

fn text_column<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> Column {
    let values: Vec<&str> = values.collect();
    Series::new(name.into(), values).into_column()
}

fn customer_frame(rows: &[CustomerDimensionRow]) -> Result<DataFrame> {
    let [id, name, city, state] = StarTable::Customer.columns() else {
        unreachable!("customer table has four columns")
    };
    Ok(DataFrame::new(vec![
        key_column(id, rows.iter().map(|row| row.customer_id)),
        text_column(name, rows.iter().map(|row| row.name.as_str())),
        text_column(city, rows.iter().map(|row| row.city.as_str())),
        text_column(state, rows.iter().map(|row| row.state.as_str())),
    ])?)
}

fn product_frame(rows: &[ProductDimensionRow]) -> Result<DataFrame> {
    let [id, name, category, manufacturer] = StarTable::Product.columns() else {
        unreachable!("product table has four columns")
    };
    Ok(DataFrame::new(vec![
        key_column(id, rows.iter().map(|row| row.product_id)),
        text_column(name, rows.iter().map(|row| row.name.as_str())),
        text_column(category, rows.iter().map(|row| row.category.as_str())),
        text_column(manufacturer, rows.iter().map(|row| row.manufacturer.as_str())),
    ])?)
}

fn date_frame(rows: &[DateDimensionRow]) -> Result<DataFrame> {
    let [id, calendar_date, year, month, day] = StarTable::Date.columns() else {
        unreachable!("date table has five columns")
    };
    let dates: Vec<Option<String>> = rows
        .iter()
        .map(|row| {
            row.calendar_date
                .map(|date| date.format(DATE_FORMAT).to_string())
        })
        .collect();
    let years: Vec<Option<i32>> = rows.iter().map(|row| row.year).collect();
    let months: Vec<Option<i32>> = rows
        .iter()
        .map(|row| row.month.map(|m| m as i32))
        .collect();
    let days: Vec<Option<i32>> = rows.iter().map(|row| row.day.map(|d| d as i32)).collect();
    Ok(DataFrame::new(vec![
        key_column(id, rows.iter().map(|row| row.date_id)),
        Series::new((*calendar_date).into(), dates).into_column(),
        Series::new((*year).into(), years).into_column(),
        Series::new((*month).into(), months).into_column(),
        Series::new((*day).into(), days).into_column(),
    ])?)
}

fn fact_frame(rows: &[FactSalesRow]) -> Result<DataFrame> {
    let [sale_id, customer_id, product_id, date_id, quantity_sold, total_value] =
        StarTable::Sales.columns()
    else {
        unreachable!("fact table has six columns")
    };
    let quantities: Vec<Option<i32>> = rows.iter().map(|row| row.quantity_sold).collect();
    let totals: Vec<Option<f64>> = rows.iter().map(|row| row.total_value).collect();
    Ok(DataFrame::new(vec![
        key_column(sale_id, rows.iter().map(|row| row.sale_id)),
        nullable_key_column(customer_id, rows.iter().map(|row| row.customer_id)),
        nullable_key_column(product_id, rows.iter().map(|row| row.product_id)),
        nullable_key_column(date_id, rows.iter().map(|row| row.date_id)),
        Series::new((*quantity_sold).into(), quantities).into_column(),
        Series::new((*total_value).into(), totals).into_column(),
    ])?)
}

/// Converts one table of the schema to a DataFrame.
pub fn table_frame(schema: &StarSchema, table: StarTable) -> Result<DataFrame> {
    match table {
        StarTable::Customer => customer_frame(&schema.customers),
        StarTable::Product => product_frame(&schema.products),
        StarTable::Date => date_frame(&schema.dates),
        StarTable::Sales => fact_frame(&schema.sales),
    }
}

/// Converts every table of the schema, in [`StarTable::ALL`] order.
pub fn star_frames(schema: &StarSchema) -> Result<Vec<(StarTable, DataFrame)>> {
    StarTable::ALL
        .into_iter()
        .map(|table| Ok((table, table_frame(schema, table)?)))
        .collect()
}
