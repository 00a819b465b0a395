//! Typed view of one row of the denormalized sales feed.

use serde::{Deserialize, Serialize};

/// One input row, exactly as the reader found it.
///
/// Every field is text; dates and measures are only interpreted by the
/// transformation stage, so a malformed cell never prevents a record from
/// being loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSalesRecord {
    pub customer_name: String,
    pub city: String,
    pub state: String,
    pub product_name: String,
    pub category: String,
    pub manufacturer: String,
    pub sale_date: String,
    pub quantity_sold: String,
    pub total_value: String,
}

/// The source columns a sales feed must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SalesField {
    CustomerName,
    City,
    State,
    ProductName,
    Category,
    Manufacturer,
    SaleDate,
    QuantitySold,
    TotalValue,
}

impl SalesField {
    pub const ALL: [SalesField; 9] = [
        SalesField::CustomerName,
        SalesField::City,
        SalesField::State,
        SalesField::ProductName,
        SalesField::Category,
        SalesField::Manufacturer,
        SalesField::SaleDate,
        SalesField::QuantitySold,
        SalesField::TotalValue,
    ];

    /// Header used by the Portuguese-language source feed.
    pub fn source_header(self) -> &'static str {
        match self {
            SalesField::CustomerName => "nome_cliente",
            SalesField::City => "cidade",
            SalesField::State => "estado",
            SalesField::ProductName => "nome_produto",
            SalesField::Category => "categoria",
            SalesField::Manufacturer => "fabricante",
            SalesField::SaleDate => "data",
            SalesField::QuantitySold => "qtd_vendida",
            SalesField::TotalValue => "valor_total",
        }
    }

    /// Alternative English header accepted for the same field.
    pub fn alias(self) -> &'static str {
        match self {
            SalesField::CustomerName => "customer_name",
            SalesField::City => "city",
            SalesField::State => "state",
            SalesField::ProductName => "product_name",
            SalesField::Category => "category",
            SalesField::Manufacturer => "manufacturer",
            SalesField::SaleDate => "sale_date",
            SalesField::QuantitySold => "quantity_sold",
            SalesField::TotalValue => "total_value",
        }
    }

    pub fn set(self, record: &mut RawSalesRecord, value: String) {
        match self {
            SalesField::CustomerName => record.customer_name = value,
            SalesField::City => record.city = value,
            SalesField::State => record.state = value,
            SalesField::ProductName => record.product_name = value,
            SalesField::Category => record.category = value,
            SalesField::Manufacturer => record.manufacturer = value,
            SalesField::SaleDate => record.sale_date = value,
            SalesField::QuantitySold => record.quantity_sold = value,
            SalesField::TotalValue => record.total_value = value,
        }
    }
}
