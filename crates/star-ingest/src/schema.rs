//! Resolution of sales fields to the headers actually present in a file.

use std::collections::BTreeMap;
use std::path::Path;

use star_model::{CaseInsensitiveSet, SalesField};

use crate::error::{IngestError, Result};

/// Maps every [`SalesField`] to the header spelling used by one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    columns: BTreeMap<SalesField, String>,
}

impl SourceColumns {
    /// Resolves all required fields against a header row.
    ///
    /// The source header wins over the alias when a file carries both.
    pub fn resolve<I, S>(headers: I, path: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup = CaseInsensitiveSet::new(headers);
        let mut columns = BTreeMap::new();
        let mut missing = Vec::new();
        for field in SalesField::ALL {
            let found = lookup
                .get(field.source_header())
                .or_else(|| lookup.get(field.alias()));
            match found {
                Some(header) => {
                    columns.insert(field, header.to_string());
                }
                None => missing.push(field.source_header().to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                columns: missing,
                path: path.to_path_buf(),
            });
        }
        Ok(Self { columns })
    }

    /// Header name of `field` in the resolved file.
    pub fn header(&self, field: SalesField) -> &str {
        self.columns
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.source_header())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SalesField, &str)> {
        self.columns
            .iter()
            .map(|(field, header)| (*field, header.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: [&str; 9] = [
        "nome_cliente",
        "cidade",
        "estado",
        "nome_produto",
        "categoria",
        "fabricante",
        "data",
        "qtd_vendida",
        "valor_total",
    ];

    #[test]
    fn resolves_source_headers() {
        let columns = SourceColumns::resolve(SOURCE, Path::new("feed.csv")).unwrap();
        assert_eq!(columns.header(SalesField::SaleDate), "data");
        assert_eq!(columns.iter().count(), 9);
    }

    #[test]
    fn resolves_aliases_and_case() {
        let headers = [
            "Customer_Name",
            "CITY",
            "state",
            "product_name",
            "category",
            "manufacturer",
            "sale_date",
            "Quantity_Sold",
            "total_value",
        ];
        let columns = SourceColumns::resolve(headers, Path::new("feed.csv")).unwrap();
        assert_eq!(columns.header(SalesField::CustomerName), "Customer_Name");
        assert_eq!(columns.header(SalesField::QuantitySold), "Quantity_Sold");
    }

    #[test]
    fn reports_every_missing_column() {
        let headers = ["nome_cliente", "cidade", "estado", "nome_produto", "categoria"];
        let error = SourceColumns::resolve(headers, Path::new("feed.csv")).unwrap_err();
        match error {
            IngestError::MissingColumns { columns, .. } => {
                assert_eq!(
                    columns,
                    vec!["fabricante", "data", "qtd_vendida", "valor_total"]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
