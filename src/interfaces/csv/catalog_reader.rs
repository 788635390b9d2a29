use crate::domain::payment_type::PaymentType;
use crate::error::{PaymentSheetError, Result};
use std::collections::HashSet;
use std::io::Read;

/// Reads payment types from a CSV source with an `id, name` header.
///
/// Whitespace around fields is trimmed. Row order is kept, since the catalog is an
/// ordered sequence.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Wraps a catalog CSV; the header row is expected but not validated here.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily deserializes payment types.
    pub fn payment_types(self) -> impl Iterator<Item = Result<PaymentType>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentSheetError::from))
    }

    /// Reads the whole catalog, failing on the first malformed row or repeated id.
    pub fn read_all(self) -> Result<Vec<PaymentType>> {
        let mut seen = HashSet::new();
        let mut types = Vec::new();
        for payment_type in self.payment_types() {
            let payment_type = payment_type?;
            if !seen.insert(payment_type.id) {
                return Err(PaymentSheetError::CatalogError(format!(
                    "duplicate payment type id {}",
                    payment_type.id
                )));
            }
            types.push(payment_type);
        }
        Ok(types)
    }
}
