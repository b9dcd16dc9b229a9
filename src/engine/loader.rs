use super::records::{CategoryTable, ContactTable};
use crate::error::{SelectionError, SelectionResult};
use crate::sheets::TabularStore;

pub async fn load_contacts<S>(store: &S, range: &str) -> SelectionResult<ContactTable>
where
    S: TabularStore + ?Sized,
{
    let raw = store
        .read_range(range)
        .await
        .map_err(SelectionError::StoreAccess)?;
    let table = ContactTable::from_rows(raw);
    tracing::info!(
        range = %range,
        contacts = table.records().count(),
        skipped = table.malformed_count(),
        "loaded contacts"
    );
    Ok(table)
}

pub async fn load_categories<S>(store: &S, range: &str) -> SelectionResult<CategoryTable>
where
    S: TabularStore + ?Sized,
{
    let raw = store
        .read_range(range)
        .await
        .map_err(SelectionError::StoreAccess)?;
    let table = CategoryTable::from_rows(&raw)?;
    tracing::info!(range = %range, categories = table.len(), "loaded categories");
    Ok(table)
}
