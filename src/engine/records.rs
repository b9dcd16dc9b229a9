//! Typed views of the contacts and categories tables.

use crate::error::DataError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub category: String,
    pub last_contacted: Option<String>,
    pub last_selected: Option<String>,
}

impl ContactRecord {
    /// `None` when the row lacks a name or category.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let name = row.first().filter(|c| !c.trim().is_empty())?;
        let category = row.get(1).filter(|c| !c.trim().is_empty())?;
        Some(Self {
            name: name.clone(),
            category: category.clone(),
            last_contacted: optional_cell(row, 2),
            last_selected: optional_cell(row, 3),
        })
    }

    /// Last-contacted date, `None` for a missing or blank cell.
    pub fn contacted_on(&self) -> Option<&str> {
        filled(&self.last_contacted)
    }

    /// Last-selected date, `None` for a missing or blank cell.
    pub fn selected_on(&self) -> Option<&str> {
        filled(&self.last_selected)
    }

    /// The row as read, cell for cell. A recorded selection date always
    /// yields all four cells.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![self.name.clone(), self.category.clone()];
        match (&self.last_contacted, &self.last_selected) {
            (contacted, Some(selected)) => {
                row.push(contacted.clone().unwrap_or_default());
                row.push(selected.clone());
            }
            (Some(contacted), None) => row.push(contacted.clone()),
            (None, None) => {}
        }
        row
    }
}

/// Raw cell at `idx`; `None` only when the row is shorter.
fn optional_cell(row: &[String], idx: usize) -> Option<String> {
    row.get(idx).cloned()
}

fn filled(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|c| !c.is_empty())
}

/// A contact row as read from the sheet. Malformed rows are carried along
/// untouched so the write-back keeps every row in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRow {
    Record(ContactRecord),
    Malformed(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactTable {
    rows: Vec<ContactRow>,
}

impl ContactTable {
    pub fn from_rows(raw: Vec<Vec<String>>) -> Self {
        let rows = raw
            .into_iter()
            .map(|row| match ContactRecord::from_row(&row) {
                Some(record) => ContactRow::Record(record),
                None => ContactRow::Malformed(row),
            })
            .collect();
        Self { rows }
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.rows.iter().filter_map(|row| match row {
            ContactRow::Record(r) => Some(r),
            ContactRow::Malformed(_) => None,
        })
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut ContactRecord> {
        self.rows.iter_mut().filter_map(|row| match row {
            ContactRow::Record(r) => Some(r),
            ContactRow::Malformed(_) => None,
        })
    }

    pub fn malformed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, ContactRow::Malformed(_)))
            .count()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| match row {
                ContactRow::Record(r) => r.to_row(),
                ContactRow::Malformed(cells) => cells.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub code: String,
    pub description: String,
    pub frequency_weeks: u32,
}

impl CategoryRecord {
    /// `Ok(None)` for rows that are not exactly code | description | frequency
    /// with a code and a frequency filled in.
    pub fn from_row(row: &[String]) -> Result<Option<Self>, DataError> {
        let [code, description, frequency] = row else {
            return Ok(None);
        };
        if code.trim().is_empty() || frequency.trim().is_empty() {
            return Ok(None);
        }
        let frequency_weeks = frequency
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&weeks| weeks > 0)
            .ok_or_else(|| DataError::InvalidFrequency {
                category: code.clone(),
                value: frequency.clone(),
            })?;
        Ok(Some(Self {
            code: code.clone(),
            description: description.clone(),
            frequency_weeks,
        }))
    }
}

/// Category code -> recontact interval. A later row for the same code wins.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    categories: HashMap<String, CategoryRecord>,
}

impl CategoryTable {
    pub fn from_rows(raw: &[Vec<String>]) -> Result<Self, DataError> {
        let mut table = Self::default();
        for row in raw {
            if let Some(record) = CategoryRecord::from_row(row)? {
                table.insert(record);
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, record: CategoryRecord) {
        self.categories.insert(record.code.clone(), record);
    }

    pub fn frequency_weeks(&self, code: &str) -> Option<u32> {
        self.categories.get(code).map(|c| c.frequency_weeks)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
