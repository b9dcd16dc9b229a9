use super::records::ContactTable;
use std::collections::HashSet;

/// Stamp `today` into every selected contact's last-selected cell.
/// Returns how many rows changed.
pub fn apply_selection(table: &mut ContactTable, selected: &[String], today: &str) -> usize {
    let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let mut marked = 0;
    for record in table.records_mut() {
        if selected.contains(record.name.as_str()) {
            record.last_selected = Some(today.to_string());
            marked += 1;
        }
    }
    marked
}

/// Preamble followed by one name per line.
pub fn compose_body(preamble: &str, selected: &[String]) -> String {
    selected.iter().fold(preamble.to_string(), |mut body, name| {
        body.push_str(name);
        body.push('\n');
        body
    })
}
