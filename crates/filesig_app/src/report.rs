use std::path::Path;

use filesig_core::SignatureDatabase;

/// `filesig_length = <count> : [<name>] ...`
///
/// The count covers every loaded slot; the bracket list names only the
/// active entries, in database order.
pub fn summary_line(database: &SignatureDatabase) -> String {
    let mut line = format!("filesig_length = {} :", database.len());
    for entry in database.active_entries() {
        line.push_str(" [");
        line.push_str(entry.type_name());
        line.push(']');
    }
    line
}

pub fn result_line(path: &Path, type_name: &str) -> String {
    format!("File type of {} is {}.", path.display(), type_name)
}

pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} (filename | dirname)")
}
