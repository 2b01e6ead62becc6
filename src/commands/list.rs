//! `specflow list` command.

use std::fmt::Write as _;

use crate::spec::SpecDocument;
use crate::store::SpecStore;

/// Execute the `list` command.
///
/// Displays a table of all specs showing ID, status, priority, group and title.
///
/// # Errors
///
/// Returns an error string if the store cannot be listed.
pub fn run(store: &SpecStore<'_>) -> Result<(), String> {
    let docs = store.load_all().map_err(|e| e.to_string())?;
    if docs.is_empty() {
        println!("No specs found in store.");
        return Ok(());
    }
    print!("{}", render_table(&docs));
    Ok(())
}

fn render_table(docs: &[SpecDocument]) -> String {
    let rows: Vec<[String; 5]> = docs
        .iter()
        .map(|d| {
            let m = &d.metadata;
            [
                m.id.clone(),
                m.status.to_string(),
                m.priority.to_string(),
                m.feature_group.to_string(),
                m.title.clone(),
            ]
        })
        .collect();

    let headers = ["ID", "STATUS", "PRIORITY", "GROUP", "TITLE"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let [id_w, status_w, prio_w, group_w, title_w] = widths;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_w$}  {:<status_w$}  {:<prio_w$}  {:<group_w$}  {}",
        headers[0], headers[1], headers[2], headers[3], headers[4]
    );
    let _ = writeln!(
        out,
        "{:-<id_w$}  {:-<status_w$}  {:-<prio_w$}  {:-<group_w$}  {:-<title_w$}",
        "", "", "", "", ""
    );
    for [id, status, priority, group, title] in &rows {
        let _ = writeln!(
            out,
            "{id:<id_w$}  {status:<status_w$}  {priority:<prio_w$}  {group:<group_w$}  {title}"
        );
    }
    out
}
