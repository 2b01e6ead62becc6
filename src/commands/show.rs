//! `specflow show` command.

use crate::store::SpecStore;

/// Execute the `show` command: print the metadata and body of one spec.
///
/// # Errors
///
/// Returns an error string if the spec cannot be loaded.
pub fn run(store: &SpecStore<'_>, id: &str) -> Result<(), String> {
    let doc = store.load(id).map_err(|e| e.to_string())?;
    let meta = &doc.metadata;

    println!("Spec: {}", meta.id);
    println!("Title: {}", meta.title);
    println!("Group: {} ({})", meta.feature_group, meta.theme_category);
    println!("Priority: {}", meta.priority);
    println!("Status: {}", meta.status);
    if let Some(parent) = &meta.parent_id {
        println!("Parent: {parent}");
    }
    println!("Updated: {}", meta.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
    print!("{}", doc.body_md);
    Ok(())
}
