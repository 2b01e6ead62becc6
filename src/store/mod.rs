//! Spec store: file-backed persistence for spec documents.
//!
//! All I/O goes through the `FileSystem` port. Directory layout:
//!
//! ```text
//! <root>/
//!   └── specs/
//!       └── <id>.md    YAML front matter + markdown body
//! ```

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::error::{SpecflowError, SpecflowResult};
use crate::ports::{PortError, PortFuture, SpecRepository, StoredSpec};
use crate::spec::{SpecDocument, SpecStatus};

const SPEC_EXT: &str = ".md";
const ID_PREFIX: &str = "spec-";

/// Persistence layer for spec documents.
pub struct SpecStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> SpecStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Allocates a fresh spec ID such as `spec-1a2b3c4d`.
    #[must_use]
    pub fn new_id(&self) -> String {
        let raw = self.ctx.id_gen.generate_id();
        let short: String = raw.chars().filter(char::is_ascii_alphanumeric).take(8).collect();
        format!("{ID_PREFIX}{short}")
    }

    /// Writes a document to `<root>/specs/<id>.md`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, doc: &SpecDocument) -> SpecflowResult<()> {
        let text = doc.to_markdown()?;
        let id = &doc.metadata.id;
        self.ctx
            .fs
            .write(&self.spec_path(id), &text)
            .map_err(|e| SpecflowError::Store(format!("Failed to write spec {id}: {e}")))?;
        tracing::debug!(spec_id = %id, "Saved spec");
        Ok(())
    }

    /// Loads a document by ID.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::NotFound`] for an unknown ID, or an error if
    /// the file cannot be read or parsed.
    pub fn load(&self, id: &str) -> SpecflowResult<SpecDocument> {
        let path = self.spec_path(id);
        if !self.ctx.fs.exists(&path) {
            return Err(SpecflowError::NotFound(id.to_string()));
        }
        let text = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| SpecflowError::Store(format!("Failed to read spec {id}: {e}")))?;
        SpecDocument::from_markdown(id, &text)
    }

    /// Lists all spec IDs, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the specs directory cannot be listed.
    pub fn list_ids(&self) -> SpecflowResult<Vec<String>> {
        let dir = self.root.join("specs");
        if !self.ctx.fs.exists(&dir) {
            return Ok(Vec::new());
        }
        let entries = self
            .ctx
            .fs
            .list_dir(&dir)
            .map_err(|e| SpecflowError::Store(format!("Failed to list specs directory: {e}")))?;
        let mut ids: Vec<String> = entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(SPEC_EXT).map(String::from))
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Loads every readable document. Unreadable ones are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the specs directory cannot be listed.
    pub fn load_all(&self) -> SpecflowResult<Vec<SpecDocument>> {
        let mut docs = Vec::new();
        for id in self.list_ids()? {
            match self.load(&id) {
                Ok(doc) => docs.push(doc),
                Err(e) => tracing::warn!(spec_id = %id, error = %e, "Skipping unreadable spec"),
            }
        }
        Ok(docs)
    }

    /// Replaces the body of a document and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or written.
    pub fn update_body(&self, id: &str, body_md: &str) -> SpecflowResult<()> {
        let mut doc = self.load(id)?;
        doc.body_md = body_md.to_string();
        doc.metadata.updated_at = self.ctx.clock.now();
        self.save(&doc)
    }

    /// Changes the lifecycle status of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or written.
    pub fn set_status(&self, id: &str, status: SpecStatus) -> SpecflowResult<()> {
        let mut doc = self.load(id)?;
        if doc.metadata.status == status {
            return Ok(());
        }
        tracing::info!(
            spec_id = %id,
            from = %doc.metadata.status,
            to = %status,
            "Updating spec status"
        );
        doc.metadata.status = status;
        doc.metadata.updated_at = self.ctx.clock.now();
        self.save(&doc)
    }

    /// Finds documents matching a free-text query, best match first.
    ///
    /// A document's score is the number of query terms that occur in its
    /// title or body, case-insensitively. Documents matching no term are
    /// left out; ties are broken by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed.
    pub fn find_by_query(&self, query: &str) -> SpecflowResult<Vec<SpecDocument>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, SpecDocument)> = self
            .load_all()?
            .into_iter()
            .filter_map(|doc| {
                let haystack = format!("{}\n{}", doc.metadata.title, doc.body_md).to_lowercase();
                let hits = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
                (hits > 0).then_some((hits, doc))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.metadata.id.cmp(&b.1.metadata.id)));
        Ok(scored.into_iter().map(|(_, doc)| doc).collect())
    }

    /// Resolves an exact ID, falling back to the best query match.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::NotFound`] if neither lookup finds a document.
    pub fn resolve(&self, id_or_query: &str) -> SpecflowResult<SpecDocument> {
        match self.load(id_or_query) {
            Err(SpecflowError::NotFound(_)) => self
                .find_by_query(id_or_query)?
                .into_iter()
                .next()
                .ok_or_else(|| SpecflowError::NotFound(id_or_query.to_string())),
            other => other,
        }
    }

    fn spec_path(&self, id: &str) -> PathBuf {
        self.root.join("specs").join(format!("{id}{SPEC_EXT}"))
    }
}

impl SpecRepository for SpecStore<'_> {
    fn get_spec<'b>(&'b self, id: &'b str) -> PortFuture<'b, Option<StoredSpec>> {
        Box::pin(async move {
            match self.load(id) {
                Ok(doc) => Ok(Some(StoredSpec {
                    id: doc.metadata.id,
                    title: doc.metadata.title,
                    body_md: doc.body_md,
                })),
                Err(SpecflowError::NotFound(_)) => Ok(None),
                Err(e) => Err(PortError::from(e)),
            }
        })
    }

    fn update_spec<'b>(&'b self, id: &'b str, body_md: &'b str) -> PortFuture<'b, ()> {
        Box::pin(async move { self.update_body(id, body_md).map_err(PortError::from) })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::adapters::live::clock::FixedClock;
    use crate::adapters::live::shell::LiveShellExecutor;
    use crate::ports::{FileSystem, IdGenerator};
    use crate::spec::{FeatureGroup, Priority, SpecMetadata, ThemeCategory};

    /// In-memory filesystem for testing the store without touching disk.
    struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl FileSystem for MemFs {
        fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| format!("File not found: {}", path.display()).into())
        }

        fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let files = self.files.lock().unwrap();
            files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
        }

        fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
            let files = self.files.lock().unwrap();
            let mut names: Vec<String> = files
                .keys()
                .filter(|k| k.parent() == Some(path))
                .filter_map(|k| k.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect();
            names.sort();
            Ok(names)
        }
    }

    struct FixedId;

    impl IdGenerator for FixedId {
        fn generate_id(&self) -> String {
            "1a2b3c4d-5e6f-7a8b-9c0d-112233445566".to_string()
        }
    }

    fn at(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    fn mem_ctx() -> ServiceContext {
        ServiceContext {
            clock: Box::new(FixedClock(at("2025-04-01T09:00:00Z"))),
            fs: Box::new(MemFs { files: Mutex::new(HashMap::new()) }),
            shell: Box::new(LiveShellExecutor),
            id_gen: Box::new(FixedId),
        }
    }

    fn doc(id: &str, title: &str, body: &str) -> SpecDocument {
        let created = at("2025-03-15T14:30:00Z");
        SpecDocument {
            metadata: SpecMetadata {
                id: id.to_string(),
                title: title.to_string(),
                feature_group: FeatureGroup::Api,
                theme_category: ThemeCategory::Backend,
                priority: Priority::Medium,
                status: SpecStatus::Draft,
                parent_id: None,
                created_at: created,
                updated_at: created,
            },
            body_md: body.to_string(),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        let original = doc("spec-1", "Orders API", "# Orders API\n");

        store.save(&original).unwrap();

        assert_eq!(store.load("spec-1").unwrap(), original);
        assert_eq!(store.list_ids().unwrap(), vec!["spec-1"]);
    }

    #[test]
    fn missing_spec_is_not_found() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        assert!(matches!(store.load("spec-x"), Err(SpecflowError::NotFound(_))));
        assert!(store.list_ids().unwrap().is_empty());
    }

    #[test]
    fn new_ids_use_the_short_prefix() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        assert_eq!(store.new_id(), "spec-1a2b3c4d");
    }

    #[test]
    fn update_body_bumps_timestamp() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-1", "Orders API", "old")).unwrap();

        store.update_body("spec-1", "new").unwrap();

        let loaded = store.load("spec-1").unwrap();
        assert_eq!(loaded.body_md, "new");
        assert_eq!(loaded.metadata.updated_at, at("2025-04-01T09:00:00Z"));
        assert_eq!(loaded.metadata.created_at, at("2025-03-15T14:30:00Z"));
    }

    #[test]
    fn set_status_persists() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-1", "Orders API", "")).unwrap();

        store.set_status("spec-1", SpecStatus::Active).unwrap();

        assert_eq!(store.load("spec-1").unwrap().metadata.status, SpecStatus::Active);
    }

    #[test]
    fn query_ranks_by_term_hits_then_id() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-b", "Orders API", "pagination for orders")).unwrap();
        store.save(&doc("spec-a", "Orders export", "csv")).unwrap();
        store.save(&doc("spec-c", "Billing", "invoices")).unwrap();

        let ids: Vec<String> = store
            .find_by_query("orders pagination")
            .unwrap()
            .into_iter()
            .map(|d| d.metadata.id)
            .collect();
        assert_eq!(ids, vec!["spec-b", "spec-a"]);

        let tied: Vec<String> =
            store.find_by_query("ORDERS").unwrap().into_iter().map(|d| d.metadata.id).collect();
        assert_eq!(tied, vec!["spec-a", "spec-b"]);
    }

    #[test]
    fn resolve_prefers_exact_id() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-1", "Billing", "mentions spec-2")).unwrap();
        store.save(&doc("spec-2", "Orders", "")).unwrap();

        assert_eq!(store.resolve("spec-2").unwrap().metadata.id, "spec-2");
        assert_eq!(store.resolve("billing").unwrap().metadata.id, "spec-1");
        assert!(matches!(store.resolve("nothing"), Err(SpecflowError::NotFound(_))));
    }

    #[test]
    fn corrupt_documents_are_skipped_by_load_all() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-1", "Orders", "")).unwrap();
        ctx.fs.write(Path::new("/store/specs/spec-2.md"), "no front matter").unwrap();

        let docs = store.load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert!(matches!(store.load("spec-2"), Err(SpecflowError::FrontMatter { .. })));
    }

    #[tokio::test]
    async fn repository_port_maps_missing_to_none() {
        let ctx = mem_ctx();
        let store = SpecStore::new(&ctx, Path::new("/store"));
        store.save(&doc("spec-1", "Orders", "body")).unwrap();

        let found = store.get_spec("spec-1").await.unwrap().unwrap();
        assert_eq!(found.body_md, "body");
        assert!(store.get_spec("spec-9").await.unwrap().is_none());

        store.update_spec("spec-1", "changed").await.unwrap();
        assert_eq!(store.load("spec-1").unwrap().body_md, "changed");
    }
}
