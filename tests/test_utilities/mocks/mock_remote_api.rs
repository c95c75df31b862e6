use errata_roundtrip::errata_publish::domain::{Task, TaskResult, TaskState};
use errata_roundtrip::ports::outbound::RemoteApi;
use errata_roundtrip::shared::Result;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::io::Write;

/// Mock RemoteApi behaving like a tiny in-memory content server.
///
/// Imported erratum metadata is captured and reflected back through the
/// generated repomd.xml / updateinfo.xml pair, so round-trip checks can run
/// entirely offline. Behavior knobs simulate the server defects the checks
/// are supposed to catch.
pub struct MockRemoteApi {
    imported: RefCell<Vec<Value>>,
    pub deleted: RefCell<Vec<String>>,
    tasks_per_import: usize,
    task_state: TaskState,
    task_result: Option<TaskResult>,
    emit_reboot_suggested: bool,
    duplicate_updates: bool,
    mangle_descriptions: bool,
    fail_post_containing: Option<&'static str>,
}

impl MockRemoteApi {
    pub fn new() -> Self {
        Self {
            imported: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
            tasks_per_import: 1,
            task_state: TaskState::Finished,
            task_result: None,
            emit_reboot_suggested: false,
            duplicate_updates: false,
            mangle_descriptions: false,
            fail_post_containing: None,
        }
    }

    /// Number of tasks each import spawns (default 1).
    pub fn with_tasks_per_import(mut self, count: usize) -> Self {
        self.tasks_per_import = count;
        self
    }

    /// Every task reports the given state.
    pub fn with_task_state(mut self, state: TaskState) -> Self {
        self.task_state = state;
        self
    }

    /// Every finished task carries a failed result payload with the given details.
    pub fn with_failed_task_result(mut self, details: &str) -> Self {
        self.task_result = Some(TaskResult {
            success_flag: false,
            details: json!(details),
        });
        self
    }

    /// The generated XML gains a reboot_suggested element on every update.
    pub fn with_reboot_suggested_emitted(mut self) -> Self {
        self.emit_reboot_suggested = true;
        self
    }

    /// Every update node is emitted twice, producing duplicate identifiers.
    pub fn with_duplicate_updates(mut self) -> Self {
        self.duplicate_updates = true;
        self
    }

    /// Descriptions are re-wrapped in transit, corrupting the round trip.
    pub fn with_mangled_descriptions(mut self) -> Self {
        self.mangle_descriptions = true;
        self
    }

    /// POSTs to any path containing the given fragment fail at transport level.
    pub fn with_post_failure(mut self, path_fragment: &'static str) -> Self {
        self.fail_post_containing = Some(path_fragment);
        self
    }

    pub fn deleted_hrefs(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }

    fn render_update(&self, unit: &Value, out: &mut String) {
        let id = unit["id"].as_str().unwrap_or_default();
        let mut description = unit["description"].as_str().unwrap_or_default().to_string();
        if self.mangle_descriptions {
            description = description.replace(' ', "\n");
        }
        out.push_str("<update>");
        out.push_str(&format!("<id>{id}</id>"));
        out.push_str(&format!("<description>{description}</description>"));
        if self.emit_reboot_suggested {
            out.push_str("<reboot_suggested>False</reboot_suggested>");
        }
        out.push_str("</update>");
    }

    fn render_updateinfo(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<updates>");
        for unit in self.imported.borrow().iter() {
            self.render_update(unit, &mut out);
            if self.duplicate_updates {
                self.render_update(unit, &mut out);
            }
        }
        out.push_str("</updates>");
        out
    }

    fn gzip(text: &str) -> Vec<u8> {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }
}

impl Default for MockRemoteApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteApi for MockRemoteApi {
    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        if let Some(fragment) = self.fail_post_containing {
            if path.contains(fragment) {
                anyhow::bail!("mock transport failure for {path}");
            }
        }

        if path.contains("content/uploads") {
            return Ok(json!({"upload_id": "mock-upload-id"}));
        }
        if path.contains("import_upload") {
            self.imported.borrow_mut().push(body["unit_metadata"].clone());
            let refs: Vec<Value> = (0..self.tasks_per_import)
                .map(|i| json!({"_href": format!("/pulp/api/v2/tasks/import-{i}/")}))
                .collect();
            return Ok(json!({"spawned_tasks": refs}));
        }
        if path.contains("actions/publish") {
            return Ok(json!({"spawned_tasks": [{"_href": "/pulp/api/v2/tasks/publish-0/"}]}));
        }
        if path.contains("distributors") {
            return Ok(json!({
                "id": "yum_distributor",
                "config": {"http": true, "https": true, "relative_url": "mock-repo-rel"},
            }));
        }
        if path.contains("repositories") {
            return Ok(json!({
                "_href": "/pulp/api/v2/repositories/mock-repo/",
                "id": "mock-repo",
            }));
        }
        anyhow::bail!("mock has no POST handler for {path}")
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        anyhow::bail!("mock has no GET handler for {path}")
    }

    fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        if path.ends_with("repodata/repomd.xml") {
            let repomd = r#"<?xml version="1.0" encoding="UTF-8"?>
<repomd xmlns="http://linux.duke.edu/metadata/repo">
  <data type="updateinfo">
    <location href="repodata/mock-updateinfo.xml.gz"/>
  </data>
</repomd>"#;
            return Ok(repomd.as_bytes().to_vec());
        }
        if path.contains("updateinfo") {
            return Ok(Self::gzip(&self.render_updateinfo()));
        }
        anyhow::bail!("mock has no content at {path}")
    }

    fn delete(&self, path: &str) -> Result<()> {
        self.deleted.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn wait_task(&self, href: &str) -> Result<Task> {
        Ok(Task {
            href: Some(href.to_string()),
            state: self.task_state,
            result: self.task_result.clone(),
        })
    }
}

// Forwarding impl so a test can keep the mock and hand a borrow to the use
// case, then inspect captured state afterwards.
impl RemoteApi for &MockRemoteApi {
    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).post(path, body)
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        (**self).get_json(path)
    }

    fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).get_bytes(path)
    }

    fn delete(&self, path: &str) -> Result<()> {
        (**self).delete(path)
    }

    fn wait_task(&self, href: &str) -> Result<Task> {
        (**self).wait_task(href)
    }
}
