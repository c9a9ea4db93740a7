//! Script store implementations

use loadbench_core::{Error, Result, Script, ScriptStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed script store
///
/// Persists each script as one pretty-printed JSON document at
/// `<dir>/<id>.json`, so scripts survive restarts and stay hand-editable.
#[derive(Debug)]
pub struct FileScriptStore {
    dir: PathBuf,
}

impl FileScriptStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl ScriptStore for FileScriptStore {
    fn save(&self, script: &Script) -> Result<()> {
        let json = serde_json::to_string_pretty(script)
            .map_err(|e| Error::validation(format!("unserializable script: {e}")))?;
        fs::write(self.path_for(&script.id), json)?;
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Script> {
        // Read directly and classify the miss afterwards: a separate
        // exists() check would race with concurrent deletion.
        let data = fs::read_to_string(self.path_for(id)).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::not_found(format!("script {id}"))
            } else {
                Error::Io(e)
            }
        })?;
        serde_json::from_str(&data)
            .map_err(|e| Error::validation(format!("corrupt script document {id}: {e}")))
    }

    fn find_all(&self) -> Result<Vec<Script>> {
        let mut scripts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let data = fs::read_to_string(&path)?;
                match serde_json::from_str(&data) {
                    Ok(script) => scripts.push(script),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), %error, "skipping corrupt script document");
                    }
                }
            }
        }
        // Directory iteration order is platform-defined.
        scripts.sort_by(|a: &Script, b: &Script| a.id.cmp(&b.id));
        Ok(scripts)
    }
}

/// In-memory script store for tests and throwaway runs
#[derive(Debug, Default)]
pub struct MemoryScriptStore {
    scripts: RwLock<HashMap<String, Script>>,
}

impl MemoryScriptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScriptStore for MemoryScriptStore {
    fn save(&self, script: &Script) -> Result<()> {
        self.scripts
            .write()
            .insert(script.id.clone(), script.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Script> {
        self.scripts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("script {id}")))
    }

    fn find_all(&self) -> Result<Vec<Script>> {
        let mut scripts: Vec<Script> = self.scripts.read().values().cloned().collect();
        scripts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(scripts)
    }
}
