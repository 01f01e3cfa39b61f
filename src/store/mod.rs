//! Path-addressed JSON configuration store
//!
//! A [`ConfigStore`] holds one JSON object in memory and mirrors it to a
//! backing file. Values are read and written through dot-separated key paths
//! (`"app.name"`); every write persists the whole document.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub mod error;
pub mod path;


pub use error::{ConfigError, ConfigResult};
pub use path::KeyPath;

/// Hierarchical configuration backed by a JSON file.
///
/// The tree is loaded once at construction and mutated only through
/// [`set`](Self::set). The store owns its tree exclusively; two stores
/// pointed at the same file do not coordinate, and the last persist wins.
///
/// # Example
///
/// ```
/// use dotconf::ConfigStore;
///
/// let dir = tempfile::tempdir()?;
/// let mut store = ConfigStore::open(dir.path().join("config.json"));
/// store.set("app.name", "BigUtility")?;
/// assert_eq!(store.get_or("app.name", ""), "BigUtility");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    tree: Map<String, Value>,
}

impl ConfigStore {
    /// Conventional backing file name used by [`open_default`](Self::open_default).
    pub const DEFAULT_FILE: &'static str = "config.json";

    /// Open a store backed by `path`.
    ///
    /// A missing file is not an error; the store starts empty. An unreadable
    /// or malformed file also yields an empty store, with the failure logged
    /// rather than raised. Use [`load`](Self::load) to surface those
    /// failures instead.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tree = match Self::load_tree(&path) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("starting with an empty config: {e}");
                Map::new()
            }
        };
        Self { path, tree }
    }

    /// Open a store backed by [`DEFAULT_FILE`](Self::DEFAULT_FILE) in the
    /// current directory.
    pub fn open_default() -> Self {
        Self::open(Self::DEFAULT_FILE)
    }

    /// Strict variant of [`open`](Self::open): an unreadable or malformed
    /// backing file is returned as [`ConfigError::Read`] or
    /// [`ConfigError::Parse`]. A missing file still yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let tree = Self::load_tree(&path)?;
        Ok(Self { path, tree })
    }

    fn load_tree(path: &Path) -> ConfigResult<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // Deserializing straight into a Map rejects non-object roots too.
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document.
    pub fn tree(&self) -> &Map<String, Value> {
        &self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Resolve `path` to a value.
    ///
    /// Returns `None` when any traversal segment is missing, any intermediate
    /// value is not a mapping, or the leaf is absent. A stored JSON `null` is
    /// present and returns `Some(&Value::Null)`. Never mutates the tree.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let (parents, leaf) = KeyPath::new(path).split_leaf();
        let mut table = &self.tree;
        for segment in parents {
            table = table.get(segment)?.as_object()?;
        }
        table.get(leaf)
    }

    /// Resolve `path`, falling back to `default` when absent.
    pub fn get_or(&self, path: &str, default: impl Into<Value>) -> Value {
        self.get(path).cloned().unwrap_or_else(|| default.into())
    }

    /// Typed counterpart of [`get`](Self::get) for callers that need a
    /// distinguishable miss.
    pub fn lookup(&self, path: &str) -> ConfigResult<&Value> {
        self.get(path).ok_or_else(|| ConfigError::NotFound {
            path: path.to_string(),
        })
    }

    /// Write `value` at `path`, creating missing intermediate mappings, and
    /// persist the whole document.
    ///
    /// If a traversal segment already holds a non-mapping value the call
    /// fails with [`ConfigError::Collision`] and the tree is left untouched.
    /// The leaf itself is always replaced, an existing subtree included;
    /// addressing a location with `set` is an explicit overwrite of it.
    /// If persistence fails the mutation is retained in memory and
    /// [`ConfigError::Write`] is returned: the value is visible in-process
    /// only until a later persist succeeds.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> ConfigResult<()> {
        let (parents, leaf) = KeyPath::new(path).split_leaf();
        self.check_traversal(path, &parents)?;

        let mut table = &mut self.tree;
        for segment in &parents {
            let node = table
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            table = match node {
                Value::Object(map) => map,
                // check_traversal already rejected non-mapping segments
                _ => {
                    return Err(ConfigError::Collision {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
        }
        table.insert(leaf.to_string(), value.into());
        debug!("set {path} in {:?}", self.path);

        self.persist()
    }

    /// Rejects colliding paths before any mutation so a failed `set` creates
    /// no intermediate nodes.
    fn check_traversal(&self, path: &str, parents: &[&str]) -> ConfigResult<()> {
        let mut table = &self.tree;
        for segment in parents {
            match table.get(*segment) {
                Some(Value::Object(map)) => table = map,
                Some(_) => {
                    return Err(ConfigError::Collision {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
                // remaining segments will be freshly created
                None => break,
            }
        }
        Ok(())
    }

    /// Serialize the full tree and overwrite the backing file via a sibling
    /// temp file and atomic rename, so a crash mid-write never truncates the
    /// previous document.
    fn persist(&self) -> ConfigResult<()> {
        let result = (|| {
            let json = serde_json::to_string_pretty(&self.tree).map_err(std::io::Error::other)?;
            let mut tmp = self.path.clone().into_os_string();
            tmp.push(".tmp");
            let tmp = PathBuf::from(tmp);
            fs::write(&tmp, json)?;
            fs::rename(&tmp, &self.path)
        })();

        result.map_err(|source| {
            let err = ConfigError::Write {
                path: self.path.clone(),
                source,
            };
            error!("{err}");
            err
        })?;

        debug!("saved config to {:?}", self.path);
        Ok(())
    }
}
