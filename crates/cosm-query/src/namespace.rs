//! Dotted-path namespaces contributed by query extensions.
//!
//! An extension factory returns a [`Namespace`]: a flat list of
//! `(path, value)` pairs such as `("bank", BankExtension)` or
//! `("ibc.transfer", TransferExtension)`. The builder merges every factory's
//! namespace into one [`NamespaceTree`]. A path may hold either one value or
//! further children, never both, and never two values.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::QueryError;

/// A type-erased extension value.
pub type ExtensionValue = Arc<dyn Any + Send + Sync>;

/// The values one extension factory contributes, keyed by dotted path.
#[derive(Default, Clone)]
pub struct Namespace {
    entries: Vec<(String, ExtensionValue)>,
}

impl Namespace {
    /// An empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A namespace holding a single value at `path`.
    pub fn leaf<T: Send + Sync + 'static>(path: impl Into<String>, value: T) -> Self {
        Self::new().and(path, value)
    }

    /// Add another value at `path`.
    pub fn and<T: Send + Sync + 'static>(mut self, path: impl Into<String>, value: T) -> Self {
        self.entries.push((path.into(), Arc::new(value)));
        self
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the namespace contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.paths()).finish()
    }
}

#[derive(Clone)]
enum Node {
    Leaf(ExtensionValue),
    Branch(BTreeMap<String, Node>),
}

/// The merged namespace of a built client.
#[derive(Default)]
pub struct NamespaceTree {
    root: BTreeMap<String, Node>,
}

impl NamespaceTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every entry of `namespace` into the tree.
    ///
    /// # Returns
    /// `ExtensionNamespaceCollision` naming the first contested path, or
    /// `InvalidNamespacePath` for an empty path or segment. A failed merge
    /// leaves the tree as it was.
    pub fn merge(&mut self, namespace: Namespace) -> Result<(), QueryError> {
        // Leaves are `Arc`s, so staging on a copy is shallow.
        let mut staged = self.root.clone();
        for (path, value) in namespace.entries {
            insert(&mut staged, &path, value)?;
        }
        self.root = staged;
        Ok(())
    }

    /// Look up the value at `path` and downcast it to `T`.
    pub fn get<T: 'static>(&self, path: &str) -> Result<&T, QueryError> {
        let not_found = || QueryError::NamespaceNotFound(path.to_string());
        let segments = split_path(path).map_err(|_| not_found())?;

        let mut level = &self.root;
        let mut found = None;
        for (i, segment) in segments.iter().enumerate() {
            match level.get(*segment) {
                Some(Node::Branch(children)) if i + 1 < segments.len() => level = children,
                Some(Node::Leaf(value)) if i + 1 == segments.len() => found = Some(value),
                _ => return Err(not_found()),
            }
        }

        let value = found.ok_or_else(not_found)?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| QueryError::NamespaceTypeMismatch {
                path: path.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// True when a value (not a branch) lives at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.paths().iter().any(|p| p == path)
    }

    /// Every leaf path, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, "", &mut out);
        out
    }
}

impl std::fmt::Debug for NamespaceTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.paths()).finish()
    }
}

fn insert(root: &mut BTreeMap<String, Node>, path: &str, value: ExtensionValue) -> Result<(), QueryError> {
    let segments = split_path(path)?;
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| QueryError::InvalidNamespacePath(path.to_string()))?;

    let mut level = root;
    for (depth, segment) in parents.iter().enumerate() {
        let node = level
            .entry(segment.to_string())
            .or_insert_with(|| Node::Branch(BTreeMap::new()));
        level = match node {
            Node::Branch(children) => children,
            Node::Leaf(_) => {
                return Err(QueryError::ExtensionNamespaceCollision {
                    path: segments[..=depth].join("."),
                })
            }
        };
    }

    if level.contains_key(*last) {
        return Err(QueryError::ExtensionNamespaceCollision {
            path: path.to_string(),
        });
    }
    level.insert(last.to_string(), Node::Leaf(value));
    Ok(())
}

fn split_path(path: &str) -> Result<Vec<&str>, QueryError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(QueryError::InvalidNamespacePath(path.to_string()));
    }
    Ok(segments)
}

fn collect_paths(level: &BTreeMap<String, Node>, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in level {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            Node::Leaf(_) => out.push(path),
            Node::Branch(children) => collect_paths(children, &path, out),
        }
    }
}
