use crate::{LoadError, parse_severity};
use camino::Utf8Path;
use serde_json::Value;
use std::collections::BTreeMap;
use template_insight_types::{IssueCode, IssueKind};

/// In-memory lookup table from issue code to [`IssueKind`].
///
/// At most one entry exists per code; adding or loading a code that is
/// already present replaces the previous entry wholesale.
///
/// Lookups are read-only. A registry shared across concurrent analyses must
/// not be mutated while they run; build a fresh one and swap it in instead.
#[derive(Clone, Debug, Default)]
pub struct IssueRegistry {
    kinds: BTreeMap<IssueCode, IssueKind>,
}

impl IssueRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the contents of an issue-kinds JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let mut registry = Self::new();
        registry.load_str(text)?;
        Ok(registry)
    }

    /// Build a registry from an issue-kinds JSON file.
    pub fn from_file(path: &Utf8Path) -> Result<Self, LoadError> {
        let mut registry = Self::new();
        registry.load_file(path)?;
        Ok(registry)
    }

    /// Read `path` and load its entries. See [`IssueRegistry::load_str`].
    pub fn load_file(&mut self, path: &Utf8Path) -> Result<usize, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
        self.load_str(&text)
    }

    /// Load entries from a JSON document shaped like:
    ///
    /// ```json
    /// { "issue_kinds": [ { "code": "NO_MEMBER", "category": "MemberAccess",
    ///                      "default_severity": "error",
    ///                      "default_short_message": "...",
    ///                      "default_detailed_message": "..." } ] }
    /// ```
    ///
    /// The document is validated before anything is inserted, so a failed load
    /// leaves the registry untouched. Records that are not objects or lack a
    /// non-empty string `code` are skipped. Missing or non-string optional
    /// fields become empty strings (severity becomes `Error`).
    ///
    /// Returns the number of entries inserted or replaced.
    pub fn load_str(&mut self, text: &str) -> Result<usize, LoadError> {
        let doc: Value = serde_json::from_str(text)?;
        let items = doc
            .get("issue_kinds")
            .and_then(Value::as_array)
            .ok_or(LoadError::MissingIssueKinds)?;

        let parsed: Vec<IssueKind> = items.iter().filter_map(kind_from_record).collect();
        let count = parsed.len();
        for kind in parsed {
            self.add(kind);
        }
        Ok(count)
    }

    /// Insert or replace the entry for `kind.code`.
    pub fn add(&mut self, kind: IssueKind) {
        self.kinds.insert(kind.code.clone(), kind);
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, code: &str) -> Option<&IssueKind> {
        self.kinds.get(code)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Known codes in lexicographic order.
    pub fn codes(&self) -> impl Iterator<Item = &IssueCode> {
        self.kinds.keys()
    }
}

fn kind_from_record(item: &Value) -> Option<IssueKind> {
    let obj = item.as_object()?;
    let code = obj.get("code").and_then(Value::as_str)?;
    if code.is_empty() {
        return None;
    }

    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(IssueKind {
        code: IssueCode::new(code),
        category: text("category"),
        default_severity: obj
            .get("default_severity")
            .and_then(Value::as_str)
            .map(parse_severity)
            .unwrap_or_default(),
        default_short_message: text("default_short_message"),
        default_detailed_message: text("default_detailed_message"),
    })
}
