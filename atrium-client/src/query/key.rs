//! Hierarchical query keys
//!
//! A query key identifies one cached read. Keys are hierarchical:
//! every specific key is a strict extension of exactly one broader key
//! (`detail(id)` extends `details()` extends `all()`), so invalidating
//! a prefix reaches the whole subtree. Keys compare structurally:
//! parameter segments are canonical JSON text, so two calls with
//! structurally equal arguments produce equal keys.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One segment of a query key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySegment {
    /// Fixed tag: the entity scope, "list", "paged", "detail", or an id
    Text(String),
    /// Normalized parameter object as canonical JSON text
    Params(String),
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "{}", t),
            Self::Params(p) => write!(f, "{}", p),
        }
    }
}

/// Structured, comparable cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeySegment>);

impl QueryKey {
    fn root(scope: &str) -> Self {
        Self(vec![KeySegment::Text(scope.to_string())])
    }

    fn push_text(mut self, text: impl Into<String>) -> Self {
        self.0.push(KeySegment::Text(text.into()));
        self
    }

    fn push_params(mut self, value: Value) -> Self {
        // serde_json maps are BTreeMaps, so `to_string` is canonical.
        self.0.push(KeySegment::Params(value.to_string()));
        self
    }

    /// The key's segments, broadest first
    pub fn segments(&self) -> &[KeySegment] {
        &self.0
    }

    /// Subtree membership: whether this key sits under `prefix`
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// Strict extension: under `prefix` and strictly longer
    pub fn extends(&self, prefix: &QueryKey) -> bool {
        self.0.len() > prefix.0.len() && self.starts_with(prefix)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Per-entity query key factory
#[derive(Debug, Clone, Copy)]
pub struct EntityKeys {
    scope: &'static str,
}

impl EntityKeys {
    /// Create a factory for one entity family
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    /// The entity family name
    pub fn scope(&self) -> &'static str {
        self.scope
    }

    /// Key identifying the whole entity family
    pub fn all(&self) -> QueryKey {
        QueryKey::root(self.scope)
    }

    /// Invalidation target for "any list changed"
    pub fn lists(&self) -> QueryKey {
        self.all().push_text("list")
    }

    /// Exact key for one unpaged, company-scoped list
    pub fn list(&self, company_id: Option<&str>) -> QueryKey {
        let scope = company_id.unwrap_or("all");
        self.lists()
            .push_params(serde_json::json!({ "company_id": scope }))
    }

    /// Exact key for one paginated, filtered query
    ///
    /// A missing filter normalizes to the empty object so structural
    /// equality is well-defined.
    pub fn paged<F: Serialize>(&self, filter: Option<&F>) -> QueryKey {
        let params = match filter.and_then(|f| serde_json::to_value(f).ok()) {
            Some(Value::Object(map)) => Value::Object(map),
            _ => Value::Object(serde_json::Map::new()),
        };
        self.lists().push_text("paged").push_params(params)
    }

    /// Invalidation target for "any detail changed"
    pub fn details(&self) -> QueryKey {
        self.all().push_text("detail")
    }

    /// Exact key for one entity's detail view
    pub fn detail(&self, id: &str) -> QueryKey {
        self.details().push_text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EmployeeFilter;

    const KEYS: EntityKeys = EntityKeys::new("employees");

    #[test]
    fn missing_and_default_filters_are_equal() {
        let none = KEYS.paged(None::<&EmployeeFilter>);
        let default = KEYS.paged(Some(&EmployeeFilter::default()));
        assert_eq!(none, default);
    }

    #[test]
    fn equal_arguments_produce_equal_keys() {
        let a = EmployeeFilter {
            company_id: Some("co-1".into()),
            page_number: Some(2),
            page_size: Some(25),
            ..Default::default()
        };
        let b = EmployeeFilter {
            company_id: Some("co-1".into()),
            page_number: Some(2),
            page_size: Some(25),
            ..Default::default()
        };
        assert_eq!(KEYS.paged(Some(&a)), KEYS.paged(Some(&b)));
    }

    #[test]
    fn different_filters_produce_different_keys() {
        let a = EmployeeFilter {
            page_number: Some(1),
            ..Default::default()
        };
        let b = EmployeeFilter {
            page_number: Some(2),
            ..Default::default()
        };
        assert_ne!(KEYS.paged(Some(&a)), KEYS.paged(Some(&b)));
    }

    #[test]
    fn keys_form_a_strict_hierarchy() {
        let detail = KEYS.detail("emp-1");
        assert!(detail.extends(&KEYS.details()));
        assert!(detail.extends(&KEYS.all()));
        assert!(!KEYS.details().extends(&detail));

        let paged = KEYS.paged(None::<&EmployeeFilter>);
        assert!(paged.extends(&KEYS.lists()));
        assert!(paged.extends(&KEYS.all()));

        assert!(KEYS.list(Some("co-1")).extends(&KEYS.lists()));
    }

    #[test]
    fn invalidating_all_reaches_every_derived_key() {
        let all = KEYS.all();
        for key in [
            KEYS.lists(),
            KEYS.list(None),
            KEYS.list(Some("co-1")),
            KEYS.paged(None::<&EmployeeFilter>),
            KEYS.details(),
            KEYS.detail("emp-1"),
        ] {
            assert!(key.starts_with(&all));
        }
    }

    #[test]
    fn scopes_do_not_overlap() {
        let tags = EntityKeys::new("tags");
        assert!(!tags.detail("t-1").starts_with(&KEYS.all()));
        assert!(!KEYS.all().starts_with(&tags.all()));
    }

    #[test]
    fn detail_key_distinguishes_ids() {
        assert_ne!(KEYS.detail("emp-1"), KEYS.detail("emp-2"));
    }
}
