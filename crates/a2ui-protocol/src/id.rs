//! Component ID generation
//!
//! [`IdGenerator`] hands out kebab-case IDs with a per-generator counter.
//! Each producer session owns its own generator; there is no process-wide
//! counter.

use uuid::Uuid;

/// Namespace whose types get readable IDs
const BUILTIN_NAMESPACE: &str = "a2ui.";

/// Sequential ID generator for one producer session
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    /// Create generator starting at 1
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next ID
    ///
    /// Strategies, in order:
    /// 1. `prefix` given: `"{prefix}-{n}"` (`stat-1`)
    /// 2. built-in `a2ui.` type: kebab-cased name plus counter (`a2ui.StatCard` → `stat-card-2`)
    /// 3. otherwise, custom namespaces included: `component-{8 hex}` from a random UUID
    pub fn next_id(&mut self, component_type: &str, prefix: Option<&str>) -> String {
        self.counter += 1;

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            return format!("{prefix}-{}", self.counter);
        }

        match component_type.strip_prefix(BUILTIN_NAMESPACE) {
            Some(name) if !name.is_empty() => {
                format!("{}-{}", kebab_case(name), self.counter)
            }
            _ => {
                let hex = Uuid::new_v4().simple().to_string();
                format!("component-{}", &hex[..8])
            }
        }
    }

    /// Number of IDs issued since creation or last reset
    #[inline]
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter
    }

    /// Restart numbering at 1
    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// `StatCard` → `stat-card`, `TLDR` → `t-l-d-r`
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_strategy() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id("a2ui.StatCard", Some("stat")), "stat-1");
        assert_eq!(ids.next_id("a2ui.Section", Some("intro")), "intro-2");
    }

    #[test]
    fn type_strategy() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id("a2ui.VideoCard", None), "video-card-1");
        assert_eq!(ids.next_id("a2ui.TLDR", None), "t-l-d-r-2");
    }

    #[test]
    fn custom_namespaces_use_fallback() {
        let mut ids = IdGenerator::new();
        for ty in ["acme.StatCard", "x.y.Z", "a2ui."] {
            let id = ids.next_id(ty, None);
            assert!(id.starts_with("component-"), "{ty} gave {id}");
        }
        assert_eq!(ids.issued(), 3);
        assert_eq!(ids.next_id("a2ui.StatCard", None), "stat-card-4");
    }

    #[test]
    fn fallback_is_random_but_shaped() {
        let mut ids = IdGenerator::new();
        let id = ids.next_id("plain", None);
        assert!(id.starts_with("component-"));
        assert_eq!(id.len(), "component-".len() + 8);
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn reset_restarts_numbering() {
        let mut ids = IdGenerator::new();
        ids.next_id("a2ui.StatCard", None);
        ids.next_id("a2ui.StatCard", None);
        ids.reset();
        assert_eq!(ids.next_id("a2ui.StatCard", None), "stat-card-1");
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGenerator::new();
        let mut b = IdGenerator::new();
        a.next_id("a2ui.StatCard", None);
        assert_eq!(b.next_id("a2ui.StatCard", None), "stat-card-1");
    }
}
