use std::{
    collections::{BTreeMap, BTreeSet},
    panic,
};

use tracing::{debug, info, warn};

use super::{
    error::panic_message,
    snippet::{self, Snippet, SnippetDescriptor},
};

/// Group used for snippets that declare no namespace.
pub const ROOT_GROUP: &str = "misc";

/// Leading namespace segment stripped from `module_path!()` groups.
const CRATE_SEGMENT: &str = env!("CARGO_CRATE_NAME");

/// Every discovered snippet, partitioned by whether it can run here.
///
/// A key lives in exactly one of `runnable`, `broken` or `restricted`.
pub struct Registry {
    pub(super) platform: String,
    pub(super) runnable: BTreeMap<String, Box<dyn Snippet>>,
    /// key -> reason construction failed
    pub(super) broken: BTreeMap<String, String>,
    /// key -> platform the snippet needs
    pub(super) restricted: BTreeMap<String, String>,
    /// lowercase short name -> runnable keys sharing it
    pub(super) short_names: BTreeMap<String, BTreeSet<String>>,
}

impl Registry {
    /// Build a registry from every snippet registered in this binary.
    #[must_use]
    pub fn discover(platform: &str) -> Self {
        Self::build(snippet::registered(), platform)
    }

    /// Build a registry from an explicit descriptor list.
    ///
    /// Construction failures never abort discovery; they are recorded as
    /// broken entries and the remaining descriptors are still processed.
    pub fn build<'a, I>(descriptors: I, platform: &str) -> Self
    where
        I: IntoIterator<Item = &'a SnippetDescriptor>,
    {
        let mut registry = Self {
            platform: platform.to_string(),
            runnable: BTreeMap::new(),
            broken: BTreeMap::new(),
            restricted: BTreeMap::new(),
            short_names: BTreeMap::new(),
        };

        for descriptor in descriptors {
            registry.admit(descriptor);
        }
        registry.index_short_names();

        debug!(
            platform,
            runnable = registry.runnable.len(),
            broken = registry.broken.len(),
            restricted = registry.restricted.len(),
            "snippet discovery finished"
        );
        registry
    }

    fn admit(&mut self, descriptor: &SnippetDescriptor) {
        match instantiate(descriptor, &self.platform) {
            Admission::Runnable { key, snippet } => {
                debug!(key = %key, "registered snippet");
                self.claim(&key);
                self.runnable.insert(key, snippet);
            }
            Admission::Restricted { key, required } => {
                debug!(key = %key, required = %required, "snippet not supported on this platform");
                self.claim(&key);
                self.restricted.insert(key, required);
            }
            Admission::Broken { key, reason } => {
                info!(key = %key, reason = %reason, "snippet failed to load");
                self.claim(&key);
                self.broken.insert(key, reason);
            }
        }
    }

    /// Drop any earlier entry for `key` so the later descriptor wins.
    fn claim(&mut self, key: &str) {
        let replaced = self.runnable.remove(key).is_some()
            | self.broken.remove(key).is_some()
            | self.restricted.remove(key).is_some();
        if replaced {
            warn!(key, "two snippets derive the same key; keeping the later one");
        }
    }

    fn index_short_names(&mut self) {
        for (key, snippet) in &self.runnable {
            self.short_names
                .entry(short_name(snippet.as_ref()))
                .or_default()
                .insert(key.clone());
        }
    }

    /// Platform label this registry was built for.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Runnable snippets, ordered by key.
    pub fn runnable(&self) -> impl Iterator<Item = (&str, &dyn Snippet)> {
        self.runnable.iter().map(|(k, s)| (k.as_str(), s.as_ref()))
    }

    /// Keys that failed to construct, with the failure reason.
    #[must_use]
    pub const fn broken(&self) -> &BTreeMap<String, String> {
        &self.broken
    }

    /// Keys excluded on this platform, with the platform they need.
    #[must_use]
    pub const fn restricted(&self) -> &BTreeMap<String, String> {
        &self.restricted
    }

    /// Runnable keys sharing a short name, sorted.
    #[must_use]
    pub fn keys_for_short_name(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.short_names.get(&name.trim().to_lowercase())
    }

    /// True when nothing at all was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runnable.is_empty() && self.broken.is_empty() && self.restricted.is_empty()
    }
}

/// Where a descriptor lands once it has been constructed.
pub enum Admission {
    Runnable {
        key: String,
        snippet: Box<dyn Snippet>,
    },
    /// Built, but needs another platform.
    Restricted { key: String, required: String },
    /// The factory errored, panicked or yielded an unnamed snippet.
    Broken { key: String, reason: String },
}

impl Admission {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Runnable { key, .. } | Self::Restricted { key, .. } | Self::Broken { key, .. } => {
                key
            }
        }
    }
}

/// Construct one descriptor and derive its key.
#[must_use]
pub fn instantiate(descriptor: &SnippetDescriptor, platform: &str) -> Admission {
    let group = group_path(descriptor.group);
    let broken = |reason: String| Admission::Broken {
        key: join_key(&group, &type_short_name(descriptor.type_name)),
        reason,
    };

    let snippet = match panic::catch_unwind(descriptor.factory) {
        Ok(Ok(snippet)) => snippet,
        Ok(Err(err)) => return broken(format!("{err:#}")),
        Err(payload) => return broken(panic_message(payload.as_ref())),
    };

    let name = short_name(snippet.as_ref());
    if name.is_empty() {
        return broken("snippet reported an empty name".to_string());
    }
    let key = join_key(&group, &name);

    match descriptor.required_platform {
        Some(required) if !required.eq_ignore_ascii_case(platform) => Admission::Restricted {
            key,
            required: required.to_string(),
        },
        _ => Admission::Runnable { key, snippet },
    }
}

/// Normalise a raw namespace into a `/`-separated lowercase path.
///
/// `snippet_runner::snippets::first_week`, `Snippets.First_Week` and
/// `snippets/first_week` all become `snippets/first_week`. An empty group
/// becomes [`ROOT_GROUP`].
#[must_use]
pub fn group_path(raw: &str) -> String {
    let mut segments: Vec<String> = raw
        .split([':', '.', '/', '\\'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect();
    if segments.first().is_some_and(|s| s == CRATE_SEGMENT) {
        segments.remove(0);
    }
    if segments.is_empty() {
        ROOT_GROUP.to_string()
    } else {
        segments.join("/")
    }
}

fn join_key(group: &str, name: &str) -> String {
    format!("{group}/{name}")
}

fn short_name(snippet: &dyn Snippet) -> String {
    snippet.name().trim().to_lowercase()
}

fn type_short_name(type_name: &str) -> String {
    type_name
        .rsplit("::")
        .next()
        .unwrap_or(type_name)
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::core::fixtures::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn build_logged(descriptors: &[&SnippetDescriptor]) -> (Registry, String) {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let reg = tracing::subscriber::with_default(subscriber, || {
            Registry::build(descriptors.iter().copied(), "Linux")
        });
        (reg, logs.text())
    }

    #[test]
    fn group_paths_are_normalised() {
        assert_eq!(group_path("snippet_runner::snippets::first_week"), "snippets/first_week");
        assert_eq!(group_path("Snippets.SecondWeek"), "snippets/secondweek");
        assert_eq!(group_path("/week1//"), "week1");
        assert_eq!(group_path("snippet_runner"), ROOT_GROUP);
        assert_eq!(group_path(""), ROOT_GROUP);
    }

    #[test]
    fn keys_combine_group_and_lowercase_name() {
        let reg = Registry::build([&HELLO_WEEK1, &HELLO_WEEK2, &MATH], "Linux");
        let keys: Vec<&str> = reg.runnable().map(|(k, _)| k).collect();
        assert_eq!(keys, ["misc/math", "week1/hello", "week2/hello"]);
    }

    #[test]
    fn construction_failure_is_isolated() {
        let reg = Registry::build([&BROKEN, &HELLO_WEEK1, &EXPLODING, &MATH], "Linux");

        assert_eq!(reg.runnable().count(), 2);
        assert_eq!(
            reg.broken().get("first_week/brokensnippet").map(String::as_str),
            Some("broken on purpose")
        );
        assert_eq!(
            reg.broken().get("week3/exploding").map(String::as_str),
            Some("constructor exploded")
        );
    }

    #[test]
    fn empty_names_are_broken() {
        let reg = Registry::build([&NAMELESS], "Linux");
        assert!(reg.broken().contains_key("week3/nameless"));
        assert_eq!(reg.runnable().count(), 0);
    }

    #[test]
    fn every_key_lands_in_exactly_one_set() {
        let all = [
            &HELLO_WEEK1,
            &HELLO_WEEK2,
            &MATH,
            &BROKEN,
            &EXPLODING,
            &FAULTY,
            &WINDOWS_ONLY,
        ];
        let reg = Registry::build(all, "Linux");

        let runnable: BTreeSet<&str> = reg.runnable().map(|(k, _)| k).collect();
        let broken: BTreeSet<&str> = reg.broken().keys().map(String::as_str).collect();
        let restricted: BTreeSet<&str> = reg.restricted().keys().map(String::as_str).collect();

        assert!(runnable.is_disjoint(&broken));
        assert!(runnable.is_disjoint(&restricted));
        assert!(broken.is_disjoint(&restricted));
        assert_eq!(runnable.len() + broken.len() + restricted.len(), all.len());
    }

    #[test]
    fn platform_gated_snippets_are_restricted_elsewhere() {
        let reg = Registry::build([&WINDOWS_ONLY, &MATH], "Linux");
        assert_eq!(
            reg.restricted().get("winforms/winforms-test").map(String::as_str),
            Some("Windows")
        );
        assert!(reg.runnable().all(|(k, _)| k != "winforms/winforms-test"));
    }

    #[test]
    fn platform_gated_snippets_run_on_their_platform() {
        let reg = Registry::build([&WINDOWS_ONLY], "windows");
        assert!(reg.restricted().is_empty());
        assert_eq!(reg.runnable().count(), 1);
    }

    #[test]
    fn later_descriptor_wins_on_key_collision() {
        let reg = Registry::build([&HELLO_WEEK2, &HELLO_WEEK2_UPPER], "Linux");
        let (_, snippet) = reg.runnable().next().expect("one snippet");
        assert_eq!(reg.runnable().count(), 1);
        assert_eq!(snippet.name(), "HELLO");
    }

    #[test]
    fn broken_entry_replaces_runnable_key_and_its_short_name() {
        let (reg, logs) = build_logged(&[&HELLO_WEEK2, &BROKEN_HELLO_WEEK2]);

        assert!(logs.contains("two snippets derive the same key"));
        assert!(logs.contains("week2/hello"));

        assert_eq!(
            reg.broken().get("week2/hello").map(String::as_str),
            Some("broken on purpose")
        );
        assert_eq!(reg.runnable().count(), 0);
        assert!(reg.restricted().is_empty());
        assert!(reg.keys_for_short_name("hello").is_none());
    }

    #[test]
    fn distinct_keys_log_no_collision() {
        let (_, logs) = build_logged(&[&HELLO_WEEK1, &HELLO_WEEK2, &MATH]);
        assert!(!logs.contains("two snippets derive the same key"));
    }

    #[test]
    fn runnable_entry_replaces_restricted_key() {
        let reg = Registry::build([&WINDOWS_ONLY, &WINFORMS_ANYWHERE], "Linux");

        assert!(reg.restricted().is_empty());
        let keys: Vec<&str> = reg.runnable().map(|(k, _)| k).collect();
        assert_eq!(keys, ["winforms/winforms-test"]);
        assert!(reg.keys_for_short_name("winforms-test").is_some());
    }

    #[test]
    fn admission_reports_where_a_descriptor_lands() {
        assert!(matches!(
            instantiate(&MATH, "Linux"),
            Admission::Runnable { ref key, .. } if key == "misc/math"
        ));
        assert!(matches!(
            instantiate(&WINDOWS_ONLY, "Mac"),
            Admission::Restricted { ref required, .. } if required == "Windows"
        ));
        let broken = instantiate(&EXPLODING, "Linux");
        assert_eq!(broken.key(), "week3/exploding");
        assert!(matches!(broken, Admission::Broken { .. }));
    }

    #[test]
    fn short_name_index_covers_every_runnable_key_once() {
        let reg = Registry::build([&HELLO_WEEK1, &HELLO_WEEK2, &MATH, &WINDOWS_ONLY], "Linux");

        let hello: Vec<&str> = reg
            .keys_for_short_name("Hello")
            .expect("hello bucket")
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(hello, ["week1/hello", "week2/hello"]);

        let indexed: usize = reg.short_names.values().map(BTreeSet::len).sum();
        assert_eq!(indexed, reg.runnable().count());
        assert!(reg.keys_for_short_name("winforms-test").is_none());
    }
}
