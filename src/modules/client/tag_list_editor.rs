// src/modules/client/tag_list_editor.rs

//
// ──────────────────────────────────────────────────────────
// Suggestions
// ──────────────────────────────────────────────────────────
//

/// Fixed suggestion set shown next to the free-text input.
pub const SUGGESTED_TECHNOLOGIES: &[&str] = &[
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Tailwind CSS",
    "PostgreSQL",
    "Rust",
    "Docker",
];

/// One-click add control. Controls for values already in the list are
/// disabled, not hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub label: &'a str,
    pub disabled: bool,
}

//
// ──────────────────────────────────────────────────────────
// Editor
// ──────────────────────────────────────────────────────────
//

type TagsChanged = Box<dyn Fn(&[String]) + Send + Sync>;

/// Ordered, de-duplicated technology list for one in-progress project.
///
/// Comparison is exact-string: no case folding, no trimming beyond the
/// initial trim on entry. Every successful add/remove hands the owner
/// the complete new sequence, so the editor never holds state the owner
/// doesn't also receive.
#[derive(Default)]
pub struct TagListEditor {
    tags: Vec<String>,
    pending: String,
    suggestions: Vec<String>,
    on_change: Option<TagsChanged>,
}

impl TagListEditor {
    pub fn new() -> Self {
        Self::with_suggestions(SUGGESTED_TECHNOLOGIES.iter().map(|s| s.to_string()))
    }

    pub fn with_suggestions(suggestions: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: Vec::new(),
            pending: String::new(),
            suggestions: suggestions.into_iter().collect(),
            on_change: None,
        }
    }

    /// Called with the full tag sequence after every successful add or
    /// remove.
    pub fn set_on_change(&mut self, callback: impl Fn(&[String]) + Send + Sync + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Trims and appends. Whitespace-only input and exact duplicates
    /// are silently ignored. Returns whether the list changed; a
    /// successful add also clears the pending input.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let value = raw.trim();

        if value.is_empty() {
            return false;
        }

        if self.tags.iter().any(|t| t == value) {
            return false;
        }

        self.tags.push(value.to_string());
        self.pending.clear();
        self.notify();
        true
    }

    /// Removes the first (and only) matching element; no-op if absent.
    pub fn remove_tag(&mut self, value: &str) -> bool {
        let Some(index) = self.tags.iter().position(|t| t == value) else {
            return false;
        };

        self.tags.remove(index);
        self.notify();
        true
    }

    /// The commit key (Enter) on the pending input: adds the pending
    /// text without submitting the enclosing form.
    pub fn commit_pending(&mut self) -> bool {
        let raw = self.pending.clone();
        self.add_tag(&raw)
    }

    pub fn suggestions(&self) -> impl Iterator<Item = Suggestion<'_>> {
        self.suggestions.iter().map(|label| Suggestion {
            label,
            disabled: self.tags.iter().any(|t| t == label),
        })
    }

    /// Back to the empty shape (new draft opened). Owner-initiated, so
    /// no change notification fires.
    pub fn reset(&mut self) {
        self.tags.clear();
        self.pending.clear();
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_change {
            callback(&self.tags);
        }
    }
}
