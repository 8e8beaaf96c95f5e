//! Tab/selection state machine for multi-document viewers
//!
//! Several tokenized documents can share one tabbed presentation; this module
//! owns the piece of state that decides which one is exposed. It is a small
//! state machine: empty, populated without a selection, populated with an
//! active id. Registration and selection are the only mutations, both are
//! infallible, and all mutations are issued by a single logical writer, so
//! the struct is plain owned data with `&mut self` methods.
//!
//! Documents may register incrementally (they load independently), so the
//! initial selection is resolved lazily: the first registration selects
//! itself as a provisional default, a caller-preferred id wins the moment it
//! registers, and once the user makes an explicit choice the default is never
//! re-resolved.
//!
//! A document rendered standalone (outside any container) bypasses this
//! machine entirely and is always visible; that is the caller's concern, see
//! [`TabSelection::is_active`].

/// One selectable document: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
}

/// Selection state shared by the documents of one viewer session.
#[derive(Debug, Clone, Default)]
pub struct TabSelection {
    tabs: Vec<TabDescriptor>,
    active_id: Option<String>,
    preferred_id: Option<String>,
    /// Set once the selection is final (preferred id honored or explicit
    /// user choice); blocks any further default resolution.
    initialized: bool,
}

impl TabSelection {
    /// New machine with no preferred initial tab: the first registered tab
    /// becomes the selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// New machine that will select `preferred` as soon as a tab with that id
    /// registers, unless the user selects something first.
    pub fn with_preferred(preferred: impl Into<String>) -> Self {
        Self {
            preferred_id: Some(preferred.into()),
            ..Self::default()
        }
    }

    /// Register a document. Idempotent by id: re-registering an existing id
    /// is a no-op (the original label is kept). New tabs append in first-seen
    /// order. May trigger initial-selection resolution; never changes a
    /// selection that is already final.
    pub fn register_tab(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        if self.tabs.iter().any(|tab| tab.id == id) {
            return;
        }
        self.tabs.push(TabDescriptor {
            id,
            label: label.into(),
        });
        self.resolve_initial_selection();
    }

    /// Explicit (user) selection. Unknown ids are ignored, never an error.
    pub fn select_tab(&mut self, id: &str) {
        if self.tabs.iter().any(|tab| tab.id == id) {
            self.active_id = Some(id.to_string());
            self.initialized = true;
        }
    }

    /// Currently active tab id, if any tab is registered.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Registered tabs in first-seen order.
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Whether the document with `id` is the one currently exposed.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    fn resolve_initial_selection(&mut self) {
        if self.initialized {
            return;
        }
        match &self.preferred_id {
            Some(preferred) => {
                if self.tabs.iter().any(|tab| &tab.id == preferred) {
                    self.active_id = Some(preferred.clone());
                    self.initialized = true;
                } else if self.active_id.is_none() {
                    // Provisional default until the preferred id shows up.
                    self.active_id = self.tabs.first().map(|tab| tab.id.clone());
                }
            }
            None => {
                self.active_id = self.tabs.first().map(|tab| tab.id.clone());
                self.initialized = true;
            }
        }
    }
}
