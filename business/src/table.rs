//! The member table state machine.
//!
//! One `MemberTableState` owns everything the admin table renders from:
//! the record list, the cached schema, the applied search term, the
//! current page, the selection set, and the (at most one) edit buffer.
//! The UI reads the derived views and dispatches the intent handlers;
//! every handler is total and keeps the state invariants:
//!
//! - the selection set only holds ids present in the record list;
//! - the edit buffer, if any, references an existing record;
//! - the current page stays within `[1, page_count()]`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::record::{Record, RecordId, Schema};

/// Fixed page size of the table.
pub const ROWS_PER_PAGE: usize = 10;

/// Scratch copy of one record's fields while that row is being edited.
///
/// Edits land here, never directly in the record list; `save_edit`
/// writes the buffer back wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    id: RecordId,
    fields: Vec<(String, String)>,
}

impl EditBuffer {
    fn snapshot(record: &Record) -> Self {
        let fields = record
            .field_names()
            .map(|field| (field.to_string(), record.field_text(field)))
            .collect();
        Self {
            id: record.id(),
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }
}

/// State for the members admin table.
#[derive(Debug)]
pub struct MemberTableState {
    records: Vec<Record>,
    schema: Schema,
    /// Live contents of the search box. Filtering only applies on
    /// [`MemberTableState::submit_search`], never per keystroke.
    pub search_input: String,
    search_term: String,
    /// 1-based current page.
    page: usize,
    selected: HashSet<RecordId>,
    edit: Option<EditBuffer>,
    is_fetching: bool,
    error: Option<String>,
    last_fetch: Option<DateTime<Utc>>,
}

impl Default for MemberTableState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            schema: Schema::default(),
            search_input: String::new(),
            search_term: String::new(),
            page: 1,
            selected: HashSet::new(),
            edit: None,
            is_fetching: false,
            error: None,
            last_fetch: None,
        }
    }
}

impl MemberTableState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- fetch lifecycle -------------------------------------------------

    /// Replaces the record list wholesale after a successful fetch.
    ///
    /// Takes `now` as a parameter to allow test mockability.
    pub fn update_records(&mut self, records: Vec<Record>, now: DateTime<Utc>) {
        log::info!("loaded {} members", records.len());
        self.schema = Schema::from_records(&records);
        self.records = records;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
        self.prune();
        self.clamp_page();
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    // ---- search and pagination -------------------------------------------

    /// Applies the live search input and jumps back to the first page.
    pub fn submit_search(&mut self) {
        self.search_term = self.search_input.clone();
        self.page = 1;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Records matching the applied search term, in list order.
    pub fn filtered(&self) -> Vec<&Record> {
        let needle = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages; at least 1 so the page clamp and the page-button
    /// row stay well defined even when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(ROWS_PER_PAGE).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn goto_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn first_page(&mut self) {
        self.goto_page(1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page + 1);
    }

    pub fn last_page(&mut self) {
        self.goto_page(self.page_count());
    }

    /// The filtered records visible on the current page.
    pub fn visible_page(&self) -> Vec<&Record> {
        let start = (self.page - 1) * ROWS_PER_PAGE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(ROWS_PER_PAGE)
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_page().into_iter().map(Record::id).collect()
    }

    // ---- selection -------------------------------------------------------

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_row(&mut self, id: RecordId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Whether every row on the current page is selected. An empty page is
    /// unselected by definition.
    pub fn page_fully_selected(&self) -> bool {
        let ids = self.visible_ids();
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Page-scoped select-all: if every visible row is already selected,
    /// deselects exactly those rows, otherwise selects them all.
    /// Selections on other pages are untouched.
    pub fn toggle_page_selection(&mut self) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            return;
        }
        if ids.iter().all(|id| self.selected.contains(id)) {
            for id in &ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids);
        }
    }

    // ---- editing ---------------------------------------------------------

    /// Snapshots the record into the edit buffer. Starting a new edit
    /// discards any previous buffer without saving it.
    pub fn start_edit(&mut self, id: RecordId) {
        if let Some(record) = self.records.iter().find(|record| record.id() == id) {
            self.edit = Some(EditBuffer::snapshot(record));
        }
    }

    pub fn is_editing(&self, id: RecordId) -> bool {
        self.edit.as_ref().is_some_and(|buffer| buffer.id() == id)
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.edit.as_ref().map(EditBuffer::id)
    }

    /// Mutable access to one scratch field of the active edit.
    pub fn edit_value_mut(&mut self, field: &str) -> Option<&mut String> {
        self.edit.as_mut().and_then(|buffer| buffer.value_mut(field))
    }

    /// Writes the edit buffer back into the record list at the buffered
    /// id's position and leaves edit mode. List length and order never
    /// change; only the targeted record's fields do.
    pub fn save_edit(&mut self) {
        let Some(buffer) = self.edit.take() else {
            return;
        };
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|record| record.id() == buffer.id)
        {
            for (field, text) in buffer.fields {
                record.set_field(&field, text);
            }
        }
    }

    // ---- deletion --------------------------------------------------------

    /// Removes one record regardless of selection state.
    pub fn delete_row(&mut self, id: RecordId) {
        self.records.retain(|record| record.id() != id);
        self.selected.remove(&id);
        if self.is_editing(id) {
            self.edit = None;
        }
        self.clamp_page();
    }

    /// Removes every selected record, then clears the selection.
    pub fn delete_selected(&mut self) {
        self.records
            .retain(|record| !self.selected.contains(&record.id()));
        self.selected.clear();
        self.prune();
        self.clamp_page();
    }

    // ---- accessors -------------------------------------------------------

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    // ---- invariants ------------------------------------------------------

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }

    /// Drops selections and the edit buffer for ids no longer in the list.
    fn prune(&mut self) {
        let ids: HashSet<RecordId> = self.records.iter().map(Record::id).collect();
        self.selected.retain(|id| ids.contains(id));
        if self
            .edit
            .as_ref()
            .is_some_and(|buffer| !ids.contains(&buffer.id))
        {
            self.edit = None;
        }
    }
}
