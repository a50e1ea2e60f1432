//! Command-line view requests turned into view intents.

use tabview_model::{
    ALL_FILTER_VALUE, FieldPath, PAGE_SIZE_OPTIONS, ViewIntent, ViewState, is_standard_page_size,
};
use tabview_views::ViewDefinition;
use tracing::warn;

use crate::logging::redact_value;

/// Search, filter, sort and paging flags for one `show` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    /// Applied in order as sort toggles.
    pub sorts: Vec<FieldPath>,
    pub page: usize,
    pub page_size: Option<usize>,
}

impl ViewQuery {
    /// Intents in application order.
    ///
    /// The page jump comes last because every other intent resets to page 1.
    pub fn intents(&self) -> Vec<ViewIntent> {
        let mut intents = Vec::new();
        if let Some(size) = self.page_size {
            intents.push(ViewIntent::PageSize(size));
        }
        if let Some(term) = &self.search {
            intents.push(ViewIntent::Search(term.clone()));
        }
        intents.extend(self.filters.iter().map(|(key, value)| ViewIntent::Filter {
            key: key.clone(),
            value: value.clone(),
        }));
        intents.extend(self.sorts.iter().cloned().map(ViewIntent::ToggleSort));
        intents.push(ViewIntent::GoToPage(self.page));
        intents
    }

    /// The state reached from `view`'s initial state.
    ///
    /// A sort flag naming the view's default sort field flips its direction.
    pub fn state_for(&self, view: &ViewDefinition) -> ViewState {
        self.warn_undeclared_filters(view);
        if let Some(size) = self.page_size.filter(|size| !is_standard_page_size(*size)) {
            warn!(
                page_size = size,
                options = ?PAGE_SIZE_OPTIONS,
                "page size is not one of the standard options"
            );
        }
        self.intents()
            .into_iter()
            .fold(view.initial_state(), ViewState::apply)
    }

    fn warn_undeclared_filters(&self, view: &ViewDefinition) {
        for (key, value) in &self.filters {
            match view.filter(key) {
                None => warn!(view = %view.name, filter = %key, "filter is not declared by view"),
                Some(filter) if value != ALL_FILTER_VALUE && !filter.accepts(value) => {
                    warn!(
                        view = %view.name,
                        filter = %key,
                        value = redact_value(value),
                        "filter value is not one of the declared choices"
                    );
                }
                Some(_) => {}
            }
        }
    }
}
