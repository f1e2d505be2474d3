// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::QueryCommand;
use crate::state::QueryState;

/// Applies a command to a query state, producing the next state.
///
/// Changing the search term, a filter, the sort order or the page size
/// returns to the first page. Page navigation does not check the upper
/// bound; a page past the end evaluates to an empty page.
///
/// # Arguments
///
/// * `state` - The current query state (consumed)
/// * `command` - The interaction to apply
///
/// # Returns
///
/// The new query state.
#[must_use]
pub fn apply(state: QueryState, command: QueryCommand) -> QueryState {
    match command {
        QueryCommand::Search(term) => state.with_search(term),
        QueryCommand::FilterYear(year) => state.with_year(year),
        QueryCommand::FilterStatus(status) => state.with_status(status),
        QueryCommand::Sort(order) => state.with_sort(order),
        QueryCommand::GoToPage(page) => state.with_page(page),
        QueryCommand::SetPageSize(size) => state.with_page_size(size),
        QueryCommand::NextPage => {
            let next: usize = state.page().saturating_add(1);
            state.with_page(next)
        }
        QueryCommand::PreviousPage => {
            let previous: usize = state.page().saturating_sub(1);
            state.with_page(previous)
        }
        QueryCommand::Reset => QueryState::new(),
    }
}

/// Applies a sequence of commands in order.
#[must_use]
pub fn apply_all<I>(state: QueryState, commands: I) -> QueryState
where
    I: IntoIterator<Item = QueryCommand>,
{
    commands.into_iter().fold(state, apply)
}
