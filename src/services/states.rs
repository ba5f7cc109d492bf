//! State list page and its writes.

use crate::domain::state::{NewState, State};
use crate::domain::types::StateId;
use crate::dto::listing::{ListPageData, ListQuery};
use crate::forms::state::AddStateForm;
use crate::repository::{StateReader, StateWriter};
use crate::services::listing::build_list_page;
use crate::services::{ServiceError, ServiceResult};

pub fn load_states_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<ListPageData<State>>
where
    R: StateReader + ?Sized,
{
    let states = repo.list_states().map_err(|err| {
        log::error!("Failed to list states: {err}");
        err
    })?;

    Ok(build_list_page(states, query, page_size))
}

pub fn add_state<R>(repo: &R, form: AddStateForm) -> ServiceResult<State>
where
    R: StateWriter + ?Sized,
{
    let new_state = NewState::try_from(form)?;

    repo.create_state(&new_state).map_err(|err| {
        log::error!("Failed to create state: {err}");
        ServiceError::from(err)
    })
}

pub fn toggle_state<R>(repo: &R, state_id: i32) -> ServiceResult<State>
where
    R: StateReader + StateWriter + ?Sized,
{
    let state_id = StateId::new(state_id)?;

    let state = repo
        .get_state_by_id(state_id)
        .map_err(|err| {
            log::error!("Failed to load state {state_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    repo.set_state_active(state.id, !state.is_active)
        .map_err(|err| {
            log::error!("Failed to update state {state_id}: {err}");
            ServiceError::from(err)
        })
}
