//! Repository implementation for states.

use diesel::prelude::*;

use crate::domain::state::{NewState, State};
use crate::domain::types::StateId;
use crate::models::state::{NewState as DbNewState, State as DbState};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StateReader, StateWriter};

impl StateReader for DieselRepository {
    fn get_state_by_id(&self, id: StateId) -> RepositoryResult<Option<State>> {
        use crate::schema::states;

        let mut conn = self.conn()?;
        let db_state = states::table
            .find(id.get())
            .first::<DbState>(&mut conn)
            .optional()?;

        db_state
            .map(State::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_states(&self) -> RepositoryResult<Vec<State>> {
        use crate::schema::states;

        let mut conn = self.conn()?;
        states::table
            .order((states::country.asc(), states::name.asc()))
            .load::<DbState>(&mut conn)?
            .into_iter()
            .map(|db_state| State::try_from(db_state).map_err(RepositoryError::from))
            .collect()
    }
}

impl StateWriter for DieselRepository {
    fn create_state(&self, new_state: &NewState) -> RepositoryResult<State> {
        use crate::schema::states;

        let mut conn = self.conn()?;
        let db_new_state: DbNewState = new_state.into();

        let db_state = diesel::insert_into(states::table)
            .values(&db_new_state)
            .get_result::<DbState>(&mut conn)?;

        State::try_from(db_state).map_err(RepositoryError::from)
    }

    fn set_state_active(&self, id: StateId, is_active: bool) -> RepositoryResult<State> {
        use crate::schema::states;

        let mut conn = self.conn()?;
        let db_state = diesel::update(states::table.find(id.get()))
            .set(states::is_active.eq(is_active))
            .get_result::<DbState>(&mut conn)?;

        State::try_from(db_state).map_err(RepositoryError::from)
    }
}
