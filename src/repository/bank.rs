//! Repository implementation for banks.

use diesel::prelude::*;

use crate::domain::bank::{Bank, NewBank};
use crate::domain::types::BankId;
use crate::models::bank::{Bank as DbBank, NewBank as DbNewBank};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BankReader, BankWriter, DieselRepository};

impl BankReader for DieselRepository {
    fn get_bank_by_id(&self, id: BankId) -> RepositoryResult<Option<Bank>> {
        use crate::schema::banks;

        let mut conn = self.conn()?;
        let db_bank = banks::table
            .find(id.get())
            .first::<DbBank>(&mut conn)
            .optional()?;

        db_bank
            .map(Bank::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_banks(&self) -> RepositoryResult<Vec<Bank>> {
        use crate::schema::banks;

        let mut conn = self.conn()?;
        banks::table
            .order((banks::name.asc(), banks::id.asc()))
            .load::<DbBank>(&mut conn)?
            .into_iter()
            .map(|db_bank| Bank::try_from(db_bank).map_err(RepositoryError::from))
            .collect()
    }
}

impl BankWriter for DieselRepository {
    fn create_bank(&self, new_bank: &NewBank) -> RepositoryResult<Bank> {
        use crate::schema::banks;

        let mut conn = self.conn()?;
        let db_new_bank: DbNewBank = new_bank.into();

        let db_bank = diesel::insert_into(banks::table)
            .values(&db_new_bank)
            .get_result::<DbBank>(&mut conn)?;

        Bank::try_from(db_bank).map_err(RepositoryError::from)
    }

    fn set_bank_active(&self, id: BankId, is_active: bool) -> RepositoryResult<Bank> {
        use crate::schema::banks;

        let mut conn = self.conn()?;
        let db_bank = diesel::update(banks::table.find(id.get()))
            .set(banks::is_active.eq(is_active))
            .get_result::<DbBank>(&mut conn)?;

        Bank::try_from(db_bank).map_err(RepositoryError::from)
    }
}
