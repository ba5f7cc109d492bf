//! Bank list page and its writes.

use crate::domain::bank::{Bank, NewBank};
use crate::domain::types::BankId;
use crate::dto::listing::{ListPageData, ListQuery};
use crate::forms::bank::AddBankForm;
use crate::repository::{BankReader, BankWriter};
use crate::services::listing::build_list_page;
use crate::services::{ServiceError, ServiceResult};

/// Loads every bank and applies the list query.
pub fn load_banks_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<ListPageData<Bank>>
where
    R: BankReader + ?Sized,
{
    let banks = repo.list_banks().map_err(|err| {
        log::error!("Failed to list banks: {err}");
        err
    })?;

    Ok(build_list_page(banks, query, page_size))
}

/// Validates the form and stores a new bank.
pub fn add_bank<R>(repo: &R, form: AddBankForm) -> ServiceResult<Bank>
where
    R: BankWriter + ?Sized,
{
    let new_bank = NewBank::try_from(form)?;

    repo.create_bank(&new_bank).map_err(|err| {
        log::error!("Failed to create bank: {err}");
        ServiceError::from(err)
    })
}

/// Flips the active flag of a bank.
pub fn toggle_bank<R>(repo: &R, bank_id: i32) -> ServiceResult<Bank>
where
    R: BankReader + BankWriter + ?Sized,
{
    let bank_id = BankId::new(bank_id)?;

    let bank = repo
        .get_bank_by_id(bank_id)
        .map_err(|err| {
            log::error!("Failed to load bank {bank_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    repo.set_bank_active(bank.id, !bank.is_active)
        .map_err(|err| {
            log::error!("Failed to update bank {bank_id}: {err}");
            ServiceError::from(err)
        })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::types::{BankName, CountryName};
    use crate::listing::StatusFilter;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct MockRepo {
        banks: RefCell<Vec<Bank>>,
    }

    fn bank(id: i32, name: &str, is_active: bool) -> Bank {
        Bank {
            id: BankId::new(id).unwrap(),
            name: BankName::new(name).unwrap(),
            country: CountryName::new("India").unwrap(),
            icon: None,
            is_active,
            created_at: NaiveDateTime::default(),
        }
    }

    impl BankReader for MockRepo {
        fn get_bank_by_id(&self, id: BankId) -> RepositoryResult<Option<Bank>> {
            Ok(self.banks.borrow().iter().find(|b| b.id == id).cloned())
        }

        fn list_banks(&self) -> RepositoryResult<Vec<Bank>> {
            Ok(self.banks.borrow().clone())
        }
    }

    impl BankWriter for MockRepo {
        fn create_bank(&self, new_bank: &NewBank) -> RepositoryResult<Bank> {
            let mut banks = self.banks.borrow_mut();
            let mut created = bank(banks.len() as i32 + 1, new_bank.name.as_str(), new_bank.is_active);
            created.country = new_bank.country.clone();
            created.icon = new_bank.icon.clone();
            banks.push(created.clone());
            Ok(created)
        }

        fn set_bank_active(&self, id: BankId, is_active: bool) -> RepositoryResult<Bank> {
            let mut banks = self.banks.borrow_mut();
            let stored = banks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(RepositoryError::NotFound)?;
            stored.is_active = is_active;
            Ok(stored.clone())
        }
    }

    fn seeded() -> MockRepo {
        let repo = MockRepo::default();
        repo.banks.replace(vec![
            bank(1, "Federal Bank", true),
            bank(2, "State Bank", false),
            bank(3, "Canara Bank", true),
        ]);
        repo
    }

    #[test]
    fn page_filters_by_status() {
        let repo = seeded();
        let query = ListQuery {
            status: Some("inactive".to_string()),
            ..ListQuery::default()
        };

        let data = load_banks_page(&repo, query, 10).unwrap();

        assert_eq!(data.status, StatusFilter::Inactive);
        assert_eq!(data.records.items.len(), 1);
        assert_eq!(data.records.items[0].name.as_str(), "State Bank");
    }

    #[test]
    fn add_stores_the_bank() {
        let repo = MockRepo::default();
        let form = AddBankForm {
            name: "Axis Bank".to_string(),
            country: "India".to_string(),
            icon: None,
            is_active: Some("on".to_string()),
        };

        let created = add_bank(&repo, form).unwrap();

        assert_eq!(created.name.as_str(), "Axis Bank");
        assert_eq!(repo.banks.borrow().len(), 1);
    }

    #[test]
    fn add_rejects_blank_name() {
        let repo = MockRepo::default();
        let form = AddBankForm {
            name: "   ".to_string(),
            country: "India".to_string(),
            icon: None,
            is_active: None,
        };

        let result = add_bank(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(repo.banks.borrow().is_empty());
    }

    #[test]
    fn toggle_flips_active_flag() {
        let repo = seeded();

        let updated = toggle_bank(&repo, 2).unwrap();

        assert!(updated.is_active);
    }

    #[test]
    fn toggle_missing_bank_is_not_found() {
        let repo = seeded();

        assert!(matches!(toggle_bank(&repo, 99), Err(ServiceError::NotFound)));
    }

    #[test]
    fn toggle_rejects_non_positive_id() {
        let repo = seeded();

        assert!(matches!(
            toggle_bank(&repo, 0),
            Err(ServiceError::TypeConstraint(_))
        ));
    }
}
