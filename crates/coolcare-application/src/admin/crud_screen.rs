//! Generic list + modal form screen.

use super::forms::EntityForm;
use coolcare_core::admin::{BookingRecord, BookingStatus, Customer};
use coolcare_core::error::{CoolcareError, Result};
use coolcare_core::repository::{Entity, Repository, Searchable};
use std::marker::PhantomData;
use std::sync::Arc;

/// What the screen's modal is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState<F> {
    #[default]
    Closed,
    Creating(F),
    Editing { id: String, form: F },
}

/// A searchable list of `T` with a create/edit modal bound through `F`.
pub struct CrudScreen<T: Entity, F: EntityForm<T>> {
    repository: Arc<dyn Repository<T>>,
    search: String,
    modal: ModalState<F>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, F> CrudScreen<T, F>
where
    T: Entity + Searchable,
    F: EntityForm<T>,
{
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self {
            repository,
            search: String::new(),
            modal: ModalState::Closed,
            _entity: PhantomData,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn modal(&self) -> &ModalState<F> {
        &self.modal
    }

    /// Rows matching the current search, in repository order.
    pub async fn rows(&self) -> Result<Vec<T>> {
        let query = self.search.trim().to_string();
        self.repository
            .filter(&|entity: &T| entity.matches(&query))
            .await
    }

    /// Opens an empty form.
    pub fn open_create(&mut self) {
        self.modal = ModalState::Creating(F::default());
    }

    /// Opens the form pre-filled from the entity with `id`.
    pub async fn open_edit(&mut self, id: &str) -> Result<()> {
        let entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoolcareError::not_found(T::ENTITY_TYPE, id))?;
        self.modal = ModalState::Editing {
            id: id.to_string(),
            form: F::from_entity(&entity),
        };
        Ok(())
    }

    /// The open form, if any.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match &mut self.modal {
            ModalState::Closed => None,
            ModalState::Creating(form) | ModalState::Editing { form, .. } => Some(form),
        }
    }

    /// Validates and stores the open form, closing the modal on success.
    ///
    /// The modal stays open with its contents when validation or storage
    /// fails.
    pub async fn submit(&mut self) -> Result<T> {
        let saved = match &self.modal {
            ModalState::Closed => {
                return Err(CoolcareError::validation("No form is open"));
            }
            ModalState::Creating(form) => {
                form.validate()?;
                self.repository.add(form.build(None)).await?
            }
            ModalState::Editing { id, form } => {
                form.validate()?;
                let existing = self
                    .repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CoolcareError::not_found(T::ENTITY_TYPE, id.as_str()))?;
                self.repository.update(form.build(Some(&existing))).await?
            }
        };
        tracing::info!(target: "admin", "Saved {} '{}'", T::ENTITY_TYPE, saved.id());
        self.modal = ModalState::Closed;
        Ok(saved)
    }

    /// Closes the modal, discarding the form.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.remove(id).await?;
        tracing::info!(target: "admin", "Deleted {} '{}'", T::ENTITY_TYPE, id);
        Ok(())
    }

    /// Applies `change` to the stored entity with `id` and saves it.
    ///
    /// Nothing is stored when `change` fails.
    pub async fn modify<C>(&self, id: &str, change: C) -> Result<T>
    where
        C: FnOnce(&mut T) -> Result<()> + Send,
    {
        let mut entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoolcareError::not_found(T::ENTITY_TYPE, id))?;
        change(&mut entity)?;
        self.repository.update(entity).await
    }
}

impl<F: EntityForm<Customer>> CrudScreen<Customer, F> {
    /// Advances the customer's status: active -> blocked -> lead -> active.
    pub async fn toggle_status(&self, id: &str) -> Result<Customer> {
        self.modify(id, |customer| {
            customer.status = customer.status.toggled();
            Ok(())
        })
        .await
    }
}

impl<F: EntityForm<BookingRecord>> CrudScreen<BookingRecord, F> {
    /// Moves a booking to `next`, enforcing the staff workflow.
    pub async fn set_status(&self, id: &str, next: BookingStatus) -> Result<BookingRecord> {
        self.modify(id, |booking| {
            if !booking.status.can_transition_to(next) {
                return Err(CoolcareError::validation(format!(
                    "Cannot move booking from {} to {}",
                    booking.status, next
                )));
            }
            booking.status = next;
            Ok(())
        })
        .await
    }
}
