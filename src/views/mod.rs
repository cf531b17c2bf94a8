//! Admin screens for one resource collection, driven through [`ResourceApi`].
//!
//! A view keeps the fetched list plus a single editing slot. Every mutating
//! action asks [`Confirm`] first; a declined prompt leaves the view untouched
//! and sends nothing. Failed calls are logged and also leave the view as it was.

use crate::client::{ClientError, ResourceApi};
use crate::dto::Identified;
use tracing::{debug, error};

/// Identifier of a draft that has not been stored yet.
pub const UNSET_ID: i32 = 0;

/// Asks the operator to approve an action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt with the same value.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Result of a confirm-gated action.
#[derive(Debug)]
pub enum Outcome<T> {
    Done(T),
    Declined,
    Failed(ClientError),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// The record being edited. `id == UNSET_ID` means a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Editing<R> {
    pub id: i32,
    pub draft: R,
}

impl<R: Default> Default for Editing<R> {
    fn default() -> Self {
        Self {
            id: UNSET_ID,
            draft: R::default(),
        }
    }
}

pub struct AdminView<A, C>
where
    A: ResourceApi,
{
    api: A,
    confirm: C,
    label: &'static str,
    items: Vec<A::Response>,
    editing: Editing<A::Request>,
}

impl<A, C> AdminView<A, C>
where
    A: ResourceApi,
    A::Request: Default + Clone + for<'a> From<&'a A::Response>,
    A::Response: Identified + Clone,
    C: Confirm,
{
    /// `label` names the resource in prompts, e.g. `"game"`.
    pub fn new(api: A, confirm: C, label: &'static str) -> Self {
        Self {
            api,
            confirm,
            label,
            items: Vec::new(),
            editing: Editing::default(),
        }
    }

    pub fn items(&self) -> &[A::Response] {
        &self.items
    }

    pub fn editing(&self) -> &Editing<A::Request> {
        &self.editing
    }

    pub fn draft_mut(&mut self) -> &mut A::Request {
        &mut self.editing.draft
    }

    /// Replaces the list with what the server currently holds.
    pub async fn load(&mut self) -> Result<usize, ClientError> {
        match self.api.get_all().await {
            Ok(items) => {
                debug!(resource = self.label, count = items.len(), "list loaded");
                self.items = items;
                Ok(self.items.len())
            }
            Err(err) => {
                error!(resource = self.label, error = %err, "failed to load list");
                Err(err)
            }
        }
    }

    /// Starts a fresh draft that `save` will create.
    pub fn begin_create(&mut self) {
        self.editing = Editing::default();
    }

    /// Copies the listed record `id` into the editing slot.
    pub fn edit(&mut self, id: i32) -> Outcome<()> {
        if !self
            .confirm
            .confirm(&format!("Do you want to edit this {}?", self.label))
        {
            return Outcome::Declined;
        }
        match self.items.iter().find(|item| item.id() == id) {
            Some(item) => {
                self.editing = Editing {
                    id,
                    draft: A::Request::from(item),
                };
                Outcome::Done(())
            }
            None => {
                error!(resource = self.label, id, "record is not in the loaded list");
                Outcome::Failed(ClientError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    body: format!("{} {} is not loaded", self.label, id),
                })
            }
        }
    }

    /// Creates the draft when it is new, otherwise updates the stored record.
    /// On success the list reflects the change and the editing slot is reset.
    pub async fn save(&mut self) -> Outcome<A::Response> {
        if self.editing.id == UNSET_ID {
            if !self.confirm.confirm(&format!("Save new {}?", self.label)) {
                return Outcome::Declined;
            }
            match self.api.create(&self.editing.draft).await {
                Ok(created) => {
                    self.items.push(created.clone());
                    self.editing = Editing::default();
                    Outcome::Done(created)
                }
                Err(err) => {
                    error!(resource = self.label, error = %err, "create failed");
                    Outcome::Failed(err)
                }
            }
        } else {
            let id = self.editing.id;
            if !self
                .confirm
                .confirm(&format!("Update {} with ID {}?", self.label, id))
            {
                return Outcome::Declined;
            }
            match self.api.update(id, &self.editing.draft).await {
                Ok(updated) => {
                    if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
                        *slot = updated.clone();
                    }
                    self.editing = Editing::default();
                    Outcome::Done(updated)
                }
                Err(err) => {
                    error!(resource = self.label, id, error = %err, "update failed");
                    Outcome::Failed(err)
                }
            }
        }
    }

    pub async fn delete(&mut self, id: i32) -> Outcome<A::Response> {
        if !self
            .confirm
            .confirm(&format!("Do you want to delete this {}?", self.label))
        {
            return Outcome::Declined;
        }
        match self.api.delete(id).await {
            Ok(removed) => {
                self.items.retain(|item| item.id() != id);
                Outcome::Done(removed)
            }
            Err(err) => {
                error!(resource = self.label, id, error = %err, "delete failed");
                Outcome::Failed(err)
            }
        }
    }

    /// Drops the draft without touching the server.
    pub fn cancel(&mut self) {
        self.editing = Editing::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{CategoryRequest, CategoryResponse};
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    #[derive(Default)]
    struct FakeCategories {
        rows: Mutex<Vec<CategoryResponse>>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeCategories {
        fn with(rows: Vec<CategoryResponse>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ClientError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: String::new(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ResourceApi for Arc<FakeCategories> {
        type Request = CategoryRequest;
        type Response = CategoryResponse;

        async fn get_all(&self) -> Result<Vec<CategoryResponse>, ClientError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: i32) -> Result<CategoryResponse, ClientError> {
            self.check()?;
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .ok_or(ClientError::Status {
                    status: StatusCode::NOT_FOUND,
                    body: String::new(),
                })
        }

        async fn create(&self, request: &CategoryRequest) -> Result<CategoryResponse, ClientError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let created = CategoryResponse {
                id: rows.len() as i32 + 1,
                name: request.name.clone(),
                description: request.description.clone(),
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: i32,
            request: &CategoryRequest,
        ) -> Result<CategoryResponse, ClientError> {
            self.check()?;
            Ok(CategoryResponse {
                id,
                name: request.name.clone(),
                description: request.description.clone(),
            })
        }

        async fn delete(&self, id: i32) -> Result<CategoryResponse, ClientError> {
            self.check()?;
            Ok(CategoryResponse {
                id,
                ..Default::default()
            })
        }
    }

    /// Records every prompt and answers with a fixed value.
    #[derive(Default)]
    struct RecordingConfirm {
        answer: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl Confirm for Arc<RecordingConfirm> {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer
        }
    }

    fn books() -> CategoryResponse {
        CategoryResponse {
            id: 1,
            name: "Books".into(),
            description: "All books".into(),
        }
    }

    fn view(
        api: &Arc<FakeCategories>,
        answer: bool,
    ) -> (
        AdminView<Arc<FakeCategories>, Arc<RecordingConfirm>>,
        Arc<RecordingConfirm>,
    ) {
        let confirm = Arc::new(RecordingConfirm {
            answer,
            ..Default::default()
        });
        (
            AdminView::new(api.clone(), confirm.clone(), "category"),
            confirm,
        )
    }

    #[tokio::test]
    async fn load_replaces_the_list() {
        let api = Arc::new(FakeCategories::with(vec![books()]));
        let (mut view, _) = view(&api, true);

        assert_eq!(view.load().await.unwrap(), 1);
        assert_eq!(view.items(), &[books()]);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_items() {
        let api = Arc::new(FakeCategories::failing());
        let (mut view, _) = view(&api, true);

        assert!(view.load().await.is_err());
        assert!(view.items().is_empty());
    }

    #[tokio::test]
    async fn save_with_unset_id_creates_and_appends() {
        let api = Arc::new(FakeCategories::default());
        let (mut view, confirm) = view(&api, true);

        view.begin_create();
        view.draft_mut().name = "Books".into();
        view.draft_mut().description = "All books".into();

        let created = view.save().await;
        assert_matches!(created, Outcome::Done(ref c) if c.id == 1);
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.editing(), &Editing::default());
        assert_eq!(
            confirm.prompts.lock().unwrap().as_slice(),
            ["Save new category?"]
        );
    }

    #[tokio::test]
    async fn edit_then_save_updates_in_place() {
        let api = Arc::new(FakeCategories::with(vec![books()]));
        let (mut view, confirm) = view(&api, true);
        view.load().await.unwrap();

        assert!(view.edit(1).is_done());
        assert_eq!(view.editing().id, 1);
        assert_eq!(view.editing().draft.name, "Books");

        view.draft_mut().name = "Novels".into();
        assert!(view.save().await.is_done());

        assert_eq!(view.items()[0].name, "Novels");
        assert_eq!(view.editing().id, UNSET_ID);
        assert_eq!(
            confirm.prompts.lock().unwrap().as_slice(),
            ["Do you want to edit this category?", "Update category with ID 1?"]
        );
    }

    #[tokio::test]
    async fn declined_actions_change_nothing_and_send_nothing() {
        let api = Arc::new(FakeCategories::with(vec![books()]));
        let (mut view, _) = view(&api, false);
        view.load().await.unwrap();
        let calls_after_load = api.calls.load(Ordering::SeqCst);

        assert_matches!(view.edit(1), Outcome::Declined);
        assert_eq!(view.editing().id, UNSET_ID);

        view.draft_mut().name = "Draft".into();
        assert_matches!(view.save().await, Outcome::Declined);
        assert_matches!(view.delete(1).await, Outcome::Declined);

        assert_eq!(api.calls.load(Ordering::SeqCst), calls_after_load);
        assert_eq!(view.items(), &[books()]);
        assert_eq!(view.editing().draft.name, "Draft");
    }

    #[tokio::test]
    async fn delete_removes_the_entry() {
        let api = Arc::new(FakeCategories::with(vec![books()]));
        let (mut view, _) = view(&api, true);
        view.load().await.unwrap();

        assert!(view.delete(1).await.is_done());
        assert!(view.items().is_empty());
    }

    #[tokio::test]
    async fn failed_save_keeps_the_draft() {
        let api = Arc::new(FakeCategories::failing());
        let (mut view, _) = view(&api, true);
        view.draft_mut().name = "Books".into();

        assert_matches!(view.save().await, Outcome::Failed(_));
        assert_eq!(view.editing().draft.name, "Books");
        assert!(view.items().is_empty());
    }

    #[test]
    fn cancel_resets_the_editing_slot() {
        let api = Arc::new(FakeCategories::default());
        let (mut view, _) = view(&api, true);
        view.draft_mut().name = "Books".into();

        view.cancel();
        assert_eq!(view.editing(), &Editing::default());
    }

    #[test]
    fn editing_an_unlisted_record_fails() {
        let api = Arc::new(FakeCategories::default());
        let (mut view, _) = view(&api, true);
        assert_matches!(view.edit(42), Outcome::Failed(ref e) if e.is_not_found());
    }
}
