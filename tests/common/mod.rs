#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use user_service::domain::entities::{NewUser, User};
use user_service::domain::repositories::UserRepository;
use user_service::error::AppError;
use user_service::state::AppState;

/// In-memory user store with the same not-found semantics as the Postgres
/// repository.
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Inserts a row as-is, bypassing validation. Allows a missing `dob`.
    pub fn insert_raw(&self, name: &str, dob: Option<NaiveDate>) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users
            .lock()
            .unwrap()
            .push(User::new(id, name.to_string(), dob));
        id
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(id, new_user.name, Some(new_user.dob));
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("no user with id {id}")))?;

        existing.name = user.name;
        existing.dob = Some(user.dob);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(AppError::not_found(format!("no user with id {id}")));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn update(&self, _id: i32, _user: NewUser) -> Result<User, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete(&self, _id: i32) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryUserRepository>) {
    let repo = Arc::new(MemoryUserRepository::new());
    (AppState::new(repo.clone()), repo)
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingUserRepository))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Fields of one captured tracing event, rendered as strings.
#[derive(Debug, Clone, Default)]
pub struct CapturedEvent {
    pub target: String,
    pub fields: HashMap<String, String>,
}

/// Tracing layer recording every event it sees.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn events_for(&self, target: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.target == target)
            .cloned()
            .collect()
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent {
            target: event.metadata().target().to_string(),
            ..Default::default()
        };
        event.record(&mut FieldVisitor(&mut captured.fields));
        self.events.lock().unwrap().push(captured);
    }
}
