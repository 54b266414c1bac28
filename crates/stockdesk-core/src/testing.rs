#![allow(clippy::unwrap_used)]
// ── Scripted gateways for store tests ──
//
// Replies are queued ahead of time and handed out in call order; gated
// replies park the gateway call on a oneshot so tests control
// completion order precisely.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::oneshot;

use stockdesk_api::{Error as ApiError, PageMeta, PaginatedPayload, QueryParams};

use crate::config::AuthCredentials;
use crate::gateway::{AuthGateway, PageGateway, ScopedPageGateway};
use crate::model::{EntityId, User, UserRole};

pub(crate) type PageResult<T> = Result<PaginatedPayload<T>, ApiError>;

pub(crate) fn meta(total_count: u64, page: u32, limit: u32, total_pages: u64) -> PageMeta {
    PageMeta {
        total_count,
        page,
        limit,
        total_pages,
    }
}

pub(crate) fn user(id: u64, email: &str) -> User {
    User {
        id: EntityId::Num(id),
        email: email.to_owned(),
        name: email.split('@').next().unwrap_or(email).to_owned(),
        role: UserRole::Admin,
        active: true,
        created_at: None,
    }
}

/// Spin on `cond`, yielding to the scheduler between checks. Panics if
/// the condition never holds — keeps hung tests from timing out silently.
pub(crate) async fn until(mut cond: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}

enum Scripted<T> {
    Ready(PageResult<T>),
    Gated(oneshot::Receiver<()>, PageResult<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    Page(QueryParams),
    PageOf(EntityId, QueryParams),
}

pub(crate) struct ScriptedGateway<T> {
    script: Mutex<VecDeque<Scripted<T>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl<T> ScriptedGateway<T> {
    pub(crate) fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push_page(&self, data: Vec<T>, meta: PageMeta) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Ok(PaginatedPayload { data, meta })));
    }

    pub(crate) fn push_failure(&self, err: ApiError) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Err(err)));
    }

    /// Queue a reply that parks until the returned sender fires.
    pub(crate) fn push_gated_page(&self, data: Vec<T>, meta: PageMeta) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Gated(rx, Ok(PaginatedPayload { data, meta })));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn next(&self) -> PageResult<T> {
        let entry = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("gateway script exhausted");
        match entry {
            Scripted::Ready(result) => result,
            Scripted::Gated(gate, result) => {
                let _ = gate.await;
                result
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> PageGateway<T> for ScriptedGateway<T> {
    type Error = ApiError;

    async fn fetch_page(&self, params: &QueryParams) -> PageResult<T> {
        self.record(RecordedCall::Page(params.clone()));
        self.next().await
    }
}

impl<T: Clone + Send + Sync + 'static> ScopedPageGateway<T> for ScriptedGateway<T> {
    async fn fetch_page_of(&self, parent_id: &EntityId, params: &QueryParams) -> PageResult<T> {
        self.record(RecordedCall::PageOf(parent_id.clone(), params.clone()));
        self.next().await
    }
}

/// Scripted auth gateway: current-user pages plus login/logout results.
pub(crate) struct ScriptedSession {
    pub(crate) pages: ScriptedGateway<User>,
    login: Mutex<VecDeque<Result<(), ApiError>>>,
    logout: Mutex<VecDeque<Result<(), ApiError>>>,
}

impl ScriptedSession {
    pub(crate) fn new() -> Self {
        Self {
            pages: ScriptedGateway::new(),
            login: Mutex::new(VecDeque::new()),
            logout: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn push_login(&self, result: Result<(), ApiError>) {
        self.login.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_logout(&self, result: Result<(), ApiError>) {
        self.logout.lock().unwrap().push_back(result);
    }
}

impl PageGateway<User> for ScriptedSession {
    type Error = ApiError;

    async fn fetch_page(&self, params: &QueryParams) -> PageResult<User> {
        self.pages.fetch_page(params).await
    }
}

impl AuthGateway for ScriptedSession {
    type Error = ApiError;

    async fn login(&self, _credentials: &AuthCredentials) -> Result<(), ApiError> {
        self.login
            .lock()
            .unwrap()
            .pop_front()
            .expect("login script exhausted")
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout
            .lock()
            .unwrap()
            .pop_front()
            .expect("logout script exhausted")
    }
}
