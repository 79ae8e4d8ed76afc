use std::collections::VecDeque;

use super::*;
use crate::delete_flow::DeleteFlow;
use crate::endpoint::{self, Method};

/// Records every request and replays queued responses in order.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<String, ApiError>>>,
}

impl RecordingTransport {
    fn replying(responses: Vec<Result<String, ApiError>>) -> Self {
        Self { requests: Mutex::default(), responses: Mutex::new(responses.into()) }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests mutex").clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, ApiError> {
        self.requests.lock().expect("requests mutex").push(request.clone());
        self.responses
            .lock()
            .expect("responses mutex")
            .pop_front()
            .unwrap_or_else(|| Ok("null".to_owned()))
    }
}

fn signed_in(responses: Vec<Result<String, ApiError>>) -> Gateway<RecordingTransport, MemoryTokenStore> {
    Gateway::new(RecordingTransport::replying(responses), MemoryTokenStore::with_token("tok-1"))
}

fn signed_out() -> Gateway<RecordingTransport, MemoryTokenStore> {
    Gateway::new(RecordingTransport::default(), MemoryTokenStore::default())
}

const TWO_EMPLOYEES: &str = r#"[
    {"employeeId":1,"fullname":"Ada","telNo":"081","positionName":"Engineer"},
    {"employeeId":2,"fullname":"Grace","telNo":null,"positionName":"Admin"}
]"#;

fn status(code: u16) -> ApiError {
    ApiError::Status { status: code, body: String::new() }
}

// =============================================================================
// Session guard
// =============================================================================

#[tokio::test]
async fn protected_calls_without_token_send_nothing() {
    let gateway = signed_out();
    let draft = EmployeeDraft { fullname: "Ada".to_owned(), tel_no: String::new(), position_id: 1 };

    assert_eq!(gateway.employees().await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.employee(1).await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.positions().await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.create_employee(&draft).await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.update_employee(1, &draft).await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.delete_employee(1).await, Err(CallError::Unauthenticated));
    assert_eq!(gateway.delete_and_reload(1).await, DeleteReport::SignedOut);

    assert!(gateway.transport().requests().is_empty());
}

#[tokio::test]
async fn empty_token_counts_as_missing() {
    let gateway = Gateway::new(RecordingTransport::default(), MemoryTokenStore::with_token(""));
    assert!(!gateway.is_signed_in());
    assert_eq!(gateway.employees().await, Err(CallError::Unauthenticated));
    assert!(gateway.transport().requests().is_empty());
}

#[tokio::test]
async fn protected_calls_attach_bearer_token() {
    let gateway = signed_in(vec![Ok(TWO_EMPLOYEES.to_owned())]);
    let employees = gateway.employees().await.unwrap();
    assert_eq!(employees.len(), 2);

    let sent = gateway.transport().requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, endpoint::EMPLOYEES);
    assert_eq!(sent[0].authorization().as_deref(), Some("Bearer tok-1"));
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn login_stores_returned_token() {
    let gateway = Gateway::new(
        RecordingTransport::replying(vec![Ok(r#"{"token":"fresh"}"#.to_owned())]),
        MemoryTokenStore::default(),
    );
    let credentials = Credentials { username: "ada".to_owned(), password: "pw".to_owned() };
    gateway.login(&credentials).await.unwrap();
    assert_eq!(gateway.tokens().load().as_deref(), Some("fresh"));

    let sent = gateway.transport().requests();
    assert_eq!(sent[0].path, endpoint::LOGIN);
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "username": "ada", "password": "pw" })));
}

#[tokio::test]
async fn login_without_token_is_an_error_and_stores_nothing() {
    let gateway = Gateway::new(
        RecordingTransport::replying(vec![Ok("{}".to_owned())]),
        MemoryTokenStore::default(),
    );
    let credentials = Credentials { username: "ada".to_owned(), password: "pw".to_owned() };
    assert_eq!(gateway.login(&credentials).await, Err(ApiError::MissingToken));
    assert_eq!(gateway.tokens().load(), None);
}

#[tokio::test]
async fn rejected_login_keeps_previous_state() {
    let gateway = Gateway::new(
        RecordingTransport::replying(vec![Err(status(401))]),
        MemoryTokenStore::default(),
    );
    let credentials = Credentials { username: "ada".to_owned(), password: "bad".to_owned() };
    assert_eq!(gateway.login(&credentials).await, Err(status(401)));
    assert!(!gateway.is_signed_in());
}

#[tokio::test]
async fn register_posts_account_without_token() {
    let gateway = signed_out();
    let account = NewAccount {
        fullname: "Ada".to_owned(),
        username: "ada".to_owned(),
        password: "pw".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "user".to_owned(),
    };
    gateway.register(&account).await.unwrap();
    let sent = gateway.transport().requests();
    assert_eq!(sent[0].path, endpoint::REGISTER);
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[0].body.as_ref().and_then(|b| b.get("role")), Some(&serde_json::json!("user")));
}

#[tokio::test]
async fn logout_clears_token() {
    let gateway = signed_in(Vec::new());
    assert!(gateway.is_signed_in());
    gateway.logout().unwrap();
    assert!(!gateway.is_signed_in());
    assert_eq!(gateway.employees().await, Err(CallError::Unauthenticated));
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn update_sends_full_record_with_id_query() {
    let gateway = signed_in(Vec::new());
    let draft = EmployeeDraft { fullname: "Ada".to_owned(), tel_no: "081".to_owned(), position_id: 2 };
    gateway.update_employee(5, &draft).await.unwrap();

    let sent = gateway.transport().requests();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].path_and_query(), "/api/Employee/UpdateEmployee?id=5");
    assert_eq!(
        sent[0].body,
        Some(serde_json::json!({ "employeeId": 5, "fullname": "Ada", "telNo": "081", "positionId": 2 }))
    );
}

#[tokio::test]
async fn create_posts_draft() {
    let gateway = signed_in(Vec::new());
    let draft = EmployeeDraft { fullname: "Ada".to_owned(), tel_no: String::new(), position_id: 3 };
    gateway.create_employee(&draft).await.unwrap();
    let sent = gateway.transport().requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, endpoint::CREATE_EMPLOYEE);
    assert_eq!(sent[0].id, None);
}

#[tokio::test]
async fn failures_surface_as_failed_not_unauthenticated() {
    let gateway = signed_in(vec![Err(ApiError::Network("offline".to_owned())), Ok("not json".to_owned())]);
    assert_eq!(
        gateway.positions().await,
        Err(CallError::Failed(ApiError::Network("offline".to_owned())))
    );
    assert!(matches!(gateway.employee(1).await, Err(CallError::Failed(ApiError::Decode(_)))));
}

// =============================================================================
// Delete + refetch
// =============================================================================

#[tokio::test]
async fn confirmed_delete_issues_delete_then_full_refetch() {
    let gateway = signed_in(vec![Ok(String::new()), Ok(TWO_EMPLOYEES.to_owned())]);
    let mut flow = DeleteFlow::default();
    flow.request(42);

    let target = flow.target().unwrap();
    let report = gateway.delete_and_reload(target).await;
    let outcome = flow.settle(report.outcome().unwrap());

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(matches!(report, DeleteReport::Reloaded(ref items) if items.len() == 2));
    assert_eq!(flow, DeleteFlow::Idle);

    let sent = gateway.transport().requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].path_and_query(), "/api/Employee/DeletePosition?id=42");
    assert_eq!(sent[1].method, Method::Get);
    assert_eq!(sent[1].path, endpoint::EMPLOYEES);
}

#[tokio::test]
async fn failed_delete_skips_refetch_and_still_settles() {
    let gateway = signed_in(vec![Err(status(500))]);
    let mut flow = DeleteFlow::default();
    flow.request(42);

    let report = gateway.delete_and_reload(42).await;
    assert_eq!(report, DeleteReport::Failed(status(500)));
    assert_eq!(flow.settle(report.outcome().unwrap()), DeleteOutcome::Failed);
    assert_eq!(flow.target(), None);
    assert_eq!(gateway.transport().requests().len(), 1);
}

#[tokio::test]
async fn refetch_failure_still_counts_as_deleted() {
    let gateway = signed_in(vec![Ok(String::new()), Err(status(503))]);
    let report = gateway.delete_and_reload(3).await;
    assert_eq!(report, DeleteReport::ReloadFailed(status(503)));
    assert_eq!(report.outcome(), Some(DeleteOutcome::Deleted));
}
