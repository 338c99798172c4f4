// atrium-client/tests/client_integration.rs
// Integration tests against an in-memory fake backend.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;

use atrium_client::{AtriumClient, ClientConfig, ClientError, exports};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    CreditNote, CreditNoteCreate, CreditNoteFilter, CreditNoteItem, CreditNoteStatus, Employee,
    EmployeeCreate, EmployeeFilter, EmployeeUpdate,
};
use shared::response::Page;
use shared::util::now_millis;

const TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct ServerState {
    employees: Arc<Mutex<HashMap<String, Employee>>>,
    notes: Arc<Mutex<HashMap<String, CreditNote>>>,
    note_counter: Arc<AtomicUsize>,
    employee_detail_hits: Arc<AtomicUsize>,
    items_fail: Arc<AtomicBool>,
}

async fn require_bearer(
    request: axum::extract::Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"));

    if !authorized {
        return Err(AppError::not_authenticated());
    }
    Ok(next.run(request).await)
}

// ========== Employee handlers ==========

fn matches_filter(employee: &Employee, filter: &EmployeeFilter) -> bool {
    if let Some(company_id) = &filter.company_id {
        if &employee.company_id != company_id {
            return false;
        }
    }
    if let Some(department) = &filter.department {
        if employee.department.as_deref() != Some(department.as_str()) {
            return false;
        }
    }
    true
}

async fn list_employees(
    State(state): State<ServerState>,
    Query(filter): Query<EmployeeFilter>,
) -> Json<Vec<Employee>> {
    let employees = state.employees.lock().unwrap();
    let mut matching: Vec<Employee> = employees
        .values()
        .filter(|e| matches_filter(e, &filter))
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.email.cmp(&b.email));
    Json(matching)
}

async fn paged_employees(
    State(state): State<ServerState>,
    Query(filter): Query<EmployeeFilter>,
) -> Json<Page<Employee>> {
    let employees = state.employees.lock().unwrap();
    let mut matching: Vec<Employee> = employees
        .values()
        .filter(|e| matches_filter(e, &filter))
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.email.cmp(&b.email));

    let page_number = filter.page_number.unwrap_or(1).max(1);
    let page_size = filter.page_size.unwrap_or(25);
    let total = matching.len() as u64;
    let start = ((page_number - 1) * page_size) as usize;
    let items: Vec<Employee> = matching
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Json(Page::new(items, total, page_number, page_size))
}

async fn get_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    state.employee_detail_hits.fetch_add(1, Ordering::SeqCst);
    let employees = state.employees.lock().unwrap();
    employees
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

async fn create_employee(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> Json<Employee> {
    let now = now_millis();
    let employee = Employee {
        id: format!("emp-{}", uuid::Uuid::new_v4()),
        company_id: payload.company_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        job_title: payload.job_title,
        department: payload.department,
        hired_on: payload.hired_on,
        monthly_salary: payload.monthly_salary,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    state
        .employees
        .lock()
        .unwrap()
        .insert(employee.id.clone(), employee.clone());
    Json(employee)
}

async fn update_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> Result<StatusCode, AppError> {
    let mut employees = state.employees.lock().unwrap();
    let employee = employees
        .get_mut(&id)
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    if let Some(first_name) = payload.first_name {
        employee.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        employee.last_name = last_name;
    }
    if let Some(email) = payload.email {
        employee.email = email;
    }
    if let Some(job_title) = payload.job_title {
        employee.job_title = job_title;
    }
    if let Some(department) = payload.department {
        employee.department = Some(department);
    }
    if let Some(salary) = payload.monthly_salary {
        employee.monthly_salary = salary;
    }
    if let Some(is_active) = payload.is_active {
        employee.is_active = is_active;
    }
    employee.updated_at = now_millis();

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut employees = state.employees.lock().unwrap();
    if employees.remove(&id).is_none() {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ========== Credit note handlers ==========

async fn create_note(
    State(state): State<ServerState>,
    Json(payload): Json<CreditNoteCreate>,
) -> Json<CreditNote> {
    let now = now_millis();
    let seq = state.note_counter.fetch_add(1, Ordering::SeqCst) + 1;
    let note = CreditNote {
        id: format!("cn-{}", uuid::Uuid::new_v4()),
        company_id: payload.company_id,
        number: format!("CN-2026-{seq:04}"),
        invoice_id: payload.invoice_id,
        customer_name: payload.customer_name,
        status: CreditNoteStatus::Draft,
        reason: payload.reason,
        currency: payload.currency,
        total_amount: payload.total_amount,
        issued_on: None,
        created_at: now,
        updated_at: now,
        items: Vec::new(),
    };
    state
        .notes
        .lock()
        .unwrap()
        .insert(note.id.clone(), note.clone());
    Json(note)
}

async fn get_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CreditNote>, AppError> {
    let notes = state.notes.lock().unwrap();
    notes
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::CreditNoteNotFound))
}

async fn get_note_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CreditNoteItem>>, AppError> {
    if state.items_fail.load(Ordering::SeqCst) {
        return Err(AppError::internal("line item store unavailable"));
    }
    Ok(Json(vec![
        CreditNoteItem {
            id: format!("{id}-item-1"),
            credit_note_id: id.clone(),
            description: "Returned goods".to_string(),
            quantity: 2,
            unit_price: Decimal::new(2500, 2),
            line_total: Decimal::new(5000, 2),
        },
        CreditNoteItem {
            id: format!("{id}-item-2"),
            credit_note_id: id,
            description: "Shipping refund".to_string(),
            quantity: 1,
            unit_price: Decimal::new(995, 2),
            line_total: Decimal::new(995, 2),
        },
    ]))
}

async fn issue_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CreditNote>, AppError> {
    let mut notes = state.notes.lock().unwrap();
    let note = notes
        .get_mut(&id)
        .ok_or_else(|| AppError::new(ErrorCode::CreditNoteNotFound))?;

    if note.status != CreditNoteStatus::Draft {
        return Err(AppError::new(ErrorCode::CreditNoteAlreadyIssued));
    }
    note.status = CreditNoteStatus::Issued;
    note.issued_on = Some("2026-08-06".to_string());
    note.updated_at = now_millis();
    Ok(Json(note.clone()))
}

async fn export_notes(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let columns = params
        .get("columns")
        .ok_or_else(|| AppError::invalid_request("columns parameter is required"))?;

    let mut csv = columns.clone();
    csv.push('\n');
    for note in state.notes.lock().unwrap().values() {
        csv.push_str(&format!("{},{}\n", note.number, note.customer_name));
    }

    Ok(([(header::CONTENT_TYPE, "text/csv")], csv).into_response())
}

// ========== Harness ==========

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/paged", get(paged_employees))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route("/api/credit-notes", post(create_note))
        .route("/api/credit-notes/paged", get(paged_notes))
        .route("/api/credit-notes/export", get(export_notes))
        .route("/api/credit-notes/{id}", get(get_note))
        .route("/api/credit-notes/{id}/items", get(get_note_items))
        .route("/api/credit-notes/{id}/issue", post(issue_note))
        .layer(middleware::from_fn(require_bearer))
        .with_state(state)
}

async fn paged_notes(
    State(state): State<ServerState>,
    Query(filter): Query<CreditNoteFilter>,
) -> Json<Page<CreditNote>> {
    let notes = state.notes.lock().unwrap();
    let mut matching: Vec<CreditNote> = notes
        .values()
        .filter(|n| {
            filter
                .company_id
                .as_ref()
                .is_none_or(|company| &n.company_id == company)
        })
        .filter(|n| filter.status.is_none_or(|status| n.status == status))
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.number.cmp(&b.number));

    let page_number = filter.page_number.unwrap_or(1).max(1);
    let page_size = filter.page_size.unwrap_or(25);
    let total = matching.len() as u64;
    let start = ((page_number - 1) * page_size) as usize;
    let items: Vec<CreditNote> = matching
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Json(Page::new(items, total, page_number, page_size))
}

async fn spawn_server() -> (SocketAddr, ServerState) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init();

    let state = ServerState::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn client_for(addr: SocketAddr) -> AtriumClient {
    ClientConfig::new(format!("http://{addr}"))
        .with_token(TOKEN)
        .with_timeout(5)
        .build_client()
}

fn employee_dto(email: &str) -> EmployeeCreate {
    EmployeeCreate {
        company_id: "co-1".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: email.to_string(),
        phone: Some("+34 600 000 001".to_string()),
        job_title: "Accountant".to_string(),
        department: Some("Finance".to_string()),
        hired_on: "2024-03-01".to_string(),
        monthly_salary: Decimal::new(320000, 2),
    }
}

fn note_dto() -> CreditNoteCreate {
    CreditNoteCreate {
        company_id: "co-1".to_string(),
        invoice_id: "inv-9".to_string(),
        customer_name: "Acme GmbH".to_string(),
        reason: Some("damaged delivery".to_string()),
        currency: "EUR".to_string(),
        total_amount: Decimal::new(5995, 2),
    }
}

// ========== Tests ==========

#[tokio::test]
async fn create_then_get_round_trip() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let created = client.employees.create(&employee_dto("ana@acme.test")).await?;
    assert!(!created.id.is_empty());
    assert!(created.is_active);

    let fetched = client.employees.detail(&created.id).await?;
    assert_eq!(fetched.email, "ana@acme.test");
    assert_eq!(fetched.first_name, "Ana");
    assert_eq!(fetched.job_title, "Accountant");
    assert_eq!(fetched.monthly_salary, Decimal::new(320000, 2));
    Ok(())
}

#[tokio::test]
async fn requests_without_token_are_rejected() {
    let (addr, _state) = spawn_server().await;
    let client = ClientConfig::new(format!("http://{addr}")).build_client();

    let err = client.employees.list(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn create_invalidates_cached_lists() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    client.employees.create(&employee_dto("a@acme.test")).await?;
    let before = client.employees.list(Some("co-1")).await?;
    assert_eq!(before.len(), 1);

    client.employees.create(&employee_dto("b@acme.test")).await?;
    let after = client.employees.list(Some("co-1")).await?;
    assert_eq!(after.len(), 2);
    Ok(())
}

#[tokio::test]
async fn paged_envelope_holds_invariants() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    for i in 0..7 {
        client
            .employees
            .create(&employee_dto(&format!("emp{i}@acme.test")))
            .await?;
    }

    // Portal views resolve the company scope through the session.
    client.session.select_company("co-1");
    let filter = EmployeeFilter {
        company_id: Some(client.session.require_company()?),
        page_number: Some(3),
        page_size: Some(3),
        ..Default::default()
    };
    let page = client.employees.paged(&filter).await?;

    assert_eq!(page.total_count, 7);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page_number, 3);
    assert!(page.items.len() <= page.page_size as usize);
    assert_eq!(page.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_invalidates_detail_and_lists() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let created = client.employees.create(&employee_dto("ana@acme.test")).await?;

    // Warm both cache paths.
    let warm = client.employees.detail(&created.id).await?;
    assert_eq!(warm.job_title, "Accountant");
    client.employees.list(Some("co-1")).await?;

    let patch = EmployeeUpdate {
        job_title: Some("Finance Lead".to_string()),
        ..Default::default()
    };
    client.employees.update(&created.id, &patch).await?;

    // Both reads refetch and reflect the patch.
    let detail = client.employees.detail(&created.id).await?;
    assert_eq!(detail.job_title, "Finance Lead");

    let list = client.employees.list(Some("co-1")).await?;
    assert_eq!(list[0].job_title, "Finance Lead");
    Ok(())
}

#[tokio::test]
async fn delete_is_observed_and_signals_not_found_after() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let created = client.employees.create(&employee_dto("ana@acme.test")).await?;
    client.employees.detail(&created.id).await?;

    client.employees.delete(&created.id).await?;

    let second = client.employees.delete(&created.id).await.unwrap_err();
    assert!(second.is_not_found());

    let gone = client.employees.detail(&created.id).await.unwrap_err();
    assert!(gone.is_not_found());
    Ok(())
}

#[tokio::test]
async fn credit_note_detail_merges_line_items() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let note = client.credit_notes.create(&note_dto()).await?;
    let detail = client.credit_notes.detail(&note.id).await?;

    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[0].description, "Returned goods");
    Ok(())
}

#[tokio::test]
async fn failed_item_fetch_degrades_to_empty_items() -> anyhow::Result<()> {
    let (addr, state) = spawn_server().await;
    let client = client_for(addr);

    let note = client.credit_notes.create(&note_dto()).await?;
    state.items_fail.store(true, Ordering::SeqCst);

    let detail = client.credit_notes.detail(&note.id).await?;
    assert_eq!(detail.status, CreditNoteStatus::Draft);
    assert!(detail.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn issue_transition_refreshes_cached_reads() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let note = client.credit_notes.create(&note_dto()).await?;

    let filter = CreditNoteFilter {
        company_id: Some("co-1".to_string()),
        ..Default::default()
    };
    let before = client.credit_notes.paged(&filter).await?;
    assert_eq!(before.items[0].status, CreditNoteStatus::Draft);

    let issued = client.credit_notes.issue(&note.id).await?;
    assert_eq!(issued.status, CreditNoteStatus::Issued);
    assert_eq!(issued.issued_on.as_deref(), Some("2026-08-06"));

    // The returned note was stored under the detail key.
    let detail = client.credit_notes.detail(&note.id).await?;
    assert_eq!(detail.status, CreditNoteStatus::Issued);

    // List queries were invalidated and refetch the new status.
    let after = client.credit_notes.paged(&filter).await?;
    assert_eq!(after.items[0].status, CreditNoteStatus::Issued);

    // Issuing twice is a conflict.
    let again = client.credit_notes.issue(&note.id).await.unwrap_err();
    assert!(matches!(again, ClientError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn previous_page_stays_visible_while_navigating() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    for i in 0..4 {
        client
            .employees
            .create(&employee_dto(&format!("emp{i}@acme.test")))
            .await?;
    }

    let page_one = EmployeeFilter {
        page_number: Some(1),
        page_size: Some(2),
        ..Default::default()
    };
    let page_two = EmployeeFilter {
        page_number: Some(2),
        page_size: Some(2),
        ..Default::default()
    };

    let first = client.employees.paged(&page_one).await?;

    // Page two has never been fetched: the placeholder falls back to
    // the last page seen, so the view never flashes to empty.
    let placeholder = client.employees.paged_placeholder(&page_two).unwrap();
    assert_eq!(placeholder.page_number, first.page_number);
    assert_eq!(placeholder.items.len(), 2);

    // Once fetched, the exact page wins.
    client.employees.paged(&page_two).await?;
    let exact = client.employees.paged_placeholder(&page_two).unwrap();
    assert_eq!(exact.page_number, 2);
    Ok(())
}

#[tokio::test]
async fn csv_export_uses_registered_profile() -> anyhow::Result<()> {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    exports::register_defaults();

    client.credit_notes.create(&note_dto()).await?;

    let filter = CreditNoteFilter {
        company_id: Some("co-1".to_string()),
        ..Default::default()
    };
    let bytes = client.credit_notes.export_csv(&filter, "credit-notes").await?;
    let text = String::from_utf8(bytes)?;

    assert!(text.starts_with("number,customer_name"));
    assert!(text.contains("Acme GmbH"));
    Ok(())
}

#[tokio::test]
async fn csv_export_with_unknown_profile_fails() {
    let (addr, _state) = spawn_server().await;
    let client = client_for(addr);

    let err = client
        .credit_notes
        .export_csv(&CreditNoteFilter::default(), "no-such-profile")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Export(_)));
}

#[tokio::test]
async fn concurrent_detail_reads_hit_the_server_once() -> anyhow::Result<()> {
    let (addr, state) = spawn_server().await;
    let client = Arc::new(client_for(addr));

    let created = client.employees.create(&employee_dto("ana@acme.test")).await?;

    let reads = futures::future::join_all((0..6).map(|_| {
        let client = client.clone();
        let id = created.id.clone();
        tokio::spawn(async move { client.employees.detail(&id).await.map(|e| e.email.clone()) })
    }))
    .await;

    for read in reads {
        assert_eq!(read.unwrap()?, "ana@acme.test");
    }

    // All six reads coalesced onto a single network fetch.
    assert_eq!(state.employee_detail_hits.load(Ordering::SeqCst), 1);
    Ok(())
}
