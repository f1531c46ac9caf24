use chrono::NaiveDate;
use coolcare_application::admin::{
    BookingScreen, CustomerScreen, DashboardSummary, ModalState, PackageScreen, Paginated,
    ServiceScreen,
};
use coolcare_core::admin::{BookingStatus, CustomerStatus};
use coolcare_core::error::CoolcareError;
use coolcare_core::repository::Repository;
use coolcare_infrastructure::{InMemoryRepository, seed};
use std::sync::Arc;

fn booking_screen() -> (
    Arc<InMemoryRepository<coolcare_core::admin::BookingRecord>>,
    BookingScreen,
) {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::bookings()));
    (repo.clone(), BookingScreen::new(repo))
}

#[tokio::test]
async fn test_search_filters_bookings() {
    let (_, mut screen) = booking_screen();
    assert_eq!(screen.rows().await.unwrap().len(), 3);

    screen.set_search("repair");
    let rows = screen.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer.name, "Priya Sharma");

    screen.set_search("99887");
    assert_eq!(screen.rows().await.unwrap()[0].id, "3");
}

#[tokio::test]
async fn test_create_package_through_modal() {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::packages()));
    let mut screen = PackageScreen::new(repo.clone());

    screen.open_create();
    let form = screen.form_mut().unwrap();
    form.name = "Gas Top-up".to_string();
    form.features = "Leak test, Refill".to_string();

    // Price is required; the modal stays open.
    let err = screen.submit().await.unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(screen.modal(), ModalState::Creating(_)));

    screen.form_mut().unwrap().price = "₹1499".to_string();
    let created = screen.submit().await.unwrap();
    assert_eq!(created.features, vec!["Leak test", "Refill"]);
    assert_eq!(screen.modal(), &ModalState::Closed);
    assert_eq!(repo.list().await.unwrap().last().unwrap().id, created.id);
}

#[tokio::test]
async fn test_edit_service_keeps_id() {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::services()));
    let mut screen = ServiceScreen::new(repo.clone());

    screen.open_edit("2").await.unwrap();
    screen.form_mut().unwrap().description = "Same-day repair.".to_string();
    let saved = screen.submit().await.unwrap();

    assert_eq!(saved.id, "2");
    assert_eq!(saved.title, "AC Repair");
    assert_eq!(repo.find_by_id("2").await.unwrap().unwrap().description, "Same-day repair.");
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_open_edit_unknown_id() {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::services()));
    let mut screen = ServiceScreen::new(repo);
    assert!(screen.open_edit("missing").await.unwrap_err().is_not_found());
    assert_eq!(screen.modal(), &ModalState::Closed);
}

#[tokio::test]
async fn test_cancel_discards_form() {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::customers()));
    let mut screen = CustomerScreen::new(repo.clone());

    screen.open_edit("1").await.unwrap();
    screen.form_mut().unwrap().name = "Changed".to_string();
    screen.cancel();

    assert!(screen.form_mut().is_none());
    assert_eq!(repo.find_by_id("1").await.unwrap().unwrap().name, "Rahul Verma");
}

#[tokio::test]
async fn test_customer_status_toggle_cycles() {
    let repo = Arc::new(InMemoryRepository::with_entities(seed::customers()));
    let screen = CustomerScreen::new(repo);

    let statuses = [
        CustomerStatus::Blocked,
        CustomerStatus::Lead,
        CustomerStatus::Active,
    ];
    for expected in statuses {
        assert_eq!(screen.toggle_status("1").await.unwrap().status, expected);
    }
}

#[tokio::test]
async fn test_booking_status_rules() {
    let (repo, screen) = booking_screen();

    // Completed bookings are final.
    let err = screen.set_status("3", BookingStatus::Cancelled).await.unwrap_err();
    assert!(matches!(err, CoolcareError::Validation(_)));

    // A pending booking has to be started before it can be completed.
    assert!(screen.set_status("1", BookingStatus::Completed).await.is_err());
    screen.set_status("1", BookingStatus::InProgress).await.unwrap();
    screen.set_status("1", BookingStatus::Completed).await.unwrap();
    assert_eq!(
        repo.find_by_id("1").await.unwrap().unwrap().status,
        BookingStatus::Completed
    );
}

#[tokio::test]
async fn test_delete_removes_row() {
    let (repo, screen) = booking_screen();
    screen.delete("2").await.unwrap();
    assert_eq!(repo.len().await, 2);
    assert!(screen.delete("2").await.unwrap_err().is_not_found());
}

#[test]
fn test_dashboard_summary_over_seed_data() {
    let today = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
    let summary = DashboardSummary::compute(&seed::bookings(), &seed::services(), today);

    assert_eq!(
        summary,
        DashboardSummary {
            total_services: 2,
            bookings_today: 1,
            revenue: 800,
            pending_requests: 1,
        }
    );
    assert!(!Paginated::new(seed::bookings()).has_more());
}
