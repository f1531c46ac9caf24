//! Dashboard figures and "load more" lists.

use chrono::NaiveDate;
use coolcare_core::admin::{BookingRecord, BookingStatus, ServiceOffering};
use serde::Serialize;

/// Rows revealed per "load more" click.
pub const PAGE_STEP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_services: usize,
    pub bookings_today: usize,
    /// Sum of amounts collected, in major units.
    pub revenue: u64,
    pub pending_requests: usize,
}

impl DashboardSummary {
    pub fn compute(
        bookings: &[BookingRecord],
        services: &[ServiceOffering],
        today: NaiveDate,
    ) -> Self {
        let today = today.format("%Y-%m-%d").to_string();
        Self {
            total_services: services.len(),
            bookings_today: bookings.iter().filter(|b| b.date == today).count(),
            revenue: bookings.iter().map(|b| b.amount_paid).sum(),
            pending_requests: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count(),
        }
    }
}

/// A list revealed [`PAGE_STEP`] rows at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    items: Vec<T>,
    visible: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            visible: PAGE_STEP,
        }
    }

    pub fn visible(&self) -> &[T] {
        &self.items[..self.visible.min(self.items.len())]
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.items.len()
    }

    pub fn load_more(&mut self) {
        if self.has_more() {
            self.visible += PAGE_STEP;
        }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }
}
