use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use colored::{ColoredString, Colorize};
use coolcare_application::admin::{
    BookingScreen, CustomerScreen, DashboardSummary, PackageScreen, Paginated, ServiceScreen,
};
use coolcare_core::admin::{BookingStatus, CustomerStatus, ServiceOffering};
use coolcare_core::repository::Repository;
use coolcare_infrastructure::{ConfigService, InMemoryRepository, seed};
use coolcare_interaction::HttpServiceCatalog;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Subcommand)]
pub enum AdminList {
    /// List bookings
    Bookings(ListArgs),
    /// List customers
    Customers(ListArgs),
    /// List pricing packages
    Packages(ListArgs),
    /// List service offerings
    Services {
        #[command(flatten)]
        list: ListArgs,
        /// Read from the admin API instead of the demo data
        #[arg(long)]
        remote: bool,
        /// Path to config.toml (used with --remote)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show today's dashboard figures
    Dashboard,
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive filter over the searchable columns
    #[arg(long)]
    search: Option<String>,
    /// Show every row instead of the first page
    #[arg(long)]
    all: bool,
}

pub async fn run(list: AdminList) -> Result<()> {
    match list {
        AdminList::Bookings(args) => {
            let repository = InMemoryRepository::with_entities(seed::bookings());
            let mut screen = BookingScreen::new(Arc::new(repository));
            screen.set_search(args.search.clone().unwrap_or_default());
            print_page("Bookings", screen.rows().await?, args.all, |b| {
                format!(
                    "{:<4} {:<18} {:<12} {:<16} {} {:<6} {:<12} ₹{}",
                    b.id,
                    b.customer.name,
                    b.customer.phone,
                    b.service,
                    b.date,
                    b.time,
                    booking_status(b.status),
                    b.amount_paid
                )
            });
        }
        AdminList::Customers(args) => {
            let repository = InMemoryRepository::with_entities(seed::customers());
            let mut screen = CustomerScreen::new(Arc::new(repository));
            screen.set_search(args.search.clone().unwrap_or_default());
            print_page("Customers", screen.rows().await?, args.all, |c| {
                format!(
                    "{:<4} {:<18} {:<12} {:<24} {:>3} bookings  {}",
                    c.id,
                    c.name,
                    c.phone,
                    c.email,
                    c.total_bookings,
                    customer_status(c.status)
                )
            });
        }
        AdminList::Packages(args) => {
            let repository = InMemoryRepository::with_entities(seed::packages());
            let mut screen = PackageScreen::new(Arc::new(repository));
            screen.set_search(args.search.clone().unwrap_or_default());
            print_page("Packages", screen.rows().await?, args.all, |p| {
                let badge = if p.badge.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", p.badge).yellow().to_string()
                };
                format!(
                    "{:<4} {:<20} {:<10}{badge}  {}",
                    p.id,
                    p.name,
                    p.price,
                    p.features.join(", ")
                )
            });
        }
        AdminList::Services { list, remote, config } => {
            let repository: Arc<dyn Repository<ServiceOffering>> = if remote {
                let service = match config {
                    Some(path) => ConfigService::with_path(path),
                    None => ConfigService::new(),
                };
                let config = service.get_config()?;
                Arc::new(HttpServiceCatalog::new(config.admin.base_url, config.api.timeout())?)
            } else {
                Arc::new(InMemoryRepository::with_entities(seed::services()))
            };
            let mut screen = ServiceScreen::new(repository);
            screen.set_search(list.search.clone().unwrap_or_default());
            print_page("Services", screen.rows().await?, list.all, |s| {
                format!("{:<4} {:<18} {}", s.id, s.title, s.description.dimmed())
            });
        }
        AdminList::Dashboard => {
            let summary = DashboardSummary::compute(
                &seed::bookings(),
                &seed::services(),
                Local::now().date_naive(),
            );
            println!("{}", "Dashboard".bright_cyan().bold());
            println!("  {:<18} {}", "Services", summary.total_services);
            println!("  {:<18} {}", "Bookings today", summary.bookings_today);
            println!("  {:<18} ₹{}", "Revenue", summary.revenue);
            println!("  {:<18} {}", "Pending requests", summary.pending_requests);
        }
    }
    Ok(())
}

fn print_page<T>(title: &str, rows: Vec<T>, all: bool, render: impl Fn(&T) -> String) {
    let mut page = Paginated::new(rows);
    if all {
        while page.has_more() {
            page.load_more();
        }
    }

    println!("{}", format!("{title} ({})", page.total()).bright_cyan().bold());
    if page.total() == 0 {
        println!("  {}", "No matching records".dimmed());
        return;
    }
    for row in page.visible() {
        println!("  {}", render(row));
    }
    if page.has_more() {
        let hidden = page.total() - page.visible().len();
        println!("  {}", format!("... {hidden} more (use --all)").dimmed());
    }
}

fn booking_status(status: BookingStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        BookingStatus::Pending => label.yellow(),
        BookingStatus::Confirmed => label.blue(),
        BookingStatus::InProgress => label.cyan(),
        BookingStatus::Completed => label.green(),
        BookingStatus::Cancelled => label.red(),
    }
}

fn customer_status(status: CustomerStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        CustomerStatus::Active => label.green(),
        CustomerStatus::Lead => label.yellow(),
        CustomerStatus::Blocked => label.red(),
    }
}
