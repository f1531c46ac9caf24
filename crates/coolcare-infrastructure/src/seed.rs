//! Demo records for the back office, used by the CLI and tests.

use chrono::NaiveDate;
use coolcare_core::admin::{
    BookingRecord, BookingStatus, ContactCard, ContentItem, CtaBlock, Customer, CustomerStatus,
    HeroBlock, Package, ServiceOffering, SiteContent, Testimonial,
};

pub fn services() -> Vec<ServiceOffering> {
    vec![
        offering(
            "1",
            "AC Installation",
            "Professional AC installation ensuring efficiency.",
        ),
        offering("2", "AC Repair", "Fast repair service with genuine parts."),
    ]
}

pub fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "1".to_string(),
            name: "Basic Check".to_string(),
            price: "₹399".to_string(),
            features: strings(&["Filter cleaning", "Performance check", "Minor adjustments"]),
            badge: "Most Popular".to_string(),
            details: "Perfect for small units and includes a filter cleaning, minor adjustments, and performance check.".to_string(),
        },
        Package {
            id: "2".to_string(),
            name: "Full Service".to_string(),
            price: "₹999".to_string(),
            features: strings(&[
                "Deep cleaning",
                "Coil clean",
                "Gas check",
                "Performance optimization",
            ]),
            badge: "Best Value".to_string(),
            details: "Includes deep cleaning, coil cleaning, gas check, and performance optimization for maximum efficiency.".to_string(),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            "1",
            ("Rahul Verma", "9876543210", "rahul@example.com"),
            "Delhi, India",
            5,
            CustomerStatus::Active,
            (2024, 9, 1),
        ),
        customer(
            "2",
            ("Priya Sharma", "9123456780", "priya@example.com"),
            "Mumbai, India",
            3,
            CustomerStatus::Lead,
            (2024, 10, 12),
        ),
        customer(
            "3",
            ("Ankit Singh", "9988776655", "ankit@example.com"),
            "Chandigarh, India",
            7,
            CustomerStatus::Blocked,
            (2024, 11, 25),
        ),
    ]
}

pub fn bookings() -> Vec<BookingRecord> {
    vec![
        booking(
            "1",
            ("Rahul Verma", "9876543210"),
            "AC Installation",
            ("2025-10-28", "10:00"),
            BookingStatus::Pending,
            0,
        ),
        booking(
            "2",
            ("Priya Sharma", "9123456780"),
            "AC Repair",
            ("2025-10-29", "14:00"),
            BookingStatus::Confirmed,
            500,
        ),
        booking(
            "3",
            ("Ankit Singh", "9988776655"),
            "AC Maintenance",
            ("2025-10-30", "11:30"),
            BookingStatus::Completed,
            300,
        ),
    ]
}

pub fn site_content() -> SiteContent {
    SiteContent {
        hero: HeroBlock {
            title: "Reliable AC Service at Your Doorstep".to_string(),
            subtitle: "Book expert AC repair & maintenance with just one click.".to_string(),
            cta_label: "Book AC Service".to_string(),
        },
        services: vec![
            item("AC Installation", "Professional AC unit installation."),
            item("AC Repair", "Quick and reliable repair services."),
            item("AC Maintenance", "Regular check-ups to ensure efficiency."),
        ],
        testimonials: vec![
            Testimonial {
                name: "Rahul Verma".to_string(),
                feedback: "Excellent AC service, very professional!".to_string(),
            },
            Testimonial {
                name: "Priya Sharma".to_string(),
                feedback: "Quick response and affordable rates.".to_string(),
            },
        ],
        cta: CtaBlock {
            title: "Ready to Get Started?".to_string(),
            subtitle: "Book your AC service in seconds and enjoy a cool, comfortable home."
                .to_string(),
            button: "Book Now".to_string(),
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn offering(id: &str, title: &str, description: &str) -> ServiceOffering {
    ServiceOffering {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/400/200?random={id}"),
    }
}

fn customer(
    id: &str,
    (name, phone, email): (&str, &str, &str),
    address: &str,
    total_bookings: u32,
    status: CustomerStatus,
    (year, month, day): (i32, u32, u32),
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        total_bookings,
        status,
        created_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

fn booking(
    id: &str,
    (name, phone): (&str, &str),
    service: &str,
    (date, time): (&str, &str),
    status: BookingStatus,
    amount_paid: u64,
) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        customer: ContactCard {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        service: service.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status,
        advance_paid: amount_paid > 0,
        amount_paid,
    }
}

fn item(name: &str, description: &str) -> ContentItem {
    ContentItem {
        name: name.to_string(),
        description: description.to_string(),
    }
}
