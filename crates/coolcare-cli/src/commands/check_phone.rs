use colored::Colorize;
use coolcare_core::booking::is_valid_phone;

pub fn run(phone: &str) {
    if is_valid_phone(phone) {
        println!("{} {}", "✓".green(), format!("{phone} is a valid phone number").green());
    } else {
        println!(
            "{} {}",
            "✗".red(),
            format!("{phone} is not a valid 10-digit phone number").red()
        );
    }
}
