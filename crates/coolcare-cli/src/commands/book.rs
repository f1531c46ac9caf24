use super::console::Console;
use anyhow::{Result, anyhow, bail};
use clap::Args;
use colored::Colorize;
use coolcare_application::{BookingWorkflow, WorkflowEvent, WorkflowSettings};
use coolcare_core::BookingError;
use coolcare_core::booking::{DraftField, ServiceKind};
use coolcare_core::checkout::{CheckoutCallbacks, CheckoutFailure, CheckoutOptions, PaymentSuccess};
use coolcare_core::config::AppConfig;
use coolcare_core::order::{Money, OrderConfirmation};
use coolcare_interaction::{
    CheckoutPresenter, HostedCheckout, HttpOrderGateway, HttpOtpGateway, HttpScriptSource,
    LoadedScript,
};
use std::path::PathBuf;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::broadcast;

#[derive(Args)]
pub struct BookArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// 10-digit contact number; the OTP is sent here
    #[arg(long)]
    pub phone: String,
    /// Service to book, e.g. "AC Repair"
    #[arg(long, default_value = "AC Installation")]
    pub service: String,
    /// Preferred date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Preferred time slot
    #[arg(long)]
    pub time: String,
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Terminal stand-in for the hosted payment UI: shows the checkout options
/// and takes the payment id the customer received.
struct ConsolePresenter {
    console: Console,
}

impl CheckoutPresenter for ConsolePresenter {
    fn present(
        &self,
        script: &LoadedScript,
        options: CheckoutOptions,
        callbacks: CheckoutCallbacks,
    ) {
        let amount = Money::new(options.amount, options.currency.clone());
        println!();
        println!("{}", format!("=== {} ===", options.name).bright_cyan().bold());
        println!("  {:<12} {}", "Order", options.order_id);
        println!("  {:<12} {}", "Amount", amount.to_string().bold());
        println!("  {:<12} {}", "For", options.description);
        println!(
            "  {:<12} {} <{}> {}",
            "Customer", options.prefill.name, options.prefill.email, options.prefill.contact
        );
        println!(
            "  {}",
            format!("checkout library: {} ({} bytes)", script.url, script.size_bytes).dimmed()
        );
        if options.key.is_empty() {
            println!("  {}", "warning: checkout.key_id is not configured".yellow());
        }

        let console = self.console.clone();
        let order_id = options.order_id;
        tokio::spawn(async move {
            match console.prompt("Payment id (empty to cancel):").await {
                Ok(Some(payment_id)) if !payment_id.is_empty() => {
                    callbacks.on_success(PaymentSuccess {
                        payment_id,
                        order_id: Some(order_id),
                        signature: None,
                    });
                }
                Ok(_) => {
                    callbacks.on_failure(CheckoutFailure::new("Payment cancelled by customer"))
                }
                Err(err) => callbacks.on_failure(CheckoutFailure::new(err.to_string())),
            }
        });
    }
}

pub async fn run(config: &AppConfig, args: BookArgs) -> Result<()> {
    let service = parse_service(&args.service)?;
    let console = Console::new();
    let mut workflow = build_workflow(config, console.clone())?;
    spawn_progress(workflow.subscribe());

    workflow.edit(DraftField::CustomerName, args.name)?;
    workflow.edit(DraftField::Email, args.email)?;
    workflow.edit(DraftField::Phone, args.phone)?;
    workflow.edit(DraftField::Date, args.date)?;
    workflow.edit(DraftField::Time, args.time)?;
    workflow.select_service(service)?;

    verify_phone(&mut workflow, &console).await?;
    let confirmation = pay(&mut workflow, &console).await?;
    print_confirmation(&confirmation);
    workflow.dismiss_confirmation();
    Ok(())
}

fn build_workflow(config: &AppConfig, console: Console) -> Result<BookingWorkflow> {
    let otp = Arc::new(HttpOtpGateway::new(&config.api)?);
    let orders = Arc::new(HttpOrderGateway::new(&config.api)?);
    let source = Arc::new(HttpScriptSource::new(
        config.checkout.script_url.clone(),
        config.api.timeout(),
    )?);
    let checkout = Arc::new(HostedCheckout::new(source, Arc::new(ConsolePresenter { console })));

    Ok(BookingWorkflow::new(
        otp,
        orders,
        checkout,
        WorkflowSettings::from_config(config),
    ))
}

fn parse_service(name: &str) -> Result<ServiceKind> {
    name.parse().map_err(|_| {
        let known: Vec<String> = ServiceKind::iter().map(|kind| kind.to_string()).collect();
        anyhow!("Unknown service '{name}'. Choose one of: {}", known.join(", "))
    })
}

async fn verify_phone(workflow: &mut BookingWorkflow, console: &Console) -> Result<()> {
    workflow
        .request_code()
        .await
        .map_err(|err| anyhow!(err.user_message()))?;
    println!("{}", format!("OTP sent to {}", workflow.draft().phone).green());

    loop {
        let Some(input) = console.prompt("Enter OTP ('resend' for a new code):").await? else {
            bail!("Input closed before the phone was verified");
        };

        if input.eq_ignore_ascii_case("resend") {
            match workflow.request_code().await {
                Ok(()) => println!("{}", "A new code was sent.".green()),
                Err(err) => report(&err),
            }
            continue;
        }

        match workflow.verify_code(&input).await {
            Ok(()) => {
                println!("{}", "✓ Phone verified".green());
                return Ok(());
            }
            Err(err) => {
                report(&err);
                let wait = workflow.resend_cooldown_seconds();
                if wait > 0 {
                    println!("{}", format!("  (resend available in {wait}s)").dimmed());
                }
            }
        }
    }
}

async fn pay(workflow: &mut BookingWorkflow, console: &Console) -> Result<OrderConfirmation> {
    loop {
        let outcome = match workflow.submit_payment().await {
            Ok(()) => workflow.await_payment().await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(confirmation) => return Ok(confirmation),
            Err(err) => {
                report(&err);
                if !console.confirm("Try the payment again?").await? {
                    workflow.reset();
                    bail!("Booking not completed");
                }
            }
        }
    }
}

fn report(err: &BookingError) {
    println!("{} {}", "✗".red(), err.user_message().red());
}

fn print_confirmation(confirmation: &OrderConfirmation) {
    println!();
    println!("{}", "Booking confirmed!".green().bold());
    println!("  {:<12} {}", "Order", confirmation.order_id);
    println!("  {:<12} {}", "Payment", confirmation.payment_id);
    println!("  {:<12} {}", "Paid", confirmation.amount);
    println!(
        "  {:<12} {} on {} at {}",
        "Service",
        confirmation.customer.service,
        confirmation.customer.date,
        confirmation.customer.time
    );
}

fn spawn_progress(mut events: broadcast::Receiver<WorkflowEvent>) {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(WorkflowEvent::StateChanged { to, .. }) => {
                    println!("{}", format!("  → {to}").dimmed());
                }
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
