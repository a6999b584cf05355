//! RF-CLI: Reveil-Forms command line
//!
//! Submits contact messages and book orders through the same pipelines the
//! storefront uses, and inspects the local records they leave behind.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use rf_cli::{App, AppConfig, BackendKind, Outcome};
use rf_03_submission_pipeline::SubmissionReport;
use rf_telemetry::init_logging;
use shared_types::{contact_fields, order_fields, FormKind, PaymentMethod};

/// RF-CLI: Reveil-Forms command line
#[derive(Parser, Debug)]
#[command(name = "rf-cli")]
#[command(about = "Submit storefront forms and manage their local records")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of the local store (overrides the configuration)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a contact message
    Contact {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Subscribe to the newsletter
        #[arg(long)]
        newsletter: bool,
        /// Backend to submit through (defaults to the configured one)
        #[arg(long, value_enum)]
        backend: Option<BackendKind>,
    },

    /// Order the book
    Order {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// wave, orange or card (defaults to the preferred method)
        #[arg(long)]
        method: Option<PaymentMethod>,
    },

    /// Export archived contact messages to CSV
    Export {
        /// Output directory (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or export submission history
    History {
        #[arg(value_enum, default_value = "contact")]
        form: FormArg,
        /// Print as delimited text
        #[arg(long)]
        csv: bool,
        /// Delete the history instead of printing it
        #[arg(long, conflicts_with = "csv")]
        clear: bool,
    },

    /// List recorded orders
    Orders,

    /// Time left on today's offer
    Countdown,

    /// Remember a payment method for the next order
    PreferPayment { method: PaymentMethod },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormArg {
    Contact,
    Order,
}

impl From<FormArg> for FormKind {
    fn from(form: FormArg) -> Self {
        match form {
            FormArg::Contact => FormKind::Contact,
            FormArg::Order => FormKind::Order,
        }
    }
}

fn field(name: &str, value: String) -> (String, String) {
    (name.to_string(), value)
}

fn print_outcome(outcome: &Outcome) -> ExitCode {
    match &outcome.report {
        SubmissionReport::Rejected(report) => {
            eprintln!("Please correct the following fields:");
            for error in report.errors() {
                eprintln!(
                    "  {}: {}",
                    error.field_name,
                    error.message.as_deref().unwrap_or("invalid")
                );
            }
            ExitCode::from(2)
        }
        SubmissionReport::Completed { outcome: result, .. } => {
            if let Some(message) = &outcome.view.success {
                println!("{message}");
            }
            if let Some(message) = &outcome.view.error {
                eprintln!("{message}");
            }
            if let Some(alternatives) = &outcome.view.alternative_contact {
                eprintln!("WhatsApp: {}", alternatives.whatsapp_url);
                eprintln!("Email:    {}", alternatives.mailto());
            }
            if let Some(reference) = result.reference() {
                println!("Reference: {reference}");
            }
            if let Some(url) = &outcome.confirmation {
                println!("Confirmation: {url}");
            }
            if let Some(link) = &outcome.mailto_link {
                println!("Open in your mail client: {link}");
            }
            if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    config.logging = config.logging.with_env_overrides().verbose(args.verbose);
    config.logging.json_logs |= args.json_logs;

    let _guard = init_logging(&config.logging)?;
    debug!(data_dir = %config.data_dir.display(), "Starting rf-cli");

    let app = App::open(config)?;

    let code = match args.command {
        Command::Contact {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
            newsletter,
            backend,
        } => {
            let fields = vec![
                field(contact_fields::FIRST_NAME, first_name),
                field(contact_fields::LAST_NAME, last_name),
                field(contact_fields::EMAIL, email),
                field(contact_fields::PHONE, phone),
                field(contact_fields::SUBJECT, subject),
                field(contact_fields::MESSAGE, message),
                field(
                    contact_fields::NEWSLETTER,
                    if newsletter { "yes" } else { "no" }.to_string(),
                ),
            ];
            print_outcome(&app.submit_contact(fields, backend).await?)
        }

        Command::Order {
            name,
            email,
            phone,
            method,
        } => {
            let method = match method {
                Some(method) => method,
                None => app.preferred_payment()?,
            };
            let fields = vec![
                field(order_fields::CUSTOMER_NAME, name),
                field(order_fields::CUSTOMER_EMAIL, email),
                field(order_fields::CUSTOMER_PHONE, phone),
                field(order_fields::PAYMENT_METHOD, method.id().to_string()),
            ];
            print_outcome(&app.submit_order(fields).await?)
        }

        Command::Export { output } => {
            let dir = output.unwrap_or_else(|| app.config().data_dir.clone());
            match app.export_contacts(&dir)? {
                Some(path) => println!("Exported to {}", path.display()),
                None => println!("No messages to export"),
            }
            ExitCode::SUCCESS
        }

        Command::History { form, csv, clear } => {
            let kind = FormKind::from(form);
            if clear {
                app.clear_history(kind)?;
                println!("{kind} history cleared");
            } else if csv {
                print!("{}", app.export_history(kind)?);
            } else {
                for entry in app.history(kind)? {
                    println!(
                        "{}  {:<7}  {}",
                        entry.recorded_at.to_rfc3339(),
                        entry.status.to_string(),
                        entry.detail
                    );
                }
            }
            ExitCode::SUCCESS
        }

        Command::Orders => {
            for order in app.orders()? {
                println!(
                    "{}  {}  {}  {} {}  {}",
                    order.order_id,
                    order.customer_name,
                    order.payment_method.display_name(),
                    order.book_price,
                    order.currency,
                    order.completed_at.to_rfc3339()
                );
            }
            ExitCode::SUCCESS
        }

        Command::Countdown => {
            let now = chrono::Local::now().naive_local();
            println!("Offer ends in {}", app.countdown(now));
            ExitCode::SUCCESS
        }

        Command::PreferPayment { method } => {
            app.set_preferred_payment(method)?;
            println!("Preferred payment: {}", method.display_name());
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
