//! kgtrack command-line front-end.
//!
//! Works against the same two storage keys as the web dashboard, kept as JSON
//! files in a local data directory.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kgtrack_common::csv_export::default_export_filename;
use kgtrack_common::customer::{CustomerId, CustomerKind, CustomerStatus};
use kgtrack_common::input::CustomerInput;
use kgtrack_common::store::{FileBackend, Store};
use kgtrack_common::tracker::Tracker;
use kgtrack_common::view_mode::ViewMode;

#[derive(Parser)]
#[command(name = "kgtrack", about = "Customer order and delivery tracker")]
struct Cli {
    /// Directory holding the stored customers and view preference
    /// (default: the platform data dir, e.g. ~/.local/share/kgtrack).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List customers in the saved view mode.
    List {
        /// Only show customers whose name, type or status contains this text.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Add a customer.
    Add(CustomerArgs),
    /// Edit a customer. Omitted fields keep their current value.
    Edit {
        id: u64,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    /// Record a delivery against a customer's remaining weight.
    Deliver { id: u64, kg: String },
    /// Show dashboard totals.
    Metrics,
    /// Export every customer as CSV.
    Export {
        /// Output path (default: customers-<today>.csv in the current directory).
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Show or set the view mode (table or card).
    View { mode: Option<String> },
    /// Delete all stored customers.
    Clear,
}

#[derive(Args)]
struct CustomerArgs {
    #[arg(long)]
    name: Option<String>,
    /// Ordered weight in kg.
    #[arg(long)]
    order_kg: Option<String>,
    /// Delivered weight in kg.
    #[arg(long)]
    deliver_kg: Option<String>,
    #[arg(long)]
    total_orders: Option<String>,
    /// Meat type, e.g. poultry or pork.
    #[arg(long = "type")]
    kind: Option<String>,
    /// pending, in-progress or done.
    #[arg(long, value_parser = parse_status)]
    status: Option<CustomerStatus>,
    /// Requested date (YYYY-MM-DD).
    #[arg(long)]
    requested: Option<NaiveDate>,
    /// Created date (YYYY-MM-DD).
    #[arg(long)]
    created: Option<NaiveDate>,
}

impl CustomerArgs {
    fn apply(self, form: &mut CustomerInput) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(kg) = self.order_kg {
            form.order_kg = kg;
        }
        if let Some(kg) = self.deliver_kg {
            form.deliver_kg = kg;
        }
        if let Some(total) = self.total_orders {
            form.total_order = total;
        }
        if let Some(kind) = self.kind {
            form.kind = CustomerKind::from(kind.trim().to_lowercase());
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(date) = self.requested {
            form.requested_date = date;
        }
        if let Some(date) = self.created {
            form.created_date = date;
        }
    }
}

fn parse_status(s: &str) -> Result<CustomerStatus, String> {
    CustomerStatus::parse(s.trim()).ok_or_else(|| {
        format!("unknown status \"{s}\" (expected pending, in-progress or done)")
    })
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no platform data directory; pass --data-dir")?;
    Ok(base.join("kgtrack"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    tracing::debug!(dir = %data_dir.display(), "using data dir");
    let backend = FileBackend::open(&data_dir)
        .with_context(|| format!("opening data dir {}", data_dir.display()))?;
    let mut tracker = Tracker::open(Store::new(backend));

    run(&mut tracker, cli.command)
}

fn run(tracker: &mut Tracker<FileBackend>, command: Command) -> Result<()> {
    let today = Local::now().date_naive();
    match command {
        Command::List { search } => {
            let shown = tracker.search(search.as_deref().unwrap_or(""));
            print!("{}", render::render_list(&shown, tracker.view_mode()));
        }
        Command::Add(fields) => {
            let mut form = CustomerInput::blank(today);
            fields.apply(&mut form);
            let id = tracker.add_customer(&form)?;
            println!("Added customer {id}");
        }
        Command::Edit { id, fields } => {
            let id = CustomerId(id);
            let Some(existing) = tracker.customer(id) else {
                bail!("no customer with id {id}");
            };
            let mut form = CustomerInput::from_customer(existing);
            fields.apply(&mut form);
            tracker.edit_customer(id, &form)?;
            println!("Updated customer {id}");
        }
        Command::Deliver { id, kg } => {
            let id = CustomerId(id);
            let delivered = tracker.quick_deliver(id, &kg)?;
            if let Some(customer) = tracker.customer(id) {
                println!(
                    "Delivered {delivered} kg to {}; {} kg remaining ({})",
                    customer.name, customer.remaining_kg, customer.status
                );
            }
        }
        Command::Metrics => {
            print!("{}", render::render_metrics(&tracker.metrics()));
        }
        Command::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(default_export_filename(today)));
            std::fs::write(&path, tracker.export_csv())
                .with_context(|| format!("writing {}", path.display()))?;
            println!(
                "Exported {} customers to {}",
                tracker.customers().len(),
                path.display()
            );
        }
        Command::View { mode: None } => println!("{}", tracker.view_mode()),
        Command::View { mode: Some(mode) } => {
            let Some(mode) = ViewMode::parse(mode.trim()) else {
                bail!("unknown view mode \"{mode}\" (expected table or card)");
            };
            tracker.set_view_mode(mode);
            println!("{mode}");
        }
        Command::Clear => {
            tracker.clear_customers();
            println!("Cleared all customers");
        }
    }
    Ok(())
}
