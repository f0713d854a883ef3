use anyhow::Result;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use pulsehr::config::Config;
use pulsehr::error::HrError;
use pulsehr::seed;
use pulsehr::storage::JsonFileStorage;
use pulsehr::store::{HrStore, LeaveApplication};

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "pulsehr.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("PulseHR demo starting...");

    let storage = JsonFileStorage::new(&config.data_path);
    let mut store = HrStore::open(Box::new(storage), config.store_settings());

    run_demo(&mut store)?;

    info!(path = %config.data_path.display(), "demo finished, state saved");
    Ok(())
}

/// Scripted walkthrough of one working day, printed to stdout. Starts from
/// a clean demo dataset so repeated runs behave the same.
fn run_demo(store: &mut HrStore) -> Result<()> {
    let admin = store.authenticate("admin@pulse.com", seed::DEMO_PASSWORD)?.clone();
    store.reset(admin.id)?;

    let alice = store.authenticate("employee@pulse.com", seed::DEMO_PASSWORD)?.clone();
    let bob = store.authenticate("manager@pulse.com", seed::DEMO_PASSWORD)?.clone();
    println!("Signed in: {} ({}), {} ({})", alice.name, alice.role, bob.name, bob.role);

    // Morning check-in from the office doorstep.
    let office = store
        .snapshot()
        .company(alice.company_id)
        .and_then(|c| c.office_location);
    match store.check_in(alice.id, office) {
        Ok(outcome) => println!("{}", outcome.geofence.message),
        Err(HrError::AlreadyCheckedIn { .. }) => println!("Already checked in today."),
        Err(e) => return Err(e.into()),
    }

    // Clocking straight out again leaves an incomplete day behind.
    if let Some(closed) = store.check_out(alice.id)? {
        println!("Checked out after {:.2} hrs ({}).", closed.hours_worked, closed.status);
    } else {
        println!("No active check-in found for today.");
    }

    // A leave request for next week, decided by the manager.
    let from = Utc::now().date_naive() + Duration::days(7);
    let applied = store.apply_leave(
        alice.id,
        LeaveApplication {
            from_date: from,
            to_date: from + Duration::days(2),
            reason: "Family visit".to_string(),
            attachment: None,
        },
    )?;
    println!(
        "Leave requested {} to {} ({} days).",
        applied.request.from_date,
        applied.request.to_date,
        applied.request.requested_days()
    );
    let approved = store.approve_leave(applied.request.id, bob.id)?;
    match &approved.calendar_event_id {
        Some(event) => println!("Approved by {}; calendar event {event} attached.", bob.name),
        None => println!("Approved by {}; no calendar link connected.", bob.name),
    }

    let remaining = store
        .snapshot()
        .employee(alice.id)
        .map(|e| e.remaining_leave())
        .unwrap_or_default();
    println!("{} now has {remaining} leave days remaining.", alice.name);

    // The manager's daily picture.
    let today = Utc::now().date_naive();
    let company_name = store
        .snapshot()
        .company(bob.company_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let overview = store.daily_overview(bob.company_id, today)?;
    println!(
        "Today at {company_name}: {} present, {} absent, {} on leave (of {}).",
        overview.totals.present,
        overview.totals.absent,
        overview.totals.on_leave,
        overview.totals.total
    );
    for department in &overview.departments {
        println!("  {} ({}/{} in):", department.department, department.present, department.total);
        for row in &department.employees {
            println!("    {:<14} {:<10} {}", row.name, row.status.to_string(), row.detail);
        }
    }

    Ok(())
}
