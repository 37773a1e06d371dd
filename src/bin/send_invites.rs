use clap::{Arg, ArgGroup, Command};
use doctor_invite::{
    config::Config,
    db,
    db::models::api::{BulkResult, SendLinkResponse},
    services::{LinkIssuerService, PgReferralStore},
    submitter::{
        HttpLinkIssuer, InviteEvent, InviteSession, InviteSubmitter, LinkIssuer, LocalLinkIssuer,
        read_phone_rows_from_path,
    },
    utils::resolve_link,
};
use std::sync::Arc;

fn build_command() -> Command {
    Command::new("send-invites")
        .about("Issue doctor referral links for one phone number or a CSV of them")
        .arg(
            Arg::new("server-url")
                .short('s')
                .long("server-url")
                .value_name("URL")
                .help("Base URL of the invite server")
                .default_value("http://127.0.0.1:8000"),
        )
        .arg(
            Arg::new("doctor-name")
                .short('d')
                .long("doctor-name")
                .value_name("NAME")
                .help("Doctor the links are issued for")
                .required(true),
        )
        .arg(
            Arg::new("phone")
                .short('p')
                .long("phone")
                .value_name("PHONE")
                .help("Single phone number, e.g. \"+1 5551234567\""),
        )
        .arg(
            Arg::new("csv")
                .short('f')
                .long("csv")
                .value_name("FILE")
                .help("CSV file with a phoneNumber column"),
        )
        .group(
            ArgGroup::new("target")
                .args(["phone", "csv"])
                .required(true),
        )
        .arg(
            Arg::new("direct")
                .long("direct")
                .help("Write straight to DATABASE_URL instead of calling the server")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(clap::ArgAction::SetTrue),
        )
}

fn build_issuer(direct: bool, server_url: &str) -> Result<Arc<dyn LinkIssuer>, Box<dyn std::error::Error>> {
    if direct {
        let config = Config::from_env()?;
        let pool = db::create_pool(&config.database())?;
        let service = LinkIssuerService::new(
            Arc::new(PgReferralStore::new(pool)),
            config.referral_code_length,
        );
        Ok(Arc::new(LocalLinkIssuer::new(service)))
    } else {
        Ok(Arc::new(HttpLinkIssuer::new(server_url)?))
    }
}

fn display_link(server_url: &str, link: &str) -> String {
    resolve_link(server_url, link).unwrap_or_else(|_| link.to_string())
}

fn print_single(server_url: &str, result: &SendLinkResponse) {
    match (&result.link, &result.error) {
        (Some(link), _) if result.success => {
            println!("✅ Link Sent: {}", display_link(server_url, link))
        }
        (_, Some(error)) => println!("❌ Error: {}", error),
        _ => println!("❌ Error: unknown"),
    }
}

fn print_bulk(server_url: &str, results: &[BulkResult]) {
    for result in results {
        match (&result.link, &result.error) {
            (Some(link), _) if result.success => println!(
                "{}\t✅ {}",
                result.phone_number,
                display_link(server_url, link)
            ),
            (_, error) => println!(
                "{}\t❌ {}",
                result.phone_number,
                error.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let matches = build_command().get_matches();

    let server_url = matches
        .get_one::<String>("server-url")
        .cloned()
        .unwrap_or_default();
    let doctor_name = matches
        .get_one::<String>("doctor-name")
        .cloned()
        .unwrap_or_default();
    let as_json = matches.get_flag("json");

    let submitter = InviteSubmitter::new(build_issuer(matches.get_flag("direct"), &server_url)?);
    let mut session = InviteSession::new(doctor_name);

    if let Some(phone) = matches.get_one::<String>("phone") {
        session = session.apply(InviteEvent::PhoneNumberChanged(phone.clone()));
        if !session.can_submit() {
            return Err("a submission is already in progress".into());
        }
        session = session.apply(InviteEvent::SubmitStarted);
        let result = submitter
            .submit_single(&session.doctor_name, &session.phone_number)
            .await;
        session = session.apply(InviteEvent::SingleCompleted(result));

        if let Some(result) = &session.result {
            if as_json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                print_single(&server_url, result);
            }
        }
        return Ok(());
    }

    if let Some(path) = matches.get_one::<String>("csv") {
        let rows = read_phone_rows_from_path(path)?;
        eprintln!("✅ {} phone numbers loaded.", rows.len());

        session = session.apply(InviteEvent::RowsLoaded(rows));
        if !session.can_submit() {
            return Err("a submission is already in progress".into());
        }
        session = session.apply(InviteEvent::SubmitStarted);
        let results = submitter
            .submit_bulk(&session.doctor_name, &session.rows)
            .await;
        session = session.apply(InviteEvent::BulkCompleted(results));

        if as_json {
            println!("{}", serde_json::to_string_pretty(&session.bulk_results)?);
        } else {
            print_bulk(&server_url, &session.bulk_results);
        }

        let summary = session.bulk_summary();
        eprintln!(
            "Sent {} of {} invites ({} failed)",
            summary.succeeded, summary.total, summary.failed
        );
    }

    Ok(())
}
