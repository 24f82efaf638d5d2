//! Basic SDK usage example.
//!
//! Looks up a bill by its printed number, reads its sponsors and votes, and
//! finds a legislator by name.
//!
//! Run with: LEGISCAN_API_KEY=... cargo run --example basic_usage

use legiscan_sdk::{LegiScanClient, LegiScanError, LegiScanResult, Scope, StateCode};
use std::time::Duration;

#[tokio::main]
async fn main() -> LegiScanResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("LEGISCAN_API_KEY")
        .map_err(|_| LegiScanError::Config("Set LEGISCAN_API_KEY to run this example".into()))?;

    let client = LegiScanClient::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(30))
        .build()?;

    let ca = StateCode::parse("CA")?;

    // Current session
    match client.sessions().current(&ca).await? {
        Some(session) => println!(
            "Current session: {} ({})",
            session.session_name, session.session_id
        ),
        None => println!("No sessions found for {}", ca),
    }

    // Bill by printed number
    let Some(item) = client
        .bills()
        .find_by_number(&Scope::State(ca.clone()), "AB 858")
        .await?
    else {
        println!("AB 858 not found in the current session");
        return Ok(());
    };

    let bill = client.bills().get(item.bill_id).await?;
    println!("\n{}: {}", bill.bill_number, bill.title);
    println!("  Last action: {} ({})", item.last_action, item.last_action_date);

    for sponsor in bill.sponsors.iter().filter(|s| s.is_primary()) {
        println!("  Primary sponsor: {} ({})", sponsor.name, sponsor.party);
    }

    for vote in bill.votes.iter().take(3) {
        let roll_call = client.votes().roll_call(vote.roll_call_id).await?;
        println!(
            "  Vote {}: {} yea / {} nay ({})",
            roll_call.date,
            roll_call.yea,
            roll_call.nay,
            if roll_call.passed != 0 { "passed" } else { "failed" }
        );
    }

    // Legislator by name
    let matches = client
        .people()
        .find_legislator(&Scope::State(ca), "Smith")
        .await?;
    println!("\nLegislators named Smith: {}", matches.people.len());
    for person in &matches.people {
        println!("  {} {} ({}, {})", person.role, person.name, person.party, person.district);
    }

    Ok(())
}
