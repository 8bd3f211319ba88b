use anyhow::{Context, Result};
use std::env;
use tracing::info;

use sellsavvy::{
    init_logging, Address, AddressBook, Count, Customer, Email, Item, LogSettings, Name, Order,
    OrderDate, OrderStatus, Phone, Tag, UniqueEntityList,
};

fn main() -> Result<()> {
    let settings = LogSettings::from_env();
    init_logging(&settings);

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("scenario") => run_scenario()?,
        Some("json") => run_json()?,
        Some("list") | None => run_list()?,
        Some(other) => {
            eprintln!("❌ Unknown mode: {}", other);
            eprintln!("   Usage: sellsavvy [list|scenario|json]");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn run_list() -> Result<()> {
    let book = sample_book()?;
    let view = book.customer_list();

    println!("📒 SellSavvy - {} customers", view.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for (i, customer) in view.read().iter().enumerate() {
        println!("{}. {}", i + 1, customer);
        for order in customer.order_view().read().iter() {
            println!("     • {}", order);
        }
    }

    let warnings = book.duplicate_warnings();
    if warnings.is_empty() {
        println!("\n✓ No similar customers");
    } else {
        println!("\n⚠️  {} possible duplicate(s):", warnings.len());
        for warning in &warnings {
            println!("   {}", warning.reason());
        }
    }

    Ok(())
}

fn run_json() -> Result<()> {
    let book = sample_book()?;
    let json = serde_json::to_string_pretty(&book).context("failed to serialize address book")?;
    println!("{}", json);
    Ok(())
}

/// Walks add / replace / remove through one list and prints each outcome
fn run_scenario() -> Result<()> {
    let a = customer("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6", &["friends"])?;
    let b = customer("Bob Choo", "22222222", "bob@example.com", "Block 123, Bobby Street 3", &[])?;

    let mut list = UniqueEntityList::new();
    let view = list.as_view();

    println!("🔒 Unique entity list walk-through");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    report("add(A)", list.add(a.clone()), &view.to_string());
    println!("   contains(A) = {}", list.contains(&a));
    report("add(A)", list.add(a.clone()), &view.to_string());
    report("set(A, A)", list.set_entity(&a, a.clone()), &view.to_string());
    report("add(B)", list.add(b.clone()), &view.to_string());
    report("set(A, B)", list.set_entity(&a, b.clone()), &view.to_string());
    report("remove(A)", list.remove(&a).map(|_| ()), &view.to_string());
    report("remove(A)", list.remove(&a).map(|_| ()), &view.to_string());
    report(
        "set_all([A, A])",
        list.set_entities(vec![a.clone(), a]),
        &view.to_string(),
    );

    info!(revision = view.revision(), "scenario finished");
    Ok(())
}

fn report(step: &str, result: sellsavvy::ListResult<()>, contents: &str) {
    match result {
        Ok(()) => println!("✓ {:<16} → {}", step, contents),
        Err(e) => println!("✗ {:<16} → {} (list: {})", step, e, contents),
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

fn sample_book() -> Result<AddressBook> {
    let alice = customer("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6", &["friends"])?;
    let bernice = customer("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens", &["colleagues"])?;
    let charlotte = customer("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74", &["neighbours"])?;
    let loud_bernice = customer("BERNICE YU", "87438807", "bernice.yu@example.com", "Blk 47 Tampines Street 20", &[])?;

    let mut book = AddressBook::from_customers(vec![alice.clone(), bernice.clone(), charlotte])?;
    book.add_customer(loud_bernice)?;

    book.add_order(&alice, order("Lamp", 2, "20-11-2024")?)?;
    book.add_order(&alice, order("Abacus", 1, "02-12-2024")?)?;
    book.mark_order(&alice, &order("Lamp", 2, "20-11-2024")?, OrderStatus::Completed)?;
    book.add_order(&bernice, order("Desk Chair", 4, "15-01-2025")?)?;

    info!(customers = book.customer_list().len(), "sample address book ready");
    Ok(book)
}

fn customer(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Result<Customer> {
    let tags = tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Customer::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        tags,
    ))
}

fn order(item: &str, count: u32, date: &str) -> Result<Order> {
    Ok(Order::new(Item::new(item)?, Count::new(count)?, OrderDate::parse(date)?))
}
