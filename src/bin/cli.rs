use investor_registry::{Investor, InvestorRegistry,
    backend::JsonStore,
    investor::Balance};

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to the world-state file to operate on
    #[clap(value_parser)]
    path: PathBuf,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Register a new investor
    Register(RecordArgs),
    /// Overwrite an existing investor record
    Update(RecordArgs),
    /// Display a single investor record
    View(IdArg),
    /// Check whether an investor record exists
    Exists(IdArg),
}

#[derive(Args, Debug)]
struct RecordArgs {
    /// Investor identifier, unique within the ledger
    #[clap(value_parser)]
    id: String,

    /// Display name
    #[clap(short = 'n', long, value_parser)]
    name: String,

    /// Contact address
    #[clap(short = 'e', long, value_parser)]
    email: String,

    /// Opening (or replacement) balance
    #[clap(short = 'b', long, value_parser)]
    balance: Balance,
}

#[derive(Args, Debug)]
struct IdArg {
    /// Investor identifier to look up
    #[clap(value_parser)]
    id: String,
}

fn print_investor(investor: &Investor) {
    let color = if investor.balance < 0.0 {
        colored::ColoredString::bright_red
    } else if investor.balance > 0.0 {
        colored::ColoredString::green
    } else {
        colored::ColoredString::normal
    };
    let fmt_balance = color(format!("{}", investor.balance).white());
    println!("{} ({} <{}>): {}",
        investor.id.bold(), investor.name, investor.email, fmt_balance);
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut store = JsonStore::open(&args.path)
        .with_context(|| "failed to open world state file")?;
    let registry = InvestorRegistry::new();

    match args.action {
        Subcommands::Register(record) => {
            registry.register_investor(
                &mut store, &record.id, &record.name, &record.email, record.balance)?;
            store.save().with_context(|| "failed to save world state file")?;
        }
        Subcommands::Update(record) => {
            registry.update_investor(
                &mut store, &record.id, &record.name, &record.email, record.balance)?;
            store.save().with_context(|| "failed to save world state file")?;
        }
        Subcommands::View(arg) => {
            let investor = registry.view_investor(&store, &arg.id)?;
            print_investor(&investor);
        }
        Subcommands::Exists(arg) => {
            println!("{}", registry.investor_exists(&store, &arg.id)?);
        }
    }

    Ok(())
}
