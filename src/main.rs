//! # pidginpack CLI
//!
//! Command-line interface for the pidginpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use pidginpack::cli::Args;
use pidginpack::core::{ParseStats, apply_filters, sort_chronologically};
use pidginpack::format::{OutputFormat, write_to_format};
use pidginpack::parser::Service;
use pidginpack::parsers::IcqParser;
use pidginpack::{Message, PidginError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Console logging to stderr; `RUST_LOG` wins over `-v` / `-q`.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(args.verbose)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), PidginError> {
    let total_start = Instant::now();
    let filter_config = args.filter_config()?;
    let format: OutputFormat = args.format.into();
    let service: Service = args.service.into();

    println!("📦 pidginpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Service: {}", service);
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    println!("📄 Format:  {}", format);
    if args.include_groups {
        println!("👥 Groups:  included");
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(ref partner) = args.partner {
        println!("👤 Partner: {}", partner);
    }
    println!();

    println!("⏳ Parsing {} archive...", service);
    let parse_start = Instant::now();
    let (messages, stats) = parse(service, args)?;
    println!(
        "   Found {} messages in {} files ({:.2}s)",
        messages.len(),
        stats.files,
        parse_start.elapsed().as_secs_f64()
    );

    let mut messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    if args.sort {
        println!("🕒 Sorting chronologically...");
        sort_chronologically(&mut messages);
    }

    println!("💾 Writing {}...", format);
    let path = write_to_format(&messages, &args.output, format)?;

    println!();
    println!("✅ Done! Output saved to {}", path.display());
    print_summary(&stats, messages.len());
    println!(
        "   Total time:  {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn parse(service: Service, args: &Args) -> Result<(Vec<Message>, ParseStats), PidginError> {
    match service {
        Service::Icq => IcqParser::with_config(args.archive_config()).parse_with_stats(&args.input),
        other => Err(PidginError::invalid_format(
            "service",
            format!("{other} archives are not supported yet"),
        )),
    }
}

fn print_summary(stats: &ParseStats, exported: usize) {
    println!();
    println!("📊 Summary:");
    println!("   Partners:    {}", stats.folders);
    println!("   Files:       {}", stats.files);
    println!("   Lines:       {}", stats.lines);
    println!(
        "   Messages:    {} ({:.1}% of lines)",
        stats.messages,
        stats.salvage_ratio()
    );
    println!("   Exported:    {}", exported);

    if stats.skipped_lines() > 0 {
        println!("⚠️  Skipped lines: {}", stats.skipped_lines());
        println!("   Malformed:       {}", stats.invalid_lines);
        println!("   Missing field:   {}", stats.missing_fields);
        println!("   Bad timestamp:   {}", stats.bad_timestamps);
    }
    if stats.failed_files() > 0 {
        println!("⚠️  Skipped files: {}", stats.failed_files());
        println!("   Unreadable:      {}", stats.unreadable_files);
        println!("   Misnamed:        {}", stats.malformed_files);
    }
    if stats.ignored_files > 0 {
        println!("   Ignored files:   {}", stats.ignored_files);
    }
}
