use anyhow::{bail, Result};
use std::env;
use std::path::Path;

use berka_clean::{import_dir, open_store, run_all};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("import") => {
            let (dir, db) = two_paths(&args)?;
            run_import(dir, db)
        }
        Some("clean") => {
            let db = args
                .get(2)
                .map(String::as_str)
                .unwrap_or("berka.db");
            run_clean(Path::new(db))
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  berka-clean import <csv-dir> <db>   load raw tables from CSV exports");
            eprintln!("  berka-clean clean [<db>]            clean all eight tables (default berka.db)");
            std::process::exit(2);
        }
    }
}

fn two_paths(args: &[String]) -> Result<(&Path, &Path)> {
    match (args.get(2), args.get(3)) {
        (Some(dir), Some(db)) => Ok((Path::new(dir), Path::new(db))),
        _ => bail!("import needs a source directory and a database path"),
    }
}

fn run_import(dir: &Path, db: &Path) -> Result<()> {
    println!("📂 Importing raw tables from {}", dir.display());

    let mut conn = open_store(db)?;
    let loaded = import_dir(&mut conn, dir)?;

    for (table, rows) in &loaded {
        println!("✓ {} ({} rows)", table, rows);
    }
    println!("Done: {} tables loaded into {}", loaded.len(), db.display());

    Ok(())
}

fn run_clean(db: &Path) -> Result<()> {
    if !db.exists() {
        eprintln!("❌ Store not found: {}", db.display());
        eprintln!("   Run: berka-clean import <csv-dir> {}", db.display());
        std::process::exit(1);
    }

    println!("🧹 Cleaning all tables in {}", db.display());

    let mut conn = open_store(db)?;
    let runs = run_all(&mut conn)?;

    let mut findings = 0;
    for run in &runs {
        println!("✓ {}", run.summary());
        findings += run.pre_audit.finding_count() + run.post_audit.finding_count();
    }

    // Audits are advisory; keep the full detail next to the store
    let audit_path = db.with_extension("audit.json");
    std::fs::write(&audit_path, serde_json::to_string_pretty(&runs)?)?;

    println!(
        "Done: {} tables cleaned, {} audit findings -> {}",
        runs.len(),
        findings,
        audit_path.display()
    );

    Ok(())
}
