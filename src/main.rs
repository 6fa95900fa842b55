//! # postpack CLI
//!
//! Command-line interface for the postpack library.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser as ClapParser;

use postpack::PostpackError;
use postpack::archive::{
    ArchiveCallback, ArchiveContents, extract_archives_with_progress, find_post_documents,
};
use postpack::cli::Args;
use postpack::core::{render_html, sort_by_timestamp, write_csv};
use postpack::loader::load_and_merge_with_progress;
use postpack::progress::{Progress, ProgressCallback};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), PostpackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("📦 postpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if !args.skip_extract {
        println!("🗜️  Archives: {}", args.zip_dir);
    }
    println!("📂 Extract:  {}", args.extract_dir);
    if !args.no_csv {
        println!("💾 CSV:      {}", args.csv);
    }
    if !args.no_html {
        println!("🌐 Website:  {}", args.output_dir);
    }
    println!();

    // Step 1: Extract (or discover already extracted documents)
    let documents = if args.skip_extract {
        println!("🔎 Looking for post documents...");
        find_post_documents(&args.extract_dir, &args.extract_config())?
    } else {
        extract(&args)?
    };

    // Step 2: Load and merge
    println!();
    println!("⏳ Processing {} JSON files...", documents.len());
    let load_start = Instant::now();
    let progress: ProgressCallback = Arc::new(|p: Progress| {
        if !p.failed {
            println!("   Processing: {}", p.current_file.display());
        }
    });
    let report = load_and_merge_with_progress(&documents, &progress);
    for (path, err) in &report.failures {
        eprintln!("⚠️  Error reading {}: {}", path.display(), err);
    }
    let stats = report.stats;
    let posts = sort_by_timestamp(report.posts);
    println!(
        "   Found {} unique posts ({:.2}s)",
        posts.len(),
        load_start.elapsed().as_secs_f64()
    );

    // Step 3: CSV
    if !args.no_csv {
        println!();
        println!("💾 Writing CSV...");
        write_csv(&posts, &args.csv)?;
        println!("   CSV saved to: {}", args.csv);
    }

    // Step 4: HTML
    let mut index_path: Option<PathBuf> = None;
    if !args.no_html {
        println!();
        println!("🌐 Generating HTML website...");
        let html = render_html(&posts, &args.extract_dir, &args.output_dir, &args.html_config())?;
        println!("   HTML saved to: {}", html.index_path.display());
        println!(
            "   Photos copied to: {}",
            Path::new(&args.output_dir).join("photos").display()
        );
        println!(
            "   {} copied, {} already present, {} missing",
            html.photos_copied, html.photos_reused, html.photos_missing
        );
        index_path = Some(html.index_path);
    }

    println!();
    println!("✅ Done!");
    if let Some(index) = index_path {
        println!("   Open {} in your browser.", index.display());
    }

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Files:      {}", stats.files);
    if stats.failed_files > 0 {
        println!("   Skipped:    {} (unreadable)", stats.failed_files);
    }
    println!("   Extracted:  {} posts", stats.extracted);
    println!(
        "   Duplicates: {} ({:.1}%)",
        stats.duplicates,
        stats.duplicate_ratio()
    );
    println!("   Final:      {} posts", stats.unique);
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Unpacks every archive, printing one line per archive.
fn extract(args: &Args) -> Result<Vec<PathBuf>, PostpackError> {
    println!("🗜️  Extracting zip files...");
    let on_archive: ArchiveCallback = Arc::new(|path: &Path, contents: &ArchiveContents| {
        println!(
            "   Extracted: {} ({} documents, {} media files)",
            path.file_name().unwrap_or_default().to_string_lossy(),
            contents.post_documents.len(),
            contents.media_files
        );
    });
    let extracted = extract_archives_with_progress(
        &args.zip_dir,
        &args.extract_dir,
        &args.extract_config(),
        &on_archive,
    )?;
    println!(
        "   {} archives, {} post documents, {} media files",
        extracted.archives,
        extracted.post_documents.len(),
        extracted.media_files
    );
    Ok(extracted.post_documents)
}
