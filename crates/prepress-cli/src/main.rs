use anyhow::{Result, bail, ensure};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use prepress_pdf::{CommandImposer, Imposer, SPACER_COPIES};
use prepress_plan::{
    DEFAULT_BATCH_CEILING, PlanError, PrintUnit, SMALL_DOCUMENT_PAGES, SignatureLayout,
    single_signature, suggest_layouts,
};

mod logger;

#[derive(Parser)]
#[command(
    name = "prepress",
    about = "Signature planning and print-job packing for booklet printing",
    version
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest signature layouts for a document or page count
    Suggest {
        /// Input PDF file
        #[arg(short, long, conflicts_with = "pages")]
        input: Option<PathBuf>,

        /// Plan for a bare page count instead of reading a PDF
        #[arg(short, long)]
        pages: Option<usize>,
    },

    /// Pad a document and cut it into signature files
    Split {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Explicit signature sizes, e.g. 32,32,32,12
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Use the Nth ranked suggestion (1-based)
        #[arg(long, default_value = "1")]
        pick: usize,

        /// Output directory for signature files
        #[arg(short, long, default_value = "signatures")]
        out_dir: PathBuf,
    },

    /// Pack imposed signature files into combined print jobs with spacers
    Combine {
        /// Imposed signature PDFs, in reading order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Spacer PDF inserted (twice) between signatures
        #[arg(short, long)]
        spacer: PathBuf,

        /// Hard page ceiling per combined job
        #[arg(long, default_value_t = DEFAULT_BATCH_CEILING)]
        ceiling: usize,

        /// Output directory for job files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Full workflow: suggest, pad, split, impose, combine
    Run {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Use the Nth ranked suggestion (1-based)
        #[arg(long, default_value = "1")]
        pick: usize,

        /// External imposition command, invoked as `CMD <input> <output>`
        #[arg(long)]
        imposer: Option<PathBuf>,

        /// Spacer PDF; when given, imposed signatures are combined into jobs
        #[arg(short, long)]
        spacer: Option<PathBuf>,

        /// Hard page ceiling per combined job
        #[arg(long, default_value_t = DEFAULT_BATCH_CEILING)]
        ceiling: usize,

        /// Output directory (defaults to `<input stem>-output`)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Suggest { input, pages } => cmd_suggest(input, pages).await,
        Commands::Split {
            input,
            sizes,
            pick,
            out_dir,
        } => cmd_split(input, sizes, pick, out_dir).await,
        Commands::Combine {
            input,
            spacer,
            ceiling,
            out_dir,
        } => cmd_combine(input, spacer, ceiling, out_dir).await,
        Commands::Run {
            input,
            pick,
            imposer,
            spacer,
            ceiling,
            out_dir,
        } => cmd_run(input, pick, imposer, spacer, ceiling, out_dir).await,
    }
}

async fn cmd_suggest(input: Option<PathBuf>, pages: Option<usize>) -> Result<()> {
    let page_count = match (input, pages) {
        (Some(path), _) => prepress_pdf::page_count(&path).await?,
        (None, Some(pages)) => pages,
        (None, None) => bail!("provide either --input or --pages"),
    };

    println!("Pages: {page_count}");
    ensure!(page_count > 0, "document has no pages");

    if page_count <= SMALL_DOCUMENT_PAGES {
        let layout = single_signature(page_count);
        println!(
            "Small document: {} ({})",
            layout,
            padding_note(&layout)
        );
        return Ok(());
    }

    let suggestions = suggest_layouts(page_count);
    if suggestions.is_empty() {
        return Err(PlanError::NoSuggestion(page_count).into());
    }

    println!("Suggested signature configurations:");
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            suggestion.label,
            padding_note(&suggestion.layout)
        );
    }
    Ok(())
}

async fn cmd_split(
    input: PathBuf,
    sizes: Option<Vec<usize>>,
    pick: usize,
    out_dir: PathBuf,
) -> Result<()> {
    let doc = prepress_pdf::load_pdf(&input).await?;
    let page_count = doc.get_pages().len();
    ensure!(page_count > 0, "document has no pages");

    let layout = choose_layout(page_count, sizes, pick)?;
    println!("Configuration: {} ({})", layout, padding_note(&layout));

    let padded = prepress_pdf::pad_document(doc, layout.padding).await?;
    let parts = prepress_pdf::split_document(padded, layout.clone()).await?;

    tokio::fs::create_dir_all(&out_dir).await?;
    for (i, part) in parts.into_iter().enumerate() {
        let path = out_dir.join(format!("sig{:02}.pdf", i + 1));
        prepress_pdf::save_pdf(part, &path).await?;
        println!("  {} ({} pages)", path.display(), layout.sizes[i]);
    }
    println!(
        "Split into {} signature(s) → {}",
        layout.sizes.len(),
        out_dir.display()
    );
    Ok(())
}

async fn cmd_combine(
    inputs: Vec<PathBuf>,
    spacer: PathBuf,
    ceiling: usize,
    out_dir: PathBuf,
) -> Result<()> {
    let spacer_doc = prepress_pdf::load_pdf(&spacer).await?;
    let spacer_cost = spacer_doc.get_pages().len() * SPACER_COPIES;

    let mut units = Vec::new();
    for path in inputs {
        let pages = prepress_pdf::page_count(&path).await?;
        units.push(PrintUnit::new(path, pages));
    }

    let batches = prepress_plan::pack(units, spacer_cost, ceiling)?;
    tokio::fs::create_dir_all(&out_dir).await?;

    println!("Creating {} combined job(s)...", batches.len());
    for (i, batch) in batches.into_iter().enumerate() {
        let mut docs = Vec::new();
        for unit in &batch.units {
            docs.push(prepress_pdf::load_pdf(&unit.id).await?);
        }
        let combined =
            prepress_pdf::combine_documents(docs, spacer_doc.clone(), SPACER_COPIES).await?;

        let path = out_dir.join(format!("job{:02}.pdf", i + 1));
        prepress_pdf::save_pdf(combined, &path).await?;
        println!(
            "  {} ({} signatures, {} pages)",
            path.display(),
            batch.units.len(),
            batch.weight
        );
    }
    Ok(())
}

async fn cmd_run(
    input: PathBuf,
    pick: usize,
    imposer: Option<PathBuf>,
    spacer: Option<PathBuf>,
    ceiling: usize,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let doc = prepress_pdf::load_pdf(&input).await?;
    let page_count = doc.get_pages().len();
    ensure!(page_count > 0, "document has no pages");
    println!("Source: {} ({} pages)", input.display(), page_count);

    let layout = choose_layout(page_count, None, pick)?;
    println!("Configuration: {} ({})", layout, padding_note(&layout));

    let out_dir = out_dir.unwrap_or_else(|| default_out_dir(&input));
    tokio::fs::create_dir_all(&out_dir).await?;

    let padded = prepress_pdf::pad_document(doc, layout.padding).await?;
    let parts = prepress_pdf::split_document(padded, layout.clone()).await?;

    let mut unit_paths = Vec::new();
    for (i, part) in parts.into_iter().enumerate() {
        let path = out_dir.join(format!("sig{:02}.pdf", i + 1));
        prepress_pdf::save_pdf(part, &path).await?;
        unit_paths.push(path);
    }
    println!("Split into {} signature(s)", unit_paths.len());

    if let Some(program) = imposer {
        let imposer = CommandImposer::new(program);
        let mut imposed = Vec::new();
        for path in &unit_paths {
            info!("imposing {}", path.display());
            imposed.push(imposer.impose(path).await?);
        }
        unit_paths = imposed;
        println!("Imposed {} signature(s)", unit_paths.len());
    }

    if let Some(spacer) = spacer {
        if unit_paths.len() > 1 {
            cmd_combine(unit_paths, spacer, ceiling, out_dir.clone()).await?;
        }
    }

    println!("Workflow complete → {}", out_dir.display());
    Ok(())
}

/// Resolve the layout to cut with: explicit sizes, the small-document
/// shortcut, or a ranked suggestion.
fn choose_layout(
    page_count: usize,
    sizes: Option<Vec<usize>>,
    pick: usize,
) -> Result<SignatureLayout> {
    if let Some(sizes) = sizes {
        return Ok(SignatureLayout::new(sizes, page_count)?);
    }

    if page_count <= SMALL_DOCUMENT_PAGES {
        return Ok(single_signature(page_count));
    }

    let suggestions = suggest_layouts(page_count);
    if suggestions.is_empty() {
        return Err(PlanError::NoSuggestion(page_count).into());
    }

    let index = pick
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("--pick is 1-based"))?;
    let suggestion = suggestions
        .into_iter()
        .nth(index)
        .ok_or_else(|| anyhow::anyhow!("--pick {pick} is out of range"))?;
    Ok(suggestion.layout)
}

fn padding_note(layout: &SignatureLayout) -> String {
    match layout.padding {
        0 => "no padding needed".to_string(),
        1 => "add 1 blank page".to_string(),
        n => format!("add {n} blank pages"),
    }
}

fn default_out_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    PathBuf::from(format!("{stem}-output"))
}
