// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::options::{ListFilter, RunOptions};
use crate::core::{Fetch, HttpFetcher};
use crate::error::{ExportError, Result};
use crate::file::{default_filename, export, resolve_single_out_path};
use crate::normalize::{
    ClubNormalizer, CorrectionStore, Disambiguate, NameResolver, NameSplit, RowExtractor, Unattended,
};
use crate::progress::{Pending, Progress};
use crate::scrape::{self, CompetitionStatus, Harvest};

/// Export KSIS competition results to CSV.
#[derive(Debug, Parser)]
#[command(name = "ksis_export", version, about)]
pub struct Args {
    /// List available competitions and exit
    #[arg(short, long)]
    pub list: bool,

    /// With --list: only competitions that are live
    #[arg(long)]
    pub live: bool,

    /// List competitions whose name contains this keyword
    #[arg(long, value_name = "KEYWORD")]
    pub search: Option<String>,

    /// Competition id(s) to export; several ids (repeated or comma separated) are merged
    #[arg(long = "prop-id", value_name = "ID", value_delimiter = ',')]
    pub prop_ids: Vec<String>,

    /// Output file, or a directory ending in '/'
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory holding correction files and the debug log
    #[arg(long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Leave ambiguous 3+ word names as scraped instead of asking
    #[arg(long)]
    pub non_interactive: bool,

    /// Verbose log (see <store>/debug.log)
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    fn run_options(&self) -> Result<RunOptions> {
        let mut opts = RunOptions { interactive: !self.non_interactive, debug: self.debug, ..Default::default() };
        if let Some(dir) = &self.store { opts.store_dir = dir.clone(); }
        opts.out = self.out.clone();
        for id in &self.prop_ids {
            opts.push_competition(id)?;
        }
        Ok(opts)
    }

    fn list_filter(&self) -> Option<ListFilter> {
        match (&self.search, self.live, self.list) {
            (Some(kw), _, _) => Some(ListFilter::Keyword(kw.clone())),
            (None, true, _) => Some(ListFilter::LiveOnly),
            (None, false, true) => Some(ListFilter::All),
            _ => None,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let opts = args.run_options()?;
    crate::log::init(&opts.store_dir, opts.debug)?;
    logf!("start: {args:?}");

    let fetcher = HttpFetcher::new(opts.fetch_timeout, opts.request_pause)?;

    if let Some(how) = args.list_filter() {
        print_competitions(&fetcher, &how);
        return Ok(());
    }
    if !opts.competitions.is_empty() {
        let mut rows = row_extractor(&opts);
        return export_competitions(&fetcher, &mut rows, &opts);
    }
    interactive_menu(&fetcher, opts)
}

/// Name and club normalizers wired to the on-disk correction stores.
pub fn row_extractor(opts: &RunOptions) -> RowExtractor {
    let chooser: Box<dyn Disambiguate> =
        if opts.interactive { Box::new(ConsolePrompt) } else { Box::new(Unattended) };
    RowExtractor::new(
        NameResolver::new(CorrectionStore::open(opts.athlete_store_path()), chooser),
        ClubNormalizer::new(CorrectionStore::open(opts.club_store_path())),
    )
}

/// Collect, write, summarise. A write failure is reported and returned; the
/// collected records are untouched so the caller may retry.
pub fn export_competitions(fetch: &dyn Fetch, rows: &mut RowExtractor, opts: &RunOptions) -> Result<()> {
    let progress: &mut dyn Progress = &mut ConsoleProgress;
    let harvest = scrape::collect_competitions(fetch, rows, &opts.competitions, Some(progress));
    report_competition_problems(&harvest);

    if harvest.records.is_empty() {
        println!("\nNo data was collected. No file created.");
        print_pending(&harvest);
        return Ok(());
    }

    let title = match harvest.competitions.as_slice() {
        [only] if !opts.is_merged() => Some(only.name.as_str()),
        _ => None,
    };
    let filename = default_filename(title, &chrono::Local::now());
    let user_o = opts.out.as_ref().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default();
    let path = resolve_single_out_path(&user_o, &filename)?;

    match export(&harvest.records, &harvest.schema, &path) {
        Ok(n) => {
            println!("\n✓ Successfully created {} with {n} records.", path.display());
            print_pending(&harvest);
            if harvest.tally.failed > 0 {
                println!("✗ {} session(s) could not be fetched", harvest.tally.failed);
            }
            Ok(())
        }
        Err(e) => {
            loge!("export failed: {e}");
            println!("\n✗ Could not write {} (is it open in another program?): {e}", path.display());
            Err(e)
        }
    }
}

fn print_pending(harvest: &Harvest) {
    if harvest.tally.in_progress > 0 {
        println!("ℹ {} session(s) still in progress", harvest.tally.in_progress);
    }
}

fn report_competition_problems(harvest: &Harvest) {
    for c in &harvest.competitions {
        match &c.status {
            CompetitionStatus::Collected => {}
            CompetitionStatus::Failed => println!("✗ {}: competition page could not be fetched", c.id),
            CompetitionStatus::NoSessions { looks_live, titled } => {
                println!("✗ {}: no session list found", c.id);
                if *looks_live || *titled {
                    println!("ℹ The competition sessions may still be in progress.");
                    println!("  Results will be available once the sessions are completed.");
                } else {
                    println!("  Wrong prop_id or the website structure has changed.");
                }
            }
        }
    }
    if harvest.competitions.len() > 1 && harvest.failed_competitions() > 0 {
        println!("ℹ {} of {} competition(s) yielded nothing", harvest.failed_competitions(), harvest.competitions.len());
    }
}

fn print_competitions(fetch: &dyn Fetch, how: &ListFilter) {
    println!("\nFetching competition list (Canada - Women's Artistic Gymnastics)...");
    let list = match scrape::list_competitions(fetch, how) {
        Ok(list) => list,
        Err(e) => {
            loge!("listing failed: {e}");
            println!("Failed to fetch competition list.");
            return;
        }
    };
    if list.is_empty() {
        match how {
            ListFilter::All => println!("No competitions found."),
            ListFilter::LiveOnly => println!("No live competitions found."),
            ListFilter::Keyword(kw) => println!("No competitions found matching '{kw}'."),
        }
        return;
    }
    println!("\n{:<8} Competition Name", "ID");
    println!("{}", "-".repeat(80));
    for c in &list {
        let live = if c.is_live { " [LIVE]" } else { "" };
        println!("{:<8} {}{live}", c.id, c.name);
    }
    println!("\nTotal: {} competitions", list.len());
}

fn interactive_menu(fetch: &dyn Fetch, base: RunOptions) -> Result<()> {
    let mut rows = row_extractor(&base);
    loop {
        println!("\n=== KSIS Competition Results Tool ===");
        println!("1. List all competitions");
        println!("2. List live competitions only");
        println!("3. Search competitions by keyword");
        println!("4. Export results by prop_id");
        println!("5. Exit");

        let Some(choice) = ask("\nEnter your choice (1-5): ")? else { return Ok(()) };
        match choice.as_str() {
            "1" => print_competitions(fetch, &ListFilter::All),
            "2" => print_competitions(fetch, &ListFilter::LiveOnly),
            "3" => match ask("Enter search keyword: ")? {
                Some(kw) if !kw.is_empty() => print_competitions(fetch, &ListFilter::Keyword(kw)),
                _ => println!("No keyword provided."),
            },
            "4" => {
                let Some(ids) = ask("Enter comp prop_id(s), comma separated (ex: 8819): ")? else { return Ok(()) };
                let mut opts = RunOptions { competitions: Vec::new(), ..base.clone() };
                let parsed: Result<()> = ids
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .try_for_each(|id| opts.push_competition(id));
                match parsed {
                    Err(e) => println!("⚠ {e}"),
                    Ok(()) if opts.competitions.is_empty() => println!("⚠ prop_id cannot be empty."),
                    Ok(()) => {
                        // Already reported on screen; the menu stays up.
                        if let Err(e) = export_competitions(fetch, &mut rows, &opts) {
                            logd!("menu export ended with: {e}");
                        }
                    }
                }
            }
            "5" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter 1-5."),
        }
    }
}

/// One trimmed line from stdin; `None` at end of input.
fn ask(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(s!(line.trim())))
}

/// Blocks on stdin until the operator picks a split.
pub struct ConsolePrompt;

impl Disambiguate for ConsolePrompt {
    fn choose(&mut self, raw: &str, options: &[NameSplit]) -> Result<Option<usize>> {
        println!("\n{}", "━".repeat(40));
        println!("Multiple-word name detected: {raw}");
        println!("This name is in 'Last First' format. Where does the LAST name end?");
        for (i, o) in options.iter().enumerate() {
            println!("{}. Last: {}, First: {} → {}", i + 1, o.family, o.given, o.canonical());
        }
        loop {
            let answer = ask(&format!("Enter choice (1-{}): ", options.len()))?
                .ok_or_else(|| ExportError::Prompt(s!("input closed")))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    println!("✓ Saved as: {}", options[n - 1].canonical());
                    println!("{}", "━".repeat(40));
                    return Ok(Some(n - 1));
                }
                _ => println!("Invalid choice. Please enter a number between 1 and {}.", options.len()),
            }
        }
    }
}

/// Plain progress lines on stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn session_done(&mut self, label: &str, rows: usize) {
        println!("  ✓ {label}: {rows} athletes");
    }

    fn session_pending(&mut self, label: &str, why: Pending) {
        match why {
            Pending::NoTable => println!("  ⚠ {label}: No results table found (session may be in progress)"),
            Pending::NoRows { live: true } => println!("  ⚠ {label}: Session is in progress"),
            Pending::NoRows { live: false } => println!("  ⚠ {label}: No athletes found (may be in progress)"),
        }
    }

    fn session_failed(&mut self, label: &str) {
        println!("  ✗ {label}: Could not fetch results");
    }

    fn item_failed(&mut self, id: &str, why: &str) {
        println!("✗ Competition {id}: {why}");
    }
}
