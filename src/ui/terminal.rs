//! Terminal reporter with styled output and batch progress bars

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use super::{BatchSummary, MergeReport, Reporter};
use crate::error::MergeError;

/// Reporter that writes to stdout/stderr
///
/// Success and summary lines go to stdout, failures and warnings to stderr.
/// During a batch an indicatif bar tracks progress; all lines are printed
/// with the bar suspended.
pub struct ConsoleReporter {
    verbose: bool,
    quiet: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            progress: None,
        }
    }

    fn out(&self, line: String) {
        match self.progress {
            Some(ref pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn err(&self, line: String) {
        match self.progress {
            Some(ref pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

fn batch_progress(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let template = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}");
    if let Ok(style) = template {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Topics joined for display only
pub fn format_topics(topics: &[String]) -> String {
    topics.join(", ")
}

impl Reporter for ConsoleReporter {
    fn batch_started(&mut self, total: usize) {
        self.out(format!(
            "📚 {}\n",
            Style::new()
                .bold()
                .apply_to(format!("Processing {} articles...", total))
        ));
        if !self.quiet {
            self.progress = Some(batch_progress(total));
        }
    }

    fn item_started(&mut self, slug: &str, current: usize, total: usize) {
        if let Some(ref pb) = self.progress {
            pb.set_message(format!("({}/{}) {}", current, total, slug));
        }
        if !self.quiet {
            self.out(format!(
                "\nProcessing: {}",
                Style::new().bold().yellow().apply_to(slug)
            ));
        }
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            self.out(format!("   {}", Style::new().dim().apply_to(message)));
        }
    }

    fn warning(&mut self, message: &str) {
        self.err(format!("⚠️  {}", Style::new().yellow().apply_to(message)));
    }

    fn item_merged(&mut self, report: &MergeReport) {
        if let Some(ref pb) = self.progress {
            pb.set_message(format!("merged {}", report.slug));
            pb.inc(1);
        }
        if self.quiet {
            return;
        }
        self.out(format!(
            "✅ {} {}",
            Style::new().green().bold().apply_to("Generated:"),
            report.output_path.display()
        ));
        self.out(format!(
            "   📝 Title: {}",
            report.title.as_deref().unwrap_or("(none)")
        ));
        self.out(format!("   📊 Topics: {}", format_topics(&report.topics)));
        if self.verbose && !report.ignored_fields.is_empty() {
            self.out(format!(
                "   {}",
                Style::new()
                    .dim()
                    .apply_to(format!("ignored fields: {}", report.ignored_fields.join(", ")))
            ));
        }
    }

    fn item_failed(&mut self, slug: &str, error: &MergeError) {
        if let Some(ref pb) = self.progress {
            pb.inc(1);
        }
        let prefix = Style::new().red().bold().apply_to("Error:");
        if self.verbose {
            self.err(format!("❌ {} [{}] {}", prefix, slug, error));
        } else {
            self.err(format!("❌ {} {}", prefix, error));
        }
    }

    fn batch_finished(&mut self, summary: &BatchSummary) {
        if let Some(pb) = self.progress.take() {
            if summary.failed() == 0 {
                pb.finish_and_clear();
            } else {
                pb.abandon();
            }
        }
        self.out(format!(
            "\n\n✨ {} {}/{} articles merged",
            Style::new().bold().apply_to("Done:"),
            summary.succeeded,
            summary.attempted
        ));
    }
}
