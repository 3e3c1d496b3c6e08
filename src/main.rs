use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::platform::{AccessibilityProvider, MarkupAccessibility, ScrollHost, ScrollMonitor, SimulatedWindow};
use folio::rendering::{render_page, snapshot, RenderedPage, ViewState};
use folio::{Content, PageConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render a static portfolio page", long_about = None)]
struct Cli {
    /// JSON content file (defaults to the builtin content)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    /// Log level spec, e.g. `info` or `folio=debug`
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the page HTML
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Render the page as seen at this scroll offset
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        scroll_y: f64,

        /// Leave out the inline back-to-top script
        #[arg(long)]
        no_script: bool,

        /// Stylesheet linked from <head>
        #[arg(long)]
        stylesheet: Option<String>,

        /// Document title override
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the page title and visible text
    Snapshot,
    /// Print every outbound link as JSON
    Links,
    /// Print the accessibility tree as JSON
    A11y,
    /// Validate content and print the page digest
    Check,
    /// Replay scroll offsets and report back-to-top visibility
    Scroll {
        #[arg(required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,

        /// Press the back-to-top control after the last offset
        #[arg(long)]
        activate: bool,
    },
}

fn load_content(path: Option<&PathBuf>) -> Result<Content> {
    match path {
        Some(p) => Content::from_path(p).with_context(|| format!("loading content from {}", p.display())),
        None => Ok(Content::builtin().clone()),
    }
}

fn render_default(content: &Content) -> Result<RenderedPage> {
    render_page(&PageConfig::default(), content, ViewState::default()).context("rendering page")
}

fn replay_scroll(offsets: &[f64], activate: bool) {
    let window = SimulatedWindow::new();
    let monitor = ScrollMonitor::mount(&window);
    for &y in offsets {
        window.set_scroll_y(y);
        println!(
            "{:>10}  {}",
            y,
            if monitor.is_past_threshold() { "visible" } else { "hidden" }
        );
    }
    if activate {
        if monitor.activate_back_to_top() {
            println!(
                "activated: offset {} ({})",
                window.scroll_y(),
                if monitor.is_past_threshold() { "visible" } else { "hidden" }
            );
        } else {
            println!("not activated: control hidden");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = flexi_logger::Logger::try_with_str(&cli.log_level)
        .with_context(|| format!("invalid log level {:?}", cli.log_level))?
        .log_to_stderr()
        .start()
        .context("starting logger")?;

    match cli.command {
        Command::Render {
            out,
            scroll_y,
            no_script,
            stylesheet,
            title,
        } => {
            let content = load_content(cli.content.as_ref())?;
            let config = PageConfig {
                title,
                stylesheet_href: stylesheet,
                embed_scroll_script: !no_script,
                ..Default::default()
            };
            let page = render_page(&config, &content, ViewState::at_offset(scroll_y)).context("rendering page")?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &page.html).with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote {} ({})", path.display(), page.digest);
                }
                None => println!("{}", page.html),
            }
        }
        Command::Snapshot => {
            let content = load_content(cli.content.as_ref())?;
            let page = render_default(&content)?;
            let snap = snapshot::text_snapshot(&page.html)?;
            println!("{}\n\n{}", snap.title, snap.text);
        }
        Command::Links => {
            let content = load_content(cli.content.as_ref())?;
            let page = render_default(&content)?;
            let links = snapshot::outbound_links(&page.html)?;
            println!("{}", serde_json::to_string_pretty(&links)?);
        }
        Command::A11y => {
            let content = load_content(cli.content.as_ref())?;
            let page = render_default(&content)?;
            let tree = MarkupAccessibility::new(page.html).export_tree()?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Command::Check => {
            let content = load_content(cli.content.as_ref())?;
            let page = render_default(&content)?;
            println!(
                "ok: {} social links, {} skills, {} projects",
                content.social_links.len(),
                content.skills.len(),
                content.projects.len()
            );
            println!("digest: {}", page.digest);
        }
        Command::Scroll { offsets, activate } => replay_scroll(&offsets, activate),
    }

    Ok(())
}
