//! pagemark CLI - render extracted document layouts to HTML

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pagemark::{
    render_document, render_sheet, Document, HtmlOutput, PageMode, RenderOptions, Sheet,
};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(version)]
#[command(about = "Render extracted document layouts to HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page-layout model (JSON) to an HTML document
    Page {
        /// Input layout model file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page rendering mode
        #[arg(long, value_enum, default_value = "absolute")]
        mode: Mode,

        /// Scale factor from page units to CSS pixels
        #[arg(long, default_value = "1.0")]
        scale: f64,

        /// Emit only the markup fragment instead of a full document
        #[arg(long)]
        fragment: bool,
    },

    /// Render a sheet-grid model (JSON) to an HTML fragment
    Sheet {
        /// Input sheet model file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the stylesheet text to a separate file
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Absolutely positioned boxes; pixel-faithful
    Absolute,
    /// Lossy text-only reflow
    Semantic,
}

impl From<Mode> for PageMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Absolute => PageMode::Absolute,
            Mode::Semantic => PageMode::Semantic,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page {
            input,
            output,
            mode,
            scale,
            fragment,
        } => cmd_page(&input, output.as_deref(), mode, scale, fragment),
        Commands::Sheet { input, output, css } => {
            cmd_sheet(&input, output.as_deref(), css.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_page(
    input: &Path,
    output: Option<&Path>,
    mode: Mode,
    scale: f64,
    fragment: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read_to_string(input)?;
    let doc: Document = serde_json::from_str(&data)?;

    let options = RenderOptions::new().with_scale(scale).with_mode(mode.into());
    let rendered = render_document(&doc, &options)?;

    report_warnings(&rendered);

    let text = if fragment {
        rendered.html
    } else {
        rendered
            .full_document
            .expect("page path always wraps the document")
    };
    write_output(output, &text)
}

fn cmd_sheet(
    input: &Path,
    output: Option<&Path>,
    css: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read_to_string(input)?;
    let sheet: Sheet = serde_json::from_str(&data)?;

    let rendered = render_sheet(&sheet)?;

    report_warnings(&rendered);

    if let Some(css_path) = css {
        fs::write(css_path, &rendered.css)?;
    }
    write_output(output, &rendered.html)
}

fn report_warnings(output: &HtmlOutput) {
    for warning in &output.warnings {
        eprintln!("{}: {}", "Warning".yellow(), warning);
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
