// File: crates/demo/src/main.rs
// Summary: CLI demo: load CSV files, apply session/CLI configuration, render SVG/PNG and probe pointer positions.

mod loader;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chart_core::{
    highlight, theme, AxisKind, AxisPatch, Chart, ChartOptions, PointerProbe, RenderOptions, SessionSnapshot,
    SourceFile,
};
use chart_render_skia::SkiaRenderer;
use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-file CSV line chart renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one chart from one or more CSV files
    Render(RenderArgs),
    /// List the columns of each CSV file
    Columns {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        inputs: Vec<PathBuf>,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// CSV files to plot
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    inputs: Vec<PathBuf>,

    /// X column applied to every file (defaults to the first column)
    #[arg(long)]
    x: Option<String>,

    /// Comma separated Y columns applied to every file (defaults to the second column)
    #[arg(long, value_delimiter = ',')]
    y: Vec<String>,

    /// Rename a column before plotting: `<file-name>:<old>=<new>` (repeatable)
    #[arg(long, action = ArgAction::Append)]
    rename: Vec<String>,

    /// Session JSON: loaded at start when present, written back after the run
    #[arg(long, value_hint = ValueHint::FilePath)]
    session: Option<PathBuf>,

    /// Output SVG path
    #[arg(long, default_value = "target/out/chart.svg", value_hint = ValueHint::FilePath)]
    svg: PathBuf,

    /// Output PNG path
    #[arg(long, value_hint = ValueHint::FilePath)]
    png: Option<PathBuf>,

    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    width: u32,

    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    height: u32,

    /// Theme preset (light, dark, solarized-light, solarized-dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, action = ArgAction::SetTrue)]
    no_legend: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    no_grid: bool,

    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    y_min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    y_max: Option<f64>,

    /// Pointer x positions (pixels) to query for tooltip content (repeatable)
    #[arg(long, action = ArgAction::Append, allow_hyphen_values = true)]
    probe: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Columns { inputs } => {
            for (i, raw) in inputs.iter().enumerate() {
                let file = load(raw, i)?;
                println!("{}: {}", file.name, file.columns.join(", "));
            }
            Ok(())
        }
    }
}

fn load(raw: &Path, index: usize) -> Result<SourceFile> {
    let (path, used_alt) = loader::resolve_path(raw)?;
    if used_alt {
        log::info!("{}: extension swapped between .csv/.cvs", path.display());
    }
    loader::load_csv(&path, &format!("file-{index}"))
}

fn run_render(args: RenderArgs) -> Result<()> {
    let snapshot = match &args.session {
        Some(p) if p.exists() => Some(load_session(p)?),
        _ => None,
    };

    let mut files = args
        .inputs
        .iter()
        .enumerate()
        .map(|(i, raw)| load(raw, i))
        .collect::<Result<Vec<_>>>()?;

    if let Some(snap) = &snapshot {
        for file in &mut files {
            apply_saved(file, snap);
        }
    }
    for arg in &args.rename {
        apply_rename(&mut files, arg)?;
    }
    if args.x.is_some() || !args.y.is_empty() {
        for file in &mut files {
            let x = args.x.clone().unwrap_or_else(|| file.selection.x_axis.clone());
            let ys = if args.y.is_empty() { file.selection.y_axes.clone() } else { args.y.clone() };
            file.set_selection(&x, &ys).with_context(|| format!("selecting columns in {}", file.name))?;
        }
    }

    let mut options = snapshot.as_ref().map(|s| s.chart_options.clone()).unwrap_or_default();
    apply_cli_options(&mut options, &args);

    let chart = Chart::from_files(&files, options);
    if chart.data.is_empty() {
        log::warn!("no plottable data; rendering an empty frame");
    }
    for s in chart.data.series() {
        println!("series {:<32} {:>8} points  {}", s.id().to_string(), s.len(), s.style().color);
    }

    let render_opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        draw_labels: true,
    };
    let (mut scene, frame) = chart.to_scene(&render_opts);

    let probe = PointerProbe::new(frame, &chart.data);
    let probe_y = frame.plot.center_y();
    let mut last_hits = Vec::new();
    for &px in &args.probe {
        let tooltip = probe.on_pointer_move(px, probe_y);
        if tooltip.is_empty() {
            println!("probe x={px}: (nothing nearby)");
        } else {
            println!("probe x={px}: {}", tooltip.lines().join(" | "));
        }
        last_hits = probe.hits(px, probe_y);
    }
    highlight(&mut scene, &frame, &last_hits, render_opts.theme.highlight_outline);

    write_file(&args.svg, scene.to_svg().as_bytes())?;
    println!("Wrote {}", args.svg.display());
    if let Some(png) = &args.png {
        SkiaRenderer::new().render_to_png(&scene, png)?;
        println!("Wrote {}", png.display());
    }

    if let Some(p) = &args.session {
        save_session(p, &SessionSnapshot::capture(&files, &chart.options))?;
    }
    Ok(())
}

/// Restore a file's saved selection and styles when the columns still match.
fn apply_saved(file: &mut SourceFile, snap: &SessionSnapshot) {
    let Some(meta) = snap.file_named(&file.name) else { return };
    if meta.columns != file.columns {
        log::warn!("{}: saved columns differ from file header; ignoring saved settings", file.name);
        return;
    }
    file.id = meta.id.clone();
    file.selection = meta.selected.clone();
    file.styles = meta.column_styles.clone();
}

/// `<file-name>:<old>=<new>`
fn apply_rename(files: &mut [SourceFile], arg: &str) -> Result<()> {
    let (file_name, rest) = arg.split_once(':').ok_or_else(|| anyhow!("bad --rename '{arg}'"))?;
    let (old, new) = rest.split_once('=').ok_or_else(|| anyhow!("bad --rename '{arg}'"))?;
    let file = files
        .iter_mut()
        .find(|f| f.name == file_name)
        .ok_or_else(|| anyhow!("--rename: no loaded file named '{file_name}'"))?;
    file.rename_column(old, new)?;
    Ok(())
}

fn apply_cli_options(options: &mut ChartOptions, args: &RenderArgs) {
    if let Some(t) = &args.title {
        options.title = t.clone();
    }
    if args.no_legend {
        options.show_legend = false;
    }
    if args.no_grid {
        options.show_grid = false;
    }
    for (which, min, max) in [(AxisKind::X, args.x_min, args.x_max), (AxisKind::Y, args.y_min, args.y_max)] {
        if min.is_none() && max.is_none() {
            continue;
        }
        let patch = AxisPatch {
            min: min.map(Some),
            max: max.map(Some),
            auto_scale: Some(false),
            ..AxisPatch::default()
        };
        options.update_axis(which, &patch);
    }
}

fn load_session(path: &Path) -> Result<SessionSnapshot> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snap = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded session {}", path.display());
    Ok(snap)
}

fn save_session(path: &Path, snap: &SessionSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snap)?;
    write_file(path, json.as_bytes())?;
    log::info!("saved session {}", path.display());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
