// Copyright 2020-2021 bd_
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions: The above copyright
// notice and this permission notice shall be included in all copies or
// substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotgrid_wallpaper::config::{load_spec, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use dotgrid_wallpaper::*;

#[derive(Parser, Debug)]
#[command(name = "dotgrid-wallpaper", version, author = "bd_ <bdunderscore@fushizen.net>")]
struct Opts {
    /// Wallpaper spec JSON. Without one, a default spec for --mode is used.
    #[arg(short, long)]
    spec: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Year)]
    mode: Mode,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Render as of this date (YYYY-MM-DD) instead of today.
    #[arg(short, long)]
    today: Option<NaiveDate>,

    /// Directory receiving home.png / lock.png.
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = Target::Both)]
    target: Target,

    /// Also write preview.png at this scale.
    #[arg(long)]
    preview_scale: Option<f64>,

    /// Mirror logs into dotgrid-wallpaper.log in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Year,
    Month,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Home,
    Lock,
    Both,
}

impl From<Target> for WallpaperTarget {
    fn from(t: Target) -> Self {
        match t {
            Target::Home => WallpaperTarget::Home,
            Target::Lock => WallpaperTarget::Lock,
            Target::Both => WallpaperTarget::Both,
        }
    }
}

fn default_spec(mode: Mode, today: NaiveDate) -> WallpaperSpec {
    match mode {
        Mode::Year => WallpaperSpec::Year(YearSpec::default()),
        Mode::Month => WallpaperSpec::Month(MonthSpec {
            year: today.year(),
            month: today.month(),
            layout: LayoutSpec::default(),
        }),
    }
}

fn init_logging(log_dir: Option<&PathBuf>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "dotgrid-wallpaper.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            None
        }
    }
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let _guard = init_logging(opts.log_dir.as_ref());
    info!("Starting wallpaper generation");

    let today = opts.today.unwrap_or_else(|| Local::now().date_naive());
    let spec = match &opts.spec {
        Some(path) => load_spec(path)?,
        None => default_spec(opts.mode, today),
    };
    debug!(?spec);

    let bitmap = render_wallpaper(opts.width, opts.height, &spec, today)
        .with_context(|| format!("Rendering {} wallpaper", spec.mode_name()))?;

    let mut sink = PngDirectorySink::new(&opts.output);
    sink.apply(&bitmap, opts.target.into())?;

    if let Some(scale) = opts.preview_scale {
        let preview = render_preview(&spec, opts.width, opts.height, today, scale)?;
        preview.write_png(opts.output.join("preview.png"))?;
    }

    info!("Done");

    Ok(())
}
