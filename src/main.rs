// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::time::Duration;
use toast_queue::config::{self, Config};
use toast_queue::diagnostics::DiagnosticsCollector;
use toast_queue::error::{Error, Result, SurfaceError};
use toast_queue::infrastructure::{
    ScreenMetrics, ToastService, WindowBackend, WindowContent, WindowFrame, WindowManager,
    WindowStyle,
};
use toast_queue::notifications::{presets, Toast};
use tracing_subscriber::EnvFilter;

/// Prints windows to stdout instead of drawing them.
#[derive(Debug, Default)]
struct ConsoleBackend;

impl WindowBackend for ConsoleBackend {
    fn screen(&self) -> Option<ScreenMetrics> {
        Some(ScreenMetrics {
            width: 390.0,
            height: 844.0,
            safe_area_bottom: 34.0,
        })
    }

    fn keyboard_visible(&self) -> bool {
        false
    }

    fn open_window(
        &mut self,
        content: &WindowContent,
        frame: WindowFrame,
        _style: WindowStyle,
    ) -> std::result::Result<(), SurfaceError> {
        println!("[show]    {} at y={:.0}", render(content), frame.y);
        Ok(())
    }

    fn refresh(&mut self, content: &WindowContent) {
        println!("[update]  {}", render(content));
    }

    fn close_window(&mut self, animation: Option<Duration>) {
        match animation {
            Some(duration) => println!("[hide]    fading out over {}ms", duration.as_millis()),
            None => println!("[hide]"),
        }
    }
}

fn render(content: &WindowContent) -> String {
    let mut line = String::new();
    if let Some(icon) = content.status_icon {
        line.push_str(&format!("({icon}) "));
    } else if content.checkmark {
        line.push_str("(checkmark) ");
    }
    line.push_str(content.message.as_deref().unwrap_or_default());
    if let Some(button) = &content.button {
        line.push_str(&format!(" [{button}]"));
    }
    line
}

struct Args {
    config: Option<PathBuf>,
    count: usize,
    speed: f64,
}

fn parse_args() -> Result<Args> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        config: args
            .opt_value_from_str("--config")
            .map_err(|err| Error::Config(err.to_string()))?,
        count: args
            .opt_value_from_str("--count")
            .map_err(|err| Error::Config(err.to_string()))?
            .unwrap_or(3),
        speed: args
            .opt_value_from_str("--speed")
            .map_err(|err| Error::Config(err.to_string()))?
            .unwrap_or(1.0),
    };
    if parsed.speed <= 0.0 {
        return Err(Error::Config("--speed must be positive".into()));
    }
    Ok(parsed)
}

fn scaled(ms: Option<u64>, speed: f64) -> Option<u64> {
    ms.map(|ms| (ms as f64 / speed).round() as u64)
}

/// Scales a display duration without turning a timed toast into a manual one.
fn scaled_display(ms: Option<u64>, speed: f64) -> Option<u64> {
    match ms {
        Some(0) => Some(0),
        other => scaled(other, speed).map(|ms| ms.max(1)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    config = Config {
        display_duration_ms: scaled_display(config.display_duration_ms, args.speed),
        settle_delay_ms: scaled(config.settle_delay_ms, args.speed),
        ..config
    };
    let step = Duration::from_millis(scaled(Some(1_000), args.speed).unwrap_or(1_000));
    let cycle = config.display_duration().as_duration() + config.settle_delay().as_duration();

    let mut collector = DiagnosticsCollector::new(config.diagnostics_capacity());
    let surface = WindowManager::new(ConsoleBackend);
    let (toasts, service) = ToastService::spawn(surface, &config, Some(collector.handle()));

    for index in 1..=args.count {
        toasts.enqueue(Toast::message(format!("Notification {index}")))?;
    }
    if let Some(toast) = presets::tabs_closed(2, || println!("[action]  tabs restored")) {
        toasts.enqueue(toast)?;
    }

    let (download, reporter) = presets::download(|| println!("[action]  download cancelled"), || {});
    toasts.enqueue_first(download)?;
    for fraction in [0.25, 0.5, 0.75] {
        tokio::time::sleep(step).await;
        reporter.set_fraction(Some(fraction));
    }
    reporter.succeed();

    // Backlog: the download, the numbered messages and the tabs toast.
    let backlog = u32::try_from(args.count + 2).unwrap_or(u32::MAX);
    tokio::time::sleep(cycle * backlog).await;

    let (preference, reporter) = presets::preference_saved(|| println!("[action]  retrying"));
    toasts.clear_and_show(preference)?;
    tokio::time::sleep(step).await;
    reporter.fail();
    tokio::time::sleep(cycle + step).await;

    toasts.shutdown()?;
    service.await.map_err(|err| Error::Io(err.to_string()))?;

    println!("{}", collector.export_json()?);
    Ok(())
}
