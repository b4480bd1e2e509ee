//! Wall Blocks entry point
//!
//! Native builds run the simulation headless and print the collision log.
//! The browser build is driven from JavaScript through `wall_blocks::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use clap::Parser;

    use wall_blocks::sim::format_batch;
    use wall_blocks::{Controller, Settings, Ticker};

    #[derive(Parser, Debug)]
    #[command(version, about = "Two blocks, one wall, every collision resolved exactly")]
    struct Args {
        /// Settings JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Block 1 mass exponent (mass = 10^n)
        #[arg(long)]
        m1: Option<i32>,
        /// Block 2 mass exponent (mass = 10^n)
        #[arg(long)]
        m2: Option<i32>,
        /// Time budget per tick
        #[arg(long)]
        dt: Option<f64>,
        /// Number of ticks to run
        #[arg(short, long, default_value_t = 2000)]
        ticks: u64,
        /// Pace ticks at the configured tick rate instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// Only print the summary
        #[arg(short, long)]
        quiet: bool,
    }

    fn load_settings(args: &Args) -> Result<Settings> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(n) = args.m1 {
            settings.m1_exponent = n;
        }
        if let Some(n) = args.m2 {
            settings.m2_exponent = n;
        }
        if let Some(dt) = args.dt {
            settings.dt = dt;
        }
        Ok(settings)
    }

    fn run_flat_out(ctl: &mut Controller, ticks: u64, quiet: bool) -> Result<()> {
        for _ in 0..ticks {
            let outcome = ctl.tick()?;
            if !quiet && !outcome.events.is_empty() {
                print!("{}", format_batch(&outcome.events));
            }
        }
        Ok(())
    }

    fn run_realtime(ctl: &mut Controller, ticks: u64, quiet: bool) -> Result<()> {
        let mut ticker = Ticker::from_settings(ctl.settings());
        let frame = Duration::from_secs_f64(ticker.interval());
        let mut last = Instant::now();
        let mut printed = 0;

        while ctl.state().ticks < ticks {
            std::thread::sleep(frame);
            let now = Instant::now();
            let report = ticker.update((now - last).as_secs_f64(), ctl)?;
            last = now;

            if !quiet && report.collisions > 0 {
                // Print whatever the log gained this frame
                let lines: Vec<&str> = ctl.log().snapshot().collect();
                let fresh = report.collisions.min(lines.len());
                for line in &lines[lines.len() - fresh..] {
                    println!("{line}");
                }
                printed += fresh;
            }
        }
        log::debug!("printed {printed} log lines");
        Ok(())
    }

    pub fn main() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let settings = load_settings(&args)?;
        let mut ctl = Controller::new(settings).context("invalid settings")?;
        log::info!("Wall Blocks (native) running {} ticks", args.ticks);

        if args.realtime {
            run_realtime(&mut ctl, args.ticks, args.quiet)?;
        } else {
            run_flat_out(&mut ctl, args.ticks, args.quiet)?;
        }

        let view = ctl.view();
        println!("{}", view.hud);
        println!("block 1 ({}): {}", view.m1_label, view.block1.caption);
        println!("block 2 ({}): {}", view.m2_label, view.block2.caption);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wall_blocks::web::wasm_main, this is just to satisfy the compiler
}
