use clap::Parser;
use colored::Colorize;
use langtons_ants::prelude::*;
use langtons_ants::render::TerminalRenderer;
use langtons_ants::world::BLACK;
use log::info;
use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    info!(
        "{} rule, {}x{} grid, {} ants, {} steps, seed {}",
        config.variant.as_str(),
        config.height,
        config.width,
        config.ant_count,
        config.max_steps,
        config.seed
    );

    let mut sim = SimulationEngine::new(config)?;
    let elapsed = match &args.animation {
        Some(path) => {
            let mut writer = FrameWriter::create(path, sim.config().record_interval)?;
            let format = writer.format();
            println!("generating animation...");
            writer.observe(&sim.snapshot())?;

            let start = Instant::now();
            sim.try_run(|snap| {
                report_progress(&args, &snap);
                writer.observe(&snap).map(|_| ())
            })?;
            let elapsed = start.elapsed();

            println!("\nsaving...");
            let frames = writer.finish(&sim.snapshot())?;
            info!("{} frames written to {} as {:?}", frames, path.display(), format);
            elapsed
        }
        None => {
            let renderer = TerminalRenderer::new(args.columns, std::io::stdout().is_terminal());
            let interval = sim.config().record_interval;

            let start = Instant::now();
            sim.run(|snap| {
                if !args.quiet && snap.step % interval == 0 {
                    print!("{}{}", CLEAR_SCREEN, renderer.render(&snap));
                }
                report_progress(&args, &snap);
            });
            let elapsed = start.elapsed();
            println!("\n{}", renderer.render(&sim.snapshot()));
            elapsed
        }
    };

    print_summary(&sim, elapsed);
    println!("done");
    Ok(())
}

/// `\r step / total` on stdout, once per tick
fn report_progress(args: &Args, snap: &Snapshot<'_>) {
    if args.quiet {
        return;
    }
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "\r{} / {}", snap.step, snap.max_steps);
    let _ = out.flush();
}

fn print_summary(sim: &SimulationEngine, elapsed: Duration) {
    let config = sim.config();
    let histogram = sim.grid().histogram();
    let painted: usize = histogram.range(BLACK + 1..).map(|(_, n)| n).sum();
    let colors = histogram.range(BLACK + 1..).count();
    println!(
        "{}\n{} {:.3} ms {} {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        elapsed.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("variant={}", config.variant.as_str()).cyan(),
        format!("ants={}", config.ant_count).cyan(),
        format!("steps={}", sim.step_count()).cyan(),
        format!("painted={}", painted).cyan(),
        format!("colors={}", colors).cyan(),
    );
}
