mod raster;
mod session;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use statusglyph_engine::logging::{init_logging, LoggingConfig};
use statusglyph_engine::text::SegmentFont;
use statusglyph_ui::battery::{plug, BatteryStatusEvent};
use statusglyph_ui::prelude::*;

use session::ConsoleStatusBar;

/// Simulation step between ticks.
const TICK_MS: Millis = 16;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Status {
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl Status {
    fn raw(self) -> i32 {
        match self {
            Status::Unknown => 1,
            Status::Charging => 2,
            Status::Discharging => 3,
            Status::NotCharging => 4,
            Status::Full => 5,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "statusglyph-studio", version, about = "Render a battery glyph and replay a status bar tint session")]
struct Args {
    /// Battery level in percent
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(i32).range(0..=100))]
    level: i32,

    /// Charging status reported by the battery
    #[arg(long, value_enum, default_value_t = Status::Discharging)]
    status: Status,

    /// Report the battery as plugged into AC
    #[arg(long)]
    plugged: bool,

    /// Show the percentage inside the glyph
    #[arg(long)]
    percent: bool,

    /// Enable the charging pulse
    #[arg(long)]
    charge_anim: bool,

    /// Draw overlays on top instead of cutting them out
    #[arg(long)]
    no_cutout: bool,

    #[arg(long, default_value_t = 40)]
    width: u32,

    #[arg(long, default_value_t = 60)]
    height: u32,

    /// Output pixels per view pixel
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Charge-animation frames to step before capturing
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Switch the icons to the dark tint during the session
    #[arg(long)]
    dark: bool,

    /// PNG output path
    #[arg(long, default_value = "battery.png")]
    out: PathBuf,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    init_logging(LoggingConfig::default().filter(filter).timestamps(false));

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          STATUSGLYPH STUDIO v0.1       ║");
    println!("  ║   battery glyph  ·  status bar tint    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = MeterConfig::default()
        .show_percent(args.percent)
        .show_charge_animation(args.charge_anim)
        .cut_out_text(!args.no_cutout);
    let mut meter = BatteryMeter::new(config).context("invalid meter configuration")?;
    let view = Viewport::new(args.width, args.height);
    meter.set_size(view);
    meter.on_status_update(&BatteryStatusEvent {
        level: args.level,
        status: args.status.raw(),
        plug_type: if args.plugged { plug::AC } else { 0 },
        ..Default::default()
    });
    if let Some(desc) = meter.content_description() {
        info!("{desc}");
    }

    let clock = Rc::new(ManualClock::new(0));
    let mut tint = TintTransitionCoordinator::new(TintConfig::default(), clock.clone(), ConsoleStatusBar::new(meter));
    let mut visibility = VisibilityController::new(clock.clone());

    run_session(&args, &clock, &mut tint, &mut visibility);

    let meter = &mut tint.elements_mut().meter;
    let mut list = DrawList::new();
    let mut outcome = meter.render_frame(&mut list);
    for _ in 0..args.frames {
        let Some(delay) = outcome.next_frame_in else {
            break;
        };
        clock.advance(delay);
        outcome = meter.render_frame(&mut list);
    }
    info!(
        "captured frame: {} draw items, animating: {} (level {})",
        list.len(),
        meter.is_animating(),
        meter.animated_level()
    );

    let img = raster::rasterize(&mut list, view, args.scale, &SegmentFont::new());
    img.save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!("wrote {}", args.out.display());

    Ok(())
}

/// Replays a small status bar session: a themed battery cross-fade, an app
/// transition that defers the dark tint, and a system-area hide/show.
fn run_session(
    args: &Args,
    clock: &ManualClock,
    tint: &mut TintTransitionCoordinator<Rc<ManualClock>, ConsoleStatusBar>,
    visibility: &mut VisibilityController<Rc<ManualClock>>,
) {
    visibility.update_clock_style(tint.elements_mut(), ClockStyle::Default);
    visibility.update_carrier_label_visibility(tint.elements_mut(), true, true, 3);

    tint.update_battery_colors(Color(0x4D80_CBC4), Color(0xFF80_CBC4), Color::WHITE, true);
    tint.update_notification_icon_color(Color(0xFFE0_E0E0));
    settle(clock, tint, visibility);

    if args.dark {
        tint.app_transition_pending();
        tint.set_icons_dark(true, true);
        info!("dark tint deferred: {:?}", tint.deferral());
        tint.app_transition_starting(clock.now_ms() + 100, 300);
        settle(clock, tint, visibility);
    }

    visibility.hide_system_icon_area(tint.elements_mut(), true);
    settle(clock, tint, visibility);
    visibility.show_system_icon_area(tint.elements_mut(), true);
    settle(clock, tint, visibility);

    for ch in Channel::ALL {
        info!("{:<20} {}", format!("{ch:?}"), tint.tint(ch));
    }
}

fn settle(
    clock: &ManualClock,
    tint: &mut TintTransitionCoordinator<Rc<ManualClock>, ConsoleStatusBar>,
    visibility: &mut VisibilityController<Rc<ManualClock>>,
) {
    loop {
        clock.advance(TICK_MS);
        let tinting = tint.tick();
        let fading = visibility.tick(tint.elements_mut());
        if !tinting && !fading {
            break;
        }
    }
}
