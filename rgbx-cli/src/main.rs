//! rgb-explorer - command-line front-end for the RGB color explorer.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rgbx_core::config::DEFAULT_SPEED;
use rgbx_core::model::dropdown_labels;
use rgbx_core::{parse_channel_value, Channel, Explorer, ManualScheduler, Speed};

use output::{print_color, print_frame, Frame};

/// Explore RGB colors: parse channel values, browse presets and sweep channels.
#[derive(Parser, Debug)]
#[command(name = "rgb-explorer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse channel values typed as decimal (0-255) or hex (0x00-0xFF, 00-FF)
    Parse {
        /// Values to parse
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// List the common colors
    Presets,

    /// Show the labels of a color
    Show {
        /// Start from a preset instead of gray
        #[arg(short, long)]
        preset: Option<String>,

        /// Red channel
        #[arg(short, long, value_parser = parse_channel_value)]
        red: Option<u8>,

        /// Green channel
        #[arg(short, long, value_parser = parse_channel_value)]
        green: Option<u8>,

        /// Blue channel
        #[arg(short, long, value_parser = parse_channel_value)]
        blue: Option<u8>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick a random color
    Random {
        /// Seed for a reproducible color
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Auto-sweep channels between 0 and 255
    Sweep {
        /// Channels to sweep (r, g, b)
        #[arg(short, long, value_delimiter = ',', default_value = "r,g,b")]
        channels: Vec<Channel>,

        /// Sweep speed (1 = slow, 10 = fast)
        #[arg(short, long, default_value_t = DEFAULT_SPEED,
              value_parser = clap::value_parser!(u8).range(1..=10))]
        speed: u8,

        /// Number of frames to run
        #[arg(short, long, default_value_t = 20,
              value_parser = clap::value_parser!(u64).range(1..))]
        ticks: u64,

        /// Start from a preset instead of gray
        #[arg(short, long)]
        from: Option<String>,

        /// Don't sleep between frames
        #[arg(long)]
        no_wait: bool,

        /// Output frames as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Parse { values } => run_parse(&values),
        Command::Presets => {
            for label in dropdown_labels() {
                println!("{}", label);
            }
            Ok(())
        }
        Command::Show {
            preset,
            red,
            green,
            blue,
            json,
        } => {
            let mut explorer = Explorer::new(ManualScheduler::new());
            if let Some(name) = &preset {
                explorer
                    .select_preset(name)
                    .with_context(|| format!("Failed to select preset {}", name))?;
            }
            let entries = [
                (Channel::Red, red),
                (Channel::Green, green),
                (Channel::Blue, blue),
            ];
            for (channel, value) in entries {
                if let Some(value) = value {
                    explorer.set_channel(channel, value);
                }
            }
            print_color(&explorer.color(), explorer.selection().name(), json)
        }
        Command::Random { seed, json } => {
            let mut explorer = Explorer::new(ManualScheduler::new());
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let color = explorer.randomize(&mut rng);
            print_color(&color, explorer.selection().name(), json)
        }
        Command::Sweep {
            channels,
            speed,
            ticks,
            from,
            no_wait,
            json,
        } => {
            let speed = Speed::new(speed)?;
            run_sweep(&channels, speed, ticks, from.as_deref(), !no_wait, json)
        }
    }
}

fn run_parse(values: &[String]) -> Result<()> {
    let mut failed = 0;
    for text in values {
        match parse_channel_value(text) {
            Ok(v) => println!("{} -> {} (0x{:02X})", text, v, v),
            Err(e) => {
                warn!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} value(s) rejected", failed, values.len());
    }
    Ok(())
}

fn run_sweep(
    channels: &[Channel],
    speed: Speed,
    ticks: u64,
    from: Option<&str>,
    wait: bool,
    json: bool,
) -> Result<()> {
    let mut explorer = Explorer::new(ManualScheduler::new());
    if let Some(name) = from {
        explorer
            .select_preset(name)
            .with_context(|| format!("Failed to select preset {}", name))?;
    }
    explorer.set_speed(speed);

    info!(
        "Sweeping {} at speed {} ({} ms per frame)",
        channels
            .iter()
            .map(Channel::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        speed.get(),
        speed.period().as_millis()
    );

    // Enabling the first channel runs frame 1 immediately.
    for &channel in channels {
        explorer.set_animation(channel, true);
    }
    let mut frame = 1;
    print_frame(&Frame::new(frame, &explorer), json)?;

    while frame < ticks {
        let Some(due) = explorer.scheduler_mut().next_due() else {
            break;
        };
        if wait {
            std::thread::sleep(due.delay);
        }
        if explorer.on_timer(due.handle) {
            frame += 1;
            print_frame(&Frame::new(frame, &explorer), json)?;
        }
    }

    explorer.shutdown();
    debug!("Sweep finished after {} frame(s)", frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_show_accepts_parser_formats() {
        let args =
            Args::try_parse_from(["rgb-explorer", "show", "-r", "0xff", "-g", "7f", "-b", "12"])
                .unwrap();
        match args.command {
            Command::Show {
                red, green, blue, ..
            } => assert_eq!((red, green, blue), (Some(255), Some(127), Some(12))),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_show_rejects_out_of_range() {
        assert!(Args::try_parse_from(["rgb-explorer", "show", "--red", "256"]).is_err());
    }

    #[test]
    fn test_sweep_defaults() {
        let args = Args::try_parse_from(["rgb-explorer", "sweep"]).unwrap();
        match args.command {
            Command::Sweep {
                channels,
                speed,
                ticks,
                ..
            } => {
                assert_eq!(channels, Channel::ALL.to_vec());
                assert_eq!(speed, 3);
                assert_eq!(ticks, 20);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_sweep_channel_list_and_speed_range() {
        let args =
            Args::try_parse_from(["rgb-explorer", "sweep", "--channels", "red,b", "-s", "10"])
                .unwrap();
        match args.command {
            Command::Sweep { channels, .. } => {
                assert_eq!(channels, vec![Channel::Red, Channel::Blue])
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Args::try_parse_from(["rgb-explorer", "sweep", "-s", "11"]).is_err());
        assert!(Args::try_parse_from(["rgb-explorer", "sweep", "-c", "alpha"]).is_err());
    }

    #[test]
    fn test_run_parse_reports_failures() {
        assert!(run_parse(&["12".to_string(), "0x1f".to_string()]).is_ok());
        assert!(run_parse(&["12".to_string(), "zz".to_string()]).is_err());
    }

    #[test]
    fn test_run_sweep_without_waiting() {
        let speed = Speed::default();
        assert!(run_sweep(&[Channel::Green], speed, 5, Some("Teal"), false, true).is_ok());
        assert!(run_sweep(&[Channel::Red], speed, 1, Some("Chartreuse"), false, false).is_err());
    }
}
