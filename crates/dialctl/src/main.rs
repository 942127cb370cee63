use anyhow::Context;
use arcdial::SliderEvent;
use clap::{Parser, Subcommand};
use dialctl::command::SliderCommand;
use dialctl::config::{self, SliderConfig};
use dialctl::driver::Driver;
use dialctl::events::AppEvent;
use dialctl::sys::runtime;
use dialctl::sys::server::DEFAULT_SOCKET_PATH;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dialctl", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Apply commands from a file (or stdin) and print the resulting events
    Replay {
        /// Command file, one command per line
        file: Option<PathBuf>,
    },
    /// Run a slider behind a unix socket, printing events as they happen
    Serve {
        #[arg(short, long, default_value = DEFAULT_SOCKET_PATH)]
        socket: PathBuf,
    },
    /// Send one command to a running server
    Send {
        #[arg(short, long, default_value = DEFAULT_SOCKET_PATH)]
        socket: PathBuf,

        /// The command, e.g. `changed -1.2` or `set 150 animated`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Validate the configuration and print the arc geometry
    Check,
    /// Write the default config file if none exists
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = config::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { file } => replay(&load(&config_path)?, file.as_deref()),
        Commands::Serve { socket } => serve(&load(&config_path)?, socket, config_path),
        Commands::Send { socket, words } => send_command(&socket, &words.join(" ")),
        Commands::Check => check(&load(&config_path)?),
        Commands::Init => {
            if config::write_default_config(&config_path)? {
                println!("Wrote {}", config_path.display());
            } else {
                println!("{} already exists", config_path.display());
            }
            Ok(())
        }
    }
}

fn load(path: &Path) -> anyhow::Result<SliderConfig> {
    config::load_config(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn emit(out: &mut impl Write, events: &[SliderEvent]) -> anyhow::Result<()> {
    for event in events {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
    }
    Ok(())
}

fn replay(config: &SliderConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(fs_err::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut driver = Driver::from_config(config)?;
    let mut out = std::io::stdout().lock();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: SliderCommand = line
            .parse()
            .with_context(|| format!("line {}: '{}'", n + 1, line))?;
        emit(&mut out, &driver.apply(command))?;
    }
    Ok(())
}

fn serve(config: &SliderConfig, socket: PathBuf, config_path: PathBuf) -> anyhow::Result<()> {
    let mut driver = Driver::from_config(config)?;
    let (tx, rx) = async_channel::bounded(32);

    let services = runtime::start_background_services(tx, socket, config_path.clone());

    let mut out = std::io::stdout().lock();
    while let Ok(event) = rx.recv_blocking() {
        match event {
            AppEvent::Command(command) => emit(&mut out, &driver.apply(command))?,
            AppEvent::ConfigReload => match config::load_config(&config_path) {
                Ok(new_config) => match driver.reload(&new_config) {
                    Ok(event) => emit(&mut out, &[event])?,
                    Err(e) => log::error!("Rejected reloaded config: {}", e),
                },
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
        out.flush()?;
    }

    // every sender lives on the background thread, so a closed channel means it ended
    runtime::join_services(services)
}

fn check(config: &SliderConfig) -> anyhow::Result<()> {
    let range = config.range()?;
    let slider = config.build_slider()?;
    let report = serde_json::json!({
        "range": range,
        "start_angle": range.start_angle(),
        "end_angle": range.end_angle(),
        "angle_range": range.angle_range(),
        "knob_mid_angle": range.knob_mid_angle(),
        "value": slider.value(),
        "knob_angle": slider.knob_angle(),
        "config": config,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn send_command(socket: &Path, line: &str) -> anyhow::Result<()> {
    line.parse::<SliderCommand>()
        .with_context(|| format!("Not a valid command: '{}'", line))?;

    let mut stream = UnixStream::connect(socket).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to dialctl server at {}: {}. Is `dialctl serve` running?",
            socket.display(),
            e
        )
    })?;

    writeln!(stream, "{}", line)?;
    Ok(())
}
