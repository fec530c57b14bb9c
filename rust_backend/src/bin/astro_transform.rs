//! Astronomia command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Horizontal -> equatorial, degrees in, hms out
//! astro-transform transform horizontal ecuatorial 200 30 --out hms phi_deg=40 TS_h=5
//!
//! # Batches are comma-separated; sexagesimal values are written d:m:s
//! astro-transform transform ecuatorial galactico 0,90,180 -10:30:00 --in dms --json
//!
//! astro-transform distance 10 20 30 40
//! astro-transform visibility 40 -60
//! astro-transform geodesy 40.4 650
//! astro-transform list
//! ```
//!
//! Defaults for units and observer parameters are read from `astronomia.toml`
//! when present (see `TransformConfig`); `--config PATH` selects another file.
//! Parameters given on the command line override the file key by key.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use astronomia_rust::algorithms::{angular_distance, terrestrial_radius, visibility, Visibility};
use astronomia_rust::config::TransformConfig;
use astronomia_rust::units::{from_radians, to_radians};
use astronomia_rust::{
    transform_request, AngleValue, Angles, ContextParams, System, TransformRequest, Unit,
};

/// One registered command.
struct Command {
    id: &'static str,
    label: &'static str,
    usage: &'static str,
    run: fn(&Invocation) -> Result<()>,
}

static COMMANDS: &[Command] = &[
    Command {
        id: "transform",
        label: "Transform coordinates between systems",
        usage: "transform <origin> <destination> <c1> <c2> [--in U] [--out U] [key=value...] [--json]",
        run: run_transform,
    },
    Command {
        id: "distance",
        label: "Angular distance between two points",
        usage: "distance <lon1> <lat1> <lon2> <lat2> [--in U]",
        run: run_distance,
    },
    Command {
        id: "visibility",
        label: "Rise/set visibility of an object",
        usage: "visibility <phi> <dec> [--in U]",
        run: run_visibility,
    },
    Command {
        id: "geodesy",
        label: "Geocentric radius and latitude of an observer",
        usage: "geodesy <phi_deg> <height_m>",
        run: run_geodesy,
    },
    Command {
        id: "list",
        label: "List available commands",
        usage: "list",
        run: run_list,
    },
];

/// Parsed command line shared by every command.
#[derive(Debug, Default)]
struct Invocation {
    positional: Vec<String>,
    input_unit: Option<Unit>,
    output_unit: Option<Unit>,
    params: ContextParams,
    json: bool,
    config: Option<PathBuf>,
}

impl Invocation {
    fn parse(args: &[String]) -> Result<Self> {
        let mut inv = Invocation::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--in" => inv.input_unit = Some(parse_unit_flag("--in", iter.next())?),
                "--out" => inv.output_unit = Some(parse_unit_flag("--out", iter.next())?),
                "--json" => inv.json = true,
                "--config" => {
                    let path = iter.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                    inv.config = Some(PathBuf::from(path));
                }
                _ => match arg.split_once('=') {
                    Some((key, value)) => {
                        let value: f64 = value
                            .parse()
                            .with_context(|| format!("Invalid value for '{}'", key))?;
                        inv.params.set(key, value);
                    }
                    None => inv.positional.push(arg.clone()),
                },
            }
        }
        Ok(inv)
    }

    fn positional<const N: usize>(&self, usage: &str) -> Result<[&str; N]> {
        if self.positional.len() != N {
            bail!(
                "Expected {} arguments, got {}\nUsage: astro-transform {}",
                N,
                self.positional.len(),
                usage
            );
        }
        let mut out = [""; N];
        for (slot, arg) in out.iter_mut().zip(&self.positional) {
            *slot = arg.as_str();
        }
        Ok(out)
    }

    fn load_config(&self) -> Result<TransformConfig> {
        match &self.config {
            Some(path) => Ok(TransformConfig::from_file(path)?),
            None => Ok(TransformConfig::from_default_location().unwrap_or_else(|e| {
                debug!("Using built-in defaults: {}", e);
                TransformConfig::default()
            })),
        }
    }
}

fn parse_unit_flag(flag: &str, value: Option<&String>) -> Result<Unit> {
    let value = value.ok_or_else(|| anyhow!("{} needs a unit", flag))?;
    Ok(Unit::from_str(value)?)
}

/// `"1.5"` is a single value, `"1,2,3"` a batch.
fn parse_angles(arg: &str) -> Result<Angles> {
    let parse = |s: &str| AngleValue::from_str(s).map_err(|e| anyhow!(e));
    if arg.contains(',') {
        let values = arg.split(',').map(parse).collect::<Result<Vec<_>>>()?;
        Ok(Angles::Batch(values))
    } else {
        Ok(Angles::Single(parse(arg)?))
    }
}

fn parse_angle(arg: &str, unit: Unit) -> Result<f64> {
    let value = AngleValue::from_str(arg).map_err(|e| anyhow!(e))?;
    Ok(to_radians(&value, unit)?)
}

fn format_angles(angles: &Angles) -> String {
    angles
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_transform(inv: &Invocation) -> Result<()> {
    let usage = COMMANDS[0].usage;
    let [origin, destination, c1, c2] = inv.positional::<4>(usage)?;
    let config = inv.load_config()?;

    let request = TransformRequest::new(
        parse_angles(c1)?,
        parse_angles(c2)?,
        System::from_str(origin)?,
        System::from_str(destination)?,
    )
    .with_units(
        inv.input_unit.map_or_else(|| config.input_unit(), Ok)?,
        inv.output_unit.map_or_else(|| config.output_unit(), Ok)?,
    )
    .with_context(config.context_params().merged_with(&inv.params));

    debug!("Request: {:?}", request);
    let response = transform_request(&request)?;

    if inv.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!(
            "{} ({}): {} | {}",
            response.system,
            response.unit,
            format_angles(&response.c1),
            format_angles(&response.c2)
        );
    }
    Ok(())
}

fn run_distance(inv: &Invocation) -> Result<()> {
    let [lon1, lat1, lon2, lat2] = inv.positional::<4>(COMMANDS[1].usage)?;
    let unit = match inv.input_unit {
        Some(unit) => unit,
        None => inv.load_config()?.input_unit()?,
    };

    let d = angular_distance(
        parse_angle(lon1, unit)?,
        parse_angle(lat1, unit)?,
        parse_angle(lon2, unit)?,
        parse_angle(lat2, unit)?,
    );
    println!(
        "{:.6} deg ({})",
        d.to_degrees(),
        from_radians(d, Unit::DegreeMinuteSecond)
    );
    Ok(())
}

fn run_visibility(inv: &Invocation) -> Result<()> {
    let [phi, dec] = inv.positional::<2>(COMMANDS[2].usage)?;
    let unit = match inv.input_unit {
        Some(unit) => unit,
        None => inv.load_config()?.input_unit()?,
    };

    let result = visibility(parse_angle(phi, unit)?, parse_angle(dec, unit)?);
    if inv.json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }
    match result {
        Visibility::Normal(h0) => println!(
            "{}: H0 = {} ({:.4} deg)",
            result.label(),
            from_radians(h0, Unit::HourMinuteSecond),
            h0.to_degrees()
        ),
        _ => println!("{}", result.label()),
    }
    Ok(())
}

fn run_geodesy(inv: &Invocation) -> Result<()> {
    let [phi, height] = inv.positional::<2>(COMMANDS[3].usage)?;
    let phi_deg: f64 = phi.parse().context("Invalid latitude")?;
    let height_m: f64 = height.parse().context("Invalid height")?;

    let position = terrestrial_radius(phi_deg.to_radians(), height_m);
    if inv.json {
        println!("{}", serde_json::to_string_pretty(&position)?);
    } else {
        println!("rho   = {:.6} km", position.rho_km);
        println!(
            "phi'  = {:.6} deg ({})",
            position.latitude.to_degrees(),
            from_radians(position.latitude, Unit::DegreeMinuteSecond)
        );
        println!("x     = {:.6} km", position.x_km);
        println!("z     = {:.6} km", position.z_km);
    }
    Ok(())
}

fn run_list(_inv: &Invocation) -> Result<()> {
    for command in COMMANDS {
        println!("{:<12} {}", command.id, command.label);
        println!("{:<12}   astro-transform {}", "", command.usage);
    }
    Ok(())
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((id, rest)) = args.split_first() else {
        run_list(&Invocation::default())?;
        bail!("No command given");
    };

    let command = COMMANDS
        .iter()
        .find(|c| c.id == id.as_str())
        .ok_or_else(|| anyhow!("Unknown command '{}' (try 'list')", id))?;

    let invocation = Invocation::parse(rest)?;
    debug!("Running '{}' with {:?}", command.id, invocation);
    (command.run)(&invocation)
}
