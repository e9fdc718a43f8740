use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use dfcheck::collectors::mounts::PROC_MOUNTS;
use dfcheck::config::{CheckConfig, Thresholds, GB};
use dfcheck::filter::MountFilter;
use dfcheck::models::RunOutcome;
use dfcheck::probe;
use dfcheck::report::Report;

#[derive(Parser, Debug)]
#[command(name = "dfcheck", about = "Disk usage check with size-adaptive thresholds", version)]
struct Cli {
    /// Only check the listed filesystem type(s), comma separated
    #[arg(short = 't', long = "fstype", value_name = "TYPE", value_delimiter = ',')]
    fstype: Option<Vec<String>>,

    /// Ignore filesystem type(s), comma separated (replaces the default list)
    #[arg(short = 'x', long = "ignoretype", value_name = "TYPE", value_delimiter = ',')]
    ignoretype: Option<Vec<String>>,

    /// Ignore mount point(s), comma separated, matched exactly
    #[arg(short = 'i', long = "ignoremnt", value_name = "MOUNT", value_delimiter = ',')]
    ignoremnt: Option<Vec<String>>,

    /// Warn if PERCENT or more of a filesystem is full
    #[arg(short = 'w', long = "bwarn", value_name = "PERCENT", default_value_t = 85.0)]
    bwarn: f64,

    /// Critical if PERCENT or more of a filesystem is full
    #[arg(short = 'c', long = "bcrit", value_name = "PERCENT", default_value_t = 95.0)]
    bcrit: f64,

    /// Warn if PERCENT or more of inodes are used
    #[arg(short = 'W', long = "iwarn", value_name = "PERCENT", default_value_t = 85.0)]
    iwarn: f64,

    /// Critical if PERCENT or more of inodes are used
    #[arg(short = 'K', long = "icrit", value_name = "PERCENT", default_value_t = 95.0)]
    icrit: f64,

    /// Per-mount detail: inode counts, sizes, adjusted thresholds
    #[arg(short, long)]
    verbose: bool,

    /// Exponent relaxing byte thresholds as filesystems grow (1.0 = fixed)
    #[arg(short, long, default_value_t = 1.0)]
    magic: f64,

    /// Filesystem size in MiB at which no relaxation is applied
    #[arg(short, long, default_value_t = 20.0)]
    normal: f64,

    /// Smallest filesystem size the relaxation applies to, in GB
    #[arg(short = 'l', long, value_name = "GB", default_value_t = 100.0)]
    minimum: f64,

    /// Join per-mount output with line breaks
    #[arg(short = 'b', long)]
    linebreaks: bool,

    /// Mount table to read
    #[arg(long, value_name = "PATH", default_value = PROC_MOUNTS)]
    mtab: PathBuf,

    /// Print a JSON report instead of plugin text
    #[arg(long)]
    json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Cli {
    fn to_config(&self) -> CheckConfig {
        CheckConfig {
            thresholds: Thresholds {
                bytes_warn:    self.bwarn,
                bytes_crit:    self.bcrit,
                inodes_warn:   self.iwarn,
                inodes_crit:   self.icrit,
                magic:         self.magic,
                normal:        self.normal,
                minimum_bytes: self.minimum * GB,
            },
            filter: MountFilter {
                fs_types:      self.fstype.clone(),
                ignore_types:  self
                    .ignoretype
                    .clone()
                    .unwrap_or_else(MountFilter::default_ignore_types),
                ignore_mounts: self.ignoremnt.clone().unwrap_or_default(),
            },
            mtab_path:  self.mtab.clone(),
            verbose:    self.verbose,
            linebreaks: self.linebreaks,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "dfcheck", &mut io::stdout());
        return;
    }

    let outcome = match run(&cli) {
        Ok(outcome) => outcome,
        Err(err) => {
            // Enumeration/stat failures are UNKNOWN, never OK or CRITICAL
            println!("dfcheck UNKNOWN: {err}");
            RunOutcome::Unknown
        }
    };
    process::exit(outcome.exit_code());
}

fn run(cli: &Cli) -> Result<RunOutcome> {
    let config = cli.to_config();
    let report = probe::run(&config)?;
    let outcome = RunOutcome::from(report.overall());

    if cli.json {
        print_json(&report, outcome)?;
    } else {
        println!(
            "dfcheck {}: {}",
            outcome.label(),
            report.render(config.verbose, config.linebreaks)
        );
    }
    Ok(outcome)
}

fn print_json(report: &Report, outcome: RunOutcome) -> Result<()> {
    use dfcheck::util::human::fmt_bytes;
    use serde_json::{json, Value};

    let mounts: Vec<Value> = report
        .mounts
        .iter()
        .map(|m| {
            let b = &m.bytes;
            json!({
                "mount_point": m.mount_point,
                "fstype":      m.fs_type,
                "status":      m.status(),
                "bytes": {
                    "total":        b.total,
                    "free":         b.free,
                    "used":         b.used,
                    "total_hr":     fmt_bytes(b.total as f64),
                    "used_hr":      fmt_bytes(b.used as f64),
                    "used_percent": b.used_percent,
                    "warn_percent": b.warn_percent,
                    "crit_percent": b.crit_percent,
                    "warn_size":    b.warn_size,
                    "crit_size":    b.crit_size,
                    "status":       b.status,
                },
                "inodes": m.inodes.as_ref().map(|i| json!({
                    "total":        i.total,
                    "free":         i.free,
                    "used":         i.used,
                    "used_percent": i.used_percent,
                    "status":       i.status,
                })),
            })
        })
        .collect();

    let doc = json!({
        "dfcheck_version": env!("CARGO_PKG_VERSION"),
        "timestamp":       chrono::Local::now().to_rfc3339(),
        "status":          outcome.label(),
        "mounts":          mounts,
        "critical":        report.critical,
        "warning":         report.warning,
        "ok":              report.ok,
    });

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dfcheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
