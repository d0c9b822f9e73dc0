//! 最坏单链路故障（WCF）分析
//!
//! 读取场景 JSON，做基线路由与利用率报告，再逐条链路模拟故障。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use wcf_sim::analysis::{AnalysisOptions, analyse};
use wcf_sim::report::{Report, render_failures, render_routing, render_utilisation};
use wcf_sim::scenario::{LoadPolicy, ScenarioSpec};

#[derive(Debug, Parser)]
#[command(
    name = "wcf-sim",
    about = "Route traffic demands over a capacitated topology and rank single-link failures"
)]
struct Args {
    /// Path to scenario.json (links + demands)
    #[arg(long)]
    scenario: PathBuf,

    /// Write the routing/utilisation/failure reports as one JSON file
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Abort on the first invalid record instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Worker threads for the failure sweep (defaults to available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Only run the baseline pass
    #[arg(long)]
    skip_wcf: bool,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let spec = ScenarioSpec::from_path(&args.scenario)?;
    let policy = if args.strict {
        LoadPolicy::Strict
    } else {
        spec.load_policy()
    };
    let loaded = spec.build(policy)?;

    let opts = AnalysisOptions {
        run_wcf: !args.skip_wcf,
        cancel: None,
    };
    let analysis = analyse(&loaded.topology, &loaded.demands, &opts)?;
    let report = Report::from(&analysis);

    for line in report.summary_lines() {
        println!("{line}");
    }
    println!();
    print!("{}", render_routing(&report.routing));
    println!();
    print!("{}", render_utilisation(&report.utilisation));
    if let Some(failures) = &report.failures {
        println!();
        print!("{}", render_failures(failures));
    }

    if let Some(path) = &args.report_json {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        tracing::info!(path = %path.display(), "报告已保存");
    }

    Ok(())
}
