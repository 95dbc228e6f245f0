use anyhow::Result;
use clap::{Parser, Subcommand};

// 导入库模块
use algolab::common::logging;
use algolab::config::RunnerConfig;
use algolab::runner::{self, Category, Demo};

#[derive(Parser)]
#[command(
    name = "algolab-runner",
    version,
    about = "Run the AlgoLab practice demos"
)]
struct Cli {
    /// Optional TOML config file (logging, color)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered demos
    List {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
        /// Regex matched against demo name and summary
        #[arg(long)]
        filter: Option<String>,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a single demo by name, e.g. graphs/dijkstra
    Run {
        name: String,
    },
    /// Run every demo, optionally restricted to one category
    RunAll {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the categories with their demo counts
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };

    logging::init(&config)?;
    if !config.color {
        colored::control::set_override(false);
    }

    let result = dispatch(&cli.command);
    logging::shutdown();
    result
}

fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::List {
            category,
            filter,
            json,
        } => {
            let demos = collect(category.as_deref(), filter.as_deref())?;
            if *json {
                println!("{}", runner::listing_json(&demos)?);
            } else {
                runner::print_listing(&demos);
            }
        }
        Command::Run { name } => {
            let demo = runner::find(name)?;
            let report = runner::run_demo(&demo);
            log::info!("demo {} finished in {:.2?}", report.name, report.elapsed);
        }
        Command::RunAll { category } => {
            let demos = collect(category.as_deref(), None)?;
            let reports: Vec<_> = demos.iter().map(runner::run_demo).collect();
            runner::print_summary(&reports);
        }
        Command::Categories => {
            for category in Category::ALL {
                println!(
                    "{:<12} {:>3} demos",
                    category.as_str(),
                    runner::by_category(category).len()
                );
            }
        }
    }

    Ok(())
}

/// 按分类/过滤条件收集演示列表
fn collect(category: Option<&str>, filter: Option<&str>) -> Result<Vec<Demo>> {
    use algolab::common::LabError;

    let mut demos = match category {
        Some(name) => {
            let category = Category::parse(name)
                .ok_or_else(|| LabError::UnknownCategory(name.to_string()))?;
            runner::by_category(category)
        }
        None => runner::registry(),
    };

    if let Some(pattern) = filter {
        let re = regex::Regex::new(pattern).map_err(LabError::InvalidFilter)?;
        demos.retain(|demo| re.is_match(demo.name) || re.is_match(demo.summary));
    }

    Ok(demos)
}
