use env_logger::Env;
use log::info;
use std::process::ExitCode;
use training_schedule::{ScheduleConfig, TrainingProgram, TrainingSchedule};

#[derive(Debug, Default)]
struct Options {
    json: bool,
    help: bool,
    config_path: Option<String>,
}

fn parse_args<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--json" => options.json = true,
            "-h" | "--help" => options.help = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => {
                if options.config_path.is_some() {
                    return Err(format!("unexpected extra argument '{path}'"));
                }
                options.config_path = Some(path.to_string());
            }
        }
    }
    Ok(options)
}

fn print_help() {
    println!(
        "Usage: cli [--json] [config.json]\n\n  config.json   Schedule config (name, start_date, split, cycles, training_days)\n                Missing fields use the default beginner split.\n  --json        Print the mapped calendar as JSON instead of text\n  -h, --help    Show this help"
    );
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &options.config_path {
        Some(path) => {
            info!("loading schedule config from {path}");
            ScheduleConfig::from_json_file(path)?
        }
        None => ScheduleConfig::default(),
    };

    let schedule = TrainingSchedule::from_config(&config)?;
    match schedule.end_date() {
        Some(end_date) => info!(
            "schedule '{}' runs {} to {}",
            schedule.name(),
            schedule.start_date(),
            end_date
        ),
        None => info!("schedule '{}' has no scheduled days", schedule.name()),
    }

    if options.json {
        let entries = schedule.calendar().entries();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut program = TrainingProgram::default();
    program.add_schedule(schedule);
    println!("{program}");
    for schedule in program.schedules() {
        print!("{schedule}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_help();
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
