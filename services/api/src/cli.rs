use crate::demo::{
    run_demo, run_field_log, run_logistics, run_production, run_rules, DemoArgs, FieldLogArgs,
    LogisticsArgs, ProductionArgs, RulesArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coldflow::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Cold-Climate Heavy Oil Advisor",
    about = "Zone-based mixing parameters and site energy-loss diagnostics for heavy-oil handling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Recommend mixing speed, blend and power for an ambient temperature
    Production(ProductionArgs),
    /// Diagnose transport, start/stop and hand-off energy losses for one site record
    Logistics(LogisticsArgs),
    /// Diagnose every row of a site field log CSV
    FieldLog(FieldLogArgs),
    /// Validate and print the effective rule book
    Rules(RulesArgs),
    /// Run the end-to-end console scenario with field defaults
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON rule book to serve instead of APP_RULES_PATH / the built-in tables
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Production(args) => run_production(args),
        Command::Logistics(args) => run_logistics(args),
        Command::FieldLog(args) => run_field_log(args),
        Command::Rules(args) => run_rules(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_temperatures() {
        let cli = Cli::try_parse_from([
            "coldflow-api",
            "production",
            "--temperature",
            "-25",
            "--viscosity",
            "2500",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Production(args)) => {
                assert_eq!(args.temperature, -25.0);
                assert_eq!(args.viscosity, 2500.0);
                assert!(args.baseline_cost.is_none());
            }
            other => panic!("expected production command, got {other:?}"),
        }
    }

    #[test]
    fn logistics_preheat_defaults_to_false() {
        let cli = Cli::try_parse_from([
            "coldflow-api",
            "logistics",
            "--distance-km",
            "8",
            "--starts",
            "3",
            "--gap-minutes",
            "45",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Logistics(args)) => assert!(!args.preheated),
            other => panic!("expected logistics command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["coldflow-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
