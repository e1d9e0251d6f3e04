use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser, Subcommand,
};
use log::Level;

/// Logging options.
#[derive(Args, Clone)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

/// Running a request through the middleware chain.
#[derive(Args, Clone)]
pub struct MiddlewareOpt {
    /// The requesting user. Omit to watch authentication reject the request.
    #[arg(short, long)]
    pub user: Option<String>,

    /// The request payload.
    #[arg(short, long, default_value_t = String::from("{\"key\": \"value\"}"))]
    pub payload: String,
}

/// Pushing a seed string through the report pipeline.
#[derive(Args, Clone)]
pub struct ReportOpt {
    /// The starting data.
    #[arg(index = 1, default_value_t = String::from("testingData"))]
    pub seed: String,
}

/// Which walkthrough to run.
#[derive(Subcommand, Clone)]
pub enum ScenarioOpt {
    /// Filter, sort, and summarize a sample user list with composed stages.
    Users,
    Middleware(MiddlewareOpt),
    Report(ReportOpt),
}

/// Function composition walkthroughs.
#[derive(Parser, Clone)]
#[command(version)]
pub struct DemoCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    #[command(subcommand)]
    pub scenario_opt: ScenarioOpt,
}
