use crate::{
    args::{DemoCli, MiddlewareOpt, ReportOpt, ScenarioOpt},
    middleware::{self, Request},
    report, users,
};
use anyhow::Context;
use log::info;

pub fn run(opt: DemoCli) -> anyhow::Result<()> {
    // Init logging.
    simple_logger::init_with_level(opt.log_opt.log_level)?;

    match opt.scenario_opt {
        ScenarioOpt::Users => run_users(),
        ScenarioOpt::Middleware(middleware_opt) => run_middleware(middleware_opt),
        ScenarioOpt::Report(report_opt) => run_report(report_opt),
    }
}

/// User report walkthrough main logic.
pub fn run_users() -> anyhow::Result<()> {
    let users = users::sample_users();
    info!("Processing {} users.", users.len());

    let summaries = users::summarize_active(users);
    for summary in &summaries {
        println!("{summary:?}");
    }
    Ok(())
}

/// Middleware chain walkthrough main logic.
pub fn run_middleware(opt: MiddlewareOpt) -> anyhow::Result<()> {
    let request = Request {
        user: opt.user,
        payload: opt.payload,
    };

    let handled = middleware::handle(request).context("Running the middleware chain.")?;
    println!("{handled:?}");
    Ok(())
}

/// Report pipeline walkthrough main logic.
pub fn run_report(opt: ReportOpt) -> anyhow::Result<()> {
    println!("{}", report::build_report(opt.seed));
    Ok(())
}
