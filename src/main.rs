use anyhow::Result;

use csv2httproute::{
    batch::BatchDriver,
    cmd::Command,
    config::Config,
    logger,
    logging::Logger,
    route::RouteConfig,
};

fn main() -> Result<()> {
    let command = Command::init();

    if command.logging {
        Logger::init()?;
    }

    let config = Config::load(command.config_load_option(), command.config_overrides())?;

    logger!(info, "config {:?}", config);

    let route_config = RouteConfig::from(&config);

    let report = BatchDriver::new(&route_config, &config.output).run(&config.input)?;

    logger!(
        info,
        "done generated={} skipped={} failed={}",
        report.generated.len(),
        report.skipped.len(),
        report.failures.len()
    );

    Ok(())
}
