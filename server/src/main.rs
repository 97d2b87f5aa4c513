mod cli;

use clap::Parser;
use env_logger::Builder;
use kallari_site_server::run;
use log::LevelFilter;

use crate::cli::Cli;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli: Cli = Cli::parse();

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("kallari_site_server", cli.log.into())
        .filter_module("actix_web", cli.log.into())
        .init();

    run(cli.bind, cli.port).await
}
