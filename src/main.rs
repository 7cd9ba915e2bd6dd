use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process;
use subnet_control::cli::{Cli, Command};
use subnet_control::config::ControllerConfig;
use subnet_control::controller::{AddOutcome, SubnetController};
use subnet_control::output::print_subnets;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    let config = ControllerConfig::from_env_with(cli.overrides())?;
    let controller = SubnetController::new(&config)?;

    match &cli.command {
        Command::Check { cidr } => {
            let present = controller.exists(cidr).await?;
            if present {
                println!("Subnet {cidr} is configured");
            } else {
                println!("Subnet {cidr} is not configured");
                process::exit(1);
            }
        }
        Command::Add { name, cidr } => match controller.add_subnet(name, cidr).await? {
            AddOutcome::Created => {
                println!("Subnet {cidr} {}", "added".green());
            }
            AddOutcome::AlreadyExists => {
                println!("Subnet {cidr} {}", "already exists".yellow());
            }
            AddOutcome::Rejected { status } => {
                println!(
                    "Subnet {cidr} {} (status {status})",
                    "could not be added".red()
                );
                process::exit(1);
            }
        },
        Command::List => match controller.list().await {
            Ok(subnets) => print_subnets(&subnets),
            Err(e) => {
                log::error!("Error could not get subnets: {e}");
                process::exit(1);
            }
        },
    }

    Ok(())
}
