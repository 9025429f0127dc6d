use clap::Parser;
use depth_chart::utils::logger::{self, LogFormat};
use depth_chart::utils::validation::Validate;
use depth_chart::{
    CliConfig, DepthChart, DepthChartError, DepthChartService, InMemoryDepthChart, Player,
    Position, RosterConfig, Sport,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose);

    tracing::info!("Starting depth-chart CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ depth-chart failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = if e.is_validation_error() { 2 } else { 1 };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(config: &CliConfig) -> depth_chart::Result<()> {
    config.validate()?;

    let mut service = DepthChartService::new(InMemoryDepthChart::new());

    match &config.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from {}", path);
            let roster = RosterConfig::from_file(path)?;
            roster.validate()?;
            roster.apply(&mut service, config.sport)?;
            print_chart(&service, config.json)?;
        }
        None => run_demo(&mut service)?,
    }

    Ok(())
}

fn print_chart<C: DepthChart>(
    service: &DepthChartService<C>,
    json: bool,
) -> depth_chart::Result<()> {
    let snapshot = service.full_depth_chart();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", snapshot);
    }
    Ok(())
}

fn run_demo<C: DepthChart>(service: &mut DepthChartService<C>) -> depth_chart::Result<()> {
    let wr = Position::new("WR");
    let kr = Position::new("KR");

    let bob = Player::new(1, "Bob", wr.clone());
    let alice = Player::new(2, "Alice", wr.clone());
    let charlie = Player::new(3, "Charlie", wr.clone());

    service.add_player(bob.clone(), &wr, Sport::Nfl, Some(0))?;
    service.add_player(alice.clone(), &wr, Sport::Nfl, Some(0))?;
    service.add_player(charlie, &wr, Sport::Nfl, Some(2))?;
    service.add_player(bob.clone(), &kr, Sport::Nfl, None)?;

    println!("Full Depth Chart:");
    print_chart(service, false)?;

    println!("\nPlayers under Alice at WR:");
    for player in service.players_under(&alice, &wr, Sport::Nfl)? {
        println!(" - {} (ID: {})", player.name, player.player_id);
    }

    println!("\nRemoving Bob from WR...");
    service.remove_player(&bob, &wr, Sport::Nfl)?;
    println!("Updated Depth Chart after removal:");
    print_chart(service, false)?;

    println!("\nMLB Depth Chart Example:");
    let sp = Position::new("SP");
    let c = Position::new("C");
    let pete = Player::new(10, "Pitcher Pete", sp.clone());
    let carla = Player::new(11, "Catcher Carla", c.clone());
    service.add_player(pete, &sp, Sport::Mlb, Some(0))?;
    service.add_player(carla, &c, Sport::Mlb, Some(0))?;

    for (code, ids) in service.full_depth_chart().iter() {
        if code == "SP" || code == "C" {
            let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            println!("{}: [{}]", code, joined.join(", "));
        }
    }

    println!("\nAttempting to add 'WR' position to MLB (should fail):");
    let wendy = Player::new(12, "WrongSport Wendy", wr.clone());
    match service.add_player(wendy, &wr, Sport::Mlb, Some(0)) {
        Err(e @ DepthChartError::InvalidPosition { .. }) => {
            println!("Caught expected error: {}", e)
        }
        Err(e) => return Err(e),
        Ok(()) => tracing::warn!("WR was accepted for MLB"),
    }

    Ok(())
}
