use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use valheel_cli::CliContext;
use valheel_cli::commands::{self, CastSpec, KindArg, SchoolArg, SettingsUpdate, VitalArg};
use valheel_cli::logging;
use valheel_cli::readline;
use valheel_types::SkillAdvancementClass;

#[derive(Parser)]
#[command(version, about = "Drive the Valheel module against a simulated host")]
struct Args {
    /// Module directory holding Settings.json
    #[arg(long, default_value = "mods/Valheel")]
    mod_dir: PathBuf,
}

fn main() -> Result<(), String> {
    logging::init();
    let args = Args::parse();
    let mut ctx = CliContext::new(args.mod_dir).map_err(|e| e.to_string())?;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Start,
    Shutdown,
    State,
    Config,
    Save {
        #[arg(long)]
        chance: Option<f64>,
        #[arg(long)]
        timer: Option<u64>,
        #[arg(long)]
        casts: Option<u32>,
        #[arg(long)]
        min_skill: Option<SkillAdvancementClass>,
    },
    Hooks,
    Role {
        #[arg(long)]
        healer: bool,
        #[arg(long)]
        dps: bool,
    },
    Target {
        guid: Option<u32>,
        #[arg(short, long, value_enum, default_value = "creature")]
        kind: KindArg,
    },
    Tick {
        time: Option<f64>,
    },
    Cast {
        name: String,
        #[arg(short, long, value_enum, default_value = "war")]
        school: SchoolArg,
        #[arg(short, long, value_enum, default_value = "fire")]
        vital: VitalArg,
        #[arg(short, long, default_value_t = 1)]
        projectiles: u32,
        #[arg(long)]
        harmful: bool,
    },
    Sneak,
    Attack {
        #[arg(default_value_t = 0)]
        sequence: i32,
    },
    Missile {
        #[arg(default_value_t = 0)]
        sequence: i32,
    },
    Use {
        item: u32,
    },
    FindTarget,
    Damage {
        amount: f32,
    },
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "valheel".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Start) => commands::start(ctx),
        Some(Commands::Shutdown) => commands::shutdown(ctx),
        Some(Commands::State) => commands::show_state(ctx),
        Some(Commands::Config) => commands::show_settings(ctx),
        Some(Commands::Save {
            chance,
            timer,
            casts,
            min_skill,
        }) => commands::save_settings(
            ctx,
            SettingsUpdate {
                chance,
                timer_secs: timer,
                casts,
                min_skill,
            },
        ),
        Some(Commands::Hooks) => commands::list_hooks(ctx),
        Some(Commands::Role { healer, dps }) => commands::set_role(ctx, healer, dps),
        Some(Commands::Target { guid, kind }) => commands::set_target(ctx, guid, kind),
        Some(Commands::Tick { time }) => commands::tick(ctx, time),
        Some(Commands::Cast {
            name,
            school,
            vital,
            projectiles,
            harmful,
        }) => commands::cast(
            ctx,
            CastSpec {
                name,
                school,
                vital,
                projectiles,
                harmful,
            },
        ),
        Some(Commands::Sneak) => commands::sneak(ctx),
        Some(Commands::Attack { sequence }) => commands::attack(ctx, sequence),
        Some(Commands::Missile { sequence }) => commands::missile(ctx, sequence),
        Some(Commands::Use { item }) => commands::use_item(ctx, item),
        Some(Commands::FindTarget) => commands::find_target(ctx),
        Some(Commands::Damage { amount }) => commands::damage(ctx, amount),
        Some(Commands::Exit) => {
            commands::exit(ctx)?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
