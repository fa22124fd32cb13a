use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};

use aracy::config::{Config, ConfigStore};
use aracy::optimistic::Resolution;
use aracy::remote::{GeneratedAlint, StylePreset};
use aracy::ui::app::App;
use aracy::ui::footprint::FOOTPRINT_REFRESH_INTERVAL;
use aracy::ui::lab::find_language;
use aracy::ui::logs::LogFilter;
use aracy::ui::profile::{ProfileField, CHEMISTRY_CATEGORY};
use aracy::ui::streak::HeatLevel;

#[derive(Debug, Parser)]
#[command(name = "aracy", version, about = "ARACY bonding ritual client")]
struct Cli {
    /// Config file (default: ~/.config/aracy/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bond to act on
    #[arg(long, global = true)]
    bond: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the API is up
    Health,
    /// Link a bond code
    Link {
        code: String,
        #[arg(long, default_value = "me")]
        user: String,
    },
    /// Generate an alint
    Generate {
        #[arg(long, default_value = "deep", value_parser = parse_style)]
        style: StylePreset,
        #[arg(long, default_value = "en")]
        language: String,
        /// Catalyst keyword (repeatable, up to 5)
        #[arg(long = "catalyst")]
        catalysts: Vec<String>,
        #[arg(long, default_value = "")]
        vibe: String,
    },
    /// Toggle the reflected mark on a card
    Reflect { index: usize },
    /// Set the daily delivery time (HH:MM)
    DeliveryTime { time: String },
    /// Show streak, milestone and heatmap
    Streak,
    /// Show unlocked quiz badges
    Badges,
    /// Run the ritual with a profile and show the chemistry reading
    Ritual {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        chemistry: String,
        #[arg(long, default_value = "")]
        art: String,
        #[arg(long, default_value = "")]
        music: String,
        #[arg(long, default_value = "")]
        astrology: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List backend error logs
    Logs {
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: LogFilter,
    },
    /// Ignore the error log entry at a timestamp
    Ignore { timestamp: String },
    /// Show backend resource usage
    Footprint {
        /// Keep refreshing
        #[arg(long)]
        watch: bool,
    },
}

fn parse_style(value: &str) -> Result<StylePreset, String> {
    StylePreset::from_id(value).ok_or_else(|| {
        let ids: Vec<&str> = StylePreset::ALL.iter().map(|s| s.id()).collect();
        format!("expected one of {}", ids.join(", "))
    })
}

fn parse_filter(value: &str) -> Result<LogFilter, String> {
    LogFilter::from_label(value).ok_or_else(|| "expected all, active or ignored".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aracy::logging::init_tracing();

    let cli = Cli::parse();
    let store = load_store(&cli)?;
    let app = App::new(store).context("Failed to create API client")?;
    run(&app, cli.command).await
}

/// Load the config file, apply command-line overrides and validate the result.
fn load_store(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config, path);

    if let Some(url) = &cli.api_url {
        store.update(|c| c.apply_api_url_override(url.clone()));
    }
    if let Some(bond) = &cli.bond {
        store.update(|c| c.ritual.bond_id = Some(bond.clone()));
    }

    store
        .get()
        .validate()
        .context("Invalid command-line override")?;
    Ok(store)
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Health => {
            let status = app.client().health().await?;
            println!("{} is {}", app.client().base_url(), status);
        }
        Command::Link { code, user } => {
            let mut screen = app.bonding_screen();
            screen.set_code(code);
            let bond_id = screen.link(&user).await?;
            println!("Linked bond {}", bond_id);
        }
        Command::Generate {
            style,
            language,
            catalysts,
            vibe,
        } => {
            if find_language(&language).is_none() {
                bail!("Unknown language '{}'", language);
            }
            let mut lab = app.lab_screen();
            lab.select_style(style);
            lab.select_language(language);
            for catalyst in catalysts {
                lab.edit_keyword(catalyst.as_str());
                if !lab.add_keyword() {
                    tracing::warn!(catalyst = %catalyst, "Catalyst skipped");
                }
            }
            lab.edit_vibe(vibe);

            match lab.generate().await? {
                GeneratedAlint::Reflection {
                    title,
                    origin,
                    reflection,
                    interaction,
                } => {
                    println!("{} ({})\n\n{}\n\n{}", title, origin, reflection, interaction);
                }
                GeneratedAlint::Raw { raw } => println!("{}", raw),
            }
        }
        Command::Reflect { index } => {
            let screen = app.reflection_screen(Vec::new());
            screen.mount().await?;
            let handle = screen.toggle(index)?;
            let shown = screen.is_reflected(index);
            println!("Card {} marked {}", index, if shown { "reflected" } else { "unreflected" });
            report(handle.await)?;
            let progress = screen.progress();
            println!(
                "{}/{} reflected ({:.0}%)",
                progress.reflected,
                progress.total,
                progress.percent()
            );
        }
        Command::DeliveryTime { time } => {
            let mut screen = app.streak_screen();
            screen.mount().await?;
            screen.start_edit();
            screen.edit_draft(time);
            let handle = screen.save_delivery_time()?;
            println!("Delivery time set to {}", screen.delivery_time());
            report(handle.await)?;
        }
        Command::Streak => {
            let mut screen = app.streak_screen();
            screen.mount().await?;
            let milestone = screen.milestone();
            println!(
                "{} {} day streak: {}",
                milestone.icon,
                screen.streak().count,
                milestone.title
            );
            println!("Delivery at {}", screen.delivery_time());
            for row in screen.heatmap(chrono::Local::now().date_naive()) {
                let line: String = row
                    .iter()
                    .map(|cell| match cell.level {
                        HeatLevel::None => '·',
                        HeatLevel::Low => '░',
                        HeatLevel::Medium => '▒',
                        HeatLevel::High => '█',
                    })
                    .collect();
                println!("{}", line);
            }
            for alint in screen.partner_alints() {
                println!("{}: {}", alint.word, alint.meaning);
            }
        }
        Command::Badges => {
            let mut screen = app.riddle_screen();
            screen.mount().await?;
            println!("{} questions waiting", screen.state().total());
            for badge in screen.badges() {
                println!("{} {}", badge.icon, badge.name);
            }
        }
        Command::Ritual {
            name,
            chemistry,
            art,
            music,
            astrology,
            notes,
        } => {
            let mut screen = app.profile_screen();
            screen.mount().await;
            for (field, value) in [
                (ProfileField::DisplayName, name),
                (ProfileField::Chemistry, chemistry),
                (ProfileField::Art, art),
                (ProfileField::Music, music),
                (ProfileField::Astrology, astrology),
                (ProfileField::Notes, notes),
            ] {
                screen.edit(field, value);
            }
            screen.submit().await?;
            if let Some(reading) = screen.reveal(CHEMISTRY_CATEGORY) {
                println!("{}", reading.result);
            }
        }
        Command::Logs { filter } => {
            let mut screen = app.log_viewer();
            screen.set_filter(filter);
            screen.refresh().await?;
            for row in screen.visible() {
                let mark = if row.ignored { "ignored" } else { "active" };
                println!(
                    "{} [{}] {} ({})",
                    row.entry.timestamp,
                    row.entry.level(),
                    row.entry.message,
                    mark
                );
            }
            println!("{} active", screen.active_count());
        }
        Command::Ignore { timestamp } => {
            let mut screen = app.log_viewer();
            screen.refresh().await?;
            let handle = screen.ignore(&timestamp)?;
            report(handle.await)?;
        }
        Command::Footprint { watch } => {
            let mut panel = app.footprint_panel();
            let mut ticker = tokio::time::interval(FOOTPRINT_REFRESH_INTERVAL);
            loop {
                ticker.tick().await;
                if panel.refresh().await {
                    if let (Some(summary), Some(at)) = (panel.summary(), panel.updated_at()) {
                        println!("{} (updated {})", summary, at.format("%H:%M:%S"));
                    }
                } else if !watch {
                    bail!("Failed to read resource footprint");
                }
                if !watch {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn report(resolution: Resolution) -> anyhow::Result<()> {
    match resolution {
        Resolution::Committed => {
            println!("Confirmed");
            Ok(())
        }
        Resolution::Reverted { reason } => bail!("Reverted: {}", reason),
        Resolution::Superseded => Ok(()),
        Resolution::Abandoned { reason } => bail!("Confirmation abandoned: {}", reason),
    }
}
