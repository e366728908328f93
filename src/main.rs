use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use vanilla_farm_portal::{
    analysis::{growth_schedule, Calculator, InvestorDashboard, ProjectionInput},
    config::PortalConfig,
    io,
    models::{Farm, FarmStatus, Partner, PartnerKind},
    session::{short_address, upload_whitepaper, WalletSession},
    store::{Portal, SqliteStore},
    visualization::{
        format_dashboard, format_farm_detail, format_farms_table, format_partner_detail,
        format_partners_table, format_roadmap, format_tokenomics, format_whitepaper,
        print_growth_chart, print_projection, print_schedule_table,
    },
};

#[derive(Parser)]
#[command(
    name = "vanilla-farm",
    about = "Vanilla Farm Portal - token growth projections, investor dashboard and farm administration",
    version
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the value of a token position after a holding period
    Calculate {
        /// Number of tokens bought
        #[arg(short, long, default_value = "10")]
        tokens: u32,

        /// Price per token in USD (defaults to the configured price)
        #[arg(short, long)]
        price: Option<f64>,

        /// Years the tokens are held (1-16)
        #[arg(short, long, default_value = "5")]
        years: u32,

        /// Clamp out-of-range input instead of rejecting it
        #[arg(long)]
        clamp: bool,
    },

    /// Show the year-by-year growth schedule
    Schedule {
        #[arg(short, long, default_value = "10")]
        tokens: u32,

        #[arg(short, long)]
        price: Option<f64>,

        /// Also draw a bar chart
        #[arg(long)]
        chart: bool,

        /// Write the schedule to a .csv, .json or .xlsx file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a mock investor dashboard for a freshly connected wallet
    Dashboard,

    /// Manage farm records
    Farms {
        #[command(subcommand)]
        action: FarmAction,
    },

    /// Manage partner records
    Partners {
        #[command(subcommand)]
        action: PartnerAction,
    },

    /// Upload or show the project whitepaper
    Whitepaper {
        #[command(subcommand)]
        action: WhitepaperAction,
    },

    /// Simulated wallet operations
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Show the token allocation
    Tokenomics,

    /// Show the project roadmap
    Roadmap,

    /// Restore the sample farms and partners and forget the whitepaper
    Reset,
}

#[derive(Subcommand)]
enum FarmAction {
    /// List all farms
    List,
    /// Show one farm by id or id prefix
    Show { id: String },
    /// Add a farm
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        /// Area in hectares
        #[arg(long)]
        area: f64,
        #[arg(long)]
        plants: u32,
        #[arg(long)]
        tokens: u32,
        /// Token price in USD
        #[arg(long)]
        price: f64,
        /// planned, active, harvesting or closed
        #[arg(long, default_value = "planned")]
        status: FarmStatus,
        #[arg(long)]
        established: Option<u16>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of an existing farm
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        area: Option<f64>,
        #[arg(long)]
        plants: Option<u32>,
        #[arg(long)]
        tokens: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        status: Option<FarmStatus>,
        #[arg(long)]
        established: Option<u16>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a farm
    Remove { id: String },
    /// Export records to .csv (farms) or .json (farms and partners)
    Export {
        file: PathBuf,
    },
    /// Import farms from .csv or .json (partners in a .json file are only
    /// read with --replace)
    Import {
        file: PathBuf,

        /// Report every problem in a CSV file without importing anything
        #[arg(long)]
        check: bool,

        /// Replace all farms and partners with the contents of a .json snapshot
        #[arg(long, conflicts_with = "check")]
        replace: bool,
    },
}

#[derive(Subcommand)]
enum PartnerAction {
    List,
    Show { id: String },
    Add {
        #[arg(long)]
        name: String,
        /// distributor, cooperative, logistics, financial or technology
        #[arg(long)]
        kind: PartnerKind,
        #[arg(long)]
        country: String,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        kind: Option<PartnerKind>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
enum WhitepaperAction {
    /// Check and record a PDF whitepaper
    Upload { file: PathBuf },
    /// Show the recorded whitepaper
    Show,
}

#[derive(Subcommand)]
enum WalletAction {
    /// Connect a simulated wallet and print its address
    Connect,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_portal(cfg: &PortalConfig) -> Result<Portal<SqliteStore>> {
    let store = SqliteStore::open(&cfg.store_path)?;
    Ok(Portal::open(store)?)
}

fn success(message: impl std::fmt::Display) {
    println!("{} {message}", "Success:".green().bold());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = PortalConfig::load(cli.config.as_deref())?;
    init_tracing(&cfg.log_filter);

    match cli.command {
        Commands::Calculate {
            tokens,
            price,
            years,
            clamp,
        } => {
            let mut input =
                ProjectionInput::new(tokens, price.unwrap_or(cfg.default_token_price), years);
            if clamp {
                input = input.clamped();
            }
            let calculator = Calculator::new(input)?;
            print_projection(calculator.input(), calculator.result());
        }

        Commands::Schedule {
            tokens,
            price,
            chart,
            output,
        } => {
            let schedule = growth_schedule(tokens, price.unwrap_or(cfg.default_token_price))?;
            print_schedule_table(&schedule);
            if chart {
                print_growth_chart(&schedule);
            }
            if let Some(output) = output {
                let ext = extension(&output);
                match ext.as_str() {
                    "csv" => io::write_schedule_csv(&schedule, &output)?,
                    "json" => io::write_schedule_json(&schedule, &output)?,
                    "xlsx" => io::write_schedule_excel(&schedule, &output)?,
                    _ => anyhow::bail!("Unsupported output format: .{ext}. Use .csv, .json, or .xlsx"),
                }
                success(format!("Schedule written to {}", output.display()));
            }
        }

        Commands::Dashboard => {
            let portal = open_portal(&cfg)?;
            let year = chrono::Utc::now().year();
            let dashboard =
                InvestorDashboard::mock(portal.farms().list(), year, &mut rand::thread_rng());
            let summary = dashboard.summary()?;
            print!("{}", format_dashboard(&dashboard, &summary));
        }

        Commands::Farms { action } => run_farms(&cfg, action)?,
        Commands::Partners { action } => run_partners(&cfg, action)?,

        Commands::Whitepaper { action } => match action {
            WhitepaperAction::Upload { file } => {
                let rt = tokio::runtime::Runtime::new()?;
                let record = rt.block_on(upload_whitepaper(&file, &cfg.upload_policy()))?;
                let mut portal = open_portal(&cfg)?;
                portal.set_whitepaper(record.clone())?;
                success(format!(
                    "Uploaded {} ({:.1} KiB)",
                    record.file_name,
                    record.size_kib()
                ));
            }
            WhitepaperAction::Show => {
                let portal = open_portal(&cfg)?;
                print!("{}", format_whitepaper(portal.whitepaper()));
            }
        },

        Commands::Wallet { action } => match action {
            WalletAction::Connect => {
                let rt = tokio::runtime::Runtime::new()?;
                let mut session = WalletSession::new();
                println!("{}", "Waiting for wallet approval...".dimmed());
                let address = rt.block_on(session.connect(cfg.wallet_delay()));
                success(format!("Connected {}", short_address(&address)));
                println!("  Address: {address}");
            }
        },

        Commands::Tokenomics => print!("{}", format_tokenomics()),
        Commands::Roadmap => print!("{}", format_roadmap()),

        Commands::Reset => {
            let mut portal = open_portal(&cfg)?;
            portal.reset()?;
            success("Portal reset to sample data");
        }
    }

    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn run_farms(cfg: &PortalConfig, action: FarmAction) -> Result<()> {
    let mut portal = open_portal(cfg)?;

    match action {
        FarmAction::List => print!("{}", format_farms_table(portal.farms().list())),

        FarmAction::Show { id } => {
            let id = portal.farms().resolve(&id)?;
            match portal.farms().get(id) {
                Some(farm) => print!("{}", format_farm_detail(farm)),
                None => anyhow::bail!("No farm with id {id}"),
            }
        }

        FarmAction::Add {
            name,
            location,
            area,
            plants,
            tokens,
            price,
            status,
            established,
            description,
        } => {
            let farm = Farm {
                status,
                established_year: established,
                description: description.unwrap_or_default(),
                ..Farm::new(name, location, area, plants, tokens, price)
            };
            let added = portal.add_farm(farm)?;
            success(format!("Added farm '{}' ({})", added.name, added.id));
        }

        FarmAction::Update {
            id,
            name,
            location,
            area,
            plants,
            tokens,
            price,
            status,
            established,
            description,
        } => {
            let id = portal.farms().resolve(&id)?;
            let Some(current) = portal.farms().get(id) else {
                anyhow::bail!("No farm with id {id}");
            };
            let mut farm = current.clone();
            if let Some(v) = name {
                farm.name = v;
            }
            if let Some(v) = location {
                farm.location = v;
            }
            if let Some(v) = area {
                farm.area_hectares = v;
            }
            if let Some(v) = plants {
                farm.plant_count = v;
            }
            if let Some(v) = tokens {
                farm.tokens_issued = v;
            }
            if let Some(v) = price {
                farm.token_price = v;
            }
            if let Some(v) = status {
                farm.status = v;
            }
            if established.is_some() {
                farm.established_year = established;
            }
            if let Some(v) = description {
                farm.description = v;
            }
            let updated = portal.update_farm(id, farm)?;
            success(format!("Updated farm '{}'", updated.name));
        }

        FarmAction::Remove { id } => {
            let id = portal.farms().resolve(&id)?;
            let removed = portal.remove_farm(id)?;
            success(format!("Removed farm '{}'", removed.name));
        }

        FarmAction::Export { file } => {
            let (_, writer) = io::format_for_path(&file)?;
            writer.write(&portal.snapshot(), &file)?;
            success(format!("Exported records to {}", file.display()));
        }

        FarmAction::Import {
            file,
            check,
            replace,
        } => {
            if check {
                if extension(&file) != "csv" {
                    anyhow::bail!("--check works on .csv files only");
                }
                let data = std::fs::read(&file)?;
                let (farms, issues) = io::parse_farms_csv_lenient(&data)?;
                if issues.is_empty() {
                    success(format!("{} rows, no problems found", farms.len()));
                } else {
                    println!("{} rows, {} problems:", farms.len(), issues.len());
                    for issue in &issues {
                        println!("  {} {issue}", "-".yellow());
                    }
                }
                return Ok(());
            }

            let (reader, _) = io::format_for_path(&file)?;
            let snapshot = reader.read(&file)?;
            if replace {
                if extension(&file) != "json" {
                    anyhow::bail!("--replace needs a .json snapshot");
                }
                portal.restore(snapshot)?;
                success(format!(
                    "Replaced records with {} farms and {} partners",
                    portal.farms().len(),
                    portal.partners().len()
                ));
            } else {
                let skipped = snapshot.partners.len();
                let count = portal.import_farms(snapshot.farms)?;
                success(format!("Imported {count} farms"));
                if skipped > 0 {
                    println!(
                        "{} {skipped} partners in the file were not imported; use --replace to restore them",
                        "note:".yellow()
                    );
                }
            }
        }
    }

    Ok(())
}

fn run_partners(cfg: &PortalConfig, action: PartnerAction) -> Result<()> {
    let mut portal = open_portal(cfg)?;

    match action {
        PartnerAction::List => print!("{}", format_partners_table(portal.partners().list())),

        PartnerAction::Show { id } => {
            let id = portal.partners().resolve(&id)?;
            match portal.partners().get(id) {
                Some(partner) => print!("{}", format_partner_detail(partner)),
                None => anyhow::bail!("No partner with id {id}"),
            }
        }

        PartnerAction::Add {
            name,
            kind,
            country,
            website,
            email,
            description,
        } => {
            let partner = Partner {
                website,
                contact_email: email,
                description: description.unwrap_or_default(),
                ..Partner::new(name, kind, country)
            };
            let added = portal.add_partner(partner)?;
            success(format!("Added partner '{}' ({})", added.name, added.id));
        }

        PartnerAction::Update {
            id,
            name,
            kind,
            country,
            website,
            email,
            description,
        } => {
            let id = portal.partners().resolve(&id)?;
            let Some(current) = portal.partners().get(id) else {
                anyhow::bail!("No partner with id {id}");
            };
            let mut partner = current.clone();
            if let Some(v) = name {
                partner.name = v;
            }
            if let Some(v) = kind {
                partner.kind = v;
            }
            if let Some(v) = country {
                partner.country = v;
            }
            // An empty value clears the optional contact fields.
            if let Some(v) = website {
                partner.website = Some(v).filter(|s| !s.is_empty());
            }
            if let Some(v) = email {
                partner.contact_email = Some(v).filter(|s| !s.is_empty());
            }
            if let Some(v) = description {
                partner.description = v;
            }
            let updated = portal.update_partner(id, partner)?;
            success(format!("Updated partner '{}'", updated.name));
        }

        PartnerAction::Remove { id } => {
            let id = portal.partners().resolve(&id)?;
            let removed = portal.remove_partner(id)?;
            success(format!("Removed partner '{}'", removed.name));
        }
    }

    Ok(())
}
