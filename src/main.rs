use clap::{Args, Parser, Subcommand};
use gymevents::config::env_loader::load_config;
use gymevents::config::model::{Config, ConfigError};
use gymevents::dashboard::selection::Selection;
use gymevents::dashboard::sort::{SortField, SortOrder};
use gymevents::dashboard::state::Dashboard;
use gymevents::dates::{MonthStep, MonthYear, DEFAULT_MONTH};
use gymevents::export::{CopyFormat, WriterClipboard};
use gymevents::sample::sample_events;
use gymevents::supabase::api::{APIError, SupabaseAPI};
use gymevents::supabase::loader::{load_events, DataLoad};
use gymevents::supabase::model::EventType;
use gymevents::tracing::setup_loki;
use gymevents::views::admin::{render_form, EventForm};
use gymevents::views::calendar::CalendarPage;
use gymevents::views::status::{render_config_error, render_data_source, render_metrics, render_months};
use gymevents::views::{calendar, cards, detail, table, ViewMode};
use std::io;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "gymevents")]
#[command(about = "Monthly gym events dashboard backed by Supabase")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, default_value = "calendar")]
    view: ViewMode,

    /// Month shown, 1-12. Without --month and --year, June 2025 is shown when it has
    /// events, otherwise the earliest month that does
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    #[arg(long)]
    year: Option<i32>,

    /// Move from the shown month (repeatable), e.g. --step next --step next
    #[arg(long = "step")]
    steps: Vec<MonthStep>,

    /// Show events from every month
    #[arg(long, conflicts_with_all = ["month", "year", "steps"])]
    all_months: bool,

    /// Only show this gym (repeatable)
    #[arg(long = "gym")]
    gyms: Vec<String>,

    /// Only show this event type (repeatable), e.g. "KNO" or "open gym"
    #[arg(long = "type")]
    event_types: Vec<EventType>,

    /// Case-insensitive match on title, date, day or gym
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value = "date")]
    sort: SortField,

    #[arg(long, default_value = "asc")]
    order: SortOrder,

    /// Select an event by id for copying (repeatable)
    #[arg(long = "select")]
    selected: Vec<u32>,

    /// Select every visible event
    #[arg(long, conflicts_with = "selected")]
    select_all: bool,

    /// Write the selected (or all visible) events to stdout in this format
    #[arg(long)]
    copy: Option<CopyFormat>,

    /// 1 for days 1-15, 2 for the rest of the month
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    calendar_page: u8,

    #[arg(long)]
    detail_gym: Option<String>,

    /// Skip the database and use the built-in sample events
    #[arg(long)]
    sample: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List months that have events
    Months,
    /// Insert a new event
    Add(AddArgs),
    /// List gyms and event types with their ids
    Catalog,
}

#[derive(Args, Debug, Clone)]
struct AddArgs {
    #[arg(long)]
    gym_id: String,
    #[arg(long)]
    event_type_id: String,
    #[arg(long)]
    title: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long, default_value = "")]
    time: String,
    #[arg(long, default_value = "")]
    price: String,
    /// Derived from the date when omitted
    #[arg(long, default_value = "")]
    day: String,
    #[arg(long, default_value = "")]
    url: String,
}

impl From<AddArgs> for EventForm {
    fn from(args: AddArgs) -> Self {
        EventForm {
            gym_id: args.gym_id,
            event_type_id: args.event_type_id,
            title: args.title,
            event_date: args.date,
            event_time: args.time,
            price: args.price,
            day_of_week: args.day,
            specific_url: args.url,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;

    let cli = Cli::parse();
    let config = load_config();

    let code = match &cli.command {
        Some(Command::Add(args)) => add_event(&config, args).await,
        Some(Command::Catalog) => show_catalog(&config).await,
        Some(Command::Months) => {
            let load = load(&cli, &config).await;
            println!("{}", data_source(&cli, &load));
            println!("{}", render_months(&Dashboard::new(load.into_events()).available_months()));
            ExitCode::SUCCESS
        }
        None => show_dashboard(&cli, &config).await,
    };

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        if let Err(err) = handle.await {
            eprintln!("Loki task failed: {}", err);
        }
    }

    code
}

async fn load(cli: &Cli, config: &Result<Config, ConfigError>) -> DataLoad {
    if cli.sample {
        info!("Using sample events");
        return DataLoad::Loaded(sample_events());
    }

    load_events(
        config
            .as_ref()
            .map(|config| &config.supabase)
            .map_err(Clone::clone),
    )
    .await
}

async fn show_dashboard(cli: &Cli, config: &Result<Config, ConfigError>) -> ExitCode {
    let load = load(cli, config).await;

    if let DataLoad::ConfigError { error, .. } = &load {
        eprintln!("{}\n", render_config_error(error));
    }
    let source = data_source(cli, &load);

    let mut dashboard = Dashboard::new(load.into_events());
    let month = (!cli.all_months).then(|| {
        let requested = (cli.month.is_some() || cli.year.is_some()).then(|| MonthYear {
            year: cli.year.unwrap_or(DEFAULT_MONTH.year),
            month: cli.month.unwrap_or(DEFAULT_MONTH.month),
        });

        cli.steps
            .iter()
            .fold(dashboard.initial_month(requested), |month, step| month.step(*step))
    });
    dashboard.month = month;
    dashboard.gyms = Selection::only(cli.gyms.iter().cloned());
    dashboard.event_types = Selection::only(cli.event_types.iter().copied());
    dashboard.set_search(&cli.search);
    dashboard.sort_field = cli.sort;
    dashboard.sort_order = cli.order;
    cli.selected
        .iter()
        .for_each(|id| dashboard.toggle_event_selection(*id));
    if cli.select_all {
        dashboard.select_all_visible();
    }

    if let Some(format) = cli.copy {
        let mut clipboard = WriterClipboard::new(io::stdout());
        return if dashboard.handle_copy(format, &mut clipboard, Instant::now()) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    println!("{}", source);
    println!("{}\n", render_metrics(&dashboard.metrics()));

    let page = CalendarPage::from_number(cli.calendar_page).unwrap_or_default();
    let view = match cli.view {
        ViewMode::Calendar => calendar::render(&dashboard, page),
        ViewMode::Cards => cards::render(&dashboard),
        ViewMode::Table => table::render(&dashboard),
        ViewMode::Detail => detail::render(&dashboard, cli.detail_gym.as_deref()),
        ViewMode::Admin => return show_catalog(config).await,
    };
    println!("{}", view);

    ExitCode::SUCCESS
}

fn data_source(cli: &Cli, load: &DataLoad) -> String {
    if cli.sample {
        format!("Sample data: {} events (--sample)", load.events().len())
    } else {
        render_data_source(load)
    }
}

fn connect(config: &Result<Config, ConfigError>) -> Option<SupabaseAPI> {
    match config {
        Ok(config) => Some(SupabaseAPI::new(&config.supabase)),
        Err(error) => {
            eprintln!("{}", render_config_error(error));
            None
        }
    }
}

async fn show_catalog(config: &Result<Config, ConfigError>) -> ExitCode {
    let Some(api) = connect(config) else {
        return ExitCode::FAILURE;
    };

    let catalog = async {
        api.test_connection().await?;
        let gyms = api.get_gyms().await?;
        let event_types = api.get_event_types().await?;
        Ok::<_, APIError>((gyms, event_types))
    };

    match catalog.await {
        Ok((gyms, event_types)) => {
            println!("{}", render_form(&gyms, &event_types));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed loading catalog: {}", err);
            eprintln!("Failed loading gyms and event types: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn add_event(config: &Result<Config, ConfigError>, args: &AddArgs) -> ExitCode {
    let new_event = match EventForm::from(args.clone()).validate() {
        Ok(new_event) => new_event,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let Some(api) = connect(config) else {
        return ExitCode::FAILURE;
    };

    match api.insert_event(&new_event).await {
        Ok(inserted) => {
            match inserted {
                Some(row) => println!("Event added: {} ({})", row.title, row.id),
                None => println!("Event added: {}", new_event.title),
            }
            println!("Reload to see it in the dashboard.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to add event: {}", err);
            eprintln!("Failed to add event: {}", err);
            ExitCode::FAILURE
        }
    }
}
