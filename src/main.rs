use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use crossterm::style::{style, Stylize};
use uuid::Uuid;

use family_hub::calendar::{CalendarService, EventDraft, EventInputError, EventPresenter, Schedule};
use family_hub::choices::{Priority, Repeat, Role};
use family_hub::config::Config;
use family_hub::constants::{
    ERROR_EVENT_REJECTED, SUCCESS_CATEGORY_CREATED, SUCCESS_EVENT_CREATED, SUCCESS_EVENT_DELETED,
    SUCCESS_EVENT_UPDATED, SUCCESS_FAVORITE_ADDED, SUCCESS_FAVORITE_REMOVED, SUCCESS_MEMBER_CREATED,
    SUCCESS_PHOTO_UPLOADED, SUCCESS_TAG_CREATED, CONFIG_GENERATED, MAX_UPCOMING_DAYS,
};
use family_hub::dashboard;
use family_hub::entities::event;
use family_hub::family::{FamilyService, MemberInput};
use family_hub::forms::Upload;
use family_hub::gallery::{GalleryService, PhotoUpload};
use family_hub::icons::IconService;
use family_hub::logger::Logger;
use family_hub::repositories::{
    AccountRepository, AlbumRepository, CategoryRepository, EventFilter, EventRepository, MemberFilter,
    MemberRepository, PhotoFilter, TagRepository,
};
use family_hub::seed;
use family_hub::storage::LocalStorage;
use family_hub::utils::{color, date, text};

#[derive(Parser)]
#[command(name = "family-hub")]
#[command(about = "Keep your family's members, photos and calendar in one place")]
struct Cli {
    /// Configuration file (defaults to ./family-hub.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Account acting on the data (defaults to the first administrator)
    #[arg(long = "as", global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a configuration file with default values
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Create the administrator account and sample events
    Seed {
        #[arg(long, default_value = "admin")]
        admin: String,

        #[arg(long, default_value = "admin@example.com")]
        email: String,
    },
    /// Family members
    #[command(subcommand)]
    Members(MemberCommand),
    /// Photo gallery
    #[command(subcommand)]
    Photos(PhotoCommand),
    /// Photo albums
    #[command(subcommand)]
    Albums(AlbumCommand),
    /// Photo tags
    #[command(subcommand)]
    Tags(TagCommand),
    /// Event categories
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Shared calendar
    #[command(subcommand)]
    Events(EventCommand),
    /// Household overview
    Dashboard,
}

#[derive(Subcommand)]
enum MemberCommand {
    /// List active members
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        role: Option<Role>,
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Register a member
    Add {
        name: String,
        #[arg(short, long)]
        role: Role,
        /// Birthday as YYYY-MM-DD
        #[arg(long)]
        birthday: Option<NaiveDate>,
        /// Portrait file name
        #[arg(long, requires = "photo_size")]
        photo: Option<String>,
        /// Portrait size in bytes
        #[arg(long)]
        photo_size: Option<u64>,
        #[arg(long, default_value = "")]
        food: String,
        #[arg(long, default_value = "")]
        hobby: String,
        #[arg(long, default_value = "")]
        intro: String,
    },
    /// Show a member profile
    Show { id: Uuid },
    /// Show members in the directory again
    Activate {
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
    /// Hide members from the directory
    Deactivate {
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
}

#[derive(Subcommand)]
enum PhotoCommand {
    /// Browse public photos
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        tag: Option<Uuid>,
        #[arg(long)]
        member: Option<Uuid>,
        #[arg(long)]
        album: Option<Uuid>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        favorites: bool,
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Record an uploaded photo
    Add {
        title: String,
        /// Image file name
        #[arg(long)]
        file: String,
        /// Image size in bytes
        #[arg(long)]
        size: u64,
        /// Date taken as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        taken: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        album: Option<Uuid>,
        #[arg(long = "tag")]
        tags: Vec<Uuid>,
        #[arg(long = "member")]
        members: Vec<Uuid>,
        /// Keep the photo out of the gallery
        #[arg(long)]
        private: bool,
    },
    /// Show a photo with related photos
    Show { id: Uuid },
    /// Toggle the favorite flag
    Favorite { id: Uuid },
    /// Mark several photos as favorites
    Star {
        #[arg(required = true)]
        ids: Vec<Uuid>,
        /// Remove the favorite mark instead
        #[arg(long)]
        off: bool,
    },
    /// Show several photos in the gallery
    Publish {
        #[arg(required = true)]
        ids: Vec<Uuid>,
        /// Hide them instead
        #[arg(long)]
        private: bool,
    },
}

#[derive(Subcommand)]
enum AlbumCommand {
    /// List public albums
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create an album
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        private: bool,
    },
}

#[derive(Subcommand)]
enum TagCommand {
    /// List tags with their public photo counts
    List,
    /// Create a tag
    Add {
        name: String,
        /// Color as #rrggbb
        #[arg(long)]
        color: Option<String>,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// List categories with event counts
    List,
    /// Create a category
    Add {
        name: String,
        #[arg(long)]
        emoji: Option<String>,
        /// Color as #rrggbb
        #[arg(long)]
        color: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand)]
enum EventCommand {
    /// Calendar overview; without filters only upcoming events are listed
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<Uuid>,
        #[arg(long)]
        participant: Option<Uuid>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        upcoming: bool,
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
    /// Events in the next few days
    Upcoming {
        /// Window in days (defaults to events.upcoming_days)
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=MAX_UPCOMING_DAYS))]
        days: Option<i64>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an event with participants and related events
    Show { id: Uuid },
    /// Create an event
    Add(EventArgs),
    /// Replace every field of an event
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: EventArgs,
    },
    /// Delete an event
    Delete { id: Uuid },
    /// Turn reminders on for several events
    Remind {
        #[arg(required = true)]
        ids: Vec<Uuid>,
        /// Turn them off instead
        #[arg(long)]
        off: bool,
    },
    /// Set the priority of several events
    Prioritize {
        priority: Priority,
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
}

#[derive(Args)]
struct EventArgs {
    title: String,
    /// Start date as YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    end_date: Option<NaiveDate>,
    /// Start time as HH:MM
    #[arg(long, value_parser = date::parse_time)]
    start: Option<NaiveTime>,
    /// End time as HH:MM
    #[arg(long, value_parser = date::parse_time)]
    end: Option<NaiveTime>,
    #[arg(long)]
    all_day: bool,
    #[arg(long, default_value = "none")]
    repeat: Repeat,
    #[arg(long)]
    until: Option<NaiveDate>,
    #[arg(long)]
    category: Option<Uuid>,
    /// Participating member (repeatable; none means everyone)
    #[arg(long = "participant")]
    participants: Vec<Uuid>,
    #[arg(long, default_value = "normal")]
    priority: Priority,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    no_reminder: bool,
    /// Minutes before the start (defaults to events.default_reminder_minutes)
    #[arg(long)]
    reminder: Option<i32>,
}

impl EventArgs {
    fn into_draft(self, config: &Config) -> EventDraft {
        EventDraft {
            title: self.title,
            description: self.description,
            location: self.location,
            schedule: Schedule {
                start_date: self.date,
                end_date: self.end_date,
                start_time: self.start,
                end_time: self.end,
                is_all_day: self.all_day,
                repeat: self.repeat,
                repeat_until: self.until,
            },
            category: self.category,
            participants: self.participants,
            priority: self.priority,
            is_reminder_enabled: !self.no_reminder,
            reminder_minutes: self.reminder.unwrap_or(config.events.default_reminder_minutes),
        }
    }
}

/// Everything a command needs
struct App {
    config: Config,
    storage: LocalStorage,
    actor: Option<Uuid>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    Logger::from_config(&config.logging)?.install()?;

    if let Commands::InitConfig { path, force } = &cli.command {
        return cmd_init_config(path.clone(), *force);
    }

    let storage = LocalStorage::new(&config).await?;
    let actor = resolve_actor(&storage, cli.actor.as_deref()).await?;
    let app = App { config, storage, actor };

    match cli.command {
        Commands::InitConfig { .. } => Ok(()),
        Commands::Seed { admin, email } => cmd_seed(&app, &admin, &email).await,
        Commands::Members(command) => cmd_members(&app, command).await,
        Commands::Photos(command) => cmd_photos(&app, command).await,
        Commands::Albums(command) => cmd_albums(&app, command).await,
        Commands::Tags(command) => cmd_tags(&app, command).await,
        Commands::Categories(command) => cmd_categories(&app, command).await,
        Commands::Events(command) => cmd_events(&app, command).await,
        Commands::Dashboard => cmd_dashboard(&app).await,
    }
}

async fn resolve_actor(storage: &LocalStorage, username: Option<&str>) -> Result<Option<Uuid>> {
    match username {
        Some(name) => {
            let account = AccountRepository::get_by_username(&storage.conn, name)
                .await?
                .with_context(|| format!("Unknown account '{}'", name))?;
            Ok(Some(account.uuid))
        }
        None => Ok(AccountRepository::first_admin(&storage.conn).await?.map(|a| a.uuid)),
    }
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists, use --force to overwrite", path.display());
    }
    Config::generate_default_config(&path)?;
    println!("{}: {}", CONFIG_GENERATED, path.display());
    Ok(())
}

async fn cmd_seed(app: &App, admin: &str, email: &str) -> Result<()> {
    let account = seed::ensure_admin(&app.storage.conn, admin, email).await?;
    let report = seed::create_sample_events(&app.storage.conn, date::today()).await?;

    println!("Administrator: {}", account.username);
    println!(
        "📅 Categories: {} created, {} already present",
        report.categories_created, report.categories_existing
    );
    println!(
        "🎉 Events: {} created, {} already present",
        report.events_created, report.events_existing
    );
    Ok(())
}

async fn cmd_members(app: &App, command: MemberCommand) -> Result<()> {
    let family = FamilyService::new(&app.storage, &app.config);
    let icons = IconService::new(app.config.display.icon_theme);

    match command {
        MemberCommand::List { search, role, page } => {
            let page = family.directory(&MemberFilter { search, role }, page).await?;
            for member in &page.items {
                println!("{} {:<20} {:<12} {}", icons.role(member.role()), member.name, member.role, member.uuid);
            }
            println!("Page {}/{} ({} members)", page.number, page.num_pages, page.total);
        }
        MemberCommand::Add {
            name,
            role,
            birthday,
            photo,
            photo_size,
            food,
            hobby,
            intro,
        } => {
            let input = MemberInput {
                birthday,
                photo: photo.map(|file| Upload::new(file, photo_size.unwrap_or_default())),
                favorite_food: food,
                hobby,
                introduction: intro,
                ..MemberInput::new(name, role)
            };
            let member = family.register(&input).await?;
            println!("{}: {} ({})", SUCCESS_MEMBER_CREATED, member.display_name(), member.uuid);
        }
        MemberCommand::Show { id } => {
            let profile = family.profile(&id, date::today()).await?;
            let member = &profile.member;
            println!("{} {}", profile.role_glyph, member.display_name());
            if let Some(birthday) = member.birthday {
                let age = profile.age.map(|a| format!(" (age {})", a)).unwrap_or_default();
                println!("  Birthday: {}{}", date::format_long(birthday), age);
            }
            for (label, value) in [
                ("Favorite food", &member.favorite_food),
                ("Hobby", &member.hobby),
                ("About", &member.introduction),
            ] {
                if !value.is_empty() {
                    println!("  {}: {}", label, value);
                }
            }
            if !profile.photos.is_empty() {
                println!("  Recent photos:");
                for photo in &profile.photos {
                    println!("    {} {}", date::format_ymd(photo.taken_date), photo.title);
                }
            }
        }
        MemberCommand::Activate { ids } => {
            let changed = family.set_active(&ids, true).await?;
            println!("{} member(s) shown", changed);
        }
        MemberCommand::Deactivate { ids } => {
            let changed = family.set_active(&ids, false).await?;
            println!("{} member(s) hidden", changed);
        }
    }
    Ok(())
}

async fn cmd_photos(app: &App, command: PhotoCommand) -> Result<()> {
    let gallery = GalleryService::new(&app.storage, &app.config);
    let icons = IconService::new(app.config.display.icon_theme);

    match command {
        PhotoCommand::List {
            search,
            tag,
            member,
            album,
            year,
            favorites,
            page,
        } => {
            let filter = PhotoFilter {
                search,
                tag,
                member,
                album,
                year,
                favorite_only: favorites,
            };
            let page = gallery.browse(&filter, page).await?;
            for photo in &page.items {
                let favorite = if photo.is_favorite { icons.favorite() } else { " " };
                println!(
                    "{} {} {:<30} {}",
                    favorite,
                    date::format_ymd(photo.taken_date),
                    text::truncate(&photo.title, 30),
                    photo.uuid
                );
            }
            println!("Page {}/{} ({} photos)", page.number, page.num_pages, page.total);
        }
        PhotoCommand::Add {
            title,
            file,
            size,
            taken,
            description,
            location,
            album,
            tags,
            members,
            private,
        } => {
            let upload = PhotoUpload {
                description,
                location,
                album,
                tags,
                members,
                is_public: !private,
                ..PhotoUpload::new(title, Upload::new(file, size), taken.unwrap_or_else(date::today))
            };
            let photo = gallery.upload(app.actor, &upload).await?;
            println!("{}: {} ({})", SUCCESS_PHOTO_UPLOADED, photo.title, photo.uuid);
        }
        PhotoCommand::Show { id } => {
            let detail = gallery.detail(&id).await?;
            let photo = &detail.photo;
            println!("{} ({})", photo.title, date::format_long(photo.taken_date));
            if !photo.location.is_empty() {
                println!("  {} {}", icons.location(), photo.location);
            }
            if let Some(album) = &detail.album {
                println!("  Album: {}", album.title);
            }
            if !detail.tags.is_empty() {
                let names: Vec<&str> = detail.tags.iter().map(|t| t.name.as_str()).collect();
                println!("  {} {}", icons.tag(), names.join(", "));
            }
            if !detail.members.is_empty() {
                let names: Vec<&str> = detail.members.iter().map(|m| m.name.as_str()).collect();
                println!("  With: {}", names.join(", "));
            }
            if !detail.related.is_empty() {
                println!("  Related:");
                for related in &detail.related {
                    println!("    {} {}", related.title, related.uuid);
                }
            }
        }
        PhotoCommand::Favorite { id } => {
            if gallery.toggle_favorite(&id).await? {
                println!("{}", SUCCESS_FAVORITE_ADDED);
            } else {
                println!("{}", SUCCESS_FAVORITE_REMOVED);
            }
        }
        PhotoCommand::Star { ids, off } => {
            let changed = gallery.set_favorites(&ids, !off).await?;
            println!("{} photo(s) updated", changed);
        }
        PhotoCommand::Publish { ids, private } => {
            let changed = gallery.set_public(&ids, !private).await?;
            let state = if private { "private" } else { "public" };
            println!("{} photo(s) now {}", changed, state);
        }
    }
    Ok(())
}

async fn cmd_albums(app: &App, command: AlbumCommand) -> Result<()> {
    let conn = &app.storage.conn;
    match command {
        AlbumCommand::List { search } => {
            for album in AlbumRepository::get_public(conn, search.as_deref()).await? {
                let count = AlbumRepository::photo_count(conn, &album.uuid).await?;
                println!("{:<30} {:>4} photos  {}", album.title, count, album.uuid);
            }
        }
        AlbumCommand::Add {
            title,
            description,
            private,
        } => {
            let gallery = GalleryService::new(&app.storage, &app.config);
            let album = gallery.create_album(app.actor, &title, &description, !private).await?;
            println!("Album created: {} ({})", album.title, album.uuid);
        }
    }
    Ok(())
}

async fn cmd_tags(app: &App, command: TagCommand) -> Result<()> {
    let conn = &app.storage.conn;
    match command {
        TagCommand::List => {
            for tag in TagRepository::get_all(conn).await? {
                let count = TagRepository::public_photo_count(conn, &tag.uuid).await?;
                let name = paint(&app.config, &tag.name, &tag.color);
                println!("{:<20} {:>4} photos  {}", name, count, tag.uuid);
            }
        }
        TagCommand::Add { name, color } => {
            let gallery = GalleryService::new(&app.storage, &app.config);
            let tag = gallery.create_tag(&name, color.as_deref()).await?;
            println!("{}: {} ({})", SUCCESS_TAG_CREATED, tag.name, tag.uuid);
        }
    }
    Ok(())
}

async fn cmd_categories(app: &App, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => {
            for (category, count) in CategoryRepository::with_event_counts(&app.storage.conn).await? {
                let label = paint(&app.config, &category.label(), &category.color);
                println!("{:<24} {:>4} events  {}", label, count, category.uuid);
            }
        }
        CategoryCommand::Add {
            name,
            emoji,
            color,
            description,
        } => {
            let calendar = CalendarService::new(&app.storage, &app.config);
            let category = calendar
                .create_category(&name, emoji.as_deref(), color.as_deref(), &description)
                .await?;
            println!("{}: {} ({})", SUCCESS_CATEGORY_CREATED, category.label(), category.uuid);
        }
    }
    Ok(())
}

async fn cmd_events(app: &App, command: EventCommand) -> Result<()> {
    let calendar = CalendarService::new(&app.storage, &app.config);
    let today = date::today();
    let presenter = calendar.presenter(today);
    let conn = &app.storage.conn;

    match command {
        EventCommand::List {
            search,
            category,
            participant,
            priority,
            from,
            to,
            upcoming,
            page,
        } => {
            let filter = EventFilter {
                search,
                category,
                participant,
                priority,
                date_from: from,
                date_to: to,
                upcoming_only: upcoming,
            };
            let overview = calendar.overview(today, &filter, page).await?;

            println!("{} Today", presenter.icons().today());
            print_events(app, &presenter, &overview.today).await?;
            println!("{} Later this week", presenter.icons().upcoming());
            print_events(app, &presenter, &overview.this_week).await?;
            println!("Events");
            print_events(app, &presenter, &overview.page.items).await?;
            println!(
                "Page {}/{} ({} events)",
                overview.page.number, overview.page.num_pages, overview.page.total
            );
        }
        EventCommand::Upcoming { days, json } => {
            let days = days.unwrap_or(app.config.events.upcoming_days);
            let items = calendar.upcoming_feed(today, days).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    let time = item.start_time.clone().unwrap_or_default();
                    let marker = if item.is_today { presenter.icons().today() } else { " " };
                    println!(
                        "{} {} {:<5} {} {} {}",
                        marker, item.start_date, time, item.category_emoji, item.title, item.priority_glyph
                    );
                }
            }
        }
        EventCommand::Show { id } => {
            let detail = calendar.detail(&id).await?;
            let view = presenter.present(&detail.event, &detail.participants);
            println!("{} {}", view.priority_glyph, paint(&app.config, &view.title, view.color));
            println!("  When: {} ({})", view.when, view.relative);
            if let Some(category) = &detail.category {
                println!("  Category: {}", category.label());
            }
            if !view.location.is_empty() {
                println!("  {} {}", presenter.icons().location(), view.location);
            }
            println!("  Participants: {}", view.participants);
            if view.is_recurring {
                let until = detail
                    .event
                    .repeat_until
                    .map(|d| format!(" until {}", presenter.format_date(d)))
                    .unwrap_or_default();
                println!("  {} {}{}", presenter.icons().recurring(), detail.event.repeat, until);
            }
            if detail.event.is_reminder_enabled {
                println!(
                    "  {} {} minutes before",
                    presenter.icons().reminder(),
                    detail.event.reminder_minutes
                );
            }
            if !detail.event.description.is_empty() {
                println!("\n{}", detail.event.description);
            }
            if !detail.related.is_empty() {
                println!("\nRelated:");
                print_events(app, &presenter, &detail.related).await?;
            }
        }
        EventCommand::Add(fields) => {
            let draft = fields.into_draft(&app.config);
            let event = report_rejection(calendar.create(app.actor, &draft).await)?;
            println!("{}: {} ({})", SUCCESS_EVENT_CREATED, event.title, event.uuid);
        }
        EventCommand::Update { id, fields } => {
            let draft = fields.into_draft(&app.config);
            let event = report_rejection(calendar.update(&id, &draft).await)?;
            println!("{}: {}", SUCCESS_EVENT_UPDATED, event.title);
        }
        EventCommand::Delete { id } => {
            let title = EventRepository::get_by_id(conn, &id).await?.map(|e| e.title);
            calendar.delete(&id).await?;
            println!("{}: {}", SUCCESS_EVENT_DELETED, title.unwrap_or_else(|| id.to_string()));
        }
        EventCommand::Remind { ids, off } => {
            let changed = calendar.set_reminders(&ids, !off).await?;
            println!("Reminders {} on {} event(s)", if off { "off" } else { "on" }, changed);
        }
        EventCommand::Prioritize { priority, ids } => {
            let changed = calendar.set_priority(&ids, priority).await?;
            println!("{} event(s) set to {}", changed, priority);
        }
    }
    Ok(())
}

/// Prefix input errors so the user knows nothing was saved
fn report_rejection<T>(result: Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.downcast_ref::<EventInputError>().is_some() {
            anyhow::anyhow!("{}: {}", ERROR_EVENT_REJECTED, e)
        } else {
            e
        }
    })
}

async fn print_events(app: &App, presenter: &EventPresenter, events: &[event::Model]) -> Result<()> {
    if events.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for event in events {
        let participants = EventRepository::participants_of(&app.storage.conn, &event.uuid).await?;
        let view = presenter.present(event, &participants);
        let line = format!("{:<28} {}", view.when, view.title);
        println!(
            "  {} {} [{}]",
            view.priority_glyph,
            paint(&app.config, &line, view.color),
            view.participants
        );
    }
    Ok(())
}

async fn cmd_dashboard(app: &App) -> Result<()> {
    let conn = &app.storage.conn;
    let today = date::today();
    let stats = dashboard::stats(conn, today).await?;

    println!("{}", app.config.family.app_name);
    println!("  👨‍👩‍👧‍👦 Members:  {}", stats.members);
    println!("  📷 Photos:   {}", stats.photos);
    println!("  📚 Albums:   {}", stats.albums);
    println!("  🏷️ Tags:     {}", stats.tags);
    println!("  📅 Events:   {} ({} upcoming)", stats.events, stats.upcoming_events);

    let members = MemberRepository::get_active(conn).await?;
    if !members.is_empty() {
        let icons = IconService::new(app.config.display.icon_theme);
        let names: Vec<String> = members
            .iter()
            .take(3)
            .map(|m| format!("{} {}", icons.role(m.role()), m.name))
            .collect();
        println!("\n{}", names.join("  "));
    }

    let calendar = CalendarService::new(&app.storage, &app.config);
    let presenter = calendar.presenter(today);
    let upcoming = EventRepository::search(
        conn,
        &EventFilter {
            upcoming_only: true,
            ..Default::default()
        },
        today,
    )
    .await?;
    let next: Vec<event::Model> = upcoming.into_iter().take(5).collect();
    println!("\nComing up");
    print_events(app, &presenter, &next).await
}

/// Color `text` with a stored hex color when colors are enabled
fn paint(config: &Config, text: &str, hex: &str) -> String {
    if config.display.use_colors {
        style(text).with(color::to_terminal_color(hex)).to_string()
    } else {
        text.to_string()
    }
}
