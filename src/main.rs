use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

use svastha::calculators::{bmi, body_fat};
use svastha::catalog;
use svastha::form::{FormController, SubmitError, SubmitOutcome};
use svastha::forms::{BodyFatForm, BookForm, MoodForm, ReadingForm, SleepForm};
use svastha::models::sleep::parse_hhmm;
use svastha::models::{Gender, SleepQuality};
use svastha::settings::ProfileSettings;
use svastha::AppState;

#[derive(Parser)]
#[command(name = "svastha", about = "Local-first wellness tracking and body metrics")]
struct Cli {
    /// Directory for the database and settings (defaults to the platform
    /// data directory).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Body-mass index from height and weight.
    Bmi {
        #[arg(long)]
        height_cm: f64,
        #[arg(long)]
        weight_kg: f64,
    },
    /// U.S. Navy body-fat estimate; --save appends it to the history.
    Bodyfat(BodyfatArgs),
    /// Sleep tracker.
    Sleep {
        #[command(subcommand)]
        action: SleepAction,
    },
    /// Mood check-ins.
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },
    /// Book shelf.
    Book {
        #[command(subcommand)]
        action: BookAction,
    },
    /// Reading sessions.
    Reading {
        #[command(subcommand)]
        action: ReadingAction,
    },
    /// Show or update the stored profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Look up the anatomy reference catalog.
    Anatomy {
        /// System or entry name; omit to list all systems.
        name: Option<String>,
    },
}

#[derive(Args)]
struct BodyfatArgs {
    /// male or female (defaults to the profile).
    #[arg(long)]
    gender: Option<Gender>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    height_cm: Option<f64>,
    #[arg(long)]
    weight_kg: f64,
    #[arg(long)]
    neck_cm: f64,
    #[arg(long)]
    waist_cm: f64,
    #[arg(long)]
    hip_cm: Option<f64>,
    /// Entry date, YYYY-MM-DD (defaults to today).
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Append the measurement to the body-fat history.
    #[arg(long)]
    save: bool,
}

#[derive(Subcommand)]
enum SleepAction {
    /// Log one night.
    Log {
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Bed time, 24-hour HH:MM.
        #[arg(long)]
        bed: String,
        /// Wake time, 24-hour HH:MM. At or before the bed time means the
        /// night crossed midnight.
        #[arg(long)]
        wake: String,
        /// poor, fair, good or excellent.
        #[arg(long)]
        quality: SleepQuality,
        #[arg(long, default_value_t = 0)]
        awakenings: u32,
    },
    /// List the retained sessions, newest first.
    List,
    /// Delete a session by id.
    Delete { id: String },
}

#[derive(Subcommand)]
enum MoodAction {
    /// Log a mood rating from 1 (low) to 5 (high).
    Log {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        mood: u8,
        #[arg(long)]
        note: Option<String>,
    },
    List,
    Delete { id: String },
}

#[derive(Subcommand)]
enum BookAction {
    /// Add a book to the shelf.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        pages: Option<u32>,
    },
    List,
    /// Delete a book and all of its reading logs.
    Delete { id: String },
}

#[derive(Subcommand)]
enum ReadingAction {
    /// Log a reading session against a book.
    Log {
        #[arg(long)]
        book: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        pages: u32,
        #[arg(long)]
        note: Option<String>,
    },
    /// List reading logs, optionally for one book.
    List {
        #[arg(long)]
        book: Option<String>,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        height_cm: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .map(|dir| dir.join("svastha"))
            .context("could not determine a data directory; pass --data-dir")?,
    };
    let state = AppState::init(data_dir)?;

    match cli.command {
        Command::Bmi { height_cm, weight_kg } => run_bmi(height_cm, weight_kg),
        Command::Bodyfat(args) => run_bodyfat(&state, args),
        Command::Sleep { action } => run_sleep(&state, action),
        Command::Mood { action } => run_mood(&state, action),
        Command::Book { action } => run_book(&state, action),
        Command::Reading { action } => run_reading(&state, action),
        Command::Profile { action } => run_profile(&state, action),
        Command::Anatomy { name } => run_anatomy(name.as_deref()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_time(label: &str, value: &str) -> Result<NaiveTime> {
    parse_hhmm(value).with_context(|| format!("{label} must be a 24-hour HH:MM time"))
}

/// Prints each field error inline and produces the generic failure.
fn fail_validation(errors: svastha::validate::ValidationErrors) -> anyhow::Error {
    for (field, message) in errors.iter() {
        eprintln!("  {field}: {message}");
    }
    anyhow::anyhow!("validation failed")
}

/// Unpacks a submission outcome: success yields the value, everything else
/// is printed the way its kind demands and turned into a failed exit.
fn finish<T>(outcome: SubmitOutcome<T>) -> Result<T> {
    match outcome {
        SubmitOutcome::Succeeded(value) => Ok(value),
        SubmitOutcome::Invalid(errors) => Err(fail_validation(errors)),
        SubmitOutcome::Computation(err) => bail!("{err}"),
        SubmitOutcome::Failed(message) => bail!("submission failed: {message}"),
        SubmitOutcome::Ignored => bail!("a submission is already in progress"),
    }
}

fn run_bmi(height_cm: f64, weight_kg: f64) -> Result<()> {
    let input = bmi::BmiInput { height_cm, weight_kg };
    if let Err(errors) = input.validate() {
        return Err(fail_validation(errors));
    }
    let outcome = bmi::compute(&input)?;
    view_result("BMI", "", &outcome, bmi::BMI_CATEGORIES)
}

fn run_bodyfat(state: &AppState, args: BodyfatArgs) -> Result<()> {
    let profile = state.settings.profile();
    let gender = args
        .gender
        .or(profile.gender)
        .context("gender is required (pass --gender or set the profile)")?;
    let age = args
        .age
        .or(profile.age)
        .context("age is required (pass --age or set the profile)")?;
    let height_cm = args
        .height_cm
        .or(profile.height_cm)
        .context("height is required (pass --height-cm or set the profile)")?;

    let mut form = BodyFatForm {
        gender,
        age,
        height_cm,
        weight_kg: args.weight_kg,
        neck_cm: args.neck_cm,
        waist_cm: args.waist_cm,
        hip_cm: args.hip_cm,
    };
    let mut controller = FormController::new();

    if args.save {
        let tracker = state.body_fat();
        let date = args.date.unwrap_or_else(today);
        let measurement = finish(controller.submit(&mut form, |form| {
            tracker.record(&form.input(), date).map_err(SubmitError::from)
        }))?;
        println!(
            "Recorded {:.1}% ({}) for {}",
            measurement.body_fat_pct, measurement.category, measurement.date
        );
        Ok(())
    } else {
        let outcome = finish(controller.submit(&mut form, |form| {
            body_fat::compute(&form.input()).map_err(SubmitError::from)
        }))?;
        view_result("Body fat", "%", &outcome, body_fat::category_table(gender))
    }
}

fn run_sleep(state: &AppState, action: SleepAction) -> Result<()> {
    let tracker = state.sleep();
    match action {
        SleepAction::Log {
            date,
            bed,
            wake,
            quality,
            awakenings,
        } => {
            let mut form = SleepForm {
                date: date.unwrap_or_else(today),
                bed_time: parse_time("bed", &bed)?,
                wake_time: parse_time("wake", &wake)?,
                quality,
                awakenings,
            };
            let mut controller = FormController::new();
            let session = finish(controller.submit(&mut form, |form| {
                tracker.log_night(&form.input()).map_err(SubmitError::from)
            }))?;
            println!(
                "Logged {} min of sleep, score {:.0}",
                session.duration_minutes, session.score
            );
            Ok(())
        }
        SleepAction::List => view_list("Sleep sessions", &tracker.sessions()),
        SleepAction::Delete { id } => report_delete(tracker.delete(&id)?),
    }
}

fn run_mood(state: &AppState, action: MoodAction) -> Result<()> {
    let tracker = state.mood();
    match action {
        MoodAction::Log { date, mood, note } => {
            let mut form = MoodForm {
                date: date.unwrap_or_else(today),
                mood,
                note,
            };
            let mut controller = FormController::new();
            let entry = finish(controller.submit(&mut form, |form| {
                tracker.log(&form.input()).map_err(SubmitError::from)
            }))?;
            println!("Logged mood {}/5 for {}", entry.mood, entry.date);
            Ok(())
        }
        MoodAction::List => view_list("Mood entries", &tracker.entries()),
        MoodAction::Delete { id } => report_delete(tracker.delete(&id)?),
    }
}

fn run_book(state: &AppState, action: BookAction) -> Result<()> {
    let tracker = state.reading();
    match action {
        BookAction::Add { title, author, pages } => {
            let mut form = BookForm {
                title,
                author,
                total_pages: pages,
            };
            let mut controller = FormController::new();
            let book = finish(controller.submit(&mut form, |form| {
                tracker.add_book(&form.input()).map_err(SubmitError::from)
            }))?;
            println!("Added '{}' (id={})", book.title, book.id);
            Ok(())
        }
        BookAction::List => view_list("Books", &tracker.books()),
        BookAction::Delete { id } => report_delete(tracker.delete_book(&id)?),
    }
}

fn run_reading(state: &AppState, action: ReadingAction) -> Result<()> {
    let tracker = state.reading();
    match action {
        ReadingAction::Log {
            book,
            date,
            pages,
            note,
        } => {
            let mut form = ReadingForm {
                book_id: book,
                date: date.unwrap_or_else(today),
                pages_read: pages,
                note,
            };
            let mut controller = FormController::new();
            let log = finish(controller.submit(&mut form, |form| {
                tracker.log_reading(&form.input()).map_err(SubmitError::from)
            }))?;
            println!("Logged {} pages (id={})", log.pages_read, log.id);
            Ok(())
        }
        ReadingAction::List { book } => match book {
            Some(book_id) => view_list("Reading logs", &tracker.logs_for(&book_id)),
            None => view_list("Reading logs", &tracker.logs()),
        },
        ReadingAction::Delete { id } => report_delete(tracker.delete_log(&id)?),
    }
}

fn run_profile(state: &AppState, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => {
            let profile = state.settings.profile();
            println!(
                "gender: {}",
                profile.gender.map(|g| g.as_str()).unwrap_or("unset")
            );
            match profile.age {
                Some(age) => println!("age: {age}"),
                None => println!("age: unset"),
            }
            match profile.height_cm {
                Some(height) => println!("height: {height} cm"),
                None => println!("height: unset"),
            }
            Ok(())
        }
        ProfileAction::Set { gender, age, height_cm } => {
            let current = state.settings.profile();
            let updated = ProfileSettings {
                gender: gender.or(current.gender),
                age: age.or(current.age),
                height_cm: height_cm.or(current.height_cm),
            };
            state.settings.update_profile(updated)?;
            println!("Profile updated");
            Ok(())
        }
    }
}

fn run_anatomy(name: Option<&str>) -> Result<()> {
    match name {
        None => {
            for system in catalog::SYSTEMS {
                println!("{}: {}", system.name, system.summary);
            }
            Ok(())
        }
        Some(name) => {
            if let Some(system) = catalog::find_system(name) {
                println!("{}: {}", system.name, system.summary);
                for entry in system.entries {
                    print_entry(entry);
                }
                return Ok(());
            }
            if let Some(entry) = catalog::find_entry(name) {
                print_entry(entry);
                return Ok(());
            }
            bail!("no system or entry named '{name}'");
        }
    }
}

fn print_entry(entry: &catalog::AnatomyEntry) {
    match entry {
        catalog::AnatomyEntry::Component { name, role } => println!("  {name}: {role}"),
        catalog::AnatomyEntry::Gland { name, role, hormones } => {
            println!("  {name}: {role} (hormones: {})", hormones.join(", "));
        }
    }
}

fn view_result(
    title: &str,
    unit: &str,
    outcome: &svastha::calculators::CalcOutcome,
    table: svastha::calculators::CategoryTable,
) -> Result<()> {
    let stdout = io::stdout();
    svastha::view::render_result(&mut stdout.lock(), title, unit, outcome, table)?;
    Ok(())
}

fn view_list(title: &str, items: &[impl svastha::view::ListItem]) -> Result<()> {
    let stdout = io::stdout();
    svastha::view::render_list(&mut stdout.lock(), title, items)?;
    Ok(())
}

fn report_delete(removed: bool) -> Result<()> {
    if removed {
        println!("Deleted");
        Ok(())
    } else {
        bail!("no entry with that id");
    }
}
