//! Interactive console explorer for the house rental dataset.
//!
//! Usage: `rental-explorer [DATASET]` (defaults to `House_Rent_Dataset.json`, or
//! `$RENTAL_DATA_PATH`). Set `RUST_LOG=warn` to see skipped malformed fields.

use std::io::{self, BufRead, Lines, Write};

use anyhow::{Context, Result};
use rental_listings::app::{
    execute, paginate, render_page, render_rows, AppConfig, AppContext, Command, Outcome, PageNav,
};
use rental_listings::processing::{SortDirection, SortField};
use rental_listings::query::params::{
    parse_bhk, parse_furnishing, parse_percent, parse_rent_range, parse_search_inputs,
};
use rental_listings::ListingResult;

struct Console<R> {
    lines: Lines<R>,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    /// Print `question` and read one line. `None` once stdin is closed.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{question}");
        io::stdout().flush()?;
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}

/// What a menu wants the caller to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Stay,
    Back,
    Quit,
}

fn banner(title: &str, options: &[&str]) {
    println!("\n{}", "=".repeat(80));
    println!("{title:^80}");
    println!("{}", "=".repeat(80));
    for (i, option) in options.iter().enumerate() {
        println!("  {}: {option}", i + 1);
    }
    println!("{}", "=".repeat(80));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let path = config.data_path.clone();
    let ctx = AppContext::load(config)
        .with_context(|| format!("failed to load listings from {}", path.display()))?;

    if ctx.listings().is_empty() {
        println!("The dataset is empty.");
        return Ok(());
    }

    let mut console = Console::new(io::stdin().lock());
    main_menu(&ctx, &mut console)?;
    println!("Exiting...");
    Ok(())
}

fn main_menu<R: BufRead>(ctx: &AppContext, console: &mut Console<R>) -> Result<()> {
    loop {
        banner(
            "House Rental Information in India 2022",
            &[
                "Display all the data",
                "Sort on a specific field",
                "Filter data",
                "Search and update data",
                "Reports",
                "Exit",
            ],
        );
        let Some(choice) = console.ask("Choose an option: ")? else {
            return Ok(());
        };
        let flow = match choice.trim() {
            "1" => run(ctx, console, Ok(Command::DisplayAll))?,
            "2" => stay_in(ctx, console, sort_menu)?,
            "3" => stay_in(ctx, console, filter_menu)?,
            "4" => stay_in(ctx, console, search_menu)?,
            "5" => stay_in(ctx, console, report_menu)?,
            "6" | "0" => return Ok(()),
            _ => {
                println!("Invalid choice, please try again.");
                Flow::Stay
            }
        };
        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

/// Show `menu` again after each action until the user goes back or input ends.
fn stay_in<R: BufRead>(
    ctx: &AppContext,
    console: &mut Console<R>,
    menu: fn(&AppContext, &mut Console<R>) -> Result<Flow>,
) -> Result<Flow> {
    loop {
        match menu(ctx, console)? {
            Flow::Stay => continue,
            flow => return Ok(flow),
        }
    }
}

fn sort_menu<R: BufRead>(ctx: &AppContext, console: &mut Console<R>) -> Result<Flow> {
    banner(
        "SORT MENU",
        &[
            "Sort by Rent (Ascending)",
            "Sort by Rent (Descending)",
            "Sort by BHK (Ascending)",
            "Sort by BHK (Descending)",
            "Sort by House Size (Ascending)",
            "Sort by House Size (Descending)",
            "Return to Main Menu",
        ],
    );
    let Some(choice) = console.ask("Choose an option: ")? else {
        return Ok(Flow::Quit);
    };
    let (field, direction) = match choice.trim() {
        "1" => (SortField::Rent, SortDirection::Ascending),
        "2" => (SortField::Rent, SortDirection::Descending),
        "3" => (SortField::Bhk, SortDirection::Ascending),
        "4" => (SortField::Bhk, SortDirection::Descending),
        "5" => (SortField::Size, SortDirection::Ascending),
        "6" => (SortField::Size, SortDirection::Descending),
        "7" => return Ok(Flow::Back),
        _ => {
            println!("Invalid choice, please try again.");
            return Ok(Flow::Stay);
        }
    };
    run(ctx, console, Ok(Command::Sort(field, direction)))
}

fn filter_menu<R: BufRead>(ctx: &AppContext, console: &mut Console<R>) -> Result<Flow> {
    banner(
        "FILTER MENU",
        &[
            "Filter by City",
            "Filter by Rent Range",
            "Filter by BHK",
            "Return to Main Menu",
        ],
    );
    let Some(choice) = console.ask("Choose an option: ")? else {
        return Ok(Flow::Quit);
    };
    let command = match choice.trim() {
        "1" => match console.ask("Enter city name: ")? {
            Some(city) => Ok(Command::FilterCity(city)),
            None => return Ok(Flow::Quit),
        },
        "2" => {
            let (Some(min), Some(max)) = (console.ask("Enter min rent: ")?, console.ask("Enter max rent: ")?)
            else {
                return Ok(Flow::Quit);
            };
            parse_rent_range(&min, &max).map(|(min, max)| Command::FilterRentRange { min, max })
        }
        "3" => match console.ask("Enter BHK (e.g., 2 for 2BHK): ")? {
            Some(bhk) => parse_bhk(&bhk).map(Command::FilterBhk),
            None => return Ok(Flow::Quit),
        },
        "4" => return Ok(Flow::Back),
        _ => {
            println!("Invalid choice, please try again.");
            return Ok(Flow::Stay);
        }
    };
    run(ctx, console, command)
}

fn search_menu<R: BufRead>(ctx: &AppContext, console: &mut Console<R>) -> Result<Flow> {
    banner(
        "SEARCH MENU",
        &[
            "Apply Incremental Rent Increase and Display",
            "Filter by BHK and City",
            "Filter by Rent Range and Furnishing Status",
            "Advanced Search",
            "Filter Listings by City and Pick Certain Properties",
            "Group by BHK, sorted by House Size",
            "Return to Main Menu",
        ],
    );
    let Some(choice) = console.ask("Choose an option: ")? else {
        return Ok(Flow::Quit);
    };
    let command = match choice.trim() {
        "1" => match console.ask("Enter the percentage increase for rent: ")? {
            Some(raw) => parse_percent(&raw).map(|percent| Command::AdjustRent { percent }),
            None => return Ok(Flow::Quit),
        },
        "2" => {
            let (Some(bhk), Some(city)) = (
                console.ask("Enter BHK (e.g., 2 for 2BHK): ")?,
                console.ask("Enter City name: ")?,
            ) else {
                return Ok(Flow::Quit);
            };
            parse_bhk(&bhk).map(|bhk| Command::FilterBhkAndCity { bhk, city })
        }
        "3" => {
            let (Some(min), Some(max), Some(furnishing)) = (
                console.ask("Enter minimum rent: ")?,
                console.ask("Enter maximum rent: ")?,
                console.ask("Enter furnishing status (Furnished, Semi-Furnished, Unfurnished): ")?,
            ) else {
                return Ok(Flow::Quit);
            };
            rent_and_furnishing(&min, &max, &furnishing)
        }
        "4" => {
            let (Some(bhk), Some(city), Some(max_rent)) = (
                console.ask("Enter BHK (leave blank if not applicable): ")?,
                console.ask("Enter City (leave blank if not applicable): ")?,
                console.ask("Enter Maximum Rent (leave blank if not applicable): ")?,
            ) else {
                return Ok(Flow::Quit);
            };
            parse_search_inputs(&bhk, &city, &max_rent).map(Command::AdvancedSearch)
        }
        "5" => match console.ask("Enter the city name: ")? {
            Some(city) => Ok(Command::CityView(city)),
            None => return Ok(Flow::Quit),
        },
        "6" => Ok(Command::BhkSizeBreakdown),
        "7" => return Ok(Flow::Back),
        _ => {
            println!("Invalid choice, please try again.");
            return Ok(Flow::Stay);
        }
    };
    run(ctx, console, command)
}

fn rent_and_furnishing(min: &str, max: &str, furnishing: &str) -> ListingResult<Command> {
    let (min, max) = parse_rent_range(min, max)?;
    let furnishing = parse_furnishing(furnishing)?;
    Ok(Command::FilterRentAndFurnishing {
        min,
        max,
        furnishing,
    })
}

fn report_menu<R: BufRead>(ctx: &AppContext, console: &mut Console<R>) -> Result<Flow> {
    banner(
        "REPORTS MENU",
        &[
            "The Average rent in every City",
            "The Average rent per BHK Category",
            "The top cities with the most rentals",
            "The Maximum Rent for a BHK Category",
            "The number of listings in each City",
            "The listing with Maximum Size",
            "Percentage of each Furnishing Type in each city",
            "Return to Main Menu",
        ],
    );
    let Some(choice) = console.ask("Choose an option: ")? else {
        return Ok(Flow::Quit);
    };
    let command = match choice.trim() {
        "1" => Ok(Command::AverageRentByCity),
        "2" => Ok(Command::AverageRentByBhk),
        "3" => Ok(Command::TopCities),
        "4" => match console.ask("Enter BHK category (e.g., 2 for 2BHK): ")? {
            Some(raw) => parse_bhk(&raw).map(Command::MaxRentForBhk),
            None => return Ok(Flow::Quit),
        },
        "5" => Ok(Command::ListingCounts),
        "6" => Ok(Command::MaxSizeListing),
        "7" => Ok(Command::FurnishingDistribution),
        "8" => return Ok(Flow::Back),
        _ => {
            println!("Invalid choice, please try again.");
            return Ok(Flow::Stay);
        }
    };
    run(ctx, console, command)
}

/// Execute a parsed command and show its outcome; a rejected parameter is reported and the
/// current menu is shown again.
fn run<R: BufRead>(
    ctx: &AppContext,
    console: &mut Console<R>,
    command: ListingResult<Command>,
) -> Result<Flow> {
    let outcome = command.and_then(|c| execute(ctx, &c));
    match outcome {
        Ok(Outcome::Table { title, data }) => {
            if data.is_empty() {
                println!("No data to display");
                return Ok(Flow::Stay);
            }
            println!("{title}");
            let mut page = 1;
            loop {
                print!("{}", render_page(&data, ctx.config.page_size, page));
                let current = paginate(&data.rows, ctx.config.page_size, page);
                let Some(answer) = console.ask("Next page (n), Previous page (p), Main menu (m): ")?
                else {
                    return Ok(Flow::Quit);
                };
                match PageNav::parse(&answer) {
                    Some(PageNav::Next) if current.has_next() => page += 1,
                    Some(PageNav::Previous) if current.has_previous() => page -= 1,
                    Some(PageNav::Menu) => return Ok(Flow::Back),
                    _ => println!("Invalid choice."),
                }
            }
        }
        Ok(Outcome::Summary {
            title,
            headers,
            rows,
        }) => {
            println!("{title}:");
            print!("{}", render_rows(&headers, &rows));
        }
        Ok(Outcome::Message(message)) => println!("{message}"),
        Err(e) => println!("Invalid input: {e}"),
    }
    Ok(Flow::Stay)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rental_listings::types::ListingRecord;

    use super::*;

    fn ctx() -> AppContext {
        let listing = |city: &str, bhk: &str, rent: &str| ListingRecord {
            city: city.to_string(),
            bhk: bhk.to_string(),
            rent: rent.to_string(),
            size: "800".to_string(),
            ..Default::default()
        };
        AppContext::new(
            AppConfig::default(),
            vec![listing("Mumbai", "2", "30000"), listing("Delhi", "1", "12000")],
        )
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn invalid_choice_shows_the_same_submenu_again() {
        let mut input = console("9\n4\nafter\n");
        assert_eq!(stay_in(&ctx(), &mut input, filter_menu).unwrap(), Flow::Back);
        assert_eq!(input.ask("").unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn report_returns_to_its_submenu() {
        let mut input = console("1\n5\n8\nafter\n");
        assert_eq!(stay_in(&ctx(), &mut input, report_menu).unwrap(), Flow::Back);
        assert_eq!(input.ask("").unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn rejected_parameter_keeps_the_submenu() {
        let mut input = console("3\ntwo\n4\n");
        assert_eq!(stay_in(&ctx(), &mut input, filter_menu).unwrap(), Flow::Back);
    }

    #[test]
    fn main_menu_from_a_table_leaves_the_submenu() {
        let mut input = console("2\nm\nafter\n");
        assert_eq!(stay_in(&ctx(), &mut input, sort_menu).unwrap(), Flow::Back);
        assert_eq!(input.ask("").unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn closed_input_quits() {
        let mut input = console("9\n");
        assert_eq!(stay_in(&ctx(), &mut input, search_menu).unwrap(), Flow::Quit);
    }
}
