use clap::Subcommand;
use tripkit::Store;
use tripkit_shared::{
    mealplan::MealType,
    recipe::{Aisle, IngredientUnit},
};
use tripkit_shopping::list;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GroceriesCommand {
    /// Rebuild the grocery list from a trip (replaces the current list)
    Generate {
        /// Trip identifier
        #[arg(long)]
        trip: String,
    },
    /// Add recipes to the current grocery list without replacing it
    QuickPack {
        /// Recipe identifiers
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Meal the recipes are packed for
        #[arg(long, default_value = "dinner")]
        meal: MealType,
    },
    /// Print the grocery list
    List,
    /// Check or uncheck an item
    Toggle { id: Uuid },
    /// Uncheck every item
    Reset,
    /// Remove checked items
    ClearChecked,
    /// Add an item by hand
    Add {
        name: String,

        #[arg(long)]
        quantity: Option<f64>,

        /// Unit name or symbol (g, ml, tbsp, ...)
        #[arg(long)]
        unit: Option<IngredientUnit>,

        /// Guessed from the name when omitted
        #[arg(long)]
        aisle: Option<Aisle>,
    },
}

#[tracing::instrument(skip_all)]
pub fn run(config: tripkit::Config, command: GroceriesCommand) -> anyhow::Result<()> {
    let mut store = Store::open(&config.store.path)?;

    match command {
        GroceriesCommand::Generate { trip } => {
            let count = store.generate_groceries(&trip)?;
            store.save()?;
            println!("{count} items on the grocery list");
        }
        GroceriesCommand::QuickPack { recipes, meal } => {
            let today = chrono::Local::now().date_naive();
            let count = store.quick_pack(&recipes, meal, today);
            store.save()?;
            println!("{count} items on the grocery list");
        }
        GroceriesCommand::List => print_list(&store),
        GroceriesCommand::Toggle { id } => {
            let checked = list::toggle(store.groceries_mut(), id)?;
            store.save()?;
            println!("{}", if checked { "checked" } else { "unchecked" });
        }
        GroceriesCommand::Reset => {
            let changed = list::reset(store.groceries_mut());
            store.save()?;
            println!("{changed} items unchecked");
        }
        GroceriesCommand::ClearChecked => {
            let removed = list::clear_checked(store.groceries_mut());
            store.save()?;
            println!("{removed} items removed");
        }
        GroceriesCommand::Add {
            name,
            quantity,
            unit,
            aisle,
        } => {
            let item = list::add_manual(store.groceries_mut(), &name, quantity, unit, aisle)?;
            let (name, aisle) = (item.name.clone(), item.aisle.label());
            store.save()?;
            println!("{name} added to {aisle}");
        }
    }

    Ok(())
}

fn print_list(store: &Store) {
    let items = store.groceries();
    if items.is_empty() {
        println!("The grocery list is empty");
        return;
    }

    for item in items {
        println!(
            "[{}] {:>10}  {:<30} {:<12} {}",
            if item.is_checked { "x" } else { " " },
            item.display_quantity(),
            item.name,
            item.aisle.label(),
            item.id
        );
    }
}
