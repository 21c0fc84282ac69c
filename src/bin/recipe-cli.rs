use clap::{Parser, Subcommand};
use recipe_sdk::{NewRecipe, RecipeClient};

#[derive(Parser)]
#[command(name = "recipe-cli")]
#[command(about = "Command-line client for the recipe service", long_about = None)]
struct Cli {
    #[arg(short, long, env = "RECIPES_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe
    List,
    /// Add a recipe
    Add {
        #[arg(short, long)]
        title: String,

        /// Ingredient; repeat for each one
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Instructions; repeat to give numbered steps
        #[arg(short = 's', long = "step", required = true)]
        steps: Vec<String>,

        #[arg(long)]
        cook_time: Option<String>,

        #[arg(short, long)]
        difficulty: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RecipeClient::new(&cli.url);

    match cli.command {
        Commands::List => {
            let recipes = client.list_recipes().await?;
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        }
        Commands::Add {
            title,
            ingredients,
            mut steps,
            cook_time,
            difficulty,
        } => {
            let instructions = if steps.len() == 1 {
                serde_json::Value::String(steps.remove(0))
            } else {
                serde_json::json!(steps)
            };
            let recipe = NewRecipe {
                title: Some(title),
                ingredients: Some(ingredients),
                instructions: Some(instructions),
                cook_time,
                difficulty,
            };

            let created = client.create_recipe(&recipe).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
    }

    Ok(())
}
