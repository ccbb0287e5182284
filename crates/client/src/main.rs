//! todos-client CLI entry point.

use clap::Parser;
use todos_client::cli::{Cli, Commands, OutputFormat};
use todos_client::output::{format_output, pretty};
use todos_client::TodosClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodosClient::new(&cli.base_url);

    match cli.command {
        Commands::List => {
            let todos = client.list_todos().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
            }
        }
        Commands::Get { id } => {
            let todo = client.get_todo(id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todo(&todo)),
            }
        }
        Commands::Create { name } => {
            let id = client.create_todo(&name).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&id, cli.format)),
                OutputFormat::Pretty => println!("Created todo {}", id),
            }
        }
        Commands::Update { id, name } => {
            let todo = client.update_todo(id, &name).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_todo(&todo)),
            }
        }
        Commands::Delete { id } => {
            client.delete_todo(id).await?;
            if !cli.quiet {
                println!("Deleted todo {}", id);
            }
        }
        Commands::DeleteAll => {
            client.delete_all_todos().await?;
            if !cli.quiet {
                println!("Deleted all todos");
            }
        }
    }

    Ok(())
}
