use colored::*;
use seeder::seed::{SeedPlan, run_plan};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    let outcome = run_plan(&db, &SeedPlan::standard()).await;

    // Close before surfacing any step failure so the connection is released
    // exactly once on every exit path. The close result never masks a step
    // error.
    if let Err(close_err) = db.close().await {
        eprintln!("{} {close_err}", "Failed to close connection:".red());
    }

    if let Err(e) = outcome {
        eprintln!("{} {e}", "Seeding failed:".red());
        std::process::exit(1);
    }
}
