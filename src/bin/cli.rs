//! EcoTrack CLI
//!
//! Command-line client for the EcoTrack API:
//! - Submit eco-actions (with optional photo)
//! - View the leaderboard, category table, and progress report
//! - Set habit goals and share stories

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use clap::{Parser, Subcommand};
use ecotrack::api::dto::{
    ActionsResponse, AckResponse, CategoriesResponse, LeaderboardResponse, ProgressResponse,
    RecommendationsResponse, ResourcesResponse, SubmitActionResponse,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecotrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Eco-action tracker - log actions, earn points, grow your tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit an eco-action
    Submit {
        /// Free-text description of the action
        description: String,
        /// Category name (see `categories`)
        #[arg(short, long)]
        category: String,
        /// User name for the leaderboard (omit to stay anonymous)
        #[arg(short, long)]
        user: Option<String>,
        /// Photo file for the upload bonus (png/jpg/jpeg)
        #[arg(short, long)]
        photo: Option<PathBuf>,
    },

    /// Show recent logged actions
    Actions {
        /// Maximum number of entries
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the leaderboard
    Leaderboard,

    /// Show the category point table
    Categories,

    /// Show the progress report (total, growth stage, carbon impact)
    Progress,

    /// Set a habit goal
    Habit {
        /// Goal text, e.g. "Compost weekly"
        goal: String,
    },

    /// Share a community story
    Story {
        /// Story text
        text: String,
    },

    /// Show eco-friendly recommendations for a piece of text
    Recommend {
        /// Text to match keywords against
        text: String,
    },

    /// Show local sustainability resources
    Resources,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Submit {
            description,
            category,
            user,
            photo,
        } => {
            let photo_body = match photo {
                Some(path) => {
                    let bytes = std::fs::read(&path)?;
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    Some(serde_json::json!({
                        "filename": filename,
                        "data": BASE64.encode(bytes),
                    }))
                }
                None => None,
            };

            let body = serde_json::json!({
                "user": user,
                "description": description,
                "category": category,
                "photo": photo_body,
            });

            let response = client
                .post(format!("{}/api/v1/actions", cli.api_url))
                .json(&body)
                .send()
                .await?;

            if response.status().is_success() {
                let result: SubmitActionResponse = response.json().await?;
                println!(
                    "Logged: '{}' | Category: {} | Base: {} pts",
                    description, category, result.base_points
                );
                if result.tree_bonus > 0 {
                    println!("Tree planting bonus: +{} pts", result.tree_bonus);
                }
                if result.photo_bonus > 0 {
                    println!("Photo upload bonus: +{} pts", result.photo_bonus);
                }
                println!(
                    "Total points: {} | {} | -{} kg CO₂",
                    result.total_points, result.growth_label, result.carbon_impact_kg
                );
            } else {
                fail(response).await;
            }
        }

        Commands::Actions { limit } => {
            let response = client
                .get(format!("{}/api/v1/actions?limit={}", cli.api_url, limit))
                .send()
                .await?;

            if response.status().is_success() {
                let result: ActionsResponse = response.json().await?;
                if result.actions.is_empty() {
                    println!("No actions logged yet");
                }
                for action in result.actions {
                    let when = chrono::DateTime::from_timestamp_millis(action.timestamp)
                        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    let user = if action.user.is_empty() {
                        "(anonymous)"
                    } else {
                        action.user.as_str()
                    };
                    println!(
                        "{}  {:<20} {:>4} pts  [{}] {}",
                        when, user, action.points, action.category, action.description
                    );
                }
            } else {
                fail(response).await;
            }
        }

        Commands::Leaderboard => {
            let response = client
                .get(format!("{}/api/v1/leaderboard", cli.api_url))
                .send()
                .await?;

            if response.status().is_success() {
                let result: LeaderboardResponse = response.json().await?;
                if result.rows.is_empty() {
                    println!("Leaderboard is empty");
                }
                println!("{:<4} {:<24} {:>8}", "#", "User", "Points");
                for (rank, row) in result.rows.iter().enumerate() {
                    println!("{:<4} {:<24} {:>8}", rank + 1, row.user, row.points);
                }
            } else {
                fail(response).await;
            }
        }

        Commands::Categories => {
            let response = client
                .get(format!("{}/api/v1/categories", cli.api_url))
                .send()
                .await?;

            if response.status().is_success() {
                let result: CategoriesResponse = response.json().await?;
                println!("{:<40} {:>8}", "Category", "Points");
                for category in result.categories {
                    println!("{:<40} {:>8}", category.name, category.points);
                }
            } else {
                fail(response).await;
            }
        }

        Commands::Progress => {
            let response = client
                .get(format!("{}/api/v1/progress", cli.api_url))
                .send()
                .await?;

            if response.status().is_success() {
                let result: ProgressResponse = response.json().await?;
                println!("Total points: {}", result.total_points);
                println!("Growth stage: {}", result.growth_label);
                println!("Carbon impact: -{} kg CO₂", result.carbon_impact_kg);
            } else {
                fail(response).await;
            }
        }

        Commands::Habit { goal } => {
            let response = client
                .post(format!("{}/api/v1/habits", cli.api_url))
                .json(&serde_json::json!({ "goal": goal }))
                .send()
                .await?;

            if response.status().is_success() {
                let result: AckResponse = response.json().await?;
                println!("{}", result.message);
            } else {
                fail(response).await;
            }
        }

        Commands::Story { text } => {
            let response = client
                .post(format!("{}/api/v1/stories", cli.api_url))
                .json(&serde_json::json!({ "story": text }))
                .send()
                .await?;

            if response.status().is_success() {
                let result: AckResponse = response.json().await?;
                println!("{}", result.message);
            } else {
                fail(response).await;
            }
        }

        Commands::Recommend { text } => {
            let response = client
                .get(format!("{}/api/v1/recommendations", cli.api_url))
                .query(&[("q", text.as_str())])
                .send()
                .await?;

            if response.status().is_success() {
                let result: RecommendationsResponse = response.json().await?;
                if result.suggestions.is_empty() {
                    println!("No recommendations for that one");
                }
                for suggestion in result.suggestions {
                    println!("Recommended: {}", suggestion);
                }
            } else {
                fail(response).await;
            }
        }

        Commands::Resources => {
            let response = client
                .get(format!("{}/api/v1/resources", cli.api_url))
                .send()
                .await?;

            if response.status().is_success() {
                let result: ResourcesResponse = response.json().await?;
                println!("{:<28} {}", "Place", "Location");
                for resource in result.resources {
                    println!("{:<28} {}", resource.place, resource.location);
                }
            } else {
                fail(response).await;
            }
        }

        Commands::Config { output } => {
            let content = ecotrack::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Print an API error response and exit non-zero
async fn fail(response: reqwest::Response) -> ! {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    eprintln!("Failed ({}): {}", status, text);
    std::process::exit(1);
}
