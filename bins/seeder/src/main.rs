//! Database seeder for Stockroom development and testing.
//!
//! Seeds one user per role and a few sample products. Running it twice is
//! harmless: existing users are skipped, and products are only added to an
//! empty catalog.
//!
//! Usage: cargo run --bin seeder
//!
//! `SEED_PASSWORD` sets the password for every seeded user (default `changeme`).

use anyhow::Context;
use stockroom_core::auth::hash_password;
use stockroom_core::catalog::ProductDraft;
use stockroom_db::entities::sea_orm_active_enums::UserRole;
use stockroom_db::{ProductRepository, UserRepository};

const SEED_USERS: [(&str, UserRole); 3] = [
    ("admin", UserRole::Admin),
    ("manager", UserRole::Manager),
    ("staff", UserRole::Staff),
];

const SEED_PRODUCTS: [(&str, &str, i32); 4] = [
    ("Widget", "Hardware", 10),
    ("Hex Bolt M8", "Fasteners", 50),
    ("Cat6 Cable 2m", "Electrical", 20),
    ("Safety Gloves", "Protective Equipment", 5),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
    let password = std::env::var("SEED_PASSWORD").unwrap_or_else(|_| "changeme".to_string());

    println!("Connecting to database...");
    let db = stockroom_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding users...");
    let users = UserRepository::new(db.clone());
    let password_hash = hash_password(&password).context("Failed to hash seed password")?;
    for (username, role) in SEED_USERS {
        if users.username_exists(username).await? {
            println!("  User {username} already exists, skipping...");
            continue;
        }
        users.create(username, &password_hash, role).await?;
        println!("  Created user: {username} ({role:?})");
    }

    println!("Seeding products...");
    let products = ProductRepository::new(db);
    if products.list().await?.is_empty() {
        for (name, category, min_stock) in SEED_PRODUCTS {
            let created = products
                .create(&ProductDraft::new(name, category, min_stock))
                .await?;
            println!("  Created product: {} ({})", created.product.name, created.product.id);
        }
    } else {
        println!("  Catalog is not empty, skipping...");
    }

    println!("Seeding complete!");
    Ok(())
}
