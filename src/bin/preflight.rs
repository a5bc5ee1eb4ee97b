use contact_book::infra::{Config, StoreBackend};
use contact_book::ContactStore;
use contact_book::PostgresContactStore;
use sqlx::postgres::PgPoolOptions;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-table]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (unless STORE_BACKEND=memory)\n\
         Optional:\n\
           STORE_BACKEND, DB_MAX_CONNECTIONS, BIND_ADDR, SEED_CONTACTS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let create_table = args.iter().any(|a| a == "--create-table");

    // Force-read config (nice error messages if something is missing)
    let config = Config::load()?;

    println!("> Preflight:");
    println!("  STORE_BACKEND={:?}", config.store_backend);
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);
    println!("  SEED_CONTACTS={}", config.seed_contacts);

    if config.store_backend == StoreBackend::Memory {
        println!("  In-memory store selected; nothing to check.");
        println!("> Preflight OK.");
        return Ok(());
    }

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(config.database_url()?)
        .await
        .map_err(|e| anyhow::anyhow!("Could not connect to DATABASE_URL: {}", e))?;
    let store = PostgresContactStore::new(pool.clone());
    store.ping().await?;
    println!("  Database reachable.");

    let table_exists: bool = sqlx::query_scalar("SELECT to_regclass('public.contacts') IS NOT NULL")
        .fetch_one(&pool)
        .await?;
    if table_exists {
        println!("  Table `contacts` exists.");
    } else if create_table {
        println!("  Table `contacts` missing -> creating...");
        store.ensure_schema().await?;
        println!("  Table created.");
    } else {
        return Err(anyhow::anyhow!(
            "Table `contacts` does not exist. Re-run with --create-table (the API server also creates it on startup)"
        ));
    }

    let count = store.find_all().await?.len();
    println!("  Contacts stored: {}", count);

    println!("> Preflight OK.");
    Ok(())
}
