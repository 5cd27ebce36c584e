//! Basic usage example

use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    // Required: loaded from DATABASE_URL
    #[environment = "DATABASE_URL"]
    pub database_url: String,

    // With default value
    #[environment = "SERVER_ADDR, 127.0.0.1:8080"]
    pub server_addr: String,

    // Numeric type, converted by the registered u32 parser
    #[environment = "MAX_CONNECTIONS, 10"]
    pub max_connections: u32,

    // Not annotated: left as is
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    envfill::use_parser(envfill::parser::from_str::<u32>);

    print!("Variables read:\n{}", envfill::requirements::<Config>());

    let mut config = Config {
        build_id: "local".to_string(),
        ..Default::default()
    };
    envfill::populate(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Build ID: {}", config.build_id);

    Ok(())
}
