use std::env;
use std::path::PathBuf;
use anyhow::Context;
use saltkey_core::{Options, SecurityAuditor};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    saltkey_core::init();

    let file = env::args().nth(1).map(PathBuf::from);
    let options = Options::load(file.as_deref())
        .context("Failed to resolve password hashing options")?;

    println!("Saltkey Password Hashing Configuration:\n");
    println!("{}", serde_json::to_string_pretty(&options)?);
    println!();
    print!("{}", SecurityAuditor::generate_security_report(&options));
    Ok(())
}
