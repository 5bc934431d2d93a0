use anyhow::{bail, Context, Result};
use std::env;

use member_jdbc::{init_tracing, ConnectionProvider, DbConfig, Member, MemberRepository};

// The repository never touches the schema; the caller owns it.
const CREATE_MEMBER_TABLE: &str = "create table if not exists member (
    member_id varchar(10) primary key,
    money integer not null default 0
)";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let debug = args.iter().any(|arg| arg == "--debug");
    let member_id = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "memberA".to_string());

    init_tracing(debug)?;

    let config = DbConfig::from_env();
    println!("Member JDBC v{}", member_jdbc::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Database: {} (user {})", config.url, config.username);

    let provider = ConnectionProvider::new(config);
    ensure_schema(&provider)?;

    run_crud(&MemberRepository::new(provider), &member_id)
}

fn ensure_schema(provider: &ConnectionProvider) -> Result<()> {
    let conn = provider.get_connection()?;
    conn.execute(CREATE_MEMBER_TABLE, [])
        .context("Failed to create member table")?;
    Ok(())
}

fn run_crud(repository: &MemberRepository, member_id: &str) -> Result<()> {
    // 1. Save
    let member = Member::new(member_id, 10000);
    repository
        .save(&member)
        .with_context(|| format!("Failed to save {}", member_id))?;
    println!("\n1. save      → {}", member);

    // 2. Find
    let found = repository.find_by_id(member_id)?;
    println!("2. findById  → {}", found);
    if found != member {
        bail!("read back {} but saved {}", found, member);
    }

    // 3. Update
    let affected = repository.update(member_id, 20000)?;
    let updated = repository.find_by_id(member_id)?;
    println!("3. update    → {} ({} row)", updated, affected);

    // 4. Delete
    repository.delete(member_id)?;
    match repository.find_by_id(member_id) {
        Err(err) if err.is_not_found() => println!("4. delete    → {}", err),
        Err(err) => return Err(err.into()),
        Ok(still_there) => bail!("{} still present after delete", still_there),
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ CRUD round trip complete");

    Ok(())
}
