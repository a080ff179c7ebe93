use clap::Parser;

#[derive(Debug)]
struct CliError(String);

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> From<T> for CliError
where
    T: std::error::Error,
{
    fn from(e: T) -> Self {
        CliError(e.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(index = 1, help = "The WHERE predicate as JSON")]
    query: Option<String>,
    #[arg(short, long, help = "The sort specification as JSON")]
    sort: Option<String>,
    #[arg(
        short,
        long,
        help = "The name of the document table, default = kv_default"
    )]
    table: Option<String>,
    #[arg(
        short,
        long,
        help = "The column holding serialized document bodies, default = body"
    )]
    body_column: Option<String>,
}

fn main() -> Result<(), CliError> {
    let args = Cli::parse();

    let table = args.table.unwrap_or("kv_default".to_string());
    let body_column = args.body_column.unwrap_or("body".to_string());
    let translation = docql::translate_json(
        table.as_str(),
        body_column.as_str(),
        args.query.as_deref().map(str::as_bytes),
        args.sort.as_deref().map(str::as_bytes),
    )?;

    println!("WHERE:    {}", translation.where_clause);
    println!("FROM:     {}", translation.from_clause);
    println!("ORDER BY: {}", translation.order_by);
    for (n, name) in translation.fts_table_names.iter().enumerate() {
        println!("FTS{}:     {}", n + 1, name);
    }
    Ok(())
}
