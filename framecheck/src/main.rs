use colored::Colorize;
use framecheck::commands::command_argument_builder;
use framecheck::handlers::handle_audit;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    if let Err(e) = handle_audit(&matches).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
