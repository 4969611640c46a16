use clap::arg;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

/// Accept anything `Url` can parse, but keep the string exactly as typed.
fn url_argument(value: &str) -> Result<String, String> {
    Url::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid URL '{}': {}", value, e))
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("framecheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("framecheck")
        .about(
            "Probes URLs with HEAD requests and reports whether each page can be embedded in \
            an iframe, based on X-Frame-Options, CSP frame-ancestors and the site's domain.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("A URL to audit instead of the built-in list (repeatable)")
                .value_parser(url_argument)
                .action(clap::ArgAction::Append)
                .conflicts_with("hosts-file"),
        )
        .arg(
            arg!(-H --"hosts-file" <PATH>)
                .required(false)
                .help("Path to a newline-delimited file of URLs to audit")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .conflicts_with("url"),
        )
        .arg(
            arg!(-o --"output-dir" <DIR>)
                .required(false)
                .help("Directory receiving the JSON and CSV reports")
                .default_value("~"),
        )
        .arg(
            arg!(--"delay-ms" <MILLISECONDS>)
                .required(false)
                .help("Pause after every request, in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("500"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(
            arg!(-c --"concurrency" <NUM_REQUESTS>)
                .required(false)
                .help("Maximum number of requests in flight. Results keep the input order.")
                .value_parser(clap::value_parser!(u16).range(1..))
                .default_value("1"),
        )
        .arg(
            arg!(-q --"quiet" "Show a progress bar instead of one line per URL").required(false),
        )
        .arg(arg!(-v --"verbose" "Log request details to stderr").required(false))
}
