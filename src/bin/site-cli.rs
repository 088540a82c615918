use clap::{Parser, Subcommand};
use probox_site::http::status::{ModuleReport, StatusReport};
use reqwest::redirect::Policy;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspect a running ProBox site server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server status
    Status,
    /// List page modules and their load state
    Modules {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Request a page and report how the server answered
    Visit {
        /// Location to visit, e.g. /services
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = reqwest::get(format!("{}/_site/status", base)).await?;
            if !res.status().is_success() {
                eprintln!("Error: status endpoint returned {}", res.status());
                return Ok(());
            }
            let report: StatusReport = res.json().await?;
            println!(
                "{} v{}: {} (uptime {}s, {} sessions)",
                report.name, report.version, report.status, report.uptime_secs, report.sessions
            );
        }
        Commands::Modules { json } => {
            let res = reqwest::get(format!("{}/_site/modules", base)).await?;
            if json {
                let value: Value = res.json().await?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let modules: Vec<ModuleReport> = res.json().await?;
                println!("{:<18} {:<18} {:<9} {:>8} {:>8}", "MODULE", "PATH", "STATUS", "LOAD_MS", "ATTEMPTS");
                for m in modules {
                    println!(
                        "{:<18} {:<18} {:<9} {:>8} {:>8}",
                        m.key.as_str(),
                        m.path.as_deref().unwrap_or("*"),
                        format!("{:?}", m.status).to_lowercase(),
                        m.load_ms.map(|ms| ms.to_string()).unwrap_or_else(|| "-".into()),
                        m.attempts
                    );
                    if let Some(error) = m.error {
                        println!("    error: {}", error);
                    }
                }
            }
        }
        Commands::Visit { path } => {
            let client = reqwest::Client::builder()
                .cookie_store(true)
                .redirect(Policy::none())
                .build()?;
            let res = client.get(format!("{}{}", base, path)).send().await?;
            let status = res.status();
            let request_id = header(&res, "x-request-id");
            let refresh = header(&res, "refresh");
            let location = header(&res, "location");
            let body = res.text().await?;
            let title = body
                .split_once("<title>")
                .and_then(|(_, rest)| rest.split_once("</title>"))
                .map(|(title, _)| title.to_string())
                .unwrap_or_default();

            println!("{} {}", status.as_u16(), path);
            println!("  request id: {}", request_id);
            if !title.is_empty() {
                println!("  title:      {}", title);
            }
            if !refresh.is_empty() {
                println!("  loading:    refresh in {}s", refresh);
            }
            if !location.is_empty() {
                println!("  redirect:   {}", location);
            }
        }
    }

    Ok(())
}

fn header(res: &reqwest::Response, name: &str) -> String {
    res.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
