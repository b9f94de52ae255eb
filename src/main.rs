use anyhow::Context;
use app_catalog::server;
use app_catalog::store::catalog::CatalogStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Parses the command line (past the program name) into the bind address
/// and the optional search deadline. Unknown arguments are ignored; a flag
/// missing its value is an error rather than a panic.
fn parse_args(args: &[String]) -> anyhow::Result<(SocketAddr, Option<Duration>)> {
    let mut bind_addr: SocketAddr = "127.0.0.1:8888".parse()?;
    let mut search_timeout: Option<Duration> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .context("--bind requires an <addr:port> value")?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--search-timeout-ms" => {
                let value = args
                    .get(i + 1)
                    .context("--search-timeout-ms requires a millisecond count")?;
                search_timeout = Some(Duration::from_millis(value.parse()?));
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok((bind_addr, search_timeout))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: {} [--bind <addr:port>] [--search-timeout-ms <n>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:8888", args[0]);
        std::process::exit(0);
    }

    let (bind_addr, search_timeout) = parse_args(&args[1..])?;

    // 1. Catalog store:
    let store = Arc::new(match search_timeout {
        Some(deadline) => {
            tracing::info!("Search deadline set to {:?}", deadline);
            CatalogStore::with_search_deadline(deadline)
        }
        None => CatalogStore::new(),
    });

    // 2. HTTP Router:
    let app = server::router(store);

    // 3. Start HTTP server:
    tracing::info!("Catalog server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_args;
    use std::time::Duration;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_apply_without_arguments() {
        let (bind_addr, search_timeout) = parse_args(&[]).unwrap();

        assert_eq!(bind_addr, "127.0.0.1:8888".parse().unwrap());
        assert!(search_timeout.is_none());
    }

    #[test]
    fn test_bind_and_timeout_are_parsed() {
        let (bind_addr, search_timeout) = parse_args(&args(&[
            "--bind",
            "0.0.0.0:9000",
            "--search-timeout-ms",
            "250",
        ]))
        .unwrap();

        assert_eq!(bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(search_timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_trailing_flag_without_value_is_an_error() {
        assert!(parse_args(&args(&["--bind"])).is_err());
        assert!(parse_args(&args(&["--search-timeout-ms"])).is_err());
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(parse_args(&args(&["--bind", "not-an-address"])).is_err());
        assert!(parse_args(&args(&["--search-timeout-ms", "soon"])).is_err());
    }
}
