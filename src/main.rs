fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = storemigrate::interfaces::cli::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
