use dist_plot::{adapters, engine::runner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let file_path = adapters::cli::parse_file_path_from_cli_args();

    if let Err(e) = runner::run(&file_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
