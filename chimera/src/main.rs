use chimera_tracing::println_red_err;

fn main() {
    if let Err(err) = chimera::cli::run_cli() {
        println_red_err(&format!("{err:#}"));
        std::process::exit(1);
    }
}
