fn main() {
    ridebus_cli::logging::init_logging();
    let code = ridebus_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
